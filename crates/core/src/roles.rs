//! Well-known role name constants.
//!
//! Roles arrive in the `role` claim of the bearer token; approval flow steps
//! reference them by name. `coordinator` is the fallback single-step flow's
//! role, so it must exist in any deployment.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_COORDINATOR: &str = "coordinator";
pub const ROLE_DIRECTOR: &str = "director";
pub const ROLE_REQUESTER: &str = "requester";
