//! Request middleware and extractors (authentication, RBAC).

pub mod auth;
pub mod rbac;
