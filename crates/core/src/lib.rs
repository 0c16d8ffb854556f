//! Domain logic for the forms and approvals service.
//!
//! This crate has no internal dependencies and no I/O. It defines the error
//! taxonomy, the request/approval state machines, the typed format schema and
//! approval flow, the audit action vocabulary, and the PDF document renderer.

pub mod audit;
pub mod error;
pub mod flow;
pub mod pdf;
pub mod roles;
pub mod schema;
pub mod status;
pub mod types;
