//! HTTP handlers, one module per resource.

pub mod approval;
pub mod audit;
pub mod document;
pub mod format;
pub mod request;
pub mod signature;
