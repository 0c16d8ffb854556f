//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Multi-row state transitions
//! (submission, approval decisions) live in [`crate::workflow`] instead,
//! because they need a transaction.

pub mod approval_repo;
pub mod audit_repo;
pub mod document_repo;
pub mod format_repo;
pub mod request_repo;
pub mod signature_repo;

pub use approval_repo::ApprovalRepo;
pub use audit_repo::AuditLogRepo;
pub use document_repo::DocumentRepo;
pub use format_repo::FormatRepo;
pub use request_repo::RequestRepo;
pub use signature_repo::SignatureRepo;

/// Clamp a caller-supplied limit into a sane range.
pub(crate) fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(50).clamp(1, 200)
}

/// Clamp a caller-supplied offset to be non-negative.
pub(crate) fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
