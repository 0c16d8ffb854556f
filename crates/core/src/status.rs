//! Request and approval status state machines.
//!
//! Statuses are stored as TEXT columns; the enums here are the single source
//! of truth for the allowed values and transitions. Repositories convert at
//! the boundary via `as_str` / `parse`.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lifecycle status of a request: `draft -> in_review -> {approved | rejected}`.
///
/// There is no transition back to `draft` and no further mutation once a
/// terminal status is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Draft,
    InReview,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Draft => "draft",
            RequestStatus::InReview => "in_review",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "draft" => Ok(RequestStatus::Draft),
            "in_review" => Ok(RequestStatus::InReview),
            "approved" => Ok(RequestStatus::Approved),
            "rejected" => Ok(RequestStatus::Rejected),
            other => Err(CoreError::Internal(format!(
                "unknown request status '{other}' in database"
            ))),
        }
    }

    /// Only drafts may have their captured data edited.
    pub const fn can_edit(self) -> bool {
        matches!(self, RequestStatus::Draft)
    }

    /// Only drafts may be submitted for review.
    pub const fn can_submit(self) -> bool {
        matches!(self, RequestStatus::Draft)
    }

    /// Approval decisions are only accepted while the request is in review.
    pub const fn accepts_decisions(self) -> bool {
        matches!(self, RequestStatus::InReview)
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, RequestStatus::Approved | RequestStatus::Rejected)
    }
}

/// Status of a single approval step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "pending" => Ok(ApprovalStatus::Pending),
            "approved" => Ok(ApprovalStatus::Approved),
            "rejected" => Ok(ApprovalStatus::Rejected),
            other => Err(CoreError::Internal(format!(
                "unknown approval status '{other}' in database"
            ))),
        }
    }
}

/// A reviewer's decision on an approval step. Unlike [`ApprovalStatus`] this
/// has no pending state: a decision is always one or the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approved,
    Rejected,
}

impl Decision {
    pub const fn as_approval_status(self) -> ApprovalStatus {
        match self {
            Decision::Approved => ApprovalStatus::Approved,
            Decision::Rejected => ApprovalStatus::Rejected,
        }
    }
}
