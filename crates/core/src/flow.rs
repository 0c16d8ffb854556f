//! Approval flow value types.
//!
//! A flow is not a stored entity; it is computed from a format's schema when
//! a request is submitted. Formats without an embedded flow fall back to a
//! single `coordinator` step, so submission is never blocked by a missing or
//! malformed flow definition.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::roles::ROLE_COORDINATOR;

/// One step of an approval flow. Step numbers need not be contiguous; they
/// are the ordering key for display and instantiation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowStep {
    pub step: i32,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An ordered sequence of approval steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalFlow {
    pub steps: Vec<FlowStep>,
}

impl ApprovalFlow {
    /// The fallback flow used when a format defines none: one `coordinator`
    /// step.
    pub fn default_flow() -> Self {
        ApprovalFlow {
            steps: vec![FlowStep {
                step: 1,
                role: ROLE_COORDINATOR.to_string(),
                description: None,
            }],
        }
    }

    /// Validate a flow at format save time.
    ///
    /// Requires at least one step, positive step numbers, unique step numbers
    /// (the approvals table is unique on `(request_id, step)`), and non-empty
    /// role names.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.steps.is_empty() {
            return Err(CoreError::Validation(
                "approval flow must have at least one step".into(),
            ));
        }
        let mut seen = std::collections::HashSet::new();
        for step in &self.steps {
            if step.step < 1 {
                return Err(CoreError::Validation(format!(
                    "approval flow step numbers must be positive, got {}",
                    step.step
                )));
            }
            if !seen.insert(step.step) {
                return Err(CoreError::Validation(format!(
                    "duplicate approval flow step number {}",
                    step.step
                )));
            }
            if step.role.trim().is_empty() {
                return Err(CoreError::Validation(format!(
                    "approval flow step {} has an empty role",
                    step.step
                )));
            }
        }
        Ok(())
    }
}
