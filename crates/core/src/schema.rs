//! Typed format schema.
//!
//! A format's `schema` column is a JSON document describing the input fields
//! of the form plus an optional embedded approval flow. It is parsed and
//! validated here once, at format save time, instead of being duck-typed at
//! every read site.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::flow::ApprovalFlow;

/// The type of a single form field, tagged by the `type` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Textarea,
    Number,
    Date,
    Checkbox,
    Select { options: Vec<String> },
}

/// One input field of a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Key under which the captured value is stored in a request's `data`.
    pub name: String,
    /// Human-readable label shown by the presentation layer.
    pub label: String,
    #[serde(flatten)]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
}

/// A format's full schema: field definitions plus the optional approval flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatSchema {
    pub fields: Vec<FieldDef>,
    #[serde(
        rename = "approvalFlow",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub approval_flow: Option<ApprovalFlow>,
}

impl FormatSchema {
    /// Parse a schema from its stored JSON representation.
    pub fn parse(value: &serde_json::Value) -> Result<Self, CoreError> {
        serde_json::from_value(value.clone())
            .map_err(|e| CoreError::Validation(format!("invalid format schema: {e}")))
    }

    /// Validate a schema at format save time.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.fields.is_empty() {
            return Err(CoreError::Validation(
                "format schema must define at least one field".into(),
            ));
        }
        let mut seen = std::collections::HashSet::new();
        for field in &self.fields {
            if field.name.trim().is_empty() {
                return Err(CoreError::Validation(
                    "format field names must not be empty".into(),
                ));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(CoreError::Validation(format!(
                    "duplicate format field name '{}'",
                    field.name
                )));
            }
            if let FieldType::Select { options } = &field.field_type {
                if options.is_empty() {
                    return Err(CoreError::Validation(format!(
                        "select field '{}' must define at least one option",
                        field.name
                    )));
                }
            }
        }
        if let Some(flow) = &self.approval_flow {
            flow.validate()?;
        }
        Ok(())
    }

    /// Resolve this schema's approval flow, degrading to the default
    /// single-step flow when none is embedded.
    pub fn resolve_flow(&self) -> ApprovalFlow {
        self.approval_flow
            .clone()
            .unwrap_or_else(ApprovalFlow::default_flow)
    }
}

/// Resolve the approval flow from a raw schema JSON document.
///
/// Absence or malformation degrades to the default flow rather than erroring:
/// submission must never be blocked by a format-level flow problem. Validated
/// schemas never hit the malformed branch; this guard covers rows written
/// before schema validation existed.
pub fn resolve_flow_from_value(schema: &serde_json::Value) -> ApprovalFlow {
    match schema.get("approvalFlow") {
        Some(raw) => serde_json::from_value::<ApprovalFlow>(raw.clone())
            .ok()
            .filter(|flow| !flow.steps.is_empty())
            .unwrap_or_else(ApprovalFlow::default_flow),
        None => ApprovalFlow::default_flow(),
    }
}
