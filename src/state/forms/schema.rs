//! Validation schema for the rename form

use crate::state::UpdateProviderPayload;
use thiserror::Error;

/// Field name of the alias input
pub const ALIAS_FIELD: &str = "alias";
/// Field name of the hidden provider id input
pub const PROVIDER_ID_FIELD: &str = "providerId";

/// Constraint applied to a single string field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Any string, including empty
    Any,
    /// Must contain at least one non-whitespace character
    NonBlank,
}

impl FieldRule {
    fn check(self, field: &str, value: &str) -> Result<(), FieldError> {
        match self {
            FieldRule::Any => Ok(()),
            FieldRule::NonBlank if value.trim().is_empty() => Err(FieldError {
                field: field.to_string(),
                message: "Required".to_string(),
            }),
            FieldRule::NonBlank => Ok(()),
        }
    }
}

/// Validation failure on one field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// All field failures from one validation pass
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} invalid field(s)", .errors.len())]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn for_field(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }
}

/// Unsaved edit state of the rename form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub alias_input: String,
    pub entity_id: String,
}

/// A draft that passed the schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDraft {
    provider_id: String,
    alias: String,
}

impl ValidatedDraft {
    #[cfg(test)]
    pub fn provider_id(&self) -> &str {
        &self.provider_id
    }

    #[cfg(test)]
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Serialize into the mutation payload
    pub fn into_payload(self) -> UpdateProviderPayload {
        UpdateProviderPayload {
            id: self.provider_id,
            alias: self.alias,
        }
    }
}

/// Shape and constraints of the rename submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameSchema {
    alias: FieldRule,
    provider_id: FieldRule,
}

impl Default for RenameSchema {
    fn default() -> Self {
        Self {
            alias: FieldRule::Any,
            provider_id: FieldRule::NonBlank,
        }
    }
}

impl RenameSchema {
    /// Schema with the alias optionally required to be non-blank
    pub fn new(require_alias: bool) -> Self {
        Self {
            alias: if require_alias {
                FieldRule::NonBlank
            } else {
                FieldRule::Any
            },
            ..Self::default()
        }
    }

    /// Check a single field value. Unknown names pass.
    pub fn validate_field(&self, name: &str, value: &str) -> Result<(), FieldError> {
        match name {
            ALIAS_FIELD => self.alias.check(name, value),
            PROVIDER_ID_FIELD => self.provider_id.check(name, value),
            _ => Ok(()),
        }
    }

    pub fn validate(&self, draft: &Draft) -> Result<ValidatedDraft, ValidationErrors> {
        let errors: Vec<FieldError> = [
            (PROVIDER_ID_FIELD, draft.entity_id.as_str()),
            (ALIAS_FIELD, draft.alias_input.as_str()),
        ]
        .into_iter()
        .filter_map(|(name, value)| self.validate_field(name, value).err())
        .collect();

        if !errors.is_empty() {
            return Err(ValidationErrors { errors });
        }

        Ok(ValidatedDraft {
            provider_id: draft.entity_id.clone(),
            alias: draft.alias_input.clone(),
        })
    }
}
