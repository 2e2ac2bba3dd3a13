//! Rename form state: draft, focus and submission status

use super::field::FormField;
use super::schema::{
    Draft, RenameSchema, ValidatedDraft, ValidationErrors, ALIAS_FIELD, PROVIDER_ID_FIELD,
};
use crate::state::Provider;
use thiserror::Error;
use uuid::Uuid;

/// Whether a submission is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
}

/// Focusable elements of the rename dialog, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenameFocus {
    #[default]
    Alias,
    Cancel,
    Save,
}

impl RenameFocus {
    pub fn next(self) -> Self {
        match self {
            Self::Alias => Self::Cancel,
            Self::Cancel => Self::Save,
            Self::Save => Self::Alias,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Alias => Self::Save,
            Self::Cancel => Self::Alias,
            Self::Save => Self::Cancel,
        }
    }
}

/// Errors from editing the form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("form is read-only while submitting")]
    Submitting,
}

/// Form state for renaming one provider
#[derive(Debug, Clone)]
pub struct RenameForm {
    id: Uuid,
    schema: RenameSchema,
    provider_id: FormField,
    alias: FormField,
    current_alias: Option<String>,
    status: SubmissionStatus,
    pub focus: RenameFocus,
}

impl RenameForm {
    /// Fresh form for a provider. The alias input starts empty with the
    /// current alias as its placeholder.
    pub fn new(provider: &Provider, schema: RenameSchema) -> Self {
        Self {
            id: Uuid::new_v4(),
            schema,
            provider_id: FormField::hidden(PROVIDER_ID_FIELD, provider.id.clone()),
            alias: FormField::text(ALIAS_FIELD, "Alias").with_placeholder(provider.alias.clone()),
            current_alias: provider.alias.clone(),
            status: SubmissionStatus::Idle,
            focus: RenameFocus::default(),
        }
    }

    /// Identifies this form instance across submissions
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn current_alias(&self) -> Option<&str> {
        self.current_alias.as_deref()
    }

    pub fn alias_field(&self) -> &FormField {
        &self.alias
    }

    pub fn provider_id_field(&self) -> &FormField {
        &self.provider_id
    }

    #[cfg(test)]
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn draft(&self) -> Draft {
        Draft {
            alias_input: self.alias.value.clone(),
            entity_id: self.provider_id.value.clone(),
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        match name {
            ALIAS_FIELD => Some(&mut self.alias),
            PROVIDER_ID_FIELD => Some(&mut self.provider_id),
            _ => None,
        }
    }

    /// Update a field and re-run its validation
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        if self.is_submitting() {
            return Err(FormError::Submitting);
        }
        let value = value.into();
        let check = self.schema.validate_field(name, &value);
        let field = self
            .field_mut(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        field.set_text(value);
        field.error = check.err().map(|e| e.message);
        Ok(())
    }

    /// Type a character into the alias input
    pub fn push_char(&mut self, c: char) -> Result<(), FormError> {
        let value = self.alias.with_char(c);
        self.set_field(ALIAS_FIELD, value)
    }

    /// Delete the last character of the alias input
    pub fn pop_char(&mut self) -> Result<(), FormError> {
        let value = self.alias.without_last_char();
        self.set_field(ALIAS_FIELD, value)
    }

    #[cfg(test)]
    pub fn field_error(&self, name: &str) -> Option<&str> {
        match name {
            ALIAS_FIELD => self.alias.error.as_deref(),
            PROVIDER_ID_FIELD => self.provider_id.error.as_deref(),
            _ => None,
        }
    }

    /// Validate the whole draft, refreshing inline errors
    pub fn validate(&mut self) -> Result<ValidatedDraft, ValidationErrors> {
        let result = self.schema.validate(&self.draft());
        let errors = result.as_ref().err();
        for name in [ALIAS_FIELD, PROVIDER_ID_FIELD] {
            let message = errors
                .and_then(|e| e.for_field(name))
                .map(|e| e.message.clone());
            if let Some(field) = self.field_mut(name) {
                field.error = message;
            }
        }
        result
    }

    /// Enter the submitting state. Returns false if already submitting.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.status = SubmissionStatus::Submitting;
        true
    }

    /// Return to idle regardless of how the submission ended
    pub fn end_submit(&mut self) {
        self.status = SubmissionStatus::Idle;
    }

    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_focus(&mut self) {
        self.focus = self.focus.prev();
    }
}
