//! Form domain layer
//!
//! Type-safe form handling for the rename dialog: field values, the
//! validation schema and the submission state machine.

mod field;
mod rename_form;
mod schema;

pub use field::FormField;
pub use rename_form::{RenameFocus, RenameForm};
pub use schema::{RenameSchema, ValidationErrors};

#[cfg(test)]
pub use rename_form::SubmissionStatus;
#[cfg(test)]
pub use schema::ALIAS_FIELD;
