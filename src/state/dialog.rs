//! Rename dialog visibility and the form instance it hosts

use super::forms::{RenameForm, RenameSchema};
use super::Provider;
use uuid::Uuid;

/// Dialog chrome state. Visibility is tracked separately from the form so a
/// submission can outlive the dialog being closed.
#[derive(Debug, Clone, Default)]
pub struct RenameDialog {
    visible: bool,
    form: Option<RenameForm>,
}

impl RenameDialog {
    /// Open the dialog with a new form instance, discarding any previous draft
    pub fn open(&mut self, provider: &Provider, schema: RenameSchema) {
        let form = RenameForm::new(provider, schema);
        tracing::debug!(form_id = %form.id(), provider_id = %provider.id, "Opening rename dialog");
        self.form = Some(form);
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn form(&self) -> Option<&RenameForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut RenameForm> {
        self.form.as_mut()
    }

    /// The form, but only if it is still the instance with the given id
    pub fn form_with_id_mut(&mut self, id: Uuid) -> Option<&mut RenameForm> {
        self.form.as_mut().filter(|f| f.id() == id)
    }

    pub fn is_submitting(&self) -> bool {
        self.form.as_ref().is_some_and(RenameForm::is_submitting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> Provider {
        Provider::new("p1", Some("staging".to_string()))
    }

    #[test]
    fn test_default_dialog_is_closed_without_form() {
        let dialog = RenameDialog::default();
        assert!(!dialog.is_visible());
        assert!(dialog.form().is_none());
        assert!(!dialog.is_submitting());
    }

    #[test]
    fn test_open_creates_visible_form() {
        let mut dialog = RenameDialog::default();
        dialog.open(&provider(), RenameSchema::default());
        assert!(dialog.is_visible());
        assert_eq!(dialog.form().unwrap().provider_id_field().as_text(), "p1");
    }

    #[test]
    fn test_close_keeps_form() {
        let mut dialog = RenameDialog::default();
        dialog.open(&provider(), RenameSchema::default());
        dialog.form_mut().unwrap().begin_submit();
        dialog.close();
        assert!(!dialog.is_visible());
        assert!(dialog.is_submitting());
    }

    #[test]
    fn test_reopen_discards_draft() {
        let mut dialog = RenameDialog::default();
        dialog.open(&provider(), RenameSchema::default());
        let first_id = dialog.form().unwrap().id();
        dialog.form_mut().unwrap().push_char('x').unwrap();

        dialog.open(&provider(), RenameSchema::default());
        let form = dialog.form().unwrap();
        assert_eq!(form.alias_field().as_text(), "");
        assert!(dialog.form_with_id_mut(first_id).is_none());
    }
}
