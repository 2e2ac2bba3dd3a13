//! Application state definitions

use super::{Provider, RenameDialog, ToastQueue};

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Provider being edited
    pub provider: Provider,
    /// Rename dialog chrome and its form
    pub dialog: RenameDialog,
    /// Notifications currently on screen
    pub toasts: ToastQueue,
    /// One-line message shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(provider: Provider, toasts: ToastQueue) -> Self {
        Self {
            provider,
            toasts,
            ..Self::default()
        }
    }

    /// Record a confirmed rename so the host screen shows the new alias
    pub fn apply_rename(&mut self, provider_id: &str, alias: &str) {
        if self.provider.id == provider_id {
            self.provider = Provider::new(provider_id, Some(alias.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_rename_updates_matching_provider() {
        let mut state = AppState::new(Provider::new("p1", None), ToastQueue::default());
        state.apply_rename("p1", "prod");
        assert_eq!(state.provider.alias.as_deref(), Some("prod"));
    }

    #[test]
    fn test_apply_rename_ignores_other_provider() {
        let mut state = AppState::new(
            Provider::new("p1", Some("staging".to_string())),
            ToastQueue::default(),
        );
        state.apply_rename("p2", "prod");
        assert_eq!(state.provider.alias.as_deref(), Some("staging"));
    }

    #[test]
    fn test_apply_rename_to_empty_clears_alias() {
        let mut state = AppState::new(
            Provider::new("p1", Some("staging".to_string())),
            ToastQueue::default(),
        );
        state.apply_rename("p1", "");
        assert!(state.provider.alias.is_none());
        assert_eq!(state.provider.display_name(), "p1");
    }
}
