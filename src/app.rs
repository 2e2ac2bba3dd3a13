//! Application state and core logic

use crate::backend::ProviderClientTrait;
use crate::config::AppConfig;
use crate::notifications::{Notification, Notifier};
use crate::state::{AppState, Provider, RenameFocus, RenameSchema, ToastQueue};
use crate::submit::{SubmissionOutcome, SubmitHandler, SubmitStart};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::broadcast::{self, error::TryRecvError};

/// Braille spinner frames for the saving indicator
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAME_MS: u128 = 80;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Runs rename submissions against the provider service
    submitter: SubmitHandler,
    /// Subscription to the process-wide notification channel
    notifications: broadcast::Receiver<Notification>,
    /// Schema used for each new form instance
    schema: RenameSchema,
    /// Whether the app should quit
    quit: bool,
    /// Reference point for animations
    started_at: Instant,
}

impl App {
    /// Create a new App instance
    pub fn new(
        provider: Provider,
        client: Arc<dyn ProviderClientTrait>,
        notifier: &Notifier,
        config: &AppConfig,
    ) -> Self {
        let toasts = ToastQueue::new(config.max_visible_toasts(), config.toast_duration_ms());
        Self {
            state: AppState::new(provider, toasts),
            submitter: SubmitHandler::new(client, notifier.clone(), config.close_behavior()),
            notifications: notifier.subscribe(),
            schema: RenameSchema::new(config.require_alias()),
            quit: false,
            started_at: Instant::now(),
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Current frame of the saving spinner
    pub fn spinner_frame(&self) -> &'static str {
        let elapsed = self.started_at.elapsed().as_millis();
        let idx = (elapsed / SPINNER_FRAME_MS) as usize % SPINNER_FRAMES.len();
        SPINNER_FRAMES[idx]
    }

    /// Per-frame housekeeping: resolve submissions, collect notifications,
    /// expire toasts
    pub fn tick(&mut self) {
        for done in self.submitter.poll_completions(&mut self.state.dialog) {
            if done.outcome == SubmissionOutcome::Updated {
                self.state.apply_rename(&done.payload.id, &done.payload.alias);
            }
        }
        self.drain_notifications();
        self.state.toasts.tick();
    }

    fn drain_notifications(&mut self) {
        loop {
            match self.notifications.try_recv() {
                Ok(notification) => self.state.toasts.push(notification),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!("Skipped {skipped} notifications");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
    }

    /// Open the rename dialog with a fresh draft
    pub fn open_dialog(&mut self) {
        self.state.status_message = None;
        self.state.dialog.open(&self.state.provider, self.schema.clone());
    }

    /// Close the dialog without submitting. Disabled while submitting.
    pub fn cancel_dialog(&mut self) {
        if self.state.dialog.is_submitting() {
            return;
        }
        self.state.dialog.close();
    }

    /// Press the save button
    pub fn submit(&mut self) {
        match self.submitter.submit(&mut self.state.dialog) {
            SubmitStart::Started => self.state.status_message = None,
            SubmitStart::Invalid(errors) => {
                self.state.status_message = Some(format!("Cannot save: {errors}"));
            }
            SubmitStart::AlreadySubmitting | SubmitStart::NoForm => {}
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.state.dialog.is_visible() {
            self.handle_dialog_key(key);
        } else {
            self.handle_main_key(key);
        }
    }

    /// Handle keys on the provider screen
    fn handle_main_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('e') | KeyCode::Enter => self.open_dialog(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    /// Handle keys in the rename dialog
    fn handle_dialog_key(&mut self, key: KeyEvent) {
        let Some(form) = self.state.dialog.form_mut() else {
            return;
        };

        match key.code {
            KeyCode::Tab => form.next_focus(),
            KeyCode::BackTab => form.prev_focus(),
            // Save (Ctrl+S or Cmd+W / Ctrl+W)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Char('w') if key.modifiers.contains(crate::platform::SAVE_MODIFIER) => {
                self.submit()
            }
            KeyCode::Esc => self.cancel_dialog(),
            KeyCode::Enter => {
                let focus = form.focus;
                match focus {
                    RenameFocus::Cancel => self.cancel_dialog(),
                    RenameFocus::Alias | RenameFocus::Save => self.submit(),
                }
            }
            KeyCode::Char(c)
                if form.focus == RenameFocus::Alias
                    && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                // Input is disabled while submitting
                let _ = form.push_char(c);
            }
            KeyCode::Backspace if form.focus == RenameFocus::Alias => {
                let _ = form.pop_char();
            }
            _ => {}
        }
    }
}
