//! Submit handler: validate, mutate, notify
//!
//! A submission runs in its own task so the UI keeps drawing while the
//! mutation is in flight. The outcome is published as a notification and then
//! handed back to the UI loop, which returns the owning form to idle.

use crate::backend::ProviderClientTrait;
use crate::notifications::{Notification, Notifier};
use crate::state::{MutationResult, RenameDialog, UpdateProviderPayload, ValidationErrors};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

pub const SUCCESS_TITLE: &str = "Success!";
pub const SUCCESS_DESCRIPTION: &str = "The provider was updated successfully.";
pub const FAILURE_TITLE: &str = "Oops! Something went wrong";
pub const TRANSPORT_FAULT_DESCRIPTION: &str = "Could not reach the server. Please try again.";

/// When the dialog closes relative to the mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseBehavior {
    /// Close as soon as the submission starts
    #[default]
    Optimistic,
    /// Close only after a successful update; failures keep it open
    OnSuccess,
}

/// How a submission ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Updated,
    /// The service reported errors; only the first is kept
    Rejected { detail: String },
    /// No result was obtained
    TransportFault,
}

impl SubmissionOutcome {
    pub fn classify(result: Result<MutationResult>) -> Self {
        match result {
            Ok(result) if result.is_success() => Self::Updated,
            Ok(result) => {
                if result.errors.len() > 1 {
                    tracing::debug!(
                        dropped = result.errors.len() - 1,
                        "Only the first mutation error is shown"
                    );
                }
                Self::Rejected {
                    detail: result.first_error().unwrap_or_default().to_string(),
                }
            }
            Err(e) => {
                tracing::error!("Provider update failed: {e:#}");
                Self::TransportFault
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Updated)
    }

    pub fn notification(&self) -> Notification {
        match self {
            Self::Updated => Notification::info(SUCCESS_TITLE, SUCCESS_DESCRIPTION),
            Self::Rejected { detail } => Notification::error(FAILURE_TITLE, detail.clone()),
            Self::TransportFault => Notification::error(FAILURE_TITLE, TRANSPORT_FAULT_DESCRIPTION),
        }
    }
}

/// A resolved submission, delivered back to the UI loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionCompleted {
    pub form_id: Uuid,
    pub payload: UpdateProviderPayload,
    pub outcome: SubmissionOutcome,
}

/// Result of pressing submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStart {
    /// The mutation is in flight
    Started,
    /// A submission for this form is already in flight; nothing was sent
    AlreadySubmitting,
    /// The draft failed validation; nothing was sent
    Invalid(ValidationErrors),
    /// No form is open
    NoForm,
}

/// Orchestrates the request lifecycle of the rename form
pub struct SubmitHandler {
    client: Arc<dyn ProviderClientTrait>,
    notifier: Notifier,
    close_behavior: CloseBehavior,
    completed_tx: mpsc::UnboundedSender<SubmissionCompleted>,
    completed_rx: mpsc::UnboundedReceiver<SubmissionCompleted>,
}

impl SubmitHandler {
    pub fn new(
        client: Arc<dyn ProviderClientTrait>,
        notifier: Notifier,
        close_behavior: CloseBehavior,
    ) -> Self {
        let (completed_tx, completed_rx) = mpsc::unbounded_channel();
        Self {
            client,
            notifier,
            close_behavior,
            completed_tx,
            completed_rx,
        }
    }

    /// Submit the dialog's form. Must be called within a Tokio runtime.
    pub fn submit(&self, dialog: &mut RenameDialog) -> SubmitStart {
        let close_now = self.close_behavior == CloseBehavior::Optimistic;
        let Some(form) = dialog.form_mut() else {
            return SubmitStart::NoForm;
        };

        if form.is_submitting() {
            tracing::debug!(form_id = %form.id(), "Submission already in flight");
            return SubmitStart::AlreadySubmitting;
        }

        let validated = match form.validate() {
            Ok(validated) => validated,
            Err(errors) => {
                tracing::debug!(form_id = %form.id(), "Rename form invalid: {errors}");
                return SubmitStart::Invalid(errors);
            }
        };

        form.begin_submit();
        let form_id = form.id();
        let payload = validated.into_payload();

        if close_now {
            dialog.close();
        }

        tracing::info!(%form_id, provider_id = %payload.id, "Submitting provider rename");
        tracing::debug!(fields = ?payload.form_fields(), "Rename payload");

        let client = Arc::clone(&self.client);
        let notifier = self.notifier.clone();
        let completed_tx = self.completed_tx.clone();
        tokio::spawn(async move {
            let outcome = SubmissionOutcome::classify(client.update_provider(&payload).await);
            notifier.emit(outcome.notification());
            // The receiver lives as long as the handler; a send error means the app is exiting
            let _ = completed_tx.send(SubmissionCompleted {
                form_id,
                payload,
                outcome,
            });
        });

        SubmitStart::Started
    }

    /// Apply every completion that has arrived, without waiting
    pub fn poll_completions(&mut self, dialog: &mut RenameDialog) -> Vec<SubmissionCompleted> {
        let mut completed = Vec::new();
        while let Ok(done) = self.completed_rx.try_recv() {
            self.apply(dialog, &done);
            completed.push(done);
        }
        completed
    }

    /// Wait for the next completion and apply it
    #[cfg(test)]
    pub async fn next_completion(
        &mut self,
        dialog: &mut RenameDialog,
    ) -> Option<SubmissionCompleted> {
        let done = self.completed_rx.recv().await?;
        self.apply(dialog, &done);
        Some(done)
    }

    fn apply(&self, dialog: &mut RenameDialog, done: &SubmissionCompleted) {
        tracing::info!(form_id = %done.form_id, outcome = ?done.outcome, "Submission resolved");

        let Some(form) = dialog.form_with_id_mut(done.form_id) else {
            tracing::debug!(form_id = %done.form_id, "Form was replaced before resolution");
            return;
        };
        form.end_submit();

        if self.close_behavior == CloseBehavior::OnSuccess && done.outcome.is_success() {
            dialog.close();
        }
    }
}
