//! Vibe session use case

use std::sync::Mutex as StdMutex;

use thiserror::Error;
use tokio::sync::Mutex;

use crate::domain::history::Translation;
use crate::domain::session::{InvalidStateTransition, SubmissionGate};
use crate::domain::vibe::{Direction, Era};

use super::history::HistoryStore;
use super::ports::{Clipboard, HistoryStorage, StorageError, StyleTransformer};
use super::transform::{TransformError, TransformService};

/// Errors from a submission
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Another submission is still pending; this one was ignored
    #[error("A translation is already in progress")]
    Busy(#[from] InvalidStateTransition),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Input parameters for a submission
#[derive(Debug, Clone)]
pub struct SubmitInput {
    pub text: String,
    pub era: Era,
    pub direction: Direction,
    /// Whether to copy the translated text to the clipboard
    pub enable_clipboard: bool,
}

/// Output of a successful submission
#[derive(Debug, Clone)]
pub struct SubmitOutput {
    /// The new history entry
    pub translation: Translation,
    /// Whether the history was written to storage
    pub persisted: bool,
    /// Whether clipboard copy succeeded (if enabled)
    pub clipboard_copied: bool,
}

/// Releases the gate when a submission ends, including when the
/// submitting future is dropped mid-request.
struct PendingSubmission<'a> {
    gate: &'a StdMutex<SubmissionGate>,
}

impl Drop for PendingSubmission<'_> {
    fn drop(&mut self) {
        let mut gate = self.gate.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = gate.finish() {
            tracing::debug!(error = %e, "submission gate already idle");
        }
    }
}

/// Front-end facing session: one transform at a time, results committed to
/// history only after full validation.
pub struct VibeSession<T, S, C>
where
    T: StyleTransformer,
    S: HistoryStorage,
    C: Clipboard,
{
    service: TransformService<T>,
    history: Mutex<HistoryStore<S>>,
    clipboard: C,
    gate: StdMutex<SubmissionGate>,
}

impl<T, S, C> VibeSession<T, S, C>
where
    T: StyleTransformer,
    S: HistoryStorage,
    C: Clipboard,
{
    /// Create a new session over a loaded history store
    pub fn new(transformer: T, history: HistoryStore<S>, clipboard: C) -> Self {
        Self {
            service: TransformService::new(transformer),
            history: Mutex::new(history),
            clipboard,
            gate: StdMutex::new(SubmissionGate::new()),
        }
    }

    /// Whether a submission is currently in flight
    pub fn is_pending(&self) -> bool {
        self.gate
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .is_pending()
    }

    fn begin(&self) -> Result<PendingSubmission<'_>, InvalidStateTransition> {
        self.gate
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .begin()?;
        Ok(PendingSubmission { gate: &self.gate })
    }

    /// Transform text and, on success, record it in history.
    ///
    /// Rejected with `Busy` while another submission is pending. A failed
    /// transform leaves the history untouched. A failed write is reported
    /// through `persisted` rather than as an error.
    pub async fn submit(&self, input: SubmitInput) -> Result<SubmitOutput, SubmitError> {
        let _pending = self.begin()?;

        let result = self
            .service
            .transform(&input.text, input.era, input.direction)
            .await?;

        let translation = Translation::record(input.text, result, input.era, input.direction);

        let persisted = {
            let mut history = self.history.lock().await;
            history.append(translation.clone());
            match history.persist().await {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(error = %e, "history not saved");
                    false
                }
            }
        };

        let clipboard_copied = if input.enable_clipboard {
            match self.clipboard.copy(translation.translated_text()).await {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(error = %e, "clipboard copy failed");
                    false
                }
            }
        } else {
            false
        };

        Ok(SubmitOutput {
            translation,
            persisted,
            clipboard_copied,
        })
    }

    /// Snapshot of the history, newest first
    pub async fn history(&self) -> Vec<Translation> {
        self.history.lock().await.all().to_vec()
    }

    /// Recall a history entry by id
    pub async fn recall(&self, id: &str) -> Option<Translation> {
        self.history.lock().await.find(id).cloned()
    }

    /// Clear the history and persist the empty ledger
    pub async fn clear_history(&self) -> Result<(), StorageError> {
        let mut history = self.history.lock().await;
        history.clear();
        history.persist().await
    }
}
