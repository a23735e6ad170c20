//! Transform service use case

use thiserror::Error;

use crate::domain::vibe::{Direction, Era, PromptProfile, SystemPrompt, VibeResult};

use super::ports::{GenerationError, StyleTransformer};

/// Message shown for every failed transform
pub const TRANSFORM_FAILED_MESSAGE: &str = "Failed to scan the vibes. Try again, king.";

/// Errors from the transform service
#[derive(Debug, Error)]
pub enum TransformError {
    /// Blank input; rejected before any request is made
    #[error("Nothing to translate: input text is blank")]
    InvalidInput,

    /// Any failure of the round trip. Displays a single user-facing
    /// message; the cause is kept as the error source.
    #[error("{}", TRANSFORM_FAILED_MESSAGE)]
    Failed(#[source] GenerationError),
}

/// Stateless service mapping (text, era, direction) to a validated result
pub struct TransformService<T>
where
    T: StyleTransformer,
{
    transformer: T,
}

impl<T> TransformService<T>
where
    T: StyleTransformer,
{
    /// Create a new service over a transformer backend
    pub fn new(transformer: T) -> Self {
        Self { transformer }
    }

    /// Transform text into the requested era and direction.
    ///
    /// Blank text fails with `InvalidInput` without calling the backend.
    /// Otherwise exactly one backend request is made.
    pub async fn transform(
        &self,
        text: &str,
        era: Era,
        direction: Direction,
    ) -> Result<VibeResult, TransformError> {
        if text.trim().is_empty() {
            return Err(TransformError::InvalidInput);
        }

        let profile = PromptProfile::lookup(era, direction);
        let prompt = SystemPrompt::build(profile);
        tracing::debug!(%era, %direction, chars = text.chars().count(), "requesting transform");

        match self
            .transformer
            .transform(text, &prompt, &profile.stat_labels)
            .await
        {
            Ok(result) => {
                tracing::debug!(stats = ?result.stats.values(), "transform succeeded");
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(error = %e, "transform failed");
                Err(TransformError::Failed(e))
            }
        }
    }
}
