//! Style transformer port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::error::ResponseShapeError;
use crate::domain::vibe::{StatLabels, SystemPrompt, VibeResult};

/// Errors from the generative text backend
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Response does not match the vibe schema: {0}")]
    InvalidShape(#[from] ResponseShapeError),
}

/// Port for the external text-generation capability
#[async_trait]
pub trait StyleTransformer: Send + Sync {
    /// Rewrite text according to a system prompt and return the validated
    /// structured result.
    ///
    /// # Arguments
    /// * `text` - The literal user text
    /// * `prompt` - The system instruction built from a prompt profile
    /// * `labels` - The era's stat labels, whose keys the response must use
    ///
    /// # Returns
    /// The translated text and its vibe stats, or an error. Exactly one
    /// request is made per call.
    async fn transform(
        &self,
        text: &str,
        prompt: &SystemPrompt,
        labels: &StatLabels,
    ) -> Result<VibeResult, GenerationError>;
}

/// Blanket implementation for boxed transformer types
#[async_trait]
impl StyleTransformer for Box<dyn StyleTransformer> {
    async fn transform(
        &self,
        text: &str,
        prompt: &SystemPrompt,
        labels: &StatLabels,
    ) -> Result<VibeResult, GenerationError> {
        self.as_ref().transform(text, prompt, labels).await
    }
}
