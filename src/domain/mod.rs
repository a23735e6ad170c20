//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod history;
pub mod session;
pub mod vibe;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use history::{HistoryLedger, Translation, TranslationId, HISTORY_CAPACITY};
pub use session::{SubmissionGate, SubmissionState};
pub use vibe::{Direction, Era, PromptProfile, SystemPrompt, VibeResult, VibeStats};
