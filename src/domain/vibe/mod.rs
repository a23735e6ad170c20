//! Vibe transform domain module

mod era;
mod profile;
mod result;
mod stats;
mod system_prompt;

pub use era::{Direction, Era, ALL_DIRECTIONS, ALL_ERAS};
pub use profile::{stat_labels, PromptProfile, LEGACY_LABELS, MODERN_LABELS};
pub use result::{response_schema, VibeResult};
pub use stats::{StatLabel, StatLabels, VibeStats, MAX_STAT, SLOT_NAMES};
pub use system_prompt::{user_turn, SystemPrompt};
