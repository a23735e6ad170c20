//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod history;
pub mod ports;
pub mod session;
pub mod transform;

// Re-export use cases
pub use history::HistoryStore;
pub use session::{SubmitError, SubmitInput, SubmitOutput, VibeSession};
pub use transform::{TransformError, TransformService, TRANSFORM_FAILED_MESSAGE};
