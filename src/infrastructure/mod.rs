//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like the Gemini API, the
//! filesystem, and the system clipboard.

pub mod clipboard;
pub mod config;
pub mod history;
pub mod transformation;

// Re-export adapters
pub use clipboard::ArboardClipboard;
pub use config::XdgConfigStore;
pub use history::{JsonFileHistoryStorage, MemoryHistoryStorage};
pub use transformation::GeminiTransformer;
