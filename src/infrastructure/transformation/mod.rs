//! Text transformation adapters

mod gemini;

pub use gemini::{GeminiTransformer, API_BASE_URL};
