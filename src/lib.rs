//! VibeShift - era-styled slang translation CLI
//!
//! This crate rewrites text into the slang of a chosen era (or back into
//! plain English) with Google Gemini, scores the result on four era-specific
//! vibe stats, and keeps a short local history of translations.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Eras, prompt profiles, vibe stats, history ledger, and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Gemini, JSON history file, clipboard, config)
//! - **CLI**: Command-line interface, argument parsing, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
