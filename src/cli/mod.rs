//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, logging setup,
//! and the translate/history/config runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod history_cmd;
pub mod logging;
pub mod presenter;

// Re-export commonly used types
pub use app::{run_translate, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, HistoryAction, TranslateOptions};
pub use history_cmd::handle_history_command;
pub use logging::init_logging;
pub use presenter::Presenter;
