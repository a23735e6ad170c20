//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::domain::vibe::{Direction, Era};

/// VibeShift - translate text into (and out of) era slang
#[derive(Parser, Debug)]
#[command(name = "vibe-shift")]
#[command(version)]
#[command(about = "Era-styled slang translator with vibe scoring, powered by Google Gemini")]
#[command(long_about = None)]
pub struct Cli {
    /// Text to translate (read from stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Slang era
    #[arg(short = 'e', long, value_name = "ERA")]
    pub era: Option<EraArg>,

    /// Translation direction
    #[arg(short = 'd', long, value_name = "DIRECTION")]
    pub direction: Option<DirectionArg>,

    /// Copy the translation to the clipboard
    #[arg(short = 'c', long)]
    pub clipboard: bool,

    /// Gemini model to use
    #[arg(short = 'm', long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Browse past translations
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

/// History action subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum HistoryAction {
    /// List saved translations, newest first
    List,
    /// Show one saved translation with its vibe meter
    Show {
        /// Translation id
        id: String,
    },
    /// Delete all saved translations
    Clear,
    /// Show history file path
    Path,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Era argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum EraArg {
    Modern,
    #[value(name = "2016", alias = "legacy")]
    Legacy2016,
}

impl From<EraArg> for Era {
    fn from(arg: EraArg) -> Self {
        match arg {
            EraArg::Modern => Era::Modern,
            EraArg::Legacy2016 => Era::Legacy2016,
        }
    }
}

/// Direction argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    ToSlang,
    ToNormal,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::ToSlang => Direction::ToSlang,
            DirectionArg::ToNormal => Direction::ToNormal,
        }
    }
}

/// Parsed translate options
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    pub text: String,
    pub era: Era,
    pub direction: Direction,
    pub clipboard: bool,
    pub model: String,
    pub history_path: Option<PathBuf>,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "api_key",
    "model",
    "era",
    "direction",
    "clipboard",
    "history_path",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
