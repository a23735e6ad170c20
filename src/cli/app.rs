//! Main app runner for one-shot translation

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::application::ports::ConfigStore;
use crate::application::{HistoryStore, SubmitError, SubmitInput, TransformError, VibeSession};
use crate::domain::config::AppConfig;
use crate::infrastructure::{
    ArboardClipboard, GeminiTransformer, JsonFileHistoryStorage, XdgConfigStore,
};

use super::args::TranslateOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable holding the Gemini API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Environment variable overriding the model
pub const MODEL_ENV: &str = "VIBE_SHIFT_MODEL";

/// Run a single translation and record it in history
pub async fn run_translate(options: TranslateOptions, api_key: Option<String>) -> ExitCode {
    let mut presenter = Presenter::new();

    if options.text.trim().is_empty() {
        presenter.warn("Nothing to translate. Pass TEXT or pipe it on stdin.");
        return ExitCode::from(EXIT_USAGE_ERROR);
    }

    let api_key = match require_api_key(api_key) {
        Ok(key) => key,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let transformer = GeminiTransformer::with_model(api_key, options.model.as_str());
    let history = HistoryStore::open(history_storage_for(options.history_path.clone())).await;
    let session = VibeSession::new(transformer, history, ArboardClipboard::new());

    let input = SubmitInput {
        text: options.text,
        era: options.era,
        direction: options.direction,
        enable_clipboard: options.clipboard,
    };

    presenter.start_spinner("Scanning the vibes...");

    match session.submit(input).await {
        Ok(output) => {
            presenter.spinner_success("Vibe check complete");

            let translation = &output.translation;
            presenter.output(translation.translated_text());
            presenter.vibe_meter(translation.era(), translation.vibe_stats());
            presenter.info(&format!("Saved as {}", translation.id()));

            if output.clipboard_copied {
                presenter.info("Copied to clipboard");
            } else if options.clipboard {
                presenter.warn("Could not copy to clipboard");
            }
            if !output.persisted {
                presenter.warn("History could not be saved");
            }

            ExitCode::from(EXIT_SUCCESS)
        }
        Err(SubmitError::Transform(TransformError::InvalidInput)) => {
            presenter.spinner_fail("Nothing to translate");
            ExitCode::from(EXIT_USAGE_ERROR)
        }
        Err(e) => {
            presenter.spinner_fail(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Pick the key resolved from env or config, or explain how to set one
pub fn require_api_key(api_key: Option<String>) -> Result<String, String> {
    api_key.filter(|k| !k.trim().is_empty()).ok_or_else(|| {
        format!(
            "Missing API key. Set {} environment variable or run 'vibe-shift config set api_key <key>'",
            API_KEY_ENV
        )
    })
}

/// History storage at the configured path, or the default data dir
pub fn history_storage_for(history_path: Option<PathBuf>) -> JsonFileHistoryStorage {
    match history_path {
        Some(path) => JsonFileHistoryStorage::with_path(path),
        None => JsonFileHistoryStorage::new(),
    }
}

/// Settings taken from the environment
pub fn env_config() -> AppConfig {
    AppConfig {
        api_key: env::var(API_KEY_ENV).ok().filter(|s| !s.is_empty()),
        model: env::var(MODEL_ENV).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let file_config = XdgConfigStore::new().load_or_empty().await;

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config())
        .merge(cli_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_mentions_config_command() {
        let err = require_api_key(None).unwrap_err();
        assert!(err.contains("GEMINI_API_KEY"));
        assert!(err.contains("vibe-shift config set api_key"));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        assert!(require_api_key(Some("  ".to_string())).is_err());
        assert_eq!(require_api_key(Some("abc".to_string())).unwrap(), "abc");
    }

    #[test]
    fn history_storage_uses_configured_path() {
        let storage = history_storage_for(Some(PathBuf::from("/tmp/vibes.json")));
        assert_eq!(storage.path(), std::path::Path::new("/tmp/vibes.json"));

        let default = history_storage_for(None);
        assert!(default.path().ends_with("vibe-shift/vibe_history.json"));
    }
}
