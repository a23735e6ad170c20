//! VibeShift CLI entry point

use std::io::{IsTerminal, Read};
use std::process::ExitCode;

use clap::Parser;

use vibe_shift::application::HistoryStore;
use vibe_shift::cli::{
    app::{history_storage_for, load_merged_config, run_translate, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    history_cmd::handle_history_command,
    logging::init_logging,
    presenter::Presenter,
    TranslateOptions,
};
use vibe_shift::domain::config::AppConfig;
use vibe_shift::domain::vibe::{Direction, Era};
use vibe_shift::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let presenter = Presenter::new();

    // Handle subcommands
    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::History { action }) => {
            let config = load_merged_config(AppConfig::empty()).await;
            let mut store = HistoryStore::open(history_storage_for(config.history_path)).await;
            if let Err(e) = handle_history_command(action, &mut store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        None => {}
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        api_key: None, // API key comes from env/file only
        model: cli.model.clone(),
        era: cli.era.map(|e| Era::from(e).to_string()),
        direction: cli.direction.map(|d| Direction::from(d).to_string()),
        clipboard: if cli.clipboard { Some(true) } else { None },
        history_path: None,
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    let text = match cli.text {
        Some(text) => text,
        None => match read_stdin() {
            Ok(text) => text,
            Err(e) => {
                presenter.error(&format!("Failed to read stdin: {}", e));
                return ExitCode::from(EXIT_ERROR);
            }
        },
    };

    let options = TranslateOptions {
        text,
        era: config.era_or_default(),
        direction: config.direction_or_default(),
        clipboard: config.clipboard_or_default(),
        model: config.model_or_default().to_string(),
        history_path: config.history_path.clone(),
    };

    run_translate(options, config.api_key).await
}

/// Read piped input; an interactive terminal yields nothing
fn read_stdin() -> std::io::Result<String> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }
    let mut text = String::new();
    stdin.read_to_string(&mut text)?;
    Ok(text.trim_end_matches(['\r', '\n']).to_string())
}
