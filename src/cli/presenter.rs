//! CLI presenter for output formatting

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::history::Translation;
use crate::domain::vibe::{stat_labels, Era, VibeStats, MAX_STAT};

/// Width of a vibe meter bar in cells
const METER_WIDTH: usize = 20;

/// Presenter for CLI output formatting
pub struct Presenter {
    spinner: Option<ProgressBar>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self { spinner: None }
    }

    /// Start a spinner with message
    pub fn start_spinner(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    /// Mark spinner as success and finish
    pub fn spinner_success(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✓".green(), message));
        }
    }

    /// Mark spinner as failed and finish
    pub fn spinner_fail(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✗".red(), message));
        }
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout (the actual translation output)
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Format one meter row, e.g. `Rizz       [██████░░░░]  60`
    pub fn format_meter_row(&self, label: &str, value: u8) -> String {
        let filled = (value as usize * METER_WIDTH) / MAX_STAT as usize;
        let empty = METER_WIDTH - filled;

        format!(
            "{:<10} [{}{}] {:>3}",
            label,
            "█".repeat(filled).cyan(),
            "░".repeat(empty),
            value
        )
    }

    /// Print the four vibe stats with the era's labels
    pub fn vibe_meter(&self, era: Era, stats: &VibeStats) {
        let title = match era {
            Era::Modern => "AURA DIAGNOSTICS",
            Era::Legacy2016 => "SQUAD CALIBRATION",
        };
        eprintln!("{}", title.bold());
        for (label, value) in stat_labels(era).labels().iter().zip(stats.values()) {
            eprintln!("  {}", self.format_meter_row(label, value));
        }
    }

    /// One-line summary of a history entry
    pub fn format_summary(&self, translation: &Translation) -> String {
        format!(
            "{} {} {:<6} {:<9} {}",
            translation.id().to_string().cyan(),
            translation.timestamp().format("%Y-%m-%d %H:%M"),
            translation.era().as_str(),
            translation.direction().as_str(),
            truncate(translation.translated_text(), 48)
        )
    }

    /// Print a history entry in full
    pub fn translation_detail(&self, translation: &Translation) {
        self.key_value("id", translation.id().as_str());
        self.key_value("time", &translation.timestamp().to_rfc3339());
        self.key_value("era", translation.era().as_str());
        self.key_value("direction", translation.direction().as_str());
        self.key_value("original", translation.original_text());
        self.key_value("translated", translation.translated_text());
        self.vibe_meter(translation.era(), translation.vibe_stats());
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorten text to at most `max` characters, single line
fn truncate(text: &str, max: usize) -> String {
    let single_line = text.replace('\n', " ");
    if single_line.chars().count() <= max {
        single_line
    } else {
        let cut: String = single_line.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
