//! Diagnostics on stderr. Stdout is reserved for the search result.

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::sync::OnceLock;
use std::time::Duration;

const TICK_MS: u64 = 80;

static VERBOSE: OnceLock<bool> = OnceLock::new();

/// Set once at startup. Later calls are ignored.
pub fn init(verbose: bool) {
    let _ = VERBOSE.set(verbose);
}

fn verbose() -> bool {
    *VERBOSE.get().unwrap_or(&false)
}

/// Print a status line (cyan), only when verbose
pub fn status(message: &str) {
    if verbose() {
        eprintln!("{} {}", "·".cyan().bold(), message.cyan());
    }
}

/// Print a success line (green), only when verbose
pub fn success(message: &str) {
    if verbose() {
        eprintln!("{} {}", "✓".green().bold(), message.green());
    }
}

/// Print a warning (yellow)
pub fn warn(message: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), message.yellow());
}

/// Print an error (red)
pub fn error(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message.red());
}

/// Spinner shown on stderr while the request is in flight.
pub struct FetchSpinner {
    bar: Option<ProgressBar>,
}

impl FetchSpinner {
    pub fn start(message: &str) -> Self {
        if !verbose() {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner().with_message(message.to_string());
        if let Ok(style) =
            ProgressStyle::default_spinner().template("{spinner:.green} {msg} {elapsed:.white.dim}")
        {
            bar.set_style(style);
        }
        bar.enable_steady_tick(Duration::from_millis(TICK_MS));
        Self { bar: Some(bar) }
    }

    pub fn stop(mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl Drop for FetchSpinner {
    fn drop(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
