use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::sync::Mutex;
use std::time::Duration;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with the SBOM on stdout.
/// Native tool runs are shown as an indicatif spinner; indicatif hides it
/// when stderr is not a terminal.
pub struct StderrProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
            quiet: false,
        }
    }

    /// Suppresses informational messages; warnings are still printed
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn clear_spinner(&self) {
        if let Ok(mut spinner) = self.spinner.lock() {
            if let Some(pb) = spinner.take() {
                pb.finish_and_clear();
            }
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn start_task(&self, message: &str) {
        if self.quiet {
            return;
        }
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("   {spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut spinner) = self.spinner.lock() {
            if let Some(previous) = spinner.replace(pb) {
                previous.finish_and_clear();
            }
        }
    }

    fn finish_task(&self) {
        self.clear_spinner();
    }

    fn report_error(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    fn report_completion(&self, message: &str) {
        self.clear_spinner();
        if !self.quiet {
            eprintln!("{}", message.green());
        }
    }
}
