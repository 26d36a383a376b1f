use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;
use std::time::Duration;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Implements the ProgressReporter port. The loading indicator is an
/// indicatif spinner; indicatif hides it when stderr is not a terminal, so
/// piped runs only see the plain messages.
pub struct StderrProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    const TICK_MS: u64 = 80;

    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
        }
    }

    fn start_spinner(&self, message: String) {
        self.clear_spinner();

        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("   {spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(Self::TICK_MS));

        *self.spinner.borrow_mut() = Some(spinner);
    }

    fn clear_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
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
        eprintln!("{}", message);
    }

    fn report_loading(&self, query: &str) {
        self.start_spinner(format!("Loading results for '{}'...", query));
    }

    fn report_error(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", message.red());
    }

    fn report_completion(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", message);
    }
}
