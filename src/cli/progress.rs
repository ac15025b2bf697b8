use std::time::Duration;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a stage runs, finished with a check or a cross
#[derive(Debug)]
pub struct StageSpinner {
    bar: ProgressBar,
    message: String,
}

impl StageSpinner {
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self {
            bar,
            message: message.to_string(),
        }
    }

    pub fn succeed(self) {
        let mark = style("✔").green();
        self.finish(&format!("{mark} {}", self.message));
    }

    pub fn fail(self) {
        let mark = style("✖").red();
        self.finish(&format!("{mark} {}", self.message));
    }

    fn finish(&self, line: &str) {
        self.bar.set_style(
            ProgressStyle::with_template("{msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        self.bar.finish_with_message(line.to_string());
    }
}
