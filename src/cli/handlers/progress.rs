//! Spinner shown on stderr while a request is in flight

use std::future::Future;
use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::OutputFormat;

/// A stderr spinner that stays hidden for JSON output and non-terminals.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn start(message: impl Into<String>, format: OutputFormat) -> Self {
        let visible = format != OutputFormat::Json && std::io::stderr().is_terminal();
        let bar = if visible {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}

/// Await `fut` with a spinner running, clearing it on both outcomes.
pub async fn with_spinner<T, Fut>(message: &str, format: OutputFormat, fut: Fut) -> T
where
    Fut: Future<Output = T>,
{
    let spinner = Spinner::start(message, format);
    let out = fut.await;
    spinner.finish();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_with_spinner_returns_value() {
        let value = with_spinner("Loading users", OutputFormat::Json, async { 42 }).await;
        assert_eq!(value, 42);
    }
}
