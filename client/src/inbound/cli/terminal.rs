//! Terminal adapters for the notice and confirmation ports.

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::domain::ports::{Confirmation, Notifier};

/// Writes notices to standard error.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn success(&self, message: &str) {
        info!(notice = message, "success");
        if let Err(error) = writeln!(io::stderr(), "✔ {message}") {
            warn!(%error, "failed to write notice");
        }
    }

    fn error(&self, message: &str) {
        info!(notice = message, "error");
        if let Err(error) = writeln!(io::stderr(), "✖ {message}") {
            warn!(%error, "failed to write notice");
        }
    }
}

/// Asks on standard error and reads a `y`/`yes` answer from standard input.
#[derive(Debug, Clone, Copy)]
pub struct PromptConfirmation {
    assume_yes: bool,
}

impl PromptConfirmation {
    /// Build a prompt; `assume_yes` accepts without asking.
    pub const fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Confirmation for PromptConfirmation {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        let mut stderr = io::stderr();
        if write!(stderr, "{prompt} [y/N] ")
            .and_then(|()| stderr.flush())
            .is_err()
        {
            return false;
        }
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_affirmative(&answer),
            Err(error) => {
                warn!(%error, "failed to read confirmation");
                false
            }
        }
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
