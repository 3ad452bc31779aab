//! Driven port for the explicit confirmation step before destructive actions.

/// Port asking the user to confirm a destructive action.
#[cfg_attr(test, mockall::automock)]
pub trait Confirmation: Send + Sync {
    /// Return `true` when the user accepts `prompt`.
    fn confirm(&self, prompt: &str) -> bool;
}

/// Confirmation that always gives the same answer.
///
/// Used by non-interactive callers (`--yes`) and by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedConfirmation(pub bool);

impl Confirmation for FixedConfirmation {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}
