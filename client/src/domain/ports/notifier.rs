//! Driven port for user-facing success and error notices.
//!
//! Pages report every mutation and fetch outcome through this port instead
//! of writing to a toast widget or terminal directly.

use std::sync::{Mutex, PoisonError};

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeLevel {
    /// The action completed.
    Success,
    /// The action failed.
    Error,
}

/// A single message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Text shown to the user.
    pub message: String,
}

/// Port for surfacing outcome messages to the user.
pub trait Notifier: Send + Sync {
    /// Report a completed action.
    fn success(&self, message: &str);

    /// Report a failed action.
    fn error(&self, message: &str);
}

/// In-memory notifier that records every notice in order.
///
/// # Examples
/// ```
/// use selectify::domain::ports::{Notifier, NoticeLevel, RecordingNotifier};
///
/// let notifier = RecordingNotifier::default();
/// notifier.error("Error fetching queries");
/// assert_eq!(notifier.notices()[0].level, NoticeLevel::Error);
/// ```
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    /// Snapshot of the notices recorded so far.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Messages recorded at `level`, oldest first.
    pub fn messages(&self, level: NoticeLevel) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter(|notice| notice.level == level)
            .map(|notice| notice.message)
            .collect()
    }

    fn record(&self, level: NoticeLevel, message: &str) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Notice {
                level,
                message: message.to_owned(),
            });
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.record(NoticeLevel::Success, message);
    }

    fn error(&self, message: &str) {
        self.record(NoticeLevel::Error, message);
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[test]
    fn records_notices_in_order_by_level() {
        let notifier = RecordingNotifier::default();
        notifier.success("Recommendation added");
        notifier.error("Error fetching queries");
        notifier.success("Deleted");

        assert_eq!(notifier.notices().len(), 3);
        assert_eq!(
            notifier.messages(NoticeLevel::Success),
            vec!["Recommendation added".to_owned(), "Deleted".to_owned()]
        );
        assert_eq!(
            notifier.messages(NoticeLevel::Error),
            vec!["Error fetching queries".to_owned()]
        );
    }
}
