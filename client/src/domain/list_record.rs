//! Behaviour shared by every record that can be listed.

use super::{RecordId, Timestamp};

/// A record held by a [`ListStore`](super::ListStore) and shown through a
/// [`ListView`](super::ListView).
pub trait ListRecord: Clone + Send + Sync + 'static {
    /// Identity used for delete and patch reconciliation.
    fn id(&self) -> &RecordId;

    /// Creation timestamp used for newest-first ordering.
    fn timestamp(&self) -> &Timestamp;

    /// Text matched by the search box.
    fn search_text(&self) -> &str;
}
