//! Free-text platform reviews.

use serde::{Deserialize, Serialize};

use super::{ListRecord, RecordId, Timestamp};

/// Feedback left by a signed-in user from the query board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Backend identifier (`_id` on the wire, `id` accepted).
    #[serde(rename = "_id", alias = "id")]
    pub id: RecordId,
    /// Query the review was written from.
    #[serde(default)]
    pub query_id: String,
    /// Reviewer's auth uid.
    #[serde(default)]
    pub user_id: String,
    /// Reviewer's email.
    #[serde(default)]
    pub user_email: String,
    /// Review text.
    #[serde(default)]
    pub review: String,
    /// When the review was written.
    #[serde(default)]
    pub timestamp: Timestamp,
}

impl ListRecord for Review {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    fn search_text(&self) -> &str {
        &self.review
    }
}
