//! Product boycott queries.

use serde::{Deserialize, Deserializer, Serialize};

use super::{ListRecord, RecordId, Timestamp};

/// A user-submitted product boycott post soliciting alternatives.
///
/// ## Invariants
/// - `recommendation_count` is maintained by the backend and moves in
///   lockstep with recommendation creation and deletion, but only on a
///   best-effort basis (see [`MutationActions`](super::MutationActions)).
///
/// Missing text fields decode as empty strings and a missing count as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    /// Backend identifier (`_id` on the wire, `id` accepted).
    #[serde(rename = "_id", alias = "id")]
    pub id: RecordId,
    /// Owner's email address.
    #[serde(default)]
    pub user_email: String,
    /// Owner's display name.
    #[serde(default)]
    pub user_name: String,
    /// Owner's avatar URL.
    #[serde(default)]
    pub user_image: String,
    /// Name of the boycotted product.
    #[serde(default)]
    pub product_name: String,
    /// Brand of the boycotted product.
    #[serde(default)]
    pub product_brand: String,
    /// Image of the boycotted product.
    #[serde(default)]
    pub product_image_url: String,
    /// Headline of the query.
    #[serde(default)]
    pub query_title: String,
    /// Why the product is being boycotted.
    #[serde(default)]
    pub boycott_reason: String,
    /// Number of recommendations attached to this query.
    #[serde(default, deserialize_with = "clamped_count")]
    pub recommendation_count: u32,
    /// When the query was created.
    #[serde(default)]
    pub timestamp: Timestamp,
}

impl ListRecord for Query {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    fn search_text(&self) -> &str {
        &self.product_name
    }
}

/// Read a counter that unpaired decrements may have pushed below zero.
fn clamped_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let raw = Option::<i64>::deserialize(deserializer)?.unwrap_or(0);
    Ok(u32::try_from(raw.max(0)).unwrap_or(u32::MAX))
}
