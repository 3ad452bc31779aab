//! Driven port for the remote Selectify REST API.
//!
//! The domain owns the request payloads and the error taxonomy so stores,
//! actions, and forms stay adapter-agnostic. Every method maps onto exactly
//! one HTTP call; implementations must not retry.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::define_port_error;
use crate::domain::{Query, Recommendation, RecommendationDetails, RecordId, Review, Timestamp};

/// Body posted to create a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecommendation {
    /// Parent query.
    pub query_id: RecordId,
    /// Denormalised parent fields, recommender identity, and draft fields.
    #[serde(flatten)]
    pub details: RecommendationDetails,
}

impl NewRecommendation {
    /// Materialise the stored record once the backend has assigned `id`.
    pub fn into_recommendation(self, id: RecordId) -> Recommendation {
        Recommendation {
            id,
            query_id: self.query_id,
            details: self.details,
        }
    }
}

/// Body posted to create a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    /// Query the review was written from.
    pub query_id: RecordId,
    /// Reviewer's auth uid.
    pub user_id: String,
    /// Reviewer's email.
    pub user_email: String,
    /// Review text.
    pub review: String,
    /// Generation time.
    pub timestamp: Timestamp,
}

/// Editable query fields sent with `PATCH /query/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryUpdate {
    /// Name of the boycotted product.
    pub product_name: String,
    /// Brand of the boycotted product.
    pub product_brand: String,
    /// Image of the boycotted product.
    pub product_image_url: String,
    /// Headline of the query.
    pub query_title: String,
    /// Why the product is being boycotted.
    pub boycott_reason: String,
}

impl QueryUpdate {
    /// Apply the update to a local copy of the query.
    pub fn apply_to(&self, query: &mut Query) {
        query.product_name.clone_from(&self.product_name);
        query.product_brand.clone_from(&self.product_brand);
        query.product_image_url.clone_from(&self.product_image_url);
        query.query_title.clone_from(&self.query_title);
        query.boycott_reason.clone_from(&self.boycott_reason);
    }
}

impl From<&Query> for QueryUpdate {
    fn from(query: &Query) -> Self {
        Self {
            product_name: query.product_name.clone(),
            product_brand: query.product_brand.clone(),
            product_image_url: query.product_image_url.clone(),
            query_title: query.query_title.clone(),
            boycott_reason: query.boycott_reason.clone(),
        }
    }
}

/// Parsed body of a successful mutation response.
///
/// Mutation endpoints answer with driver acknowledgements whose shape the
/// client does not rely on; only a handful of well-known keys are read.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MutationReceipt(Value);

impl MutationReceipt {
    /// Wrap a decoded response body.
    pub const fn new(body: Value) -> Self {
        Self(body)
    }

    /// The raw response body (`Null` when the response was empty).
    pub const fn body(&self) -> &Value {
        &self.0
    }

    /// A human-readable `message` supplied by the backend.
    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }

    /// Identifier of a freshly inserted document (`insertedId`).
    pub fn inserted_id(&self) -> Option<RecordId> {
        self.0
            .get("insertedId")
            .and_then(Value::as_str)
            .and_then(|raw| RecordId::new(raw).ok())
    }
}

define_port_error! {
    /// Errors surfaced while calling the Selectify API.
    pub enum SelectifyApiError {
        /// The request never reached the backend or no response came back.
        Network { message: String } =>
            "selectify request failed: {message}",
        /// The backend answered with a non-success status.
        Http { status: u16, message: String } =>
            "selectify returned status {status}: {message}",
        /// A success response carried a body that could not be decoded.
        Decode { message: String } =>
            "selectify response decode failed: {message}",
    }
}

impl SelectifyApiError {
    /// HTTP status for [`SelectifyApiError::Http`] failures.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Network { .. } | Self::Decode { .. } => None,
        }
    }
}

/// Port for the Selectify REST API.
///
/// # Examples
///
/// ```rust,ignore
/// use selectify::domain::ports::SelectifyApi;
///
/// async fn newest(api: &dyn SelectifyApi) -> usize {
///     api.list_queries().await.map(|queries| queries.len()).unwrap_or(0)
/// }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SelectifyApi: Send + Sync {
    /// `GET /all-queries`.
    async fn list_queries(&self) -> Result<Vec<Query>, SelectifyApiError>;

    /// `GET /my-queries/{email}`.
    async fn list_queries_by_owner(&self, email: &str) -> Result<Vec<Query>, SelectifyApiError>;

    /// `GET /query/{id}`.
    async fn fetch_query(&self, id: &RecordId) -> Result<Query, SelectifyApiError>;

    /// `PATCH /query/{id}`.
    async fn update_query(
        &self,
        id: &RecordId,
        update: &QueryUpdate,
    ) -> Result<MutationReceipt, SelectifyApiError>;

    /// `DELETE /query/{id}`.
    async fn delete_query(&self, id: &RecordId) -> Result<MutationReceipt, SelectifyApiError>;

    /// `PATCH /query/{id}/increment-recommendations`.
    async fn increment_recommendation_count(
        &self,
        query_id: &RecordId,
    ) -> Result<MutationReceipt, SelectifyApiError>;

    /// `PATCH /query/{id}/decrement-recommendations`.
    async fn decrement_recommendation_count(
        &self,
        query_id: &RecordId,
    ) -> Result<MutationReceipt, SelectifyApiError>;

    /// `POST /recommendations`.
    async fn create_recommendation(
        &self,
        recommendation: &NewRecommendation,
    ) -> Result<MutationReceipt, SelectifyApiError>;

    /// `GET /recommendations/{queryId}`.
    async fn list_recommendations_for_query(
        &self,
        query_id: &RecordId,
    ) -> Result<Vec<Recommendation>, SelectifyApiError>;

    /// `GET /recommendations`.
    async fn list_recommendations(&self) -> Result<Vec<Recommendation>, SelectifyApiError>;

    /// `DELETE /recommendations/{id}`.
    async fn delete_recommendation(
        &self,
        id: &RecordId,
    ) -> Result<MutationReceipt, SelectifyApiError>;

    /// `GET /my-recommendations/{email}`.
    async fn list_recommendations_by_recommender(
        &self,
        email: &str,
    ) -> Result<Vec<Recommendation>, SelectifyApiError>;

    /// `GET /recommendations-for-my-queries/{email}`.
    async fn list_recommendations_for_owner(
        &self,
        email: &str,
    ) -> Result<Vec<Recommendation>, SelectifyApiError>;

    /// `POST /add-review`.
    async fn create_review(&self, review: &NewReview) -> Result<MutationReceipt, SelectifyApiError>;

    /// `GET /all-reviews`.
    async fn list_reviews(&self) -> Result<Vec<Review>, SelectifyApiError>;
}
