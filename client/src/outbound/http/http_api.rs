//! Reqwest-backed Selectify API adapter.
//!
//! This adapter owns transport details only: URL construction, JSON bodies,
//! status mapping, and decoding into domain records. It performs exactly one
//! request per call and never retries.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::endpoint::Endpoint;
use crate::domain::ports::{
    MutationReceipt, NewRecommendation, NewReview, QueryUpdate, SelectifyApi, SelectifyApiError,
};
use crate::domain::{Query, Recommendation, RecordId, Review};

/// Backend used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://selectify-sigma.vercel.app";
const DEFAULT_USER_AGENT: &str = concat!("selectify-cli/", env!("CARGO_PKG_VERSION"));

/// Errors raised while constructing [`HttpSelectifyApi`].
#[derive(Debug, thiserror::Error)]
pub enum HttpSelectifyApiBuildError {
    /// The base URL cannot have path segments appended (e.g. `mailto:`).
    #[error("base url `{0}` cannot carry a path")]
    InvalidBaseUrl(Url),
    /// The reqwest client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Selectify API adapter issuing HTTP requests against one backend host.
#[derive(Debug, Clone)]
pub struct HttpSelectifyApi {
    client: Client,
    base_url: Url,
}

impl HttpSelectifyApi {
    /// Build an adapter with a default reqwest client.
    ///
    /// ```rust,ignore
    /// let api = HttpSelectifyApi::new(Url::parse(DEFAULT_BASE_URL)?)?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL cannot carry a path or the reqwest
    /// client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, HttpSelectifyApiBuildError> {
        let client = Client::builder().user_agent(DEFAULT_USER_AGENT).build()?;
        Self::with_client(client, base_url)
    }

    /// Build an adapter around an existing client.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL cannot carry a path.
    pub fn with_client(client: Client, base_url: Url) -> Result<Self, HttpSelectifyApiBuildError> {
        if base_url.cannot_be_a_base() {
            return Err(HttpSelectifyApiBuildError::InvalidBaseUrl(base_url));
        }
        Ok(Self { client, base_url })
    }

    /// The backend host requests are sent to.
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn send<B>(
        &self,
        endpoint: Endpoint<'_>,
        body: Option<&B>,
    ) -> Result<Vec<u8>, SelectifyApiError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let method = endpoint.method();
        let url = endpoint.url(&self.base_url)?;
        debug!(%method, path = url.path(), "sending selectify request");

        let mut request = self
            .client
            .request(method.clone(), url.clone())
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await.map_err(|error| {
            warn!(%method, path = url.path(), %error, "selectify request failed");
            map_transport_error(error)
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            warn!(%method, path = url.path(), status = status.as_u16(), "selectify returned an error status");
            return Err(map_status_error(status, bytes.as_ref()));
        }
        debug!(%method, path = url.path(), status = status.as_u16(), bytes = bytes.len(), "selectify request complete");
        Ok(bytes.to_vec())
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint<'_>,
    ) -> Result<T, SelectifyApiError> {
        let body = self.send::<()>(endpoint, None).await?;
        decode_json(&body)
    }

    async fn mutate<B>(
        &self,
        endpoint: Endpoint<'_>,
        body: Option<&B>,
    ) -> Result<MutationReceipt, SelectifyApiError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let body = self.send(endpoint, body).await?;
        Ok(parse_receipt(&body))
    }
}

#[async_trait]
impl SelectifyApi for HttpSelectifyApi {
    async fn list_queries(&self) -> Result<Vec<Query>, SelectifyApiError> {
        self.fetch(Endpoint::AllQueries).await
    }

    async fn list_queries_by_owner(&self, email: &str) -> Result<Vec<Query>, SelectifyApiError> {
        self.fetch(Endpoint::QueriesByOwner { email }).await
    }

    async fn fetch_query(&self, id: &RecordId) -> Result<Query, SelectifyApiError> {
        self.fetch(Endpoint::FetchQuery { id }).await
    }

    async fn update_query(
        &self,
        id: &RecordId,
        update: &QueryUpdate,
    ) -> Result<MutationReceipt, SelectifyApiError> {
        self.mutate(Endpoint::UpdateQuery { id }, Some(update)).await
    }

    async fn delete_query(&self, id: &RecordId) -> Result<MutationReceipt, SelectifyApiError> {
        self.mutate::<()>(Endpoint::DeleteQuery { id }, None).await
    }

    async fn increment_recommendation_count(
        &self,
        query_id: &RecordId,
    ) -> Result<MutationReceipt, SelectifyApiError> {
        self.mutate::<()>(Endpoint::IncrementRecommendations { query_id }, None)
            .await
    }

    async fn decrement_recommendation_count(
        &self,
        query_id: &RecordId,
    ) -> Result<MutationReceipt, SelectifyApiError> {
        self.mutate::<()>(Endpoint::DecrementRecommendations { query_id }, None)
            .await
    }

    async fn create_recommendation(
        &self,
        recommendation: &NewRecommendation,
    ) -> Result<MutationReceipt, SelectifyApiError> {
        self.mutate(Endpoint::CreateRecommendation, Some(recommendation))
            .await
    }

    async fn list_recommendations_for_query(
        &self,
        query_id: &RecordId,
    ) -> Result<Vec<Recommendation>, SelectifyApiError> {
        self.fetch(Endpoint::RecommendationsForQuery { query_id })
            .await
    }

    async fn list_recommendations(&self) -> Result<Vec<Recommendation>, SelectifyApiError> {
        self.fetch(Endpoint::AllRecommendations).await
    }

    async fn delete_recommendation(
        &self,
        id: &RecordId,
    ) -> Result<MutationReceipt, SelectifyApiError> {
        self.mutate::<()>(Endpoint::DeleteRecommendation { id }, None)
            .await
    }

    async fn list_recommendations_by_recommender(
        &self,
        email: &str,
    ) -> Result<Vec<Recommendation>, SelectifyApiError> {
        self.fetch(Endpoint::RecommendationsByRecommender { email })
            .await
    }

    async fn list_recommendations_for_owner(
        &self,
        email: &str,
    ) -> Result<Vec<Recommendation>, SelectifyApiError> {
        self.fetch(Endpoint::RecommendationsForOwner { email }).await
    }

    async fn create_review(&self, review: &NewReview) -> Result<MutationReceipt, SelectifyApiError> {
        self.mutate(Endpoint::AddReview, Some(review)).await
    }

    async fn list_reviews(&self) -> Result<Vec<Review>, SelectifyApiError> {
        self.fetch(Endpoint::AllReviews).await
    }
}

fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, SelectifyApiError> {
    serde_json::from_slice(body).map_err(|error| {
        SelectifyApiError::decode(format!(
            "invalid Selectify JSON payload: {error} (body: {})",
            body_preview(body)
        ))
    })
}

/// Mutation bodies are acknowledgements the client never depends on, so an
/// empty or non-JSON body is not an error.
fn parse_receipt(body: &[u8]) -> MutationReceipt {
    MutationReceipt::new(serde_json::from_slice(body).unwrap_or(Value::Null))
}

fn map_transport_error(error: reqwest::Error) -> SelectifyApiError {
    SelectifyApiError::network(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> SelectifyApiError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_owned()
    } else {
        preview
    };
    SelectifyApiError::http(status.as_u16(), message)
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        let preview: String = compact.chars().take(PREVIEW_CHAR_LIMIT).collect();
        format!("{preview}...")
    } else {
        compact
    }
}
