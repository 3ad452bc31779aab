//! Identifying contexts a [`ListStore`](super::ListStore) can be loaded from.
//!
//! A source names one collection endpoint plus the key it is parameterised
//! by. Identity-keyed sources can only be built once the session email is
//! known, so a store can never fire a request with an undefined key.

use std::fmt;

use async_trait::async_trait;

use super::ports::{SelectifyApi, SelectifyApiError};
use super::{ListRecord, Query, Recommendation, RecordId, Review, Session};

/// A collection endpoint and its parameters.
#[async_trait]
pub trait ListSource: Clone + PartialEq + Send + Sync + fmt::Debug + 'static {
    /// Record type returned by the endpoint.
    type Record: ListRecord;

    /// Plural noun used in notices, e.g. `"queries"`.
    fn label(&self) -> &'static str;

    /// Fetch the full collection.
    async fn fetch(&self, api: &dyn SelectifyApi)
    -> Result<Vec<Self::Record>, SelectifyApiError>;
}

/// Sources of [`Query`] collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuerySource {
    /// `GET /all-queries`.
    All,
    /// `GET /my-queries/{email}`.
    OwnedBy {
        /// Owner's email.
        email: String,
    },
}

impl QuerySource {
    /// Queries owned by the signed-in user; `None` while the email is unknown.
    pub fn owned_by(session: &Session) -> Option<Self> {
        session.email().map(|email| Self::OwnedBy {
            email: email.to_owned(),
        })
    }
}

#[async_trait]
impl ListSource for QuerySource {
    type Record = Query;

    fn label(&self) -> &'static str {
        "queries"
    }

    async fn fetch(&self, api: &dyn SelectifyApi) -> Result<Vec<Query>, SelectifyApiError> {
        match self {
            Self::All => api.list_queries().await,
            Self::OwnedBy { email } => api.list_queries_by_owner(email).await,
        }
    }
}

/// Sources of [`Recommendation`] collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommendationSource {
    /// `GET /recommendations`.
    All,
    /// `GET /recommendations/{queryId}`.
    ForQuery {
        /// Parent query.
        query_id: RecordId,
    },
    /// `GET /my-recommendations/{email}`.
    AuthoredBy {
        /// Recommender's email.
        email: String,
    },
    /// `GET /recommendations-for-my-queries/{email}`.
    OnQueriesOwnedBy {
        /// Query owner's email.
        email: String,
    },
}

impl RecommendationSource {
    /// Recommendations written by the signed-in user.
    pub fn authored_by(session: &Session) -> Option<Self> {
        session.email().map(|email| Self::AuthoredBy {
            email: email.to_owned(),
        })
    }

    /// Recommendations left on the signed-in user's queries.
    pub fn on_queries_owned_by(session: &Session) -> Option<Self> {
        session.email().map(|email| Self::OnQueriesOwnedBy {
            email: email.to_owned(),
        })
    }
}

#[async_trait]
impl ListSource for RecommendationSource {
    type Record = Recommendation;

    fn label(&self) -> &'static str {
        "recommendations"
    }

    async fn fetch(
        &self,
        api: &dyn SelectifyApi,
    ) -> Result<Vec<Recommendation>, SelectifyApiError> {
        match self {
            Self::All => api.list_recommendations().await,
            Self::ForQuery { query_id } => api.list_recommendations_for_query(query_id).await,
            Self::AuthoredBy { email } => api.list_recommendations_by_recommender(email).await,
            Self::OnQueriesOwnedBy { email } => api.list_recommendations_for_owner(email).await,
        }
    }
}

/// Sources of [`Review`] collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewSource {
    /// `GET /all-reviews`.
    #[default]
    All,
}

#[async_trait]
impl ListSource for ReviewSource {
    type Record = Review;

    fn label(&self) -> &'static str {
        "reviews"
    }

    async fn fetch(&self, api: &dyn SelectifyApi) -> Result<Vec<Review>, SelectifyApiError> {
        match self {
            Self::All => api.list_reviews().await,
        }
    }
}
