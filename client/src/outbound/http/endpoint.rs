//! Fixed Selectify REST routes.

use reqwest::{Method, Url};

use crate::domain::RecordId;
use crate::domain::ports::SelectifyApiError;

/// One route of the Selectify backend, with its path parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endpoint<'a> {
    AllQueries,
    QueriesByOwner { email: &'a str },
    FetchQuery { id: &'a RecordId },
    UpdateQuery { id: &'a RecordId },
    DeleteQuery { id: &'a RecordId },
    IncrementRecommendations { query_id: &'a RecordId },
    DecrementRecommendations { query_id: &'a RecordId },
    CreateRecommendation,
    RecommendationsForQuery { query_id: &'a RecordId },
    AllRecommendations,
    DeleteRecommendation { id: &'a RecordId },
    RecommendationsByRecommender { email: &'a str },
    RecommendationsForOwner { email: &'a str },
    AddReview,
    AllReviews,
}

impl Endpoint<'_> {
    pub(crate) fn method(&self) -> Method {
        match self {
            Self::AllQueries
            | Self::QueriesByOwner { .. }
            | Self::FetchQuery { .. }
            | Self::RecommendationsForQuery { .. }
            | Self::AllRecommendations
            | Self::RecommendationsByRecommender { .. }
            | Self::RecommendationsForOwner { .. }
            | Self::AllReviews => Method::GET,
            Self::UpdateQuery { .. }
            | Self::IncrementRecommendations { .. }
            | Self::DecrementRecommendations { .. } => Method::PATCH,
            Self::DeleteQuery { .. } | Self::DeleteRecommendation { .. } => Method::DELETE,
            Self::CreateRecommendation | Self::AddReview => Method::POST,
        }
    }

    /// Unencoded path segments; parameters become single segments.
    pub(crate) fn segments(&self) -> Vec<&str> {
        match *self {
            Self::AllQueries => vec!["all-queries"],
            Self::QueriesByOwner { email } => vec!["my-queries", email],
            Self::FetchQuery { id } | Self::UpdateQuery { id } | Self::DeleteQuery { id } => {
                vec!["query", id.as_ref()]
            }
            Self::IncrementRecommendations { query_id } => {
                vec!["query", query_id.as_ref(), "increment-recommendations"]
            }
            Self::DecrementRecommendations { query_id } => {
                vec!["query", query_id.as_ref(), "decrement-recommendations"]
            }
            Self::CreateRecommendation | Self::AllRecommendations => vec!["recommendations"],
            Self::RecommendationsForQuery { query_id: id } | Self::DeleteRecommendation { id } => {
                vec!["recommendations", id.as_ref()]
            }
            Self::RecommendationsByRecommender { email } => vec!["my-recommendations", email],
            Self::RecommendationsForOwner { email } => {
                vec!["recommendations-for-my-queries", email]
            }
            Self::AddReview => vec!["add-review"],
            Self::AllReviews => vec!["all-reviews"],
        }
    }

    /// Resolve against `base`, keeping any path prefix the base carries.
    pub(crate) fn url(&self, base: &Url) -> Result<Url, SelectifyApiError> {
        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|()| SelectifyApiError::network(format!("base url {base} cannot carry a path")))?
            .pop_if_empty()
            .extend(self.segments());
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    fn base() -> Url {
        Url::parse("https://selectify.test").expect("valid base")
    }

    fn endpoint_named<'a>(name: &str, id: &'a RecordId) -> Endpoint<'a> {
        match name {
            "all_queries" => Endpoint::AllQueries,
            "queries_by_owner" => Endpoint::QueriesByOwner {
                email: "ana@example.com",
            },
            "fetch_query" => Endpoint::FetchQuery { id },
            "update_query" => Endpoint::UpdateQuery { id },
            "delete_query" => Endpoint::DeleteQuery { id },
            "increment" => Endpoint::IncrementRecommendations { query_id: id },
            "decrement" => Endpoint::DecrementRecommendations { query_id: id },
            "create_recommendation" => Endpoint::CreateRecommendation,
            "for_query" => Endpoint::RecommendationsForQuery { query_id: id },
            "all_recommendations" => Endpoint::AllRecommendations,
            "delete_recommendation" => Endpoint::DeleteRecommendation { id },
            "by_recommender" => Endpoint::RecommendationsByRecommender {
                email: "bo@example.com",
            },
            "for_owner" => Endpoint::RecommendationsForOwner {
                email: "ana@example.com",
            },
            "add_review" => Endpoint::AddReview,
            "all_reviews" => Endpoint::AllReviews,
            other => panic!("no endpoint named {other}"),
        }
    }

    #[rstest]
    #[case("all_queries", Method::GET, "/all-queries")]
    #[case("queries_by_owner", Method::GET, "/my-queries/ana@example.com")]
    #[case("fetch_query", Method::GET, "/query/q1")]
    #[case("update_query", Method::PATCH, "/query/q1")]
    #[case("delete_query", Method::DELETE, "/query/q1")]
    #[case("increment", Method::PATCH, "/query/q1/increment-recommendations")]
    #[case("decrement", Method::PATCH, "/query/q1/decrement-recommendations")]
    #[case("create_recommendation", Method::POST, "/recommendations")]
    #[case("for_query", Method::GET, "/recommendations/q1")]
    #[case("all_recommendations", Method::GET, "/recommendations")]
    #[case("delete_recommendation", Method::DELETE, "/recommendations/q1")]
    #[case("by_recommender", Method::GET, "/my-recommendations/bo@example.com")]
    #[case("for_owner", Method::GET, "/recommendations-for-my-queries/ana@example.com")]
    #[case("add_review", Method::POST, "/add-review")]
    #[case("all_reviews", Method::GET, "/all-reviews")]
    fn routes_match_the_backend_contract(
        #[case] name: &str,
        #[case] method: Method,
        #[case] path: &str,
    ) {
        let id = RecordId::new("q1").expect("valid id");
        let endpoint = endpoint_named(name, &id);
        assert_eq!(endpoint.method(), method);
        let url = endpoint.url(&base()).expect("url builds");
        assert_eq!(url.path(), path);
    }

    #[test]
    fn parameters_are_percent_encoded_as_one_segment() {
        let url = Endpoint::QueriesByOwner {
            email: "odd/name ?@example.com",
        }
        .url(&base())
        .expect("url builds");
        assert_eq!(url.path(), "/my-queries/odd%2Fname%20%3F@example.com");
    }

    #[test]
    fn base_path_prefix_is_kept() {
        let base = Url::parse("https://proxy.test/selectify/").expect("valid base");
        let url = Endpoint::AllReviews.url(&base).expect("url builds");
        assert_eq!(url.as_str(), "https://proxy.test/selectify/all-reviews");
    }
}
