//! Recommendations attached to queries.

use serde::{Deserialize, Serialize};

use super::{ListRecord, Query, RecordId, Timestamp};

/// A suggested alternative product attached to a [`Query`].
///
/// The parent query's fields are copied in when the recommendation is
/// created; they are not kept in sync with later edits of the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Backend identifier (`_id` on the wire, `id` accepted).
    #[serde(rename = "_id", alias = "id")]
    pub id: RecordId,
    /// Parent query.
    pub query_id: RecordId,
    /// Denormalised parent query fields and the recommendation body.
    #[serde(flatten)]
    pub details: RecommendationDetails,
}

/// Every recommendation field except the backend-assigned identifier.
///
/// This is also the body posted when creating a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationDetails {
    /// Parent query headline.
    #[serde(default)]
    pub query_title: String,
    /// Parent query product name.
    #[serde(default)]
    pub product_name: String,
    /// Parent query product image.
    #[serde(default)]
    pub product_image_url: String,
    /// Parent query product brand.
    #[serde(default)]
    pub product_brand: String,
    /// Parent query boycott reason.
    #[serde(default)]
    pub boycott_reason: String,
    /// Parent query owner's email.
    #[serde(default)]
    pub user_email: String,
    /// Parent query owner's name.
    #[serde(default)]
    pub user_name: String,
    /// Headline of the recommendation.
    #[serde(default)]
    pub recommendation_title: String,
    /// Name of the recommended alternative.
    #[serde(default)]
    pub recommended_product_name: String,
    /// Image of the recommended alternative.
    #[serde(default)]
    pub recommended_product_image: String,
    /// Why the alternative is recommended.
    #[serde(default)]
    pub recommendation_reason: String,
    /// Recommender's email.
    #[serde(default)]
    pub recommender_email: String,
    /// Recommender's display name.
    #[serde(default)]
    pub recommender_name: String,
    /// Recommender's avatar URL.
    #[serde(default)]
    pub recommender_image: String,
    /// When the recommendation was created.
    #[serde(default)]
    pub timestamp: Timestamp,
}

impl RecommendationDetails {
    /// Copy the denormalised fields of `parent` into a fresh detail set.
    pub fn for_parent(parent: &Query) -> Self {
        Self {
            query_title: parent.query_title.clone(),
            product_name: parent.product_name.clone(),
            product_image_url: parent.product_image_url.clone(),
            product_brand: parent.product_brand.clone(),
            boycott_reason: parent.boycott_reason.clone(),
            user_email: parent.user_email.clone(),
            user_name: parent.user_name.clone(),
            ..Self::default()
        }
    }
}

impl ListRecord for Recommendation {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn timestamp(&self) -> &Timestamp {
        &self.details.timestamp
    }

    fn search_text(&self) -> &str {
        &self.details.product_name
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_flat_backend_document() {
        let recommendation: Recommendation = serde_json::from_value(json!({
            "_id": "r1",
            "queryId": "q1",
            "productName": "Widget",
            "recommendationTitle": "Try this",
            "recommendedProductName": "Sprocket",
            "recommenderEmail": "bo@example.com",
            "timestamp": "2024-02-01T09:00:00.000Z"
        }))
        .expect("recommendation decodes");

        assert_eq!(recommendation.query_id.as_ref(), "q1");
        assert_eq!(recommendation.details.recommended_product_name, "Sprocket");
        assert_eq!(recommendation.search_text(), "Widget");
    }

    #[test]
    fn parent_fields_are_copied_but_body_is_blank() {
        let parent: Query = serde_json::from_value(json!({
            "_id": "q1",
            "productName": "Widget",
            "productBrand": "Acme",
            "userEmail": "ana@example.com"
        }))
        .expect("query decodes");

        let details = RecommendationDetails::for_parent(&parent);
        assert_eq!(details.product_brand, "Acme");
        assert_eq!(details.user_email, "ana@example.com");
        assert!(details.recommendation_title.is_empty());
        assert!(details.recommender_email.is_empty());
    }
}
