//! Add-recommendation form shown under a query's details.

use super::{FormController, FormDraft, FormState, reject};
use crate::domain::ports::NewRecommendation;
use crate::domain::{
    ClientContext, ClientError, CreatedRecommendation, ListStore, MutationActions, Query,
    RecommendationDetails, RecommendationSource, Timestamp,
};

/// Editable recommendation fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationDraft {
    /// Headline.
    pub recommendation_title: String,
    /// Name of the alternative product.
    pub recommended_product_name: String,
    /// Image of the alternative product.
    pub recommended_product_image: String,
    /// Why the alternative is better.
    pub recommendation_reason: String,
}

impl FormDraft for RecommendationDraft {
    const FIELDS: &'static [&'static str] = &[
        "recommendationTitle",
        "recommendedProductName",
        "recommendedProductImage",
        "recommendationReason",
    ];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "recommendationTitle" => Some(&self.recommendation_title),
            "recommendedProductName" => Some(&self.recommended_product_name),
            "recommendedProductImage" => Some(&self.recommended_product_image),
            "recommendationReason" => Some(&self.recommendation_reason),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "recommendationTitle" => Some(&mut self.recommendation_title),
            "recommendedProductName" => Some(&mut self.recommended_product_name),
            "recommendedProductImage" => Some(&mut self.recommended_product_image),
            "recommendationReason" => Some(&mut self.recommendation_reason),
            _ => None,
        }
    }
}

/// Form attaching a recommendation to `parent`.
#[derive(Debug, Clone)]
pub struct RecommendationForm {
    parent: Query,
    controller: FormController<RecommendationDraft>,
}

impl RecommendationForm {
    /// Start an empty draft for `parent`.
    pub fn new(parent: Query) -> Self {
        Self {
            parent,
            controller: FormController::default(),
        }
    }

    /// The query being recommended against; its counter tracks successful
    /// submissions.
    pub const fn parent(&self) -> &Query {
        &self.parent
    }

    /// Current draft.
    pub const fn draft(&self) -> &RecommendationDraft {
        self.controller.draft()
    }

    /// Lifecycle state.
    pub const fn state(&self) -> FormState {
        self.controller.state()
    }

    /// Set a draft field by wire name.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), ClientError> {
        Ok(self.controller.set_field(name, value)?)
    }

    /// Validate, post, bump the parent counter, and append to `store`.
    ///
    /// The draft is cleared on success and kept on failure. Nothing is sent
    /// when the session has no user or a field is blank.
    pub async fn submit(
        &mut self,
        context: &ClientContext,
        store: &mut ListStore<RecommendationSource>,
    ) -> Result<CreatedRecommendation, ClientError> {
        let user = context
            .session
            .require_user("add a recommendation")
            .map_err(|error| reject(context, error))?
            .clone();
        let draft = self
            .controller
            .begin_submit()
            .map_err(|error| reject(context, error))?;

        let payload = NewRecommendation {
            query_id: self.parent.id.clone(),
            details: RecommendationDetails {
                recommendation_title: draft.recommendation_title,
                recommended_product_name: draft.recommended_product_name,
                recommended_product_image: draft.recommended_product_image,
                recommendation_reason: draft.recommendation_reason,
                recommender_email: user.email,
                recommender_name: user.display_name,
                recommender_image: user.photo_url,
                timestamp: Timestamp::from(context.clock.utc()),
                ..RecommendationDetails::for_parent(&self.parent)
            },
        };

        match MutationActions::new(context)
            .create_recommendation(store, payload)
            .await
        {
            Ok(created) => {
                if created.counter.is_applied() {
                    self.parent.recommendation_count += 1;
                }
                self.controller.succeed(true);
                Ok(created)
            }
            Err(error) => {
                self.controller.fail();
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use serde_json::json;

    use super::*;
    use crate::domain::ports::{MockSelectifyApi, MutationReceipt, NoticeLevel};
    use crate::domain::test_fixtures::{context, fixture_timestamp, query, signed_in};
    use crate::domain::{FormValidationError, Session};

    fn filled(form: &mut RecommendationForm) {
        form.set_field("recommendationTitle", "Try this").expect("field");
        form.set_field("recommendedProductName", "Sprocket")
            .expect("field");
        form.set_field("recommendedProductImage", "https://img.example/s.png")
            .expect("field");
        form.set_field("recommendationReason", "Ethically made")
            .expect("field");
    }

    #[tokio::test]
    async fn blank_field_never_reaches_the_network() {
        let mut api = MockSelectifyApi::new();
        api.expect_create_recommendation().never();
        api.expect_increment_recommendation_count().never();
        let (context, notifier) = context(api, true, signed_in());
        let mut store = ListStore::new(&context);
        let mut form = RecommendationForm::new(query("q1", "Widget", "2024-01-01"));
        filled(&mut form);
        form.set_field("recommendationReason", "   ").expect("field");

        let error = form
            .submit(&context, &mut store)
            .await
            .expect_err("validation fails");

        assert_eq!(
            error,
            ClientError::Validation(FormValidationError::MissingFields {
                fields: vec!["recommendationReason"]
            })
        );
        assert_eq!(form.state(), FormState::Editing);
        assert_eq!(notifier.messages(NoticeLevel::Error).len(), 1);
    }

    #[tokio::test]
    async fn anonymous_users_cannot_recommend() {
        let mut api = MockSelectifyApi::new();
        api.expect_create_recommendation().never();
        let (context, _notifier) = context(api, true, Session::anonymous());
        let mut store = ListStore::new(&context);
        let mut form = RecommendationForm::new(query("q1", "Widget", "2024-01-01"));
        filled(&mut form);

        let error = form
            .submit(&context, &mut store)
            .await
            .expect_err("needs a session");

        assert!(matches!(error, ClientError::MissingSession { .. }));
        assert_eq!(form.draft().recommendation_title, "Try this");
    }

    #[tokio::test]
    async fn payload_merges_parent_user_and_clock() {
        let mut api = MockSelectifyApi::new();
        api.expect_create_recommendation()
            .withf(|payload| {
                payload.query_id.as_ref() == "q1"
                    && payload.details.product_name == "Widget"
                    && payload.details.user_email == "ana@example.com"
                    && payload.details.recommender_email == "ana@example.com"
                    && payload.details.recommender_name == "Ana"
                    && payload.details.timestamp.instant() == Some(fixture_timestamp())
            })
            .times(1)
            .return_once(|_| Ok(MutationReceipt::new(json!({"insertedId": "r1"}))));
        api.expect_increment_recommendation_count()
            .times(1)
            .return_once(|_| Ok(MutationReceipt::default()));
        let (context, notifier) = context(api, true, signed_in());
        let mut store = ListStore::new(&context);
        let mut form = RecommendationForm::new(query("q1", "Widget", "2024-01-01"));
        filled(&mut form);

        form.submit(&context, &mut store)
            .await
            .expect("submission succeeds");

        assert_eq!(form.state(), FormState::Succeeded);
        assert_eq!(form.draft(), &RecommendationDraft::default());
        assert_eq!(form.parent().recommendation_count, 1);
        assert_eq!(store.records().len(), 1);
        assert_eq!(
            notifier.messages(NoticeLevel::Success),
            vec!["Recommendation added successfully!".to_owned()]
        );
    }
}
