//! Edit form for an existing query.

use tracing::warn;

use super::{FormController, FormDraft, FormState, Route, reject};
use crate::domain::ports::{MutationReceipt, QueryUpdate};
use crate::domain::{ClientContext, ClientError, ListStore, MutationActions, QuerySource, RecordId};

impl FormDraft for QueryUpdate {
    const FIELDS: &'static [&'static str] = &[
        "productName",
        "productBrand",
        "productImageUrl",
        "queryTitle",
        "boycottReason",
    ];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "productName" => Some(&self.product_name),
            "productBrand" => Some(&self.product_brand),
            "productImageUrl" => Some(&self.product_image_url),
            "queryTitle" => Some(&self.query_title),
            "boycottReason" => Some(&self.boycott_reason),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "productName" => Some(&mut self.product_name),
            "productBrand" => Some(&mut self.product_brand),
            "productImageUrl" => Some(&mut self.product_image_url),
            "queryTitle" => Some(&mut self.query_title),
            "boycottReason" => Some(&mut self.boycott_reason),
            _ => None,
        }
    }
}

/// A successful update and where to go next.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatedQuery {
    /// Backend acknowledgement.
    pub receipt: MutationReceipt,
    /// Page to show after the update.
    pub navigate_to: Route,
}

/// Form editing the query identified by `id`, pre-filled from the backend.
#[derive(Debug, Clone)]
pub struct QueryUpdateForm {
    id: RecordId,
    controller: FormController<QueryUpdate>,
}

impl QueryUpdateForm {
    /// Fetch the query and populate the draft with its current fields.
    pub async fn load(context: &ClientContext, id: RecordId) -> Result<Self, ClientError> {
        match context.api.fetch_query(&id).await {
            Ok(query) => Ok(Self {
                id,
                controller: FormController::new(QueryUpdate::from(&query)),
            }),
            Err(error) => {
                warn!(%id, %error, "query fetch for edit failed");
                context.notifier.error("Error fetching query data");
                Err(error.into())
            }
        }
    }

    /// Identifier of the query being edited.
    pub const fn id(&self) -> &RecordId {
        &self.id
    }

    /// Current draft.
    pub const fn draft(&self) -> &QueryUpdate {
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

    /// Validate and send the edited fields.
    ///
    /// On success the held copy in `store` is patched and the caller is told
    /// to navigate to the query board.
    pub async fn submit(
        &mut self,
        context: &ClientContext,
        store: Option<&mut ListStore<QuerySource>>,
    ) -> Result<UpdatedQuery, ClientError> {
        context
            .session
            .require_user("update a query")
            .map_err(|error| reject(context, error))?;
        let update = self
            .controller
            .begin_submit()
            .map_err(|error| reject(context, error))?;

        match MutationActions::new(context)
            .update_query(store, &self.id, &update)
            .await
        {
            Ok(receipt) => {
                self.controller.succeed(false);
                Ok(UpdatedQuery {
                    receipt,
                    navigate_to: Route::Queries,
                })
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
    use mockall::predicate::eq;
    use serde_json::json;

    use super::*;
    use crate::domain::ports::{MockSelectifyApi, NoticeLevel, SelectifyApiError};
    use crate::domain::test_fixtures::{context, query, record_id, signed_in};

    #[tokio::test]
    async fn load_prefills_from_the_single_query_endpoint() {
        let mut api = MockSelectifyApi::new();
        api.expect_fetch_query()
            .with(eq(record_id("1")))
            .times(1)
            .return_once(|_| Ok(query("1", "Widget", "2024-01-01")));
        let (context, _notifier) = context(api, true, signed_in());

        let form = QueryUpdateForm::load(&context, record_id("1"))
            .await
            .expect("load succeeds");

        assert_eq!(form.draft().product_name, "Widget");
        assert_eq!(form.draft().product_brand, "Acme");
        assert_eq!(form.state(), FormState::Editing);
    }

    #[tokio::test]
    async fn failed_load_notifies() {
        let mut api = MockSelectifyApi::new();
        api.expect_fetch_query()
            .return_once(|_| Err(SelectifyApiError::http(404_u16, "missing")));
        let (context, notifier) = context(api, true, signed_in());

        let result = QueryUpdateForm::load(&context, record_id("1")).await;

        assert!(result.is_err());
        assert_eq!(
            notifier.messages(NoticeLevel::Error),
            vec!["Error fetching query data".to_owned()]
        );
    }

    #[tokio::test]
    async fn submit_sends_only_editable_fields_and_navigates() {
        let mut api = MockSelectifyApi::new();
        api.expect_fetch_query()
            .return_once(|_| Ok(query("1", "Widget", "2024-01-01")));
        api.expect_update_query()
            .withf(|id, update| {
                id.as_ref() == "1"
                    && update.query_title == "Still boycotting"
                    && update.product_name == "Widget"
            })
            .times(1)
            .return_once(|_, _| Ok(MutationReceipt::new(json!({"message": "Saved"}))));
        let (context, notifier) = context(api, true, signed_in());
        let mut form = QueryUpdateForm::load(&context, record_id("1"))
            .await
            .expect("load succeeds");
        form.set_field("queryTitle", " Still boycotting ")
            .expect("known field");

        let updated = form.submit(&context, None).await.expect("update succeeds");

        assert_eq!(updated.navigate_to, Route::Queries);
        assert_eq!(form.state(), FormState::Succeeded);
        assert_eq!(
            notifier.messages(NoticeLevel::Success),
            vec!["Saved".to_owned()]
        );
    }

    #[tokio::test]
    async fn failed_submit_keeps_the_draft() {
        let mut api = MockSelectifyApi::new();
        api.expect_fetch_query()
            .return_once(|_| Ok(query("1", "Widget", "2024-01-01")));
        api.expect_update_query()
            .return_once(|_, _| Err(SelectifyApiError::network("offline")));
        let (context, notifier) = context(api, true, signed_in());
        let mut form = QueryUpdateForm::load(&context, record_id("1"))
            .await
            .expect("load succeeds");
        form.set_field("productBrand", "Acme Ltd").expect("known field");

        assert!(form.submit(&context, None).await.is_err());
        assert_eq!(form.state(), FormState::Failed);
        assert_eq!(form.draft().product_brand, "Acme Ltd");
        assert_eq!(
            notifier.messages(NoticeLevel::Error),
            vec!["Error updating query".to_owned()]
        );
    }
}
