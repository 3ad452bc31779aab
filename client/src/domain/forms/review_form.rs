//! Review modal opened from a query card.

use super::{FormController, FormDraft, FormState, reject};
use crate::domain::ports::{MutationReceipt, NewReview};
use crate::domain::{ClientContext, ClientError, MutationActions, RecordId, Timestamp};

/// Editable review text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    /// Free text.
    pub review: String,
}

impl FormDraft for ReviewDraft {
    const FIELDS: &'static [&'static str] = &["review"];

    fn field(&self, name: &str) -> Option<&str> {
        (name == "review").then_some(self.review.as_str())
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        (name == "review").then_some(&mut self.review)
    }
}

/// Form posting a review written from the query identified by `query_id`.
#[derive(Debug, Clone)]
pub struct ReviewForm {
    query_id: RecordId,
    controller: FormController<ReviewDraft>,
}

impl ReviewForm {
    /// Open an empty review for `query_id`.
    pub fn new(query_id: RecordId) -> Self {
        Self {
            query_id,
            controller: FormController::default(),
        }
    }

    /// Current draft.
    pub const fn draft(&self) -> &ReviewDraft {
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

    /// Check the session and draft, then post the review.
    pub async fn submit(&mut self, context: &ClientContext) -> Result<MutationReceipt, ClientError> {
        let user = context
            .session
            .require_user("add a review")
            .map_err(|error| reject(context, error))?
            .clone();
        let draft = self
            .controller
            .begin_submit()
            .map_err(|error| reject(context, error))?;

        let review = NewReview {
            query_id: self.query_id.clone(),
            user_id: user.uid,
            user_email: user.email,
            review: draft.review,
            timestamp: Timestamp::from(context.clock.utc()),
        };

        match MutationActions::new(context).create_review(&review).await {
            Ok(receipt) => {
                self.controller.succeed(true);
                Ok(receipt)
            }
            Err(error) => {
                self.controller.fail();
                Err(error)
            }
        }
    }
}
