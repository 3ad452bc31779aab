//! Draft forms: generic controller plus the concrete recommendation,
//! query-update, and review forms.

mod controller;
mod query_update_form;
mod recommendation_form;
mod review_form;

pub use controller::{FormController, FormDraft, FormState, FormValidationError};
pub use query_update_form::{QueryUpdateForm, UpdatedQuery};
pub use recommendation_form::{RecommendationDraft, RecommendationForm};
pub use review_form::{ReviewDraft, ReviewForm};

use super::{ClientContext, ClientError};

/// Pages a form can send the user to after success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The full query board.
    Queries,
}

impl Route {
    /// Path of the page.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Queries => "/queries",
        }
    }
}

/// Notify a failure that happened before any request was sent.
fn reject(context: &ClientContext, error: impl Into<ClientError>) -> ClientError {
    let error = error.into();
    context.notifier.error(&error.to_string());
    error
}
