//! Failures surfaced by stores, actions, and forms.

use super::forms::FormValidationError;
use super::ports::SelectifyApiError;

/// Every way a client-side operation can fail.
///
/// None of these are fatal: callers turn them into notices and carry on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The remote API call failed.
    #[error(transparent)]
    Api(#[from] SelectifyApiError),
    /// A draft failed client-side validation; no request was sent.
    #[error(transparent)]
    Validation(#[from] FormValidationError),
    /// The action needs a signed-in user and none is present.
    #[error("please sign in first to {action}")]
    MissingSession {
        /// What the user tried to do.
        action: &'static str,
    },
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[test]
    fn api_errors_keep_their_message() {
        let error = ClientError::from(SelectifyApiError::http(500_u16, "boom"));
        assert_eq!(error.to_string(), "selectify returned status 500: boom");
    }

    #[test]
    fn missing_session_names_the_action() {
        assert_eq!(
            ClientError::MissingSession { action: "delete a query" }.to_string(),
            "please sign in first to delete a query"
        );
    }
}
