//! Signed-in user identity supplied by the auth collaborator.

use serde::{Deserialize, Serialize};

use super::ClientError;

/// Identity of the signed-in user, read but never modified by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// Email address; also the ownership key for queries.
    pub email: String,
    /// Display name.
    #[serde(default)]
    pub display_name: String,
    /// Avatar URL.
    #[serde(rename = "photoURL", default)]
    pub photo_url: String,
    /// Auth provider uid.
    #[serde(default)]
    pub uid: String,
}

/// Explicit session handed to every page-level controller.
///
/// # Examples
/// ```
/// use selectify::domain::{Session, SessionUser};
///
/// let anonymous = Session::anonymous();
/// assert!(anonymous.email().is_none());
///
/// let session = Session::signed_in(SessionUser {
///     email: "ana@example.com".to_owned(),
///     display_name: "Ana".to_owned(),
///     photo_url: String::new(),
///     uid: "uid-1".to_owned(),
/// });
/// assert_eq!(session.email(), Some("ana@example.com"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    user: Option<SessionUser>,
}

impl Session {
    /// A session with nobody signed in.
    pub const fn anonymous() -> Self {
        Self { user: None }
    }

    /// A session for `user`.
    pub const fn signed_in(user: SessionUser) -> Self {
        Self { user: Some(user) }
    }

    /// The signed-in user, if any.
    pub const fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    /// The signed-in user's email; `None` until the identity is known.
    pub fn email(&self) -> Option<&str> {
        self.user
            .as_ref()
            .map(|user| user.email.as_str())
            .filter(|email| !email.trim().is_empty())
    }

    /// Return the signed-in user or a [`ClientError::MissingSession`]
    /// naming the attempted action.
    pub fn require_user(&self, action: &'static str) -> Result<&SessionUser, ClientError> {
        self.user().ok_or(ClientError::MissingSession { action })
    }
}
