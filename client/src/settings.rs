//! Client configuration loaded via OrthoConfig.
//!
//! Values come from `SELECTIFY_*` environment variables or a configuration
//! file. The signed-in user is supplied here because authentication happens
//! outside the client.

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::domain::{Session, SessionUser};
use crate::outbound::http::DEFAULT_BASE_URL;

/// Backend location and session identity for the CLI.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SELECTIFY")]
pub struct SelectifySettings {
    /// Backend host; the public deployment unless overridden.
    #[ortho_config(default = DEFAULT_BASE_URL.to_owned())]
    pub base_url: String,
    /// Signed-in user's email; no session exists without it.
    pub user_email: Option<String>,
    /// Signed-in user's display name.
    pub user_name: Option<String>,
    /// Signed-in user's avatar URL.
    pub user_photo_url: Option<String>,
    /// Signed-in user's auth provider uid.
    pub user_uid: Option<String>,
}

impl SelectifySettings {
    /// Parse the configured backend URL.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured value is not an absolute URL.
    pub fn base_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_url)
    }

    /// Build the session described by the `user_*` values.
    ///
    /// A blank or missing email yields an anonymous session.
    pub fn session(&self) -> Session {
        let Some(email) = self
            .user_email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
        else {
            return Session::anonymous();
        };
        Session::signed_in(SessionUser {
            email: email.to_owned(),
            display_name: self.user_name.clone().unwrap_or_default(),
            photo_url: self.user_photo_url.clone().unwrap_or_default(),
            uid: self.user_uid.clone().unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for client configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> SelectifySettings {
        SelectifySettings::load_from_iter([OsString::from("selectify")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_to_public_host_and_anonymous_session() {
        let _guard = lock_env([
            ("SELECTIFY_BASE_URL", None::<String>),
            ("SELECTIFY_USER_EMAIL", None::<String>),
            ("SELECTIFY_USER_NAME", None::<String>),
            ("SELECTIFY_USER_PHOTO_URL", None::<String>),
            ("SELECTIFY_USER_UID", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.base_url().expect("default parses").as_str(),
            "https://selectify-sigma.vercel.app/"
        );
        assert_eq!(settings.session(), Session::anonymous());
    }

    #[rstest]
    fn environment_supplies_host_and_identity() {
        let _guard = lock_env([
            ("SELECTIFY_BASE_URL", Some("http://127.0.0.1:8080".to_owned())),
            ("SELECTIFY_USER_EMAIL", Some("ana@example.com".to_owned())),
            ("SELECTIFY_USER_NAME", Some("Ana".to_owned())),
            ("SELECTIFY_USER_PHOTO_URL", None::<String>),
            ("SELECTIFY_USER_UID", Some("uid-ana".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.base_url().expect("override parses").host_str(),
            Some("127.0.0.1")
        );
        let session = settings.session();
        let user = session.user().expect("signed in");
        assert_eq!(user.email, "ana@example.com");
        assert_eq!(user.display_name, "Ana");
        assert!(user.photo_url.is_empty());
    }

    #[rstest]
    fn blank_email_means_no_session() {
        let _guard = lock_env([
            ("SELECTIFY_BASE_URL", None::<String>),
            ("SELECTIFY_USER_EMAIL", Some("   ".to_owned())),
            ("SELECTIFY_USER_NAME", Some("Ghost".to_owned())),
            ("SELECTIFY_USER_PHOTO_URL", None::<String>),
            ("SELECTIFY_USER_UID", None::<String>),
        ]);

        assert!(load_from_empty_args().session().user().is_none());
    }

    #[rstest]
    fn invalid_base_url_is_reported() {
        let settings = SelectifySettings {
            base_url: "not a url".to_owned(),
            user_email: None,
            user_name: None,
            user_photo_url: None,
            user_uid: None,
        };
        assert!(settings.base_url().is_err());
    }
}
