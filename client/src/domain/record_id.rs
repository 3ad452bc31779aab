//! Backend-assigned record identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`RecordId::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordIdValidationError {
    /// The identifier was empty or whitespace only.
    Empty,
}

impl fmt::Display for RecordIdValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "record id must not be empty"),
        }
    }
}

impl std::error::Error for RecordIdValidationError {}

/// Opaque identifier of a query, recommendation, or review.
///
/// The backend owns the format (MongoDB object ids in practice); the client
/// only guarantees the value is non-blank so it always yields a usable URL
/// path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Validate and construct a [`RecordId`].
    ///
    /// # Examples
    /// ```
    /// use selectify::domain::RecordId;
    ///
    /// let id = RecordId::new("65a1f0c2").expect("valid id");
    /// assert_eq!(id.as_ref(), "65a1f0c2");
    /// assert!(RecordId::new("  ").is_err());
    /// ```
    pub fn new(id: impl Into<String>) -> Result<Self, RecordIdValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(RecordIdValidationError::Empty);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<RecordId> for String {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

impl TryFrom<String> for RecordId {
    type Error = RecordIdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
