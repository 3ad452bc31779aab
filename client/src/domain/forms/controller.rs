//! Draft state machine shared by every form.
//!
//! A form moves `Editing → Submitting → {Succeeded, Failed}`. Failure hands
//! control back to editing with the draft intact; success on a create form
//! resets the draft.

/// Client-side validation failures. None of these issue a request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormValidationError {
    /// One or more required fields are blank.
    #[error("please fill in every field (missing: {})", .fields.join(", "))]
    MissingFields {
        /// Wire names of the blank fields, in declaration order.
        fields: Vec<&'static str>,
    },
    /// The setter was called with a name the draft does not declare.
    #[error("unknown form field `{field}`")]
    UnknownField {
        /// Name that was rejected.
        field: String,
    },
    /// A submission is already in flight.
    #[error("a submission is already in progress")]
    AlreadySubmitting,
}

/// A set of named, required text fields.
pub trait FormDraft: Clone + Default {
    /// Wire names of every editable field, in display order.
    const FIELDS: &'static [&'static str];

    /// Read a field by wire name.
    fn field(&self, name: &str) -> Option<&str>;

    /// Mutable access to a field by wire name.
    fn field_mut(&mut self, name: &str) -> Option<&mut String>;
}

/// Where a form is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    /// Accepting edits.
    #[default]
    Editing,
    /// Waiting on the network.
    Submitting,
    /// The last submission succeeded.
    Succeeded,
    /// The last submission failed; the draft is preserved.
    Failed,
}

/// Holds one draft and its lifecycle state.
#[derive(Debug, Clone, Default)]
pub struct FormController<D: FormDraft> {
    draft: D,
    state: FormState,
}

impl<D: FormDraft> FormController<D> {
    /// Start editing `draft`.
    pub fn new(draft: D) -> Self {
        Self {
            draft,
            state: FormState::Editing,
        }
    }

    /// The current draft.
    pub const fn draft(&self) -> &D {
        &self.draft
    }

    /// The current lifecycle state.
    pub const fn state(&self) -> FormState {
        self.state
    }

    /// Set the field named `name` to `value`.
    ///
    /// Any edit returns a finished form to editing.
    pub fn set_field(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), FormValidationError> {
        let slot = self
            .draft
            .field_mut(name)
            .ok_or_else(|| FormValidationError::UnknownField {
                field: name.to_owned(),
            })?;
        *slot = value.into();
        if self.state != FormState::Submitting {
            self.state = FormState::Editing;
        }
        Ok(())
    }

    /// Check that every declared field has non-blank content.
    pub fn validate(&self) -> Result<(), FormValidationError> {
        let fields: Vec<&'static str> = D::FIELDS
            .iter()
            .copied()
            .filter(|name| self.draft.field(name).is_none_or(|v| v.trim().is_empty()))
            .collect();
        if fields.is_empty() {
            Ok(())
        } else {
            Err(FormValidationError::MissingFields { fields })
        }
    }

    /// Validate and enter `Submitting`, returning a trimmed copy of the draft
    /// to build the payload from.
    pub fn begin_submit(&mut self) -> Result<D, FormValidationError> {
        if self.state == FormState::Submitting {
            return Err(FormValidationError::AlreadySubmitting);
        }
        self.validate()?;
        self.state = FormState::Submitting;
        let mut trimmed = self.draft.clone();
        for name in D::FIELDS {
            if let Some(value) = trimmed.field_mut(name) {
                let clean = value.trim().to_owned();
                *value = clean;
            }
        }
        Ok(trimmed)
    }

    /// Finish a successful submission, clearing the draft when `reset`.
    pub fn succeed(&mut self, reset: bool) {
        if reset {
            self.draft = D::default();
        }
        self.state = FormState::Succeeded;
    }

    /// Finish a failed submission, keeping the draft for another attempt.
    pub fn fail(&mut self) {
        self.state = FormState::Failed;
    }

    /// Replace the whole draft, e.g. after loading the record being edited.
    pub fn replace_draft(&mut self, draft: D) {
        self.draft = draft;
        self.state = FormState::Editing;
    }
}
