//! Collaborators shared by every page-level controller.

use std::sync::Arc;

use mockable::Clock;

use super::Session;
use super::ports::{Confirmation, Notifier, SelectifyApi};

/// Strongly-typed port bundle handed to stores, actions, and forms.
#[derive(Clone)]
pub struct ClientContext {
    /// Remote API adapter.
    pub api: Arc<dyn SelectifyApi>,
    /// Outcome reporting adapter.
    pub notifier: Arc<dyn Notifier>,
    /// Destructive-action confirmation adapter.
    pub confirmation: Arc<dyn Confirmation>,
    /// Source of generation timestamps.
    pub clock: Arc<dyn Clock>,
    /// Signed-in user, if any.
    pub session: Session,
}

impl ClientContext {
    /// Build a context from its collaborators.
    pub fn new(
        api: Arc<dyn SelectifyApi>,
        notifier: Arc<dyn Notifier>,
        confirmation: Arc<dyn Confirmation>,
        clock: Arc<dyn Clock>,
        session: Session,
    ) -> Self {
        Self {
            api,
            notifier,
            confirmation,
            clock,
            session,
        }
    }
}

impl std::fmt::Debug for ClientContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientContext")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
