//! Fetch-on-demand collection state shared by every list page.
//!
//! A [`ListStore`] owns one collection plus its `loading` and `error` flags.
//! Every load re-fetches the full collection; nothing is cached between
//! loads. Mutations reconcile the local copy by identity instead of
//! re-fetching.

use std::sync::Arc;

use tracing::{debug, warn};

use super::list_source::ListSource;
use super::ports::{Notifier, SelectifyApi, SelectifyApiError};
use super::{ClientContext, ListRecord, RecordId};

/// Result of a [`ListStore::load`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The collection was replaced with `count` records.
    Loaded {
        /// Number of records received.
        count: usize,
    },
    /// The request failed; the previous collection was kept.
    Failed {
        /// Why the request failed.
        error: SelectifyApiError,
    },
    /// No source was available so no request was issued.
    Skipped,
}

/// Collection state for one page.
pub struct ListStore<S: ListSource> {
    api: Arc<dyn SelectifyApi>,
    notifier: Arc<dyn Notifier>,
    source: Option<S>,
    records: Vec<S::Record>,
    loading: bool,
    error: Option<SelectifyApiError>,
}

impl<S: ListSource> ListStore<S> {
    /// Build an empty store wired to the context's adapters.
    pub fn new(context: &ClientContext) -> Self {
        Self {
            api: Arc::clone(&context.api),
            notifier: Arc::clone(&context.notifier),
            source: None,
            records: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// Fetch the collection for `source`, replacing the current records on
    /// success.
    ///
    /// On failure an error notice is raised and the previous records are
    /// kept.
    pub async fn load(&mut self, source: S) -> LoadOutcome {
        self.source = Some(source.clone());
        self.loading = true;
        debug!(source = ?source, "loading list");
        let result = source.fetch(self.api.as_ref()).await;
        self.loading = false;
        match result {
            Ok(records) => {
                let count = records.len();
                debug!(source = ?source, count, "list loaded");
                self.records = records;
                self.error = None;
                LoadOutcome::Loaded { count }
            }
            Err(error) => {
                warn!(source = ?source, kind = error.kind(), %error, "list load failed");
                self.notifier
                    .error(&format!("Error fetching {}", source.label()));
                self.error = Some(error.clone());
                LoadOutcome::Failed { error }
            }
        }
    }

    /// Load `source` if one is available.
    ///
    /// Identity-keyed sources are `None` until the session email is known;
    /// in that case nothing is requested.
    pub async fn load_when_ready(&mut self, source: Option<S>) -> LoadOutcome {
        match source {
            Some(source) => self.load(source).await,
            None => {
                debug!("list source not ready; skipping load");
                LoadOutcome::Skipped
            }
        }
    }

    /// Re-run the last load.
    pub async fn reload(&mut self) -> LoadOutcome {
        let source = self.source.clone();
        self.load_when_ready(source).await
    }

    /// Records in backend order.
    pub fn records(&self) -> &[S::Record] {
        &self.records
    }

    /// Whether a load is in flight.
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Error from the most recent failed load, cleared by the next success.
    pub const fn error(&self) -> Option<&SelectifyApiError> {
        self.error.as_ref()
    }

    /// The source of the most recent load.
    pub const fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    /// Look up a record by identity.
    pub fn find(&self, id: &RecordId) -> Option<&S::Record> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Drop every record with `id`, keeping the rest in order. Returns how
    /// many were removed.
    pub fn remove(&mut self, id: &RecordId) -> usize {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        before - self.records.len()
    }

    /// Append a record.
    pub fn push(&mut self, record: S::Record) {
        self.records.push(record);
    }

    /// Replace the record sharing `record`'s id. Returns `false` when no such
    /// record is held.
    pub fn replace(&mut self, record: S::Record) -> bool {
        match self
            .records
            .iter_mut()
            .find(|existing| existing.id() == record.id())
        {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Patch the record with `id` in place. Returns `false` when no such
    /// record is held.
    pub fn update(&mut self, id: &RecordId, patch: impl FnOnce(&mut S::Record)) -> bool {
        match self.records.iter_mut().find(|record| record.id() == id) {
            Some(record) => {
                patch(record);
                true
            }
            None => false,
        }
    }
}

impl<S: ListSource> std::fmt::Debug for ListStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListStore")
            .field("source", &self.source)
            .field("records", &self.records.len())
            .field("loading", &self.loading)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "list_store_tests.rs"]
mod tests;
