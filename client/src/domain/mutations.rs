//! Create, update, and delete actions with local list reconciliation.
//!
//! Every action reports its outcome through the [`Notifier`] port and then
//! splices the affected record into or out of the page's [`ListStore`]
//! rather than re-fetching. Recommendation writes are paired with a second
//! request that moves the parent query's counter; that step is best-effort
//! and never rolled back.
//!
//! [`Notifier`]: super::ports::Notifier

use tracing::{debug, warn};

use super::ports::{MutationReceipt, NewRecommendation, NewReview, QueryUpdate, SelectifyApiError};
use super::{ClientContext, ClientError, ListStore, QuerySource, RecommendationSource, RecordId};

/// Outcome of the counter request paired with a recommendation write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterSync {
    /// The parent query's counter moved.
    Applied,
    /// The counter request failed; the primary write still stands.
    Failed(SelectifyApiError),
}

impl CounterSync {
    /// Whether the counter moved.
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Outcome of a confirmed or declined delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined; nothing was requested.
    Cancelled,
    /// The record was deleted and removed from the list.
    Deleted {
        /// Counter step for recommendation deletes, `None` for queries.
        counter: Option<CounterSync>,
    },
}

/// Result of creating a recommendation.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedRecommendation {
    /// Backend acknowledgement of the insert.
    pub receipt: MutationReceipt,
    /// Counter step outcome.
    pub counter: CounterSync,
}

/// Mutation entry points for one page.
#[derive(Debug, Clone)]
pub struct MutationActions {
    context: ClientContext,
}

impl MutationActions {
    /// Build actions over the context's adapters.
    pub fn new(context: &ClientContext) -> Self {
        Self {
            context: context.clone(),
        }
    }

    /// Confirm, then delete a query and drop it from `store`.
    pub async fn delete_query(
        &self,
        store: &mut ListStore<QuerySource>,
        id: &RecordId,
    ) -> Result<DeleteOutcome, ClientError> {
        if !self
            .context
            .confirmation
            .confirm("Are you sure you want to delete this query?")
        {
            debug!(%id, "query delete cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }
        match self.context.api.delete_query(id).await {
            Ok(_) => {
                store.remove(id);
                self.context.notifier.success("Query deleted successfully");
                Ok(DeleteOutcome::Deleted { counter: None })
            }
            Err(error) => {
                warn!(%id, kind = error.kind(), %error, "query delete failed");
                self.context.notifier.error("Error deleting query");
                Err(error.into())
            }
        }
    }

    /// Confirm, delete a recommendation, drop it from `store`, then decrement
    /// the parent query's counter.
    pub async fn delete_recommendation(
        &self,
        store: &mut ListStore<RecommendationSource>,
        id: &RecordId,
        query_id: &RecordId,
    ) -> Result<DeleteOutcome, ClientError> {
        if !self
            .context
            .confirmation
            .confirm("Are you sure you want to delete this recommendation?")
        {
            debug!(%id, "recommendation delete cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }
        if let Err(error) = self.context.api.delete_recommendation(id).await {
            warn!(%id, kind = error.kind(), %error, "recommendation delete failed");
            self.context
                .notifier
                .error("Failed to delete recommendation");
            return Err(error.into());
        }
        let counter = self.sync_counter(query_id, CounterStep::Decrement).await;
        store.remove(id);
        self.context
            .notifier
            .success("Recommendation deleted successfully");
        Ok(DeleteOutcome::Deleted {
            counter: Some(counter),
        })
    }

    /// Create a recommendation, increment the parent's counter, and append
    /// the new record to `store`.
    ///
    /// When the backend does not echo the inserted id the store is reloaded
    /// instead.
    pub async fn create_recommendation(
        &self,
        store: &mut ListStore<RecommendationSource>,
        recommendation: NewRecommendation,
    ) -> Result<CreatedRecommendation, ClientError> {
        let receipt = match self.context.api.create_recommendation(&recommendation).await {
            Ok(receipt) => receipt,
            Err(error) => {
                warn!(query_id = %recommendation.query_id, kind = error.kind(), %error, "recommendation create failed");
                self.context.notifier.error("Failed to add recommendation");
                return Err(error.into());
            }
        };
        let counter = self
            .sync_counter(&recommendation.query_id, CounterStep::Increment)
            .await;
        match receipt.inserted_id() {
            Some(id) => store.push(recommendation.into_recommendation(id)),
            None => {
                store.reload().await;
            }
        }
        self.context
            .notifier
            .success("Recommendation added successfully!");
        Ok(CreatedRecommendation { receipt, counter })
    }

    /// Post a review.
    pub async fn create_review(&self, review: &NewReview) -> Result<MutationReceipt, ClientError> {
        match self.context.api.create_review(review).await {
            Ok(receipt) => {
                self.context.notifier.success("Review added successfully!");
                Ok(receipt)
            }
            Err(error) => {
                warn!(query_id = %review.query_id, kind = error.kind(), %error, "review create failed");
                self.context.notifier.error("Failed to add review");
                Err(error.into())
            }
        }
    }

    /// Patch a query's editable fields, updating the local copy in `store`
    /// when one is held.
    pub async fn update_query(
        &self,
        store: Option<&mut ListStore<QuerySource>>,
        id: &RecordId,
        update: &QueryUpdate,
    ) -> Result<MutationReceipt, ClientError> {
        match self.context.api.update_query(id, update).await {
            Ok(receipt) => {
                if let Some(store) = store {
                    store.update(id, |query| update.apply_to(query));
                }
                self.context
                    .notifier
                    .success(receipt.message().unwrap_or("Query updated successfully"));
                Ok(receipt)
            }
            Err(error) => {
                warn!(%id, kind = error.kind(), %error, "query update failed");
                self.context.notifier.error("Error updating query");
                Err(error.into())
            }
        }
    }

    async fn sync_counter(&self, query_id: &RecordId, step: CounterStep) -> CounterSync {
        let result = match step {
            CounterStep::Increment => self.context.api.increment_recommendation_count(query_id).await,
            CounterStep::Decrement => self.context.api.decrement_recommendation_count(query_id).await,
        };
        match result {
            Ok(_) => CounterSync::Applied,
            Err(error) => {
                warn!(%query_id, ?step, kind = error.kind(), %error, "recommendation counter update failed");
                CounterSync::Failed(error)
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum CounterStep {
    Increment,
    Decrement,
}

#[cfg(test)]
#[path = "mutations_tests.rs"]
mod tests;
