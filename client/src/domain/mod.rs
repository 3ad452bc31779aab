//! Domain records, ports, and page-level controllers.
//!
//! Purpose: define the boycott-board records (queries, recommendations,
//! reviews), the list and form state built on them, and the ports through
//! which the outside world (HTTP backend, notices, confirmation prompts) is
//! reached. Nothing here knows about HTTP or terminals.

mod context;
mod error;
pub mod forms;
mod list_record;
mod list_source;
mod list_store;
mod list_view;
mod mutations;
pub mod ports;
mod query;
mod recommendation;
mod record_id;
mod review;
mod session;
mod timestamp;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use self::context::ClientContext;
pub use self::error::ClientError;
pub use self::forms::{
    FormController, FormDraft, FormState, FormValidationError, QueryUpdateForm,
    RecommendationDraft, RecommendationForm, ReviewDraft, ReviewForm, Route, UpdatedQuery,
};
pub use self::list_record::ListRecord;
pub use self::list_source::{ListSource, QuerySource, RecommendationSource, ReviewSource};
pub use self::list_store::{ListStore, LoadOutcome};
pub use self::list_view::{
    HOME_RECENT_LIMIT, Layout, LayoutParseError, ListView, sort_newest_first,
};
pub use self::mutations::{CounterSync, CreatedRecommendation, DeleteOutcome, MutationActions};
pub use self::query::Query;
pub use self::recommendation::{Recommendation, RecommendationDetails};
pub use self::record_id::{RecordId, RecordIdValidationError};
pub use self::review::Review;
pub use self::session::{Session, SessionUser};
pub use self::timestamp::Timestamp;
