//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod confirmation;
mod notifier;
mod selectify_api;

#[cfg(test)]
pub use confirmation::MockConfirmation;
pub use confirmation::{Confirmation, FixedConfirmation};
pub use notifier::{Notice, NoticeLevel, Notifier, RecordingNotifier};
#[cfg(test)]
pub use selectify_api::MockSelectifyApi;
pub use selectify_api::{
    MutationReceipt, NewRecommendation, NewReview, QueryUpdate, SelectifyApi, SelectifyApiError,
};
