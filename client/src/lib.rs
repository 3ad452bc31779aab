//! Selectify client library: boycott-board records, list and form
//! controllers, the HTTP adapter, and the terminal front end.

pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod settings;

pub use settings::SelectifySettings;
