//! HTTP adapter for the Selectify REST backend.

mod endpoint;
mod http_api;

pub use http_api::{DEFAULT_BASE_URL, HttpSelectifyApi, HttpSelectifyApiBuildError};
