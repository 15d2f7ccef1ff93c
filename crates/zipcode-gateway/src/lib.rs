//! HTTP gateway for the zip code directory.
//!
//! Maps the `/v1/zip-code` routes onto a [`zipcode_core::ZipCodeDirectory`]
//! and translates directory errors into status codes.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;
