//! Zip code directory service.
//!
//! [`ZipCodeService`] implements [`zipcode_core::ZipCodeDirectory`] on top of
//! any [`zipcode_core::Repository`]. Core types are re-exported for
//! convenience.

pub mod service;

pub use service::ZipCodeService;
pub use zipcode_core::{CreateOutcome, DirectoryError, ZipCodeDirectory};
