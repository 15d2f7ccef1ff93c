//! Core types and traits for the zip code directory.
//!
//! This crate provides the record model, the error taxonomy and the two
//! seams of the system: the record store traits implemented by
//! `zipcode-storage` and the [`ZipCodeDirectory`] service trait implemented
//! by `zipcode-service`.

pub mod directory;
pub mod error;
pub mod record;
pub mod repository;
pub mod zipcode;

pub use directory::{CreateOutcome, ZipCodeDirectory};
pub use error::{DirectoryError, StorageError};
pub use record::{ZipCodePage, ZipCodeRecord};
pub use repository::{ReadRepository, Repository};
pub use zipcode::ZipCode;
