//! Record store backends for the zip code directory.

pub mod memory;
pub mod mysql;

pub use memory::InMemoryRepository;
pub use mysql::MySqlRepository;
pub use zipcode_core::error::StorageError;
pub use zipcode_core::repository::{ReadRepository, Repository, Result};
