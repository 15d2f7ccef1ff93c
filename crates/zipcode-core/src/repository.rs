use crate::error::StorageError;
use crate::record::ZipCodeRecord;
use crate::zipcode::ZipCode;
use async_trait::async_trait;

/// Result type for record store operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A read-only view of the record store.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Retrieves the record for a given zip code.
    /// Returns `None` if the code does not exist.
    async fn get(&self, zip: &ZipCode) -> Result<Option<ZipCodeRecord>>;

    /// Returns every stored record, ordered by zip code.
    async fn list_all(&self) -> Result<Vec<ZipCodeRecord>>;

    /// Returns the number of stored records.
    async fn count(&self) -> Result<u64>;
}

#[async_trait]
pub trait Repository: ReadRepository {
    /// Inserts a new record atomically.
    /// Returns `Err(StorageError::Conflict)` if the zip code already exists.
    async fn insert(&self, record: ZipCodeRecord) -> Result<()>;

    /// Removes every record and returns how many were removed.
    async fn delete_all(&self) -> Result<u64>;
}
