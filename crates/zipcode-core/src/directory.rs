use crate::error::DirectoryError;
use crate::record::{ZipCodePage, ZipCodeRecord};
use crate::zipcode::ZipCode;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, DirectoryError>;

/// Result of an idempotent create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOutcome {
    /// The stored record. When `created` is false this is the record that was
    /// already present, not the caller's input.
    pub record: ZipCodeRecord,
    /// Whether this call inserted the record.
    pub created: bool,
}

#[async_trait]
pub trait ZipCodeDirectory: Send + Sync + 'static {
    /// Looks up a record, failing with [`DirectoryError::NotFound`] when absent.
    async fn find_by_id(&self, zip: &ZipCode) -> Result<ZipCodeRecord>;

    /// Returns every record together with the total count.
    async fn list_first_page_with_total(&self) -> Result<ZipCodePage>;

    /// Returns the current record count.
    async fn count_all(&self) -> Result<u64>;

    /// Creates the record unless one with the same zip code already exists,
    /// in which case the stored record is returned unchanged.
    async fn create(&self, input: ZipCodeRecord) -> Result<CreateOutcome>;

    /// Removes every record and returns how many were removed.
    async fn delete_all(&self) -> Result<u64>;
}
