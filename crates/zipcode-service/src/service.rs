use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, trace, warn};
use zipcode_core::{
    CreateOutcome, DirectoryError, Repository, StorageError, ZipCode, ZipCodeDirectory,
    ZipCodePage, ZipCodeRecord,
};

type Result<T> = std::result::Result<T, DirectoryError>;

/// A concrete implementation of the `ZipCodeDirectory` trait.
///
/// The service is stateless: it holds only a shared handle to the
/// repository, so clones can be handed to as many request handlers as
/// needed. Uniqueness under concurrent creates relies entirely on the
/// repository rejecting duplicate inserts with [`StorageError::Conflict`].
#[derive(Debug)]
pub struct ZipCodeService<R> {
    repository: Arc<R>,
}

impl<R> Clone for ZipCodeService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: Repository> ZipCodeService<R> {
    /// Creates a new `ZipCodeService` owning the given repository.
    pub fn new(repository: R) -> Self {
        Self::from_shared(Arc::new(repository))
    }

    /// Creates a new `ZipCodeService` over an already shared repository.
    pub fn from_shared(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Resolves a duplicate-key insert by reading back the winning record.
    ///
    /// Called at most once per create.
    async fn resolve_conflict(&self, zip: &ZipCode) -> Result<CreateOutcome> {
        match self.repository.get(zip).await? {
            Some(record) => {
                warn!(zip = %zip, "lost create race, returning existing zip code");
                Ok(CreateOutcome {
                    record,
                    created: false,
                })
            }
            None => {
                error!(zip = %zip, "store reported a duplicate key but the record is missing");
                Err(DirectoryError::Inconsistent(zip.to_string()))
            }
        }
    }
}

#[async_trait]
impl<R: Repository> ZipCodeDirectory for ZipCodeService<R> {
    async fn find_by_id(&self, zip: &ZipCode) -> Result<ZipCodeRecord> {
        trace!(zip = %zip, "looking up zip code");

        self.repository
            .get(zip)
            .await?
            .ok_or_else(|| DirectoryError::NotFound(zip.to_string()))
    }

    async fn list_first_page_with_total(&self) -> Result<ZipCodePage> {
        // The two reads are independent; total may drift from items.len()
        // if a write lands between them.
        let (items, total) =
            tokio::try_join!(self.repository.list_all(), self.repository.count())?;

        debug!(items = items.len(), total, "listed zip codes");
        Ok(ZipCodePage { items, total })
    }

    async fn count_all(&self) -> Result<u64> {
        Ok(self.repository.count().await?)
    }

    async fn create(&self, input: ZipCodeRecord) -> Result<CreateOutcome> {
        let zip = input.zip.clone();

        if let Some(existing) = self.repository.get(&zip).await? {
            debug!(zip = %zip, "zip code already exists");
            return Ok(CreateOutcome {
                record: existing,
                created: false,
            });
        }

        match self.repository.insert(input.clone()).await {
            Ok(()) => {
                debug!(zip = %zip, "zip code created");
                Ok(CreateOutcome {
                    record: input,
                    created: true,
                })
            }
            Err(StorageError::Conflict(_)) => self.resolve_conflict(&zip).await,
            Err(other) => Err(other.into()),
        }
    }

    async fn delete_all(&self) -> Result<u64> {
        let removed = self.repository.delete_all().await?;
        debug!(removed, "deleted all zip codes");
        Ok(removed)
    }
}
