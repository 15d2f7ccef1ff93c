use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use zipcode_core::error::StorageError;
use zipcode_core::repository::{ReadRepository, Repository, Result};
use zipcode_core::{ZipCode, ZipCodeRecord};

/// In-memory implementation of the Repository trait.
///
/// Reads share the lock; `insert` and `delete_all` take it exclusively, so
/// the check-and-insert is atomic per key and a reader sees the store either
/// fully populated or fully cleared, never in between.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    storage: RwLock<HashMap<String, ZipCodeRecord>>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn get(&self, zip: &ZipCode) -> Result<Option<ZipCodeRecord>> {
        Ok(self.storage.read().get(zip.as_str()).cloned())
    }

    async fn list_all(&self) -> Result<Vec<ZipCodeRecord>> {
        let mut records: Vec<ZipCodeRecord> = self.storage.read().values().cloned().collect();
        records.sort_by(|a, b| a.zip.cmp(&b.zip));
        Ok(records)
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.storage.read().len() as u64)
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert(&self, record: ZipCodeRecord) -> Result<()> {
        let mut storage = self.storage.write();
        match storage.entry(record.zip.as_str().to_owned()) {
            Entry::Occupied(_) => Err(StorageError::Conflict(record.zip.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    async fn delete_all(&self) -> Result<u64> {
        let removed = std::mem::take(&mut *self.storage.write());
        Ok(removed.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn record(zip: &str, city: &str) -> ZipCodeRecord {
        ZipCodeRecord {
            zip: ZipCode::new_unchecked(zip),
            city: city.to_string(),
            county: "Some County".to_string(),
            state: "NY".to_string(),
            timezone: "EST".to_string(),
            kind: "STANDARD".to_string(),
        }
    }

    #[tokio::test]
    async fn insert_and_get() {
        let repo = InMemoryRepository::new();

        repo.insert(record("10001", "New York")).await.unwrap();

        let got = repo
            .get(&ZipCode::new_unchecked("10001"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(got, record("10001", "New York"));
    }

    #[tokio::test]
    async fn get_nonexistent() {
        let repo = InMemoryRepository::new();

        let got = repo.get(&ZipCode::new_unchecked("00000")).await.unwrap();
        assert!(got.is_none());
    }

    #[tokio::test]
    async fn insert_conflict_keeps_original() {
        let repo = InMemoryRepository::new();

        repo.insert(record("10001", "New York")).await.unwrap();
        let err = repo.insert(record("10001", "Elsewhere")).await.unwrap_err();
        assert!(matches!(err, StorageError::Conflict(ref zip) if zip == "10001"));

        let got = repo
            .get(&ZipCode::new_unchecked("10001"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(got.city, "New York");
    }

    #[tokio::test]
    async fn list_all_is_ordered_by_zip() {
        let repo = InMemoryRepository::with_capacity(4);

        repo.insert(record("30301", "Atlanta")).await.unwrap();
        repo.insert(record("10001", "New York")).await.unwrap();
        repo.insert(record("60601", "Chicago")).await.unwrap();

        let zips: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.zip.to_string())
            .collect();
        assert_eq!(zips, vec!["10001", "30301", "60601"]);
        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn delete_all_reports_removed_count() {
        let repo = InMemoryRepository::new();

        repo.insert(record("10001", "New York")).await.unwrap();
        repo.insert(record("60601", "Chicago")).await.unwrap();

        assert_eq!(repo.delete_all().await.unwrap(), 2);
        assert_eq!(repo.count().await.unwrap(), 0);
        assert!(repo.list_all().await.unwrap().is_empty());
        assert_eq!(repo.delete_all().await.unwrap(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_inserts_of_same_key_admit_one() {
        let repo = Arc::new(InMemoryRepository::new());
        let mut handles = vec![];

        for i in 0..16u32 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.insert(record("10001", &format!("city-{i}"))).await
            }));
        }

        let mut inserted = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(()) => inserted += 1,
                Err(StorageError::Conflict(_)) => {}
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        assert_eq!(inserted, 1);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn readers_never_observe_partial_delete_all() {
        const RECORDS: u64 = 20_000;
        let repo = Arc::new(InMemoryRepository::with_capacity(RECORDS as usize));

        for round in 0..5 {
            for i in 0..RECORDS {
                repo.insert(record(&format!("{i:05}"), "Somewhere"))
                    .await
                    .unwrap();
            }

            let reader = {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move {
                    let mut observed = vec![];
                    loop {
                        let count = repo.count().await.unwrap();
                        let listed = repo.list_all().await.unwrap().len() as u64;
                        observed.push(count);
                        observed.push(listed);
                        if count == 0 {
                            return observed;
                        }
                        tokio::task::yield_now().await;
                    }
                })
            };

            tokio::task::yield_now().await;
            assert_eq!(repo.delete_all().await.unwrap(), RECORDS, "round {round}");

            let observed = reader.await.unwrap();
            assert!(
                observed.iter().all(|&n| n == 0 || n == RECORDS),
                "round {round} saw a partially cleared store: {observed:?}"
            );
        }
    }
}
