use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};
use tracing::debug;
use zipcode_core::error::StorageError;
use zipcode_core::repository::{ReadRepository, Repository, Result};
use zipcode_core::{ZipCode, ZipCodeRecord};

/// MySQL implementation of the repository contract.
///
/// Key uniqueness is enforced by the primary key on `zip_codes.zip`; a
/// duplicate insert surfaces as [`StorageError::Conflict`]. The schema lives
/// in `ddl/mysql/zip_codes.sql`.
#[derive(Debug, Clone)]
pub struct MySqlRepository {
    pool: MySqlPool,
}

impl MySqlRepository {
    /// Creates a repository from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Creates a repository by opening a new MySQL connection pool.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = MySqlPool::connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

fn to_u64(value: i64, what: &str) -> Result<u64> {
    u64::try_from(value)
        .map_err(|_| StorageError::InvalidData(format!("negative {what}: {value}")))
}

fn row_to_record(row: &MySqlRow) -> Result<ZipCodeRecord> {
    let zip: String = row.try_get("zip").map_err(map_sqlx_error)?;

    Ok(ZipCodeRecord {
        zip: ZipCode::new_unchecked(zip),
        city: row.try_get("city").map_err(map_sqlx_error)?,
        county: row.try_get("county").map_err(map_sqlx_error)?,
        state: row.try_get("state").map_err(map_sqlx_error)?,
        timezone: row.try_get("timezone").map_err(map_sqlx_error)?,
        kind: row.try_get("type").map_err(map_sqlx_error)?,
    })
}

#[async_trait]
impl ReadRepository for MySqlRepository {
    async fn get(&self, zip: &ZipCode) -> Result<Option<ZipCodeRecord>> {
        let row = sqlx::query(
            r#"
            SELECT zip, city, county, state, timezone, `type`
            FROM zip_codes
            WHERE zip = ?
            LIMIT 1
            "#,
        )
        .bind(zip.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.as_ref().map(row_to_record).transpose()
    }

    async fn list_all(&self) -> Result<Vec<ZipCodeRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT zip, city, county, state, timezone, `type`
            FROM zip_codes
            ORDER BY zip
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_record).collect()
    }

    async fn count(&self) -> Result<u64> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM zip_codes")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let total: i64 = row.try_get("total").map_err(map_sqlx_error)?;
        to_u64(total, "row count")
    }
}

#[async_trait]
impl Repository for MySqlRepository {
    async fn insert(&self, record: ZipCodeRecord) -> Result<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO zip_codes (zip, city, county, state, timezone, `type`)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.zip.as_str())
        .bind(&record.city)
        .bind(&record.county)
        .bind(&record.state)
        .bind(&record.timezone)
        .bind(&record.kind)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) if is_unique_violation(&err) => {
                Err(StorageError::Conflict(record.zip.to_string()))
            }
            Err(err) => Err(map_sqlx_error(err)),
        }
    }

    async fn delete_all(&self) -> Result<u64> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let result = sqlx::query("DELETE FROM zip_codes")
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;

        debug!(removed = result.rows_affected(), "deleted all zip codes");
        Ok(result.rows_affected())
    }
}
