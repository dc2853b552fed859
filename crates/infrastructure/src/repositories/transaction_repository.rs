use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use packtrace_application::ports::{
    DistinctQuery, MostQueriedDomain, TimeBucket, TransactionStore,
};
use packtrace_domain::{DnsTransaction, DomainError, Role, StoredTransaction};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::{debug, error, instrument};

/// Append-only SQLite log of DNS transactions.
pub struct SqliteTransactionStore {
    pool: SqlitePool,
}

impl SqliteTransactionStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Timestamps are stored verbatim; accept RFC3339 plus the space-separated
/// form older rows carry.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .map(|dt| dt.and_utc())
                .ok()
        })
}

fn row_to_stored(row: SqliteRow) -> Option<StoredTransaction> {
    let timestamp: String = row.get("timestamp");
    let role: String = row.get("role");

    Some(StoredTransaction {
        id: row.get("id"),
        timestamp: parse_timestamp(&timestamp)?,
        source: row.get("source_ip"),
        domain: row.get("domain"),
        query_type: row.get("query_type"),
        alias_path: row
            .get::<Option<String>, _>("alias_path")
            .unwrap_or_default(),
        response_addresses: row
            .get::<Option<String>, _>("response_ips")
            .unwrap_or_default(),
        role: Role::from_str(&role)?,
        correlation_id: row
            .get::<Option<i64>, _>("correlation_id")
            .map(|id| id as u16),
    })
}

#[async_trait]
impl TransactionStore for SqliteTransactionStore {
    #[instrument(skip(self, transaction))]
    async fn insert(&self, transaction: &DnsTransaction) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO dns_transactions
             (timestamp, source_ip, domain, query_type, alias_path, response_ips, role, correlation_id)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&transaction.timestamp)
        .bind(&transaction.source)
        .bind(&transaction.domain)
        .bind(&transaction.query_type)
        .bind(&transaction.alias_path)
        .bind(transaction.joined_addresses())
        .bind(transaction.role.as_str())
        .bind(transaction.correlation_id as i64)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, domain = %transaction.domain, "Failed to insert DNS transaction");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn recent(&self, limit: u32) -> Result<Vec<StoredTransaction>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, timestamp, source_ip, domain, query_type, alias_path,
                    response_ips, role, correlation_id
             FROM dns_transactions
             ORDER BY id DESC
             LIMIT ?",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch recent transactions");
            DomainError::DatabaseError(e.to_string())
        })?;

        let entries: Vec<StoredTransaction> = rows.into_iter().filter_map(row_to_stored).collect();
        debug!(count = entries.len(), "Recent transactions fetched");
        Ok(entries)
    }

    #[instrument(skip(self))]
    async fn most_queried_domains(&self) -> Result<Vec<MostQueriedDomain>, DomainError> {
        let rows = sqlx::query(
            "SELECT domain,
                    GROUP_CONCAT(correlation_id) AS correlation_ids,
                    COUNT(*) AS count
             FROM dns_transactions
             WHERE role = 'query'
             GROUP BY domain
             ORDER BY count DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch most queried domains");
            DomainError::DatabaseError(e.to_string())
        })?;

        let entries: Vec<MostQueriedDomain> = rows
            .into_iter()
            .map(|row| MostQueriedDomain {
                domain: row.get("domain"),
                correlation_ids: row
                    .get::<Option<String>, _>("correlation_ids")
                    .unwrap_or_default(),
                count: row.get::<i64, _>("count") as u64,
            })
            .collect();

        debug!(count = entries.len(), "Most queried domains fetched");
        Ok(entries)
    }

    #[instrument(skip(self))]
    async fn queries_over_time(&self) -> Result<Vec<TimeBucket>, DomainError> {
        let rows = sqlx::query(
            "SELECT strftime('%Y-%m-%d %H:%M', timestamp) AS bucket,
                    COUNT(*) AS count
             FROM dns_transactions
             GROUP BY bucket
             ORDER BY bucket ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch queries over time");
            DomainError::DatabaseError(e.to_string())
        })?;

        let entries: Vec<TimeBucket> = rows
            .into_iter()
            .filter_map(|row| {
                Some(TimeBucket {
                    bucket: row.get::<Option<String>, _>("bucket")?,
                    count: row.get::<i64, _>("count") as u64,
                })
            })
            .collect();

        debug!(buckets = entries.len(), "Query timeline fetched");
        Ok(entries)
    }

    #[instrument(skip(self))]
    async fn unique_domains(&self) -> Result<Vec<DistinctQuery>, DomainError> {
        let rows = sqlx::query("SELECT DISTINCT source_ip, domain, role FROM dns_transactions")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to fetch unique domains");
                DomainError::DatabaseError(e.to_string())
            })?;

        let entries: Vec<DistinctQuery> = rows
            .into_iter()
            .filter_map(|row| {
                let role: String = row.get("role");
                Some(DistinctQuery {
                    source: row.get("source_ip"),
                    domain: row.get("domain"),
                    role: Role::from_str(&role)?,
                })
            })
            .collect();

        debug!(count = entries.len(), "Unique domains fetched");
        Ok(entries)
    }
}
