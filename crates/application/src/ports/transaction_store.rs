use async_trait::async_trait;
use packtrace_domain::{DnsTransaction, DomainError, Role, StoredTransaction};

/// One row of the most-queried-domains report.
#[derive(Debug, Clone)]
pub struct MostQueriedDomain {
    pub domain: String,
    /// Correlation ids of every matching row, concatenated in
    /// storage-native order. Ids repeat; the field is an audit trail, not a
    /// key.
    pub correlation_ids: String,
    pub count: u64,
}

/// One minute-truncated volume bucket, `YYYY-MM-DD HH:MM`.
#[derive(Debug, Clone)]
pub struct TimeBucket {
    pub bucket: String,
    pub count: u64,
}

/// One distinct (source, domain, role) triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistinctQuery {
    pub source: String,
    pub domain: String,
    pub role: Role,
}

#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Append one transaction. The log is append-only; no update or delete
    /// exists.
    async fn insert(&self, transaction: &DnsTransaction) -> Result<(), DomainError>;

    async fn recent(&self, limit: u32) -> Result<Vec<StoredTransaction>, DomainError>;

    async fn most_queried_domains(&self) -> Result<Vec<MostQueriedDomain>, DomainError>;

    async fn queries_over_time(&self) -> Result<Vec<TimeBucket>, DomainError>;

    async fn unique_domains(&self) -> Result<Vec<DistinctQuery>, DomainError>;
}
