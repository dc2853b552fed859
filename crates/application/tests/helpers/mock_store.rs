use async_trait::async_trait;
use packtrace_application::ports::{
    DistinctQuery, MostQueriedDomain, TimeBucket, TransactionStore,
};
use packtrace_domain::{DnsTransaction, DomainError, StoredTransaction};
use std::sync::Mutex;

/// In-memory [`TransactionStore`] with canned report rows and an optional
/// failure switch.
pub struct MockTransactionStore {
    inserted: Mutex<Vec<DnsTransaction>>,
    should_fail: Mutex<bool>,
    most_queried: Mutex<Vec<MostQueriedDomain>>,
    over_time: Mutex<Vec<TimeBucket>>,
    unique: Mutex<Vec<DistinctQuery>>,
}

impl MockTransactionStore {
    pub fn new() -> Self {
        Self {
            inserted: Mutex::new(Vec::new()),
            should_fail: Mutex::new(false),
            most_queried: Mutex::new(Vec::new()),
            over_time: Mutex::new(Vec::new()),
            unique: Mutex::new(Vec::new()),
        }
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.lock().unwrap() = should_fail;
    }

    pub fn set_most_queried(&self, rows: Vec<MostQueriedDomain>) {
        *self.most_queried.lock().unwrap() = rows;
    }

    pub fn set_over_time(&self, rows: Vec<TimeBucket>) {
        *self.over_time.lock().unwrap() = rows;
    }

    pub fn set_unique(&self, rows: Vec<DistinctQuery>) {
        *self.unique.lock().unwrap() = rows;
    }

    pub fn inserted(&self) -> Vec<DnsTransaction> {
        self.inserted.lock().unwrap().clone()
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if *self.should_fail.lock().unwrap() {
            return Err(DomainError::DatabaseError("mock store failed".to_string()));
        }
        Ok(())
    }
}

impl Default for MockTransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransactionStore for MockTransactionStore {
    async fn insert(&self, transaction: &DnsTransaction) -> Result<(), DomainError> {
        self.check_failure()?;
        self.inserted.lock().unwrap().push(transaction.clone());
        Ok(())
    }

    async fn recent(&self, _limit: u32) -> Result<Vec<StoredTransaction>, DomainError> {
        self.check_failure()?;
        Ok(Vec::new())
    }

    async fn most_queried_domains(&self) -> Result<Vec<MostQueriedDomain>, DomainError> {
        self.check_failure()?;
        Ok(self.most_queried.lock().unwrap().clone())
    }

    async fn queries_over_time(&self) -> Result<Vec<TimeBucket>, DomainError> {
        self.check_failure()?;
        Ok(self.over_time.lock().unwrap().clone())
    }

    async fn unique_domains(&self) -> Result<Vec<DistinctQuery>, DomainError> {
        self.check_failure()?;
        Ok(self.unique.lock().unwrap().clone())
    }
}
