use crate::ports::TransactionStore;
use packtrace_domain::{DomainError, StoredTransaction};
use std::sync::Arc;

const MAX_LIMIT: u32 = 1000;

/// The newest stored transactions, capped to a sane page size.
pub struct GetRecentTransactionsUseCase {
    store: Arc<dyn TransactionStore>,
}

impl GetRecentTransactionsUseCase {
    pub fn new(store: Arc<dyn TransactionStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, limit: u32) -> Result<Vec<StoredTransaction>, DomainError> {
        self.store.recent(limit.min(MAX_LIMIT)).await
    }
}
