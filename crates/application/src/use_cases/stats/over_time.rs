use crate::ports::{TimeBucket, TransactionStore};
use packtrace_domain::DomainError;
use std::sync::Arc;

/// Transaction volume per minute, both roles, ascending buckets.
pub struct GetQueriesOverTimeUseCase {
    store: Arc<dyn TransactionStore>,
}

impl GetQueriesOverTimeUseCase {
    pub fn new(store: Arc<dyn TransactionStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<Vec<TimeBucket>, DomainError> {
        self.store.queries_over_time().await
    }
}
