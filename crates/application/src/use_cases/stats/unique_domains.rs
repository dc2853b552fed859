use crate::ports::{DistinctQuery, TransactionStore};
use packtrace_domain::DomainError;
use std::sync::Arc;

/// Distinct (source, domain, role) triples over the whole log.
pub struct GetUniqueDomainsUseCase {
    store: Arc<dyn TransactionStore>,
}

impl GetUniqueDomainsUseCase {
    pub fn new(store: Arc<dyn TransactionStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<Vec<DistinctQuery>, DomainError> {
        self.store.unique_domains().await
    }
}
