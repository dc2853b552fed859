use crate::ports::{MostQueriedDomain, TransactionStore};
use packtrace_domain::DomainError;
use std::sync::Arc;

/// Query-role rows grouped by domain, busiest domains first.
pub struct GetMostQueriedDomainsUseCase {
    store: Arc<dyn TransactionStore>,
}

impl GetMostQueriedDomainsUseCase {
    pub fn new(store: Arc<dyn TransactionStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> Result<Vec<MostQueriedDomain>, DomainError> {
        self.store.most_queried_domains().await
    }
}
