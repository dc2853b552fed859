use super::Stores;
use packtrace_application::ports::TransactionStore;
use packtrace_application::use_cases::{
    GetMostQueriedDomainsUseCase, GetQueriesOverTimeUseCase, GetRecentTransactionsUseCase,
    GetUniqueDomainsUseCase, RecordPacketUseCase,
};
use packtrace_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub record_packet: RecordPacketUseCase,
    pub most_queried: GetMostQueriedDomainsUseCase,
    pub over_time: GetQueriesOverTimeUseCase,
    pub unique_domains: GetUniqueDomainsUseCase,
    pub recent: GetRecentTransactionsUseCase,
}

impl UseCases {
    pub fn new(stores: &Stores, config: &Config) -> Self {
        let store: Arc<dyn TransactionStore> = stores.transactions.clone();

        Self {
            record_packet: RecordPacketUseCase::new(store.clone())
                .with_strict(config.capture.strict),
            most_queried: GetMostQueriedDomainsUseCase::new(store.clone()),
            over_time: GetQueriesOverTimeUseCase::new(store.clone()),
            unique_domains: GetUniqueDomainsUseCase::new(store.clone()),
            recent: GetRecentTransactionsUseCase::new(store),
        }
    }
}
