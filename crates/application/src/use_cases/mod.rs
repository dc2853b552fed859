pub mod record_packet;
pub mod stats;

pub use record_packet::RecordPacketUseCase;
pub use stats::{
    GetMostQueriedDomainsUseCase, GetQueriesOverTimeUseCase, GetRecentTransactionsUseCase,
    GetUniqueDomainsUseCase,
};
