mod transaction_store;

pub use transaction_store::{DistinctQuery, MostQueriedDomain, TimeBucket, TransactionStore};
