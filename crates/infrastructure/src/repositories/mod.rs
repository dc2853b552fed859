pub mod transaction_repository;

pub use transaction_repository::SqliteTransactionStore;
