use packtrace_infrastructure::repositories::SqliteTransactionStore;
use sqlx::SqlitePool;
use std::sync::Arc;

/// The pool is owned here and handed to each store explicitly; nothing
/// process-wide.
pub struct Stores {
    pub transactions: Arc<SqliteTransactionStore>,
}

impl Stores {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            transactions: Arc::new(SqliteTransactionStore::new(pool)),
        }
    }
}
