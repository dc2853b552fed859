use packtrace_domain::config::DatabaseConfig;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Open (creating if missing) the transaction log database and make sure the
/// schema exists. Safe to call against an existing populated store.
pub async fn create_pool(
    database_url: &str,
    cfg: &DatabaseConfig,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(cfg.busy_timeout_secs));

    let pool = SqlitePoolOptions::new()
        .max_connections(cfg.max_connections)
        .connect_with(options)
        .await?;

    ensure_schema(&pool).await?;

    Ok(pool)
}

/// Idempotent schema setup: one append-only table plus lookup indexes on
/// domain and source address.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS dns_transactions (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp      TEXT NOT NULL,
            source_ip      TEXT NOT NULL,
            domain         TEXT NOT NULL,
            query_type     TEXT NOT NULL,
            alias_path     TEXT,
            response_ips   TEXT,
            role           TEXT NOT NULL,
            correlation_id INTEGER
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_dns_transactions_domain ON dns_transactions(domain)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_dns_transactions_source_ip ON dns_transactions(source_ip)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
