use packtrace_domain::Config;
use packtrace_infrastructure::database::create_pool;
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(config: &Config) -> anyhow::Result<SqlitePool> {
    let database_url = format!("sqlite:{}", config.database.path);
    info!("Initializing database: {}", database_url);

    let pool = create_pool(&database_url, &config.database)
        .await
        .map_err(|e| {
            error!("Failed to initialize database: {}", e);
            anyhow::anyhow!(e)
        })?;

    Ok(pool)
}
