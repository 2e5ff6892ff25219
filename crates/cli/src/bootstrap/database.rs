use sqlx::SqlitePool;
use tracing::{error, info};
use visitor_counter_domain::config::DatabaseConfig;
use visitor_counter_infrastructure::create_pool;

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    let database_url = format!("sqlite:{}", cfg.path);
    info!("Initializing database: {}", database_url);

    let pool = create_pool(&database_url, cfg).await.map_err(|e| {
        error!("Failed to initialize database pool: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!(
        max_connections = cfg.max_connections,
        table_prefix = %cfg.table_prefix,
        "Database initialized successfully"
    );

    Ok(pool)
}
