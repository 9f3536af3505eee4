use sea_orm::{Database, DatabaseConnection, DbErr};
use tracing::info;

use super::PostgresConfig;
use crate::common::{DatabaseError, DatabaseResult, RetryConfig, retry_with_backoff};

/// Open a connection pool with a single attempt.
pub async fn connect_from_config(config: PostgresConfig) -> Result<DatabaseConnection, DbErr> {
    let target = config.redacted_url();
    let db = Database::connect(config.into_connect_options()).await?;
    info!(url = %target, "Connected to PostgreSQL");
    Ok(db)
}

/// Open a connection pool, retrying with exponential backoff.
///
/// `None` uses [`RetryConfig::default`]. Exhausting the budget yields
/// [`DatabaseError::ConnectionFailed`] carrying the last driver error.
pub async fn connect_from_config_with_retry(
    config: PostgresConfig,
    retry_config: Option<RetryConfig>,
) -> DatabaseResult<DatabaseConnection> {
    let retry_config = retry_config.unwrap_or_default();
    let target = config.redacted_url();
    let options = config.into_connect_options();

    info!(url = %target, max_retries = retry_config.max_retries, "Connecting to PostgreSQL");

    let db = retry_with_backoff(|| Database::connect(options.clone()), &retry_config)
        .await
        .map_err(|(attempts, source)| DatabaseError::ConnectionFailed { attempts, source })?;

    info!(url = %target, "Connected to PostgreSQL");
    Ok(db)
}
