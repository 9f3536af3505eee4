//! PostgreSQL test infrastructure
//!
//! Starts a throwaway Postgres container and connects through the same
//! `database::postgres` path the service uses in production.

use database::common::RetryConfig;
use database::postgres::{PostgresConfig, connect_from_config_with_retry};
use sea_orm::DatabaseConnection;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;

/// Test database wrapper that ensures proper cleanup
///
/// The container is stopped and removed when this struct is dropped.
/// Schema creation is left to the caller (`TodoRepository::ensure_schema`).
pub struct TestDatabase {
    #[allow(dead_code)]
    container: ContainerAsync<Postgres>,
    pub connection: DatabaseConnection,
    pub connection_string: String,
}

impl TestDatabase {
    /// Start Postgres and open a small pool against it.
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// let conn = db.connection();
    /// # }
    /// ```
    pub async fn new() -> Self {
        // Use Postgres 18 to match production
        let postgres = Postgres::default().with_tag("18-alpine");

        let container = postgres
            .start()
            .await
            .expect("Failed to start Postgres container");

        let host_port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get host port");

        let config = PostgresConfig {
            host: "127.0.0.1".to_string(),
            port: host_port,
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            database: "postgres".to_string(),
            ..PostgresConfig::default()
        }
        .with_pool_size(5, 1);
        let connection_string = config.url();

        let retry = RetryConfig::new().with_initial_delay(200).with_max_retries(10);
        let connection = connect_from_config_with_retry(config, Some(retry))
            .await
            .expect("Failed to connect to test database");

        tracing::info!(port = host_port, "Test database ready (Postgres 18)");

        Self {
            container,
            connection,
            connection_string,
        }
    }

    /// Get a cloned connection (useful for passing to repositories)
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }
}

impl Drop for TestDatabase {
    fn drop(&mut self) {
        tracing::debug!("Cleaning up test database container");
    }
}
