use core_config::{ConfigError, Environment, FromEnv};
use core_grpc::server::ServerConfig;
use database::common::RetryConfig;
use database::postgres::PostgresConfig;

/// Complete runtime configuration of the todo service
#[derive(Debug, Clone)]
pub struct TodosConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: PostgresConfig,
    pub retry: RetryConfig,
}

impl FromEnv for TodosConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env()?,
            database: PostgresConfig::from_env()?,
            retry: RetryConfig::from_env()?,
        })
    }
}
