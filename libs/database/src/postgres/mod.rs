//! PostgreSQL connector and utilities

mod config;
mod connector;
mod health;

pub use config::{PostgresConfig, SslMode};
pub use connector::{connect_from_config, connect_from_config_with_retry};
pub use health::check_health;

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
