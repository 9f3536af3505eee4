//! PostgreSQL connectivity shared by the domain crates and binaries.
//!
//! - [`postgres::PostgresConfig`] loads connection and pool settings from the environment
//! - [`postgres::connect_from_config_with_retry`] opens the SeaORM pool, retrying transient failures
//! - [`postgres::check_health`] runs `SELECT 1` against the pool
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{self, PostgresConfig};
//! use database::common::RetryConfig;
//!
//! let config = PostgresConfig::from_env()?;
//! let db = postgres::connect_from_config_with_retry(config, Some(RetryConfig::from_env()?)).await?;
//! postgres::check_health(&db).await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
