//! # gRPC core utilities
//!
//! Shared plumbing for the gRPC services in the monorepo:
//!
//! - [`conversions`]: protobuf ↔ domain helpers (`google.protobuf.Timestamp`, string UUIDs)
//! - [`error`]: `ToTonicResult`, turning conversion failures into INVALID_ARGUMENT
//! - [`server`]: `ServerConfig` loaded from the environment and health-service helpers
//!
//! ## Quick Start
//!
//! ```ignore
//! use core_config::FromEnv;
//! use core_grpc::server::{GrpcServer, ServerConfig};
//! use rpc::todo::v1::todo_service_server::SERVICE_NAME;
//!
//! let config = ServerConfig::from_env()?;
//! let (health_reporter, health_service) = GrpcServer::health_service();
//! GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
//! GrpcServer::log_startup(&config, SERVICE_NAME);
//! ```

pub mod conversions;
pub mod error;
pub mod server;

pub use error::ToTonicResult;
