//! gRPC server helpers.
//!
//! ```ignore
//! use core_config::FromEnv;
//! use core_grpc::server::{GrpcServer, ServerConfig};
//! use rpc::todo::v1::todo_service_server::{TodoServiceServer, SERVICE_NAME};
//! use tonic::transport::Server;
//!
//! let config = ServerConfig::from_env()?;
//! let (health_reporter, health_service) = GrpcServer::health_service();
//!
//! GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
//! GrpcServer::log_startup(&config, SERVICE_NAME);
//!
//! Server::builder()
//!     .add_service(health_service)
//!     .add_service(TodoServiceServer::new(my_impl))
//!     .serve(config.socket_addr()?)
//!     .await?;
//! ```

mod builder;
mod config;

pub use builder::GrpcServer;
pub use config::ServerConfig;
