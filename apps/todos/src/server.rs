//! gRPC server initialization and lifecycle management
//!
//! - Tracing initialization
//! - Database connection (with retry), health probe and schema bootstrap
//! - gRPC server with gRPC-Web, CORS and request tracing layers
//! - Health check service (grpc.health.v1.Health)
//! - Graceful shutdown on SIGINT / SIGTERM

use core_config::FromEnv;
use core_grpc::server::{GrpcServer, ServerConfig};
use domain_todos::{PgTodoRepository, TodoRepository, TodoService};
use eyre::{Result, WrapErr};
use rpc::todo::v1::todo_service_server::{SERVICE_NAME, TodoServiceServer};
use tokio::signal;
use tonic::codec::CompressionEncoding;
use tonic::transport::Server;
use tonic_web::GrpcWebLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::TodosConfig;
use crate::service::TodoServiceImpl;

/// Run the gRPC server until a shutdown signal arrives.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the database cannot be
/// reached, the schema cannot be created, or the server fails to bind.
pub async fn run() -> Result<()> {
    let config = TodosConfig::from_env().wrap_err("Failed to load configuration")?;
    core_config::tracing::init_tracing(&config.environment);

    info!(url = %config.database.redacted_url(), "Connecting to database...");
    let db = database::postgres::connect_from_config_with_retry(
        config.database.clone(),
        Some(config.retry.clone()),
    )
    .await
    .wrap_err("Failed to connect to database")?;
    database::postgres::check_health(&db)
        .await
        .wrap_err("Database health check failed")?;
    info!("Connected to database successfully");

    let repository = PgTodoRepository::new(db);
    repository
        .ensure_schema()
        .await
        .wrap_err("Failed to ensure database schema")?;

    let todo_service = TodoServiceImpl::new(TodoService::new(repository));

    serve(config.server, todo_service, shutdown_signal()).await
}

/// Serve `todo_service` with the standard layers until `shutdown` resolves.
pub async fn serve<R>(
    config: ServerConfig,
    todo_service: TodoServiceImpl<R>,
    shutdown: impl Future<Output = ()>,
) -> Result<()>
where
    R: TodoRepository + 'static,
{
    let addr = config
        .socket_addr()
        .wrap_err_with(|| format!("Failed to parse server address: {}", config.addr_string()))?;

    let (health_reporter, health_service) = GrpcServer::health_service();
    GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
    GrpcServer::log_startup(&config, SERVICE_NAME);

    let mut todos = TodoServiceServer::new(todo_service)
        .max_decoding_message_size(config.max_decoding_message_size)
        .max_encoding_message_size(config.max_encoding_message_size);
    if config.enable_compression {
        todos = todos
            .accept_compressed(CompressionEncoding::Zstd)
            .send_compressed(CompressionEncoding::Zstd);
    }

    info!(%addr, "TodoService listening");

    let result = Server::builder()
        // gRPC-Web clients speak HTTP/1.1
        .accept_http1(true)
        // Outermost first; GrpcWebLayer must sit directly on the routes
        .layer(TraceLayer::new_for_grpc())
        .layer(CorsLayer::permissive())
        .layer(GrpcWebLayer::new())
        .add_service(health_service)
        .add_service(todos)
        .serve_with_shutdown(addr, shutdown)
        .await
        .wrap_err("gRPC server failed");

    GrpcServer::mark_not_serving(&health_reporter, SERVICE_NAME).await;
    info!("TodoService stopped");

    result
}

/// Resolves on Ctrl+C or SIGTERM.
///
/// If a handler cannot be installed that branch never fires and the other one
/// still can.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal, shutting down gracefully");
        },
        _ = terminate => {
            info!("Received SIGTERM signal, shutting down gracefully");
        },
    }
}
