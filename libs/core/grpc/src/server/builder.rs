//! Startup logging and health reporting shared by gRPC binaries.

use super::config::ServerConfig;
use tonic_health::pb::health_server::{Health, HealthServer};
use tonic_health::server::HealthReporter;
use tracing::info;

/// Helper for wiring the standard `grpc.health.v1.Health` service and startup logs.
pub struct GrpcServer;

impl GrpcServer {
    /// Create a health reporter together with the service to mount on the server.
    pub fn health_service() -> (HealthReporter, HealthServer<impl Health>) {
        tonic_health::server::health_reporter()
    }

    /// Log server startup information for a single service.
    pub fn log_startup(config: &ServerConfig, service_name: &str) {
        info!(
            addr = %config.addr_string(),
            service = service_name,
            compression = config.enable_compression,
            max_message_size = config.max_decoding_message_size,
            "gRPC server starting"
        );

        if config.enable_compression {
            info!("Zstd compression enabled");
        }

        info!("Health check service enabled (grpc.health.v1.Health)");
    }

    /// Mark the service and the empty service name as serving.
    ///
    /// The empty name is what k8s and `grpc_health_probe` query by default.
    pub async fn setup_health(health_reporter: &HealthReporter, service_name: &str) {
        for name in [service_name, ""] {
            health_reporter
                .set_service_status(name, tonic_health::ServingStatus::Serving)
                .await;
        }

        info!(service = service_name, "Service marked as serving");
    }

    /// Flip everything to NOT_SERVING, used while draining on shutdown.
    pub async fn mark_not_serving(health_reporter: &HealthReporter, service_name: &str) {
        for name in [service_name, ""] {
            health_reporter
                .set_service_status(name, tonic_health::ServingStatus::NotServing)
                .await;
        }

        info!(service = service_name, "Service marked as not serving");
    }
}
