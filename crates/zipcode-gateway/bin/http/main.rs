mod cli;

use crate::cli::{StorageBackendArg, CLI};
use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use zipcode_core::Repository;
use zipcode_gateway::{App, AppState};
use zipcode_service::ZipCodeService;
use zipcode_storage::{InMemoryRepository, MySqlRepository};
use zipcode_telemetry::TelemetryConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::try_parse()?;

    let _telemetry = zipcode_telemetry::init(
        TelemetryConfig::builder()
            .service_name("zipcode-gateway")
            .format(config.log_format.into())
            .otlp_endpoint(config.otlp_endpoint.clone())
            .build(),
    )?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        "starting gateway server"
    );

    match config.storage {
        StorageBackendArg::InMemory => {
            run_server(config.listen_addr, InMemoryRepository::new()).await?;
        }
        StorageBackendArg::Mysql => {
            let mysql_dsn = config
                .mysql_dsn
                .context("mysql dsn is required when storage backend is mysql")?;
            let repository = MySqlRepository::connect(&mysql_dsn)
                .await
                .context("failed to connect to mysql")?;
            run_server(config.listen_addr, repository).await?;
        }
    }

    Ok(())
}

async fn run_server<R: Repository>(listen_addr: SocketAddr, repository: R) -> anyhow::Result<()> {
    let directory = ZipCodeService::new(repository);
    let app = App::router(AppState::new(Arc::new(directory)));

    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
