use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use client_registry::{
    api::{create_router, middleware::cors::create_cors_layer_for_config},
    config::LogFormat,
    ApplicationBuilder, Config,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration first: it selects the log format
    let config = Config::from_env();
    init_tracing(config.log_format);

    info!("Starting client registry service");

    config.validate()?;
    info!(environment = %config.environment, "Configuration loaded and validated");

    let cors = create_cors_layer_for_config(&config);
    let listen_addr = config.listen_addr.clone();

    let state = ApplicationBuilder::new(config)
        .with_database()
        .await?
        .with_repositories()?
        .build()?;

    let app = create_router(state, cors);

    info!("Listening on {}", listen_addr);
    let listener = TcpListener::bind(&listen_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Structured logging; `RUST_LOG` overrides the default `info` filter
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.with_thread_ids(true).init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
