use std::sync::Arc;

use tokio::signal;

use enroll::errors::Report;
use enroll::log;

use enroll_backend::{AppState, app};

#[tokio::main]
async fn main() -> Result<(), Report> {
    // Setup logging
    enroll::log::setup()?;

    // Setup the routes
    let state = Arc::new(AppState::new());
    let routes = app(state);

    // Setup the server
    let addr = std::env::var("ENROLL_ADDR").unwrap_or_else(|_| "127.0.0.1:8000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("Starting server on http://{}", listener.local_addr()?);
    log::info!("Press Ctrl+C to stop the server");

    // Start the server
    axum::serve(listener, routes)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Wait for the shutdown signal
    log::info!("Shutting down server");

    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log::info!("Signal received, starting graceful shutdown");
}
