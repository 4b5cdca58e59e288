use crate::{error::ServiceError, routes::create_router, state::AppState};
use axum::Router;
use std::{future::Future, net::SocketAddr};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};

pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServiceError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServiceError::Bind { addr, source })?;

    let local_addr = listener
        .local_addr()
        .map_err(|source| ServiceError::Bind { addr, source })?;
    info!("Listening for HTTP traffic on {}", local_addr);

    Ok(listener)
}

/// Serves until `shutdown` resolves, then drains in-flight requests.
pub async fn serve<F>(
    listener: TcpListener,
    app_state: AppState,
    shutdown: F,
) -> Result<(), ServiceError>
where
    F: Future<Output = ()> + Send + 'static,
{
    serve_router(listener, create_router(app_state), shutdown).await
}

pub async fn serve_router<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
) -> Result<(), ServiceError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("HTTP server stopped.");
    Ok(())
}

pub async fn run(app_state: AppState) -> Result<(), ServiceError> {
    let addr = app_state.config.bind_addr();
    let listener = bind(addr).await?;

    serve(listener, app_state, shutdown_signal()).await
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Interrupt received, shutting down."),
        _ = terminate => info!("Terminate received, shutting down."),
    }
}
