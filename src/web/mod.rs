//! Creator Insights Web Front-End
//!
//! Server-rendered pages built with Axum and maud. Every page that needs
//! data gets it from the backend API through [`BackendClient`].
//!
//! # Routes
//!
//! ## Pages
//! - `GET /` - Landing page
//! - `GET /login` - Login form
//! - `POST /login` - Submit credentials
//! - `POST /logout` - Clear the session cookie
//! - `GET /dashboard` - Dashboard (requires session)
//! - `GET /trending-audio` - Trending audio view (requires session)
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Status summary
//!
//! [`BackendClient`]: crate::backend::BackendClient

pub mod error;
pub mod health;
pub mod pages;
pub mod state;

pub use error::{WebError, WebResult};
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(health::liveness))
        .route("/", get(health::status));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(pages::home::home))
        .route(
            "/login",
            get(pages::login::login_page).post(pages::login::submit_login),
        )
        .route("/logout", post(pages::login::logout))
        .route("/dashboard", get(pages::dashboard::dashboard))
        .route("/trending-audio", get(pages::trending::trending_audio))
        .nest("/health", health_routes)
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// Start the web server
pub async fn serve(state: AppState) -> Result<(), WebError> {
    let addr = state.config.server.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Creator Insights listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| WebError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Creator Insights shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
