//! HTTP API server.

pub mod handlers;
pub mod routes;
mod state;


use miette::Diagnostic;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use state::AppState;

use crate::config::Config;
use crate::db::Database;
use crate::weather::WeatherApi;

#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Failed to bind {addr}: {source}")]
    #[diagnostic(
        code(smartlife::api::bind),
        help("Is another process already listening on this port?")
    )]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(smartlife::api::serve))]
    Serve(#[source] std::io::Error),
}

/// Default log filter when `RUST_LOG` is not set.
pub(crate) fn default_filter(debug: bool) -> &'static str {
    if debug {
        "smartlife=debug,tower_http=debug"
    } else {
        "smartlife=info,tower_http=info"
    }
}

/// Initialize tracing subscriber with env filter
pub fn init_tracing(debug: bool) {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(debug).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Run the API server until Ctrl-C, then close the database.
pub async fn run<D: Database, W: WeatherApi>(
    config: &Config,
    db: D,
    weather: W,
) -> Result<(), ApiError> {
    init_tracing(config.debug);

    let state = AppState::new(db, weather);
    let db = state.db_arc();
    let app = routes::create_router(state).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ApiError::Bind {
            addr: addr.clone(),
            source,
        })?;
    info!("API server listening on http://{}", addr);
    info!("API docs at http://{}/docs", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ApiError::Serve)?;

    info!("Shutting down");
    db.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
