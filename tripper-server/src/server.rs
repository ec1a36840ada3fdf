use anyhow::Context;
use axum::{Router, middleware, serve};
use shared::config::server::{Config, LogFormat};
use std::path::PathBuf;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tracing::{error, info, level_filters::LevelFilter, warn};
use tracing_subscriber::{EnvFilter, fmt};

use crate::{
    middleware::{
        auth_gate::{AuthGateState, apply_auth_gate},
        request_context,
    },
    routes, tracer,
};

/// Initializes the tracing subscriber for logging using the provided configuration.
///
/// Returns the configured default level. A subscriber that is already
/// installed is left in place.
pub fn initialize_tracing(config: &Config) -> String {
    let env_filter = build_env_filter(config);

    let fmt_builder = fmt::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false);

    let installed = if matches!(config.logging.format, LogFormat::Json) {
        fmt_builder.json().with_ansi(false).try_init()
    } else {
        fmt_builder.with_ansi(true).try_init()
    };
    if installed.is_err() {
        warn!("tracing subscriber already installed");
    }

    config.logging.level.clone()
}

fn build_env_filter(config: &Config) -> EnvFilter {
    let default_level = config
        .logging
        .level
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::INFO);

    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::builder()
            .with_default_directive(default_level.into())
            .from_env_lossy()
    })
}

/// Creates the static file service for the SPA bundle. Unknown paths are
/// answered with the SPA index so client-side routes load.
pub fn create_static_service(static_dir: PathBuf, spa_index: PathBuf) -> Router {
    if !static_dir.is_dir() {
        warn!(static_dir = %static_dir.display(), "static directory does not exist");
    }

    Router::new().fallback_service(
        ServeDir::new(static_dir)
            .append_index_html_on_directories(true)
            .fallback(ServeFile::new(spa_index)),
    )
}

/// Creates the application router: health probe and SPA behind the auth
/// gate, wrapped in tracing and request ids.
pub fn create_app_router(config: &Config) -> Router {
    let gate_state = AuthGateState::from_config(config);
    let static_files_service =
        create_static_service(config.web.static_dir.clone(), config.web.spa_index.clone());

    let app = Router::new()
        .merge(routes::health::create_health_router())
        .merge(static_files_service);

    apply_auth_gate(app, gate_state)
        .layer(tracer::create_trace_layer())
        .layer(middleware::from_fn(request_context::assign_request_id))
}

/// Resolves when CTRL+C is received.
pub async fn create_shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to install CTRL+C signal handler");
        std::future::pending::<()>().await;
    }
    info!("Shutting down...");
}

/// Starts the server and binds it to the configured address.
///
/// # Errors
/// Returns an error if the listener cannot be bound or the server fails.
pub async fn run(config: Config) -> anyhow::Result<()> {
    initialize_tracing(&config);
    info!("Starting server...");

    info!(
        protected = ?config.gate.protected_paths,
        login = %config.gate.login_path,
        "auth gate configured"
    );
    let app = create_app_router(&config);

    let address = (config.server.host.as_str(), config.server.port);
    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("binding {}:{}", config.server.host, config.server.port))?;
    info!("Listening on {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(create_shutdown_signal())
        .await
        .context("server exited with an error")?;

    Ok(())
}
