//! mindcheck server binary.
//!
//! Starts an axum HTTP server exposing the text, voice and combined risk
//! scorers, with structured logging and graceful shutdown on SIGTERM/SIGINT.

use mindcheck_server::startup::{config_location, init_tracing, shutdown_signal};
use mindcheck_server::{app, config, AppState};
use std::net::SocketAddr;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    let (config_path, source) =
        config_location(std::env::args().nth(1), |key| std::env::var(key).ok());

    let config = config::load_config(Some(&config_path))
        .expect("failed to load configuration: the server cannot start without valid config");

    init_tracing(&config.logging);
    tracing::info!(source = source.as_str(), path = %config_path, "loaded configuration");

    let state = AppState::from_config(&config)
        .expect("failed to load lexicon: check analysis.lexicon_path in config");

    tracing::info!(
        timeout_ms = config.analysis.timeout_ms,
        max_audio_bytes = config.voice.max_payload_bytes,
        custom_lexicon = config.analysis.lexicon_path.is_some(),
        "scorers initialised"
    );

    let addr = SocketAddr::new(config.server.host, config.server.port);
    let listener = TcpListener::bind(addr)
        .await
        .expect("failed to bind to address: is another process using this port?");
    tracing::info!(%addr, "mindcheck server listening");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(async {
            let signal = shutdown_signal().await;
            tracing::info!(signal, "shutting down");
        })
        .await
        .expect("server error");

    tracing::info!("mindcheck server stopped");
}
