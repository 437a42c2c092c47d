//! mindcheck HTTP server library logic.

pub mod api;
pub mod config;
pub mod startup;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Extension, Json, Router,
};
use config::Config;
use mindcheck_nlp::LexiconNlp;
use mindcheck_text::{Lexicon, LexiconError, TextRiskScorer};
use mindcheck_voice::{VoiceConfig, VoiceRiskScorer};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Headroom on top of the audio limit for base64 expansion and the JSON
/// envelope of `/api/assess`.
const BODY_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub text: TextRiskScorer<LexiconNlp>,
    pub voice: VoiceRiskScorer,
    /// Upper bound on one scoring call.
    pub analysis_timeout: Duration,
}

impl AppState {
    pub fn new(text: TextRiskScorer<LexiconNlp>, voice: VoiceRiskScorer, timeout: Duration) -> Self {
        Self {
            text,
            voice,
            analysis_timeout: timeout,
        }
    }

    /// Builds both scorers from configuration, loading the lexicon override
    /// if one is configured.
    pub fn from_config(config: &Config) -> Result<Self, LexiconError> {
        let lexicon = match &config.analysis.lexicon_path {
            Some(path) => Lexicon::load(path)?,
            None => Lexicon::default(),
        };
        let text = TextRiskScorer::new(LexiconNlp::shared(), Arc::new(lexicon));
        let voice = VoiceRiskScorer::with_config(config.voice.clone());
        Ok(Self::new(text, voice, config.analysis.timeout()))
    }

    fn voice_config(&self) -> &VoiceConfig {
        self.voice.config()
    }

    /// Largest request body accepted: base64 of the largest audio payload
    /// plus headroom.
    pub fn max_body_bytes(&self) -> usize {
        self.voice_config().max_payload_bytes.div_ceil(3) * 4 + BODY_OVERHEAD_BYTES
    }
}

/// Health check handler.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Builds the application router with all routes.
pub fn app(state: AppState) -> Router {
    let body_limit = state.max_body_bytes();

    Router::new()
        .route("/health", get(health))
        .route("/api/text", post(api::text_handler))
        .route("/api/voice", post(api::voice_handler))
        .route("/api/combine", post(api::combine_handler))
        .route("/api/assess", post(api::assess_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(Extension(Arc::new(state)))
}
