//! API handlers for the mindcheck server.

use crate::AppState;
use axum::{
    body::Bytes,
    extract::{Extension, Json},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use mindcheck_combine::combine;
use mindcheck_types::{
    CombinedAssessment, RiskLevel, RiskScore, TextDetails, TextSubscores, VoiceDetails,
    MAX_SCORE, MIN_SCORE,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Request body for `POST /api/text`.
#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

/// Text score with its breakdown and descriptive details.
#[derive(Debug, Serialize, Deserialize)]
pub struct TextAnalysis {
    pub score: RiskScore,
    pub level: RiskLevel,
    /// Absent when the text was too short to analyse.
    pub subscores: Option<TextSubscores>,
    pub details: TextDetails,
}

/// Voice score with its display metrics.
#[derive(Debug, Serialize, Deserialize)]
pub struct VoiceAnalysis {
    pub score: RiskScore,
    pub level: RiskLevel,
    pub details: VoiceDetails,
}

/// Request body for `POST /api/combine`. Scores outside `[0, 10]` are
/// rejected rather than clamped.
#[derive(Debug, Deserialize)]
pub struct CombineRequest {
    #[serde(rename = "textScore", default)]
    pub text_score: Option<f64>,
    #[serde(rename = "voiceScore", default)]
    pub voice_score: Option<f64>,
}

/// Request body for `POST /api/assess`.
#[derive(Debug, Deserialize)]
pub struct AssessRequest {
    #[serde(default)]
    pub text: Option<String>,
    /// Base64-encoded audio container.
    #[serde(default)]
    pub audio: Option<String>,
}

/// Response body for `POST /api/assess`.
#[derive(Debug, Serialize, Deserialize)]
pub struct AssessResponse {
    #[serde(rename = "assessmentId")]
    pub assessment_id: Uuid,
    #[serde(rename = "assessedAt")]
    pub assessed_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<VoiceAnalysis>,
    pub assessment: CombinedAssessment,
}

/// API error type mapping to HTTP status codes.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid input: {0}")]
    BadRequest(String),
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),
    #[error("analysis timed out after {0} ms")]
    Timeout(u128),
    #[error("internal server error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Timeout(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::warn!(error = %self, "request failed");
        }

        let body = Json(serde_json::json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

/// Runs a scoring closure on the blocking pool under the configured timeout.
async fn run_analysis<T, F>(state: &AppState, f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let timeout = state.analysis_timeout;
    match tokio::time::timeout(timeout, tokio::task::spawn_blocking(f)).await {
        Ok(joined) => {
            joined.map_err(|e| ApiError::InternalServerError(format!("task join error: {}", e)))
        }
        Err(_) => Err(ApiError::Timeout(timeout.as_millis())),
    }
}

fn analyze_text(state: &AppState, text: &str) -> TextAnalysis {
    let subscores = state.text.breakdown(text);
    let score = subscores.map_or(RiskScore::NEUTRAL, |s| s.score);
    TextAnalysis {
        score,
        level: score.level(),
        subscores,
        details: state.text.details(text),
    }
}

fn analyze_voice(state: &AppState, audio: Option<&[u8]>) -> VoiceAnalysis {
    let (score, details) = state.voice.analyze_bytes(audio);
    VoiceAnalysis {
        score,
        level: score.level(),
        details,
    }
}

fn checked_score(field: &str, value: Option<f64>) -> Result<Option<RiskScore>, ApiError> {
    match value {
        Some(v) if !(MIN_SCORE..=MAX_SCORE).contains(&v) => Err(ApiError::BadRequest(
            format!("{} must be within [0, 10], got {}", field, v),
        )),
        other => Ok(other.map(RiskScore::new)),
    }
}

/// Drops text that is empty once trimmed; short text still counts as input.
fn present_text(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}

/// Decodes the base64 audio field. Empty input or an empty payload counts as
/// no recording.
fn decode_audio(state: &AppState, encoded: Option<&str>) -> Result<Option<Vec<u8>>, ApiError> {
    let Some(encoded) = encoded else {
        return Ok(None);
    };
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| ApiError::BadRequest(format!("audio is not valid base64: {}", e)))?;
    check_audio_size(state, bytes.len())?;
    Ok((!bytes.is_empty()).then_some(bytes))
}

fn check_audio_size(state: &AppState, len: usize) -> Result<(), ApiError> {
    let limit = state.voice.config().max_payload_bytes;
    if len > limit {
        return Err(ApiError::PayloadTooLarge(format!(
            "audio is {} bytes, limit is {}",
            len, limit
        )));
    }
    Ok(())
}

/// Handler for `POST /api/text`.
pub async fn text_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<TextRequest>,
) -> Result<Json<TextAnalysis>, ApiError> {
    let task_state = Arc::clone(&state);
    let analysis = run_analysis(&state, move || analyze_text(&task_state, &payload.text)).await?;

    tracing::info!(score = analysis.score.value(), level = %analysis.level, "text analysed");
    Ok(Json(analysis))
}

/// Handler for `POST /api/voice`. The body is the raw audio container; an
/// empty body counts as no recording.
pub async fn voice_handler(
    Extension(state): Extension<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<VoiceAnalysis>, ApiError> {
    check_audio_size(&state, body.len())?;

    let task_state = Arc::clone(&state);
    let analysis = run_analysis(&state, move || {
        let audio = (!body.is_empty()).then_some(&body[..]);
        analyze_voice(&task_state, audio)
    })
    .await?;

    tracing::info!(score = analysis.score.value(), level = %analysis.level, "voice analysed");
    Ok(Json(analysis))
}

/// Handler for `POST /api/combine`.
pub async fn combine_handler(
    Json(payload): Json<CombineRequest>,
) -> Result<Json<CombinedAssessment>, ApiError> {
    let text = checked_score("textScore", payload.text_score)?;
    let voice = checked_score("voiceScore", payload.voice_score)?;
    Ok(Json(combine(text, voice)))
}

/// Handler for `POST /api/assess`: scores whichever modalities are present
/// and combines them.
pub async fn assess_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<AssessRequest>,
) -> Result<Json<AssessResponse>, ApiError> {
    let audio = decode_audio(&state, payload.audio.as_deref())?;
    let text = present_text(payload.text);

    let task_state = Arc::clone(&state);
    let (text, voice) = run_analysis(&state, move || {
        let text = text.map(|t| analyze_text(&task_state, &t));
        let voice = audio.map(|a| analyze_voice(&task_state, Some(a.as_slice())));
        (text, voice)
    })
    .await?;

    let assessment = combine(
        text.as_ref().map(|t| t.score),
        voice.as_ref().map(|v| v.score),
    );
    let response = AssessResponse {
        assessment_id: Uuid::new_v4(),
        assessed_at: Utc::now(),
        text,
        voice,
        assessment,
    };

    tracing::info!(
        assessment_id = %response.assessment_id,
        combined = response.assessment.combined_score.value(),
        level = %response.assessment.risk_level,
        confidence = %response.assessment.confidence,
        "assessment completed"
    );
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindcheck_nlp::LexiconNlp;
    use mindcheck_text::TextRiskScorer;
    use mindcheck_voice::VoiceRiskScorer;
    use std::time::Duration;

    fn state(timeout: Duration) -> AppState {
        AppState::new(
            TextRiskScorer::with_default_lexicon(LexiconNlp::shared()),
            VoiceRiskScorer::new(),
            timeout,
        )
    }

    #[tokio::test]
    async fn slow_analysis_times_out() {
        let state = state(Duration::from_millis(10));
        let result = run_analysis(&state, || std::thread::sleep(Duration::from_millis(300))).await;
        assert!(matches!(result, Err(ApiError::Timeout(10))));
    }

    #[tokio::test]
    async fn fast_analysis_returns_value() {
        let state = state(Duration::from_secs(5));
        let value = run_analysis(&state, || 41 + 1).await.unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn error_statuses() {
        let cases = [
            (ApiError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (ApiError::PayloadTooLarge("x".into()), StatusCode::PAYLOAD_TOO_LARGE),
            (ApiError::Timeout(5), StatusCode::SERVICE_UNAVAILABLE),
            (
                ApiError::InternalServerError("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }

    #[test]
    fn blank_text_is_absent() {
        assert_eq!(present_text(None), None);
        assert_eq!(present_text(Some(String::new())), None);
        assert_eq!(present_text(Some(" \n\t ".into())), None);
        assert_eq!(present_text(Some("sad".into())).as_deref(), Some("sad"));
    }

    #[test]
    fn empty_audio_field_is_absent() {
        let state = state(Duration::from_secs(1));
        assert!(decode_audio(&state, None).unwrap().is_none());
        assert!(decode_audio(&state, Some("")).unwrap().is_none());
        assert!(decode_audio(&state, Some("  ")).unwrap().is_none());
        assert_eq!(decode_audio(&state, Some("AAEC")).unwrap(), Some(vec![0, 1, 2]));
        assert!(matches!(
            decode_audio(&state, Some("%%")),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn combine_scores_must_be_in_range() {
        assert_eq!(checked_score("textScore", None).unwrap(), None);
        assert_eq!(
            checked_score("textScore", Some(0.0)).unwrap().map(RiskScore::value),
            Some(0.0)
        );
        assert_eq!(
            checked_score("voiceScore", Some(10.0)).unwrap().map(RiskScore::value),
            Some(10.0)
        );
        for bad in [-5.0, 10.5, 40.0, f64::NAN] {
            assert!(matches!(
                checked_score("textScore", Some(bad)),
                Err(ApiError::BadRequest(_))
            ));
        }
    }

    #[test]
    fn oversized_audio_is_rejected() {
        let state = state(Duration::from_secs(1));
        let limit = state.voice.config().max_payload_bytes;
        assert!(check_audio_size(&state, limit).is_ok());
        assert!(matches!(
            check_audio_size(&state, limit + 1),
            Err(ApiError::PayloadTooLarge(_))
        ));
    }
}
