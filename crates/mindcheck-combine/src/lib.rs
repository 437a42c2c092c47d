//! Fusion of the text and voice scores into a [`CombinedAssessment`].
//!
//! Everything here is a pure function of the two optional input scores:
//!
//! - neither present: `5.0`
//! - voice only: `0.9 * voice + 0.5`
//! - text only: `0.95 * text + 0.2`
//! - both: `0.6 * text + 0.4 * voice`
//!
//! The result is clamped to `[0, 10]` and banded into a [`RiskLevel`].

pub mod recommendations;

use mindcheck_types::{CombinedAssessment, Confidence, RiskLevel, RiskScore};

pub const TEXT_WEIGHT: f64 = 0.6;
pub const VOICE_WEIGHT: f64 = 0.4;

const VOICE_ONLY_SCALE: f64 = 0.9;
const VOICE_ONLY_OFFSET: f64 = 0.5;
const TEXT_ONLY_SCALE: f64 = 0.95;
const TEXT_ONLY_OFFSET: f64 = 0.2;

/// Below this text/voice gap confidence is high.
pub const HIGH_AGREEMENT: f64 = 1.0;
/// Below this gap (and at or above [`HIGH_AGREEMENT`]) confidence is moderate.
pub const MODERATE_AGREEMENT: f64 = 2.0;

pub fn combined_score(text: Option<RiskScore>, voice: Option<RiskScore>) -> RiskScore {
    match (text, voice) {
        (None, None) => RiskScore::NEUTRAL,
        (None, Some(v)) => RiskScore::new(VOICE_ONLY_SCALE * v.value() + VOICE_ONLY_OFFSET),
        (Some(t), None) => RiskScore::new(TEXT_ONLY_SCALE * t.value() + TEXT_ONLY_OFFSET),
        (Some(t), Some(v)) => RiskScore::new(TEXT_WEIGHT * t.value() + VOICE_WEIGHT * v.value()),
    }
}

pub fn risk_level(score: RiskScore) -> RiskLevel {
    RiskLevel::from_score(score.value())
}

/// Agreement between the modalities. A single modality is moderate.
pub fn confidence(text: Option<RiskScore>, voice: Option<RiskScore>) -> Confidence {
    match (text, voice) {
        (Some(t), Some(v)) => {
            let gap = (t.value() - v.value()).abs();
            if gap < HIGH_AGREEMENT {
                Confidence::High
            } else if gap < MODERATE_AGREEMENT {
                Confidence::Moderate
            } else {
                Confidence::Low
            }
        }
        (Some(_), None) | (None, Some(_)) => Confidence::Moderate,
        (None, None) => Confidence::None,
    }
}

/// Level-specific recommendations followed by the general ones.
pub fn recommendations(score: RiskScore) -> Vec<String> {
    recommendations::for_level(risk_level(score))
        .iter()
        .chain(recommendations::GENERAL)
        .map(|r| r.to_string())
        .collect()
}

pub fn completeness(text: Option<RiskScore>, voice: Option<RiskScore>) -> f64 {
    match (text, voice) {
        (Some(_), Some(_)) => 1.0,
        (Some(_), None) | (None, Some(_)) => 0.6,
        (None, None) => 0.0,
    }
}

pub fn combine(text: Option<RiskScore>, voice: Option<RiskScore>) -> CombinedAssessment {
    let combined = combined_score(text, voice);
    let level = risk_level(combined);
    let confidence = confidence(text, voice);

    tracing::debug!(
        text = text.map(RiskScore::value),
        voice = voice.map(RiskScore::value),
        combined = combined.value(),
        level = level.as_str(),
        confidence = confidence.as_str(),
        "combined assessment"
    );

    CombinedAssessment {
        combined_score: combined,
        risk_level: level,
        confidence,
        recommendations: recommendations(combined),
        completeness: completeness(text, voice),
        text_score: text,
        voice_score: voice,
        summary: level.summary().to_string(),
    }
}
