//! The combined assessment produced from the text and voice scores.

use crate::{Confidence, RiskLevel, RiskScore};
use serde::{Deserialize, Serialize};

/// Final output of the combiner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedAssessment {
    pub combined_score: RiskScore,
    pub risk_level: RiskLevel,
    pub confidence: Confidence,
    /// Level-specific recommendations followed by the general ones.
    pub recommendations: Vec<String>,
    /// Fraction of modalities that contributed: `0.0`, `0.6`, or `1.0`.
    pub completeness: f64,
    /// The text score that went in, if any.
    pub text_score: Option<RiskScore>,
    /// The voice score that went in, if any.
    pub voice_score: Option<RiskScore>,
    /// Explanation of the risk level.
    pub summary: String,
}
