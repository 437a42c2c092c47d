//! Shared types for the mindcheck workspace.
//!
//! This crate holds the value types exchanged between the scorers, the
//! combiner, and the HTTP surface: the bounded [`RiskScore`], the categorical
//! [`RiskLevel`] and [`Confidence`] labels, the per-modality detail structures,
//! and the final [`CombinedAssessment`].
//!
//! Every other crate in the workspace depends on `mindcheck-types` for these
//! definitions and on nothing else for cross-cutting types, which keeps the
//! dependency graph acyclic.
//!
//! # Score direction
//!
//! A risk score lives in `[0, 10]` and **higher values denote greater
//! concern**: negative sentiment, depression keywords, and absolutist language
//! all push a text score up, and the [`RiskLevel`] bands map `<= 3.0` to
//! [`RiskLevel::Low`] and `> 7.0` to [`RiskLevel::VeryHigh`]. `5.0` is the
//! neutral value returned whenever an input is missing or unusable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod assessment;
pub mod text;
pub mod voice;

pub use assessment::CombinedAssessment;
pub use text::{SentimentBreakdown, SentimentResult, TextDetails, TextSubscores, Token};
pub use voice::{AudioFeatures, PcmAudio, VoiceDetails};

/// Lower bound of every risk score.
pub const MIN_SCORE: f64 = 0.0;

/// Upper bound of every risk score.
pub const MAX_SCORE: f64 = 10.0;

/// Score returned for missing, too-short, undecodable, or silent input.
pub const NEUTRAL_SCORE: f64 = 5.0;

/// Clamps a raw value into `[0, 10]`.
///
/// NaN collapses to [`NEUTRAL_SCORE`] so that no arithmetic accident can
/// leak an out-of-range value to a caller.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        return NEUTRAL_SCORE;
    }
    value.clamp(MIN_SCORE, MAX_SCORE)
}

/// A risk indicator bounded to `[0, 10]`.
///
/// The only constructor clamps, so a `RiskScore` can never hold an
/// out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct RiskScore(f64);

impl RiskScore {
    /// The neutral score (`5.0`).
    pub const NEUTRAL: RiskScore = RiskScore(NEUTRAL_SCORE);

    /// Creates a score, clamping `value` into `[0, 10]`.
    pub fn new(value: f64) -> Self {
        Self(clamp_score(value))
    }

    /// Returns the raw value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the categorical level for this score.
    pub fn level(self) -> RiskLevel {
        RiskLevel::from_score(self.0)
    }
}

impl Default for RiskScore {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl From<f64> for RiskScore {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<RiskScore> for f64 {
    fn from(score: RiskScore) -> Self {
        score.0
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Upper bound (inclusive) of the [`RiskLevel::Low`] band.
pub const LOW_RISK_THRESHOLD: f64 = 3.0;

/// Upper bound (inclusive) of the [`RiskLevel::Moderate`] band.
pub const MODERATE_RISK_THRESHOLD: f64 = 5.0;

/// Upper bound (inclusive) of the [`RiskLevel::High`] band.
pub const HIGH_RISK_THRESHOLD: f64 = 7.0;

/// Categorical risk band derived from a combined score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    /// Score `<= 3.0`.
    Low,
    /// Score in `(3.0, 5.0]`.
    Moderate,
    /// Score in `(5.0, 7.0]`.
    High,
    /// Score `> 7.0`.
    VeryHigh,
}

impl RiskLevel {
    /// Maps a score onto its band. Each threshold belongs to the lower band.
    pub fn from_score(score: f64) -> Self {
        if score <= LOW_RISK_THRESHOLD {
            Self::Low
        } else if score <= MODERATE_RISK_THRESHOLD {
            Self::Moderate
        } else if score <= HIGH_RISK_THRESHOLD {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    /// Returns the canonical identifier for this level.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
            Self::VeryHigh => "VERY_HIGH",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
            Self::VeryHigh => "Very High Risk",
        }
    }

    /// One-paragraph explanation shown next to the level.
    pub fn summary(self) -> &'static str {
        match self {
            Self::Low => {
                "Your responses suggest you're managing well. Continue with healthy habits \
                 and don't hesitate to seek support if needed."
            }
            Self::Moderate => {
                "Your responses indicate some areas of concern. Consider speaking with a \
                 mental health professional for support and guidance."
            }
            Self::High => {
                "Your responses suggest significant concerns. We strongly recommend reaching \
                 out to a mental health professional or crisis helpline."
            }
            Self::VeryHigh => {
                "Your responses indicate serious concerns. Please seek immediate professional \
                 help or contact a crisis helpline right away."
            }
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(Self::Low),
            "MODERATE" => Ok(Self::Moderate),
            "HIGH" => Ok(Self::High),
            "VERY_HIGH" => Ok(Self::VeryHigh),
            _ => Err(ParseLabelError {
                kind: "risk level",
                value: s.to_string(),
            }),
        }
    }
}

/// Agreement between the text and voice scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Confidence {
    /// Both modalities present and within one point of each other.
    High,
    /// Both present within two points, or exactly one modality present.
    Moderate,
    /// Both present but two or more points apart (conflicting signals).
    Low,
    /// No modality contributed.
    None,
}

impl Confidence {
    /// Returns the canonical identifier for this confidence.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Moderate => "MODERATE",
            Self::Low => "LOW",
            Self::None => "NONE",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High Confidence",
            Self::Moderate => "Moderate Confidence",
            Self::Low => "Low Confidence (Conflicting Signals)",
            Self::None => "No Confidence",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Confidence {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HIGH" => Ok(Self::High),
            "MODERATE" => Ok(Self::Moderate),
            "LOW" => Ok(Self::Low),
            "NONE" => Ok(Self::None),
            _ => Err(ParseLabelError {
                kind: "confidence",
                value: s.to_string(),
            }),
        }
    }
}

/// Error returned when parsing an unknown level or confidence identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLabelError {
    kind: &'static str,
    value: String,
}

impl fmt::Display for ParseLabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {}", self.kind, self.value)
    }
}

impl std::error::Error for ParseLabelError {}
