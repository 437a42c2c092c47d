use crate::config::VoiceConfig;
use crate::decode::{AudioDecoder, WavDecoder};
use crate::error::VoiceError;
use crate::features::{extract, score_features};
use crate::staging::stage;
use mindcheck_types::{AudioFeatures, PcmAudio, RiskScore, VoiceDetails};
use std::path::Path;

/// Scores voice recordings on the `[0, 10]` risk scale.
///
/// No failure escapes the public scoring methods: absent audio, decode
/// errors and degenerate signals all yield the neutral score (`5.0`) and
/// the placeholder [`VoiceDetails::default`].
#[derive(Debug, Clone, Default)]
pub struct VoiceRiskScorer<D = WavDecoder> {
    decoder: D,
    config: VoiceConfig,
}

impl VoiceRiskScorer<WavDecoder> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: VoiceConfig) -> Self {
        Self::with_decoder(WavDecoder, config)
    }
}

impl<D: AudioDecoder> VoiceRiskScorer<D> {
    pub fn with_decoder(decoder: D, config: VoiceConfig) -> Self {
        Self { decoder, config }
    }

    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    pub fn config(&self) -> &VoiceConfig {
        &self.config
    }

    /// Measures decoded audio. Degenerate input is an error here; the
    /// scoring methods recover from it.
    pub fn features(&self, audio: &PcmAudio) -> Result<AudioFeatures, VoiceError> {
        extract(audio)
    }

    pub fn score(&self, audio: &PcmAudio) -> RiskScore {
        self.analyze(audio).0
    }

    pub fn details(&self, audio: &PcmAudio) -> VoiceDetails {
        self.analyze(audio).1
    }

    /// Computes the score and display metrics from a single measurement.
    pub fn analyze(&self, audio: &PcmAudio) -> (RiskScore, VoiceDetails) {
        match self.features(audio) {
            Ok(features) => {
                let score = score_features(&features);
                tracing::debug!(
                    energy = features.energy,
                    speech_rate = features.speech_rate,
                    pause_ratio = features.pause_ratio,
                    duration = features.duration,
                    score = score.value(),
                    "scored voice"
                );
                (score, VoiceDetails::from_features(&features))
            }
            Err(e) => {
                tracing::warn!(error = %e, "voice analysis fell back to neutral");
                (RiskScore::NEUTRAL, VoiceDetails::default())
            }
        }
    }

    pub fn score_file(&self, path: &Path) -> RiskScore {
        self.analyze_file(path).0
    }

    pub fn details_file(&self, path: &Path) -> VoiceDetails {
        self.analyze_file(path).1
    }

    pub fn analyze_file(&self, path: &Path) -> (RiskScore, VoiceDetails) {
        match self.decoder.decode_file(path) {
            Ok(audio) => self.analyze(&audio),
            Err(e) => fallback(&e),
        }
    }

    /// Scores an in-memory payload. `None` means no recording was supplied.
    pub fn score_bytes(&self, bytes: Option<&[u8]>) -> RiskScore {
        self.analyze_bytes(bytes).0
    }

    pub fn details_bytes(&self, bytes: Option<&[u8]>) -> VoiceDetails {
        self.analyze_bytes(bytes).1
    }

    /// Stages the payload to a temp file, decodes it and analyses it.
    ///
    /// The staged file is removed before this returns, on success and on
    /// failure alike.
    pub fn analyze_bytes(&self, bytes: Option<&[u8]>) -> (RiskScore, VoiceDetails) {
        let Some(bytes) = bytes else {
            return (RiskScore::NEUTRAL, VoiceDetails::default());
        };
        match self.decode_bytes(bytes) {
            Ok(audio) => self.analyze(&audio),
            Err(e) => fallback(&e),
        }
    }

    fn decode_bytes(&self, bytes: &[u8]) -> Result<PcmAudio, VoiceError> {
        let staged = stage(bytes, &self.config)?;
        self.decoder.decode_file(staged.path())
    }
}

fn fallback(error: &VoiceError) -> (RiskScore, VoiceDetails) {
    tracing::warn!(error = %error, "audio decode failed, using neutral voice score");
    (RiskScore::NEUTRAL, VoiceDetails::default())
}
