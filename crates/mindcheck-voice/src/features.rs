//! Waveform measurements and the banded voice score.

use crate::error::VoiceError;
use mindcheck_types::{AudioFeatures, PcmAudio, RiskScore, NEUTRAL_SCORE};

/// Amplitude below which a normalized sample counts as silence.
pub const SILENCE_THRESHOLD: f64 = 0.01;

/// Averages each complete frame's channels into one sample.
///
/// A trailing partial frame is dropped. Zero channels yields no samples.
pub fn downmix(audio: &PcmAudio) -> Vec<f64> {
    let channels = usize::from(audio.channels);
    if channels == 0 {
        return Vec::new();
    }
    if channels == 1 {
        return audio.samples.iter().map(|&s| f64::from(s)).collect();
    }
    audio
        .samples
        .chunks_exact(channels)
        .map(|frame| frame.iter().map(|&s| f64::from(s)).sum::<f64>() / channels as f64)
        .collect()
}

/// Scales samples so the peak absolute amplitude is 1.
///
/// Fails on empty input, on any non-finite sample and on a zero peak.
pub fn normalize(samples: &mut [f64]) -> Result<(), VoiceError> {
    if samples.is_empty() {
        return Err(VoiceError::Degenerate("no samples"));
    }
    if samples.iter().any(|s| !s.is_finite()) {
        return Err(VoiceError::Degenerate("non-finite sample"));
    }
    let peak = samples.iter().fold(0.0f64, |peak, s| peak.max(s.abs()));
    if peak == 0.0 {
        return Err(VoiceError::Degenerate("silent signal"));
    }
    for s in samples.iter_mut() {
        *s /= peak;
    }
    Ok(())
}

/// Extracts features from decoded audio.
pub fn extract(audio: &PcmAudio) -> Result<AudioFeatures, VoiceError> {
    if audio.sample_rate == 0 {
        return Err(VoiceError::Degenerate("zero sample rate"));
    }
    let mut samples = downmix(audio);
    normalize(&mut samples)?;
    Ok(measure(&samples, audio.sample_rate))
}

// `samples` must be non-empty and peak-normalized.
fn measure(samples: &[f64], sample_rate: u32) -> AudioFeatures {
    let n = samples.len() as f64;
    let duration = n / f64::from(sample_rate);

    let energy = samples.iter().map(|s| s * s).sum::<f64>() / n;

    let zero_crossings = samples
        .windows(2)
        .filter(|pair| pair[0].is_sign_negative() != pair[1].is_sign_negative())
        .count() as f64;
    let speech_rate = zero_crossings / (2.0 * duration);

    let silent = samples.iter().filter(|s| s.abs() < SILENCE_THRESHOLD).count() as f64;
    let pause_ratio = silent / n;

    let mean_abs = samples.iter().map(|s| s.abs()).sum::<f64>() / n;
    let pitch_variation = if mean_abs > 0.0 {
        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
        variance.sqrt() / mean_abs
    } else {
        0.0
    };

    AudioFeatures {
        energy,
        speech_rate,
        pause_ratio,
        duration,
        pitch_variation,
    }
}

/// Bands the features into a score starting from neutral.
pub fn score_features(features: &AudioFeatures) -> RiskScore {
    let mut score = NEUTRAL_SCORE;

    if features.energy < 0.01 {
        score -= 2.0;
    } else if features.energy < 0.05 {
        score -= 1.0;
    } else if features.energy > 0.2 {
        score += 1.0;
    }

    if features.speech_rate < 50.0 {
        score -= 1.5;
    } else if features.speech_rate < 100.0 {
        score -= 0.5;
    } else if features.speech_rate > 300.0 {
        score -= 1.0;
    }

    if features.pause_ratio > 0.7 {
        score -= 1.5;
    } else if features.pause_ratio > 0.5 {
        score -= 0.5;
    }

    if features.duration < 3.0 {
        score += 1.0;
    }

    RiskScore::new(score)
}
