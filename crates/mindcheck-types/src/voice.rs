//! Audio value types.
//!
//! [`PcmAudio`] is the output of a container decoder. [`AudioFeatures`] are
//! the raw measurements the voice scorer bands into a score, and
//! [`VoiceDetails`] are the bounded display metrics derived from them.

use serde::{Deserialize, Serialize};

/// Decoded PCM audio.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PcmAudio {
    /// Interleaved samples, nominally in `[-1, 1]`.
    pub samples: Vec<f32>,
    /// Frames per second.
    pub sample_rate: u32,
    /// Number of interleaved channels.
    pub channels: u16,
}

impl PcmAudio {
    pub fn new(samples: Vec<f32>, sample_rate: u32, channels: u16) -> Self {
        Self {
            samples,
            sample_rate,
            channels,
        }
    }

    /// Convenience constructor for single-channel audio.
    pub fn mono(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self::new(samples, sample_rate, 1)
    }

    /// Number of complete frames.
    pub fn frame_count(&self) -> usize {
        if self.channels == 0 {
            return 0;
        }
        self.samples.len() / usize::from(self.channels)
    }
}

/// Raw measurements extracted from a normalized mono waveform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    /// Mean squared amplitude.
    pub energy: f64,
    /// Zero crossings per second, halved.
    pub speech_rate: f64,
    /// Fraction of samples below the silence threshold.
    pub pause_ratio: f64,
    /// Seconds.
    pub duration: f64,
    /// Standard deviation over mean absolute amplitude.
    pub pitch_variation: f64,
}

/// Display metrics for a voice sample. Never fed back into scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceDetails {
    pub pitch_variation: f64,
    pub energy_level: f64,
    pub speech_rate: f64,
    pub pause_frequency: f64,
    pub duration: f64,
    pub avg_pause_duration: f64,
}

impl VoiceDetails {
    /// Derives the bounded display metrics from raw features.
    pub fn from_features(features: &AudioFeatures) -> Self {
        Self {
            pitch_variation: features.pitch_variation.min(1.0),
            energy_level: (features.energy * 10.0).min(1.0),
            speech_rate: (features.speech_rate / 50.0).min(10.0),
            pause_frequency: features.pause_ratio.min(1.0),
            duration: features.duration,
            avg_pause_duration: features.pause_ratio * features.duration,
        }
    }
}

impl Default for VoiceDetails {
    /// Placeholder metrics reported when no usable audio was analysed.
    fn default() -> Self {
        Self {
            pitch_variation: 0.15,
            energy_level: 0.05,
            speech_rate: 3.2,
            pause_frequency: 0.8,
            duration: 5.0,
            avg_pause_duration: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_count_ignores_partial_frames() {
        let audio = PcmAudio::new(vec![0.0; 7], 8000, 2);
        assert_eq!(audio.frame_count(), 3);
        assert_eq!(PcmAudio::new(vec![0.0; 4], 8000, 0).frame_count(), 0);
    }

    #[test]
    fn details_are_bounded() {
        let features = AudioFeatures {
            energy: 0.5,
            speech_rate: 900.0,
            pause_ratio: 0.25,
            duration: 4.0,
            pitch_variation: 1.7,
        };
        let details = VoiceDetails::from_features(&features);
        assert_eq!(details.pitch_variation, 1.0);
        assert_eq!(details.energy_level, 1.0);
        assert_eq!(details.speech_rate, 10.0);
        assert_eq!(details.pause_frequency, 0.25);
        assert_eq!(details.duration, 4.0);
        assert_eq!(details.avg_pause_duration, 1.0);
    }

    #[test]
    fn default_details_match_placeholder_set() {
        let d = VoiceDetails::default();
        assert_eq!(d.pitch_variation, 0.15);
        assert_eq!(d.energy_level, 0.05);
        assert_eq!(d.speech_rate, 3.2);
        assert_eq!(d.pause_frequency, 0.8);
        assert_eq!(d.duration, 5.0);
        assert_eq!(d.avg_pause_duration, 0.5);
    }
}
