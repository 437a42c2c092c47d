//! Container decoding into [`PcmAudio`].

use crate::error::VoiceError;
use hound::{SampleFormat, WavReader};
use mindcheck_types::PcmAudio;
use std::path::Path;

/// Decodes an audio container on disk into interleaved PCM samples.
///
/// Implementations must be usable from several threads at once.
pub trait AudioDecoder: Send + Sync {
    fn decode_file(&self, path: &Path) -> Result<PcmAudio, VoiceError>;
}

/// RIFF/WAV decoder backed by `hound`.
///
/// Integer PCM of 8 to 32 bits and 32-bit float are accepted. Integer
/// samples are scaled into `[-1, 1]` by their full-scale value.
#[derive(Debug, Clone, Copy, Default)]
pub struct WavDecoder;

impl AudioDecoder for WavDecoder {
    fn decode_file(&self, path: &Path) -> Result<PcmAudio, VoiceError> {
        let reader = WavReader::open(path)?;
        let spec = reader.spec();

        let samples: Vec<f32> = match (spec.sample_format, spec.bits_per_sample) {
            (SampleFormat::Float, 32) => reader.into_samples::<f32>().collect::<Result<_, _>>()?,
            (SampleFormat::Int, bits @ 8..=32) => {
                let full_scale = 2f32.powi(i32::from(bits) - 1);
                reader
                    .into_samples::<i32>()
                    .map(|s| s.map(|v| v as f32 / full_scale))
                    .collect::<Result<_, _>>()?
            }
            (format, bits) => {
                return Err(VoiceError::UnsupportedFormat(format!(
                    "{:?} at {} bits",
                    format, bits
                )))
            }
        };

        tracing::debug!(
            path = %path.display(),
            channels = spec.channels,
            sample_rate = spec.sample_rate,
            bits = spec.bits_per_sample,
            samples = samples.len(),
            "decoded WAV"
        );

        Ok(PcmAudio::new(samples, spec.sample_rate, spec.channels))
    }
}
