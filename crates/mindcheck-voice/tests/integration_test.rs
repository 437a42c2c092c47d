use hound::{SampleFormat, WavSpec, WavWriter};
use mindcheck_types::{PcmAudio, RiskLevel, VoiceDetails};
use mindcheck_voice::{AudioDecoder, VoiceConfig, VoiceError, VoiceRiskScorer};
use std::f64::consts::PI;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const RATE: u32 = 16_000;

fn tone(seconds: f64, freq: f64) -> Vec<f64> {
    let n = (seconds * f64::from(RATE)) as usize;
    (0..n)
        .map(|i| 0.5 * (2.0 * PI * freq * i as f64 / f64::from(RATE)).sin())
        .collect()
}

fn wav_i16(channels: &[Vec<f64>]) -> Vec<u8> {
    let spec = WavSpec {
        channels: channels.len() as u16,
        sample_rate: RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut cursor, spec).unwrap();
        for i in 0..channels[0].len() {
            for channel in channels {
                writer
                    .write_sample((channel[i] * f64::from(i16::MAX)).round() as i16)
                    .unwrap();
            }
        }
        writer.finalize().unwrap();
    }
    cursor.into_inner()
}

fn wav_f32(samples: &[f64]) -> Vec<u8> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: RATE,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut cursor, spec).unwrap();
        for &s in samples {
            writer.write_sample(s as f32).unwrap();
        }
        writer.finalize().unwrap();
    }
    cursor.into_inner()
}

#[test]
fn silent_recording_scores_exactly_neutral() {
    let bytes = wav_i16(&[vec![0.0; 5 * RATE as usize]]);
    let scorer = VoiceRiskScorer::new();

    assert_eq!(scorer.score_bytes(Some(bytes.as_slice())).value(), 5.0);
    assert_eq!(scorer.details_bytes(Some(bytes.as_slice())), VoiceDetails::default());
}

#[test]
fn steady_tone_scores_energetic() {
    // Energy 0.5 after normalization (+1), 200 crossings/s, few pauses.
    let bytes = wav_i16(&[tone(5.0, 200.0)]);
    let scorer = VoiceRiskScorer::new();

    let (score, details) = scorer.analyze_bytes(Some(bytes.as_slice()));
    assert_eq!(score.value(), 6.0);
    assert_eq!(score.level(), RiskLevel::High);
    assert_eq!(details.duration, 5.0);
    assert_eq!(details.energy_level, 1.0);
    assert!((details.speech_rate - 4.0).abs() < 0.05);
    assert!(details.pause_frequency < 0.05);
}

#[test]
fn short_clip_gets_duration_bump() {
    let bytes = wav_i16(&[tone(1.0, 200.0)]);
    assert_eq!(VoiceRiskScorer::new().score_bytes(Some(bytes.as_slice())).value(), 7.0);
}

#[test]
fn stereo_is_downmixed() {
    let left = tone(5.0, 200.0);
    let right = vec![0.0; left.len()];
    let bytes = wav_i16(&[left, right]);

    let (score, details) = VoiceRiskScorer::new().analyze_bytes(Some(bytes.as_slice()));
    assert_eq!(score.value(), 6.0);
    assert_eq!(details.duration, 5.0);
}

#[test]
fn float_wav_decodes() {
    let bytes = wav_f32(&tone(5.0, 200.0));
    assert_eq!(VoiceRiskScorer::new().score_bytes(Some(bytes.as_slice())).value(), 6.0);
}

#[test]
fn file_and_bytes_agree() {
    let bytes = wav_i16(&[tone(2.0, 150.0)]);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clip.wav");
    std::fs::write(&path, &bytes).unwrap();

    let scorer = VoiceRiskScorer::new();
    assert_eq!(scorer.score_file(&path), scorer.score_bytes(Some(bytes.as_slice())));
    assert_eq!(scorer.details_file(&path), scorer.details_bytes(Some(bytes.as_slice())));
}

#[test]
fn oversized_payload_is_neutral() {
    let bytes = wav_i16(&[tone(1.0, 200.0)]);
    let scorer = VoiceRiskScorer::with_config(VoiceConfig {
        max_payload_bytes: 64,
        ..VoiceConfig::default()
    });
    assert_eq!(scorer.score_bytes(Some(bytes.as_slice())).value(), 5.0);
}

#[derive(Default)]
struct FailingDecoder {
    seen: Mutex<Option<(PathBuf, bool)>>,
}

impl AudioDecoder for FailingDecoder {
    fn decode_file(&self, path: &Path) -> Result<PcmAudio, VoiceError> {
        *self.seen.lock().unwrap() = Some((path.to_path_buf(), path.exists()));
        Err(VoiceError::UnsupportedFormat("test".into()))
    }
}

#[test]
fn staged_file_is_removed_after_decode_failure() {
    let scorer = VoiceRiskScorer::with_decoder(FailingDecoder::default(), VoiceConfig::default());
    let bytes = wav_i16(&[tone(1.0, 200.0)]);

    assert_eq!(scorer.score_bytes(Some(bytes.as_slice())).value(), 5.0);

    let (path, existed) = scorer.decoder().seen.lock().unwrap().clone().unwrap();
    assert!(existed, "decoder should see the staged file");
    assert!(!path.exists(), "staged file {} left behind", path.display());
}
