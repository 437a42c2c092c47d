//! Voice risk scoring for mindcheck.
//!
//! A recording is decoded to PCM, downmixed to mono, peak-normalized and
//! measured for energy, zero-crossing speech rate, pause ratio and
//! duration. Each feature shifts the score from the neutral `5.0` by a
//! fixed band:
//!
//! | feature | band | shift |
//! |---|---|---|
//! | energy | `< 0.01` | -2.0 |
//! | energy | `[0.01, 0.05)` | -1.0 |
//! | energy | `> 0.2` | +1.0 |
//! | speech rate | `< 50` | -1.5 |
//! | speech rate | `[50, 100)` | -0.5 |
//! | speech rate | `> 300` | -1.0 |
//! | pause ratio | `> 0.7` | -1.5 |
//! | pause ratio | `(0.5, 0.7]` | -0.5 |
//! | duration | `< 3 s` | +1.0 |
//!
//! Byte payloads are staged to a temporary file which is always removed.

pub mod config;
pub mod decode;
pub mod error;
pub mod features;
pub mod scorer;
mod staging;

pub use config::{VoiceConfig, DEFAULT_MAX_PAYLOAD_BYTES};
pub use decode::{AudioDecoder, WavDecoder};
pub use error::VoiceError;
pub use features::{score_features, SILENCE_THRESHOLD};
pub use scorer::VoiceRiskScorer;
