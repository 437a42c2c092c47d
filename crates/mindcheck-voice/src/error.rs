use thiserror::Error;

#[derive(Error, Debug)]
pub enum VoiceError {
    #[error("audio staging failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("WAV decode failed: {0}")]
    Decode(#[from] hound::Error),

    #[error("unsupported sample format: {0}")]
    UnsupportedFormat(String),

    #[error("audio payload of {size} bytes exceeds the {limit} byte limit")]
    PayloadTooLarge { size: usize, limit: usize },

    #[error("degenerate signal: {0}")]
    Degenerate(&'static str),
}
