use serde::{Deserialize, Serialize};

/// Default upper bound on staged audio payloads: 25 MiB.
pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 25 * 1024 * 1024;

fn default_max_payload_bytes() -> usize {
    DEFAULT_MAX_PAYLOAD_BYTES
}

fn default_staging_suffix() -> String {
    ".wav".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceConfig {
    /// Byte payloads larger than this are refused before staging.
    #[serde(default = "default_max_payload_bytes")]
    pub max_payload_bytes: usize,
    /// File name suffix for staged temp files.
    #[serde(default = "default_staging_suffix")]
    pub staging_suffix: String,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            max_payload_bytes: default_max_payload_bytes(),
            staging_suffix: default_staging_suffix(),
        }
    }
}
