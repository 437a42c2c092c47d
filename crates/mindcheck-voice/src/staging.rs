use crate::config::VoiceConfig;
use crate::error::VoiceError;
use std::io::Write;
use tempfile::NamedTempFile;

/// Writes a byte payload to a fresh temp file for path-based decoding.
///
/// The file is deleted when the returned handle drops.
pub(crate) fn stage(bytes: &[u8], config: &VoiceConfig) -> Result<NamedTempFile, VoiceError> {
    if bytes.len() > config.max_payload_bytes {
        return Err(VoiceError::PayloadTooLarge {
            size: bytes.len(),
            limit: config.max_payload_bytes,
        });
    }

    let mut file = tempfile::Builder::new()
        .prefix("mindcheck-")
        .suffix(&config.staging_suffix)
        .tempfile()?;
    file.write_all(bytes)?;
    file.flush()?;

    tracing::trace!(path = %file.path().display(), bytes = bytes.len(), "staged audio payload");
    Ok(file)
}
