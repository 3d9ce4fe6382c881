//! Settings blob codec
//!
//! Settings are stored as postcard binary data. The format tag leads the
//! record, so a blob from another firmware generation is rejected before
//! any of its fields are trusted.

use super::types::Settings;

/// Upper bound on an encoded settings record
pub const MAX_BLOB_SIZE: usize = 64;

/// Settings blob errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlobError {
    /// Serialization failed (buffer too small)
    Encode,
    /// Deserialization failed or the record is invalid
    Decode,
    /// Blob was written by a different format
    FormatMismatch,
}

/// Serialize settings into `buf`
///
/// Returns the used prefix of `buf`.
pub fn encode_settings<'a>(settings: &Settings, buf: &'a mut [u8]) -> Result<&'a mut [u8], BlobError> {
    postcard::to_slice(settings, buf).map_err(|_| BlobError::Encode)
}

/// Deserialize and check a settings blob
pub fn decode_settings(bytes: &[u8]) -> Result<Settings, BlobError> {
    let settings: Settings = postcard::from_bytes(bytes).map_err(|_| BlobError::Decode)?;
    if !settings.is_current_format() {
        return Err(BlobError::FormatMismatch);
    }
    settings.validate().map_err(|_| BlobError::Decode)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blob_keeps_fields() {
        let mut settings = Settings::default();
        settings.select_pin(16).unwrap();
        settings.set_buffer_len(60).unwrap();

        let mut buf = [0u8; MAX_BLOB_SIZE];
        let bytes = encode_settings(&settings, &mut buf).unwrap();
        let loaded = decode_settings(bytes).unwrap();

        assert_eq!(loaded.led_pin(), 16);
        assert_eq!(loaded.buffer_len(), 60);
    }

    #[test]
    fn test_run_flag_not_persisted() {
        let mut settings = Settings::default();
        settings.set_running(true);

        let mut buf = [0u8; MAX_BLOB_SIZE];
        let bytes = encode_settings(&settings, &mut buf).unwrap();
        let loaded = decode_settings(bytes).unwrap();

        assert!(!loaded.is_running());
    }

    #[test]
    fn test_format_mismatch() {
        let mut buf = [0u8; MAX_BLOB_SIZE];
        let len = encode_settings(&Settings::default(), &mut buf).unwrap().len();

        // Tag is a length-prefixed string right after the start
        assert_eq!(buf[0] as usize, 16);
        buf[16] = b'9'; // "Pico Pix OS V1.9"

        assert_eq!(decode_settings(&buf[..len]), Err(BlobError::FormatMismatch));
    }

    #[test]
    fn test_garbage_rejected() {
        assert_eq!(decode_settings(&[]), Err(BlobError::Decode));
        assert_eq!(decode_settings(&[0xFF; 4]), Err(BlobError::Decode));
    }

    #[test]
    fn test_encode_buffer_too_small() {
        let mut buf = [0u8; 4];
        assert_eq!(
            encode_settings(&Settings::default(), &mut buf).map(|b| b.len()),
            Err(BlobError::Encode)
        );
    }
}
