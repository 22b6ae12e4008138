//! Text-returning entry points.

use crate::{encode_to_bytes, EncodeError, EncodeOptions};

/// Encodes a whole byte slice with default options (standard alphabet, no
/// line breaks).
///
/// # Example
///
/// ```
/// use b64kit_base64::encode;
///
/// assert_eq!(encode(b"hello world"), "aGVsbG8gd29ybGQ=");
/// ```
pub fn encode(source: &[u8]) -> String {
    match encode_with(source, 0, source.len(), &EncodeOptions::default()) {
        Ok(encoded) => encoded,
        Err(err) => unreachable!("whole-slice encode failed: {err}"),
    }
}

/// Encodes `length` bytes of `source` starting at `offset` and returns the
/// result as a string.
///
/// # Errors
///
/// Returns [`EncodeError::InvalidRange`] if the range runs past `source`.
///
/// # Example
///
/// ```
/// use b64kit_base64::{encode_with, EncodeOptions};
///
/// let options = EncodeOptions::default().with_url_safe(true);
/// assert_eq!(encode_with(&[0xfb, 0xff], 0, 2, &options).unwrap(), "-_8=");
/// ```
pub fn encode_with(
    source: &[u8],
    offset: usize,
    length: usize,
    options: &EncodeOptions,
) -> Result<String, EncodeError> {
    let encoded = encode_to_bytes(source, offset, length, options)?;
    Ok(into_text(encoded))
}

/// Converts encoder output to a string.
///
/// Encoder output is ASCII, so the checked conversion always succeeds; the
/// lossy branch keeps the result well-formed if that ever stops holding.
fn into_text(encoded: Vec<u8>) -> String {
    match String::from_utf8(encoded) {
        Ok(text) => text,
        Err(err) => {
            log::warn!("encoded output is not ASCII, converting lossily: {err}");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}
