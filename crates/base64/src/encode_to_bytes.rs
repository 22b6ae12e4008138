use crate::{encode_into, encoded_len, EncodeError, EncodeOptions};

/// Encodes `length` bytes of `source` starting at `offset`, returning the
/// encoded bytes.
///
/// The returned buffer holds exactly the bytes written.
///
/// # Errors
///
/// Returns [`EncodeError::InvalidRange`] if `offset + length` runs past the end
/// of `source`. Nothing is allocated in that case.
///
/// # Example
///
/// ```
/// use b64kit_base64::{encode_to_bytes, EncodeOptions};
///
/// let encoded = encode_to_bytes(b"foobar", 0, 6, &EncodeOptions::default()).unwrap();
/// assert_eq!(encoded, b"Zm9vYmFy");
/// ```
pub fn encode_to_bytes(
    source: &[u8],
    offset: usize,
    length: usize,
    options: &EncodeOptions,
) -> Result<Vec<u8>, EncodeError> {
    match offset.checked_add(length) {
        Some(end) if end <= source.len() => {}
        _ => return Err(EncodeError::invalid_range(offset, length, source.len())),
    }

    let estimated = encoded_len(length, options.break_lines);
    let mut out = vec![0u8; estimated];
    let written = encode_into(source, offset, length, &mut out, 0, options);

    if written < estimated {
        log::trace!("trimming encoded buffer from {estimated} to {written} bytes");
        out.truncate(written);
        out.shrink_to_fit();
    }

    Ok(out)
}
