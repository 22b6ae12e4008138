use crate::{encode_to_bytes, EncodeError, EncodeOptions};

/// Encodes from untyped input, such as values received over FFI or from a
/// deserialized request, where the source may be absent and the offset and
/// length may be negative.
///
/// # Errors
///
/// Returns [`EncodeError::NullInput`] if `source` is `None`, and
/// [`EncodeError::InvalidRange`] if `offset` or `length` is negative or the
/// range runs past the source.
///
/// # Example
///
/// ```
/// use b64kit_base64::{encode_raw, EncodeError, EncodeOptions};
///
/// let options = EncodeOptions::default();
/// assert_eq!(encode_raw(Some(b"foo"), 0, 3, &options).unwrap(), b"Zm9v");
/// assert_eq!(encode_raw(None, 0, 0, &options), Err(EncodeError::NullInput));
/// ```
pub fn encode_raw(
    source: Option<&[u8]>,
    offset: i64,
    length: i64,
    options: &EncodeOptions,
) -> Result<Vec<u8>, EncodeError> {
    let source = source.ok_or(EncodeError::NullInput)?;
    let invalid = || EncodeError::InvalidRange { offset, length, size: source.len() };

    let offset_usize = usize::try_from(offset).map_err(|_| invalid())?;
    let length_usize = usize::try_from(length).map_err(|_| invalid())?;

    encode_to_bytes(source, offset_usize, length_usize, options)
}
