use crate::constants::MAX_LINE_LENGTH;

/// Returns the number of bytes the encoder writes for `length` input bytes.
///
/// The only case where the encoder writes less is with `break_lines` set and a
/// partial final group that ends exactly on a line boundary: the newline
/// counted here is never written, so the result is one byte too large.
///
/// # Example
///
/// ```
/// use b64kit_base64::encoded_len;
///
/// assert_eq!(encoded_len(5, false), 8);
/// assert_eq!(encoded_len(57, true), 77);
/// ```
pub const fn encoded_len(length: usize, break_lines: bool) -> usize {
    let base = (length / 3) * 4 + if length % 3 > 0 { 4 } else { 0 };
    if break_lines {
        base + base / MAX_LINE_LENGTH
    } else {
        base
    }
}
