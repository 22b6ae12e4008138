//! The encoding loop.

use crate::constants::{MAX_LINE_LENGTH, NEW_LINE};
use crate::{encode_3to4, EncodeOptions};

/// Encodes `length` bytes of `source` starting at `offset` into `dest`
/// starting at `dest_offset`, returning the position just past the last
/// byte written.
///
/// With `break_lines` set a newline follows every 76 symbols, including after
/// a full final group that ends a line. No newline follows a partial final
/// group.
///
/// # Panics
///
/// Panics if the source range is out of bounds or `dest` has fewer than
/// [`encoded_len`](crate::encoded_len) bytes available after `dest_offset`.
///
/// # Example
///
/// ```
/// use b64kit_base64::{encode_into, EncodeOptions};
///
/// let data = b"hello";
/// let mut dest = vec![0u8; 16];
/// let end = encode_into(data, 0, data.len(), &mut dest, 0, &EncodeOptions::default());
/// assert_eq!(&dest[..end], b"aGVsbG8=");
/// ```
pub fn encode_into(
    source: &[u8],
    offset: usize,
    length: usize,
    dest: &mut [u8],
    dest_offset: usize,
    options: &EncodeOptions,
) -> usize {
    let alphabet = options.alphabet().symbols();
    let end = offset + length;

    let mut d = offset;
    let mut e = dest_offset;
    let mut line_length = 0;

    while end - d >= 3 {
        encode_3to4(source, d, 3, dest, e, alphabet);
        d += 3;
        e += 4;

        line_length += 4;
        if options.break_lines && line_length >= MAX_LINE_LENGTH {
            dest[e] = NEW_LINE;
            e += 1;
            line_length = 0;
        }
    }

    if d < end {
        encode_3to4(source, d, end - d, dest, e, alphabet);
        e += 4;
    }

    e
}
