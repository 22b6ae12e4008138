//! Single-group encoding: up to three bytes into four symbols.

use crate::constants::PAD;

/// Encodes up to three bytes of `source` starting at `src_offset` and writes
/// four symbols to `dest` starting at `dest_offset`.
///
/// `num_sig_bytes` is the number of real input bytes in the group. With 3 all
/// four symbols are real; with 2 the last symbol is `=`; with 1 the last two
/// are `=`. Any other count writes nothing. Bytes past `num_sig_bytes` are
/// never read.
///
/// # Panics
///
/// Panics if `source` or `dest` is too short for the group. Callers size the
/// buffers up front.
///
/// # Example
///
/// ```
/// use b64kit_base64::{encode_3to4, ALPHABET};
///
/// let mut dest = [0u8; 4];
/// encode_3to4(b"fo", 0, 2, &mut dest, 0, ALPHABET);
/// assert_eq!(&dest, b"Zm8=");
/// ```
pub fn encode_3to4(
    source: &[u8],
    src_offset: usize,
    num_sig_bytes: usize,
    dest: &mut [u8],
    dest_offset: usize,
    alphabet: &[u8; 64],
) {
    //  23      16 15       8 7        0   bit position
    //  |  byte 0  |  byte 1  |  byte 2 |
    //  | 0    | 1     | 2     | 3    |    six-bit groups (>>18, >>12, >>6, >>0)
    let o1 = if num_sig_bytes > 0 { (source[src_offset] as u32) << 16 } else { 0 };
    let o2 = if num_sig_bytes > 1 { (source[src_offset + 1] as u32) << 8 } else { 0 };
    let o3 = if num_sig_bytes > 2 { source[src_offset + 2] as u32 } else { 0 };
    let window = o1 | o2 | o3;

    let symbol = |shift: u32| alphabet[((window >> shift) & 0x3f) as usize];

    match num_sig_bytes {
        3 => {
            dest[dest_offset] = symbol(18);
            dest[dest_offset + 1] = symbol(12);
            dest[dest_offset + 2] = symbol(6);
            dest[dest_offset + 3] = symbol(0);
        }
        2 => {
            dest[dest_offset] = symbol(18);
            dest[dest_offset + 1] = symbol(12);
            dest[dest_offset + 2] = symbol(6);
            dest[dest_offset + 3] = PAD;
        }
        1 => {
            dest[dest_offset] = symbol(18);
            dest[dest_offset + 1] = symbol(12);
            dest[dest_offset + 2] = PAD;
            dest[dest_offset + 3] = PAD;
        }
        _ => {}
    }
}
