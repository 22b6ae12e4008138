/// Standard base64 alphabet.
pub const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// URL- and filename-safe alphabet (uses `-` and `_` instead of `+` and `/`).
pub const ALPHABET_URL: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// "Ordered" alphabet. Symbols are listed in ascending ASCII order, so encoded
/// output compares the same way the input does.
pub const ALPHABET_ORDERED: &[u8; 64] =
    b"-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

/// Padding byte.
pub const PAD: u8 = b'=';

/// Line separator written when line breaking is enabled.
pub const NEW_LINE: u8 = b'\n';

/// Number of encoded symbols per line when line breaking is enabled.
pub const MAX_LINE_LENGTH: usize = 76;
