//! Base64 encoding with selectable alphabets and optional line wrapping.
//!
//! This crate provides:
//! - Standard, URL-safe and ordered alphabets
//! - `=` padding of the final group
//! - Optional newline after every 76 encoded symbols
//! - Encoding of a sub-range of a slice, to a `String` or to bytes
//!
//! # Example
//!
//! ```
//! use b64kit_base64::{encode, encode_with, EncodeOptions};
//!
//! assert_eq!(encode(b"foobar"), "Zm9vYmFy");
//!
//! let options = EncodeOptions::default().with_ordered(true);
//! assert_eq!(encode_with(b"foobar", 0, 6, &options).unwrap(), "OaxjNa4m");
//! ```

pub mod cli;

mod alphabet;
mod constants;
mod encode;
mod encode_3to4;
mod encode_into;
mod encode_raw;
mod encode_to_bytes;
mod encoded_len;
mod error;
mod options;

pub use alphabet::Alphabet;
pub use constants::{ALPHABET, ALPHABET_ORDERED, ALPHABET_URL, MAX_LINE_LENGTH, NEW_LINE, PAD};
pub use encode::{encode, encode_with};
pub use encode_3to4::encode_3to4;
pub use encode_into::encode_into;
pub use encode_raw::encode_raw;
pub use encode_to_bytes::encode_to_bytes;
pub use encoded_len::encoded_len;
pub use error::EncodeError;
pub use options::EncodeOptions;
