//! Alphabet dialects and selection from encoder options.

use crate::constants::{ALPHABET, ALPHABET_ORDERED, ALPHABET_URL};
use crate::EncodeOptions;

/// One of the three fixed 64-symbol alphabets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Alphabet {
    /// `A-Z a-z 0-9 + /`
    #[default]
    Standard,
    /// `A-Z a-z 0-9 - _`
    UrlSafe,
    /// `- 0-9 A-Z _ a-z`
    Ordered,
}

impl Alphabet {
    /// Picks the alphabet requested by `options`.
    ///
    /// `url_safe` takes priority over `ordered` when both are set.
    pub fn from_options(options: &EncodeOptions) -> Self {
        if options.url_safe {
            Alphabet::UrlSafe
        } else if options.ordered {
            Alphabet::Ordered
        } else {
            Alphabet::Standard
        }
    }

    /// The 64 symbols of this alphabet, indexed by 6-bit value.
    pub const fn symbols(self) -> &'static [u8; 64] {
        match self {
            Alphabet::Standard => ALPHABET,
            Alphabet::UrlSafe => ALPHABET_URL,
            Alphabet::Ordered => ALPHABET_ORDERED,
        }
    }

    /// The symbols as a string, e.g. for configuring a decoder.
    pub fn as_str(self) -> &'static str {
        match self {
            Alphabet::Standard => "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
            Alphabet::UrlSafe => "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_",
            Alphabet::Ordered => "-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz",
        }
    }
}
