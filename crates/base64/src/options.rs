//! Encoder configuration.

use serde::{Deserialize, Serialize};

use crate::Alphabet;

/// Options for an encode call.
///
/// Every field defaults to `false`, which gives unwrapped output in the
/// standard alphabet. Deserializing from a partial object fills the missing
/// fields with their defaults.
///
/// # Example
///
/// ```
/// use b64kit_base64::{Alphabet, EncodeOptions};
///
/// let options = EncodeOptions::default().with_url_safe(true);
/// assert_eq!(options.alphabet(), Alphabet::UrlSafe);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    /// Insert a newline after every 76 encoded symbols.
    pub break_lines: bool,
    /// Use the URL- and filename-safe alphabet. Wins over `ordered`.
    pub url_safe: bool,
    /// Use the ordered alphabet.
    pub ordered: bool,
}

impl EncodeOptions {
    pub fn with_break_lines(mut self, break_lines: bool) -> Self {
        self.break_lines = break_lines;
        self
    }

    pub fn with_url_safe(mut self, url_safe: bool) -> Self {
        self.url_safe = url_safe;
        self
    }

    pub fn with_ordered(mut self, ordered: bool) -> Self {
        self.ordered = ordered;
        self
    }

    /// The alphabet these options select.
    pub fn alphabet(&self) -> Alphabet {
        Alphabet::from_options(self)
    }
}
