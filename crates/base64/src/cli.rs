//! `b64kit-encode` — encode stdin to base64 on stdout.
//!
//! Provides the argument parsing and encoding logic used by the binary entry
//! point.

use std::path::PathBuf;

use crate::{encode_to_bytes, EncodeError, EncodeOptions};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("unknown flag: {0}")]
    UnknownFlag(String),
    #[error("flag {0} requires a value")]
    MissingValue(String),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

// ── Arguments ─────────────────────────────────────────────────────────────

/// Parsed command line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// Options set by flags.
    pub flags: EncodeOptions,
    /// JSON file holding an [`EncodeOptions`] object.
    pub config: Option<PathBuf>,
}

/// Parses arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> Result<CliArgs, CliError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_ref() {
            "--break-lines" => parsed.flags.break_lines = true,
            "--url-safe" => parsed.flags.url_safe = true,
            "--ordered" => parsed.flags.ordered = true,
            "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| CliError::MissingValue("--config".to_string()))?;
                parsed.config = Some(PathBuf::from(path.as_ref()));
            }
            other => return Err(CliError::UnknownFlag(other.to_string())),
        }
    }

    Ok(parsed)
}

/// Combines options from a config file with flags. A flag can switch an
/// option on but never off.
pub fn merge_options(config: EncodeOptions, flags: EncodeOptions) -> EncodeOptions {
    EncodeOptions {
        break_lines: config.break_lines || flags.break_lines,
        url_safe: config.url_safe || flags.url_safe,
        ordered: config.ordered || flags.ordered,
    }
}

/// Resolves the effective options for `args`, reading the config file if one
/// was given.
pub fn resolve_options(args: &CliArgs) -> Result<EncodeOptions, CliError> {
    let config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            serde_json::from_str(&text)?
        }
        None => EncodeOptions::default(),
    };
    Ok(merge_options(config, args.flags))
}

// ── b64kit-encode ─────────────────────────────────────────────────────────

/// Encodes `input` with the options resolved from `args`.
pub fn run(args: &CliArgs, input: &[u8]) -> Result<Vec<u8>, CliError> {
    let options = resolve_options(args)?;
    log::debug!("encoding {} bytes with {:?}", input.len(), options);
    Ok(encode_to_bytes(input, 0, input.len(), &options)?)
}
