//! `b64kit-encode` — encode stdin to base64 on stdout.
//!
//! Usage:
//!   b64kit-encode [--break-lines] [--url-safe] [--ordered] [--config <file.json>]

use b64kit_base64::cli::{parse_args, run};
use std::io::{self, Read, Write};

fn main() {
    env_logger::init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let mut input = Vec::new();
    if let Err(e) = io::stdin().read_to_end(&mut input) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match run(&args, &input) {
        Ok(encoded) => {
            if let Err(e) = io::stdout().write_all(&encoded) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
