//! Parse a configuration file and print the resulting tree.
//!
//! Run with: cargo run --example dump -- path/to/config.toml
//!
//! Set `RUST_LOG=trace` to see every header and assignment as it is parsed.

use log::LevelFilter;
use serde_tinytoml::{parse, to_string_pretty};
use simple_logger::SimpleLogger;
use std::process::ExitCode;

fn main() -> ExitCode {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);
    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("failed to install logger: {}", e);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [path] = args.as_slice() else {
        eprintln!("usage: dump <file>");
        return ExitCode::from(2);
    };

    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            log::error!("cannot read {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    match parse(&source) {
        Ok(root) => {
            print!("{}", to_string_pretty(&root));
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}: {}", path, e);
            ExitCode::FAILURE
        }
    }
}
