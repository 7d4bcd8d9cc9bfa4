//! Reflow an extractor JSON dump to plain text
//!
//! Reads a positioned-fragment dump produced by the upstream extractor and
//! prints the reconstructed text to stdout.
//!
//! Usage:
//!   cargo run --bin reflow_text -- dump.json
//!   cargo run --bin reflow_text -- dump.json --raw
//!   cargo run --bin reflow_text -- dump.json --paragraph-gap 2.0 --full-page

use pdf_reflow::{raw_text, reflow_with_config, FragmentExtractor, JsonDumpExtractor, ReflowConfig};
use std::path::PathBuf;
use std::process::ExitCode;

struct CliConfig {
    input: PathBuf,
    raw: bool,
    config: ReflowConfig,
}

impl CliConfig {
    fn from_args() -> Option<Self> {
        let args: Vec<String> = std::env::args().collect();
        let mut input = None;
        let mut raw = false;
        let mut config = ReflowConfig::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--raw" => {
                    raw = true;
                },
                "--full-page" => {
                    config = config.with_header_margin(0.0).with_footer_margin(1.0);
                },
                "--paragraph-gap" => {
                    i += 1;
                    let factor = args.get(i)?.parse().ok()?;
                    config = config.with_paragraph_gap_factor(factor);
                },
                other if input.is_none() && !other.starts_with("--") => {
                    input = Some(PathBuf::from(other));
                },
                _ => return None,
            }
            i += 1;
        }

        Some(Self {
            input: input?,
            raw,
            config,
        })
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let Some(cli) = CliConfig::from_args() else {
        eprintln!("Usage: reflow_text <dump.json> [--raw] [--full-page] [--paragraph-gap <factor>]");
        return ExitCode::FAILURE;
    };

    let bytes = match std::fs::read(&cli.input) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Cannot read {}: {}", cli.input.display(), e);
            return ExitCode::FAILURE;
        },
    };

    let document = match JsonDumpExtractor.extract(&bytes) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        },
    };

    let text = if cli.raw {
        raw_text(&document)
    } else {
        match reflow_with_config(&document, &cli.config) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            },
        }
    };

    println!("{}", text);
    ExitCode::SUCCESS
}
