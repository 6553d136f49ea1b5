use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use uniform_rect::request::{respond_with, SearchRequest};
use uniform_rect::EvaluationMode;

/// Find the largest all-ones or all-zeroes rectangle in a binary matrix.
///
/// Reads a JSON request `{"matrix": [[..]], "evaluationMode": "ONES"|"ZEROES"}`
/// and writes the JSON reply to stdout.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Request file; reads stdin when omitted or `-`
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Override the request's evaluation mode
    #[arg(long, short, value_parser = parse_mode)]
    mode: Option<EvaluationMode>,

    /// Rows per engine band (default: ceil(sqrt(rows)))
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    band_height: Option<u64>,

    /// Pretty-print the reply
    #[arg(long)]
    pretty: bool,

    /// Log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_mode(value: &str) -> Result<EvaluationMode, String> {
    value.parse().map_err(|e: uniform_rect::MatrixError| e.to_string())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn read_request(input: Option<&PathBuf>) -> Result<SearchRequest, String> {
    let raw = match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?,
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("cannot read stdin: {e}"))?;
            buf
        }
    };
    serde_json::from_str(&raw).map_err(|e| format!("malformed request: {e}"))
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut request = match read_request(cli.input.as_ref()) {
        Ok(req) => req,
        Err(err) => {
            eprintln!("uniform-rect: {err}");
            return ExitCode::from(1);
        }
    };
    if let Some(mode) = cli.mode {
        request.evaluation_mode = mode.as_str().to_owned();
    }
    tracing::debug!(
        rows = request.matrix.len(),
        mode = %request.evaluation_mode,
        "request loaded"
    );

    let band_height = cli.band_height.map(|b| b as usize);
    let (reply, code) = match respond_with(&request, band_height) {
        Ok(reply) => (to_json(&reply, cli.pretty), ExitCode::SUCCESS),
        Err(body) => {
            tracing::warn!(details = ?body.details, "request rejected");
            (to_json(&body, cli.pretty), ExitCode::from(2))
        }
    };

    match reply {
        Ok(json) => {
            println!("{json}");
            code
        }
        Err(err) => {
            eprintln!("uniform-rect: cannot encode reply: {err}");
            ExitCode::from(1)
        }
    }
}
