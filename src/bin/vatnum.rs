//! `vatnum`: validate VAT numbers from arguments, a file or stdin.
//!
//! Exit codes: 0 when every input is valid, 1 when any is invalid, 2 when
//! input could not be read or (with `--strict`) a payload was malformed.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;
use serde::Serialize;
use thiserror::Error;
use vatnum::{Validator, ValidatorConfig, VatError, Verdict};

/// A path argument, or `-` for stdin.
#[derive(Clone, Debug)]
enum PathOrStdin {
    Stdin,
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// Tab-separated `input, valid|invalid, reason` lines.
    Human,
    /// One JSON object per input (NDJSON).
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "vatnum", version, about = "Validate EU VAT identification numbers offline")]
struct Cli {
    /// VAT numbers to check. Read one per line from --input when omitted.
    #[arg(value_name = "NUMBER")]
    numbers: Vec<String>,

    /// File with one number per line, or `-` for stdin.
    #[arg(long, short, value_name = "FILE")]
    input: Option<PathOrStdin>,

    #[arg(long, short, value_enum, default_value = "human")]
    format: OutputFormat,

    /// Treat payloads a checksum cannot read as errors (exit 2).
    #[arg(long)]
    strict: bool,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read {source_name}: {cause}")]
    Read {
        source_name: String,
        #[source]
        cause: io::Error,
    },
    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),
    #[error("cannot encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    input: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    verdict: Option<&'a Verdict>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Default)]
struct Summary {
    invalid: usize,
    malformed: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(summary) if summary.malformed > 0 => ExitCode::from(2),
        Ok(summary) if summary.invalid > 0 => ExitCode::from(1),
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> Result<Summary, CliError> {
    let numbers = if cli.numbers.is_empty() {
        read_lines(cli.input.as_ref().unwrap_or(&PathOrStdin::Stdin))?
    } else {
        cli.numbers.clone()
    };

    let config = if cli.strict {
        ValidatorConfig::strict()
    } else {
        ValidatorConfig::default()
    };
    let validator = Validator::new(config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut summary = Summary::default();

    for number in &numbers {
        let result = validator.check(number);
        match &result {
            Ok(verdict) if verdict.is_valid() => {}
            Ok(_) => summary.invalid += 1,
            Err(_) => {
                summary.invalid += 1;
                summary.malformed += 1;
            }
        }
        emit(&mut out, cli.format, number, &result)?;
    }
    out.flush()?;
    Ok(summary)
}

fn read_lines(source: &PathOrStdin) -> Result<Vec<String>, CliError> {
    let (name, reader): (String, Box<dyn BufRead>) = match source {
        PathOrStdin::Stdin => ("stdin".to_owned(), Box::new(io::stdin().lock())),
        PathOrStdin::Path(path) => {
            let file = File::open(path).map_err(|cause| CliError::Read {
                source_name: path.display().to_string(),
                cause,
            })?;
            (path.display().to_string(), Box::new(BufReader::new(file)))
        }
    };

    reader
        .lines()
        .map(|line| {
            line.map(|l| l.trim_end_matches('\r').to_owned())
                .map_err(|cause| CliError::Read {
                    source_name: name.clone(),
                    cause,
                })
        })
        .collect()
}

fn emit(
    out: &mut impl Write,
    format: OutputFormat,
    input: &str,
    result: &Result<Verdict, VatError>,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Human => {
            let (valid, reason) = match result {
                Ok(verdict) => (verdict.is_valid(), describe(verdict)),
                Err(err) => (false, err.to_string()),
            };
            let status = if valid { "valid" } else { "invalid" };
            writeln!(out, "{input}\t{status}\t{reason}")?;
        }
        OutputFormat::Json => {
            let report = match result {
                Ok(verdict) => Report {
                    input,
                    valid: verdict.is_valid(),
                    verdict: Some(verdict),
                    error: None,
                },
                Err(err) => Report {
                    input,
                    valid: false,
                    verdict: None,
                    error: Some(err.to_string()),
                },
            };
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn describe(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Blank => "blank".to_owned(),
        Verdict::NoFormatMatch => "no matching format".to_owned(),
        Verdict::UnknownCountry { code } if code.is_empty() => "missing country prefix".to_owned(),
        Verdict::UnknownCountry { code } => format!("unknown country '{code}'"),
        Verdict::Checked {
            country,
            passed: true,
        } => format!("{country} checksum ok"),
        Verdict::Checked {
            country,
            passed: false,
        } => format!("{country} checksum mismatch"),
    }
}
