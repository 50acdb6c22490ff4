//! eventpath: read or write slash-delimited paths in JSON event streams
//!
//! Usage:
//!   # Extract fields from NDJSON events on stdin
//!   cat events.jsonl | eventpath get --path user/id --path context/ip
//!
//!   # Load the path list from a config file
//!   eventpath get events.jsonl --config paths.json
//!
//!   # Inject values; values parse as JSON, falling back to plain strings
//!   eventpath set events.jsonl --path user/country,source/id \
//!       --value user/country=DE --value source/id=42
//!
//! Rejected events are reported on stderr as JSON error responses.
//! Set RUST_LOG=debug for per-event diagnostics and a run summary.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use eventpath::{extract_events, inject_events, PathsConfig, Record, RecordWriter, StreamStats};
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "eventpath")]
#[command(about = "Read and write slash-delimited paths in JSON event streams", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract configured paths from every event
    Get {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Write values into every event at the configured paths
    Set {
        #[command(flatten)]
        common: CommonArgs,

        /// Value to write, as PATH=VALUE (repeatable)
        #[arg(long = "value", value_name = "PATH=VALUE")]
        values: Vec<String>,
    },
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Input file of newline-delimited JSON events (use stdin if omitted)
    #[arg(value_name = "FILE")]
    input: Option<String>,

    /// Path expression to use, repeatable or comma-separated
    #[arg(long = "path", short = 'p', value_name = "PATH")]
    paths: Vec<String>,

    /// JSON config file with a "paths" list
    #[arg(long, short = 'c')]
    config: Option<String>,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let stats = match cli.command {
        Command::Get { common } => {
            let paths = load_config(&common)?.build();
            let reader = open_input(common.input.as_deref())?;
            let mut output = RecordWriter::new(std::io::stdout().lock());
            let mut errors = RecordWriter::new(std::io::stderr().lock());
            extract_events(reader, &mut output, &mut errors, &paths)?
        }
        Command::Set { common, values } => {
            let mut config = load_config(&common)?;
            let values = parse_values(&values)?;
            config.include_paths(values.keys());
            let paths = config.build();
            let reader = open_input(common.input.as_deref())?;
            let mut output = RecordWriter::new(std::io::stdout().lock());
            let mut errors = RecordWriter::new(std::io::stderr().lock());
            inject_events(reader, &mut output, &mut errors, &paths, &values)?
        }
    };

    report(stats);
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Build the path configuration: config file first, then --path flags
fn load_config(args: &CommonArgs) -> Result<PathsConfig> {
    let mut config = match &args.config {
        Some(path) => PathsConfig::from_file(path)?,
        None => PathsConfig::default(),
    };
    config.extend_from_args(&args.paths);
    Ok(config)
}

fn open_input(input: Option<&str>) -> Result<Box<dyn BufRead>> {
    Ok(match input {
        Some(file_path) => Box::new(BufReader::new(
            File::open(file_path).with_context(|| format!("Failed to open input: {}", file_path))?,
        )),
        None => Box::new(BufReader::new(std::io::stdin())),
    })
}

/// Parse PATH=VALUE pairs into a flat path -> value record
fn parse_values(pairs: &[String]) -> Result<Record> {
    let mut values = Record::new();
    for pair in pairs {
        let Some((path, raw)) = pair.split_once('=') else {
            bail!("Invalid --value '{}', expected PATH=VALUE", pair);
        };
        let value = serde_json::from_str::<Value>(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        values.insert(path.trim().to_string(), value);
    }
    Ok(values)
}

fn report(stats: StreamStats) {
    debug!(
        processed = stats.processed,
        written = stats.written,
        rejected = stats.rejected,
        "done"
    );
}
