//! OxiTIFF CLI - TIFF directory and strip inspector
//!
//! Prints every image file directory of a little-endian TIFF file with its
//! tag values, then the decoded bytes of each strip as a hex dump.

mod commands;
mod labels;
mod utils;

use clap::{ArgAction, CommandFactory, Parser};
use commands::{InspectOptions, cmd_inspect};
use oxitiff_format::{DEFAULT_MAX_STRIP_BYTES, StripOptions};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "oxitiff")]
#[command(author, version, about = "Inspect the structure of a TIFF file")]
#[command(long_about = "
OxiTIFF walks the image file directories of a little-endian TIFF file,
prints each tag with its decoded value, and dumps the decoded bytes of
every strip (uncompressed or LZW, with horizontal differencing undone).

Examples:
  oxitiff image.tif
  oxitiff --no-strips image.tif
  oxitiff --json image.tif
  oxitiff -vv --max-strip-bytes 65536 image.tif
")]
struct Cli {
    /// TIFF file to inspect
    file: Option<PathBuf>,

    /// Print directories only, without decoding strips
    #[arg(long)]
    no_strips: bool,

    /// Upper bound on the decoded size of one strip, in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_STRIP_BYTES)]
    max_strip_bytes: usize,

    /// Output as JSON (machine-readable)
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Initialize logging on stderr; `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();

    let Some(file) = cli.file else {
        // No input is not an error: show how to call the tool.
        let _ = Cli::command().print_help();
        return;
    };

    init_logging(cli.verbose);

    let options = InspectOptions {
        strips: !cli.no_strips,
        json: cli.json,
        strip_options: StripOptions::default().with_max_strip_bytes(cli.max_strip_bytes),
    };

    if let Err(e) = cmd_inspect(&file, &options) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
