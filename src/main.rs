//! `img2header` CLI - Convert an image into a C header byte array.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use img2header::header::{DEFAULT_ARRAY_NAME, DEFAULT_GUARD, DEFAULT_VALUES_PER_LINE};
use img2header::{Config, Pipeline, TargetSize};

/// Convert an image into a C header holding a square RGB byte array.
#[derive(Parser, Debug)]
#[command(name = "img2header")]
#[command(version, about, long_about = None)]
struct Args {
    /// Source image path.
    #[arg(value_name = "IMAGE")]
    image: PathBuf,

    /// Header path to (over)write. Its directory must exist.
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Edge length of the square output image.
    #[arg(default_value = "64", value_name = "SIZE", allow_negative_numbers = true)]
    size: String,

    /// Byte values per line of array data.
    #[arg(long, default_value_t = DEFAULT_VALUES_PER_LINE, value_name = "INT")]
    values_per_line: usize,

    /// Include-guard token.
    #[arg(long, default_value = DEFAULT_GUARD, value_name = "TOKEN")]
    guard: String,

    /// Identifier of the byte array.
    #[arg(long, default_value = DEFAULT_ARRAY_NAME, value_name = "IDENT")]
    array_name: String,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("img2header={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    let size: TargetSize = args.size.parse()?;

    let config = Config {
        size,
        values_per_line: args.values_per_line,
        guard: args.guard.clone(),
        array_name: args.array_name.clone(),
    };

    let pipeline = Pipeline::new(config).context("Invalid configuration")?;

    let summary = pipeline
        .process(&args.image, &args.output)
        .context("Failed to convert image")?;

    println!("{summary}");

    Ok(())
}
