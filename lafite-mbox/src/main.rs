//! lafite-mbox: convert Laurel/Lafite mail files to mbox
//!
//! # Usage
//!
//! ```bash
//! # Convert a single file
//! lafite-mbox --laurel Inbox.mail --mbox Inbox.mbox
//!
//! # Convert every .mail file in a directory
//! lafite-mbox --indir /my/lafite/dir --outdir /my/mbox/dir
//!
//! # Trace headers and undocumented stamp flags
//! lafite-mbox --laurel Inbox.mail --mbox Inbox.mbox --trace headers --trace undocumented-flags
//! ```

use anyhow::Context;
use clap::Parser;
use lafite_mbox::config::{Config, TraceCategory};
use lafite_mbox::convert::{convert_directory, convert_file, ConvertOptions, TracingObserver};
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "lafite-mbox")]
#[command(version, about = "Convert Laurel/Lafite mail files to mbox", long_about = None)]
struct Cli {
    /// Lafite file to convert
    #[arg(long, value_name = "FILE", conflicts_with = "indir", requires = "mbox")]
    laurel: Option<PathBuf>,

    /// mbox file to write
    #[arg(long, value_name = "FILE", requires = "laurel")]
    mbox: Option<PathBuf>,

    /// Directory of .mail files to convert
    #[arg(long, value_name = "DIR", requires = "outdir")]
    indir: Option<PathBuf>,

    /// Directory receiving the .mbox files (created if missing)
    #[arg(long, value_name = "DIR", requires = "indir")]
    outdir: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Diagnostic category to trace (repeatable)
    #[arg(long, value_enum, value_name = "CATEGORY")]
    trace: Vec<TraceCategory>,

    /// Do not quote body lines starting with "From "
    #[arg(long)]
    no_from_quoting: bool,

    /// Drop messages flagged as deleted
    #[arg(long)]
    skip_deleted: bool,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => Config::default(),
    };
    apply_overrides(&mut config, &cli);
    config.validate()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("lafite_mbox={}", config.logging.level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let options = ConvertOptions::from(&config.conversion);
    let observer = TracingObserver::new(config.logging.trace);

    if let (Some(laurel), Some(mbox)) = (&cli.laurel, &cli.mbox) {
        if let Err(e) = convert_file(laurel, mbox, &options, observer) {
            error!("Error converting {}: {}", laurel.display(), e);
            std::process::exit(1);
        }
    } else if let (Some(indir), Some(outdir)) = (&cli.indir, &cli.outdir) {
        let report = convert_directory(
            indir,
            outdir,
            &config.conversion.input_extension,
            &config.conversion.output_extension,
            &options,
            observer,
        )?;
        info!(
            "Converted {} file(s), {} message(s)",
            report.converted_count(),
            report.message_count()
        );
        if !report.is_success() {
            for failure in &report.failed {
                error!("Failed: {}: {}", failure.input.display(), failure.error);
            }
            std::process::exit(1);
        }
    } else {
        usage();
    }

    Ok(())
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if cli.no_from_quoting {
        config.conversion.quote_from_lines = false;
    }
    if cli.skip_deleted {
        config.conversion.skip_deleted = true;
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    for category in &cli.trace {
        config.logging.trace.enable(*category);
    }
}

fn usage() {
    warn!("Usage:");
    warn!("To convert a single file:");
    warn!("    lafite-mbox --laurel mailfile.mail --mbox mailfile.mbox");
    warn!("");
    warn!("To convert an entire directory:");
    warn!("    lafite-mbox --indir /my/lafite/dir --outdir /my/mbox/dir");
    warn!("");
    warn!("Using --indir, we assume the Laurel/Lafite files all have names that end with `.mail`, and");
    warn!("using --outdir, we write the mbox files with the original file name with '.mbox' appended.");
}
