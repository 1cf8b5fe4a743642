//! File and directory conversion
//!
//! Each file owns its input and output handles for the duration of its
//! conversion. A failure in one file never stops the rest of a batch.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use super::converter::MessageConverter;
use super::observer::ConversionObserver;
use super::types::{BatchReport, ConvertOptions, FileFailure, FileSummary};
use crate::error::{ConvertError, Result};

/// Convert one Lafite file into one mbox file
pub fn convert_file<O: ConversionObserver>(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
    observer: O,
) -> Result<FileSummary> {
    info!("Converting {} to {}", input.display(), output.display());

    let reader = BufReader::new(File::open(input)?);
    let writer = BufWriter::new(File::create(output)?);

    let mut converter = MessageConverter::new(reader, writer, options.clone(), observer);
    let summary = converter.convert()?;
    converter.finish()?;

    info!("Processed {} message(s)", summary.messages);
    if summary.skipped > 0 {
        info!("Skipped {} deleted message(s)", summary.skipped);
    }

    Ok(FileSummary {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        summary,
    })
}

/// Convert every `*.<input_extension>` file in `in_dir`, writing
/// `<name>.<output_extension>` files into `out_dir`.
///
/// `out_dir` is created when missing. Per-file failures are logged and
/// collected in the report.
pub fn convert_directory<O: ConversionObserver>(
    in_dir: &Path,
    out_dir: &Path,
    input_extension: &str,
    output_extension: &str,
    options: &ConvertOptions,
    mut observer: O,
) -> Result<BatchReport> {
    if !in_dir.is_dir() {
        return Err(ConvertError::Config(format!(
            "indir '{}' is not a directory",
            in_dir.display()
        )));
    }
    if !out_dir.is_dir() {
        if out_dir.exists() {
            return Err(ConvertError::Config(format!(
                "outdir '{}' is not a directory",
                out_dir.display()
            )));
        }
        warn!(
            "Directory '{}' does not exist; trying to create it...",
            out_dir.display()
        );
        fs::create_dir_all(out_dir)?;
        warn!("Created directory '{}' successfully", out_dir.display());
    }

    let inputs = list_mail_files(in_dir, input_extension)?;
    if inputs.is_empty() {
        warn!("Directory '{}' contains no .{} files", in_dir.display(), input_extension);
    }

    info!("Converting files in {} to {}", in_dir.display(), out_dir.display());
    let mut report = BatchReport::default();

    for input in inputs {
        let output = output_path(&input, out_dir, output_extension);
        match convert_file(&input, &output, options, &mut observer) {
            Ok(summary) => report.converted.push(summary),
            Err(e) => {
                error!("Error converting {}: {}", input.display(), e);
                report.failed.push(FileFailure { input, error: e });
            }
        }
    }

    info!(
        "Finished converting files in {}: {} converted, {} failed",
        in_dir.display(),
        report.converted_count(),
        report.failed_count()
    );
    Ok(report)
}

/// Regular files in `dir` whose name ends with `.<extension>`, sorted by name
fn list_mail_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let suffix = format!(".{}", extension);
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.ends_with(&suffix))
            .unwrap_or(false);
        if matches && path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// `<out_dir>/<original file name>.<extension>`
fn output_path(input: &Path, out_dir: &Path, extension: &str) -> PathBuf {
    let mut name = input.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(extension);
    out_dir.join(name)
}
