//! Batch command implementation.
//!
//! Every input file is one independent job: load, draw, render,
//! write. Jobs run on the rayon pool; a failure poisons nothing but
//! its own job, and failed inputs are moved to a quarantine directory
//! for triage. Output is only written after the whole SVG string is
//! built, so a failed job leaves no partial file behind.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use rayon::prelude::*;
use thiserror::Error;

use stabcut_core::{draw, DrawOptions, LabelRequest};

use super::config::Config;
use super::font::{FontError, TtfFont};
use super::render::{card_svg, drawing_to_svg};
use super::workbook::ChartDocument;

/// Anything that can sink one job.
#[derive(Debug, Error)]
pub enum JobError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid chart document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Draw(#[from] stabcut_core::DrawError),
    #[error(transparent)]
    Font(#[from] FontError),
    #[error("drawing has no geometry to place on a card")]
    EmptyDrawing,
}

pub struct BatchOptions {
    pub config: Config,
    pub font: Option<TtfFont>,
    pub output_dir: PathBuf,
    pub quarantine_dir: PathBuf,
    /// Emit the bare drawing instead of the card sheet.
    pub raw: bool,
}

/// Outcome of one input file.
pub struct JobReport {
    pub input: PathBuf,
    pub outcome: Result<PathBuf, JobError>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Run one input end to end and return the written output path.
pub fn run_job(input: &Path, options: &BatchOptions) -> Result<PathBuf, JobError> {
    let document = ChartDocument::load(input)?;
    let layout = options.config.layout_for(document.class.as_deref());

    let label = options.font.as_ref().map(|font| LabelRequest {
        text: &document.name,
        font,
    });
    let draw_options = DrawOptions {
        notch_width: layout.notch_width,
        label,
    };
    let drawing = draw(&document, &document, &draw_options)?;

    let svg = if options.raw {
        drawing_to_svg(&drawing)
    } else {
        card_svg(&drawing, &layout).ok_or(JobError::EmptyDrawing)?
    };

    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("drawing");
    let output = options.output_dir.join(format!("{stem}.svg"));
    fs::write(&output, svg)?;

    Ok(output)
}

/// Run every input on the rayon pool, then report at the join point.
pub fn run_batch(inputs: &[PathBuf], options: &BatchOptions) -> std::io::Result<BatchSummary> {
    fs::create_dir_all(&options.output_dir)?;
    fs::create_dir_all(&options.quarantine_dir)?;

    let reports: Vec<JobReport> = inputs
        .par_iter()
        .map(|input| JobReport {
            input: input.clone(),
            outcome: run_job(input, options),
        })
        .collect();

    let mut summary = BatchSummary::default();
    for report in &reports {
        match &report.outcome {
            Ok(output) => {
                summary.succeeded += 1;
                println!("ok      {} -> {}", report.input.display(), output.display());
            }
            Err(error) => {
                summary.failed += 1;
                eprintln!("failed  {}: {}", report.input.display(), error);
                quarantine(&report.input, &options.quarantine_dir);
            }
        }
    }

    println!(
        "{} drawn, {} quarantined",
        summary.succeeded, summary.failed
    );
    Ok(summary)
}

fn quarantine(input: &Path, dir: &Path) {
    let Some(name) = input.file_name() else {
        return;
    };
    if let Err(error) = fs::rename(input, dir.join(name)) {
        eprintln!("could not quarantine {}: {}", input.display(), error);
    }
}

/// Execute the batch command.
pub fn cmd_batch(args: &[String]) {
    let mut input_dir: Option<&str> = None;
    let mut output_dir = "output";
    let mut quarantine_dir = "quarantine";
    let mut config_path: Option<&str> = None;
    let mut font_path: Option<&str> = None;
    let mut raw = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_dir = &args[i];
                }
            }
            "-q" | "--quarantine" => {
                i += 1;
                if i < args.len() {
                    quarantine_dir = &args[i];
                }
            }
            "-c" | "--config" => {
                i += 1;
                if i < args.len() {
                    config_path = Some(&args[i]);
                }
            }
            "-f" | "--font" => {
                i += 1;
                if i < args.len() {
                    font_path = Some(&args[i]);
                }
            }
            "--raw" => raw = true,
            other if input_dir.is_none() => input_dir = Some(other),
            other => {
                eprintln!("unexpected argument: {other}");
                process::exit(1);
            }
        }
        i += 1;
    }

    let Some(input_dir) = input_dir else {
        eprintln!("usage: stabcut batch <dir> [-c config.json] [-o out_dir] [-q quarantine_dir] [-f font.ttf] [--raw]");
        process::exit(1);
    };

    let config = match config_path {
        Some(path) => match Config::load(Path::new(path)) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("could not load config {path}: {error}");
                process::exit(1);
            }
        },
        None => Config::default(),
    };

    let font_path = font_path.map(PathBuf::from).or_else(|| config.font.clone());
    let font = match font_path {
        Some(path) => match TtfFont::load(&path) {
            Ok(font) => Some(font),
            Err(error) => {
                eprintln!("could not load font {}: {}", path.display(), error);
                process::exit(1);
            }
        },
        None => None,
    };

    let inputs = match collect_inputs(Path::new(input_dir)) {
        Ok(inputs) => inputs,
        Err(error) => {
            eprintln!("could not read {input_dir}: {error}");
            process::exit(1);
        }
    };
    if inputs.is_empty() {
        eprintln!("no .json chart documents in {input_dir}");
        process::exit(1);
    }

    let options = BatchOptions {
        config,
        font,
        output_dir: PathBuf::from(output_dir),
        quarantine_dir: PathBuf::from(quarantine_dir),
        raw,
    };

    match run_batch(&inputs, &options) {
        Ok(summary) if summary.succeeded == 0 => process::exit(1),
        Ok(_) => {}
        Err(error) => {
            eprintln!("batch failed: {error}");
            process::exit(1);
        }
    }
}

fn collect_inputs(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut inputs: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    inputs.sort();
    Ok(inputs)
}
