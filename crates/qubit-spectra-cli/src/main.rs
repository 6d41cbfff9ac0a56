//! Batch CLI for the transition detector.
//!
//! Reads a figure-shaped scan JSON and a detector configuration JSON,
//! runs the detection pipeline, and optionally writes a machine-readable
//! result record to stdout and diagnostic PNGs to disk.

mod input;
mod render;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{info, LevelFilter};

use qubit_spectra::TransitionDetector;
use qubit_spectra_core::init_with_level;

use crate::report::ResultRecord;

#[derive(Parser, Debug)]
#[command(
    name = "qubit-spectra",
    about = "Extract f01/f12 transition frequencies from a qubit spectroscopy scan"
)]
struct Args {
    /// Scan JSON file (figure-shaped: data[0].x/y/z plus layout.title).
    #[arg(short = 'f', long)]
    input_file: PathBuf,

    /// Detector configuration JSON file.
    #[arg(short = 'c', long)]
    conf_file: PathBuf,

    /// Root directory for diagnostic PNG export.
    #[arg(long)]
    image_dir: Option<PathBuf>,

    /// Print a machine-readable result record to stdout. Validation and
    /// detection failures become ERROR records instead of a failing exit.
    #[arg(long)]
    json: bool,

    /// Verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("scan file has no traces")]
    EmptyScan,
    #[error(transparent)]
    Grid(#[from] qubit_spectra_core::GridError),
    #[error(transparent)]
    Params(#[from] qubit_spectra::ParamsError),
    #[error(transparent)]
    Detect(#[from] qubit_spectra::DetectError),
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

impl CliError {
    /// Validation and detection failures are reportable as ERROR records;
    /// unreadable input files are not, and always fail the process.
    fn is_reportable(&self) -> bool {
        matches!(
            self,
            CliError::EmptyScan | CliError::Grid(_) | CliError::Params(_) | CliError::Detect(_)
        )
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let conf = input::load_conf(&args.conf_file)?;
    let scan = input::load_scan(&args.input_file)?;

    let detector = TransitionDetector::new(conf.detector_params())?;
    let grid = scan.to_grid(conf.top_power)?;
    info!(
        "scan {}: {} frequencies x {} powers",
        scan.qubit_id(),
        grid.num_freqs(),
        grid.num_powers()
    );

    let detection = detector.detect(&grid)?;
    match &detection.f01 {
        Some(f01) => info!(
            "f01 = {:.6} (quality {}), f12 = {}",
            f01.frequency,
            f01.quality_level,
            detection
                .f12
                .map(|f12| format!("{:.6}", f12.frequency))
                .unwrap_or_else(|| "absent".to_string())
        ),
        None => info!("no f01 transition found"),
    }

    if let Some(dir) = &args.image_dir {
        render::export_images(dir, &scan.qubit_id(), &grid, &detection)?;
    }

    if args.json {
        print_record(&ResultRecord::ok(&detection));
    }
    Ok(())
}

fn print_record(record: &ResultRecord) {
    match serde_json::to_string(record) {
        Ok(line) => println!("{line}"),
        Err(err) => eprintln!("error: failed to encode result record: {err}"),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = init_with_level(level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if args.json && err.is_reportable() => {
            print_record(&ResultRecord::error(err.to_string()));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
