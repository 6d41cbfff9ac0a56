//! Diagnostic PNG export.

use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage};

use qubit_spectra::TransitionDetection;
use qubit_spectra_core::ResponseGrid;

use crate::CliError;

const F01_MARK: Rgb<u8> = Rgb([220, 40, 40]);
const F12_MARK: Rgb<u8> = Rgb([150, 60, 200]);

/// Grayscale heatmap of the raw response, row 0 at the top.
fn heatmap(grid: &ResponseGrid) -> RgbImage {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &z in grid.zs() {
        lo = lo.min(z);
        hi = hi.max(z);
    }
    let span = (hi - lo).max(f64::MIN_POSITIVE);

    RgbImage::from_fn(
        grid.num_freqs() as u32,
        grid.num_powers() as u32,
        |x, y| {
            let z = grid.value(y as usize, x as usize);
            let shade = (255.0 * (z - lo) / span).round() as u8;
            Rgb([shade, shade, shade])
        },
    )
}

/// Filtered label view: background stays black, each surviving component
/// gets its own shade.
fn label_view(detection: &TransitionDetection) -> RgbImage {
    let labels = &detection.labels;
    RgbImage::from_fn(labels.width() as u32, labels.height() as u32, |x, y| {
        match labels.label(y as usize, x as usize) {
            0 => Rgb([0, 0, 0]),
            id => {
                let shade = 255 - ((id as u64 * 37) % 160) as u8;
                Rgb([shade, shade, shade])
            }
        }
    })
}

fn mark_column(img: &mut RgbImage, col: usize, color: Rgb<u8>) {
    for y in 0..img.height() {
        img.put_pixel(col as u32, y, color);
    }
}

/// Write the diagnostic views for one scan: the marked heatmap filed under
/// its quality bucket (moment in the name), plus the marked, original and
/// label views at the export root.
pub fn export_images(
    dir: &Path,
    qubit_id: &str,
    grid: &ResponseGrid,
    detection: &TransitionDetection,
) -> Result<(), CliError> {
    let mut marked = heatmap(grid);
    if let Some(f01) = &detection.f01 {
        mark_column(&mut marked, f01.idx_x, F01_MARK);
    }
    if let Some(f12) = &detection.f12 {
        mark_column(&mut marked, f12.idx_x, F12_MARK);
    }

    let (quality, moment) = detection
        .f01
        .map(|f01| (f01.quality_level, f01.moment as i64))
        .unwrap_or((0, 0));

    let bucket_dir = dir.join(quality.to_string());
    fs::create_dir_all(&bucket_dir).map_err(|source| CliError::Io {
        path: bucket_dir.clone(),
        source,
    })?;

    marked.save(bucket_dir.join(format!("qubit_{qubit_id}_{moment:06}.png")))?;
    marked.save(dir.join(format!("qubit_{qubit_id}_0_marked.png")))?;
    heatmap(grid).save(dir.join(format!("qubit_{qubit_id}_1_orig.png")))?;
    label_view(detection).save(dir.join(format!("qubit_{qubit_id}_2_binarize.png")))?;

    Ok(())
}
