//! Transition selection over the derived artifacts.

use qubit_spectra_core::ResponseGrid;

use crate::components::LabelGrid;
use crate::params::TransitionDetectorParams;
use crate::peaks::Peak;
use crate::profile::HeightProfile;
use crate::result::{F01Transition, F12Transition};

/// Pick the primary transition from the tallest surviving feature.
///
/// The first column achieving the maximal height decides whether f01 exists
/// at all; among all columns at that height, the one with the strongest
/// response magnitude in the feature's topmost row wins, first column in
/// index order on ties.
pub fn select_f01(
    grid: &ResponseGrid,
    labels: &LabelGrid,
    profile: &HeightProfile,
    params: &TransitionDetectorParams,
) -> Option<F01Transition> {
    let mut tallest = 0usize;
    for (x, &px) in profile.height_px.iter().enumerate() {
        if px > profile.height_px[tallest] {
            tallest = x;
        }
    }
    let max_px = profile.height_px[tallest];
    if profile.height_db[tallest] < params.f01_height_min {
        return None;
    }

    let idx_y = grid.num_powers() - max_px;
    let mut best: Option<(usize, f64)> = None;
    for (x, &px) in profile.height_px.iter().enumerate() {
        if px != max_px {
            continue;
        }
        let mag = grid.value(idx_y, x).abs();
        if best.map(|(_, top)| mag > top).unwrap_or(true) {
            best = Some((x, mag));
        }
    }
    let (idx_x, _) = best?;

    let label = labels.label(idx_y, idx_x);
    let moment = component_moment(grid, labels, label);
    let quality_level = quality_bucket(moment, &params.f01_moment_thresholds);

    Some(F01Transition {
        idx_x,
        idx_y,
        frequency: grid.xs()[idx_x],
        label,
        moment,
        quality_level,
    })
}

/// Pick the secondary transition: the qualifying peak nearest below f01.
///
/// A peak qualifies when it ends a bounded number of columns before the f01
/// column and is physically tall enough. Among qualifiers the tallest wins;
/// ties go to the peak closest to f01 (largest `x_end`). The column is then
/// the strongest response within the peak's plateau at the plateau's row.
pub fn select_f12(
    grid: &ResponseGrid,
    peaks: &[Peak],
    f01: &F01Transition,
    params: &TransitionDetectorParams,
) -> Option<F12Transition> {
    let gap_min = params.f12_distance_min as i64;
    let gap_max = params.f12_distance_max as i64;

    let candidates: Vec<&Peak> = peaks
        .iter()
        .filter(|p| {
            let gap = f01.idx_x as i64 - p.x_end as i64 + 1;
            gap >= gap_min && gap <= gap_max && p.height_db >= params.f12_height_min
        })
        .collect();

    let max_px = candidates.iter().map(|p| p.height_px).max()?;
    let peak = candidates
        .into_iter()
        .filter(|p| p.height_px == max_px)
        .max_by_key(|p| p.x_end)?;

    let idx_y = grid.num_powers() - peak.height_px;
    let mut best: Option<(usize, f64)> = None;
    for col in peak.x_start..peak.x_end {
        let mag = grid.value(idx_y, col).abs();
        if best.map(|(_, top)| mag > top).unwrap_or(true) {
            best = Some((col, mag));
        }
    }
    let (idx_x, _) = best?;

    Some(F12Transition {
        idx_x,
        idx_y,
        frequency: grid.xs()[idx_x],
    })
}

/// Magnitude-weighted integral over one component's pixels: each pixel
/// contributes `|z| * lever * row_width`, rewarding features that are both
/// strong and extend broadly toward the reference power.
pub fn component_moment(grid: &ResponseGrid, labels: &LabelGrid, label: u32) -> f64 {
    let levers = grid.levers();
    let widths = grid.row_widths();

    let mut moment = 0.0;
    for row in 0..labels.height() {
        let weight = levers[row] * widths[row];
        for col in 0..labels.width() {
            if labels.label(row, col) == label {
                moment += grid.value(row, col).abs() * weight;
            }
        }
    }
    moment
}

/// Quality bucket for a moment: the number of thresholds strictly below it.
/// Monotonically non-decreasing in the moment for a fixed threshold list.
pub fn quality_bucket(moment: f64, thresholds: &[f64]) -> usize {
    thresholds.partition_point(|&t| t < moment)
}
