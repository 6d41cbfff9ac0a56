//! Per-column signal height over the filtered label grid.

use qubit_spectra_core::ResponseGrid;

use crate::components::LabelGrid;

/// Per-column height of the surviving signal: how far the first labeled
/// pixel sits from the last row, in pixels and in power units. A height of
/// 0 means the column has no surviving signal at all.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightProfile {
    pub height_px: Vec<usize>,
    pub height_db: Vec<f64>,
}

impl HeightProfile {
    /// Scan each column top-down for its first labeled pixel and convert
    /// the pixel count through the grid's height scale.
    pub fn from_labels(labels: &LabelGrid, grid: &ResponseGrid) -> Self {
        let width = labels.width();
        let height = labels.height();
        let scale = grid.height_scale();

        let mut height_px = Vec::with_capacity(width);
        let mut height_db = Vec::with_capacity(width);
        for col in 0..width {
            let first = (0..height)
                .find(|&row| labels.label(row, col) != 0)
                .unwrap_or(height);
            let px = height - first;
            height_px.push(px);
            height_db.push(scale[px]);
        }

        Self {
            height_px,
            height_db,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{label_components, prune_detached};
    use approx::assert_relative_eq;

    fn grid_5x4(zs: Vec<f64>) -> ResponseGrid {
        ResponseGrid::new(vec![0.0, 1.0, 2.0, 3.0], vec![1.0, 3.0, 5.0, 7.0, 9.0], zs, 11.0)
            .expect("valid grid")
    }

    #[test]
    fn heights_follow_the_first_labeled_row() {
        #[rustfmt::skip]
        let mask = vec![
            0, 0, 0, 0,
            0, 1, 0, 0,
            0, 1, 0, 0,
            0, 1, 1, 0,
            0, 1, 1, 0,
        ];
        let labels = prune_detached(label_components(&mask, 4, 5));
        let grid = grid_5x4(vec![0.0; 20]);
        let profile = HeightProfile::from_labels(&labels, &grid);

        assert_eq!(profile.height_px, vec![0, 4, 2, 0]);
        // Height scale for ys = [1,3,5,7,9], top_power = 11: [0,2,4,6,8,10].
        assert_relative_eq!(profile.height_db[1], 8.0);
        assert_relative_eq!(profile.height_db[2], 4.0);
        assert_relative_eq!(profile.height_db[0], 0.0);
    }

    #[test]
    fn zero_height_iff_column_has_no_label() {
        #[rustfmt::skip]
        let mask = vec![
            0, 1, 0, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
            0, 0, 0, 1,
            0, 0, 0, 1,
        ];
        let labels = prune_detached(label_components(&mask, 4, 5));
        let grid = grid_5x4(vec![0.0; 20]);
        let profile = HeightProfile::from_labels(&labels, &grid);

        for col in 0..4 {
            let has_label = (0..5).any(|row| labels.label(row, col) != 0);
            assert_eq!(profile.height_px[col] == 0, !has_label);
        }
        // The lone spike in column 1 was pruned, so its height is 0.
        assert_eq!(profile.height_px, vec![0, 0, 0, 2]);
    }
}
