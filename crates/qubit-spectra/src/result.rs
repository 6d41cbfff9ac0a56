use serde::Serialize;

use crate::components::LabelGrid;

/// Primary transition extracted from a scan.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct F01Transition {
    /// Frequency-axis index of the selected column.
    pub idx_x: usize,
    /// Power-axis index of the feature's topmost row.
    pub idx_y: usize,
    /// Transition frequency, `xs[idx_x]`.
    pub frequency: f64,
    /// Id of the labeled component the transition belongs to.
    pub label: u32,
    /// Magnitude- and position-weighted integral over the component.
    pub moment: f64,
    /// Discrete quality bucket derived from the moment.
    pub quality_level: usize,
}

/// Secondary transition, conditioned on the primary one.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct F12Transition {
    pub idx_x: usize,
    pub idx_y: usize,
    /// Transition frequency, `xs[idx_x]`.
    pub frequency: f64,
}

/// Everything the detector derives from one scan. "Not found" is a normal
/// outcome for either transition, distinct from any error.
#[derive(Clone, Debug)]
pub struct TransitionDetection {
    /// Filtered component labels over the scan, 0 for background.
    pub labels: LabelGrid,
    pub f01: Option<F01Transition>,
    pub f12: Option<F12Transition>,
}
