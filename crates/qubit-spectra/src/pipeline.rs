//! The detection pipeline, stage by stage.

use log::debug;
use qubit_spectra_core::ResponseGrid;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::components::{label_components, prune_detached};
use crate::error::DetectError;
use crate::params::{ParamsError, TransitionDetectorParams};
use crate::peaks::find_peaks;
use crate::profile::HeightProfile;
use crate::result::TransitionDetection;
use crate::select::{select_f01, select_f12};
use crate::standardize::{binarize, standardize};

/// Transition detector over single spectroscopy scans.
///
/// Parameters are validated once at construction. `detect` is pure: it
/// derives everything from the immutable grid in one eager pass, so
/// repeated calls on the same grid return identical results.
pub struct TransitionDetector {
    params: TransitionDetectorParams,
}

impl TransitionDetector {
    /// Validate the parameters and build a detector.
    pub fn new(params: TransitionDetectorParams) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Detector parameters.
    #[inline]
    pub fn params(&self) -> &TransitionDetectorParams {
        &self.params
    }

    /// Run the full pipeline on one scan.
    ///
    /// Stages consume each other's outputs strictly in order: standardize,
    /// binarize, label and filter components, build the height profile,
    /// extract peaks, then select f01 and (conditioned on it) f12.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, grid), fields(num_freqs = grid.num_freqs(), num_powers = grid.num_powers()))
    )]
    pub fn detect(&self, grid: &ResponseGrid) -> Result<TransitionDetection, DetectError> {
        let standardized = standardize(grid.zs())?;
        let mask = binarize(&standardized, self.params.sigma_plus, self.params.sigma_minus);
        let labels = prune_detached(label_components(
            &mask,
            grid.num_freqs(),
            grid.num_powers(),
        ));

        let profile = HeightProfile::from_labels(&labels, grid);
        let peaks = find_peaks(&profile);
        debug!("height profile has {} peaks", peaks.len());

        let f01 = select_f01(grid, &labels, &profile, &self.params);
        match &f01 {
            Some(f01) => debug!(
                "f01 at {:.6} (label {}, moment {:.3}, quality {})",
                f01.frequency, f01.label, f01.moment, f01.quality_level
            ),
            None => debug!("no feature clears f01_height_min"),
        }

        let f12 = f01
            .as_ref()
            .and_then(|f01| select_f12(grid, &peaks, f01, &self.params));
        if let Some(f12) = &f12 {
            debug!("f12 at {:.6}", f12.frequency);
        }

        Ok(TransitionDetection { labels, f01, f12 })
    }
}
