use serde::{Deserialize, Serialize};

/// Parameter validation errors.
#[derive(thiserror::Error, Debug)]
pub enum ParamsError {
    #[error("sigma_plus must be positive")]
    SigmaPlusNotPositive,
    #[error("sigma_minus must be negative")]
    SigmaMinusNotNegative,
    #[error("f01_height_min must be > 0")]
    F01HeightMinNotPositive,
    #[error("f01_moment_thresholds must be non-empty, finite and strictly increasing")]
    BadMomentThresholds,
    #[error("f12 distance window is inverted ({min}..{max})")]
    F12DistanceInverted { min: usize, max: usize },
    #[error("f12_height_min must be > 0")]
    F12HeightMinNotPositive,
}

/// Thresholds and selection windows for the transition detector.
///
/// All values are validated once, before the detector is built; an invalid
/// set of parameters never reaches the pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransitionDetectorParams {
    /// Upper binarization threshold, in standard deviations (> 0).
    pub sigma_plus: f64,
    /// Lower binarization threshold, in standard deviations (< 0).
    pub sigma_minus: f64,
    /// Minimal physical height (power units) for f01 to count as found.
    pub f01_height_min: f64,
    /// Strictly increasing moment thresholds separating f01 quality buckets.
    pub f01_moment_thresholds: Vec<f64>,
    /// Smallest allowed gap, in columns, between a candidate peak's end and
    /// the f01 column.
    pub f12_distance_min: usize,
    /// Largest allowed gap, in columns, between a candidate peak's end and
    /// the f01 column.
    pub f12_distance_max: usize,
    /// Minimal physical peak height (power units) for an f12 candidate.
    pub f12_height_min: f64,
}

impl TransitionDetectorParams {
    /// Check every invariant; the detector constructor calls this once.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !(self.sigma_plus > 0.0) {
            return Err(ParamsError::SigmaPlusNotPositive);
        }
        if !(self.sigma_minus < 0.0) {
            return Err(ParamsError::SigmaMinusNotNegative);
        }
        if !(self.f01_height_min > 0.0) {
            return Err(ParamsError::F01HeightMinNotPositive);
        }
        let t = &self.f01_moment_thresholds;
        if t.is_empty()
            || t.iter().any(|v| !v.is_finite())
            || t.windows(2).any(|w| w[1] <= w[0])
        {
            return Err(ParamsError::BadMomentThresholds);
        }
        if self.f12_distance_min > self.f12_distance_max {
            return Err(ParamsError::F12DistanceInverted {
                min: self.f12_distance_min,
                max: self.f12_distance_max,
            });
        }
        if !(self.f12_height_min > 0.0) {
            return Err(ParamsError::F12HeightMinNotPositive);
        }
        Ok(())
    }
}
