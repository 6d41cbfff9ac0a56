//! Transition-frequency extraction from a 2-D qubit spectroscopy scan.
//!
//! The detector consumes a validated [`ResponseGrid`](qubit_spectra_core::ResponseGrid)
//! (frequency axis x power axis x response amplitude) and extracts the
//! primary transition f01 with a discrete quality level, plus the secondary
//! transition f12 conditioned on f01's location. The pipeline is a fixed
//! sequence of pure stages:
//!
//! 1. global z-score standardization and double-threshold spike extraction,
//! 2. 4-connected component labeling with an edge-survival rule,
//! 3. a per-column height profile over the surviving components,
//! 4. run-based peak extraction over the profile,
//! 5. f01/f12 selection with stable tie-breaks and a moment-based quality
//!    bucket.
//!
//! Everything is deterministic: the same grid and parameters always produce
//! the same labels and transitions.
//!
//! ## Quickstart
//!
//! ```
//! use qubit_spectra::{TransitionDetector, TransitionDetectorParams};
//! use qubit_spectra_core::ResponseGrid;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut zs = vec![0.0; 25];
//! for row in 1..5 {
//!     zs[row * 5 + 2] = 8.0; // a vertical feature in column 2
//! }
//! let grid = ResponseGrid::new(
//!     vec![4.0, 4.1, 4.2, 4.3, 4.4],
//!     vec![1.0, 3.0, 5.0, 7.0, 9.0],
//!     zs,
//!     11.0,
//! )?;
//!
//! let detector = TransitionDetector::new(TransitionDetectorParams {
//!     sigma_plus: 2.0,
//!     sigma_minus: -2.0,
//!     f01_height_min: 1.0,
//!     f01_moment_thresholds: vec![1.0],
//!     f12_distance_min: 1,
//!     f12_distance_max: 10,
//!     f12_height_min: 1.0,
//! })?;
//!
//! let detection = detector.detect(&grid)?;
//! let f01 = detection.f01.expect("feature clears the height minimum");
//! assert_eq!(f01.idx_x, 2);
//! # Ok(())
//! # }
//! ```

mod components;
mod error;
mod params;
mod peaks;
mod pipeline;
mod profile;
mod result;
mod select;
mod standardize;

pub use components::{label_components, prune_detached, LabelGrid};
pub use error::DetectError;
pub use params::{ParamsError, TransitionDetectorParams};
pub use peaks::{find_peaks, Peak};
pub use pipeline::TransitionDetector;
pub use profile::HeightProfile;
pub use result::{F01Transition, F12Transition, TransitionDetection};
pub use select::{component_moment, quality_bucket, select_f01, select_f12};
pub use standardize::{binarize, standardize};
