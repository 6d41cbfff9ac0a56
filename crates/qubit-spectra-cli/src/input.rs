//! Scan and configuration file loading.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use qubit_spectra::TransitionDetectorParams;
use qubit_spectra_core::ResponseGrid;

use crate::CliError;

/// Detector configuration file: the detector parameters plus the reference
/// power that anchors the scan's power axis.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfFile {
    pub sigma_plus: f64,
    pub sigma_minus: f64,
    pub top_power: f64,
    pub f01_height_min: f64,
    pub f01_moment_thresholds: Vec<f64>,
    pub f12_distance_min: usize,
    pub f12_distance_max: usize,
    pub f12_height_min: f64,
}

impl ConfFile {
    pub fn detector_params(&self) -> TransitionDetectorParams {
        TransitionDetectorParams {
            sigma_plus: self.sigma_plus,
            sigma_minus: self.sigma_minus,
            f01_height_min: self.f01_height_min,
            f01_moment_thresholds: self.f01_moment_thresholds.clone(),
            f12_distance_min: self.f12_distance_min,
            f12_distance_max: self.f12_distance_max,
            f12_height_min: self.f12_height_min,
        }
    }
}

/// Figure-shaped scan file. The first trace carries the grid; unknown
/// styling fields are ignored.
#[derive(Debug, Deserialize)]
pub struct ScanFile {
    pub data: Vec<Trace>,
    #[serde(default)]
    pub layout: Layout,
}

#[derive(Debug, Deserialize)]
pub struct Trace {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<Vec<f64>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Layout {
    #[serde(default)]
    pub title: Title,
}

#[derive(Debug, Default, Deserialize)]
pub struct Title {
    #[serde(default)]
    pub text: String,
}

impl ScanFile {
    /// Qubit identifier: the last three characters of the figure title.
    pub fn qubit_id(&self) -> String {
        let text = &self.layout.title.text;
        let start = text
            .char_indices()
            .rev()
            .nth(2)
            .map(|(i, _)| i)
            .unwrap_or(0);
        text[start..].to_string()
    }

    /// Build a validated grid from the first trace.
    pub fn to_grid(&self, top_power: f64) -> Result<ResponseGrid, CliError> {
        let trace = self.data.first().ok_or(CliError::EmptyScan)?;
        Ok(ResponseGrid::from_rows(
            trace.x.clone(),
            trace.y.clone(),
            &trace.z,
            top_power,
        )?)
    }
}

pub fn load_conf(path: &Path) -> Result<ConfFile, CliError> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.into(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::Parse {
        path: path.into(),
        source,
    })
}

pub fn load_scan(path: &Path) -> Result<ScanFile, CliError> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.into(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::Parse {
        path: path.into(),
        source,
    })
}
