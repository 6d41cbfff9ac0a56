//! Machine-readable result record for batch operation.

use serde::Serialize;

use qubit_spectra::TransitionDetection;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "ERROR")]
    Error,
}

/// One line of batch output. Failed analyses keep the same shape with
/// `status = "ERROR"`, so downstream tooling parses both outcomes alike.
#[derive(Debug, Serialize)]
pub struct ResultRecord {
    pub f01_frequency: Option<f64>,
    pub f12_frequency: Option<f64>,
    pub quality_level: Option<usize>,
    pub status: Status,
    pub error: Option<String>,
}

impl ResultRecord {
    /// Record for a completed detection. A missing transition is a normal
    /// outcome: its frequency stays null and the quality level is 0.
    pub fn ok(detection: &TransitionDetection) -> Self {
        Self {
            f01_frequency: detection.f01.map(|f01| f01.frequency),
            f12_frequency: detection.f12.map(|f12| f12.frequency),
            quality_level: Some(detection.f01.map(|f01| f01.quality_level).unwrap_or(0)),
            status: Status::Ok,
            error: None,
        }
    }

    /// Record for a failed validation or detection.
    pub fn error(message: String) -> Self {
        Self {
            f01_frequency: None,
            f12_frequency: None,
            quality_level: None,
            status: Status::Error,
            error: Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_record_shape() {
        let record = ResultRecord::error("bad grid".to_string());
        let value = serde_json::to_value(&record).expect("serialize");
        assert_eq!(
            value,
            json!({
                "f01_frequency": null,
                "f12_frequency": null,
                "quality_level": null,
                "status": "ERROR",
                "error": "bad grid",
            })
        );
    }
}
