//! End-to-end pipeline tests on small synthetic scans.

use approx::assert_relative_eq;
use qubit_spectra::{DetectError, TransitionDetector, TransitionDetectorParams};
use qubit_spectra_core::ResponseGrid;

fn params() -> TransitionDetectorParams {
    TransitionDetectorParams {
        sigma_plus: 2.0,
        sigma_minus: -2.0,
        f01_height_min: 1.0,
        f01_moment_thresholds: vec![1.0],
        f12_distance_min: 1,
        f12_distance_max: 10,
        f12_height_min: 1.0,
    }
}

/// 5x5 scan with one vertical feature in column 2 spanning rows 1..=4.
fn single_line_grid() -> ResponseGrid {
    let mut zs = vec![0.0; 25];
    for row in 1..5 {
        zs[row * 5 + 2] = 8.0;
    }
    ResponseGrid::new(
        vec![4.0, 4.1, 4.2, 4.3, 4.4],
        vec![1.0, 3.0, 5.0, 7.0, 9.0],
        zs,
        11.0,
    )
    .expect("valid grid")
}

#[test]
fn single_vertical_line_yields_f01_and_no_f12() {
    let detector = TransitionDetector::new(params()).expect("valid params");
    let detection = detector.detect(&single_line_grid()).expect("not degenerate");

    let f01 = detection.f01.expect("feature clears the height minimum");
    assert_eq!(f01.idx_x, 2);
    assert_eq!(f01.idx_y, 1);
    assert_relative_eq!(f01.frequency, 4.2);
    assert_eq!(f01.label, 1);
    // Raw amplitude 8 over rows 1..=4, levers [8,6,4,2], row widths all 2.
    assert_relative_eq!(f01.moment, 8.0 * 2.0 * (8.0 + 6.0 + 4.0 + 2.0));
    assert_eq!(f01.quality_level, 1);

    assert!(detection.f12.is_none());
}

#[test]
fn detect_is_deterministic_and_idempotent() {
    let detector = TransitionDetector::new(params()).expect("valid params");
    let grid = single_line_grid();

    let a = detector.detect(&grid).expect("not degenerate");
    let b = detector.detect(&grid).expect("not degenerate");

    assert_eq!(a.labels, b.labels);
    assert_eq!(a.f01, b.f01);
    assert_eq!(a.f12, b.f12);
}

#[test]
fn constant_scan_fails_only_at_detection_time() {
    let grid = ResponseGrid::new(
        vec![4.0, 4.1, 4.2],
        vec![1.0, 2.0],
        vec![3.0; 6],
        5.0,
    )
    .expect("a constant scan is a valid grid");

    let detector = TransitionDetector::new(params()).expect("valid params");
    let err = detector.detect(&grid).unwrap_err();
    assert!(matches!(err, DetectError::DegenerateResponse { .. }));
}

#[test]
fn two_features_yield_f01_and_f12() {
    // 8 columns x 5 rows. A full-height feature in column 6 (f01), a
    // three-row plateau over columns 2..=3 (f12), and a detached spike at
    // (0, 0) that must be pruned as noise.
    let width = 8;
    let mut zs = vec![0.0; width * 5];
    for row in 0..5 {
        zs[row * width + 6] = 30.0;
    }
    for row in 2..5 {
        zs[row * width + 2] = 20.0;
        zs[row * width + 3] = 20.0;
    }
    zs[2 * width + 3] = 21.0; // strongest plateau cell at the plateau row
    zs[0] = -25.0;

    let grid = ResponseGrid::new(
        vec![4.0, 4.1, 4.2, 4.3, 4.4, 4.5, 4.6, 4.7],
        vec![1.0, 3.0, 5.0, 7.0, 9.0],
        zs,
        11.0,
    )
    .expect("valid grid");

    let detector = TransitionDetector::new(TransitionDetectorParams {
        sigma_plus: 1.0,
        sigma_minus: -1.0,
        f01_height_min: 1.0,
        f01_moment_thresholds: vec![100.0, 2000.0],
        f12_distance_min: 1,
        f12_distance_max: 5,
        f12_height_min: 1.0,
    })
    .expect("valid params");

    let detection = detector.detect(&grid).expect("not degenerate");

    // The detached spike fired the negative threshold but was pruned; the
    // surviving components keep their raster-order ids (2 and 3, not 1).
    assert_eq!(detection.labels.label(0, 0), 0);
    assert_eq!(detection.labels.label(0, 6), 2);
    assert_eq!(detection.labels.label(2, 2), 3);

    let f01 = detection.f01.expect("f01 present");
    assert_eq!(f01.idx_x, 6);
    assert_eq!(f01.idx_y, 0);
    assert_relative_eq!(f01.frequency, 4.6);
    assert_eq!(f01.label, 2);
    assert_relative_eq!(f01.moment, 30.0 * 2.0 * (10.0 + 8.0 + 6.0 + 4.0 + 2.0));
    assert_eq!(f01.quality_level, 1);

    let f12 = detection.f12.expect("f12 present");
    assert_eq!(f12.idx_y, 2);
    assert_eq!(f12.idx_x, 3);
    assert_relative_eq!(f12.frequency, 4.3);
}
