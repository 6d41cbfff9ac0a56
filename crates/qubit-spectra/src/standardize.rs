//! Global z-score standardization and double-threshold spike extraction.

use crate::error::DetectError;

/// Standard deviations below this carry no usable signal.
const DEGENERATE_STD: f64 = 1e-12;

/// Z-score the response buffer against its global mean and population
/// standard deviation.
pub fn standardize(zs: &[f64]) -> Result<Vec<f64>, DetectError> {
    let n = zs.len() as f64;
    let mean = zs.iter().sum::<f64>() / n;
    let var = zs.iter().map(|z| (z - mean) * (z - mean)).sum::<f64>() / n;
    let std = var.sqrt();
    if std < DEGENERATE_STD {
        return Err(DetectError::DegenerateResponse { std });
    }
    Ok(zs.iter().map(|z| (z - mean) / std).collect())
}

/// Mark samples beyond either threshold. With `sigma_plus > 0 > sigma_minus`
/// this fires only on extreme excursions, never on in-band noise.
pub fn binarize(zs: &[f64], sigma_plus: f64, sigma_minus: f64) -> Vec<u8> {
    zs.iter()
        .map(|&z| u8::from(z > sigma_plus || z < sigma_minus))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn standardized_buffer_has_zero_mean_unit_std() {
        let zs = vec![1.0, 2.0, 3.0, 4.0, 10.0];
        let out = standardize(&zs).expect("not degenerate");

        let mean = out.iter().sum::<f64>() / out.len() as f64;
        let var = out.iter().map(|z| (z - mean) * (z - mean)).sum::<f64>() / out.len() as f64;
        assert_relative_eq!(mean, 0.0, epsilon = 1e-12);
        assert_relative_eq!(var, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn standardize_is_invariant_to_positive_affine_rescale() {
        let zs = vec![0.0, 1.0, 0.0, 5.0, -2.0, 0.5];
        let rescaled: Vec<f64> = zs.iter().map(|z| 3.5 * z - 7.0).collect();

        let a = standardize(&zs).expect("not degenerate");
        let b = standardize(&rescaled).expect("not degenerate");
        for (x, y) in a.iter().zip(&b) {
            assert_relative_eq!(x, y, epsilon = 1e-12);
        }
    }

    #[test]
    fn constant_buffer_is_degenerate() {
        let err = standardize(&[2.5; 16]).unwrap_err();
        assert!(matches!(
            err,
            crate::DetectError::DegenerateResponse { .. }
        ));
    }

    #[test]
    fn binarize_fires_on_both_tails_only() {
        let z = vec![0.0, 2.1, -2.1, 1.9, -1.9, 5.0];
        assert_eq!(binarize(&z, 2.0, -2.0), vec![0, 1, 1, 0, 0, 1]);
    }

    #[test]
    fn binarize_commutes_with_positive_scaling() {
        let z = vec![0.5, 3.0, -2.5, 1.0, -1.9];
        let scaled: Vec<f64> = z.iter().map(|v| 2.0 * v).collect();
        assert_eq!(binarize(&z, 2.0, -2.0), binarize(&scaled, 4.0, -4.0));
    }

    #[test]
    fn binarize_thresholds_are_exclusive() {
        let z = vec![2.0, -2.0];
        assert_eq!(binarize(&z, 2.0, -2.0), vec![0, 0]);
    }
}
