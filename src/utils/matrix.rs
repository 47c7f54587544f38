//! Matrix utility functions.

use crate::solvers::RegressionError;
use faer::{Col, Mat};

/// Compute X'X.
pub fn xtx(x: &Mat<f64>) -> Mat<f64> {
    x.transpose() * x
}

/// Compute X'y.
pub fn xty(x: &Mat<f64>, y: &Col<f64>) -> Col<f64> {
    x.transpose() * y
}

/// Compute the matrix-vector product A·v.
pub fn mat_vec(a: &Mat<f64>, v: &Col<f64>) -> Col<f64> {
    a * v
}

/// Invert a symmetric positive semi-definite matrix such as X'X.
///
/// The matrix is first scaled to unit diagonal, D·A·D with
/// D = diag(1/√a_ii), so the rank test only sees column correlation and
/// not column scale. The scaled matrix is inverted by QR and
/// back-substitution against Q', and is rejected as singular when any
/// diagonal entry of R is below `rank_tolerance` times the largest one.
/// The inverse is unscaled, A⁻¹ = D·(DAD)⁻¹·D, and symmetrized.
pub fn invert_symmetric(a: &Mat<f64>, rank_tolerance: f64) -> Result<Mat<f64>, RegressionError> {
    let n = a.nrows();
    if n == 0 || a.ncols() != n {
        return Err(RegressionError::SingularMatrix);
    }

    // A zero column of X gives a zero diagonal entry
    let mut scale = vec![0.0; n];
    for i in 0..n {
        let d = a[(i, i)];
        if !(d.is_finite() && d > 0.0) {
            return Err(RegressionError::SingularMatrix);
        }
        scale[i] = 1.0 / d.sqrt();
    }
    let scaled = Mat::from_fn(n, n, |i, j| scale[i] * a[(i, j)] * scale[j]);

    let qr = scaled.qr();
    let q = qr.compute_Q();
    let r = qr.R();

    let max_diag = (0..n).map(|i| r[(i, i)].abs()).fold(0.0_f64, f64::max);
    if !max_diag.is_finite() || max_diag == 0.0 {
        return Err(RegressionError::SingularMatrix);
    }
    for i in 0..n {
        if r[(i, i)].abs() <= rank_tolerance * max_diag {
            return Err(RegressionError::SingularMatrix);
        }
    }

    // Solve R * X = Q' for each column of identity to get inverse
    let mut inv: Mat<f64> = Mat::zeros(n, n);
    let qt = q.transpose();

    for col in 0..n {
        for i in (0..n).rev() {
            let mut sum = qt[(i, col)];
            for j in (i + 1)..n {
                sum -= r[(i, j)] * inv[(j, col)];
            }
            inv[(i, col)] = sum / r[(i, i)];
        }
    }

    Ok(Mat::from_fn(n, n, |i, j| {
        0.5 * scale[i] * (inv[(i, j)] + inv[(j, i)]) * scale[j]
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xtx_and_xty() {
        let x = Mat::from_fn(3, 2, |i, j| (i + 2 * j) as f64);
        let y = Col::from_fn(3, |i| (i + 1) as f64);

        let g = xtx(&x);
        // columns: [0, 1, 2] and [2, 3, 4]
        assert!((g[(0, 0)] - 5.0).abs() < 1e-12);
        assert!((g[(0, 1)] - 11.0).abs() < 1e-12);
        assert!((g[(1, 0)] - 11.0).abs() < 1e-12);
        assert!((g[(1, 1)] - 29.0).abs() < 1e-12);

        let v = xty(&x, &y);
        assert!((v[0] - 8.0).abs() < 1e-12);
        assert!((v[1] - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_mat_vec() {
        let a = Mat::from_fn(2, 3, |i, j| (i * 3 + j) as f64);
        let v = Col::from_fn(3, |j| (j + 1) as f64);
        let out = mat_vec(&a, &v);
        assert!((out[0] - 8.0).abs() < 1e-12);
        assert!((out[1] - 26.0).abs() < 1e-12);
    }

    #[test]
    fn test_invert_symmetric() {
        let mut a = Mat::zeros(2, 2);
        a[(0, 0)] = 4.0;
        a[(0, 1)] = 2.0;
        a[(1, 0)] = 2.0;
        a[(1, 1)] = 3.0;

        let inv = invert_symmetric(&a, 1e-10).unwrap();
        // det = 8
        assert!((inv[(0, 0)] - 3.0 / 8.0).abs() < 1e-12);
        assert!((inv[(0, 1)] + 2.0 / 8.0).abs() < 1e-12);
        assert!((inv[(1, 0)] + 2.0 / 8.0).abs() < 1e-12);
        assert!((inv[(1, 1)] - 4.0 / 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_invert_singular() {
        // Second column is twice the first
        let x = Mat::from_fn(5, 2, |i, j| (i as f64 + 1.0) * (j as f64 + 1.0));
        let result = invert_symmetric(&xtx(&x), 1e-10);
        assert!(matches!(result, Err(RegressionError::SingularMatrix)));
    }

    #[test]
    fn test_invert_zero_matrix() {
        let a = Mat::<f64>::zeros(2, 2);
        assert!(matches!(
            invert_symmetric(&a, 1e-10),
            Err(RegressionError::SingularMatrix)
        ));
    }

    #[test]
    fn test_invert_badly_scaled_columns() {
        // Columns on the scale of 1e5, 1e1 and 1: X'X spans ten orders of
        // magnitude but the columns are far from collinear
        let x = Mat::from_fn(30, 3, |i, j| match j {
            0 => 50_000.0 + 1_000.0 * ((i * 7) % 11) as f64,
            1 => 20.0 + ((i * 5) % 13) as f64,
            _ => 1.0,
        });
        let g = xtx(&x);
        let inv = invert_symmetric(&g, 1e-10).expect("well-posed design");

        let product = &g * &inv;
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (product[(i, j)] - expected).abs() < 1e-6,
                    "(X'X)(X'X)^-1 at ({}, {}) = {}",
                    i,
                    j,
                    product[(i, j)]
                );
            }
        }
    }

    #[test]
    fn test_invert_zero_column() {
        let x = Mat::from_fn(5, 2, |i, j| if j == 0 { i as f64 + 1.0 } else { 0.0 });
        assert!(matches!(
            invert_symmetric(&xtx(&x), 1e-10),
            Err(RegressionError::SingularMatrix)
        ));
    }
}
