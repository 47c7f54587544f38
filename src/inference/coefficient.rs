//! Coefficient inference calculations.

use faer::{Col, Mat};
use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

/// Reference distribution for coefficient test statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TestDistribution {
    /// Student-t with the given degrees of freedom.
    StudentsT { df: f64 },
    /// Standard normal.
    Normal,
}

impl TestDistribution {
    /// CDF at `x`, or NaN when the distribution cannot be constructed.
    pub fn cdf(&self, x: f64) -> f64 {
        match *self {
            TestDistribution::StudentsT { df } => {
                if df <= 0.0 {
                    return f64::NAN;
                }
                StudentsT::new(0.0, 1.0, df).map_or(f64::NAN, |d| d.cdf(x))
            }
            TestDistribution::Normal => Normal::new(0.0, 1.0).map_or(f64::NAN, |d| d.cdf(x)),
        }
    }

    /// Quantile at probability `p`.
    pub fn inverse_cdf(&self, p: f64) -> f64 {
        match *self {
            TestDistribution::StudentsT { df } => {
                if df <= 0.0 {
                    return f64::NAN;
                }
                StudentsT::new(0.0, 1.0, df).map_or(f64::NAN, |d| d.inverse_cdf(p))
            }
            TestDistribution::Normal => {
                Normal::new(0.0, 1.0).map_or(f64::NAN, |d| d.inverse_cdf(p))
            }
        }
    }
}

/// Computes inference statistics for regression coefficients.
pub struct CoefficientInference;

impl CoefficientInference {
    /// Standard errors from a covariance matrix.
    ///
    /// SE(β_j) = sqrt(Cov_jj). Negative variances yield NaN.
    pub fn standard_errors(covariance: &Mat<f64>) -> Col<f64> {
        Col::from_fn(covariance.nrows(), |j| {
            let var = covariance[(j, j)];
            if var >= 0.0 {
                var.sqrt()
            } else {
                log::warn!("negative variance {} for coefficient {}", var, j);
                f64::NAN
            }
        })
    }

    /// Compute test statistics for coefficients.
    ///
    /// t_j = β_j / SE(β_j)
    pub fn test_statistics(coefficients: &Col<f64>, std_errors: &Col<f64>) -> Col<f64> {
        Col::from_fn(coefficients.nrows(), |j| {
            if std_errors[j].is_nan() || std_errors[j] == 0.0 {
                f64::NAN
            } else {
                coefficients[j] / std_errors[j]
            }
        })
    }

    /// Two-sided p-value of a single statistic.
    ///
    /// p = 2 * (1 - F(|t|))
    pub fn p_value(statistic: f64, distribution: TestDistribution) -> f64 {
        if statistic.is_nan() {
            return f64::NAN;
        }
        2.0 * (1.0 - distribution.cdf(statistic.abs()))
    }

    /// Two-sided p-values for every statistic.
    pub fn p_values(statistics: &Col<f64>, distribution: TestDistribution) -> Col<f64> {
        Col::from_fn(statistics.nrows(), |j| {
            Self::p_value(statistics[j], distribution)
        })
    }

    /// Replace p with 1 - p wherever the coefficient is negative.
    ///
    /// This is the adjustment the OLS estimator reports. It is not a
    /// symmetric two-sided test: mirror-image estimates get different
    /// p-values. The result stays in [0, 1], so no clamping is applied.
    pub fn flip_negative_p_values(coefficients: &Col<f64>, p_values: &Col<f64>) -> Col<f64> {
        Col::from_fn(p_values.nrows(), |j| {
            if coefficients[j] < 0.0 {
                1.0 - p_values[j]
            } else {
                p_values[j]
            }
        })
    }

    /// Compute confidence intervals for coefficients.
    ///
    /// CI_j = β_j ± q_{1-α/2} * SE(β_j)
    pub fn confidence_intervals(
        coefficients: &Col<f64>,
        std_errors: &Col<f64>,
        distribution: TestDistribution,
        confidence_level: f64,
    ) -> (Col<f64>, Col<f64>) {
        let alpha = 1.0 - confidence_level;
        let crit = distribution.inverse_cdf(1.0 - alpha / 2.0);

        let lower = Col::from_fn(coefficients.nrows(), |j| {
            coefficients[j] - crit * std_errors[j]
        });
        let upper = Col::from_fn(coefficients.nrows(), |j| {
            coefficients[j] + crit * std_errors[j]
        });

        (lower, upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_errors_from_diagonal() {
        let mut cov = Mat::zeros(3, 3);
        cov[(0, 0)] = 4.0;
        cov[(1, 1)] = 0.25;
        cov[(2, 2)] = -1.0;
        cov[(0, 1)] = 100.0;

        let se = CoefficientInference::standard_errors(&cov);
        assert!((se[0] - 2.0).abs() < 1e-12);
        assert!((se[1] - 0.5).abs() < 1e-12);
        assert!(se[2].is_nan());
    }

    #[test]
    fn test_test_statistics() {
        let coefficients = Col::from_fn(3, |i| (i + 1) as f64);
        let std_errors = Col::from_fn(3, |i| if i == 2 { 0.0 } else { 0.5 });

        let stats = CoefficientInference::test_statistics(&coefficients, &std_errors);

        assert!((stats[0] - 2.0).abs() < 1e-10);
        assert!((stats[1] - 4.0).abs() < 1e-10);
        assert!(stats[2].is_nan());
    }

    #[test]
    fn test_normal_p_value_known() {
        let p = CoefficientInference::p_value(1.959963984540054, TestDistribution::Normal);
        assert!((p - 0.05).abs() < 1e-6);

        let p0 = CoefficientInference::p_value(0.0, TestDistribution::Normal);
        assert!((p0 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_students_t_p_value_known() {
        // t_{0.975, 10} = 2.228139
        let p = CoefficientInference::p_value(2.228139, TestDistribution::StudentsT { df: 10.0 });
        assert!((p - 0.05).abs() < 1e-5);
    }

    #[test]
    fn test_p_values_symmetric_in_sign() {
        let stats = Col::from_fn(2, |i| if i == 0 { 1.7 } else { -1.7 });
        let p = CoefficientInference::p_values(&stats, TestDistribution::StudentsT { df: 5.0 });
        assert!((p[0] - p[1]).abs() < 1e-15);
        assert!(p[0] > 0.0 && p[0] < 1.0);
    }

    #[test]
    fn test_invalid_df_gives_nan() {
        let p = CoefficientInference::p_value(1.0, TestDistribution::StudentsT { df: 0.0 });
        assert!(p.is_nan());
    }

    #[test]
    fn test_flip_negative_p_values() {
        let coefficients = Col::from_fn(3, |i| [1.0, -1.0, 0.0][i]);
        let p = Col::from_fn(3, |_| 0.2);

        let adjusted = CoefficientInference::flip_negative_p_values(&coefficients, &p);
        assert!((adjusted[0] - 0.2).abs() < 1e-15);
        assert!((adjusted[1] - 0.8).abs() < 1e-15);
        assert!((adjusted[2] - 0.2).abs() < 1e-15);
    }

    #[test]
    fn test_confidence_intervals_normal() {
        let coefficients = Col::from_fn(1, |_| 1.0);
        let std_errors = Col::from_fn(1, |_| 0.5);

        let (lower, upper) = CoefficientInference::confidence_intervals(
            &coefficients,
            &std_errors,
            TestDistribution::Normal,
            0.95,
        );
        assert!((lower[0] - (1.0 - 1.959964 * 0.5)).abs() < 1e-5);
        assert!((upper[0] - (1.0 + 1.959964 * 0.5)).abs() < 1e-5);
    }
}
