//! Ordinary Least Squares regression solver.

use crate::core::{FitOptions, FitOptionsBuilder, RegressionResult};
use crate::inference::{CoefficientInference, TestDistribution};
use crate::solvers::traits::{FittedRegressor, RegressionError, Regressor};
use crate::utils::{invert_symmetric, mat_vec, xtx, xty};
use faer::{Col, Mat};
use log::debug;

/// Ordinary Least Squares regression estimator.
///
/// Solves the normal equations in closed form, β = (X'X)⁻¹X'y, on the
/// design matrix as given. Inference uses σ² = SSE / (n − k) and
/// Cov(β) = σ²(X'X)⁻¹ with Student-t p-values on n − k degrees of freedom.
///
/// Reported p-values carry a sign-dependent adjustment: for a negative
/// coefficient the two-sided p-value p is reported as 1 − p (see
/// [`CoefficientInference::flip_negative_p_values`]).
///
/// # Example
///
/// ```rust,ignore
/// use statmodel::solvers::{OlsRegressor, Regressor, FittedRegressor};
/// use faer::{Mat, Col};
///
/// let x = Mat::from_fn(100, 2, |i, j| if j == 0 { i as f64 } else { 1.0 });
/// let y = Col::from_fn(100, |i| 1.0 + 2.0 * i as f64);
///
/// let fitted = OlsRegressor::builder().build().fit(&x, &y)?;
/// println!("R² = {}", fitted.r_squared);
/// ```
#[derive(Debug, Clone)]
pub struct OlsRegressor {
    options: FitOptions,
}

impl OlsRegressor {
    /// Create a new OLS regressor with the given options.
    pub fn new(options: FitOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the regressor.
    pub fn builder() -> OlsRegressorBuilder {
        OlsRegressorBuilder::default()
    }
}

impl Default for OlsRegressor {
    fn default() -> Self {
        Self::new(FitOptions::default())
    }
}

impl Regressor for OlsRegressor {
    type Fitted = FittedOls;

    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError> {
        let n_samples = x.nrows();
        let n_params = x.ncols();

        if x.nrows() != y.nrows() {
            return Err(RegressionError::DimensionMismatch {
                x_rows: x.nrows(),
                y_len: y.nrows(),
            });
        }
        if n_params == 0 {
            return Err(RegressionError::EmptyDesign);
        }

        // Residual variance needs at least one residual degree of freedom
        if n_samples <= n_params {
            return Err(RegressionError::DegenerateDesign {
                observations: n_samples,
                parameters: n_params,
            });
        }

        debug!("OLS fit: n = {}, k = {}", n_samples, n_params);

        let xtx_inv = invert_symmetric(&xtx(x), self.options.rank_tolerance)?;
        let coefficients = mat_vec(&xtx_inv, &xty(x, y));

        let fitted_values = mat_vec(x, &coefficients);
        let residuals = Col::from_fn(n_samples, |i| y[i] - fitted_values[i]);
        let sse: f64 = residuals.iter().map(|&e| e * e).sum();

        let df = (n_samples - n_params) as f64;
        let sigma2 = sse / df;

        let covariance = Mat::from_fn(n_params, n_params, |i, j| sigma2 * xtx_inv[(i, j)]);
        let distribution = TestDistribution::StudentsT { df };

        let std_errors = CoefficientInference::standard_errors(&covariance);
        let test_statistics = CoefficientInference::test_statistics(&coefficients, &std_errors);
        let two_sided = CoefficientInference::p_values(&test_statistics, distribution);
        let p_values = CoefficientInference::flip_negative_p_values(&coefficients, &two_sided);
        let (ci_lower, ci_upper) = CoefficientInference::confidence_intervals(
            &coefficients,
            &std_errors,
            distribution,
            self.options.confidence_level,
        );

        // Goodness of fit
        let y_mean: f64 = y.iter().sum::<f64>() / n_samples as f64;
        let tss: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();
        let r_squared = if tss > 0.0 {
            1.0 - sse / tss
        } else if sse < 1e-10 {
            1.0
        } else {
            0.0
        };
        let df_total = (n_samples - 1) as f64;
        let adj_r_squared = 1.0 - (1.0 - r_squared) * df_total / df;

        // Gaussian log-likelihood at the ML variance SSE / n
        let n = n_samples as f64;
        let log_likelihood = if sse > 0.0 {
            -0.5 * n * (1.0 + (2.0 * std::f64::consts::PI).ln() + (sse / n).ln())
        } else {
            f64::NAN
        };

        let mut result = RegressionResult::empty(n_params, n_samples);
        result.coefficients = coefficients;
        result.covariance = covariance;
        result.fitted_values = fitted_values;
        result.residuals = residuals;
        result.std_errors = std_errors;
        result.test_statistics = test_statistics;
        result.p_values = p_values;
        result.distribution = distribution;
        result.conf_interval_lower = ci_lower;
        result.conf_interval_upper = ci_upper;
        result.confidence_level = self.options.confidence_level;
        result.log_likelihood = log_likelihood;
        result.set_information_criteria();

        Ok(FittedOls {
            result,
            sse,
            sigma2,
            r_squared,
            adj_r_squared,
            xtx_inverse: xtx_inv,
        })
    }
}

/// A fitted OLS regression model.
#[derive(Debug, Clone)]
pub struct FittedOls {
    result: RegressionResult,
    /// Sum of squared residuals.
    pub sse: f64,
    /// Residual variance SSE / (n − k).
    pub sigma2: f64,
    /// Coefficient of determination.
    pub r_squared: f64,
    /// Adjusted R².
    pub adj_r_squared: f64,
    xtx_inverse: Mat<f64>,
}

impl FittedOls {
    /// (X'X)⁻¹ from the fit.
    pub fn xtx_inverse(&self) -> &Mat<f64> {
        &self.xtx_inverse
    }

    /// Residual degrees of freedom.
    pub fn residual_df(&self) -> usize {
        self.result.residual_df()
    }
}

impl FittedRegressor for FittedOls {
    fn predict(&self, x: &Mat<f64>) -> Col<f64> {
        mat_vec(x, &self.result.coefficients)
    }

    fn result(&self) -> &RegressionResult {
        &self.result
    }
}

/// Builder for `OlsRegressor`.
#[derive(Debug, Clone, Default)]
pub struct OlsRegressorBuilder {
    builder: FitOptionsBuilder,
}

impl OlsRegressorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the confidence level for confidence intervals.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.builder = self.builder.confidence_level(level);
        self
    }

    /// Set the rank tolerance used when inverting X'X.
    pub fn rank_tolerance(mut self, tol: f64) -> Self {
        self.builder = self.builder.rank_tolerance(tol);
        self
    }

    /// Build the OLS regressor.
    pub fn build(self) -> OlsRegressor {
        // Optimizer settings are irrelevant here, so skip validation
        OlsRegressor::new(self.builder.build_unchecked())
    }
}
