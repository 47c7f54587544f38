//! Logistic regression solver.
//!
//! Coefficients are the maximum-likelihood estimate under a Bernoulli model
//! with logistic link, found by handing the negative log-likelihood to a
//! [`Minimizer`] starting from β = 0.
//!
//! # Covariance
//!
//! The reported covariance is a deliberately coarse approximation,
//!
//! Cov(β) ≈ v · (X'X)⁻¹ with v = n · p̄ · (1 − p̄)
//!
//! where p̄ is the mean fitted probability. This is not the inverse Fisher
//! information (X'WX)⁻¹ with W = diag(p̂_i(1 − p̂_i)); standard errors,
//! z-statistics and p-values all inherit the approximation.
//!
//! # Example
//!
//! ```rust,ignore
//! use statmodel::solvers::{LogisticRegressor, Regressor, FittedRegressor};
//! use faer::{Mat, Col};
//!
//! let x = Mat::from_fn(100, 2, |i, j| if j == 0 { (i as f64 - 50.0) * 0.1 } else { 1.0 });
//! let y = Col::from_fn(100, |i| if i % 3 == 0 || i > 60 { 1.0 } else { 0.0 });
//!
//! let fitted = LogisticRegressor::builder().build().fit(&x, &y)?;
//! let probs = fitted.predict(&x);
//! ```

use crate::core::likelihood::{linear_predictor, sigmoid};
use crate::core::{BernoulliLikelihood, FitOptions, FitOptionsBuilder, RegressionResult};
use crate::inference::{CoefficientInference, TestDistribution};
use crate::optimize::{LbfgsMinimizer, Minimizer};
use crate::solvers::traits::{FittedRegressor, RegressionError, Regressor};
use crate::utils::{invert_symmetric, xtx};
use faer::{Col, Mat};
use log::{debug, warn};

/// Logistic regression estimator, generic over the minimizer.
#[derive(Debug, Clone)]
pub struct LogisticRegressor<M = LbfgsMinimizer> {
    options: FitOptions,
    minimizer: M,
}

impl LogisticRegressor<LbfgsMinimizer> {
    /// Create a regressor using L-BFGS configured from `options`.
    pub fn new(options: FitOptions) -> Self {
        let minimizer = LbfgsMinimizer::from_options(&options);
        Self { options, minimizer }
    }

    /// Create a builder for configuring the regressor.
    pub fn builder() -> LogisticRegressorBuilder {
        LogisticRegressorBuilder::default()
    }
}

impl Default for LogisticRegressor<LbfgsMinimizer> {
    fn default() -> Self {
        Self::new(FitOptions::default())
    }
}

impl<M: Minimizer> LogisticRegressor<M> {
    /// Swap in a different minimizer, keeping the options.
    pub fn with_minimizer<N: Minimizer>(self, minimizer: N) -> LogisticRegressor<N> {
        LogisticRegressor {
            options: self.options,
            minimizer,
        }
    }

    pub fn options(&self) -> &FitOptions {
        &self.options
    }

    pub fn minimizer(&self) -> &M {
        &self.minimizer
    }

    fn validate(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<(), RegressionError> {
        let n_samples = x.nrows();
        let n_params = x.ncols();

        if n_samples != y.nrows() {
            return Err(RegressionError::DimensionMismatch {
                x_rows: n_samples,
                y_len: y.nrows(),
            });
        }
        if n_params == 0 {
            return Err(RegressionError::EmptyDesign);
        }
        if n_samples <= n_params {
            return Err(RegressionError::DegenerateDesign {
                observations: n_samples,
                parameters: n_params,
            });
        }

        if self.options.check_binary_response {
            for i in 0..n_samples {
                if y[i] != 0.0 && y[i] != 1.0 {
                    return Err(RegressionError::NonBinaryResponse {
                        index: i,
                        value: y[i],
                    });
                }
            }
        }

        Ok(())
    }
}

impl<M: Minimizer> Regressor for LogisticRegressor<M> {
    type Fitted = FittedLogistic;

    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError> {
        self.validate(x, y)?;

        let n_samples = x.nrows();
        let n_params = x.ncols();
        debug!("logit fit: n = {}, k = {}", n_samples, n_params);

        // Fail fast on a rank-deficient design before running the optimizer
        let xtx_inv = invert_symmetric(&xtx(x), self.options.rank_tolerance)?;

        let likelihood = BernoulliLikelihood::new(x.clone(), y.clone());
        let x0 = vec![0.0; n_params];
        let outcome = self.minimizer.minimize(&likelihood, &x0)?;

        if !outcome.success {
            warn!(
                "logit optimizer did not converge after {} iterations: {}",
                outcome.iterations, outcome.message
            );
            return Err(RegressionError::OptimizationFailure {
                iterations: outcome.iterations,
                message: outcome.message,
            });
        }
        if outcome.x.len() != n_params {
            return Err(RegressionError::OptimizationFailure {
                iterations: outcome.iterations,
                message: format!(
                    "minimizer returned {} parameters, expected {}",
                    outcome.x.len(),
                    n_params
                ),
            });
        }

        let coefficients = Col::from_fn(n_params, |j| outcome.x[j]);
        let eta = linear_predictor(x, &outcome.x);
        let probabilities = Col::from_fn(n_samples, |i| sigmoid(eta[i]));

        let n = n_samples as f64;
        let p_bar = probabilities.iter().sum::<f64>() / n;
        let variance_scale = n * p_bar * (1.0 - p_bar);

        let covariance = Mat::from_fn(n_params, n_params, |i, j| variance_scale * xtx_inv[(i, j)]);
        let distribution = TestDistribution::Normal;

        let std_errors = CoefficientInference::standard_errors(&covariance);
        let test_statistics = CoefficientInference::test_statistics(&coefficients, &std_errors);
        let p_values = CoefficientInference::p_values(&test_statistics, distribution);
        let (ci_lower, ci_upper) = CoefficientInference::confidence_intervals(
            &coefficients,
            &std_errors,
            distribution,
            self.options.confidence_level,
        );

        let log_likelihood = likelihood.log_likelihood(&outcome.x);
        let null_log_likelihood = likelihood.null_log_likelihood();
        let pseudo_r_squared = if null_log_likelihood < 0.0 {
            1.0 - log_likelihood / null_log_likelihood
        } else {
            f64::NAN
        };

        let residuals = Col::from_fn(n_samples, |i| y[i] - probabilities[i]);

        let mut result = RegressionResult::empty(n_params, n_samples);
        result.coefficients = coefficients;
        result.covariance = covariance;
        result.fitted_values = probabilities;
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

        Ok(FittedLogistic {
            result,
            null_log_likelihood,
            pseudo_r_squared,
            variance_scale,
            iterations: outcome.iterations,
            message: outcome.message,
        })
    }
}

/// A fitted logistic regression model.
#[derive(Debug, Clone)]
pub struct FittedLogistic {
    result: RegressionResult,
    /// Log-likelihood of the intercept-only model.
    pub null_log_likelihood: f64,
    /// McFadden's pseudo-R², 1 − ℓ / ℓ₀.
    pub pseudo_r_squared: f64,
    /// The scalar n · p̄ · (1 − p̄) multiplying (X'X)⁻¹.
    pub variance_scale: f64,
    /// Optimizer iterations.
    pub iterations: u64,
    /// Optimizer termination message.
    pub message: String,
}

impl FittedLogistic {
    /// Fitted probabilities on the training data.
    pub fn probabilities(&self) -> &Col<f64> {
        &self.result.fitted_values
    }

    /// Log-odds Xβ for new data.
    pub fn predict_linear(&self, x: &Mat<f64>) -> Col<f64> {
        let beta: Vec<f64> = self.result.coefficients.iter().copied().collect();
        linear_predictor(x, &beta)
    }
}

impl FittedRegressor for FittedLogistic {
    /// Predicted probabilities for new data.
    fn predict(&self, x: &Mat<f64>) -> Col<f64> {
        let eta = self.predict_linear(x);
        Col::from_fn(eta.nrows(), |i| sigmoid(eta[i]))
    }

    fn result(&self) -> &RegressionResult {
        &self.result
    }
}

/// Builder for `LogisticRegressor`.
#[derive(Debug, Clone, Default)]
pub struct LogisticRegressorBuilder {
    builder: FitOptionsBuilder,
}

impl LogisticRegressorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the optimizer iteration cap.
    pub fn max_iterations(mut self, max_iter: usize) -> Self {
        self.builder = self.builder.max_iterations(max_iter);
        self
    }

    /// Set the optimizer gradient tolerance.
    pub fn tolerance(mut self, tol: f64) -> Self {
        self.builder = self.builder.tolerance(tol);
        self
    }

    /// Set whether responses must be 0 or 1.
    pub fn check_binary_response(mut self, check: bool) -> Self {
        self.builder = self.builder.check_binary_response(check);
        self
    }

    /// Set the confidence level for confidence intervals.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.builder = self.builder.confidence_level(level);
        self
    }

    /// Build the logistic regressor without validating the options.
    pub fn build(self) -> LogisticRegressor {
        LogisticRegressor::new(self.builder.build_unchecked())
    }

    /// Build the logistic regressor, validating the options.
    pub fn try_build(self) -> Result<LogisticRegressor, RegressionError> {
        Ok(LogisticRegressor::new(self.builder.build()?))
    }
}
