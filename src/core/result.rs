//! Regression result structures.

use crate::core::RegressionType;
use crate::inference::TestDistribution;
use faer::{Col, Mat};

/// Numeric result of a single estimator run, in design-matrix column order.
#[derive(Debug, Clone)]
pub struct RegressionResult {
    // ========== Core Results ==========
    /// Estimated coefficients, one per design-matrix column.
    pub coefficients: Col<f64>,

    /// Coefficient covariance matrix (k × k).
    pub covariance: Mat<f64>,

    /// Fitted values on the response scale (probabilities for logit).
    pub fitted_values: Col<f64>,

    /// Response residuals (y - fitted_values).
    pub residuals: Col<f64>,

    /// Number of observations.
    pub n_observations: usize,

    /// Number of estimated parameters (design-matrix columns).
    pub n_parameters: usize,

    // ========== Inference Statistics ==========
    /// Standard errors of coefficients.
    pub std_errors: Col<f64>,

    /// t- or z-statistics, depending on `distribution`.
    pub test_statistics: Col<f64>,

    /// Reported p-values.
    pub p_values: Col<f64>,

    /// Reference distribution of the test statistics.
    pub distribution: TestDistribution,

    /// Lower bounds of confidence intervals.
    pub conf_interval_lower: Col<f64>,

    /// Upper bounds of confidence intervals.
    pub conf_interval_upper: Col<f64>,

    /// Confidence level used for intervals.
    pub confidence_level: f64,

    // ========== Fit Statistics ==========
    /// Log-likelihood at the estimate.
    pub log_likelihood: f64,

    /// Akaike Information Criterion.
    pub aic: f64,

    /// Bayesian Information Criterion.
    pub bic: f64,
}

impl RegressionResult {
    /// Create a new empty result (used internally by solvers).
    pub(crate) fn empty(n_parameters: usize, n_observations: usize) -> Self {
        Self {
            coefficients: Col::zeros(n_parameters),
            covariance: Mat::zeros(n_parameters, n_parameters),
            fitted_values: Col::zeros(n_observations),
            residuals: Col::zeros(n_observations),
            n_observations,
            n_parameters,
            std_errors: Col::zeros(n_parameters),
            test_statistics: Col::zeros(n_parameters),
            p_values: Col::zeros(n_parameters),
            distribution: TestDistribution::Normal,
            conf_interval_lower: Col::zeros(n_parameters),
            conf_interval_upper: Col::zeros(n_parameters),
            confidence_level: 0.95,
            log_likelihood: 0.0,
            aic: 0.0,
            bic: 0.0,
        }
    }

    /// Residual degrees of freedom (n - k).
    pub fn residual_df(&self) -> usize {
        self.n_observations.saturating_sub(self.n_parameters)
    }

    /// Fill the information criteria from `log_likelihood`.
    pub(crate) fn set_information_criteria(&mut self) {
        let k = self.n_parameters as f64;
        let n = self.n_observations as f64;
        if self.log_likelihood.is_finite() {
            self.aic = 2.0 * k - 2.0 * self.log_likelihood;
            self.bic = k * n.ln() - 2.0 * self.log_likelihood;
        } else {
            self.aic = f64::NAN;
            self.bic = f64::NAN;
        }
    }
}

/// Per-coefficient record published by a fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientEntry {
    pub coefficient: f64,
    pub standard_error: f64,
    /// t-statistic for OLS, z-statistic for logit.
    pub test_statistic: f64,
    pub p_value: f64,
}

/// Results keyed by column name, kept in design-matrix column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FitResults {
    regression_type: Option<RegressionType>,
    entries: Vec<(String, CoefficientEntry)>,
}

impl FitResults {
    /// Create an empty results mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble the mapping from column names and a numeric result.
    pub(crate) fn from_result(
        regression_type: RegressionType,
        names: &[String],
        result: &RegressionResult,
    ) -> Self {
        let entries = names
            .iter()
            .enumerate()
            .map(|(j, name)| {
                let entry = CoefficientEntry {
                    coefficient: result.coefficients[j],
                    standard_error: result.std_errors[j],
                    test_statistic: result.test_statistics[j],
                    p_value: result.p_values[j],
                };
                (name.clone(), entry)
            })
            .collect();

        Self {
            regression_type: Some(regression_type),
            entries,
        }
    }

    /// Regression type that produced these results, if any.
    pub fn regression_type(&self) -> Option<RegressionType> {
        self.regression_type
    }

    /// Look up the entry for a column.
    pub fn get(&self, name: &str) -> Option<&CoefficientEntry> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, entry)| entry)
    }

    /// Column names in design-matrix order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Iterate over `(name, entry)` pairs in design-matrix order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CoefficientEntry)> {
        self.entries.iter().map(|(n, e)| (n.as_str(), e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.regression_type = None;
        self.entries.clear();
    }
}
