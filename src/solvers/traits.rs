//! Core traits for regression estimators.

use crate::core::RegressionResult;
use faer::{Col, Mat};
use thiserror::Error;

/// Errors that can occur while building a design or fitting a model.
#[derive(Debug, Error)]
pub enum RegressionError {
    #[error("invalid regression type: {0:?} (expected \"ols\" or \"logit\")")]
    InvalidRegressionType(String),

    #[error("matrix is singular or nearly singular")]
    SingularMatrix,

    #[error("degenerate design: {observations} observations for {parameters} parameters")]
    DegenerateDesign {
        observations: usize,
        parameters: usize,
    },

    #[error("optimization failed after {iterations} iterations: {message}")]
    OptimizationFailure { iterations: u64, message: String },

    #[error("dimension mismatch: X has {x_rows} rows but y has {y_len} elements")]
    DimensionMismatch { x_rows: usize, y_len: usize },

    #[error("row has {found} feature values but the set has {expected} features")]
    RowWidthMismatch { expected: usize, found: usize },

    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),

    #[error("column name {0:?} is reserved for the intercept")]
    ReservedColumnName(String),

    #[error("design matrix has no columns")]
    EmptyDesign,

    #[error("response must be 0 or 1 for logistic regression, got y[{index}] = {value}")]
    NonBinaryResponse { index: usize, value: f64 },

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] crate::core::OptionsError),
}

/// A regression estimator that can be fit to a design matrix.
///
/// The design matrix is used as given: an intercept, if wanted, is already
/// one of its columns.
pub trait Regressor {
    /// The type of the fitted model.
    type Fitted: FittedRegressor;

    /// Fit the model to the data.
    ///
    /// # Arguments
    /// * `x` - Design matrix of shape (n_samples, n_columns)
    /// * `y` - Response vector of length n_samples
    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<Self::Fitted, RegressionError>;
}

/// A fitted regression model.
pub trait FittedRegressor {
    /// Predict on new data laid out like the training design matrix.
    fn predict(&self, x: &Mat<f64>) -> Col<f64>;

    /// Access the regression results (coefficients, statistics, etc.).
    fn result(&self) -> &RegressionResult;

    /// Get the coefficients (convenience method).
    fn coefficients(&self) -> &Col<f64> {
        &self.result().coefficients
    }

    /// Get the standard errors (convenience method).
    fn std_errors(&self) -> &Col<f64> {
        &self.result().std_errors
    }

    /// Get the p-values (convenience method).
    fn p_values(&self) -> &Col<f64> {
        &self.result().p_values
    }

    /// Get the coefficient covariance matrix (convenience method).
    fn covariance(&self) -> &Mat<f64> {
        &self.result().covariance
    }
}
