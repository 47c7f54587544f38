//! Fit options and configuration.

use thiserror::Error;

/// Configuration options for fitting a model.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOptions {
    /// Whether to append an intercept column (default: true).
    pub with_intercept: bool,
    /// Maximum optimizer iterations for logistic regression.
    pub max_iterations: usize,
    /// Gradient-norm tolerance for the optimizer.
    pub tolerance: f64,
    /// History size for L-BFGS.
    pub lbfgs_memory: usize,
    /// Step size for central finite-difference gradients.
    pub gradient_step: f64,
    /// Relative pivot threshold below which X'X is treated as singular.
    pub rank_tolerance: f64,
    /// Reject logistic responses outside {0, 1} (default: true).
    pub check_binary_response: bool,
    /// Confidence level for confidence intervals (default: 0.95).
    pub confidence_level: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            with_intercept: true,
            max_iterations: 1000,
            tolerance: 1e-6,
            lbfgs_memory: 7,
            gradient_step: 1e-6,
            rank_tolerance: 1e-10,
            check_binary_response: true,
            confidence_level: 0.95,
        }
    }
}

/// Errors that can occur when validating fit options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("confidence_level must be in (0, 1), got {0}")]
    InvalidConfidenceLevel(f64),
    #[error("tolerance must be positive, got {0}")]
    InvalidTolerance(f64),
    #[error("max_iterations must be at least 1, got {0}")]
    InvalidMaxIterations(usize),
    #[error("lbfgs_memory must be at least 1, got {0}")]
    InvalidLbfgsMemory(usize),
    #[error("gradient_step must be positive, got {0}")]
    InvalidGradientStep(f64),
    #[error("rank_tolerance must be non-negative, got {0}")]
    InvalidRankTolerance(f64),
}

impl FitOptions {
    /// Create a new builder for fit options.
    pub fn builder() -> FitOptionsBuilder {
        FitOptionsBuilder::default()
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.confidence_level <= 0.0 || self.confidence_level >= 1.0 {
            return Err(OptionsError::InvalidConfidenceLevel(self.confidence_level));
        }
        if self.tolerance <= 0.0 {
            return Err(OptionsError::InvalidTolerance(self.tolerance));
        }
        if self.max_iterations < 1 {
            return Err(OptionsError::InvalidMaxIterations(self.max_iterations));
        }
        if self.lbfgs_memory < 1 {
            return Err(OptionsError::InvalidLbfgsMemory(self.lbfgs_memory));
        }
        if self.gradient_step <= 0.0 {
            return Err(OptionsError::InvalidGradientStep(self.gradient_step));
        }
        if self.rank_tolerance < 0.0 {
            return Err(OptionsError::InvalidRankTolerance(self.rank_tolerance));
        }
        Ok(())
    }
}

/// Builder for `FitOptions`.
#[derive(Debug, Clone, Default)]
pub struct FitOptionsBuilder {
    options: FitOptions,
}

impl FitOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to append an intercept column.
    pub fn with_intercept(mut self, include: bool) -> Self {
        self.options.with_intercept = include;
        self
    }

    /// Set the optimizer iteration cap.
    pub fn max_iterations(mut self, max_iter: usize) -> Self {
        self.options.max_iterations = max_iter;
        self
    }

    /// Set the optimizer gradient tolerance.
    pub fn tolerance(mut self, tol: f64) -> Self {
        self.options.tolerance = tol;
        self
    }

    /// Set the L-BFGS history size.
    pub fn lbfgs_memory(mut self, memory: usize) -> Self {
        self.options.lbfgs_memory = memory;
        self
    }

    /// Set the finite-difference step.
    pub fn gradient_step(mut self, step: f64) -> Self {
        self.options.gradient_step = step;
        self
    }

    /// Set the rank tolerance used when inverting X'X.
    pub fn rank_tolerance(mut self, tol: f64) -> Self {
        self.options.rank_tolerance = tol;
        self
    }

    /// Set whether logistic responses are checked to be 0 or 1.
    pub fn check_binary_response(mut self, check: bool) -> Self {
        self.options.check_binary_response = check;
        self
    }

    /// Set the confidence level for confidence intervals.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.options.confidence_level = level;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<FitOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> FitOptions {
        self.options
    }
}
