//! Model facade: owns the data, dispatches to an estimator and keeps the
//! published results.
//!
//! # Example
//!
//! ```rust,ignore
//! use statmodel::prelude::*;
//!
//! let data = ObservationSet::from_columns(
//!     vec![("age", ages), ("educ", years)],
//!     outcome,
//! )?;
//!
//! let mut model = Model::new(data, "logit");
//! model.fit()?;
//! println!("{}", model.summary());
//! ```

use crate::core::{
    DesignMatrix, FitOptions, FitResults, ObservationSet, RegressionResult, RegressionType,
};
use crate::optimize::{LbfgsMinimizer, Minimizer};
use crate::solvers::{
    FittedLogistic, FittedOls, FittedRegressor, LogisticRegressor, OlsRegressor, RegressionError,
    Regressor,
};
use log::{debug, warn};
use std::fmt;

/// Lifecycle of a [`Model`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelState {
    /// No fit has been attempted.
    Unfit,
    /// The last fit succeeded with the given estimator.
    Fit(RegressionType),
    /// The last fit returned an error; results are empty.
    Failed,
}

/// Typed estimator output of the last successful fit.
#[derive(Debug, Clone)]
pub enum FittedModel {
    Ols(FittedOls),
    Logit(FittedLogistic),
}

impl FittedModel {
    pub fn result(&self) -> &RegressionResult {
        match self {
            FittedModel::Ols(fitted) => fitted.result(),
            FittedModel::Logit(fitted) => fitted.result(),
        }
    }

    pub fn regression_type(&self) -> RegressionType {
        match self {
            FittedModel::Ols(_) => RegressionType::Ols,
            FittedModel::Logit(_) => RegressionType::Logit,
        }
    }
}

/// A regression model over a fixed observation set.
///
/// The regression type is kept as the caller's selector string and only
/// parsed when [`Model::fit`] runs, so an unknown selector surfaces as
/// [`RegressionError::InvalidRegressionType`] from `fit`.
#[derive(Debug, Clone)]
pub struct Model<M = LbfgsMinimizer> {
    observations: ObservationSet,
    regression_type: String,
    options: FitOptions,
    minimizer: Option<M>,
    state: ModelState,
    results: FitResults,
    fitted: Option<FittedModel>,
}

impl Model<LbfgsMinimizer> {
    /// Create an unfit model with default options.
    pub fn new(observations: ObservationSet, regression_type: impl Into<String>) -> Self {
        Self::with_options(observations, regression_type, FitOptions::default())
    }

    /// Create an unfit model with the given options.
    pub fn with_options(
        observations: ObservationSet,
        regression_type: impl Into<String>,
        options: FitOptions,
    ) -> Self {
        Self {
            observations,
            regression_type: regression_type.into(),
            options,
            minimizer: None,
            state: ModelState::Unfit,
            results: FitResults::new(),
            fitted: None,
        }
    }
}

impl<M: Minimizer> Model<M> {
    /// Use `minimizer` for logistic fits instead of the default L-BFGS.
    pub fn with_minimizer<N: Minimizer>(self, minimizer: N) -> Model<N> {
        Model {
            observations: self.observations,
            regression_type: self.regression_type,
            options: self.options,
            minimizer: Some(minimizer),
            state: self.state,
            results: self.results,
            fitted: self.fitted,
        }
    }

    /// Set whether an intercept column is appended.
    pub fn with_intercept(mut self, include: bool) -> Self {
        self.options.with_intercept = include;
        self
    }

    /// Fit the model, replacing any previous results.
    ///
    /// Results are cleared before the attempt and stay empty when it fails.
    pub fn fit(&mut self) -> Result<&FitResults, RegressionError> {
        self.results.clear();
        self.fitted = None;

        match self.run_fit() {
            Ok((fitted, column_names)) => {
                let regression_type = fitted.regression_type();
                self.results =
                    FitResults::from_result(regression_type, &column_names, fitted.result());
                self.fitted = Some(fitted);
                self.state = ModelState::Fit(regression_type);
                Ok(&self.results)
            }
            Err(err) => {
                warn!("fit failed: {}", err);
                self.state = ModelState::Failed;
                Err(err)
            }
        }
    }

    fn run_fit(&self) -> Result<(FittedModel, Vec<String>), RegressionError> {
        let regression_type: RegressionType = self.regression_type.parse()?;
        self.options.validate()?;

        let design = DesignMatrix::build(&self.observations, self.options.with_intercept)?;
        debug!(
            "dispatching {} fit on {} x {} design",
            regression_type,
            design.n_observations(),
            design.n_columns()
        );

        let fitted = match regression_type {
            RegressionType::Ols => {
                let regressor = OlsRegressor::new(self.options.clone());
                FittedModel::Ols(regressor.fit(&design.x, &design.y)?)
            }
            RegressionType::Logit => {
                let regressor = LogisticRegressor::new(self.options.clone());
                let fitted = match &self.minimizer {
                    Some(minimizer) => regressor
                        .with_minimizer(minimizer)
                        .fit(&design.x, &design.y)?,
                    None => regressor.fit(&design.x, &design.y)?,
                };
                FittedModel::Logit(fitted)
            }
        };

        Ok((fitted, design.column_names))
    }

    /// Results of the last successful fit; empty otherwise.
    pub fn results(&self) -> &FitResults {
        &self.results
    }

    /// Estimator output of the last successful fit.
    pub fn fitted(&self) -> Option<&FittedModel> {
        self.fitted.as_ref()
    }

    pub fn state(&self) -> ModelState {
        self.state
    }

    /// The regression-type selector as given.
    pub fn regression_type(&self) -> &str {
        &self.regression_type
    }

    /// Change the regression type. Takes effect on the next fit.
    pub fn set_regression_type(&mut self, regression_type: impl Into<String>) {
        self.regression_type = regression_type.into();
    }

    pub fn options(&self) -> &FitOptions {
        &self.options
    }

    /// Replace the fit options. Takes effect on the next fit.
    pub fn set_options(&mut self, options: FitOptions) {
        self.options = options;
    }

    pub fn observations(&self) -> &ObservationSet {
        &self.observations
    }

    /// Fixed-width table of the current results.
    pub fn summary(&self) -> Summary<'_> {
        Summary {
            results: &self.results,
            fitted: self.fitted.as_ref(),
        }
    }
}

/// Text table of coefficient results, keyed to the fitted regression type.
///
/// OLS columns: coefficient, standard_error, t_stat, p_value.
/// Logit columns: coefficient, standard_error, z_stat, p_value.
pub struct Summary<'a> {
    results: &'a FitResults,
    fitted: Option<&'a FittedModel>,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (regression_type, fitted) = match (self.results.regression_type(), self.fitted) {
            (Some(regression_type), Some(fitted)) => (regression_type, fitted),
            _ => return writeln!(f, "model has not been fit"),
        };

        let result = fitted.result();
        writeln!(
            f,
            "Regression: {:<10} Observations: {:>6} Parameters: {:>4}",
            regression_type, result.n_observations, result.n_parameters
        )?;
        match fitted {
            FittedModel::Ols(ols) => writeln!(
                f,
                "R-squared: {:.4}  Adj. R-squared: {:.4}  Residual df: {}",
                ols.r_squared,
                ols.adj_r_squared,
                ols.residual_df()
            )?,
            FittedModel::Logit(logit) => writeln!(
                f,
                "Log-likelihood: {:.4}  Pseudo R-squared: {:.4}  Iterations: {}",
                result.log_likelihood, logit.pseudo_r_squared, logit.iterations
            )?,
        }

        let width = self
            .results
            .names()
            .map(str::len)
            .max()
            .unwrap_or(0)
            .max(12);

        writeln!(
            f,
            "{:<width$} {:>14} {:>14} {:>12} {:>10}",
            "",
            "coefficient",
            "standard_error",
            regression_type.statistic_label(),
            "p_value",
            width = width
        )?;
        writeln!(f, "{}", "-".repeat(width + 54))?;

        for (name, entry) in self.results.iter() {
            writeln!(
                f,
                "{:<width$} {:>14.6} {:>14.6} {:>12.4} {:>10.4}",
                name,
                entry.coefficient,
                entry.standard_error,
                entry.test_statistic,
                entry.p_value,
                width = width
            )?;
        }

        Ok(())
    }
}
