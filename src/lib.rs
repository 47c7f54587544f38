//! Ordinary least squares and logistic regression with coefficient inference.
//!
//! OLS is solved in closed form; logistic regression maximizes the
//! Bernoulli log-likelihood with a pluggable numerical minimizer (L-BFGS by
//! default). Both report standard errors, test statistics and p-values per
//! design-matrix column.
//!
//! # Example
//!
//! ```rust,ignore
//! use statmodel::prelude::*;
//!
//! let data = ObservationSet::from_columns(
//!     vec![("sex", sex), ("age", age), ("educ", educ)],
//!     white,
//! )?;
//!
//! let mut model = Model::new(data, "logit");
//! let results = model.fit()?;
//! let age = results.get("age").unwrap();
//! println!("age: {} (p = {})", age.coefficient, age.p_value);
//!
//! println!("{}", model.summary());
//! ```

pub mod core;
pub mod inference;
pub mod model;
pub mod optimize;
pub mod solvers;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        CoefficientEntry, DesignMatrix, FitOptions, FitOptionsBuilder, FitResults,
        ObservationSet, OptionsError, RegressionResult, RegressionType, INTERCEPT,
    };
    pub use crate::inference::{CoefficientInference, TestDistribution};
    pub use crate::model::{FittedModel, Model, ModelState, Summary};
    pub use crate::optimize::{LbfgsMinimizer, MinimizeResult, Minimizer, Objective};
    pub use crate::solvers::{
        FittedLogistic, FittedOls, FittedRegressor, LogisticRegressor, OlsRegressor,
        RegressionError, Regressor,
    };
}

pub use crate::core::{
    CoefficientEntry, FitOptions, FitResults, ObservationSet, RegressionType,
};
pub use crate::model::{Model, ModelState};
pub use crate::solvers::RegressionError;
