//! Regression solvers implementing the supported estimation methods.

mod logistic;
mod ols;
mod traits;

pub use logistic::{FittedLogistic, LogisticRegressor, LogisticRegressorBuilder};
pub use ols::{FittedOls, OlsRegressor, OlsRegressorBuilder};
pub use traits::{FittedRegressor, RegressionError, Regressor};
