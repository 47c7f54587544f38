//! Core types for regression analysis.

mod design;
pub mod likelihood;
mod observations;
mod options;
mod regression_type;
mod result;

pub use design::{DesignMatrix, INTERCEPT};
pub use likelihood::BernoulliLikelihood;
pub use observations::ObservationSet;
pub use options::{FitOptions, FitOptionsBuilder, OptionsError};
pub use regression_type::RegressionType;
pub use result::{CoefficientEntry, FitResults, RegressionResult};
