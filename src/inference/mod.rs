//! Statistical inference (standard errors, test statistics, p-values, confidence intervals).

mod coefficient;

pub use coefficient::{CoefficientInference, TestDistribution};
