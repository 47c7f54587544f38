//! Regression-type selector.

use crate::solvers::RegressionError;
use std::fmt;
use std::str::FromStr;

/// Which estimator a model dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegressionType {
    /// Closed-form ordinary least squares.
    Ols,
    /// Logistic regression by maximum likelihood.
    Logit,
}

impl RegressionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegressionType::Ols => "ols",
            RegressionType::Logit => "logit",
        }
    }

    /// Header used for the test-statistic column.
    pub fn statistic_label(&self) -> &'static str {
        match self {
            RegressionType::Ols => "t_stat",
            RegressionType::Logit => "z_stat",
        }
    }
}

impl FromStr for RegressionType {
    type Err = RegressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ols" => Ok(RegressionType::Ols),
            "logit" => Ok(RegressionType::Logit),
            _ => Err(RegressionError::InvalidRegressionType(s.to_string())),
        }
    }
}

impl fmt::Display for RegressionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
