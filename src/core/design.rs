//! Design matrix assembly.

use super::ObservationSet;
use crate::solvers::RegressionError;
use faer::{Col, Mat};

/// Name of the synthetic constant column.
pub const INTERCEPT: &str = "intercept";

/// Numeric design matrix, response vector and column names, aligned by index.
#[derive(Debug, Clone)]
pub struct DesignMatrix {
    /// Rows = observations, columns = features then the optional intercept.
    pub x: Mat<f64>,
    /// Response, one value per row of `x`.
    pub y: Col<f64>,
    /// Column names in `x` column order.
    pub column_names: Vec<String>,
}

impl DesignMatrix {
    /// Build the design matrix from an observation set.
    ///
    /// Feature columns keep their insertion order; when `with_intercept` is
    /// set a column named [`INTERCEPT`] filled with 1.0 is appended last. No
    /// other transformation is applied.
    pub fn build(
        observations: &ObservationSet,
        with_intercept: bool,
    ) -> Result<Self, RegressionError> {
        let feature_names = observations.feature_names();
        if with_intercept && feature_names.iter().any(|name| name == INTERCEPT) {
            return Err(RegressionError::ReservedColumnName(INTERCEPT.to_string()));
        }

        let n_features = feature_names.len();
        let n_columns = n_features + usize::from(with_intercept);
        if n_columns == 0 {
            return Err(RegressionError::EmptyDesign);
        }

        let rows = observations.rows();
        let x = Mat::from_fn(rows.len(), n_columns, |i, j| {
            if j < n_features {
                rows[i][j]
            } else {
                1.0
            }
        });
        let response = observations.response();
        let y = Col::from_fn(response.len(), |i| response[i]);

        let mut column_names = feature_names.to_vec();
        if with_intercept {
            column_names.push(INTERCEPT.to_string());
        }

        Ok(Self {
            x,
            y,
            column_names,
        })
    }

    pub fn n_observations(&self) -> usize {
        self.x.nrows()
    }

    pub fn n_columns(&self) -> usize {
        self.x.ncols()
    }
}
