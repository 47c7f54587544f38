//! Observation sets: named numeric features plus a response.

use crate::solvers::RegressionError;

/// An ordered collection of rows sharing the same named numeric features,
/// each with one numeric response value.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationSet {
    feature_names: Vec<String>,
    rows: Vec<Vec<f64>>,
    response: Vec<f64>,
}

impl ObservationSet {
    /// Create an empty observation set with the given feature names.
    ///
    /// Names must be unique.
    pub fn new<I, S>(feature_names: I) -> Result<Self, RegressionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let feature_names: Vec<String> = feature_names.into_iter().map(Into::into).collect();
        for (j, name) in feature_names.iter().enumerate() {
            if feature_names[..j].contains(name) {
                return Err(RegressionError::DuplicateColumn(name.clone()));
            }
        }

        Ok(Self {
            feature_names,
            rows: Vec::new(),
            response: Vec::new(),
        })
    }

    /// Build an observation set from named feature columns and a response column.
    pub fn from_columns<S>(
        columns: Vec<(S, Vec<f64>)>,
        response: Vec<f64>,
    ) -> Result<Self, RegressionError>
    where
        S: Into<String>,
    {
        let n = response.len();
        let mut names = Vec::with_capacity(columns.len());
        let mut values = Vec::with_capacity(columns.len());
        for (name, column) in columns {
            if column.len() != n {
                return Err(RegressionError::DimensionMismatch {
                    x_rows: column.len(),
                    y_len: n,
                });
            }
            names.push(name.into());
            values.push(column);
        }

        let mut set = Self::new(names)?;
        for (i, &y) in response.iter().enumerate() {
            let row: Vec<f64> = values.iter().map(|column| column[i]).collect();
            set.push(&row, y)?;
        }
        Ok(set)
    }

    /// Append one observation. `features` follows `feature_names()` order.
    pub fn push(&mut self, features: &[f64], response: f64) -> Result<(), RegressionError> {
        if features.len() != self.feature_names.len() {
            return Err(RegressionError::RowWidthMismatch {
                expected: self.feature_names.len(),
                found: features.len(),
            });
        }
        self.rows.push(features.to_vec());
        self.response.push(response);
        Ok(())
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn response(&self) -> &[f64] {
        &self.response
    }

    /// Replace the response column, keeping the features.
    pub fn with_response(mut self, response: Vec<f64>) -> Result<Self, RegressionError> {
        if response.len() != self.rows.len() {
            return Err(RegressionError::DimensionMismatch {
                x_rows: self.rows.len(),
                y_len: response.len(),
            });
        }
        self.response = response;
        Ok(self)
    }

    pub fn n_observations(&self) -> usize {
        self.rows.len()
    }

    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
