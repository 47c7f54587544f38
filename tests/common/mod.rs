//! Common test utilities and data generators.

#![allow(dead_code)]

use faer::{Col, Mat};
use statmodel::ObservationSet;

/// Deterministic pseudo-random values in [-1, 1).
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    }
}

/// Generate linear data y = X·beta + noise with an intercept column last.
///
/// Returns (X, y, true coefficients); the true coefficients are 1, 2, ...
/// for the features followed by `intercept`.
pub fn generate_linear_data(
    n_samples: usize,
    n_features: usize,
    intercept: f64,
    noise_std: f64,
    seed: u64,
) -> (Mat<f64>, Col<f64>, Col<f64>) {
    let mut rng = Lcg::new(seed);

    let mut x = Mat::zeros(n_samples, n_features + 1);
    let mut y = Col::zeros(n_samples);
    let true_coefficients = Col::from_fn(n_features + 1, |j| {
        if j < n_features {
            (j + 1) as f64
        } else {
            intercept
        }
    });

    for i in 0..n_samples {
        let mut yi = intercept;
        for j in 0..n_features {
            x[(i, j)] = rng.next();
            yi += x[(i, j)] * true_coefficients[j];
        }
        x[(i, n_features)] = 1.0;
        yi += noise_std * rng.next();
        y[i] = yi;
    }

    (x, y, true_coefficients)
}

/// Generate binary data from logit(p) = X·beta, intercept column last.
///
/// Outcomes are drawn against a deterministic uniform sequence, so classes
/// overlap and the MLE is finite.
pub fn generate_logistic_data(
    n_samples: usize,
    beta: &[f64],
    seed: u64,
) -> (Mat<f64>, Col<f64>) {
    let n_features = beta.len() - 1;
    let mut rng = Lcg::new(seed);

    let mut x = Mat::zeros(n_samples, n_features + 1);
    let mut y = Col::zeros(n_samples);

    for i in 0..n_samples {
        let mut eta = beta[n_features];
        for j in 0..n_features {
            x[(i, j)] = 2.0 * rng.next();
            eta += x[(i, j)] * beta[j];
        }
        x[(i, n_features)] = 1.0;
        let p = 1.0 / (1.0 + (-eta).exp());
        let u = 0.5 * (rng.next() + 1.0);
        y[i] = if u < p { 1.0 } else { 0.0 };
    }

    (x, y)
}

/// Survey-style rows: (sex, age, educ, white).
pub const SURVEY: [(f64, f64, f64, f64); 16] = [
    (1.0, 30.0, 12.0, 1.0),
    (0.0, 45.0, 16.0, 0.0),
    (1.0, 52.0, 10.0, 1.0),
    (0.0, 23.0, 14.0, 1.0),
    (1.0, 38.0, 18.0, 0.0),
    (0.0, 61.0, 12.0, 1.0),
    (1.0, 27.0, 11.0, 0.0),
    (0.0, 49.0, 13.0, 1.0),
    (1.0, 56.0, 16.0, 1.0),
    (0.0, 34.0, 12.0, 0.0),
    (1.0, 42.0, 14.0, 1.0),
    (0.0, 29.0, 17.0, 0.0),
    (1.0, 64.0, 9.0, 1.0),
    (0.0, 40.0, 15.0, 1.0),
    (1.0, 33.0, 12.0, 0.0),
    (0.0, 58.0, 11.0, 0.0),
];

/// The survey rows with `white` as the response.
pub fn survey_observations() -> ObservationSet {
    let mut set = ObservationSet::new(["sex", "age", "educ"]).expect("unique names");
    for &(sex, age, educ, white) in SURVEY.iter() {
        set.push(&[sex, age, educ], white).expect("row width matches");
    }
    set
}

/// The survey rows with a continuous response (an income-like score).
pub fn survey_observations_continuous() -> ObservationSet {
    let mut rng = Lcg::new(7);
    let income: Vec<f64> = SURVEY
        .iter()
        .map(|&(sex, age, educ, _)| 5.0 + 2.0 * sex + 0.3 * age + 1.5 * educ + 3.0 * rng.next())
        .collect();
    survey_observations()
        .with_response(income)
        .expect("same row count")
}

/// Approximate equality check for floating point values.
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}
