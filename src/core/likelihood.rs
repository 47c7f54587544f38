//! Bernoulli log-likelihood under the logistic link.
//!
//! For a coefficient vector β, design matrix X and binary response y, the
//! linear predictor is γ = Xβ and each observation contributes
//!
//! ℓ_i = y_i·γ_i − log(1 + e^γ_i)
//!
//! The log-odds form avoids evaluating the sigmoid. `log(1 + e^γ)` is
//! computed as softplus so large |γ| neither overflows nor loses precision.

use crate::optimize::Objective;
use faer::{Col, Mat};

/// Numerically stable `log(1 + e^x)`.
pub fn log1p_exp(x: f64) -> f64 {
    if x > 0.0 {
        x + (-x).exp().ln_1p()
    } else {
        x.exp().ln_1p()
    }
}

/// Logistic function `1 / (1 + e^(-x))`, stable in both tails.
pub fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Compute the linear predictor Xβ.
pub fn linear_predictor(x: &Mat<f64>, beta: &[f64]) -> Col<f64> {
    let beta = Col::from_fn(beta.len(), |j| beta[j]);
    x * &beta
}

/// The Bernoulli log-likelihood of a binary response given a design matrix.
///
/// Owns its data so it can be handed to a [`crate::optimize::Minimizer`]
/// as the objective (through its negation).
#[derive(Debug, Clone)]
pub struct BernoulliLikelihood {
    x: Mat<f64>,
    y: Col<f64>,
}

impl BernoulliLikelihood {
    pub fn new(x: Mat<f64>, y: Col<f64>) -> Self {
        Self { x, y }
    }

    /// Total log-likelihood Σℓ_i at `beta`.
    pub fn log_likelihood(&self, beta: &[f64]) -> f64 {
        let eta = linear_predictor(&self.x, beta);
        eta.iter()
            .zip(self.y.iter())
            .map(|(&g, &y)| y * g - log1p_exp(g))
            .sum()
    }

    /// Negative total log-likelihood, the quantity to minimize.
    pub fn negative_log_likelihood(&self, beta: &[f64]) -> f64 {
        -self.log_likelihood(beta)
    }

    /// Log-likelihood of the intercept-only model, evaluated in closed form
    /// at p = mean(y).
    pub fn null_log_likelihood(&self) -> f64 {
        let n = self.y.nrows() as f64;
        if n == 0.0 {
            return 0.0;
        }
        let p = self.y.iter().sum::<f64>() / n;
        if p <= 0.0 || p >= 1.0 {
            return 0.0;
        }
        n * (p * p.ln() + (1.0 - p) * (1.0 - p).ln())
    }

    pub fn n_parameters(&self) -> usize {
        self.x.ncols()
    }
}

impl Objective for BernoulliLikelihood {
    fn value(&self, params: &[f64]) -> f64 {
        self.negative_log_likelihood(params)
    }
}
