//! Unconstrained minimization of scalar objectives.
//!
//! The estimators only depend on the [`Minimizer`] trait: an objective goes
//! in, a candidate minimizer and a success flag come out. [`LbfgsMinimizer`]
//! is the default implementation and delegates to `argmin`'s L-BFGS with a
//! More-Thuente line search. Gradients are estimated by central finite
//! differences unless the objective overrides [`Objective::gradient`].

mod lbfgs;

pub use lbfgs::LbfgsMinimizer;

use crate::solvers::RegressionError;

/// Default finite-difference step.
pub const DEFAULT_GRADIENT_STEP: f64 = 1e-6;

/// A scalar function of a parameter vector.
pub trait Objective {
    /// Evaluate the objective at `params`.
    fn value(&self, params: &[f64]) -> f64;

    /// Gradient at `params`, by central differences with step `step`.
    fn gradient(&self, params: &[f64], step: f64) -> Vec<f64> {
        finite_difference_gradient(&|p: &[f64]| self.value(p), params, step)
    }
}

/// Outcome of a minimization run.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimizeResult {
    /// Best parameter vector found.
    pub x: Vec<f64>,
    /// Objective value at `x`.
    pub fun: f64,
    /// Whether the solver reports convergence.
    pub success: bool,
    /// Human-readable termination reason.
    pub message: String,
    /// Iterations performed.
    pub iterations: u64,
}

/// A solver that minimizes an [`Objective`] from a starting point.
pub trait Minimizer {
    /// Minimize `objective` starting at `x0`.
    ///
    /// Non-convergence is reported through `success = false`; an `Err` is
    /// reserved for failures where no usable iterate exists.
    fn minimize<O: Objective>(
        &self,
        objective: &O,
        x0: &[f64],
    ) -> Result<MinimizeResult, RegressionError>;
}

impl<M: Minimizer> Minimizer for &M {
    fn minimize<O: Objective>(
        &self,
        objective: &O,
        x0: &[f64],
    ) -> Result<MinimizeResult, RegressionError> {
        (**self).minimize(objective, x0)
    }
}

/// Compute a gradient by central differences.
///
/// g[i] = (f(x + h·e_i) − f(x − h·e_i)) / 2h
pub fn finite_difference_gradient<F>(f: &F, x: &[f64], step: f64) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64,
{
    let mut grad = vec![0.0; x.len()];
    let mut x_pert = x.to_vec();

    for i in 0..x.len() {
        let x_orig = x_pert[i];
        // Scale the step with the coordinate so large parameters still move
        let h = step * x_orig.abs().max(1.0);

        x_pert[i] = x_orig + h;
        let f_plus = f(&x_pert);

        x_pert[i] = x_orig - h;
        let f_minus = f(&x_pert);

        x_pert[i] = x_orig;

        grad[i] = (f_plus - f_minus) / (2.0 * h);
    }

    grad
}
