//! L-BFGS minimizer backed by `argmin`.

use super::{MinimizeResult, Minimizer, Objective, DEFAULT_GRADIENT_STEP};
use crate::core::FitOptions;
use crate::solvers::RegressionError;
use argmin::core::{
    CostFunction, Error as ArgminError, Executor, Gradient, State, TerminationReason,
    TerminationStatus,
};
use argmin::solver::linesearch::MoreThuenteLineSearch;
use argmin::solver::quasinewton::LBFGS;
use log::{debug, trace};

type Params = Vec<f64>;
type Cost = f64;
type MoreThuenteLS = MoreThuenteLineSearch<Params, Params, Cost>;
type LbfgsMoreThuente = LBFGS<MoreThuenteLS, Params, Params, Cost>;

/// Quasi-Newton minimizer (L-BFGS with More-Thuente line search).
#[derive(Debug, Clone, PartialEq)]
pub struct LbfgsMinimizer {
    /// History size.
    pub memory: usize,
    /// Gradient-norm tolerance.
    pub tolerance: f64,
    /// Iteration cap; reaching it is reported as non-convergence.
    pub max_iterations: usize,
    /// Finite-difference step for the gradient.
    pub gradient_step: f64,
}

impl Default for LbfgsMinimizer {
    fn default() -> Self {
        Self {
            memory: 7,
            tolerance: 1e-6,
            max_iterations: 1000,
            gradient_step: DEFAULT_GRADIENT_STEP,
        }
    }
}

impl LbfgsMinimizer {
    /// Take the optimizer settings from fit options.
    pub fn from_options(options: &FitOptions) -> Self {
        Self {
            memory: options.lbfgs_memory,
            tolerance: options.tolerance,
            max_iterations: options.max_iterations,
            gradient_step: options.gradient_step,
        }
    }
}

/// Adapter exposing an [`Objective`] through argmin's problem traits.
struct ArgminProblem<'a, O> {
    objective: &'a O,
    step: f64,
}

impl<O: Objective> CostFunction for ArgminProblem<'_, O> {
    type Param = Params;
    type Output = Cost;

    fn cost(&self, param: &Self::Param) -> Result<Self::Output, ArgminError> {
        Ok(self.objective.value(param))
    }
}

impl<O: Objective> Gradient for ArgminProblem<'_, O> {
    type Param = Params;
    type Gradient = Params;

    fn gradient(&self, param: &Self::Param) -> Result<Self::Gradient, ArgminError> {
        Ok(self.objective.gradient(param, self.step))
    }
}

fn failure(iterations: u64, message: impl ToString) -> RegressionError {
    RegressionError::OptimizationFailure {
        iterations,
        message: message.to_string(),
    }
}

impl Minimizer for LbfgsMinimizer {
    fn minimize<O: Objective>(
        &self,
        objective: &O,
        x0: &[f64],
    ) -> Result<MinimizeResult, RegressionError> {
        let problem = ArgminProblem {
            objective,
            step: self.gradient_step,
        };

        let solver: LbfgsMoreThuente = LBFGS::new(MoreThuenteLineSearch::new(), self.memory)
            .with_tolerance_grad(self.tolerance)
            .map_err(|e| failure(0, e))?;

        trace!(
            "L-BFGS start: {} parameters, m = {}, max_iters = {}",
            x0.len(),
            self.memory,
            self.max_iterations
        );

        let result = Executor::new(problem, solver)
            .configure(|state| {
                state
                    .param(x0.to_vec())
                    .max_iters(self.max_iterations as u64)
            })
            .run()
            .map_err(|e| failure(0, e))?;

        let state = result.state();
        let iterations = state.get_iter();
        let status = state.get_termination_status();
        let success = matches!(
            status,
            TerminationStatus::Terminated(
                TerminationReason::SolverConverged | TerminationReason::TargetCostReached
            )
        );
        let message = match state.get_termination_reason() {
            Some(reason) => reason.text().to_string(),
            None => "not terminated".to_string(),
        };

        let x = state
            .get_best_param()
            .cloned()
            .ok_or_else(|| failure(iterations, "solver produced no parameter vector"))?;
        let fun = state.get_best_cost();

        debug!(
            "L-BFGS finished after {} iterations: {} (cost = {:.6e})",
            iterations, message, fun
        );

        Ok(MinimizeResult {
            x,
            fun,
            success,
            message,
            iterations,
        })
    }
}
