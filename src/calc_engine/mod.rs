//! Single-pass infix evaluator.
//!
//! A finite state machine walks the expression one lexical unit at a time and
//! every transition runs one action against an operand stack and an operator
//! stack. Sub-expressions are folded as soon as the operator ranks demand it,
//! so lexing and evaluation never separate into two phases.

mod actions;
pub mod config;
mod fold;
pub mod fsm;
pub mod ops;
pub mod stack;
pub mod status;
pub mod token;
pub mod trace;

use log::warn;

pub use config::EngineConfig;
pub use fsm::{Machine, State};
pub use ops::Operator;
pub use status::{CalcError, Status};
pub use trace::Step;

#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub value: f64,
    pub status: Status,
    /// Applied folds; empty unless tracing is enabled.
    pub steps: Vec<Step>,
}

impl Evaluation {
    pub fn into_result(self) -> Result<f64, CalcError> {
        match self.status.as_error() {
            Some(err) => Err(err),
            None => Ok(self.value),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: EngineConfig,
}

impl Calculator {
    pub fn new(config: EngineConfig) -> Self {
        Calculator { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn evaluate(&self, expression: &str) -> Evaluation {
        match Machine::new(expression, &self.config) {
            Ok(machine) => machine.run(),
            Err(err) => {
                warn!("{}", err);
                Evaluation {
                    value: 0.0,
                    status: Status::AllocationError,
                    steps: Vec::new(),
                }
            }
        }
    }
}

/// Evaluates `expression` with the default configuration.
///
/// Every failure comes back with a value of exactly `0.0`.
///
/// ```
/// use fsmcalc::{evaluate, Status};
///
/// assert_eq!(evaluate("7+8"), (15.0, Status::Success));
/// assert_eq!(evaluate("15-3/0"), (0.0, Status::MathError));
/// ```
pub fn evaluate(expression: &str) -> (f64, Status) {
    let eval = Calculator::default().evaluate(expression);
    (eval.value, eval.status)
}

pub fn try_evaluate(expression: &str) -> Result<f64, CalcError> {
    Calculator::default().evaluate(expression).into_result()
}
