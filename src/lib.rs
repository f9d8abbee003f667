//! Arithmetic expression evaluation with a fused tokenizer and dual-stack
//! precedence engine.
//!
//! ```
//! use fsmcalc::{Calculator, EngineConfig, Status};
//!
//! let calc = Calculator::new(EngineConfig::default().with_trace(true));
//! let eval = calc.evaluate("(1-(3*9)+3+4)");
//! assert_eq!(eval.status, Status::Success);
//! assert_eq!(eval.value, -19.0);
//! assert!(!eval.steps.is_empty());
//! ```

pub mod calc_engine;

pub use calc_engine::{
    evaluate, try_evaluate, CalcError, Calculator, EngineConfig, Evaluation, Status, Step,
};
