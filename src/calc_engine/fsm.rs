use log::{debug, trace};

use super::config::EngineConfig;
use super::ops::{Operator, StackOp};
use super::stack::{Stack, StackError};
use super::status::{Fault, Status};
use super::token::CharClass;
use super::trace::EvaluationTrace;
use super::Evaluation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    AwaitingNumber,
    AwaitingOperator,
    Done,
    Failed,
}

impl State {
    pub fn is_terminal(self) -> bool {
        matches!(self, State::Done | State::Failed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ParseNumber,
    PushOperator(Operator),
    OpenBracket,
    CloseBracket,
    SkipSpace,
    Finish,
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub action: Action,
    pub next: State,
}

/// The state table. Every pair not listed maps to `Fail`.
pub fn transition(state: State, class: CharClass) -> Transition {
    use State::*;

    let (action, next) = match (state, class) {
        (AwaitingNumber, CharClass::Digit | CharClass::Sign(_)) => {
            (Action::ParseNumber, AwaitingOperator)
        }
        (AwaitingNumber, CharClass::OpenBracket) => (Action::OpenBracket, AwaitingNumber),
        (AwaitingNumber, CharClass::Space) => (Action::SkipSpace, AwaitingNumber),
        (AwaitingOperator, CharClass::Sign(op) | CharClass::Operator(op)) => {
            (Action::PushOperator(op), AwaitingNumber)
        }
        (AwaitingOperator, CharClass::CloseBracket) => (Action::CloseBracket, AwaitingOperator),
        (AwaitingOperator, CharClass::Space) => (Action::SkipSpace, AwaitingOperator),
        (AwaitingOperator, CharClass::End) => (Action::Finish, Done),
        _ => (Action::Fail, Failed),
    };
    Transition { action, next }
}

/// Per-call evaluation context: cursor, both stacks and the bracket balance.
#[derive(Debug)]
pub struct Machine<'a> {
    pub(super) expression: &'a str,
    pub(super) pos: usize,
    pub(super) operands: Stack<f64>,
    pub(super) operators: Stack<StackOp>,
    pub(super) state: State,
    pub(super) status: Status,
    pub(super) value: f64,
    pub(super) brackets: isize,
    pub(super) trace: EvaluationTrace,
}

impl<'a> Machine<'a> {
    pub fn new(expression: &'a str, config: &EngineConfig) -> Result<Self, StackError> {
        let slots = config.reserved_slots();
        Ok(Machine {
            expression,
            pos: 0,
            operands: Stack::with_capacity(slots, config.max_depth)?,
            operators: Stack::with_capacity(slots, config.max_depth)?,
            state: State::AwaitingNumber,
            status: Status::Success,
            value: 0.0,
            brackets: 0,
            trace: EvaluationTrace::new(config.trace),
        })
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Byte offset of the cursor into the expression.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Open brackets not yet closed; negative after a stray `)`.
    pub fn bracket_depth(&self) -> isize {
        self.brackets
    }

    pub(super) fn rest(&self) -> &'a str {
        &self.expression[self.pos..]
    }

    pub(super) fn advance(&mut self, bytes: usize) {
        self.pos += bytes;
    }

    /// Performs one transition. Does nothing once the machine is terminal.
    pub fn step(&mut self) -> State {
        if self.state.is_terminal() {
            return self.state;
        }

        let current = self.rest().chars().next();
        let Transition { action, next } = transition(self.state, CharClass::of(current));
        trace!(
            "{:?} at {} on {:?}: {:?} -> {:?}",
            self.state,
            self.pos,
            current,
            action,
            next
        );

        let before = self.pos;
        self.state = match self.dispatch(action) {
            Ok(()) => next,
            Err(fault) => {
                self.record(fault);
                State::Failed
            }
        };
        debug_assert!(
            self.state.is_terminal() || self.pos > before,
            "non-terminal transition must advance the cursor"
        );
        self.state
    }

    pub fn run(mut self) -> Evaluation {
        while !self.step().is_terminal() {}

        if !self.status.is_success() {
            self.value = 0.0;
        }
        debug!(
            "evaluated {:?}: {} ({})",
            self.expression, self.value, self.status
        );
        Evaluation {
            value: self.value,
            status: self.status,
            steps: self.trace.into_steps(),
        }
    }

    /// A later syntax fault never hides a math fault.
    pub(super) fn record(&mut self, fault: Fault) {
        self.value = 0.0;
        if fault == Fault::Syntax && self.status == Status::MathError {
            return;
        }
        self.status = fault.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(expression: &str) -> Machine<'_> {
        Machine::new(expression, &EngineConfig::default()).unwrap()
    }

    #[test]
    fn number_position_accepts_digits_signs_and_brackets() {
        let t = transition(State::AwaitingNumber, CharClass::Digit);
        assert_eq!(t, Transition { action: Action::ParseNumber, next: State::AwaitingOperator });

        let t = transition(State::AwaitingNumber, CharClass::Sign(Operator::Subtract));
        assert_eq!(t.action, Action::ParseNumber);

        let t = transition(State::AwaitingNumber, CharClass::OpenBracket);
        assert_eq!(t, Transition { action: Action::OpenBracket, next: State::AwaitingNumber });
    }

    #[test]
    fn operator_position_accepts_operators_and_close() {
        let t = transition(State::AwaitingOperator, CharClass::Operator(Operator::Power));
        assert_eq!(
            t,
            Transition { action: Action::PushOperator(Operator::Power), next: State::AwaitingNumber }
        );

        let t = transition(State::AwaitingOperator, CharClass::Sign(Operator::Add));
        assert_eq!(t.action, Action::PushOperator(Operator::Add));

        let t = transition(State::AwaitingOperator, CharClass::CloseBracket);
        assert_eq!(t.next, State::AwaitingOperator);

        let t = transition(State::AwaitingOperator, CharClass::End);
        assert_eq!(t, Transition { action: Action::Finish, next: State::Done });
    }

    #[test]
    fn unmapped_pairs_fail() {
        let fail = Transition { action: Action::Fail, next: State::Failed };
        let cases = [
            (State::AwaitingNumber, CharClass::End),
            (State::AwaitingNumber, CharClass::CloseBracket),
            (State::AwaitingNumber, CharClass::Operator(Operator::Multiply)),
            (State::AwaitingNumber, CharClass::Other),
            (State::AwaitingOperator, CharClass::Digit),
            (State::AwaitingOperator, CharClass::OpenBracket),
            (State::AwaitingOperator, CharClass::Other),
            (State::Done, CharClass::Digit),
            (State::Failed, CharClass::Space),
        ];
        for (state, class) in cases {
            assert_eq!(transition(state, class), fail, "{state:?} / {class:?}");
        }
    }

    #[test]
    fn spaces_keep_the_state() {
        for state in [State::AwaitingNumber, State::AwaitingOperator] {
            let t = transition(state, CharClass::Space);
            assert_eq!(t, Transition { action: Action::SkipSpace, next: state });
        }
    }

    #[test]
    fn stepping_tracks_cursor_and_brackets() {
        let mut m = machine("(12 + 3)");
        assert_eq!(m.step(), State::AwaitingNumber);
        assert_eq!(m.bracket_depth(), 1);
        assert_eq!(m.step(), State::AwaitingOperator);
        assert_eq!(m.position(), 3);
        assert_eq!(m.step(), State::AwaitingOperator);
        assert_eq!(m.step(), State::AwaitingNumber);
        assert_eq!(m.step(), State::AwaitingNumber);
        assert_eq!(m.step(), State::AwaitingOperator);
        assert_eq!(m.step(), State::AwaitingOperator);
        assert_eq!(m.bracket_depth(), 0);
        assert_eq!(m.step(), State::Done);
        assert_eq!(m.step(), State::Done);
        assert_eq!(m.status(), Status::Success);
    }

    #[test]
    fn failure_is_terminal_and_zeroes_value() {
        let mut m = machine("4 x");
        while !m.step().is_terminal() {}
        assert_eq!(m.state(), State::Failed);
        let eval = m.run();
        assert_eq!((eval.value, eval.status), (0.0, Status::SyntaxError));
    }

    #[test]
    fn syntax_fault_does_not_overwrite_math_fault() {
        let mut m = machine("1");
        m.record(Fault::Math);
        m.record(Fault::Syntax);
        assert_eq!(m.status(), Status::MathError);
    }
}
