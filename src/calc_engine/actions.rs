use log::debug;

use super::fsm::{Action, Machine};
use super::ops::{Operator, StackOp};
use super::stack::StackError;
use super::status::{Fault, Status};
use super::token::scan_number;

impl From<StackError> for Fault {
    fn from(_: StackError) -> Self {
        Fault::Allocation
    }
}

impl Machine<'_> {
    pub(super) fn dispatch(&mut self, action: Action) -> Result<(), Fault> {
        match action {
            Action::ParseNumber => self.parse_number(),
            Action::PushOperator(op) => self.push_operator(op),
            Action::OpenBracket => self.open_bracket(),
            Action::CloseBracket => self.close_bracket(),
            Action::SkipSpace => {
                self.advance(1);
                Ok(())
            }
            Action::Finish => self.finish(),
            Action::Fail => Err(Fault::Syntax),
        }
    }

    fn parse_number(&mut self) -> Result<(), Fault> {
        let rest = self.rest();
        let len = scan_number(rest).ok_or(Fault::Syntax)?;
        let number: f64 = rest[..len].parse().map_err(|_| Fault::Syntax)?;
        self.operands.push(number)?;
        self.advance(len);
        Ok(())
    }

    fn push_operator(&mut self, op: Operator) -> Result<(), Fault> {
        let top = self.operators.peek().and_then(StackOp::precedence);
        if top.is_some_and(|rank| rank > op.precedence()) {
            self.fold()?;
        }
        self.operators.push(StackOp::Binary(op))?;
        self.advance(1);
        Ok(())
    }

    fn open_bracket(&mut self) -> Result<(), Fault> {
        self.operators.push(StackOp::OpenBracket)?;
        self.brackets += 1;
        self.advance(1);
        Ok(())
    }

    /// A bracket directly on top means the group held a lone literal, which
    /// is rejected.
    fn close_bracket(&mut self) -> Result<(), Fault> {
        self.brackets -= 1;
        if self.operators.peek() == Some(StackOp::OpenBracket) {
            return Err(Fault::Syntax);
        }

        self.fold()?;
        if self.operators.peek() == Some(StackOp::OpenBracket) {
            self.operators.pop();
        }
        self.advance(1);
        Ok(())
    }

    fn finish(&mut self) -> Result<(), Fault> {
        if self.brackets != 0 {
            debug!("unbalanced brackets at end of input: {}", self.brackets);
            self.value = 0.0;
            self.status = Status::SyntaxError;
        }

        self.fold()?;

        if self.status.is_success() {
            self.value = self.operands.peek().ok_or(Fault::Syntax)?;
        }
        if !self.operators.is_empty() {
            self.operands.pop();
        }
        Ok(())
    }
}
