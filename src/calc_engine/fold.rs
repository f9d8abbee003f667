use log::debug;

use super::fsm::Machine;
use super::ops::{Operator, StackOp};
use super::status::Fault;

impl Machine<'_> {
    /// Applies pending operators until the operator stack is empty, its top
    /// is a bracket, or fewer than two operands remain.
    ///
    /// `/` directly above another `/` folds as `*`, so `a/b/c` collapses to
    /// `a / (b * c)`.
    pub(super) fn fold(&mut self) -> Result<(), Fault> {
        while self.operands.len() >= 2 {
            let Some(StackOp::Binary(popped)) = self.operators.peek() else {
                break;
            };
            self.operators.pop();
            let a = self.operands.pop().ok_or(Fault::Syntax)?;
            let b = self.operands.pop().ok_or(Fault::Syntax)?;

            let op = match (popped, self.operators.peek()) {
                (Operator::Divide, Some(StackOp::Binary(Operator::Divide))) => Operator::Multiply,
                _ => popped,
            };

            match op {
                Operator::Divide if a == 0.0 => {
                    debug!("division by zero: {} / {}", b, a);
                    return Err(Fault::Math);
                }
                Operator::Power if a < 0.0 && b == 0.0 => {
                    debug!("zero raised to negative power: {} ^ {}", b, a);
                    return Err(Fault::Math);
                }
                _ => {}
            }

            let result = op.apply(a, b);
            self.trace.add_fold(op, a, b, result);
            self.operands.push(result)?;
        }
        Ok(())
    }
}
