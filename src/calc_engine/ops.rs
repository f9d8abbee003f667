use std::fmt;

/// Binary operators understood by the engine.
///
/// Every operator has its own rank; equal ranks never force a fold, so a
/// chain of the same operator is collapsed right to left at the next fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            '^' => Some(Operator::Power),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Power => '^',
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add => 0,
            Operator::Subtract => 1,
            Operator::Multiply => 2,
            Operator::Divide => 3,
            Operator::Power => 4,
        }
    }

    /// Applies the operator with `a` being the most recently pushed operand
    /// (divisor / exponent position) and `b` the one pushed before it.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Operator::Add => b + a,
            Operator::Subtract => b - a,
            Operator::Multiply => b * a,
            Operator::Divide => b / a,
            Operator::Power => b.powf(a),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Entry of the operator stack: a pending operator or the `(` boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackOp {
    Binary(Operator),
    OpenBracket,
}

impl StackOp {
    pub fn is_bracket(self) -> bool {
        matches!(self, StackOp::OpenBracket)
    }

    pub fn precedence(self) -> Option<u8> {
        match self {
            StackOp::Binary(op) => Some(op.precedence()),
            StackOp::OpenBracket => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operand_order_puts_divisor_first() {
        assert_eq!(Operator::Subtract.apply(2.0, 10.0), 8.0);
        assert_eq!(Operator::Divide.apply(4.0, 2.0), 0.5);
        assert_eq!(Operator::Power.apply(3.0, 2.0), 8.0);
        assert_eq!(Operator::Add.apply(1.5, 2.0), 3.5);
        assert_eq!(Operator::Multiply.apply(-3.0, 2.0), -6.0);
    }

    #[test]
    fn ranks_are_distinct_and_ordered() {
        let ranks: Vec<u8> = "+-*/^"
            .chars()
            .filter_map(Operator::from_char)
            .map(Operator::precedence)
            .collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn bracket_has_no_rank() {
        assert_eq!(StackOp::OpenBracket.precedence(), None);
        assert_eq!(StackOp::Binary(Operator::Power).precedence(), Some(4));
        assert!(Operator::from_char('(').is_none());
    }
}
