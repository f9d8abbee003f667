use std::fmt;

use thiserror::Error;

/// Outcome classification of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    /// Division by zero or a zero base raised to a negative power.
    MathError,
    /// The internal stacks could not be reserved or outgrew the depth limit.
    AllocationError,
    /// Malformed token sequence or unbalanced brackets.
    SyntaxError,
}

impl Status {
    pub fn is_success(self) -> bool {
        self == Status::Success
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::MathError => "math error",
            Status::AllocationError => "allocation error",
            Status::SyntaxError => "syntax error",
        }
    }

    /// `None` for [`Status::Success`].
    pub fn as_error(self) -> Option<CalcError> {
        match self {
            Status::Success => None,
            Status::MathError => Some(CalcError::Math),
            Status::AllocationError => Some(CalcError::Allocation),
            Status::SyntaxError => Some(CalcError::Syntax),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("math error: division by zero or invalid power")]
    Math,
    #[error("syntax error: malformed expression")]
    Syntax,
    #[error("allocation error: evaluation stack unavailable")]
    Allocation,
}

impl CalcError {
    pub fn status(self) -> Status {
        match self {
            CalcError::Math => Status::MathError,
            CalcError::Syntax => Status::SyntaxError,
            CalcError::Allocation => Status::AllocationError,
        }
    }
}

/// Failure raised by an action; the driver turns it into a [`Status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Fault {
    Syntax,
    Math,
    Allocation,
}

impl From<Fault> for Status {
    fn from(fault: Fault) -> Self {
        match fault {
            Fault::Syntax => Status::SyntaxError,
            Fault::Math => Status::MathError,
            Fault::Allocation => Status::AllocationError,
        }
    }
}
