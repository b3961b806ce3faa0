//! FILENAME: core/engine/src/error.rs
//! PURPOSE: Semantic errors raised while evaluating an expression tree, and
//! the combined error type for a whole line.

use parser::{ParseError, Unit};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Undefined variable: {0}")]
    UndefinedVariable(String),

    #[error("Unit mismatch")]
    UnitMismatch,

    #[error("Cannot multiply two unit values")]
    MultiplyUnits,

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Cannot exponentiate unit values")]
    ExponentiateUnits,

    #[error("Invalid exponentiation")]
    InvalidExponentiation,

    /// Overflow to infinity in +, -, * or /.
    #[error("Number out of range")]
    OutOfRange,

    #[error("{name} expects {expected} argument{}", plural(.expected))]
    Arity { name: String, expected: usize },

    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("Cannot convert {from} to {to}")]
    IncompatibleConversion { from: Unit, to: Unit },
}

fn plural(count: &usize) -> &'static str {
    if *count == 1 {
        ""
    } else {
        "s"
    }
}

/// Any failure on a single line, from tokenizing to evaluation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error(transparent)]
    Syntax(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}
