//! FILENAME: core/parser/src/ast.rs
//! PURPOSE: Defines the expression tree for a single notepad line.
//! CONTEXT: The Parser builds this tree from tokens; the Evaluator walks it.
//! A tree is owned by the parse call that built it and dropped after
//! evaluation.

use crate::units::Unit;
use crate::value::Value;

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    /// A number literal with its unit (`5`, `$5`, `5 cm`).
    Literal(Value),

    /// A variable reference, including the implicit `total`.
    Identifier(String),

    /// op operand (e.g., -5, +x).
    UnaryOp {
        op: UnaryOperator,
        operand: Box<Expression>,
    },

    /// left op right (e.g., 5 + 3, 2 ^ 8).
    BinaryOp {
        left: Box<Expression>,
        op: BinaryOperator,
        right: Box<Expression>,
    },

    /// A function call like max(a, b) or round(x).
    FunctionCall { name: String, args: Vec<Expression> },

    /// `operand to unit` / `operand in unit`.
    Conversion {
        operand: Box<Expression>,
        target: Unit,
    },
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum BinaryOperator {
    Add,      // +
    Subtract, // -
    Multiply, // *
    Divide,   // /
    Power,    // ^ (right associative)
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum UnaryOperator {
    Plus,   // +
    Negate, // -
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOperator::Add => write!(f, "+"),
            BinaryOperator::Subtract => write!(f, "-"),
            BinaryOperator::Multiply => write!(f, "*"),
            BinaryOperator::Divide => write!(f, "/"),
            BinaryOperator::Power => write!(f, "^"),
        }
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOperator::Plus => write!(f, "+"),
            UnaryOperator::Negate => write!(f, "-"),
        }
    }
}
