//! FILENAME: core/parser/src/statement.rs
//! PURPOSE: Classifies one line of code as empty, an expression, or an
//! assignment.
//! CONTEXT: Runs before the lexer. The first `=` splits the line into an
//! assignment target and the expression source; the expression itself is
//! only tokenized later.

use crate::error::{ParseError, ParseResult};
use crate::lexer::is_identifier;

/// The implicit running block sum. Readable on every line, never assignable.
pub const TOTAL: &str = "total";

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Empty,
    Expression(String),
    Assignment { name: String, expression: String },
}

impl Statement {
    /// The expression source of the statement, if it has one.
    pub fn expression(&self) -> Option<&str> {
        match self {
            Statement::Empty => None,
            Statement::Expression(source) => Some(source),
            Statement::Assignment { expression, .. } => Some(expression),
        }
    }
}

/// Classifies a line's code (comments already removed).
pub fn classify(code: &str) -> ParseResult<Statement> {
    let code = code.trim();
    if code.is_empty() {
        return Ok(Statement::Empty);
    }

    let Some((target, expression)) = code.split_once('=') else {
        return Ok(Statement::Expression(code.to_string()));
    };

    let name = target.trim();
    if !is_identifier(name) {
        return Err(ParseError::InvalidAssignmentTarget);
    }

    let expression = expression.trim();
    if expression.is_empty() {
        return Err(ParseError::MissingAssignmentExpression);
    }
    if expression.contains('=') {
        return Err(ParseError::TrailingAssignment);
    }

    if name == TOTAL {
        return Err(ParseError::ReservedName(TOTAL.to_string()));
    }

    Ok(Statement::Assignment {
        name: name.to_string(),
        expression: expression.to_string(),
    })
}

/// The name a line is trying to assign, even when the rest of the line is
/// malformed (`rate =`, `rate = 1 = 2`). None for expressions and for
/// targets that could never be bound.
pub fn assignment_target(code: &str) -> Option<&str> {
    let (target, _) = code.split_once('=')?;
    let name = target.trim();
    (is_identifier(name) && name != TOTAL).then_some(name)
}
