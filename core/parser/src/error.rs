//! FILENAME: core/parser/src/error.rs
//! PURPOSE: Lexical and syntactic errors for a single notepad line.

use thiserror::Error;

/// Everything that can go wrong before evaluation starts.
/// The Display text is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    // Lexical
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Unexpected character: {0}")]
    UnexpectedCharacter(char),

    #[error("Expected number after $")]
    ExpectedNumberAfterDollar,

    // Syntactic
    #[error("Missing closing )")]
    MissingClosingParen,

    #[error("Unexpected end of input")]
    UnexpectedEndOfInput,

    #[error("Unexpected trailing input")]
    UnexpectedTrailingInput,

    #[error("Unexpected token: {0}")]
    UnexpectedToken(String),

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    // Statement level
    #[error("Invalid assignment target")]
    InvalidAssignmentTarget,

    #[error("Missing assignment expression")]
    MissingAssignmentExpression,

    #[error("Unexpected trailing = in assignment")]
    TrailingAssignment,

    #[error("Cannot assign to reserved name: {0}")]
    ReservedName(String),
}

pub type ParseResult<T> = Result<T, ParseError>;
