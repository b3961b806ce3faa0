//! FILENAME: core/parser/src/token.rs
//! PURPOSE: Token definitions for the notepad lexer.
//! CONTEXT: Tokens are the atomic units produced by the lexer and consumed by
//! the parser. They live for the duration of one line's evaluation.

use crate::value::Value;

/// Tokens recognized by the lexer.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    /// Number literal with its unit already attached (`5`, `$5`, `5 cm`, `10%`).
    Number(Value),
    Identifier(String),

    // Operators
    Plus,
    Minus,
    Asterisk,
    Slash,
    Caret,

    // Delimiters
    LParen,
    RParen,
    Comma,

    EOF,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(v) => write!(f, "{}", v),
            Token::Identifier(s) => write!(f, "{}", s),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Asterisk => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Caret => write!(f, "^"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
            Token::EOF => write!(f, "end of input"),
        }
    }
}
