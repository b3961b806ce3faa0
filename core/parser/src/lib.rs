//! FILENAME: core/parser/src/lib.rs
//! PURPOSE: Library root for the Calcpad line parser.
//! CONTEXT: This crate turns one line of notepad text into an expression
//! tree. It knows nothing about documents, variables or formatting; those
//! live in the engine crate.
//!
//! PIPELINE: Line --> Statement --> Lexer --> Tokens --> Parser --> AST --> Evaluator
//!
//! SUPPORTED FEATURES:
//! - Arithmetic: +, -, *, /, ^ (power, right associative)
//! - Unary plus and minus
//! - Number literals with thousands separators: 1,250.5
//! - Currency literals: $12.50
//! - Unit suffixes: 5 cm, 2 sq m, 3 gal, 20 c, 15%
//! - Conversions: 5 km to mi, 100 f in c
//! - Variables and function calls: max(a, b)
//! - Assignments: name = expression

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod statement;
pub mod token;
pub mod units;
pub mod value;


// Re-export commonly used types for convenience
pub use ast::{BinaryOperator, Expression, UnaryOperator};
pub use error::{ParseError, ParseResult};
pub use lexer::{is_identifier, tokenize, Lexer};
pub use parser::{parse, Parser};
pub use statement::{assignment_target, classify, Statement, TOTAL};
pub use token::Token;
pub use units::{FixedUnit, Length, Measure, Temperature, Unit};
pub use value::Value;
