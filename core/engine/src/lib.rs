//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the notepad engine.
//! CONTEXT: Evaluates parsed lines against a variable environment, formats
//! the results, and runs whole-document passes for the UI. Re-exports the
//! public types used by callers.

pub mod config;
pub mod document;
pub mod error;
pub mod evaluator;
pub mod line;
pub mod number_format;

// Re-export commonly used types at the crate root
pub use config::{ConfigError, DocumentConfig};
pub use document::{
    evaluate_document, evaluate_expression, evaluate_line, DocumentEvaluator, LineEvaluation,
    LineResult, Recovery,
};
pub use error::{CalcError, EvalError};
pub use evaluator::{
    add_values, convert_value, divide_values, multiply_values, power_values, subtract_values,
    Environment, EvalResult, Evaluator,
};
pub use line::{code_text, is_comment_only, split_line, InlineNode};
pub use number_format::{format_currency, format_number, format_value};
pub use parser::{Unit, Value};
