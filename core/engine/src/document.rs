//! FILENAME: core/engine/src/document.rs
//! PURPOSE: Evaluates a whole notepad document, line by line.
//! CONTEXT: Called by the UI once per edit. Every pass starts from a fresh
//! environment, so repeated passes over the same text give the same
//! results. Each line sees the variables assigned on earlier lines plus
//! `total`, the running sum of the current block (a run of non-blank lines;
//! comment-only lines do not end a block).
//!
//! FLOW PER LINE:
//!   raw line --> split comments --> classify --> parse --> evaluate --> format
//!
//! An error on one line never stops the pass. A failed assignment leaves its
//! name unbound unless the caller asks for recovery on the active line. That
//! covers unfinished assignments such as `rate =` as well, since the target
//! is already known.

use crate::config::DocumentConfig;
use crate::error::CalcError;
use crate::evaluator::{add_values, Environment, Evaluator};
use crate::line::{code_text, is_comment_only, split_line};
use crate::number_format::format_value;
use log::{debug, trace, warn};
use parser::{assignment_target, classify, parse, ParseError, Statement, Value, TOTAL};
use serde::{Deserialize, Serialize};

/// Outcome of evaluating a single line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineEvaluation {
    Empty,
    Expression(Result<Value, CalcError>),
    Assignment {
        name: String,
        result: Result<Value, CalcError>,
    },
    StatementError(ParseError),
}

impl LineEvaluation {
    pub fn value(&self) -> Option<Value> {
        match self {
            LineEvaluation::Expression(Ok(value)) => Some(*value),
            LineEvaluation::Assignment { result: Ok(value), .. } => Some(*value),
            _ => None,
        }
    }

    /// The user-facing message, if the line failed.
    pub fn error(&self) -> Option<String> {
        match self {
            LineEvaluation::Expression(Err(e)) => Some(e.to_string()),
            LineEvaluation::Assignment { result: Err(e), .. } => Some(e.to_string()),
            LineEvaluation::StatementError(e) => Some(e.to_string()),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error().is_some()
    }
}

/// Per-line output handed to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineResult {
    /// The code part of the line, comments removed and trimmed.
    pub code: String,
    /// Formatted result, None for empty and failed lines.
    pub value: Option<String>,
    pub error: Option<String>,
    /// Unformatted result, for the caller's last-known-good table.
    pub quantity: Option<Value>,
    /// Assignment target, if the line is an assignment.
    pub assigned: Option<String>,
}

impl LineResult {
    fn new(code: String, evaluation: &LineEvaluation) -> Self {
        let quantity = evaluation.value();
        let assigned = match evaluation {
            LineEvaluation::Assignment { name, .. } => Some(name.clone()),
            _ => None,
        };

        LineResult {
            code,
            value: quantity.as_ref().map(format_value),
            error: evaluation.error(),
            quantity,
            assigned,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Caller-held state for masking a broken line while it is being edited.
#[derive(Debug, Clone, Default)]
pub struct Recovery {
    /// Index of the line holding the caret.
    pub active_line: Option<usize>,
    /// Last successful assignment of each line (target and value), by line
    /// index. None for lines that did not assign.
    pub last_known: Vec<Option<(String, Value)>>,
}

impl Recovery {
    pub fn new(active_line: usize, last_known: Vec<Option<(String, Value)>>) -> Self {
        Recovery {
            active_line: Some(active_line),
            last_known,
        }
    }

    /// Builds the table from the previous pass's results.
    pub fn from_results(active_line: usize, previous: &[LineResult]) -> Self {
        Recovery::new(
            active_line,
            previous
                .iter()
                .map(|result| result.assigned.clone().zip(result.quantity))
                .collect(),
        )
    }

    /// The value `name` held on line `index` last time, if that line is the
    /// active one and it assigned the same name.
    fn fallback_for(&self, index: usize, name: &str) -> Option<Value> {
        if self.active_line != Some(index) {
            return None;
        }
        match self.last_known.get(index)? {
            Some((known, value)) if known == name => Some(*value),
            _ => None,
        }
    }
}

/// Tokenizes, parses and evaluates one expression source.
pub fn evaluate_expression(source: &str, env: &Environment) -> Result<Value, CalcError> {
    let expr = parse(source)?;
    Ok(Evaluator::new(env).evaluate(&expr)?)
}

/// Evaluates one line of code against `env`, binding the target of a
/// successful assignment.
pub fn evaluate_line(code: &str, env: &mut Environment) -> LineEvaluation {
    match classify(code) {
        Ok(statement) => evaluate_statement(statement, env),
        Err(e) => LineEvaluation::StatementError(e),
    }
}

fn evaluate_statement(statement: Statement, env: &mut Environment) -> LineEvaluation {
    match statement {
        Statement::Empty => LineEvaluation::Empty,
        Statement::Expression(source) => {
            LineEvaluation::Expression(evaluate_expression(&source, env))
        }
        Statement::Assignment { name, expression } => {
            let result = evaluate_expression(&expression, env);
            if let Ok(value) = &result {
                env.insert(name.clone(), *value);
            }
            LineEvaluation::Assignment { name, result }
        }
    }
}

/// Runs full passes over documents.
#[derive(Debug, Clone, Default)]
pub struct DocumentEvaluator {
    config: DocumentConfig,
}

impl DocumentEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DocumentConfig) -> Self {
        DocumentEvaluator { config }
    }

    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    pub fn evaluate(&self, text: &str) -> Vec<LineResult> {
        self.evaluate_with_recovery(text, &Recovery::default())
    }

    pub fn evaluate_with_recovery(&self, text: &str, recovery: &Recovery) -> Vec<LineResult> {
        let mut env = Environment::new();
        let mut block_total = Value::ZERO;
        let mut results = Vec::new();

        for (index, raw) in text.lines().enumerate() {
            let nodes = split_line(raw, &self.config.comment_prefixes);
            let code = code_text(&nodes).trim().to_string();

            let blank = code.is_empty() && !is_comment_only(&nodes);
            if blank && self.config.reset_total_on_blank {
                trace!("line {}: blank, block total reset", index);
                block_total = Value::ZERO;
            }
            env.insert(TOTAL.to_string(), block_total);

            let (evaluation, counts_toward_total) = match classify(&code) {
                Ok(statement) => {
                    let counts = statement.expression() != Some(TOTAL);
                    (evaluate_statement(statement, &mut env), counts)
                }
                Err(e) => (LineEvaluation::StatementError(e), false),
            };

            let failed_target = match &evaluation {
                LineEvaluation::Assignment { name, result: Err(_) } => Some(name.as_str()),
                LineEvaluation::StatementError(_) => assignment_target(&code),
                _ => None,
            };
            if let Some(name) = failed_target {
                if let Some(value) = recovery.fallback_for(index, name) {
                    debug!("line {}: keeping last known {} for {}", index, value, name);
                    env.insert(name.to_string(), value);
                }
            }

            if let (Some(value), true) = (evaluation.value(), counts_toward_total) {
                match add_values(block_total, value) {
                    Ok(sum) => block_total = sum,
                    Err(e) => warn!("line {}: not added to total: {}", index, e),
                }
            }

            let result = LineResult::new(code, &evaluation);
            debug!(
                "line {}: value={:?} error={:?}",
                index, result.value, result.error
            );
            results.push(result);
        }

        results
    }
}

/// Evaluates a document with the default config.
pub fn evaluate_document(text: &str) -> Vec<LineResult> {
    DocumentEvaluator::new().evaluate(text)
}
