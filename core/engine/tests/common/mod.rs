//! FILENAME: core/engine/tests/common/mod.rs
//! Test harness and fixtures for engine integration tests.

#![allow(dead_code)]

use engine::{DocumentConfig, DocumentEvaluator, LineResult, Recovery};

/// Test harness wrapping a document evaluator.
pub struct TestHarness {
    pub evaluator: DocumentEvaluator,
}

impl TestHarness {
    /// Create a new test harness with the default config.
    pub fn new() -> Self {
        TestHarness {
            evaluator: DocumentEvaluator::new(),
        }
    }

    pub fn with_config(config: DocumentConfig) -> Self {
        TestHarness {
            evaluator: DocumentEvaluator::with_config(config),
        }
    }

    pub fn run(&self, text: &str) -> Vec<LineResult> {
        self.evaluator.evaluate(text)
    }

    /// Formatted value per line; errors show as "(error)".
    pub fn display(&self, text: &str) -> Vec<String> {
        self.run(text).iter().map(display_line).collect()
    }

    /// Formatted value per line, with recovery for `active_line`.
    pub fn display_recovering(&self, text: &str, recovery: &Recovery) -> Vec<String> {
        self.evaluator
            .evaluate_with_recovery(text, recovery)
            .iter()
            .map(display_line)
            .collect()
    }

    /// Formatted result of a single expression line.
    pub fn eval(&self, expression: &str) -> Result<String, String> {
        let results = self.run(expression);
        let line = results.first().ok_or("no line")?;
        match (&line.value, &line.error) {
            (_, Some(error)) => Err(error.clone()),
            (Some(value), None) => Ok(value.clone()),
            (None, None) => Err("empty".to_string()),
        }
    }
}

fn display_line(line: &LineResult) -> String {
    match (&line.value, &line.error) {
        (_, Some(_)) => "(error)".to_string(),
        (Some(value), None) => value.clone(),
        (None, None) => "(none)".to_string(),
    }
}
