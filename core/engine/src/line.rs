//! FILENAME: core/engine/src/line.rs
//! PURPOSE: Splits a raw document line into code and comment nodes.
//! CONTEXT: The evaluator only ever sees the code part. A comment starts at
//! the first comment marker and runs to end of line.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "lowercase")]
pub enum InlineNode {
    Code(String),
    Comment(String),
}

/// Splits `line` at the earliest of `comment_prefixes`.
pub fn split_line(line: &str, comment_prefixes: &[String]) -> Vec<InlineNode> {
    let comment_start = comment_prefixes
        .iter()
        .filter(|prefix| !prefix.is_empty())
        .filter_map(|prefix| line.find(prefix.as_str()))
        .min();

    let (code, comment) = match comment_start {
        Some(index) => line.split_at(index),
        None => (line, ""),
    };

    let mut nodes = Vec::new();
    if !code.is_empty() {
        nodes.push(InlineNode::Code(code.to_string()));
    }
    if !comment.is_empty() {
        nodes.push(InlineNode::Comment(comment.to_string()));
    }
    nodes
}

/// The code-only text of a split line.
pub fn code_text(nodes: &[InlineNode]) -> String {
    nodes
        .iter()
        .filter_map(|node| match node {
            InlineNode::Code(text) => Some(text.as_str()),
            InlineNode::Comment(_) => None,
        })
        .collect()
}

/// True when the line holds a comment and nothing else.
pub fn is_comment_only(nodes: &[InlineNode]) -> bool {
    nodes.iter().any(|node| matches!(node, InlineNode::Comment(_)))
        && code_text(nodes).trim().is_empty()
}
