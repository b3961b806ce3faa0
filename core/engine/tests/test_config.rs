//! FILENAME: core/engine/tests/test_config.rs
//! Integration tests for document config and JSON at the UI boundary.

mod common;

use common::TestHarness;
use engine::{evaluate_document, DocumentConfig, InlineNode, LineResult};

#[test]
fn test_default_config() {
    let config = DocumentConfig::default();
    assert_eq!(config.comment_prefixes, vec!["#", "//"]);
    assert!(config.reset_total_on_blank);
}

#[test]
fn test_partial_json_config_uses_defaults() {
    let config = DocumentConfig::from_json(r#"{"comment_prefixes": [";"]}"#).unwrap();
    assert_eq!(config.comment_prefixes, vec![";"]);
    assert!(config.reset_total_on_blank);

    assert_eq!(DocumentConfig::from_json("{}").unwrap(), DocumentConfig::default());
    assert!(DocumentConfig::from_json("not json").is_err());
}

#[test]
fn test_config_round_trips_through_json() {
    let config = DocumentConfig {
        comment_prefixes: vec!["--".to_string()],
        reset_total_on_blank: false,
    };
    assert_eq!(DocumentConfig::from_json(&config.to_json()).unwrap(), config);
}

#[test]
fn test_custom_comment_prefix() {
    let config = DocumentConfig::from_json(r#"{"comment_prefixes": [";"]}"#).unwrap();
    let harness = TestHarness::with_config(config);

    assert_eq!(harness.display("2 ; two\n3\ntotal"), vec!["2", "3", "5"]);
    // `#` is no longer a comment marker
    assert_eq!(harness.display("2 # two"), vec!["(error)"]);
}

#[test]
fn test_blank_lines_can_keep_the_block() {
    let config = DocumentConfig {
        reset_total_on_blank: false,
        ..DocumentConfig::default()
    };
    let harness = TestHarness::with_config(config);

    assert_eq!(harness.display("2\n\n3\ntotal"), vec!["2", "(none)", "3", "5"]);
}

#[test]
fn test_line_results_serialize_for_the_ui() {
    let results = evaluate_document("x = $4 # cost\n1 +");
    let json = serde_json::to_value(&results).unwrap();

    assert_eq!(json[0]["code"], "x = $4");
    assert_eq!(json[0]["value"], "$4");
    assert_eq!(json[0]["quantity"]["unit"], "usd");
    assert_eq!(json[0]["assigned"], "x");
    assert!(json[0]["error"].is_null());
    assert_eq!(json[1]["error"], "Unexpected end of input");

    let back: Vec<LineResult> = serde_json::from_value(json).unwrap();
    assert_eq!(back, results);
}

#[test]
fn test_inline_nodes_serialize_with_type_tags() {
    let node = InlineNode::Comment("# hi".to_string());
    let json = serde_json::to_string(&node).unwrap();
    assert_eq!(json, r##"{"type":"comment","text":"# hi"}"##);
}
