use hilite_vm::{RuntimeError, Verbosity};

use super::CliError;
use super::highlight::{HighlightArgs, execute};
use super::test_utils::{LOOPING_GRAMMAR, TINY_GRAMMAR, temp_file};
use super::trace::{self, TraceArgs, TraceOutput};

fn args() -> HighlightArgs {
    HighlightArgs {
        source_path: None,
        source_text: None,
        lang: None,
        grammar: None,
        json: false,
        pretty: false,
        fuel: 1_000_000,
        color: false,
    }
}

fn inline(text: &str) -> HighlightArgs {
    HighlightArgs {
        source_text: Some(text.to_owned()),
        lang: Some("pkl".to_owned()),
        ..args()
    }
}

#[test]
fn infers_language_from_extension() {
    let file = temp_file(".pkl", "x = 1");
    let out = execute(&HighlightArgs {
        source_path: Some(file.path().to_owned()),
        ..args()
    })
    .unwrap();

    insta::assert_snapshot!(out, @r#"
    property "x"
    - "= "
    number "1"
    "#);
}

#[test]
fn inline_source_needs_language() {
    let err = execute(&HighlightArgs {
        source_text: Some("x = 1".to_owned()),
        ..args()
    })
    .unwrap_err();

    assert_eq!(err.to_string(), "language is required for highlight");
    assert_eq!(
        err.hint().as_deref(),
        Some("hint: use -l <language> or --grammar <FILE>")
    );
}

#[test]
fn unknown_extension() {
    let file = temp_file(".txt", "x = 1");
    let err = execute(&HighlightArgs {
        source_path: Some(file.path().to_owned()),
        ..args()
    })
    .unwrap_err();

    assert_eq!(err.to_string(), "cannot infer language from extension '.txt'");
}

#[test]
fn unknown_language_suggests_closest() {
    let err = execute(&HighlightArgs {
        lang: Some("pkll".to_owned()),
        ..inline("x = 1")
    })
    .unwrap_err();

    assert_eq!(err.to_string(), "unknown language: 'pkll'");
    insta::assert_snapshot!(err.hint().unwrap(), @r"
    Did you mean 'pkl'?

    Run 'hilite langs' for the full list.
    ");
}

#[test]
fn missing_source() {
    let err = execute(&HighlightArgs {
        lang: Some("pkl".to_owned()),
        ..args()
    })
    .unwrap_err();
    assert!(matches!(err, CliError::MissingSource));
}

#[test]
fn json_output() {
    let out = execute(&HighlightArgs {
        json: true,
        ..inline("x = \"a")
    })
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["text"], "x = \"a");
    let tokens = value["tokens"].as_array().unwrap();
    assert_eq!(tokens[0]["scope"], "property");
    assert_eq!(tokens[0]["range"], serde_json::json!({ "start": 0, "end": 1 }));
    assert!(tokens[0].get("unterminated").is_none());

    let last = tokens.last().unwrap();
    assert_eq!(last["scope"], "string");
    assert_eq!(last["path"], serde_json::json!(["string"]));
    assert_eq!(last["unterminated"], true);
}

#[test]
fn grammar_file() {
    let file = temp_file(".json", TINY_GRAMMAR);
    let out = execute(&HighlightArgs {
        source_text: Some("let x = 42".to_owned()),
        grammar: Some(file.path().to_owned()),
        ..args()
    })
    .unwrap();

    insta::assert_snapshot!(out, @r#"
    keyword "let"
    - " x = "
    number "42"
    "#);
}

#[test]
fn fuel_exhaustion() {
    let file = temp_file(".json", LOOPING_GRAMMAR);
    let err = execute(&HighlightArgs {
        source_text: Some("a".to_owned()),
        grammar: Some(file.path().to_owned()),
        fuel: 3,
        ..args()
    })
    .unwrap_err();

    assert!(matches!(
        err,
        CliError::Runtime(RuntimeError::ExecFuelExhausted)
    ));
    assert_eq!(
        err.to_string(),
        "walk aborted: runtime execution limit exceeded"
    );
}

fn trace_args(text: &str, fuel: u32) -> TraceArgs {
    TraceArgs {
        source_path: None,
        source_text: Some(text.to_owned()),
        lang: Some("pkl".to_owned()),
        grammar: None,
        verbosity: Verbosity::Default,
        no_result: false,
        fuel,
        color: false,
    }
}

#[test]
fn trace_spans() {
    let TraceOutput { trace, outcome } =
        trace::execute(&trace_args(r#""a\(b)""#, 1_000_000)).unwrap();

    assert!(outcome.unwrap().is_terminated());
    insta::assert_snapshot!(trace, @r"
    > string @0
      > subst @2
      < subst @5
    < string @6
    ");
}

#[test]
fn trace_survives_aborted_walk() {
    let file = temp_file(".json", LOOPING_GRAMMAR);
    let TraceOutput { trace, outcome } = trace::execute(&TraceArgs {
        lang: None,
        grammar: Some(file.path().to_owned()),
        ..trace_args("a", 3)
    })
    .unwrap();

    assert_eq!(outcome.unwrap_err(), RuntimeError::ExecFuelExhausted);
    insta::assert_snapshot!(trace, @r"
    > loop @0
    < loop @0
    > loop @0
    < loop @0
    ");
}
