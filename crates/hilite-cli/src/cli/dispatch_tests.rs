//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Unified flags: highlight/trace accept each other's flags without error
//! 2. Help visibility: hidden flags don't appear in --help
//! 3. Conflicts: inline source vs. path, grammar file vs. language name
//! 4. Params extraction: correct fields are extracted from ArgMatches

use std::path::PathBuf;

use hilite_vm::{FuelLimits, Verbosity};

use super::*;
use crate::cli::commands::{check_command, dump_command, highlight_command, trace_command};
use crate::commands::highlight::HighlightArgs;
use crate::commands::trace::TraceArgs;

#[test]
fn subcommand_is_required() {
    assert!(build_cli().try_get_matches_from(["hilite"]).is_err());
}

#[test]
fn highlight_accepts_trace_flags() {
    let result =
        highlight_command().try_get_matches_from(["highlight", "a.pkl", "-vv", "--no-result"]);
    assert!(
        result.is_ok(),
        "highlight should accept trace flags: {:?}",
        result.err()
    );

    let params = HighlightParams::from_matches(&result.unwrap());
    assert_eq!(params.source_path, Some(PathBuf::from("a.pkl")));
    // verbose and no_result are parsed but not in HighlightParams
}

#[test]
fn trace_accepts_highlight_flags() {
    let result = trace_command().try_get_matches_from(["trace", "a.pkl", "--json", "--compact"]);
    assert!(
        result.is_ok(),
        "trace should accept highlight flags: {:?}",
        result.err()
    );

    let params = TraceParams::from_matches(&result.unwrap());
    assert_eq!(params.source_path, Some(PathBuf::from("a.pkl")));
}

#[test]
fn inline_source_conflicts_with_path() {
    let result = highlight_command().try_get_matches_from(["highlight", "a.pkl", "-s", "x = 1"]);
    assert!(result.is_err());
}

#[test]
fn grammar_file_conflicts_with_lang() {
    let result =
        check_command().try_get_matches_from(["check", "-l", "pkl", "--grammar", "g.json"]);
    assert!(result.is_err());
}

#[test]
fn color_rejects_unknown_value() {
    let result =
        check_command().try_get_matches_from(["check", "-l", "pkl", "--color", "sometimes"]);
    assert!(result.is_err());
}

#[test]
fn highlight_help_hides_trace_flags() {
    let help = highlight_command().render_help().to_string();

    assert!(
        !help.contains("--no-result"),
        "highlight help should not show --no-result"
    );
    assert!(
        !help.contains("Verbosity level"),
        "highlight help should not show -v"
    );
    assert!(help.contains("--json"), "highlight help should show --json");
}

#[test]
fn trace_help_hides_output_flags() {
    let help = trace_command().render_help().to_string();

    assert!(!help.contains("--json"), "trace help should not show --json");
    assert!(
        !help.contains("--compact"),
        "trace help should not show --compact"
    );
    assert!(help.contains("--no-result"), "trace help should show --no-result");
}

#[test]
fn dump_help_hides_color() {
    let help = dump_command().render_help().to_string();
    assert!(!help.contains("--color"), "dump help should not show --color");
    assert!(help.contains("--grammar"), "dump help should show --grammar");
}

#[test]
fn check_params_extracts_grammar_file() {
    let m = check_command()
        .try_get_matches_from(["check", "--grammar", "g.json", "--color", "never"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.lang, None);
    assert_eq!(params.grammar, Some(PathBuf::from("g.json")));
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn dump_params_extracts_lang() {
    let m = dump_command()
        .try_get_matches_from(["dump", "-l", "pkl"])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.lang.as_deref(), Some("pkl"));
    assert_eq!(params.grammar, None);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn highlight_params_extracts_all_fields() {
    let m = highlight_command()
        .try_get_matches_from([
            "highlight",
            "a.pkl",
            "--json",
            "--compact",
            "--fuel",
            "10",
            "--color",
            "always",
        ])
        .unwrap();
    let params = HighlightParams::from_matches(&m);

    assert_eq!(params.source_path, Some(PathBuf::from("a.pkl")));
    assert_eq!(params.source_text, None);
    assert!(params.json);
    assert!(params.compact);
    assert_eq!(params.fuel, 10);
    assert_eq!(params.color, ColorChoice::Always);

    let args: HighlightArgs = params.into();
    assert!(!args.pretty);
    assert!(args.color);
}

#[test]
fn highlight_fuel_defaults() {
    let m = highlight_command()
        .try_get_matches_from(["highlight", "-s", "x", "-l", "pkl"])
        .unwrap();
    let params = HighlightParams::from_matches(&m);

    assert_eq!(params.fuel, FuelLimits::default().get_exec_fuel());
    assert_eq!(params.source_text.as_deref(), Some("x"));
    assert!(!params.json);
}

#[test]
fn trace_params_extracts_all_fields() {
    let m = trace_command()
        .try_get_matches_from([
            "trace",
            "-s",
            "x = 1",
            "-l",
            "pkl",
            "-vv",
            "--fuel",
            "500",
            "--color",
            "never",
            "--no-result",
        ])
        .unwrap();
    let params = TraceParams::from_matches(&m);

    assert_eq!(params.source_text.as_deref(), Some("x = 1"));
    assert_eq!(params.lang.as_deref(), Some("pkl"));
    assert_eq!(params.verbose, 2);
    assert_eq!(params.fuel, 500);
    assert!(params.no_result);

    let args: TraceArgs = params.into();
    assert_eq!(args.verbosity, Verbosity::VeryVerbose);
    assert!(!args.color);
}

#[test]
fn trace_fuel_defaults() {
    let m = trace_command()
        .try_get_matches_from(["trace", "a.pkl"])
        .unwrap();
    let params = TraceParams::from_matches(&m);

    assert_eq!(params.fuel, FuelLimits::default().get_exec_fuel());
}

#[test]
fn single_v_is_verbose() {
    let m = trace_command()
        .try_get_matches_from(["trace", "a.pkl", "-v"])
        .unwrap();
    let args: TraceArgs = TraceParams::from_matches(&m).into();
    assert_eq!(args.verbosity, Verbosity::Verbose);
}
