//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands,
//! so the same definition is reused with different visibility (`.hide(true)`).

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Source file to highlight (positional, `-` for stdin).
pub fn source_path_arg() -> Arg {
    Arg::new("source_path")
        .value_name("SOURCE")
        .value_parser(value_parser!(PathBuf))
        .help("Source file to highlight ('-' for stdin)")
}

/// Inline source text (-s/--source).
pub fn source_text_arg() -> Arg {
    Arg::new("source_text")
        .short('s')
        .long("source")
        .value_name("TEXT")
        .conflicts_with("source_path")
        .help("Inline source text")
}

/// Language flag (-l/--lang).
pub fn lang_arg() -> Arg {
    Arg::new("lang")
        .short('l')
        .long("lang")
        .value_name("LANG")
        .help("Language (inferred from extension if not specified)")
}

/// Grammar JSON file (--grammar).
pub fn grammar_arg() -> Arg {
    Arg::new("grammar")
        .long("grammar")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("lang")
        .help("Load the grammar from a JSON file instead of a built-in language")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Output tokens as JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output tokens as JSON")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for tokens, -vv for whitespace too)")
}

/// Walk fuel limit (--fuel); the walker's own limit when absent.
pub fn fuel_arg() -> Arg {
    Arg::new("fuel")
        .long("fuel")
        .value_name("N")
        .value_parser(value_parser!(u32))
        .help("Maximum consecutive walk steps without progress")
}

/// Skip the token listing after a trace (--no-result).
pub fn no_result_arg() -> Arg {
    Arg::new("no_result")
        .long("no-result")
        .action(ArgAction::SetTrue)
        .help("Print the trace only, without the token listing")
}
