//! Command builders for the CLI.
//!
//! Each command is built from the shared arg builders in `args.rs`.
//! `highlight` and `trace` accept each other's flags, with the irrelevant
//! ones hidden from `--help`.

use clap::Command;

use super::args::*;

/// Add hidden trace args (for commands that don't trace).
fn with_hidden_trace_args(cmd: Command) -> Command {
    cmd.arg(verbose_arg().hide(true))
        .arg(no_result_arg().hide(true))
}

/// Add hidden JSON output args (for commands that print text).
fn with_hidden_json_args(cmd: Command) -> Command {
    cmd.arg(json_arg().hide(true)).arg(compact_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("hilite")
        .about("Declarative highlighting grammars: inspect, validate, run")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(langs_command())
        .subcommand(dump_command())
        .subcommand(check_command())
        .subcommand(highlight_command())
        .subcommand(trace_command())
}

/// List built-in languages.
pub fn langs_command() -> Command {
    Command::new("langs").about("List built-in languages with aliases")
}

/// Print a grammar in the engine's JSON shape.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Print a grammar as engine JSON")
        .override_usage(
            "\
  hilite dump -l <LANG>
  hilite dump --grammar <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  hilite dump -l pkl                  # built-in grammar
  hilite dump --grammar pkl.json      # normalize a grammar file"#,
        )
        .arg(lang_arg())
        .arg(grammar_arg())
        .arg(color_arg().hide(true))
}

/// Validate a grammar.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Check a grammar for construction defects")
        .override_usage(
            "\
  hilite check -l <LANG>
  hilite check --grammar <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  hilite check -l pkl                 # built-in grammar
  hilite check --grammar pkl.json     # grammar file"#,
        )
        .arg(lang_arg())
        .arg(grammar_arg())
        .arg(color_arg())
}

/// Highlight source text.
///
/// Accepts trace flags for a unified CLI experience, but ignores them.
pub fn highlight_command() -> Command {
    let cmd = Command::new("highlight")
        .about("Highlight source text and print its tokens")
        .override_usage(
            "\
  hilite highlight <SOURCE>
  hilite highlight -s <TEXT> -l <LANG>
  hilite highlight <SOURCE> --grammar <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  hilite highlight config.pkl                 # language from extension
  hilite highlight -s 'x = 1' -l pkl          # inline source
  hilite highlight config.pkl --json          # tokens as JSON"#,
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(lang_arg())
        .arg(grammar_arg())
        .arg(json_arg())
        .arg(compact_arg())
        .arg(fuel_arg())
        .arg(color_arg());

    with_hidden_trace_args(cmd)
}

/// Trace a grammar walk for debugging.
///
/// Accepts highlight output flags for a unified CLI experience, but ignores them.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace span entries and exits while highlighting")
        .override_usage(
            "\
  hilite trace <SOURCE>
  hilite trace -s <TEXT> -l <LANG>",
        )
        .after_help(
            r#"EXAMPLES:
  hilite trace config.pkl                     # spans only
  hilite trace config.pkl -v                  # plus tokens
  hilite trace -s '"a\(b)"' -l pkl -vv        # plus whitespace"#,
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(lang_arg())
        .arg(grammar_arg())
        .arg(verbose_arg())
        .arg(no_result_arg())
        .arg(fuel_arg())
        .arg(color_arg());

    with_hidden_json_args(cmd)
}
