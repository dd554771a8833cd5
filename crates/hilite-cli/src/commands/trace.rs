//! Trace a grammar walk for debugging.

use std::path::PathBuf;

use hilite_core::Colors;
use hilite_vm::{FuelLimits, Highlight, PrintTracer, RuntimeError, Verbosity, Walker};

use super::lang_resolver::require_lang;
use super::source_loader::load_source;
use super::{CliError, exit_with};

pub struct TraceArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub lang: Option<String>,
    pub grammar: Option<PathBuf>,
    pub verbosity: Verbosity,
    pub no_result: bool,
    pub fuel: u32,
    pub color: bool,
}

/// The collected trace, and how the walk ended.
pub struct TraceOutput {
    pub trace: String,
    pub outcome: Result<Highlight, RuntimeError>,
}

pub fn run(args: TraceArgs) {
    let colors = Colors::new(args.color);
    let TraceOutput { trace, outcome } = match execute(&args) {
        Ok(output) => output,
        Err(e) => exit_with(e, colors),
    };

    // The trace is printed even when the walk aborts: it shows where.
    print!("{trace}");
    let highlight = match outcome {
        Ok(highlight) => highlight,
        Err(e) => exit_with(e.into(), colors),
    };

    if args.no_result {
        return;
    }
    println!("{}", colors.dimmed("---"));
    print!("{}", highlight.render(colors));
}

pub fn execute(args: &TraceArgs) -> Result<TraceOutput, CliError> {
    let lang = require_lang(
        args.grammar.as_deref(),
        args.lang.as_deref(),
        args.source_path.as_deref(),
        "trace",
    )?;
    let source = load_source(args.source_path.as_deref(), args.source_text.as_deref())?;

    let walker = Walker::new(&lang)?.limits(FuelLimits::new().exec_fuel(args.fuel));
    let mut tracer = PrintTracer::new(args.verbosity, Colors::new(args.color));
    let outcome = walker.walk_traced(&source, &mut tracer);

    Ok(TraceOutput {
        trace: tracer.dump(),
        outcome,
    })
}
