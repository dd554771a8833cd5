use std::path::PathBuf;

use hilite_core::Colors;
use hilite_vm::{FuelLimits, Walker};

use super::lang_resolver::require_lang;
use super::source_loader::load_source;
use super::{CliError, exit_with};

pub struct HighlightArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub lang: Option<String>,
    pub grammar: Option<PathBuf>,
    pub json: bool,
    pub pretty: bool,
    pub fuel: u32,
    pub color: bool,
}

pub fn run(args: HighlightArgs) {
    match execute(&args) {
        Ok(output) => print!("{output}"),
        Err(e) => exit_with(e, Colors::new(args.color)),
    }
}

pub fn execute(args: &HighlightArgs) -> Result<String, CliError> {
    let lang = require_lang(
        args.grammar.as_deref(),
        args.lang.as_deref(),
        args.source_path.as_deref(),
        "highlight",
    )?;
    let source = load_source(args.source_path.as_deref(), args.source_text.as_deref())?;

    let walker = Walker::new(&lang)?.limits(FuelLimits::new().exec_fuel(args.fuel));
    let highlight = walker.walk(&source)?;

    if !args.json {
        return Ok(highlight.render(Colors::new(args.color)));
    }
    let mut json = if args.pretty {
        serde_json::to_string_pretty(&highlight)?
    } else {
        serde_json::to_string(&highlight)?
    };
    json.push('\n');
    Ok(json)
}
