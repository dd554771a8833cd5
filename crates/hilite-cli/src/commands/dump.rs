use std::path::PathBuf;

use hilite_core::Colors;

use super::lang_resolver::require_lang;
use super::{CliError, exit_with};

pub struct DumpArgs {
    pub lang: Option<String>,
    pub grammar: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    match execute(&args) {
        Ok(json) => println!("{json}"),
        Err(e) => exit_with(e, Colors::new(args.color)),
    }
}

pub fn execute(args: &DumpArgs) -> Result<String, CliError> {
    let lang = require_lang(args.grammar.as_deref(), args.lang.as_deref(), None, "dump")?;
    Ok(lang.to_json()?)
}
