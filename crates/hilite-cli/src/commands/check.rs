use std::path::PathBuf;

use hilite_core::Colors;
use hilite_core::grammar::validate;

use super::lang_resolver::require_lang;
use super::{CliError, exit_with};

pub struct CheckArgs {
    pub lang: Option<String>,
    pub grammar: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    if let Err(e) = execute(&args) {
        exit_with(e, Colors::new(args.color));
    }

    // Silent on success (like cargo check)
}

pub fn execute(args: &CheckArgs) -> Result<(), CliError> {
    let lang = require_lang(args.grammar.as_deref(), args.lang.as_deref(), None, "check")?;
    validate(&lang).map_err(|defects| CliError::Defects {
        name: lang.name.clone(),
        defects,
    })
}
