//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors that pull relevant fields (ignoring hidden ones)
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use hilite_vm::{FuelLimits, Verbosity};

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::highlight::HighlightArgs;
use crate::commands::trace::TraceArgs;

pub struct LangsParams;

impl LangsParams {
    pub fn from_matches(_m: &ArgMatches) -> Self {
        Self
    }
}

pub struct DumpParams {
    pub lang: Option<String>,
    pub grammar: Option<PathBuf>,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            lang: m.get_one::<String>("lang").cloned(),
            grammar: m.get_one::<PathBuf>("grammar").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            lang: p.lang,
            grammar: p.grammar,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub lang: Option<String>,
    pub grammar: Option<PathBuf>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            lang: m.get_one::<String>("lang").cloned(),
            grammar: m.get_one::<PathBuf>("grammar").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            lang: p.lang,
            grammar: p.grammar,
            color: p.color.should_colorize(),
        }
    }
}

pub struct HighlightParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub lang: Option<String>,
    pub grammar: Option<PathBuf>,
    pub json: bool,
    pub compact: bool,
    pub fuel: u32,
    pub color: ColorChoice,
    // Note: verbose and no_result are parsed but not extracted (unified flags)
}

impl HighlightParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            // Input
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            lang: m.get_one::<String>("lang").cloned(),
            grammar: m.get_one::<PathBuf>("grammar").cloned(),

            // Output options
            json: m.get_flag("json"),
            compact: m.get_flag("compact"),
            fuel: parse_fuel(m),
            color: parse_color(m),
        }
    }
}

impl From<HighlightParams> for HighlightArgs {
    fn from(p: HighlightParams) -> Self {
        // Pretty by default when stdout is a TTY, unless --compact is passed
        let pretty = !p.compact && std::io::IsTerminal::is_terminal(&std::io::stdout());

        Self {
            source_path: p.source_path,
            source_text: p.source_text,
            lang: p.lang,
            grammar: p.grammar,
            json: p.json,
            pretty,
            fuel: p.fuel,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub lang: Option<String>,
    pub grammar: Option<PathBuf>,
    pub verbose: u8,
    pub no_result: bool,
    pub fuel: u32,
    pub color: ColorChoice,
    // Note: json and compact are parsed but not extracted (unified flags)
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            // Input
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            lang: m.get_one::<String>("lang").cloned(),
            grammar: m.get_one::<PathBuf>("grammar").cloned(),

            // Trace options
            verbose: m.get_count("verbose"),
            no_result: m.get_flag("no_result"),
            fuel: parse_fuel(m),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        let verbosity = match p.verbose {
            0 => Verbosity::Default,
            1 => Verbosity::Verbose,
            _ => Verbosity::VeryVerbose,
        };

        Self {
            source_path: p.source_path,
            source_text: p.source_text,
            lang: p.lang,
            grammar: p.grammar,
            verbosity,
            no_result: p.no_result,
            fuel: p.fuel,
            color: p.color.should_colorize(),
        }
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_fuel(m: &ArgMatches) -> u32 {
    m.get_one::<u32>("fuel")
        .copied()
        .unwrap_or_else(|| FuelLimits::default().get_exec_fuel())
}
