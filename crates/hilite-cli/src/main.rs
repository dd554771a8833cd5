mod cli;
mod commands;

use cli::{CheckParams, DumpParams, HighlightParams, LangsParams, TraceParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("langs", m)) => {
            let _params = LangsParams::from_matches(m);
            commands::langs::run();
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("highlight", m)) => {
            let params = HighlightParams::from_matches(m);
            commands::highlight::run(params.into());
        }
        Some(("trace", m)) => {
            let params = TraceParams::from_matches(m);
            commands::trace::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
