pub mod check;
pub mod dump;
pub mod highlight;
pub mod lang_resolver;
pub mod langs;
pub mod source_loader;
pub mod trace;

mod error;

#[cfg(test)]
mod highlight_tests;
#[cfg(test)]
mod test_utils;

use hilite_core::Colors;

pub use error::CliError;

/// Print `error: …` (and a hint, if any) to stderr and exit with status 1.
pub fn exit_with(err: CliError, colors: Colors) -> ! {
    eprintln!("{}: {}", colors.alert("error"), err);
    if let Some(hint) = err.hint() {
        eprintln!();
        eprintln!("{hint}");
    }
    std::process::exit(1)
}
