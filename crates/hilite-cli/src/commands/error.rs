use std::path::PathBuf;

use hilite_core::{Defect, GrammarError};
use hilite_vm::RuntimeError;

/// Everything a command can fail with.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("unknown language: '{name}'")]
    UnknownLanguage {
        name: String,
        suggestion: Option<String>,
    },

    #[error("language is required for {command}")]
    LanguageRequired { command: &'static str },

    #[error("cannot infer language from extension '.{ext}'")]
    UnknownExtension { ext: String },

    #[error("either a source file or -s/--source is required")]
    MissingSource,

    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Grammar(#[from] GrammarError),

    #[error("{name}: {} defect(s)", .defects.len())]
    Defects { name: String, defects: Vec<Defect> },

    #[error("walk aborted: {0}")]
    Runtime(#[from] RuntimeError),

    #[error("failed to serialize tokens: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Follow-up text printed after the error line.
    pub fn hint(&self) -> Option<String> {
        match self {
            CliError::UnknownLanguage {
                suggestion: Some(s),
                ..
            } => Some(format!(
                "Did you mean '{s}'?\n\nRun 'hilite langs' for the full list."
            )),
            CliError::UnknownLanguage { .. } => {
                Some("Run 'hilite langs' for the full list.".to_owned())
            }
            CliError::LanguageRequired { .. } | CliError::UnknownExtension { .. } => {
                Some("hint: use -l <language> or --grammar <FILE>".to_owned())
            }
            CliError::Defects { defects, .. } => Some(
                defects
                    .iter()
                    .map(|d| format!("  {d}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            _ => None,
        }
    }
}
