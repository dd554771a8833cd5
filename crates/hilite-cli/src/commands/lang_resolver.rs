use std::path::Path;
use std::sync::Arc;

use hilite_core::Language;
use hilite_langs::Lang;

use super::CliError;
use super::source_loader::read_file;

/// Resolve the grammar a command runs with.
///
/// Precedence: `--grammar` file, then `-l` name, then the source file's
/// extension. `-` (stdin) has no extension to infer from.
pub fn require_lang(
    grammar: Option<&Path>,
    explicit: Option<&str>,
    source_path: Option<&Path>,
    command: &'static str,
) -> Result<Lang, CliError> {
    if let Some(path) = grammar {
        let json = read_file(path)?;
        return Ok(Arc::new(Language::from_json(&json)?));
    }

    if let Some(name) = explicit {
        return resolve_lang_required(name);
    }

    if let Some(path) = source_path
        && path.as_os_str() != "-"
        && let Some(ext) = path.extension().and_then(|e| e.to_str())
    {
        return hilite_langs::from_ext(ext).ok_or_else(|| CliError::UnknownExtension {
            ext: ext.to_owned(),
        });
    }

    Err(CliError::LanguageRequired { command })
}

/// Resolve a language by name or alias.
pub fn resolve_lang_required(name: &str) -> Result<Lang, CliError> {
    hilite_langs::from_name(name).ok_or_else(|| CliError::UnknownLanguage {
        name: name.to_owned(),
        suggestion: suggest_language(name),
    })
}

/// Suggest a similar language name for typos.
pub fn suggest_language(input: &str) -> Option<String> {
    let input_lower = input.to_lowercase();
    hilite_langs::all()
        .iter()
        .flat_map(|lang| {
            std::iter::once(lang.name.to_lowercase()).chain(lang.aliases.iter().cloned())
        })
        .map(|candidate| (levenshtein(&candidate, &input_lower), candidate))
        .filter(|(distance, _)| *distance <= 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate)
}

pub(crate) fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
