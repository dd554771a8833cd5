//! Keyword tables: classification tag → reserved words.

use indexmap::IndexMap;

/// Ordered mapping from a classification tag (`keyword`, `literal`, …) to the
/// words it claims. The first tag listing a word wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordTable {
    entries: IndexMap<String, Vec<String>>,
}

impl KeywordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add words under `tag`, appending if the tag already exists.
    pub fn with(mut self, tag: &str, words: &[&str]) -> Self {
        self.entries
            .entry(tag.to_owned())
            .or_default()
            .extend(words.iter().map(|w| (*w).to_owned()));
        self
    }

    pub fn from_entries(entries: IndexMap<String, Vec<String>>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &IndexMap<String, Vec<String>> {
        &self.entries
    }

    /// Tag for `word`, if any tag lists it.
    pub fn classify(&self, word: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, words)| words.iter().any(|w| w == word))
            .map(|(tag, _)| tag.as_str())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.classify(word).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Total number of words across all tags.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
