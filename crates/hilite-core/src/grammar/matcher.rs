//! Anchored matching for patterns and multi-part pattern lists.
//!
//! A pattern list compiles to one regex `(?P<part1>…)(?P<part2>…)…` plus the
//! last part's lookahead. The lookahead is checked after the body's
//! leftmost-first match; the body is not re-tried with shorter matches.

use std::collections::HashMap;
use std::ops::Range;

use regex_automata::meta::Regex;
use regex_automata::util::syntax;
use regex_automata::{Anchored, Input};

use super::json::GrammarError;
use super::pattern::Pattern;
use super::types::Language;

/// Compiled pattern list.
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
    lookahead: Option<Regex>,
    parts: usize,
}

/// Result of an anchored match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    pub range: Range<usize>,
    parts: Vec<Option<Range<usize>>>,
}

impl PatternMatch {
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Range of part `index` (1-based), if the part participated.
    pub fn part(&self, index: usize) -> Option<Range<usize>> {
        self.parts.get(index.checked_sub(1)?).cloned().flatten()
    }
}

impl Matcher {
    pub fn compile(parts: &[Pattern]) -> Result<Self, GrammarError> {
        let body: String = parts
            .iter()
            .enumerate()
            .map(|(i, p)| format!("(?P<part{}>{})", i + 1, p.body()))
            .collect();
        let regex = build(&body)?;
        let lookahead = parts
            .last()
            .and_then(Pattern::lookahead_body)
            .map(build)
            .transpose()?;

        Ok(Self {
            regex,
            lookahead,
            parts: parts.len(),
        })
    }

    /// Match starting exactly at byte offset `at`.
    ///
    /// Look-behind assertions (`^`, `\b`) see the text before `at`.
    pub fn match_at(&self, haystack: &str, at: usize) -> Option<PatternMatch> {
        let input = Input::new(haystack).range(at..).anchored(Anchored::Yes);
        let mut caps = self.regex.create_captures();
        self.regex.search_captures(&input, &mut caps);
        let m = caps.get_match()?;

        if let Some(la) = &self.lookahead {
            let rest = Input::new(haystack)
                .range(m.end()..)
                .anchored(Anchored::Yes);
            if !la.is_match(rest) {
                return None;
            }
        }

        let parts = (1..=self.parts)
            .map(|i| {
                caps.get_group_by_name(&format!("part{i}"))
                    .map(|span| span.range())
            })
            .collect();

        Some(PatternMatch {
            range: m.range(),
            parts,
        })
    }
}

fn build(source: &str) -> Result<Regex, GrammarError> {
    Regex::builder()
        .syntax(syntax::Config::new().multi_line(true).crlf(true))
        .build(source)
        .map_err(|e| GrammarError::InvalidPattern {
            pattern: source.to_owned(),
            message: e.to_string(),
        })
}

/// Matchers for every pattern list of a language, keyed by the list itself.
#[derive(Debug, Default)]
pub struct MatcherSet {
    matchers: HashMap<Vec<Pattern>, Matcher>,
}

impl MatcherSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile every pattern list reachable from the language's root.
    pub fn for_language(language: &Language) -> Result<Self, GrammarError> {
        let mut set = Self::new();
        for parts in language.pattern_lists() {
            set.insert(parts)?;
        }
        Ok(set)
    }

    pub fn insert(&mut self, parts: &[Pattern]) -> Result<(), GrammarError> {
        if !self.matchers.contains_key(parts) {
            let matcher = Matcher::compile(parts)?;
            self.matchers.insert(parts.to_vec(), matcher);
        }
        Ok(())
    }

    pub fn get(&self, parts: &[Pattern]) -> Option<&Matcher> {
        self.matchers.get(parts)
    }

    /// Anchored match of a pattern list; `None` if it never was compiled.
    pub fn match_at(&self, parts: &[Pattern], haystack: &str, at: usize) -> Option<PatternMatch> {
        self.get(parts)?.match_at(haystack, at)
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}
