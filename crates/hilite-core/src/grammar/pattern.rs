//! Regex patterns with an optional trailing lookahead.
//!
//! The Rust regex engines have no look-around, so a pattern keeps its
//! lookahead apart from the body. Matching checks the lookahead, anchored,
//! right after the body's match. The rendered form used in the JSON contract
//! is `body(?=lookahead)`.

use std::fmt;

/// A regex body plus an optional zero-width lookahead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    body: String,
    lookahead: Option<String>,
}

impl Pattern {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            lookahead: None,
        }
    }

    /// Pure lookahead: matches the empty string when `lookahead` follows.
    pub fn lookahead(lookahead: impl Into<String>) -> Self {
        Self {
            body: String::new(),
            lookahead: Some(lookahead.into()),
        }
    }

    /// Concatenate regex fragments into one body.
    pub fn concat<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let body = fragments
            .into_iter()
            .fold(String::new(), |mut acc, fragment| {
                acc.push_str(fragment.as_ref());
                acc
            });
        Self::new(body)
    }

    /// Whole-word alternation of literal words: `\b(?:a|b)\b`.
    ///
    /// Only for words made of word characters; `\b` never matches after `*`.
    pub fn keywords(words: &[&str]) -> Self {
        let alternation = words
            .iter()
            .map(|w| regex_syntax::escape(w))
            .collect::<Vec<_>>()
            .join("|");
        Self::new(format!(r"\b(?:{alternation})\b"))
    }

    pub fn followed_by(mut self, lookahead: impl Into<String>) -> Self {
        self.lookahead = Some(lookahead.into());
        self
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn lookahead_body(&self) -> Option<&str> {
        self.lookahead.as_deref()
    }

    /// Render as a single regex source with `(?=…)` for the lookahead.
    pub fn render(&self) -> String {
        match &self.lookahead {
            Some(la) => format!("{}(?={})", self.body, la),
            None => self.body.clone(),
        }
    }

    /// Inverse of [`Pattern::render`]: split off a top-level trailing `(?=…)`.
    pub fn parse_rendered(source: &str) -> Self {
        match split_trailing_lookahead(source) {
            Some((body, la)) => Self::new(body).followed_by(la),
            None => Self::new(source),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for Pattern {
    fn from(body: &str) -> Self {
        Self::new(body)
    }
}

impl From<String> for Pattern {
    fn from(body: String) -> Self {
        Self::new(body)
    }
}

fn split_trailing_lookahead(source: &str) -> Option<(&str, &str)> {
    let bytes = source.as_bytes();
    let last = bytes.len().checked_sub(1)?;
    if bytes[last] != b')' {
        return None;
    }

    let mut depth = 0usize;
    let mut in_class = false;
    let mut escaped = false;
    let mut group_start = None;

    for (i, &b) in bytes.iter().enumerate() {
        if escaped {
            escaped = false;
            continue;
        }
        match b {
            b'\\' => escaped = true,
            b'[' if !in_class => in_class = true,
            b']' if in_class => in_class = false,
            _ if in_class => {}
            b'(' => {
                if depth == 0 {
                    group_start = Some(i);
                }
                depth += 1;
            }
            b')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 && i == last {
                    let start = group_start?;
                    let group = &source[start..];
                    return group
                        .starts_with("(?=")
                        .then(|| (&source[..start], &source[start + 3..last]));
                }
            }
            _ => {}
        }
    }

    None
}
