//! Walk output: classified tokens over the source text.

use std::ops::Range;

use hilite_core::Colors;
use serde::Serialize;

/// A classified slice of the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Byte range in the source.
    pub range: Range<usize>,
    /// Classification tag; `None` for unclassified text.
    pub scope: Option<String>,
    /// Tags of the spans enclosing the token, outermost first.
    pub path: Vec<String>,
    /// The token sits in a span that never saw its end.
    #[serde(skip_serializing_if = "is_false")]
    pub unterminated: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Tokens covering a text, in source order and without gaps.
#[derive(Debug, Clone, Serialize)]
pub struct Highlight {
    text: String,
    tokens: Vec<Token>,
}

impl Highlight {
    pub(crate) fn new(text: &str, tokens: Vec<Token>) -> Self {
        Self {
            text: text.to_owned(),
            tokens,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn text_of(&self, token: &Token) -> &str {
        &self.text[token.range.clone()]
    }

    /// Tag of the first token whose text is exactly `text`.
    pub fn scope_of(&self, text: &str) -> Option<&str> {
        self.tokens
            .iter()
            .find(|t| self.text_of(t) == text)
            .and_then(|t| t.scope.as_deref())
    }

    /// Tags of every token whose text is exactly `text`.
    pub fn scopes_of(&self, text: &str) -> Vec<Option<&str>> {
        self.tokens
            .iter()
            .filter(|t| self.text_of(t) == text)
            .map(|t| t.scope.as_deref())
            .collect()
    }

    /// Token containing byte `offset`.
    pub fn token_at(&self, offset: usize) -> Option<&Token> {
        self.tokens.iter().find(|t| t.range.contains(&offset))
    }

    /// Whether every span that opened also closed.
    pub fn is_terminated(&self) -> bool {
        self.tokens.iter().all(|t| !t.unterminated)
    }

    /// One line per non-blank token: tag, quoted text, enclosing spans.
    pub fn render(&self, colors: Colors) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            let text = self.text_of(token);
            if text.trim().is_empty() {
                continue;
            }
            out.push_str(&colors.tag(token.scope.as_deref()));
            out.push(' ');
            out.push_str(&colors.text(text));
            if !token.path.is_empty() {
                out.push(' ');
                out.push_str(&colors.dimmed(&format!("[{}]", token.path.join(" > "))));
            }
            if token.unterminated {
                out.push(' ');
                out.push_str(&colors.alert("unterminated"));
            }
            out.push('\n');
        }
        out
    }
}
