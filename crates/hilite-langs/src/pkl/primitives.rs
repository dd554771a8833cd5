//! Leaf rules: identifiers, numbers, comments.

use hilite_core::{MatchRule, Pattern, Rule, SpanRule, VariantGroup};

pub const IDENTIFIER_RE: &str = "[a-zA-Z_][a-zA-Z0-9_]*";
pub const QUOTED_IDENTIFIER_RE: &str = "`[^`]+`";

const DECIMAL_DIGITS: &str = "(?:[0-9]_*)+";
const HEX_DIGITS: &str = "(?:[0-9a-fA-F]_*)+";

/// Bare or back-quoted identifier, tagged `title`.
///
/// Only the bare form can be a reserved word.
pub fn identifier() -> Rule {
    VariantGroup::new(vec![
        MatchRule::new(IDENTIFIER_RE).keyword_sensitive().into(),
        MatchRule::new(QUOTED_IDENTIFIER_RE).into(),
    ])
    .scope("title")
    .into()
}

/// Back-quoted name in expression position, as one untagged token.
pub fn quoted_identifier() -> Rule {
    MatchRule::new(QUOTED_IDENTIFIER_RE).into()
}

/// Decimal, hex, octal and binary literals, in that order.
pub fn number() -> Rule {
    let decimal = Pattern::concat([
        r"\b",
        DECIMAL_DIGITS,
        r"(?:\.",
        DECIMAL_DIGITS,
        r")?(?:[eE][+-]?",
        DECIMAL_DIGITS,
        r")?\b",
    ]);
    let hex = Pattern::concat([
        r"\b0x",
        HEX_DIGITS,
        r"(?:\.",
        HEX_DIGITS,
        r")?(?:[pP][+-]?",
        DECIMAL_DIGITS,
        r")?\b",
    ]);

    VariantGroup::new(vec![
        MatchRule::new(decimal).into(),
        MatchRule::new(hex).into(),
        MatchRule::new(r"\b0o(?:[0-7]_*)+\b").into(),
        MatchRule::new(r"\b0b(?:[01]_*)+\b").into(),
    ])
    .scope("number")
    .into()
}

pub fn doc_comment() -> Rule {
    SpanRule::new("///", "$").scope("doctag").into()
}

pub fn line_comment() -> Rule {
    SpanRule::new("//", "$").scope("comment").into()
}

pub fn block_comment() -> Rule {
    SpanRule::new(r"/\*", r"\*/").scope("comment").into()
}
