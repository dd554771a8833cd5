//! String family.
//!
//! A string fenced with N `#` only closes on the same N, and only escapes
//! and interpolations written with the same N are special inside it. Every
//! rule here takes the width so the three stay paired.

use hilite_core::{MatchRule, Pattern, Rule, SpanRule, VariantGroup};

const QUOTE: &str = "\"";
const TRIPLE_QUOTE: &str = "\"\"\"";

/// Number of `#` fencing a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelimiterWidth {
    Zero,
    One,
    Two,
    Three,
}

impl DelimiterWidth {
    pub const ALL: [Self; 4] = [Self::Zero, Self::One, Self::Two, Self::Three];

    pub fn count(self) -> usize {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// The fence itself: `""`, `"#"`, `"##"` or `"###"`.
    pub fn pounds(self) -> &'static str {
        &"###"[..self.count()]
    }
}

/// `\` + fence + escape code, or `\` + fence + `u{…}`.
pub fn escape(width: DelimiterWidth) -> Rule {
    let pounds = width.pounds();
    VariantGroup::new(vec![
        MatchRule::new(Pattern::concat([r"\\", pounds, r#"[0\\tnr"']"#])).into(),
        MatchRule::new(Pattern::concat([r"\\", pounds, r"u\{[0-9a-fA-F]{1,8}\}"])).into(),
    ])
    .scope("subst")
    .into()
}

/// `\` + fence + `(` … `)`, with the whole grammar active inside.
///
/// Nested parentheses open their own region so an inner `)` does not end
/// the interpolation.
pub fn interpolation(width: DelimiterWidth) -> Rule {
    let parens = SpanRule::new(r"\(", r"\)").contains(vec![Rule::SelfRef, Rule::Root]);

    SpanRule::new(Pattern::concat([r"\\", width.pounds(), r"\("]), r"\)")
        .scope("subst")
        .contains(vec![parens.into(), Rule::Root])
        .into()
}

pub fn multiline(width: DelimiterWidth) -> Rule {
    let pounds = width.pounds();
    SpanRule::new(
        Pattern::concat([pounds, TRIPLE_QUOTE]),
        Pattern::concat([TRIPLE_QUOTE, pounds]),
    )
    .contains(vec![escape(width), interpolation(width)])
    .into()
}

pub fn single_line(width: DelimiterWidth) -> Rule {
    let pounds = width.pounds();
    SpanRule::new(
        Pattern::concat([pounds, QUOTE]),
        Pattern::concat([QUOTE, pounds]),
    )
    .contains(vec![escape(width), interpolation(width)])
    .single_line()
    .into()
}

/// Single-line string without interpolation, for module and import paths.
pub fn constant(width: DelimiterWidth) -> Rule {
    let pounds = width.pounds();
    SpanRule::new(
        Pattern::concat([pounds, QUOTE]),
        Pattern::concat([QUOTE, pounds]),
    )
    .contains(vec![escape(width)])
    .single_line()
    .into()
}

/// Multi-line strings before single-line ones: `"""` starts with `"`.
pub fn string() -> Rule {
    let variants = DelimiterWidth::ALL
        .into_iter()
        .map(multiline)
        .chain(DelimiterWidth::ALL.into_iter().map(single_line))
        .collect();
    VariantGroup::new(variants).scope("string").into()
}

pub fn string_constant() -> Rule {
    let variants = DelimiterWidth::ALL.into_iter().map(constant).collect();
    VariantGroup::new(variants).scope("string").into()
}
