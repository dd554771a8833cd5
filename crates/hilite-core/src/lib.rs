#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for hilite grammars.
//!
//! A grammar is a tree of pattern rules handed to a highlighting engine:
//! - **Model** (`grammar::types`): match rules, span rules, variant groups and
//!   the back-references that make the tree recursive without owning cycles
//! - **Patterns** (`grammar::pattern`, `grammar::matcher`): regex bodies with an
//!   optional trailing lookahead, compiled for anchored matching
//! - **Contract** (`grammar::json`): the camelCase JSON shape engines consume
//! - **Validation** (`grammar::validate`): construction defects such as a span
//!   whose end is swallowed by its own children

pub mod grammar;

mod colors;

pub use colors::Colors;
pub use grammar::{
    Defect, GrammarError, KeywordTable, Language, MatchRule, Matcher, MatcherSet, Pattern,
    PatternMatch, Rule, SpanRule, VariantGroup,
};
