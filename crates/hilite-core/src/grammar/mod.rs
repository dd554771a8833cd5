//! Grammar types for declarative highlighting grammars.
//!
//! This module provides the rule tree a hosting engine walks, with JSON
//! (de)serialization of the engine contract and structural validation.

mod json;
mod keywords;
mod matcher;
mod pattern;
mod types;
mod validate;

#[cfg(test)]
mod json_tests;

pub use json::GrammarError;
pub use keywords::KeywordTable;
pub use matcher::{Matcher, MatcherSet, PatternMatch};
pub use pattern::Pattern;
pub use types::{Language, MatchRule, Rule, SpanRule, VariantGroup};
pub use validate::{Defect, validate};
