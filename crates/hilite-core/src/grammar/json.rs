//! JSON (de)serialization of the engine contract.
//!
//! Rules render as camelCase "mode" objects; back-references render as the
//! strings `"self"` and `"$root"`; patterns render with `(?=…)` lookaheads.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::keywords::KeywordTable;
use super::pattern::Pattern;
use super::types::{Language, MatchRule, Rule, SpanRule, VariantGroup};

const SELF_REF: &str = "self";
const ROOT_REF: &str = "$root";

/// Error while loading or compiling a grammar.
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },
    #[error("malformed rule: {0}")]
    Malformed(String),
}

impl Language {
    /// Parse a grammar from its JSON contract form.
    pub fn from_json(json: &str) -> Result<Self, GrammarError> {
        let raw: RawLanguage = serde_json::from_str(json)?;
        raw.try_into()
    }

    /// Render the JSON contract form, pretty-printed.
    pub fn to_json(&self) -> Result<String, GrammarError> {
        Ok(serde_json::to_string_pretty(&RawLanguage::from(self))?)
    }
}

/// Raw language matching the engine's JSON shape.
#[derive(Debug, Serialize, Deserialize)]
struct RawLanguage {
    name: String,
    #[serde(default)]
    aliases: Vec<String>,
    #[serde(default)]
    keywords: IndexMap<String, Vec<String>>,
    #[serde(default)]
    contains: Vec<RawRule>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum RawRule {
    Reference(String),
    Mode(Box<RawMode>),
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum RawMatch {
    Single(String),
    Parts(Vec<String>),
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    begin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end: Option<String>,
    #[serde(default, rename = "match", skip_serializing_if = "Option::is_none")]
    match_: Option<RawMatch>,
    /// Keys are 1-based part indices; strings because the mode sits in an
    /// untagged enum, where serde cannot parse integer map keys.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    captures: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    variants: Option<Vec<RawRule>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    contains: Vec<RawRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    keywords: Option<IndexMap<String, Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    begin_scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_scope: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    exclude_begin: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    exclude_end: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    return_begin: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    single_line: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    keyword_sensitive: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl From<&Language> for RawLanguage {
    fn from(lang: &Language) -> Self {
        Self {
            name: lang.name.clone(),
            aliases: lang.aliases.clone(),
            keywords: lang.keywords.entries().clone(),
            contains: lang.contains.iter().map(Into::into).collect(),
        }
    }
}

impl From<&Rule> for RawRule {
    fn from(rule: &Rule) -> Self {
        let mode = match rule {
            Rule::SelfRef => return RawRule::Reference(SELF_REF.to_owned()),
            Rule::Root => return RawRule::Reference(ROOT_REF.to_owned()),
            Rule::Match(m) => {
                let mut parts: Vec<String> = m.parts.iter().map(Pattern::render).collect();
                let match_ = if parts.len() == 1 {
                    RawMatch::Single(parts.remove(0))
                } else {
                    RawMatch::Parts(parts)
                };
                RawMode {
                    scope: m.scope.clone(),
                    match_: Some(match_),
                    captures: m
                        .captures
                        .iter()
                        .map(|(part, scope)| (part.to_string(), scope.clone()))
                        .collect(),
                    keyword_sensitive: m.keyword_sensitive,
                    ..RawMode::default()
                }
            }
            Rule::Span(s) => RawMode {
                scope: s.scope.clone(),
                begin: Some(s.begin.render()),
                end: Some(s.end.render()),
                contains: s.contains.iter().map(Into::into).collect(),
                keywords: s.keywords.as_ref().map(|k| k.entries().clone()),
                begin_scope: s.begin_scope.clone(),
                end_scope: s.end_scope.clone(),
                exclude_begin: s.exclude_begin,
                exclude_end: s.exclude_end,
                return_begin: s.return_begin,
                single_line: s.single_line,
                ..RawMode::default()
            },
            Rule::Variants(v) => RawMode {
                scope: v.scope.clone(),
                variants: Some(v.variants.iter().map(Into::into).collect()),
                ..RawMode::default()
            },
        };
        RawRule::Mode(Box::new(mode))
    }
}

impl TryFrom<RawLanguage> for Language {
    type Error = GrammarError;

    fn try_from(raw: RawLanguage) -> Result<Self, Self::Error> {
        Ok(Self {
            name: raw.name,
            aliases: raw.aliases,
            keywords: KeywordTable::from_entries(raw.keywords),
            contains: convert_all(raw.contains)?,
        })
    }
}

fn convert_all(raw: Vec<RawRule>) -> Result<Vec<Rule>, GrammarError> {
    raw.into_iter().map(Rule::try_from).collect()
}

impl TryFrom<RawRule> for Rule {
    type Error = GrammarError;

    fn try_from(raw: RawRule) -> Result<Self, Self::Error> {
        let mode = match raw {
            RawRule::Reference(name) => {
                return match name.as_str() {
                    SELF_REF => Ok(Rule::SelfRef),
                    ROOT_REF => Ok(Rule::Root),
                    other => Err(GrammarError::Malformed(format!(
                        "unknown reference `{other}`"
                    ))),
                };
            }
            RawRule::Mode(mode) => *mode,
        };

        if let Some(variants) = mode.variants {
            return Ok(Rule::Variants(VariantGroup {
                scope: mode.scope,
                variants: convert_all(variants)?,
            }));
        }

        if let Some(match_) = mode.match_ {
            let parts = match match_ {
                RawMatch::Single(source) => vec![Pattern::parse_rendered(&source)],
                RawMatch::Parts(sources) => sources
                    .iter()
                    .map(|s| Pattern::parse_rendered(s))
                    .collect(),
            };
            let captures = mode
                .captures
                .into_iter()
                .map(|(part, scope)| {
                    part.parse::<usize>()
                        .map(|part| (part, scope))
                        .map_err(|_| GrammarError::Malformed(format!("capture key `{part}`")))
                })
                .collect::<Result<_, _>>()?;
            return Ok(Rule::Match(MatchRule {
                scope: mode.scope,
                parts,
                captures,
                keyword_sensitive: mode.keyword_sensitive,
            }));
        }

        match (mode.begin, mode.end) {
            (Some(begin), Some(end)) => Ok(Rule::Span(SpanRule {
                scope: mode.scope,
                begin: Pattern::parse_rendered(&begin),
                end: Pattern::parse_rendered(&end),
                contains: convert_all(mode.contains)?,
                keywords: mode.keywords.map(KeywordTable::from_entries),
                begin_scope: mode.begin_scope,
                end_scope: mode.end_scope,
                exclude_begin: mode.exclude_begin,
                exclude_end: mode.exclude_end,
                return_begin: mode.return_begin,
                single_line: mode.single_line,
            })),
            (Some(_), None) => Err(GrammarError::Malformed(
                "span rule without `end`".to_owned(),
            )),
            (None, _) => Err(GrammarError::Malformed(
                "rule needs one of `match`, `begin`/`end` or `variants`".to_owned(),
            )),
        }
    }
}
