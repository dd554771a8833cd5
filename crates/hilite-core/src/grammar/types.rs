//! Grammar type definitions.

use std::collections::BTreeMap;

use super::keywords::KeywordTable;
use super::pattern::Pattern;

/// A registered grammar: what a hosting engine is handed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    /// Display name (e.g., "Pkl").
    pub name: String,
    /// Alternate lookup names, lowercase.
    pub aliases: Vec<String>,
    /// Language-wide keyword table, active in the root context.
    pub keywords: KeywordTable,
    /// Root rules, in precedence order.
    pub contains: Vec<Rule>,
}

impl Language {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            keywords: KeywordTable::new(),
            contains: Vec::new(),
        }
    }

    pub fn aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|a| (*a).to_owned()).collect();
        self
    }

    pub fn keywords(mut self, keywords: KeywordTable) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn contains(mut self, rules: Vec<Rule>) -> Self {
        self.contains = rules;
        self
    }

    /// Whether `name` is the display name or one of the aliases (ASCII case-insensitive).
    pub fn answers_to(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }

    /// Every pattern list in the tree, in definition order.
    ///
    /// Back-references are not followed, so each rule is visited once.
    pub fn pattern_lists(&self) -> Vec<&[Pattern]> {
        let mut out = Vec::new();
        for rule in &self.contains {
            rule.collect_pattern_lists(&mut out);
        }
        out
    }
}

/// Grammar rule variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Single pattern (or ordered parts) emitting one token per part.
    Match(MatchRule),
    /// Begin/end bounded region with its own child rules.
    Span(SpanRule),
    /// Alternatives tried in order; first match wins.
    Variants(VariantGroup),
    /// The innermost enclosing span, for self-nesting regions (`<A<B>>`).
    SelfRef,
    /// The language's root rule list, for regions embedding the whole grammar.
    Root,
}

impl Rule {
    /// Classification tag declared on the rule itself.
    pub fn scope(&self) -> Option<&str> {
        match self {
            Rule::Match(m) => m.scope.as_deref(),
            Rule::Span(s) => s.scope.as_deref(),
            Rule::Variants(v) => v.scope.as_deref(),
            Rule::SelfRef | Rule::Root => None,
        }
    }

    fn collect_pattern_lists<'a>(&'a self, out: &mut Vec<&'a [Pattern]>) {
        match self {
            Rule::Match(m) => out.push(&m.parts),
            Rule::Span(s) => {
                out.push(std::slice::from_ref(&s.begin));
                out.push(std::slice::from_ref(&s.end));
                for child in &s.contains {
                    child.collect_pattern_lists(out);
                }
            }
            Rule::Variants(v) => {
                for alt in &v.variants {
                    alt.collect_pattern_lists(out);
                }
            }
            Rule::SelfRef | Rule::Root => {}
        }
    }
}

/// One pattern, or several parts matched back to back.
///
/// Multi-part rules tag each part through `captures` (1-based part index);
/// parts without an entry are left unclassified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRule {
    pub scope: Option<String>,
    pub parts: Vec<Pattern>,
    pub captures: BTreeMap<usize, String>,
    /// Let the active keyword table reclassify an exact keyword match.
    pub keyword_sensitive: bool,
}

impl MatchRule {
    pub fn new(pattern: impl Into<Pattern>) -> Self {
        Self::parts([pattern.into()])
    }

    pub fn parts(parts: impl IntoIterator<Item = Pattern>) -> Self {
        Self {
            scope: None,
            parts: parts.into_iter().collect(),
            captures: BTreeMap::new(),
            keyword_sensitive: false,
        }
    }

    pub fn scope(mut self, scope: &str) -> Self {
        self.scope = Some(scope.to_owned());
        self
    }

    pub fn capture(mut self, part: usize, scope: &str) -> Self {
        self.captures.insert(part, scope.to_owned());
        self
    }

    pub fn keyword_sensitive(mut self) -> Self {
        self.keyword_sensitive = true;
        self
    }
}

impl From<MatchRule> for Rule {
    fn from(rule: MatchRule) -> Self {
        Rule::Match(rule)
    }
}

/// Begin/end region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanRule {
    pub scope: Option<String>,
    pub begin: Pattern,
    pub end: Pattern,
    pub contains: Vec<Rule>,
    /// Own keyword table; `None` means no keyword classification inside,
    /// unless the span embeds [`Rule::Root`].
    pub keywords: Option<KeywordTable>,
    /// Tag for the begin delimiter token.
    pub begin_scope: Option<String>,
    /// Tag for the end delimiter token.
    pub end_scope: Option<String>,
    /// Begin text is emitted outside the span.
    pub exclude_begin: bool,
    /// End text is emitted outside the span.
    pub exclude_end: bool,
    /// Begin text is not consumed; child rules scan it again.
    pub return_begin: bool,
    /// The span cannot cross a line break.
    pub single_line: bool,
}

impl SpanRule {
    pub fn new(begin: impl Into<Pattern>, end: impl Into<Pattern>) -> Self {
        Self {
            scope: None,
            begin: begin.into(),
            end: end.into(),
            contains: Vec::new(),
            keywords: None,
            begin_scope: None,
            end_scope: None,
            exclude_begin: false,
            exclude_end: false,
            return_begin: false,
            single_line: false,
        }
    }

    pub fn scope(mut self, scope: &str) -> Self {
        self.scope = Some(scope.to_owned());
        self
    }

    pub fn contains(mut self, rules: Vec<Rule>) -> Self {
        self.contains = rules;
        self
    }

    pub fn keywords(mut self, keywords: KeywordTable) -> Self {
        self.keywords = Some(keywords);
        self
    }

    pub fn begin_scope(mut self, scope: &str) -> Self {
        self.begin_scope = Some(scope.to_owned());
        self
    }

    pub fn end_scope(mut self, scope: &str) -> Self {
        self.end_scope = Some(scope.to_owned());
        self
    }

    pub fn exclude_begin(mut self) -> Self {
        self.exclude_begin = true;
        self
    }

    pub fn exclude_end(mut self) -> Self {
        self.exclude_end = true;
        self
    }

    pub fn return_begin(mut self) -> Self {
        self.return_begin = true;
        self
    }

    pub fn single_line(mut self) -> Self {
        self.single_line = true;
        self
    }

    /// Whether the children embed the whole grammar.
    pub fn embeds_root(&self) -> bool {
        self.contains.iter().any(|r| matches!(r, Rule::Root))
    }
}

impl From<SpanRule> for Rule {
    fn from(rule: SpanRule) -> Self {
        Rule::Span(rule)
    }
}

/// Ordered alternatives sharing a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantGroup {
    /// Inherited by alternatives that declare no tag of their own.
    pub scope: Option<String>,
    pub variants: Vec<Rule>,
}

impl VariantGroup {
    pub fn new(variants: Vec<Rule>) -> Self {
        Self {
            scope: None,
            variants,
        }
    }

    pub fn scope(mut self, scope: &str) -> Self {
        self.scope = Some(scope.to_owned());
        self
    }
}

impl From<VariantGroup> for Rule {
    fn from(group: VariantGroup) -> Self {
        Rule::Variants(group)
    }
}
