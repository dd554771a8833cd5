//! Construction-defect checks.
//!
//! A grammar never fails on input text; it can only be built wrong. The
//! checks here catch the defects that would make a walker misbehave:
//! unparseable patterns, a span whose children swallow its own end, and a
//! variant group whose earlier alternative hides a later one.
//!
//! Overlap checks use witnesses: exact prefix literals extracted from the
//! later pattern with `regex-syntax`, matched anchored by the earlier one.
//! Patterns without exact literals (`[a-z]+`, `\d+`) yield no witness and are
//! not checked.

use regex_syntax::ParserBuilder;
use regex_syntax::hir::literal::{ExtractKind, Extractor};

use super::matcher::MatcherSet;
use super::pattern::Pattern;
use super::types::{Language, Rule, SpanRule};

/// A grammar construction defect. `path` locates the rule, e.g.
/// `contains[3].variants[1]`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Defect {
    #[error("{path}: invalid pattern `{pattern}`: {message}")]
    InvalidPattern {
        path: String,
        pattern: String,
        message: String,
    },
    #[error("{path}: match rule has no parts")]
    EmptyMatch { path: String },
    #[error("{path}: lookahead on part {part}, only the last part may look ahead")]
    MisplacedLookahead { path: String, part: usize },
    #[error("{path}: variant group has no alternatives")]
    EmptyVariants { path: String },
    #[error("{path}: `self` reference outside of any span")]
    DanglingSelf { path: String },
    #[error("{path}: end `{end}` is swallowed by child {child} on `{witness}`")]
    SwallowedEnd {
        path: String,
        end: String,
        child: String,
        witness: String,
    },
    #[error("{path}: alternative {earlier} shadows alternative {later} on `{witness}`")]
    ShadowedAlternative {
        path: String,
        earlier: usize,
        later: usize,
        witness: String,
    },
}

/// Check a language for construction defects.
pub fn validate(language: &Language) -> Result<(), Vec<Defect>> {
    let mut validator = Validator {
        language,
        matchers: MatcherSet::new(),
        defects: Vec::new(),
    };

    for (i, rule) in language.contains.iter().enumerate() {
        validator.compile(rule, &format!("contains[{i}]"));
    }
    for (i, rule) in language.contains.iter().enumerate() {
        validator.check(rule, &format!("contains[{i}]"), None);
    }

    if validator.defects.is_empty() {
        Ok(())
    } else {
        Err(validator.defects)
    }
}

struct Validator<'a> {
    language: &'a Language,
    matchers: MatcherSet,
    defects: Vec<Defect>,
}

/// A rule's leading pattern list, with a display label.
struct Leaf<'a> {
    label: String,
    patterns: &'a [Pattern],
}

impl<'a> Validator<'a> {
    fn compile(&mut self, rule: &'a Rule, path: &str) {
        match rule {
            Rule::Match(m) => self.compile_list(&m.parts, path),
            Rule::Span(s) => {
                self.compile_list(std::slice::from_ref(&s.begin), path);
                self.compile_list(std::slice::from_ref(&s.end), path);
                for (i, child) in s.contains.iter().enumerate() {
                    self.compile(child, &format!("{path}.contains[{i}]"));
                }
            }
            Rule::Variants(v) => {
                for (i, alt) in v.variants.iter().enumerate() {
                    self.compile(alt, &format!("{path}.variants[{i}]"));
                }
            }
            Rule::SelfRef | Rule::Root => {}
        }
    }

    fn compile_list(&mut self, patterns: &[Pattern], path: &str) {
        if let Err(e) = self.matchers.insert(patterns) {
            let pattern = patterns
                .iter()
                .map(Pattern::render)
                .collect::<Vec<_>>()
                .join(" ");
            self.defects.push(Defect::InvalidPattern {
                path: path.to_owned(),
                pattern,
                message: e.to_string(),
            });
        }
    }

    fn check(&mut self, rule: &'a Rule, path: &str, enclosing: Option<&'a SpanRule>) {
        match rule {
            Rule::Match(m) => {
                if m.parts.is_empty() {
                    self.defects.push(Defect::EmptyMatch {
                        path: path.to_owned(),
                    });
                }
                let last = m.parts.len().saturating_sub(1);
                for (i, part) in m.parts.iter().enumerate() {
                    if i < last && part.lookahead_body().is_some() {
                        self.defects.push(Defect::MisplacedLookahead {
                            path: path.to_owned(),
                            part: i + 1,
                        });
                    }
                }
            }
            Rule::Span(s) => {
                self.check_end_reachable(s, path);
                for (i, child) in s.contains.iter().enumerate() {
                    self.check(child, &format!("{path}.contains[{i}]"), Some(s));
                }
            }
            Rule::Variants(v) => {
                if v.variants.is_empty() {
                    self.defects.push(Defect::EmptyVariants {
                        path: path.to_owned(),
                    });
                }
                self.check_shadowing(&v.variants, path);
                for (i, alt) in v.variants.iter().enumerate() {
                    self.check(alt, &format!("{path}.variants[{i}]"), enclosing);
                }
            }
            Rule::SelfRef => {
                if enclosing.is_none() {
                    self.defects.push(Defect::DanglingSelf {
                        path: path.to_owned(),
                    });
                }
            }
            Rule::Root => {}
        }
    }

    /// Children are tried before the end at every position, so a child that
    /// matches the end's text keeps the span open forever.
    fn check_end_reachable(&mut self, span: &'a SpanRule, path: &str) {
        let witnesses = exact_prefixes(&span.end);
        if witnesses.is_empty() {
            return;
        }

        let mut leaves = Vec::new();
        self.leaves(&span.contains, Some(span), false, "", &mut leaves);

        for witness in &witnesses {
            for leaf in &leaves {
                if self.matches_non_empty(leaf.patterns, witness) {
                    self.defects.push(Defect::SwallowedEnd {
                        path: path.to_owned(),
                        end: span.end.render(),
                        child: leaf.label.clone(),
                        witness: witness.clone(),
                    });
                }
            }
        }
    }

    fn check_shadowing(&mut self, alternatives: &'a [Rule], path: &str) {
        let leaves: Vec<Vec<Leaf<'a>>> = alternatives
            .iter()
            .map(|alt| {
                let mut out = Vec::new();
                self.leaves(std::slice::from_ref(alt), None, true, "", &mut out);
                out
            })
            .collect();

        for (later, later_leaves) in leaves.iter().enumerate() {
            let witnesses: Vec<String> = later_leaves
                .iter()
                .flat_map(|leaf| exact_prefixes(&joined(leaf.patterns)))
                .collect();

            'earlier: for (earlier, earlier_leaves) in leaves.iter().enumerate().take(later) {
                for witness in &witnesses {
                    if earlier_leaves
                        .iter()
                        .any(|leaf| self.matches_non_empty(leaf.patterns, witness))
                    {
                        self.defects.push(Defect::ShadowedAlternative {
                            path: path.to_owned(),
                            earlier,
                            later,
                            witness: witness.clone(),
                        });
                        continue 'earlier;
                    }
                }
            }
        }
    }

    /// Flatten rules into the pattern lists a walker would try first.
    fn leaves(
        &self,
        rules: &'a [Rule],
        this: Option<&'a SpanRule>,
        in_root: bool,
        prefix: &str,
        out: &mut Vec<Leaf<'a>>,
    ) {
        for (i, rule) in rules.iter().enumerate() {
            let label = format!("{prefix}[{i}]");
            match rule {
                Rule::Match(m) => out.push(Leaf {
                    label,
                    patterns: &m.parts,
                }),
                Rule::Span(s) => out.push(Leaf {
                    label,
                    patterns: std::slice::from_ref(&s.begin),
                }),
                Rule::Variants(v) => self.leaves(&v.variants, this, in_root, &label, out),
                Rule::SelfRef => {
                    if let Some(span) = this {
                        out.push(Leaf {
                            label: format!("{label}(self)"),
                            patterns: std::slice::from_ref(&span.begin),
                        });
                    }
                }
                Rule::Root => {
                    if !in_root {
                        let root_prefix = format!("{label}$root");
                        self.leaves(&self.language.contains, None, true, &root_prefix, out);
                    }
                }
            }
        }
    }

    fn matches_non_empty(&self, patterns: &[Pattern], haystack: &str) -> bool {
        self.matchers
            .match_at(patterns, haystack, 0)
            .is_some_and(|m| !m.is_empty())
    }
}

fn joined(patterns: &[Pattern]) -> Pattern {
    Pattern::concat(patterns.iter().map(|p| format!("(?:{})", p.body())))
}

/// Exact, non-empty prefix literals of the pattern's leading regex.
///
/// A pure lookahead contributes its lookahead body instead.
fn exact_prefixes(pattern: &Pattern) -> Vec<String> {
    let source = match (pattern.body(), pattern.lookahead_body()) {
        ("", Some(la)) => la,
        (body, _) => body,
    };

    let Ok(hir) = ParserBuilder::new().multi_line(true).build().parse(source) else {
        return Vec::new();
    };

    let seq = Extractor::new().kind(ExtractKind::Prefix).extract(&hir);
    let Some(literals) = seq.literals() else {
        return Vec::new();
    };

    literals
        .iter()
        .filter(|lit| lit.is_exact() && !lit.as_bytes().is_empty())
        .filter_map(|lit| String::from_utf8(lit.as_bytes().to_vec()).ok())
        .collect()
}
