//! Grammar walker.
//!
//! At every position the innermost open span tries its child rules in
//! order, then its end pattern. Text no rule claims accumulates as plain
//! text of the span and is split into keyword tokens when a keyword table is
//! active. Zero-width begins and matches never fire.

use std::ops::Range;

use hilite_core::{
    GrammarError, KeywordTable, Language, MatchRule, MatcherSet, PatternMatch, Rule, SpanRule,
};
use regex_automata::Input;
use regex_automata::meta::Regex;

use super::error::RuntimeError;
use super::frame::{Frame, FrameStack};
use super::highlight::{Highlight, Token};
use super::trace::{NoopTracer, Tracer};

/// Candidate keywords inside plain text.
const WORD: &str = r"\b[A-Za-z_]\w*\b";

/// Runtime limits for a walk.
#[derive(Clone, Copy, Debug)]
pub struct FuelLimits {
    /// Maximum consecutive scan steps that leave the position unchanged
    /// (default: 1,000,000).
    pub(crate) exec_fuel: u32,
    /// Maximum open spans (default: 256).
    pub(crate) nesting_limit: u32,
}

impl Default for FuelLimits {
    fn default() -> Self {
        Self {
            exec_fuel: 1_000_000,
            nesting_limit: 256,
        }
    }
}

impl FuelLimits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.exec_fuel = fuel;
        self
    }

    pub fn nesting_limit(mut self, limit: u32) -> Self {
        self.nesting_limit = limit;
        self
    }

    pub fn get_exec_fuel(&self) -> u32 {
        self.exec_fuel
    }
}

/// A language with every pattern compiled, ready to walk text.
pub struct Walker<'g> {
    language: &'g Language,
    matchers: MatcherSet,
    words: Regex,
    limits: FuelLimits,
}

impl<'g> Walker<'g> {
    pub fn new(language: &'g Language) -> Result<Self, GrammarError> {
        let words = Regex::new(WORD).map_err(|e| GrammarError::InvalidPattern {
            pattern: WORD.to_owned(),
            message: e.to_string(),
        })?;

        Ok(Self {
            language,
            matchers: MatcherSet::for_language(language)?,
            words,
            limits: FuelLimits::default(),
        })
    }

    pub fn limits(mut self, limits: FuelLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn walk(&self, text: &str) -> Result<Highlight, RuntimeError> {
        self.walk_traced(text, &mut NoopTracer)
    }

    pub fn walk_traced<T: Tracer>(
        &self,
        text: &str,
        tracer: &mut T,
    ) -> Result<Highlight, RuntimeError> {
        let mut run = Run {
            walker: self,
            text,
            tracer,
            stack: FrameStack::new(self.language),
            tokens: Vec::new(),
            pos: 0,
            plain_start: 0,
        };
        run.exec()?;
        Ok(Highlight::new(text, run.tokens))
    }
}

/// A rule that fired at the current position.
enum Hit<'g> {
    Match {
        rule: &'g MatchRule,
        scope: Option<&'g str>,
        found: PatternMatch,
    },
    Open {
        span: &'g SpanRule,
        scope: Option<&'g str>,
        found: PatternMatch,
    },
}

struct Run<'w, 'g, 't, T> {
    walker: &'w Walker<'g>,
    text: &'t str,
    tracer: &'w mut T,
    stack: FrameStack<'g>,
    tokens: Vec<Token>,
    pos: usize,
    /// Start of the plain text not yet emitted.
    plain_start: usize,
}

impl<'g, T: Tracer> Run<'_, 'g, '_, T> {
    fn exec(&mut self) -> Result<(), RuntimeError> {
        let limit = self.walker.limits.exec_fuel;
        let mut fuel = limit;
        loop {
            let before = self.pos;
            if !self.step()? {
                break;
            }
            if self.pos > before {
                fuel = limit;
            } else if fuel == 0 {
                return Err(RuntimeError::ExecFuelExhausted);
            } else {
                fuel -= 1;
            }
        }

        while self.stack.depth() > 0 {
            self.close(true);
        }
        Ok(())
    }

    /// One scan step; `false` once the text is exhausted and no span ends.
    fn step(&mut self) -> Result<bool, RuntimeError> {
        if self.pos >= self.text.len() {
            self.flush_plain();
            return Ok(self.try_end());
        }

        if self.at_forbidden_line_break() {
            self.flush_plain();
            self.close(true);
            return Ok(true);
        }

        if let Some(hit) = self.find_child() {
            self.flush_plain();
            self.apply(hit)?;
            return Ok(true);
        }

        if !self.try_end() {
            self.pos += self.text[self.pos..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
        }
        Ok(true)
    }

    fn at_forbidden_line_break(&self) -> bool {
        let frame = self.stack.current();
        frame.span.is_some_and(|s| s.single_line)
            && matches!(self.text.as_bytes()[self.pos], b'\n' | b'\r')
    }

    fn find_child(&self) -> Option<Hit<'g>> {
        let frame = self.stack.current();
        self.try_rules(frame.rules, None, &frame, frame.span.is_none())
    }

    fn try_rules(
        &self,
        rules: &'g [Rule],
        inherited: Option<&'g str>,
        frame: &Frame<'g>,
        in_root: bool,
    ) -> Option<Hit<'g>> {
        let language: &'g Language = self.walker.language;
        rules.iter().find_map(|rule| match rule {
            Rule::Match(m) => self.try_match(m, m.scope.as_deref().or(inherited)),
            Rule::Span(s) => self.try_open(s, s.scope.as_deref().or(inherited)),
            Rule::Variants(v) => {
                self.try_rules(&v.variants, v.scope.as_deref().or(inherited), frame, in_root)
            }
            Rule::SelfRef => frame.span.and_then(|s| self.try_open(s, frame.scope)),
            Rule::Root if !in_root => self.try_rules(&language.contains, None, frame, true),
            Rule::Root => None,
        })
    }

    fn try_match(&self, rule: &'g MatchRule, scope: Option<&'g str>) -> Option<Hit<'g>> {
        let found = self
            .walker
            .matchers
            .match_at(&rule.parts, self.text, self.pos)?;
        (!found.is_empty()).then_some(Hit::Match { rule, scope, found })
    }

    fn try_open(&self, span: &'g SpanRule, scope: Option<&'g str>) -> Option<Hit<'g>> {
        let found = self.walker.matchers.match_at(
            std::slice::from_ref(&span.begin),
            self.text,
            self.pos,
        )?;
        (!found.is_empty()).then_some(Hit::Open { span, scope, found })
    }

    fn apply(&mut self, hit: Hit<'g>) -> Result<(), RuntimeError> {
        match hit {
            Hit::Match { rule, scope, found } => {
                self.emit_match(rule, scope, &found);
                self.pos = found.range.end;
            }
            Hit::Open { span, scope, found } => {
                let begin_scope = span.begin_scope.as_deref();
                if span.return_begin {
                    self.open(span, scope)?;
                } else if span.exclude_begin {
                    let outer = self.stack.current().scope;
                    self.emit(found.range.clone(), begin_scope.or(outer));
                    self.open(span, scope)?;
                    self.pos = found.range.end;
                } else {
                    self.open(span, scope)?;
                    self.emit(found.range.clone(), begin_scope.or(scope));
                    self.pos = found.range.end;
                }
            }
        }
        self.plain_start = self.pos;
        Ok(())
    }

    fn emit_match(&mut self, rule: &'g MatchRule, scope: Option<&'g str>, found: &PatternMatch) {
        let frame = self.stack.current();
        let scope = scope.or(frame.scope);

        if rule.captures.is_empty() {
            let text = &self.text[found.range.clone()];
            let keyword = rule
                .keyword_sensitive
                .then_some(frame.keywords)
                .flatten()
                .and_then(|table| table.classify(text));
            self.emit(found.range.clone(), keyword.or(scope));
            return;
        }

        for index in 1..=rule.parts.len() {
            let Some(range) = found.part(index) else {
                continue;
            };
            let tag = rule.captures.get(&index).map(String::as_str);
            self.emit(range, tag.or(scope));
        }
    }

    fn try_end(&mut self) -> bool {
        let frame = self.stack.current();
        let Some(span) = frame.span else {
            return false;
        };
        let Some(found) =
            self.walker
                .matchers
                .match_at(std::slice::from_ref(&span.end), self.text, self.pos)
        else {
            return false;
        };

        self.flush_plain();
        let end_scope = span.end_scope.as_deref();
        if span.exclude_end {
            self.close(false);
            let outer = self.stack.current().scope;
            self.emit(found.range.clone(), end_scope.or(outer));
        } else {
            self.emit(found.range.clone(), end_scope.or(frame.scope));
            self.close(false);
        }
        self.pos = found.range.end;
        self.plain_start = self.pos;
        true
    }

    fn open(&mut self, span: &'g SpanRule, scope: Option<&'g str>) -> Result<(), RuntimeError> {
        if self.stack.depth() >= self.walker.limits.nesting_limit as usize {
            return Err(RuntimeError::NestingLimitExceeded);
        }

        let language: &'g Language = self.walker.language;
        let keywords = span
            .keywords
            .as_ref()
            .or_else(|| span.embeds_root().then_some(&language.keywords));
        self.stack.push(Frame {
            span: Some(span),
            rules: &span.contains,
            scope,
            keywords,
            first_token: self.tokens.len(),
        });
        self.tracer.trace_open(self.stack.depth(), scope, self.pos);
        Ok(())
    }

    fn close(&mut self, unterminated: bool) {
        let depth = self.stack.depth();
        let Some(frame) = self.stack.pop() else {
            return;
        };
        if unterminated {
            for token in &mut self.tokens[frame.first_token..] {
                token.unterminated = true;
            }
        }
        self.tracer
            .trace_close(depth, frame.scope, self.pos, unterminated);
    }

    fn flush_plain(&mut self) {
        let range = self.plain_start..self.pos;
        self.plain_start = self.pos;
        if range.is_empty() {
            return;
        }

        let frame = self.stack.current();
        match frame.keywords {
            Some(table) if !table.is_empty() => self.emit_words(range, table, frame.scope),
            _ => self.emit(range, frame.scope),
        }
    }

    /// Emit plain text, giving reserved words their table's tag.
    fn emit_words(&mut self, range: Range<usize>, table: &'g KeywordTable, scope: Option<&'g str>) {
        let text = self.text;
        let input = Input::new(text).range(range.clone());
        let words: Vec<Range<usize>> = self
            .walker
            .words
            .find_iter(input)
            .map(|m| m.range())
            .collect();

        let mut cursor = range.start;
        for word in words {
            let Some((end, tag)) = classify_word(text, word.clone(), range.end, table) else {
                continue;
            };
            self.emit(cursor..word.start, scope);
            self.emit(word.start..end, Some(tag));
            cursor = end;
        }
        self.emit(cursor..range.end, scope);
    }

    fn emit(&mut self, range: Range<usize>, scope: Option<&str>) {
        if range.is_empty() {
            return;
        }
        let token = Token {
            range,
            scope: scope.map(str::to_owned),
            path: self.stack.path(),
            unterminated: false,
        };
        self.tracer
            .trace_token(self.stack.depth(), &token, &self.text[token.range.clone()]);
        self.tokens.push(token);
    }
}

/// Tag for a candidate word; a trailing `*` or `?` joins the word when the
/// joined form is reserved (`import*`).
fn classify_word<'k>(
    text: &str,
    word: Range<usize>,
    limit: usize,
    table: &'k KeywordTable,
) -> Option<(usize, &'k str)> {
    if word.end < limit && matches!(text.as_bytes()[word.end], b'*' | b'?') {
        if let Some(tag) = table.classify(&text[word.start..word.end + 1]) {
            return Some((word.end + 1, tag));
        }
    }
    let end = word.end;
    table.classify(&text[word]).map(|tag| (end, tag))
}
