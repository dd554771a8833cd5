//! Tracing infrastructure for debugging grammar walks.
//!
//! With `NoopTracer` every hook is an empty `#[inline(always)]` function and
//! the calls compile away. `PrintTracer` collects one line per event.

use hilite_core::Colors;

use super::highlight::Token;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Span opens and closes only.
    #[default]
    Default,
    /// (-v) Also non-blank tokens.
    Verbose,
    /// (-vv) Every token, whitespace included.
    VeryVerbose,
}

/// Walk instrumentation hooks.
///
/// `depth` is the number of open spans; for `trace_open` and `trace_close`
/// it counts the span itself.
pub trait Tracer {
    /// A span opened at byte `at`.
    fn trace_open(&mut self, depth: usize, scope: Option<&str>, at: usize);

    /// A span closed at byte `at`.
    fn trace_close(&mut self, depth: usize, scope: Option<&str>, at: usize, unterminated: bool);

    /// A token was emitted.
    fn trace_token(&mut self, depth: usize, token: &Token, text: &str);
}

/// Tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_open(&mut self, _depth: usize, _scope: Option<&str>, _at: usize) {}

    #[inline(always)]
    fn trace_close(&mut self, _depth: usize, _scope: Option<&str>, _at: usize, _unterminated: bool) {
    }

    #[inline(always)]
    fn trace_token(&mut self, _depth: usize, _token: &Token, _text: &str) {}
}

/// Tracer that collects a readable event log.
pub struct PrintTracer {
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            colors,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Collected lines, newline-terminated.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    fn indent(depth: usize) -> String {
        "  ".repeat(depth)
    }
}

impl Tracer for PrintTracer {
    fn trace_open(&mut self, depth: usize, scope: Option<&str>, at: usize) {
        let c = self.colors;
        self.lines.push(format!(
            "{}> {} {}",
            Self::indent(depth.saturating_sub(1)),
            c.tag(scope),
            c.dimmed(&format!("@{at}")),
        ));
    }

    fn trace_close(&mut self, depth: usize, scope: Option<&str>, at: usize, unterminated: bool) {
        let c = self.colors;
        let mut line = format!(
            "{}< {} {}",
            Self::indent(depth.saturating_sub(1)),
            c.tag(scope),
            c.dimmed(&format!("@{at}")),
        );
        if unterminated {
            line.push(' ');
            line.push_str(&c.alert("unterminated"));
        }
        self.lines.push(line);
    }

    fn trace_token(&mut self, depth: usize, token: &Token, text: &str) {
        let show = match self.verbosity {
            Verbosity::Default => false,
            Verbosity::Verbose => !text.trim().is_empty(),
            Verbosity::VeryVerbose => true,
        };
        if !show {
            return;
        }

        let c = self.colors;
        self.lines.push(format!(
            "{}{} {}",
            Self::indent(depth),
            c.tag(token.scope.as_deref()),
            c.text(text),
        ));
    }
}
