//! Open-span stack.
//!
//! The bottom frame stands for the language root and is never popped.

use hilite_core::{KeywordTable, Language, Rule, SpanRule};

/// One open region.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'g> {
    /// `None` for the root frame.
    pub span: Option<&'g SpanRule>,
    pub rules: &'g [Rule],
    /// Effective tag: the span's own, or the one inherited from its group.
    pub scope: Option<&'g str>,
    /// Table used for plain text and keyword-sensitive matches.
    pub keywords: Option<&'g KeywordTable>,
    /// Index of the first token emitted while this frame was open.
    pub first_token: usize,
}

#[derive(Debug)]
pub struct FrameStack<'g> {
    frames: Vec<Frame<'g>>,
}

impl<'g> FrameStack<'g> {
    pub fn new(language: &'g Language) -> Self {
        Self {
            frames: vec![Frame {
                span: None,
                rules: &language.contains,
                scope: None,
                keywords: Some(&language.keywords),
                first_token: 0,
            }],
        }
    }

    pub fn push(&mut self, frame: Frame<'g>) {
        self.frames.push(frame);
    }

    /// Pop the innermost span; the root frame stays.
    pub fn pop(&mut self) -> Option<Frame<'g>> {
        if self.frames.len() > 1 {
            self.frames.pop()
        } else {
            None
        }
    }

    pub fn current(&self) -> Frame<'g> {
        self.frames[self.frames.len() - 1]
    }

    /// Number of open spans.
    pub fn depth(&self) -> usize {
        self.frames.len() - 1
    }

    /// Tags of the open spans, outermost first.
    pub fn path(&self) -> Vec<String> {
        self.frames
            .iter()
            .filter_map(|f| f.scope)
            .map(str::to_owned)
            .collect()
    }
}
