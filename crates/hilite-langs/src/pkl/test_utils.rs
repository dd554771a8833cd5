//! Test helpers: walk Pkl text with the reference walker.

use hilite_core::Colors;
use hilite_vm::{Highlight, Walker};

pub fn highlight(text: &str) -> Highlight {
    let lang = super::language();
    Walker::new(&lang)
        .expect("Pkl patterns should compile")
        .walk(text)
        .expect("walk should stay within limits")
}

pub fn render(text: &str) -> String {
    highlight(text).render(Colors::OFF)
}

/// Texts of the tokens tagged `scope`, in order.
pub fn tagged<'h>(hl: &'h Highlight, scope: &str) -> Vec<&'h str> {
    hl.tokens()
        .iter()
        .filter(|t| t.scope.as_deref() == Some(scope))
        .map(|t| hl.text_of(t))
        .collect()
}
