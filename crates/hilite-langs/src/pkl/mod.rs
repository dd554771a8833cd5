//! Pkl grammar.
//!
//! Built leaf-first: primitives, then the string family, then structural
//! rules, then the root list in precedence order. Interpolations and
//! parenthesised groups embed the whole grammar through `Rule::Root`, so
//! building never recurses.

mod declarations;
mod primitives;
mod strings;

#[cfg(test)]
mod declarations_tests;
#[cfg(test)]
mod primitives_tests;
#[cfg(test)]
mod test_utils;

use hilite_core::{KeywordTable, Language};

pub use declarations::{
    annotation, class, function, import, module_header, object_property, property_access,
    type_reference, typealias,
};
pub use primitives::{
    block_comment, doc_comment, identifier, line_comment, number, quoted_identifier,
};
pub use strings::{
    DelimiterWidth, constant, escape, interpolation, multiline, single_line, string,
    string_constant,
};

pub const KEYWORDS: &[&str] = &[
    "abstract", "amends", "as", "case", "class", "const", "delete", "else", "extends",
    "external", "fixed", "for", "function", "hidden", "if", "import", "import*", "in", "is",
    "let", "local", "module", "new", "open", "out", "outer", "override", "protected", "read",
    "read*", "read?", "record", "super", "switch", "this", "throw", "trace", "typealias",
    "unknown", "vararg", "when",
];

pub const LITERALS: &[&str] = &["true", "false", "null", "nothing"];

pub fn keywords() -> KeywordTable {
    KeywordTable::new()
        .with("keyword", KEYWORDS)
        .with("literal", LITERALS)
}

/// The complete Pkl grammar.
///
/// Comments come first so their bodies are never scanned as code; anchored
/// headers and definitions come before the generic property, string and
/// number rules that could shadow them. Back-quoted names are consumed whole
/// so their contents are never scanned for keywords.
pub fn language() -> Language {
    Language::new("Pkl")
        .aliases(&["pkl"])
        .keywords(keywords())
        .contains(vec![
            doc_comment(),
            line_comment(),
            block_comment(),
            module_header(),
            import(),
            annotation(),
            class(),
            function(),
            typealias(),
            property_access(),
            type_reference(),
            object_property(),
            quoted_identifier(),
            string(),
            number(),
        ])
}
