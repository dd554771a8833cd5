//! Structural rules: headers, imports, definitions, type references and
//! property recognition.

use hilite_core::{KeywordTable, MatchRule, Pattern, Rule, SpanRule, VariantGroup};

use super::primitives::{
    IDENTIFIER_RE, QUOTED_IDENTIFIER_RE, block_comment, identifier, line_comment,
};
use super::strings::{string, string_constant};

/// `module`, `amends` or `extends` at line start, up to end of line.
pub fn module_header() -> Rule {
    let keyword = MatchRule::new(Pattern::keywords(&["module", "amends", "extends"]))
        .scope("keyword");
    let name = MatchRule::new(r"[a-zA-Z_][\w.]*").scope("title");

    SpanRule::new(r"^[ \t]*(?:module|amends|extends)\b", "$")
        .scope("meta")
        .return_begin()
        .contains(vec![keyword.into(), string_constant(), name.into()])
        .into()
}

pub fn import() -> Rule {
    SpanRule::new(Pattern::new(r"\bimport\*?").followed_by(r"\s"), "$")
        .scope("meta")
        .begin_scope("keyword")
        .keywords(KeywordTable::new().with("keyword", &["import", "import*", "as"]))
        .contains(vec![string_constant()])
        .into()
}

pub fn annotation() -> Rule {
    MatchRule::new("@[a-zA-Z_][a-zA-Z0-9_]*").scope("meta").into()
}

/// Ends before `{`, or at end of line for a body-less class.
pub fn class() -> Rule {
    let extends = MatchRule::new(Pattern::keywords(&["extends"])).scope("keyword");

    SpanRule::new(Pattern::keywords(&["class"]), "[{]|$")
        .scope("class")
        .begin_scope("keyword")
        .exclude_end()
        .contains(vec![extends.into(), identifier(), generic_arguments()])
        .into()
}

pub fn function() -> Rule {
    let params = SpanRule::new(r"\(", r"\)")
        .scope("params")
        .contains(vec![line_comment(), block_comment(), identifier()]);

    SpanRule::new(Pattern::keywords(&["function"]), "[={]")
        .scope("function")
        .begin_scope("keyword")
        .exclude_end()
        .contains(vec![identifier(), params.into()])
        .into()
}

pub fn typealias() -> Rule {
    let rhs = SpanRule::new(r"=\s*", Pattern::lookahead("$"))
        .exclude_begin()
        .contains(vec![
            line_comment(),
            block_comment(),
            generic_arguments(),
            type_name(),
            string(),
        ]);

    SpanRule::new(Pattern::keywords(&["typealias"]), "$")
        .scope("type")
        .begin_scope("keyword")
        .contains(vec![identifier(), rhs.into()])
        .into()
}

/// `: Type` up to (not including) `=`, `,`, `)`, `]`, `}` or end of line.
pub fn type_reference() -> Rule {
    SpanRule::new(r":\s*", Pattern::lookahead(r"[=,)\]}]|$"))
        .scope("type")
        .exclude_begin()
        .contains(vec![
            line_comment(),
            block_comment(),
            generic_arguments(),
            type_name(),
        ])
        .into()
}

/// `.name` / `?.name`; only the name is tagged.
pub fn property_access() -> Rule {
    let access = |name: &str| -> Rule {
        MatchRule::parts([Pattern::new(r"\.|\?\."), Pattern::new(r"\s*"), Pattern::new(name)])
            .capture(3, "property")
            .into()
    };
    VariantGroup::new(vec![access(QUOTED_IDENTIFIER_RE), access(IDENTIFIER_RE)]).into()
}

/// A name directly followed by `=`, `:` or `{`; only the name is tagged.
pub fn object_property() -> Rule {
    let declaration = |name: &str| -> Rule {
        MatchRule::parts([
            Pattern::new(name),
            Pattern::new(r"\s*"),
            Pattern::lookahead("[=:{]"),
        ])
        .capture(1, "property")
        .into()
    };
    VariantGroup::new(vec![
        declaration(QUOTED_IDENTIFIER_RE),
        declaration(IDENTIFIER_RE),
    ])
    .into()
}

/// `<…>`, nesting into itself for `Mapping<String, List<Int>>`.
fn generic_arguments() -> Rule {
    SpanRule::new("<", ">")
        .contains(vec![
            Rule::SelfRef,
            line_comment(),
            block_comment(),
            type_name(),
        ])
        .into()
}

fn type_name() -> Rule {
    MatchRule::new(IDENTIFIER_RE).scope("type").into()
}
