use hilite_core::Colors;

use super::test_utils::{highlight, render, tagged};

#[test]
fn comments() {
    insta::assert_snapshot!(render("/// Docs.\n// note\n/* a\n b */ x = 1"), @r#"
    doctag "///" [doctag]
    doctag " Docs." [doctag]
    comment "//" [comment]
    comment " note" [comment]
    comment "/*" [comment]
    comment " a\n b " [comment]
    comment "*/" [comment]
    property "x"
    - "= "
    number "1"
    "#);
}

#[test]
fn line_comment_stops_before_crlf() {
    let hl = highlight("// note\r\nx = 1\r\n");
    assert_eq!(tagged(&hl, "comment"), vec!["//", " note"]);
    assert_eq!(tagged(&hl, "property"), vec!["x"]);
    assert!(hl.is_terminated());
}

#[test]
fn unterminated_block_comment() {
    let hl = highlight("/* open\nx = 1");
    assert!(!hl.is_terminated());
    assert!(tagged(&hl, "property").is_empty());
    insta::assert_snapshot!(hl.render(Colors::OFF), @r#"
    comment "/*" [comment] unterminated
    comment " open\nx = 1" [comment] unterminated
    "#);
}

#[test]
fn underscores_inside_numbers() {
    let hl = highlight("x = 1_000");
    assert_eq!(tagged(&hl, "number"), vec!["1_000"]);
}

#[test]
fn incomplete_literals_are_not_numbers() {
    for text in ["x = 0x", "x = abc123", "x = 0b"] {
        let hl = highlight(text);
        assert!(tagged(&hl, "number").is_empty(), "{text}");
    }
}

#[test]
fn exponent_forms() {
    let hl = highlight("a = 1e10\nb = 2.5E+3\nc = 0x1p-4");
    assert_eq!(tagged(&hl, "number"), vec!["1e10", "2.5E+3", "0x1p-4"]);
}

#[test]
fn quoted_class_name() {
    let hl = highlight("class `my class` {}");
    assert_eq!(hl.scope_of("`my class`"), Some("title"));
}
