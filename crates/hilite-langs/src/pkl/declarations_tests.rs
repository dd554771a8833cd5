use super::test_utils::{highlight, render, tagged};

#[test]
fn module_header() {
    let hl = highlight("module foo.bar");
    assert!(hl.is_terminated());
    insta::assert_snapshot!(hl.render(hilite_core::Colors::OFF), @r#"
    keyword "module" [meta]
    title "foo.bar" [meta]
    "#);
}

#[test]
fn amends_header_with_package_uri() {
    let uri = "package://pkg.pkl-lang.org/pkl-pantry/foo@1.0.0#/Bar.pkl";
    let hl = highlight(&format!("amends \"{uri}\""));
    assert_eq!(hl.scope_of("amends"), Some("keyword"));

    let path = hl.tokens().iter().find(|t| hl.text_of(t) == uri).unwrap();
    assert_eq!(path.scope.as_deref(), Some("string"));
    assert_eq!(path.path, ["meta", "string"]);
}

#[test]
fn indented_header() {
    let hl = highlight("  extends \"base.pkl\"");
    assert_eq!(hl.scope_of("extends"), Some("keyword"));
    assert_eq!(hl.scope_of("base.pkl"), Some("string"));
}

#[test]
fn annotation_before_object_body() {
    let hl = highlight(r#"@Deprecated { message = "x" }"#);
    assert_eq!(hl.scope_of("@Deprecated"), Some("meta"));
    assert_eq!(hl.scope_of("message"), Some("property"));
    assert_eq!(tagged(&hl, "string"), vec!["\"", "x", "\""]);
}

#[test]
fn function_signature() {
    insta::assert_snapshot!(render("function add(a: Int, b: Int): Int = a + b"), @r#"
    keyword "function" [function]
    title "add" [function]
    params "(" [function > params]
    title "a" [function > params]
    params ": " [function > params]
    title "Int" [function > params]
    params ", " [function > params]
    title "b" [function > params]
    params ": " [function > params]
    title "Int" [function > params]
    params ")" [function > params]
    function ": " [function]
    title "Int" [function]
    - "="
    - " a + b"
    "#);
}

#[test]
fn function_with_block_body() {
    let hl = highlight("function f() {");
    assert!(hl.is_terminated());
    let brace = hl.tokens().iter().find(|t| hl.text_of(t) == "{").unwrap();
    assert_eq!(brace.scope, None);
    assert!(brace.path.is_empty());
}

#[test]
fn typealias_alternatives() {
    let hl = highlight("typealias Mode = \"dev\"|\"prod\"\nx = 1");
    assert!(hl.is_terminated());
    assert_eq!(hl.scope_of("typealias"), Some("keyword"));
    assert_eq!(hl.scope_of("Mode"), Some("title"));
    assert_eq!(tagged(&hl, "string"), vec!["\"", "dev", "\"", "\"", "prod", "\""]);
    assert_eq!(hl.scope_of("x"), Some("property"));

    let dev = hl.tokens().iter().find(|t| hl.text_of(t) == "dev").unwrap();
    assert_eq!(dev.path, ["type", "string"]);
}

#[test]
fn typealias_to_type() {
    let hl = highlight("typealias Port = UInt16");
    assert_eq!(hl.scope_of("Port"), Some("title"));
    assert_eq!(hl.scope_of("= "), Some("type"));
    assert_eq!(hl.scope_of("UInt16"), Some("type"));
}

#[test]
fn generic_type_reference() {
    let hl = highlight("x: Listing<String>");
    assert!(hl.is_terminated());
    for name in ["Listing", "String"] {
        let token = hl.tokens().iter().find(|t| hl.text_of(t) == name).unwrap();
        assert_eq!(token.scope.as_deref(), Some("type"));
        assert_eq!(token.path, ["type"]);
    }
}

#[test]
fn nested_generics() {
    let hl = highlight("m: Mapping<String, Listing<Int>>");
    assert!(hl.is_terminated());
    assert_eq!(tagged(&hl, "type"), vec!["Mapping", "String", "Listing", "Int"]);
}

#[test]
fn type_reference_inside_object_body() {
    let hl = highlight("foo { bar: String }");
    assert_eq!(tagged(&hl, "property"), vec!["foo", "bar"]);
    assert_eq!(hl.scope_of("String"), Some("type"));

    let close = hl.tokens().iter().find(|t| hl.text_of(t) == "}").unwrap();
    assert!(close.path.is_empty());
}

#[test]
fn property_access_chain() {
    let hl = highlight("a.b?.c");
    assert_eq!(tagged(&hl, "property"), vec!["b", "c"]);
    assert_eq!(hl.scope_of("?."), None);
}

#[test]
fn root_keywords_and_literals() {
    let hl = highlight("local x = if (y) true else null");
    assert_eq!(tagged(&hl, "keyword"), vec!["local", "if", "else"]);
    assert_eq!(tagged(&hl, "literal"), vec!["true", "null"]);
    assert_eq!(hl.scope_of("x"), Some("property"));
}

#[test]
fn suffixed_keyword() {
    let hl = highlight(r#"x = read*("env:HOME")"#);
    assert_eq!(hl.scope_of("read*"), Some("keyword"));
    assert_eq!(hl.scope_of("env:HOME"), Some("string"));
}
