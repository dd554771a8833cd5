use indoc::indoc;

use super::*;

#[test]
fn parse_minimal_language() {
    let json = indoc! {r#"
        {
            "name": "Tiny",
            "aliases": ["tiny"],
            "keywords": { "keyword": ["let", "in"] },
            "contains": [
                { "scope": "number", "match": "\\d+" }
            ]
        }
    "#};

    let lang = Language::from_json(json).unwrap();
    assert_eq!(lang.name, "Tiny");
    assert_eq!(lang.aliases, vec!["tiny"]);
    assert_eq!(lang.keywords.classify("in"), Some("keyword"));
    assert_eq!(
        lang.contains,
        vec![Rule::from(MatchRule::new(r"\d+").scope("number"))]
    );
}

#[test]
fn render_json() {
    let lang = Language::new("Tiny")
        .keywords(KeywordTable::new().with("keyword", &["let"]))
        .contains(vec![MatchRule::new(r"\d+").scope("number").into()]);

    insta::assert_snapshot!(lang.to_json().unwrap(), @r#"
    {
      "name": "Tiny",
      "aliases": [],
      "keywords": {
        "keyword": [
          "let"
        ]
      },
      "contains": [
        {
          "scope": "number",
          "match": "\\d+"
        }
      ]
    }
    "#);
}

#[test]
fn round_trip_preserves_order() {
    let generic = SpanRule::new("<", ">")
        .contains(vec![Rule::SelfRef, MatchRule::new("[A-Z]\\w*").scope("type").into()]);
    let lang = Language::new("Ordered")
        .keywords(
            KeywordTable::new()
                .with("literal", &["true", "false"])
                .with("keyword", &["if", "else"]),
        )
        .contains(vec![
            MatchRule::new("//.*").scope("comment").into(),
            generic.scope("generic").into(),
            VariantGroup::new(vec![
                MatchRule::new("0x[0-9a-f]+").into(),
                MatchRule::new("[0-9]+").into(),
            ])
            .scope("number")
            .into(),
            SpanRule::new(r"\(", r"\)")
                .contains(vec![Rule::Root])
                .exclude_begin()
                .single_line()
                .into(),
        ]);

    let back = Language::from_json(&lang.to_json().unwrap()).unwrap();
    assert_eq!(back, lang);

    let tags: Vec<_> = back.keywords.iter().map(|(tag, _)| tag).collect();
    assert_eq!(tags, vec!["literal", "keyword"]);
}

#[test]
fn parse_back_references() {
    let json = r#"{
        "name": "t",
        "contains": [
            { "begin": "\\{", "end": "\\}", "contains": ["self", "$root"] }
        ]
    }"#;

    let lang = Language::from_json(json).unwrap();
    let Rule::Span(span) = &lang.contains[0] else {
        panic!("expected span");
    };
    assert_eq!(span.contains, vec![Rule::SelfRef, Rule::Root]);
    assert!(span.embeds_root());
}

#[test]
fn parse_lookahead_split() {
    let json = r#"{
        "name": "t",
        "contains": [
            { "match": ["[a-z]+", "\\s*", "(?=[=:{])"], "captures": { "1": "property" } }
        ]
    }"#;

    let lang = Language::from_json(json).unwrap();
    let Rule::Match(m) = &lang.contains[0] else {
        panic!("expected match");
    };
    assert_eq!(m.parts.len(), 3);
    assert_eq!(m.parts[2].body(), "");
    assert_eq!(m.parts[2].lookahead_body(), Some("[=:{]"));
    assert_eq!(m.captures.get(&1).map(String::as_str), Some("property"));
}

#[test]
fn unknown_reference() {
    let json = r#"{ "name": "t", "contains": ["parent"] }"#;

    let err = Language::from_json(json).unwrap_err();
    insta::assert_snapshot!(err, @"malformed rule: unknown reference `parent`");
}

#[test]
fn span_without_end() {
    let json = r#"{ "name": "t", "contains": [{ "begin": "\"" }] }"#;

    let err = Language::from_json(json).unwrap_err();
    insta::assert_snapshot!(err, @"malformed rule: span rule without `end`");
}

#[test]
fn bad_capture_key() {
    let json = r#"{ "name": "t", "contains": [{ "match": ["a", "b"], "captures": { "two": "x" } }] }"#;

    let err = Language::from_json(json).unwrap_err();
    insta::assert_snapshot!(err, @"malformed rule: capture key `two`");
}

#[test]
fn invalid_json() {
    let err = Language::from_json("{").unwrap_err();
    assert!(matches!(err, GrammarError::Json(_)));
}
