use std::io::Write;

use indoc::indoc;
use tempfile::NamedTempFile;

/// A temp file with the given extension holding `content`.
pub fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

/// A grammar whose string span is swallowed by its own child.
pub const SWALLOWING_GRAMMAR: &str = indoc! {r#"
    {
      "name": "Bad",
      "contains": [
        {
          "scope": "string",
          "begin": "\"",
          "end": "\"",
          "contains": [{ "match": "\"[a-z]*" }]
        }
      ]
    }
"#};

/// A tiny grammar: numbers and `let`.
pub const TINY_GRAMMAR: &str = indoc! {r#"
    {
      "name": "Tiny",
      "keywords": { "keyword": ["let"] },
      "contains": [{ "scope": "number", "match": "[0-9]+" }]
    }
"#};

/// Reopens its span at the same offset forever.
pub const LOOPING_GRAMMAR: &str = indoc! {r#"
    {
      "name": "Loop",
      "contains": [
        { "scope": "loop", "begin": "a", "end": "(?=a)", "returnBegin": true }
      ]
    }
"#};
