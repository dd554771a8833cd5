pub fn run() {
    print!("{}", render());
}

/// One line per built-in language: display name and aliases.
pub fn render() -> String {
    let langs = hilite_langs::all();
    let mut out = format!("Supported languages ({}):\n", langs.len());
    for lang in langs {
        if lang.aliases.is_empty() {
            out.push_str(&format!("  {}\n", lang.name));
        } else {
            out.push_str(&format!("  {} ({})\n", lang.name, lang.aliases.join(", ")));
        }
    }
    out
}
