/// Canonical language names mapped to their aliases.
const ALIASES: &[(&str, &[&str])] = &[
    ("csharp", &["c-sharp", "c_sharp", "cs"]),
    ("javascript", &["js"]),
    ("typescript", &["ts"]),
    ("python", &["py"]),
    ("ruby", &["rb"]),
];

fn canonical_for_alias(name: &str) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|(_, aliases)| aliases.contains(&name))
        .map(|(canonical, _)| *canonical)
}

/// Normalize a language name to its canonical form.
///
/// `"C_Sharp"`, `"c-sharp"` and `"CSharp"` all become `"csharp"`. Names that
/// are not aliases keep their separators (`"embedded-template"` stays as is).
pub fn normalize_language(language: &str) -> String {
    let name = language.to_lowercase();

    if let Some(canonical) = canonical_for_alias(&name) {
        return canonical.to_string();
    }

    let stripped: String = name.chars().filter(|c| *c != '-' && *c != '_').collect();
    if let Some(canonical) = canonical_for_alias(&stripped) {
        return canonical.to_string();
    }

    name
}

pub fn language_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_lowercase().as_str() {
        "rb" | "rake" | "gemspec" => Some("ruby"),
        "rs" => Some("rust"),
        "py" => Some("python"),
        "js" | "mjs" => Some("javascript"),
        "ts" => Some("typescript"),
        "tf" | "tfvars" | "hcl" => Some("hcl"),
        "cs" | "csx" => Some("csharp"),
        "sh" | "bash" => Some("bash"),
        "c" | "h" => Some("c"),
        "cob" | "cbl" => Some("cobol"),
        "cr" => Some("crystal"),
        "ex" | "exs" => Some("elixir"),
        "groovy" | "gradle" => Some("groovy"),
        "haml" => Some("haml"),
        "html" | "htm" => Some("html"),
        "java" => Some("java"),
        "json" => Some("json"),
        "pas" | "pp" => Some("pascal"),
        "php" => Some("php"),
        "sql" => Some("sql"),
        "swift" => Some("swift"),
        "yml" | "yaml" => Some("yaml"),
        _ => None,
    }
}

/// Grammars compiled into this build, keyed by canonical language name.
pub fn builtin_grammars() -> Vec<(&'static str, tree_sitter::Language)> {
    #[allow(unused_mut)]
    let mut grammars: Vec<(&'static str, tree_sitter::Language)> = Vec::new();

    #[cfg(feature = "rust")]
    grammars.push(("rust", tree_sitter_rust::language()));
    #[cfg(feature = "python")]
    grammars.push(("python", tree_sitter_python::language()));
    #[cfg(feature = "javascript")]
    grammars.push(("javascript", tree_sitter_javascript::language()));
    #[cfg(feature = "ruby")]
    grammars.push(("ruby", tree_sitter_ruby::language()));

    grammars
}
