use crate::syntax::Category::{self, *};

pub const PYTHON: &[(Category, &[&str])] = &[
    (Comment, &["comment"]),
    (String, &["string", "string_content", "concatenated_string"]),
    (
        Keyword,
        &[
            "if", "elif", "else", "for", "while", "break", "continue", "return", "pass", "raise",
            "try", "except", "finally", "with", "as", "def", "class", "lambda", "import", "from",
            "global", "nonlocal", "assert", "yield", "del", "in", "not", "and", "or", "is",
            "async", "await", "match", "case",
        ],
    ),
    (Number, &["integer", "float"]),
    (Variable, &["identifier"]),
    (Type, &["type"]),
    (Builtin, &["true", "false", "none"]),
    (Property, &["attribute"]),
];
