use crate::syntax::Category::{self, *};

pub const GROOVY: &[(Category, &[&str])] = &[
    (Comment, &["comment"]),
    (String, &["string", "gstring", "string_content"]),
    (
        Keyword,
        &[
            "if",
            "else",
            "for",
            "while",
            "do",
            "switch",
            "case",
            "default",
            "break",
            "continue",
            "return",
            "throw",
            "try",
            "catch",
            "finally",
            "class",
            "interface",
            "enum",
            "trait",
            "extends",
            "implements",
            "import",
            "package",
            "def",
            "var",
            "public",
            "private",
            "protected",
            "static",
            "final",
            "abstract",
            "synchronized",
            "native",
            "transient",
            "volatile",
            "new",
            "this",
            "super",
            "instanceof",
            "in",
            "as",
            "assert",
        ],
    ),
    (Number, &["number_literal"]),
    (Variable, &["identifier"]),
    (Type, &["type_identifier"]),
    (Builtin, &["true", "false", "null"]),
];
