use crate::syntax::Category::{self, *};

pub const JAVA: &[(Category, &[&str])] = &[
    (Comment, &["comment", "line_comment", "block_comment"]),
    (String, &["string_literal", "character_literal", "text_block"]),
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
            "record",
            "extends",
            "implements",
            "import",
            "package",
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
            "strictfp",
            "new",
            "this",
            "super",
            "instanceof",
            "void",
            "assert",
            "throws",
            "permits",
            "sealed",
            "non",
            "var",
            "yield",
        ],
    ),
    (
        Number,
        &[
            "decimal_integer_literal",
            "hex_integer_literal",
            "octal_integer_literal",
            "binary_integer_literal",
            "decimal_floating_point_literal",
            "hex_floating_point_literal",
        ],
    ),
    (Variable, &["identifier"]),
    (
        Type,
        &["type_identifier", "void_type", "integral_type", "floating_point_type", "boolean_type"],
    ),
    (Builtin, &["true", "false", "null"]),
];
