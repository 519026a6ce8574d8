use crate::syntax::Category::{self, *};

pub const CSHARP: &[(Category, &[&str])] = &[
    (Comment, &["comment"]),
    (
        String,
        &[
            "string_literal",
            "verbatim_string_literal",
            "interpolated_string_expression",
            "character_literal",
        ],
    ),
    (
        Keyword,
        &[
            "if",
            "else",
            "for",
            "foreach",
            "while",
            "do",
            "switch",
            "case",
            "default",
            "break",
            "continue",
            "return",
            "goto",
            "throw",
            "try",
            "catch",
            "finally",
            "class",
            "struct",
            "interface",
            "enum",
            "namespace",
            "using",
            "public",
            "private",
            "protected",
            "internal",
            "static",
            "readonly",
            "const",
            "volatile",
            "virtual",
            "override",
            "abstract",
            "sealed",
            "new",
            "this",
            "base",
            "void",
            "var",
            "async",
            "await",
            "yield",
            "in",
            "out",
            "ref",
            "params",
            "where",
            "get",
            "set",
            "add",
            "remove",
            "partial",
            "extern",
            "unsafe",
            "fixed",
            "lock",
            "checked",
            "unchecked",
            "stackalloc",
            "sizeof",
            "typeof",
            "nameof",
            "is",
            "as",
            "null",
            "true",
            "false",
        ],
    ),
    (Number, &["integer_literal", "real_literal"]),
    (Variable, &["identifier"]),
    (Type, &["predefined_type", "type_identifier", "generic_name"]),
];
