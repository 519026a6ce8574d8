use crate::syntax::Category::{self, *};

pub const RUST: &[(Category, &[&str])] = &[
    (Comment, &["line_comment", "block_comment"]),
    (String, &["string_literal", "char_literal", "raw_string_literal"]),
    (
        Keyword,
        &[
            "if", "else", "for", "while", "loop", "break", "continue", "return", "fn", "let",
            "mut", "const", "static", "struct", "enum", "union", "impl", "trait", "type", "mod",
            "use", "pub", "crate", "self", "super", "as", "in", "ref", "move", "dyn", "async",
            "await", "match", "where", "unsafe", "extern", "default",
        ],
    ),
    (Number, &["integer_literal", "float_literal"]),
    (Variable, &["identifier"]),
    (Type, &["type_identifier", "primitive_type", "generic_type"]),
    (Builtin, &["true", "false"]),
    (Property, &["field_identifier"]),
];
