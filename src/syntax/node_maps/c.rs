use crate::syntax::Category::{self, *};

pub const C: &[(Category, &[&str])] = &[
    (Comment, &["comment"]),
    (String, &["string_literal", "char_literal", "system_lib_string"]),
    (
        Keyword,
        &[
            "if", "else", "for", "while", "do", "switch", "case", "default", "break", "continue",
            "return", "goto", "struct", "union", "enum", "typedef", "sizeof", "static", "extern",
            "const", "volatile", "inline", "register", "auto", "restrict",
        ],
    ),
    (Number, &["number_literal"]),
    (FunctionName, &["function_declarator"]),
    (Variable, &["identifier"]),
    (Type, &["primitive_type", "type_identifier", "sized_type_specifier"]),
    (Builtin, &["true", "false", "null"]),
    (Property, &["field_identifier"]),
];
