use crate::syntax::Category::{self, *};

pub const SWIFT: &[(Category, &[&str])] = &[
    (Comment, &["comment", "line_comment", "block_comment", "multiline_comment"]),
    (
        String,
        &[
            "line_string_literal",
            "multi_line_string_literal",
            "raw_string_literal",
            "string_literal",
            "interpolated_string_literal",
        ],
    ),
    (
        Keyword,
        &[
            "if",
            "else",
            "switch",
            "case",
            "default",
            "for",
            "while",
            "repeat",
            "break",
            "continue",
            "return",
            "func",
            "var",
            "let",
            "class",
            "struct",
            "enum",
            "protocol",
            "extension",
            "typealias",
            "import",
            "init",
            "deinit",
            "subscript",
            "static",
            "final",
            "override",
            "mutating",
            "nonmutating",
            "convenience",
            "required",
            "lazy",
            "private",
            "fileprivate",
            "internal",
            "public",
            "open",
            "weak",
            "unowned",
            "throws",
            "rethrows",
            "try",
            "catch",
            "guard",
            "defer",
            "do",
            "where",
            "in",
            "inout",
            "associatedtype",
            "precedencegroup",
            "operator",
            "prefix",
            "postfix",
            "infix",
            "indirect",
            "dynamic",
            "optional",
            "some",
            "any",
            "async",
            "await",
        ],
    ),
    (Number, &["integer_literal", "float_literal", "hex_literal", "oct_literal", "bin_literal"]),
    (FunctionName, &["function_declaration", "method_declaration"]),
    (Variable, &["simple_identifier", "identifier", "parameter"]),
    (
        Type,
        &[
            "type_identifier",
            "class_declaration",
            "struct_declaration",
            "enum_declaration",
            "protocol_declaration",
        ],
    ),
    (Operator, &["binary_expression", "prefix_expression", "postfix_expression"]),
    (Builtin, &["nil", "true", "false", "self", "super", "Self"]),
    (Property, &["property_declaration", "computed_property"]),
];
