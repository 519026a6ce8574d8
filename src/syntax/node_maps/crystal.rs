use crate::syntax::Category::{self, *};

pub const CRYSTAL: &[(Category, &[&str])] = &[
    (Comment, &["comment"]),
    (
        String,
        &[
            "string",
            "string_literal",
            "string_content",
            "heredoc_content",
            "heredoc_body",
            "symbol",
            "simple_symbol",
            "char_literal",
            "escape_sequence",
            "regex",
            "regex_literal",
            "command",
        ],
    ),
    (
        Keyword,
        &[
            "def",
            "end",
            "class",
            "module",
            "struct",
            "if",
            "else",
            "elsif",
            "unless",
            "case",
            "when",
            "then",
            "while",
            "until",
            "for",
            "do",
            "break",
            "next",
            "redo",
            "return",
            "yield",
            "begin",
            "rescue",
            "ensure",
            "and",
            "or",
            "not",
            "in",
            "alias",
            "abstract",
            "private",
            "protected",
            "getter",
            "setter",
            "property",
            "include",
            "extend",
            "require",
            "lib",
            "fun",
            "macro",
            "annotation",
            "self",
            "super",
            "nil",
            "true",
            "false",
            "typeof",
            "sizeof",
            "offsetof",
            "pointerof",
            "as",
            "is_a?",
            "responds_to?",
            "uninitialized",
            "out",
            "with",
        ],
    ),
    (Number, &["integer", "float", "number_literal", "integer_literal", "float_literal"]),
    (Constant, &["constant", "type_identifier", "class_name"]),
    (FunctionName, &["method", "method_name", "function_identifier", "call"]),
    (
        Variable,
        &[
            "identifier",
            "instance_variable",
            "class_variable",
            "global_variable",
            "parameter",
            "variable",
        ],
    ),
    (Type, &["type", "generic_type", "union_type", "nilable_type", "proc_type", "tuple_type"]),
    (Operator, &["binary", "unary", "assignment", "operator", "binary_operator", "unary_operator"]),
    (Property, &["hash", "array", "tuple", "named_tuple", "block", "attribute"]),
];
