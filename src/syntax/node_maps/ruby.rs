use crate::syntax::Category::{self, *};

pub const RUBY: &[(Category, &[&str])] = &[
    (Comment, &["comment"]),
    (
        String,
        &[
            "string",
            "string_content",
            "heredoc_content",
            "heredoc_body",
            "simple_symbol",
            "delimited_symbol",
            "bare_symbol",
            "escape_sequence",
            "character",
            "subshell",
            "regex",
        ],
    ),
    (
        Keyword,
        &[
            "def", "end", "class", "module", "if", "else", "elsif", "unless", "case", "when",
            "then", "while", "until", "for", "do", "break", "next", "redo", "retry", "return",
            "yield", "begin", "rescue", "ensure", "and", "or", "not", "in", "alias", "undef",
            "defined?", "self", "super", "BEGIN", "END", "lambda",
        ],
    ),
    (Number, &["integer", "float", "complex", "rational"]),
    (Constant, &["constant"]),
    (FunctionName, &["method", "singleton_method"]),
    (
        Variable,
        &["identifier", "instance_variable", "class_variable", "global_variable"],
    ),
    (Type, &["singleton_class"]),
    (
        Operator,
        &["binary", "unary", "assignment", "operator", "operator_assignment"],
    ),
    (Builtin, &["nil", "true", "false"]),
    (Property, &["hash", "array", "block"]),
];
