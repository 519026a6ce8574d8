use crate::syntax::Category::{self, *};

pub const ELIXIR: &[(Category, &[&str])] = &[
    (Comment, &["comment"]),
    (
        String,
        &[
            "string",
            "quoted_content",
            "charlist",
            "sigil",
            "atom",
            "quoted_atom",
            "interpolation",
            "escape_sequence",
        ],
    ),
    (
        Keyword,
        &[
            "do",
            "end",
            "def",
            "defp",
            "defmodule",
            "defmacro",
            "defmacrop",
            "defstruct",
            "defimpl",
            "defprotocol",
            "if",
            "else",
            "unless",
            "cond",
            "case",
            "when",
            "fn",
            "for",
            "with",
            "receive",
            "after",
            "rescue",
            "catch",
            "raise",
            "try",
            "quote",
            "unquote",
            "import",
            "require",
            "alias",
            "use",
        ],
    ),
    (Number, &["integer", "float"]),
    (Constant, &["boolean", "nil", "atom", "module"]),
    (FunctionName, &["call", "identifier"]),
    (Variable, &["identifier"]),
    (
        Operator,
        &["operator", "binary_operator", "unary_operator", "arrow", "pipe", "range", "stab_clause"],
    ),
    (Builtin, &["true", "false", "nil"]),
    (Property, &["list", "tuple", "map", "keyword_list", "struct", "bitstring"]),
];
