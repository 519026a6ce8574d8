use crate::syntax::Category::{self, *};

pub const BASH: &[(Category, &[&str])] = &[
    (Comment, &["comment"]),
    (String, &["string", "raw_string", "heredoc_body", "heredoc_start", "ansi_c_string"]),
    (
        Keyword,
        &[
            "if", "then", "else", "elif", "fi", "for", "while", "until", "do", "done", "case",
            "esac", "in", "function", "select", "time", "coproc",
        ],
    ),
    (FunctionName, &["function_definition"]),
    (Variable, &["variable_name", "special_variable_name"]),
    (Operator, &["file_redirect", "heredoc_redirect", "herestring_redirect"]),
];
