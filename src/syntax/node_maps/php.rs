use crate::syntax::Category::{self, *};

pub const PHP: &[(Category, &[&str])] = &[
    (Comment, &["comment"]),
    (String, &["string", "encapsed_string", "heredoc", "nowdoc", "shell_command_expression"]),
    (
        Keyword,
        &[
            "if",
            "else",
            "elseif",
            "endif",
            "for",
            "foreach",
            "endforeach",
            "while",
            "endwhile",
            "do",
            "switch",
            "case",
            "default",
            "endswitch",
            "break",
            "continue",
            "return",
            "throw",
            "try",
            "catch",
            "finally",
            "function",
            "fn",
            "class",
            "interface",
            "trait",
            "extends",
            "implements",
            "namespace",
            "use",
            "as",
            "const",
            "public",
            "private",
            "protected",
            "static",
            "final",
            "abstract",
            "readonly",
            "new",
            "clone",
            "instanceof",
            "insteadof",
            "global",
            "echo",
            "print",
            "include",
            "include_once",
            "require",
            "require_once",
            "goto",
            "yield",
            "match",
            "enum",
        ],
    ),
    (Number, &["integer", "float"]),
    (Variable, &["variable_name", "name"]),
    (Type, &["primitive_type", "named_type"]),
    (Builtin, &["true", "false", "null"]),
];
