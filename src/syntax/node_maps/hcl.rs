use crate::syntax::Category::{self, *};

pub const HCL: &[(Category, &[&str])] = &[
    (Comment, &["comment"]),
    (
        String,
        &["string_lit", "quoted_template", "heredoc_template", "template_literal"],
    ),
    (
        Keyword,
        &["for", "in", "if", "else", "endif", "endfor", "true", "false", "null"],
    ),
    (Number, &["numeric_lit"]),
    (FunctionName, &["function_call"]),
    (Variable, &["identifier", "variable_expr"]),
    (Operator, &["binary_operation", "unary_operation"]),
    (Property, &["attribute", "block"]),
];
