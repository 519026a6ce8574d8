use crate::syntax::Category::{self, *};

pub const JSON: &[(Category, &[&str])] = &[
    (String, &["string"]),
    (Number, &["number"]),
    (Builtin, &["true", "false", "null"]),
    (Property, &["pair"]),
];
