use crate::syntax::Category::{self, *};

pub const HAML: &[(Category, &[&str])] = &[
    (Comment, &["comment"]),
    (String, &["string", "string_content"]),
    (Keyword, &["doctype"]),
    (Property, &["tag_name", "id", "class", "attribute_name"]),
];
