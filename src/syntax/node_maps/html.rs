use crate::syntax::Category::{self, *};

pub const HTML: &[(Category, &[&str])] = &[
    (Comment, &["comment"]),
    (String, &["attribute_value", "quoted_attribute_value", "text", "raw_text"]),
    (Keyword, &["doctype"]),
    (Constant, &["entity"]),
    (
        Property,
        &[
            "document",
            "element",
            "script_element",
            "style_element",
            "start_tag",
            "end_tag",
            "self_closing_tag",
            "erroneous_end_tag",
            "tag_name",
            "attribute",
            "attribute_name",
            "erroneous_end_tag_name",
        ],
    ),
];
