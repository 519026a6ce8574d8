use crate::syntax::Category::{self, *};

pub const YAML: &[(Category, &[&str])] = &[
    (Comment, &["comment"]),
    (
        String,
        &[
            "string_scalar",
            "double_quote_scalar",
            "single_quote_scalar",
            "block_scalar",
            "plain_scalar",
            "escape_sequence",
        ],
    ),
    (Keyword, &["anchor", "anchor_name", "alias", "alias_name", "tag", "tag_handle", "tag_prefix"]),
    (Number, &["integer_scalar", "float_scalar"]),
    (Builtin, &["boolean_scalar", "null_scalar"]),
    (
        Property,
        &[
            "stream",
            "document",
            "block_node",
            "flow_node",
            "block_mapping",
            "block_mapping_pair",
            "block_sequence",
            "block_sequence_item",
            "flow_mapping",
            "flow_sequence",
            "flow_pair",
            "directive_name",
            "directive_parameter",
            "yaml_directive",
            "yaml_version",
            "tag_directive",
            "reserved_directive",
            "timestamp_scalar",
        ],
    ),
];
