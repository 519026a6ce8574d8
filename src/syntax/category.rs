use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Language-independent highlight category.
///
/// This is the whole contract a renderer depends on: grammars map their
/// node kinds onto these, renderers map these onto colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Comment,
    String,
    Keyword,
    Type,
    Constant,
    FunctionName,
    Variable,
    Number,
    Operator,
    Punctuation,
    Builtin,
    Property,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown highlight category: {0}")]
pub struct UnknownCategory(pub String);

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Comment,
        Category::String,
        Category::Keyword,
        Category::Type,
        Category::Constant,
        Category::FunctionName,
        Category::Variable,
        Category::Number,
        Category::Operator,
        Category::Punctuation,
        Category::Builtin,
        Category::Property,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Comment => "comment",
            Category::String => "string",
            Category::Keyword => "keyword",
            Category::Type => "type",
            Category::Constant => "constant",
            Category::FunctionName => "function_name",
            Category::Variable => "variable",
            Category::Number => "number",
            Category::Operator => "operator",
            Category::Punctuation => "punctuation",
            Category::Builtin => "builtin",
            Category::Property => "property",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
