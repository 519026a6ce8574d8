use crate::syntax::Category;
use std::collections::HashSet;

pub const DEFAULT_HIGHLIGHT_LEVEL: u8 = 3;
pub const MAX_HIGHLIGHT_LEVEL: u8 = 4;

/// Cumulative verbosity tiers, least to most verbose. Level N enables the
/// union of the first N tiers. `Property` is in no tier; it is only
/// reachable through an explicit allow-list.
pub const HIGHLIGHT_LEVELS: [&[Category]; 4] = [
    &[Category::Comment, Category::String],
    &[Category::Keyword, Category::Type, Category::Constant],
    &[Category::FunctionName, Category::Variable, Category::Number],
    &[Category::Operator, Category::Punctuation, Category::Builtin],
];

/// Decides which categories are currently visible.
///
/// An explicit allow-list always wins over the numeric level. The level is
/// not validated here; callers guard the 1–4 range (see
/// [`HighlightConfig::category_filter`](crate::config::HighlightConfig::category_filter)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    level: u8,
    allow_list: Option<Vec<Category>>,
}

impl CategoryFilter {
    pub fn new() -> Self {
        Self {
            level: DEFAULT_HIGHLIGHT_LEVEL,
            allow_list: None,
        }
    }

    pub fn with_level(level: u8) -> Self {
        Self {
            level,
            allow_list: None,
        }
    }

    pub fn with_allow_list(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            level: DEFAULT_HIGHLIGHT_LEVEL,
            allow_list: Some(categories.into_iter().collect()),
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn allow_list(&self) -> Option<&[Category]> {
        self.allow_list.as_deref()
    }

    pub fn enabled_categories(&self) -> HashSet<Category> {
        if let Some(allow_list) = &self.allow_list {
            return allow_list.iter().copied().collect();
        }

        HIGHLIGHT_LEVELS
            .iter()
            .take(usize::from(self.level))
            .flat_map(|tier| tier.iter().copied())
            .collect()
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self::new()
    }
}
