pub mod cache;
pub mod category;
pub mod emitter;
pub mod highlighter;
pub mod language;
pub mod levels;
pub mod node_maps;
pub mod parser;
pub mod walker;

pub use cache::{BufferId, TREE_CACHE_CAPACITY, TreeCache, fingerprint};
pub use category::{Category, UnknownCategory};
pub use emitter::{HighlightMaps, emit};
pub use highlighter::Highlighter;
pub use language::{builtin_grammars, language_for_extension, normalize_language};
pub use levels::{
    CategoryFilter, DEFAULT_HIGHLIGHT_LEVEL, HIGHLIGHT_LEVELS, MAX_HIGHLIGHT_LEVEL,
};
pub use node_maps::{
    NodeCategories, NodeFeatures, NodeMap, NodeMapError, NodeMaps, NodeTable, expand_features,
    parse_node_map,
};
pub use parser::{ParserError, ParserProvider, TreeSitterProvider};
pub use walker::{HighlightSpan, HighlightWalker, ParseNode, SyntaxTree, dump_tree, walk};
