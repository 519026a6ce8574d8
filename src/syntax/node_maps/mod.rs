// Node-kind → category tables, built-in defaults plus caller overrides

mod bash;
mod c;
mod cobol;
mod crystal;
mod csharp;
mod elixir;
mod groovy;
mod haml;
mod hcl;
mod html;
mod java;
mod javascript;
mod json;
mod pascal;
mod php;
mod python;
mod ruby;
mod rust;
mod sql;
mod swift;
mod yaml;

use crate::syntax::{Category, normalize_language};
use log::debug;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

pub use bash::BASH;
pub use c::C;
pub use cobol::COBOL;
pub use crystal::CRYSTAL;
pub use csharp::CSHARP;
pub use elixir::ELIXIR;
pub use groovy::GROOVY;
pub use haml::HAML;
pub use hcl::HCL;
pub use html::HTML;
pub use java::JAVA;
pub use javascript::JAVASCRIPT;
pub use json::JSON;
pub use pascal::PASCAL;
pub use php::PHP;
pub use python::PYTHON;
pub use ruby::RUBY;
pub use rust::RUST;
pub use sql::SQL;
pub use swift::SWIFT;
pub use yaml::YAML;

/// Effective mapping for one language: node kind → category.
pub type NodeMap = HashMap<String, Category>;

/// Declarative table shape: each category with the node kinds it covers.
pub type NodeFeatures = &'static [(Category, &'static [&'static str])];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeMapError {
    #[error("Language name must not be empty")]
    EmptyLanguage,
    #[error("Unknown category {name:?} for node kind {node_kind:?} in {language} node map")]
    UnknownCategory {
        language: String,
        node_kind: String,
        name: String,
    },
}

/// Anything the walker can ask "which category is this node kind?"
pub trait NodeCategories {
    fn category(&self, node_kind: &str) -> Option<Category>;
}

impl NodeCategories for NodeMap {
    fn category(&self, node_kind: &str) -> Option<Category> {
        self.get(node_kind).copied()
    }
}

/// Flatten a feature table into a node map. A node kind listed under two
/// categories keeps the later one.
pub fn expand_features(features: NodeFeatures) -> NodeMap {
    features
        .iter()
        .flat_map(|(category, kinds)| kinds.iter().map(move |kind| (kind.to_string(), *category)))
        .collect()
}

/// Build a node map from category names, failing on the first name that is
/// not a [`Category`].
pub fn parse_node_map<I, K, V>(language: &str, entries: I) -> Result<NodeMap, NodeMapError>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: AsRef<str>,
{
    let mut node_map = NodeMap::new();
    for (kind, name) in entries {
        let kind = kind.into();
        let category = name.as_ref().parse::<Category>().map_err(|err| {
            debug!("Rejected override {} -> {}: {}", kind, name.as_ref(), err);
            NodeMapError::UnknownCategory {
                language: language.to_string(),
                node_kind: kind.clone(),
                name: err.0,
            }
        })?;
        node_map.insert(kind, category);
    }
    Ok(node_map)
}

fn builtin_features() -> [(&'static str, NodeFeatures); 21] {
    [
        ("ruby", RUBY),
        ("hcl", HCL),
        ("rust", RUST),
        ("python", PYTHON),
        ("javascript", JAVASCRIPT),
        ("bash", BASH),
        ("c", C),
        ("cobol", COBOL),
        ("crystal", CRYSTAL),
        ("csharp", CSHARP),
        ("elixir", ELIXIR),
        ("groovy", GROOVY),
        ("haml", HAML),
        ("html", HTML),
        ("java", JAVA),
        ("json", JSON),
        ("pascal", PASCAL),
        ("php", PHP),
        ("sql", SQL),
        ("swift", SWIFT),
        ("yaml", YAML),
    ]
}

/// Borrowed view of one language's default and override layers.
///
/// Lookups consult the override layer first, which is exactly
/// `default.merge(override)` without materialising the merged map.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeTable<'a> {
    defaults: Option<&'a NodeMap>,
    overrides: Option<&'a NodeMap>,
}

impl NodeTable<'_> {
    pub fn is_empty(&self) -> bool {
        self.defaults.is_none_or(|m| m.is_empty()) && self.overrides.is_none_or(|m| m.is_empty())
    }
}

impl NodeCategories for NodeTable<'_> {
    fn category(&self, node_kind: &str) -> Option<Category> {
        self.overrides
            .and_then(|m| m.category(node_kind))
            .or_else(|| self.defaults.and_then(|m| m.category(node_kind)))
    }
}

/// Registry of node-category tables.
///
/// Built-in tables are fixed at construction; override tables can be
/// registered and cleared at any time without touching the defaults.
#[derive(Debug, Clone)]
pub struct NodeMaps {
    defaults: HashMap<String, NodeMap>,
    overrides: HashMap<String, NodeMap>,
}

impl NodeMaps {
    /// Registry seeded with the built-in tables.
    pub fn new() -> Self {
        let defaults = builtin_features()
            .into_iter()
            .map(|(language, features)| (language.to_string(), expand_features(features)))
            .collect();

        Self {
            defaults,
            overrides: HashMap::new(),
        }
    }

    /// Registry with no built-in tables at all.
    pub fn empty() -> Self {
        Self {
            defaults: HashMap::new(),
            overrides: HashMap::new(),
        }
    }

    pub fn table(&self, language: &str) -> NodeTable<'_> {
        let language = normalize_language(language);
        NodeTable {
            defaults: self.defaults.get(&language),
            overrides: self.overrides.get(&language),
        }
    }

    pub fn lookup(&self, language: &str, node_kind: &str) -> Option<Category> {
        self.table(language).category(node_kind)
    }

    /// Replace the override layer for `language`.
    pub fn register(&mut self, language: &str, node_map: NodeMap) -> Result<(), NodeMapError> {
        let language = normalize_language(language.trim());
        if language.is_empty() {
            return Err(NodeMapError::EmptyLanguage);
        }

        debug!("Registering {} node map overrides for {}", node_map.len(), language);
        self.overrides.insert(language, node_map);
        Ok(())
    }

    /// Register overrides given as category names, e.g. from a config file.
    ///
    /// Every entry is validated before the registry is touched.
    pub fn register_names<I, K, V>(&mut self, language: &str, entries: I) -> Result<(), NodeMapError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let node_map = parse_node_map(language, entries)?;
        self.register(language, node_map)
    }

    pub fn clear_overrides(&mut self) {
        self.overrides.clear();
    }

    /// Languages with a default table or an override, deduplicated and
    /// sorted. Callers must not rely on the order.
    pub fn available_languages(&self) -> Vec<String> {
        let languages: HashSet<&String> = self.defaults.keys().chain(self.overrides.keys()).collect();
        let mut languages: Vec<String> = languages.into_iter().cloned().collect();
        languages.sort();
        languages
    }
}

impl Default for NodeMaps {
    fn default() -> Self {
        Self::new()
    }
}
