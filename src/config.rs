use crate::syntax::{Category, CategoryFilter, MAX_HIGHLIGHT_LEVEL, NodeMapError, NodeMaps, parse_node_map};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Invalid config format: {0}")]
    Parse(String),
    #[error("Highlight level {0} is out of range (1-4)")]
    LevelOutOfRange(u8),
    #[error(transparent)]
    NodeMap(#[from] NodeMapError),
}

/// Host-facing highlighting settings.
///
/// ```toml
/// highlight_level = 4
/// # enabled_categories = ["comment", "string", "property"]
///
/// [node_maps.ruby]
/// heredoc_end = "string"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Master switch; when off every request yields no highlighting.
    pub syntax_highlight: bool,
    pub highlight_level: Option<u8>,
    /// Explicit allow-list; takes precedence over `highlight_level`.
    pub enabled_categories: Option<Vec<Category>>,
    /// language -> node kind -> category name
    pub node_maps: BTreeMap<String, BTreeMap<String, String>>,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            syntax_highlight: true,
            highlight_level: None,
            enabled_categories: None,
            node_maps: BTreeMap::new(),
        }
    }
}

impl HighlightConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Build the category filter, rejecting levels outside 1–4.
    pub fn category_filter(&self) -> Result<CategoryFilter, ConfigError> {
        if let Some(categories) = &self.enabled_categories {
            return Ok(CategoryFilter::with_allow_list(categories.iter().copied()));
        }

        match self.highlight_level {
            Some(level) if !(1..=MAX_HIGHLIGHT_LEVEL).contains(&level) => {
                Err(ConfigError::LevelOutOfRange(level))
            }
            Some(level) => Ok(CategoryFilter::with_level(level)),
            None => Ok(CategoryFilter::default()),
        }
    }

    /// Register the configured override tables. Nothing is registered
    /// unless every table is valid.
    pub fn apply_node_maps(&self, node_maps: &mut NodeMaps) -> Result<(), ConfigError> {
        let parsed = self
            .node_maps
            .iter()
            .map(|(language, entries)| {
                if language.trim().is_empty() {
                    return Err(NodeMapError::EmptyLanguage);
                }
                parse_node_map(language, entries.iter().map(|(k, v)| (k.as_str(), v.as_str())))
                    .map(|node_map| (language, node_map))
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (language, node_map) in parsed {
            node_maps.register(language, node_map)?;
        }
        Ok(())
    }
}

pub fn get_config_dir() -> PathBuf {
    let config_home = dirs::config_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".config")
    });
    config_home.join("treelight")
}

pub fn find_config_file() -> Option<PathBuf> {
    let paths = vec![
        get_config_dir().join("config.toml"),
        dirs::home_dir()?.join(".treelight").join("config.toml"),
    ];

    paths.into_iter().find(|p| p.exists())
}
