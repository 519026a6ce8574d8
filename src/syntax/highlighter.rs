use crate::config::{ConfigError, HighlightConfig};
use crate::syntax::{
    BufferId, CategoryFilter, HighlightMaps, NodeMap, NodeMapError, NodeMaps,
    ParserProvider, SyntaxTree, TreeCache, emit, normalize_language, walk,
};
use log::debug;

/// Highlighting engine for one host.
///
/// The host calls [`Highlighter::highlight`] from its redraw path; the engine
/// owns the node-category registry, the category filter, the parser provider
/// and the per-buffer tree cache. It is single-threaded by construction.
pub struct Highlighter<P: ParserProvider> {
    provider: P,
    node_maps: NodeMaps,
    filter: CategoryFilter,
    cache: TreeCache<P::Tree>,
    enabled: bool,
}

impl<P: ParserProvider> Highlighter<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            node_maps: NodeMaps::new(),
            filter: CategoryFilter::default(),
            cache: TreeCache::new(),
            enabled: true,
        }
    }

    pub fn with_config(provider: P, config: &HighlightConfig) -> Result<Self, ConfigError> {
        let mut highlighter = Self::new(provider);
        highlighter.filter = config.category_filter()?;
        highlighter.enabled = config.syntax_highlight;
        config.apply_node_maps(&mut highlighter.node_maps)?;
        Ok(highlighter)
    }

    /// Compute style events for the whole buffer.
    ///
    /// # Arguments
    ///
    /// * `buffer_id` - Stable identity of the host buffer, used as the cache key
    /// * `language` - Language name or alias (`"rb"`, `"C_Sharp"`, ...)
    /// * `text` - Full buffer text
    /// * `base_offset` - Added to every reported offset
    ///
    /// # Returns
    ///
    /// On/off maps in byte offsets into `text`, shifted by `base_offset`.
    /// Any failure along the way (disabled, unknown language, no parser,
    /// parse failure) yields empty maps.
    pub fn highlight(
        &mut self,
        buffer_id: BufferId,
        language: &str,
        text: &str,
        base_offset: usize,
    ) -> HighlightMaps {
        if !self.enabled {
            return HighlightMaps::default();
        }

        let language = normalize_language(language);
        let table = self.node_maps.table(&language);
        if table.is_empty() {
            debug!("No node map for {}, skipping highlight", language);
            return HighlightMaps::default();
        }

        let old_tree = self.cache.get(buffer_id, &language, text);
        let incremental = old_tree.is_some();
        let Some(tree) = self.provider.parse(&language, text, old_tree) else {
            debug!("No tree for {} buffer {:?}", language, buffer_id);
            return HighlightMaps::default();
        };
        let tree = self.cache.put(buffer_id, &language, text, tree);

        let enabled = self.filter.enabled_categories();
        let maps = emit(walk(tree.root_node(), &table), base_offset, &enabled);

        debug!(
            "highlight {} buffer={:?} base_offset={} bytes={} incremental={} highlights={}",
            language,
            buffer_id,
            base_offset,
            text.len(),
            incremental,
            maps.on.len()
        );
        maps
    }

    /// Replace the override table for `language`. Lookups consult it before
    /// the built-in table.
    ///
    /// # Errors
    ///
    /// Returns [`NodeMapError::EmptyLanguage`] for a blank language name;
    /// existing tables are left untouched.
    pub fn register_node_category_override(
        &mut self,
        language: &str,
        node_map: NodeMap,
    ) -> Result<(), NodeMapError> {
        self.node_maps.register(language, node_map)
    }

    pub fn clear_overrides(&mut self) {
        self.node_maps.clear_overrides();
    }

    pub fn available_languages(&self) -> Vec<String> {
        self.node_maps.available_languages()
    }

    pub fn node_maps_mut(&mut self) -> &mut NodeMaps {
        &mut self.node_maps
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Drop the cached tree of a buffer the host has closed.
    pub fn forget_buffer(&mut self, buffer_id: BufferId) {
        self.cache.remove(buffer_id);
    }

    pub fn cache(&self) -> &TreeCache<P::Tree> {
        &self.cache
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }
}
