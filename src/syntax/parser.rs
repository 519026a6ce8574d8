use crate::syntax::{SyntaxTree, builtin_grammars, normalize_language};
use log::{debug, warn};
use std::collections::HashMap;
use thiserror::Error;
use tree_sitter::{Language, Parser, Tree};

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("Failed to load {language} grammar: {message}")]
    Language { language: String, message: String },
}

/// Source of parse trees, one parser per language.
///
/// `old_tree` is the tree cached for the same buffer, language and content;
/// implementations may use it to reparse incrementally.
pub trait ParserProvider {
    type Tree: SyntaxTree;

    fn supports(&self, language: &str) -> bool;

    /// Parse `text`, or `None` if there is no parser for `language` or
    /// parsing failed.
    fn parse(&mut self, language: &str, text: &str, old_tree: Option<&Self::Tree>) -> Option<Self::Tree>;
}

/// Tree-sitter parsers keyed by normalized language name
pub struct TreeSitterProvider {
    parsers: HashMap<String, Parser>,
}

impl TreeSitterProvider {
    pub fn new() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    /// Provider with every grammar compiled into this build.
    pub fn with_builtin_grammars() -> Self {
        let mut provider = Self::new();
        for (name, language) in builtin_grammars() {
            if let Err(e) = provider.register_language(name, language) {
                warn!("{}", e);
            }
        }
        provider
    }

    pub fn register_language(&mut self, name: &str, language: Language) -> Result<(), ParserError> {
        let name = normalize_language(name);
        let mut parser = Parser::new();
        parser
            .set_language(language)
            .map_err(|e| ParserError::Language {
                language: name.clone(),
                message: e.to_string(),
            })?;

        debug!("Registered tree-sitter parser for {}", name);
        self.parsers.insert(name, parser);
        Ok(())
    }

    pub fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.parsers.keys().cloned().collect();
        languages.sort();
        languages
    }
}

impl Default for TreeSitterProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserProvider for TreeSitterProvider {
    type Tree = Tree;

    fn supports(&self, language: &str) -> bool {
        self.parsers.contains_key(&normalize_language(language))
    }

    fn parse(&mut self, language: &str, text: &str, old_tree: Option<&Tree>) -> Option<Tree> {
        let parser = self.parsers.get_mut(&normalize_language(language))?;
        parser.parse(text, old_tree)
    }
}
