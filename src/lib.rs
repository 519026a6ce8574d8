// lib.rs - Library root for treelight

pub mod cli;
pub mod config;
pub mod syntax;

pub use config::HighlightConfig;
pub use syntax::{BufferId, Category, HighlightMaps, Highlighter, TreeSitterProvider};
