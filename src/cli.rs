use crate::config::HighlightConfig;
use crate::syntax::{MAX_HIGHLIGHT_LEVEL, language_for_extension};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Default, Parser)]
#[command(name = "treelight")]
#[command(version = "0.1.0")]
#[command(about = "Print tree-sitter node-category highlights for a file")]
pub struct CliArgs {
    /// File to highlight
    pub file: PathBuf,

    /// Language name; detected from the file extension when omitted
    #[arg(long, short = 'l')]
    pub language: Option<String>,

    /// Highlight level (1-4), overrides the config file's level
    #[arg(long, short = 'L', value_parser = clap::value_parser!(u8).range(1..=MAX_HIGHLIGHT_LEVEL as i64))]
    pub level: Option<u8>,

    /// Config file to load instead of the default location
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Print the parse tree outline instead of highlights
    #[arg(long)]
    pub dump_tree: bool,

    /// Offset added to every reported position
    #[arg(long, default_value_t = 0)]
    pub base_offset: usize,
}

impl CliArgs {
    /// Explicit `--language`, else a guess from the file extension.
    pub fn resolve_language(&self) -> Option<String> {
        if let Some(language) = &self.language {
            return Some(language.clone());
        }
        let ext = self.file.extension()?.to_str()?;
        language_for_extension(ext).map(str::to_string)
    }

    /// Fold command-line settings into the loaded config. `--level` only
    /// replaces the config's level; an `enabled_categories` allow-list in
    /// the config still takes precedence.
    pub fn apply_to_config(&self, config: &mut HighlightConfig) {
        if let Some(level) = self.level {
            config.highlight_level = Some(level);
        }
    }
}

pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
