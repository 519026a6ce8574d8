use anyhow::{Context, Result, bail};
use log::info;
use treelight::cli;
use treelight::config::{HighlightConfig, find_config_file};
use treelight::syntax::{
    BufferId, HighlightMaps, Highlighter, ParserProvider, TreeSitterProvider,
    dump_tree, normalize_language,
};

/// Parse arguments, load config, then print either the parse tree outline or
/// one line per highlighted span.
fn main() -> Result<()> {
    let args = cli::parse_args();

    // Initialize logger (set RUST_LOG env var to control verbosity)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut config = match args.config.clone().or_else(find_config_file) {
        Some(path) => {
            info!("Loading config from {}", path.display());
            HighlightConfig::from_file(&path)
                .with_context(|| format!("loading config {}", path.display()))?
        }
        None => HighlightConfig::default(),
    };

    let Some(language) = args.resolve_language() else {
        bail!(
            "Cannot detect language of '{}', pass --language",
            args.file.display()
        );
    };
    let language = normalize_language(&language);

    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;

    let mut provider = TreeSitterProvider::with_builtin_grammars();
    if !provider.supports(&language) {
        bail!(
            "No parser for '{}' in this build (have: {})",
            language,
            provider.languages().join(", ")
        );
    }

    if args.dump_tree {
        let tree = provider
            .parse(&language, &text, None)
            .with_context(|| format!("parsing {}", args.file.display()))?;
        print!("{}", dump_tree(tree.root_node()));
        return Ok(());
    }

    args.apply_to_config(&mut config);
    let mut highlighter = Highlighter::with_config(provider, &config)?;

    let maps = highlighter.highlight(BufferId(0), &language, &text, args.base_offset);
    for line in format_spans(&maps, &text, args.base_offset) {
        println!("{}", line);
    }
    Ok(())
}

/// Pair each start event with the next end event of the same category.
fn format_spans(maps: &HighlightMaps, text: &str, base_offset: usize) -> Vec<String> {
    maps.on
        .iter()
        .filter_map(|(&start, &category)| {
            let (&end, _) = maps
                .off
                .range(start + 1..)
                .find(|(_, off)| **off == category)?;
            let snippet = text
                .get(start - base_offset..end - base_offset)
                .unwrap_or("")
                .escape_debug()
                .to_string();
            Some(format!("{}..{} {} {}", start, end, category, snippet))
        })
        .collect()
}
