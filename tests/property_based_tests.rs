// Property-based tests using proptest
// Random trees, random filters and random cache traffic

mod common;

use common::{MockNode, leaf, node};
use proptest::prelude::*;
use std::collections::HashSet;
use std::num::NonZeroUsize;
use treelight::syntax::{
    BufferId, Category, CategoryFilter, HighlightSpan, MAX_HIGHLIGHT_LEVEL, NodeMap, TreeCache,
    emit, walk,
};

const KINDS: &[&str] = &["program", "method", "block", "def", "identifier", "comment", "string", "end"];

fn table() -> NodeMap {
    NodeMap::from([
        ("method".to_string(), Category::FunctionName),
        ("block".to_string(), Category::Keyword),
        ("def".to_string(), Category::Keyword),
        ("identifier".to_string(), Category::Variable),
        ("comment".to_string(), Category::Comment),
        ("string".to_string(), Category::String),
    ])
}

/// Give every node one byte of its own before its children.
fn layout(node: &mut MockNode, start: usize) -> usize {
    let mut end = start + 1;
    for child in &mut node.children {
        end = layout(child, end);
    }
    node.start = start;
    node.end = end;
    end
}

fn arb_tree() -> impl Strategy<Value = MockNode> {
    let kind = prop::sample::select(KINDS);
    kind.clone()
        .prop_map(|k| leaf(k, 0, 0))
        .prop_recursive(5, 64, 4, move |inner| {
            (kind.clone(), prop::collection::vec(inner, 1..4))
                .prop_map(|(k, children)| node(k, 0, 0, children))
        })
        .prop_map(|mut root| {
            layout(&mut root, 0);
            root
        })
}

/// Straightforward recursive statement of the coverage rule.
fn expected_spans(
    node: &MockNode,
    table: &NodeMap,
    covering: Option<Category>,
    out: &mut Vec<HighlightSpan>,
) {
    let own = table.get(&node.kind).copied();
    if let Some(category) = own {
        if own != covering {
            out.push(HighlightSpan {
                category,
                start: node.start,
                end: node.end,
            });
        }
    }
    for child in &node.children {
        expected_spans(child, table, own.or(covering), out);
    }
}

fn enabled_at(level: u8) -> HashSet<Category> {
    CategoryFilter::with_level(level).enabled_categories()
}

// Property: the walker emits a node exactly when its category differs from
// the category of its nearest mapped ancestor, in pre-order
proptest! {
    #[test]
    fn walker_matches_coverage_rule(tree in arb_tree()) {
        let table = table();
        let mut expected = Vec::new();
        expected_spans(&tree, &table, None, &mut expected);

        let spans: Vec<HighlightSpan> = walk(&tree, &table).collect();
        prop_assert_eq!(spans, expected);
    }
}

// Property: an emitted span never repeats the category of the nearest
// emitted span enclosing it
proptest! {
    #[test]
    fn nested_same_category_is_never_emitted(tree in arb_tree()) {
        let table = table();
        let spans: Vec<HighlightSpan> = walk(&tree, &table).collect();

        for (i, inner) in spans.iter().enumerate() {
            // nearest enclosing span emitted before this one
            let parent = spans[..i]
                .iter()
                .rev()
                .find(|outer| outer.start <= inner.start && inner.end <= outer.end);
            if let Some(parent) = parent {
                prop_assert_ne!(parent.category, inner.category);
            }
        }
    }
}

// Property: raising the level never removes a category or an emitted span
proptest! {
    #[test]
    fn levels_are_monotonic(tree in arb_tree(), level in 1u8..MAX_HIGHLIGHT_LEVEL) {
        let lower = enabled_at(level);
        let higher = enabled_at(level + 1);
        prop_assert!(lower.is_subset(&higher));

        let table = table();
        let count = |enabled: &HashSet<Category>| {
            walk(&tree, &table).filter(|s| enabled.contains(&s.category)).count()
        };
        prop_assert!(count(&lower) <= count(&higher));
    }
}

// Property: every emitted event carries an enabled category and sits inside
// the shifted text range
proptest! {
    #[test]
    fn emitted_events_respect_filter(
        tree in arb_tree(),
        level in 1u8..=MAX_HIGHLIGHT_LEVEL,
        base_offset in 0usize..1000,
    ) {
        let table = table();
        let enabled = enabled_at(level);
        let maps = emit(walk(&tree, &table), base_offset, &enabled);

        for (pos, category) in maps.on.iter().chain(maps.off.iter()) {
            prop_assert!(enabled.contains(category));
            prop_assert!(*pos >= base_offset);
            prop_assert!(*pos <= base_offset + tree.end);
        }
    }
}

#[derive(Debug, Clone)]
enum CacheOp {
    Put(u64, bool),
    Get(u64, bool),
    Remove(u64),
}

fn arb_cache_op() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (0u64..20, any::<bool>()).prop_map(|(id, alt)| CacheOp::Put(id, alt)),
        (0u64..20, any::<bool>()).prop_map(|(id, alt)| CacheOp::Get(id, alt)),
        (0u64..20).prop_map(CacheOp::Remove),
    ]
}

// Property: the cache never holds more than its capacity and always keeps
// the tree it just stored
proptest! {
    #[test]
    fn cache_never_exceeds_capacity(
        capacity in 1usize..12,
        ops in prop::collection::vec(arb_cache_op(), 0..200),
    ) {
        let capacity = NonZeroUsize::new(capacity).unwrap();
        let mut cache: TreeCache<u64> = TreeCache::with_capacity(capacity);

        for op in ops {
            match op {
                CacheOp::Put(id, alt) => {
                    let content = if alt { "b" } else { "a" };
                    prop_assert_eq!(*cache.put(BufferId(id), "toy", content, id), id);
                    prop_assert!(cache.contains(BufferId(id)));
                    prop_assert_eq!(cache.buffer_ids().first().copied(), Some(BufferId(id)));
                }
                CacheOp::Get(id, alt) => {
                    let content = if alt { "b" } else { "a" };
                    if let Some(tree) = cache.get(BufferId(id), "toy", content) {
                        prop_assert_eq!(*tree, id);
                    }
                }
                CacheOp::Remove(id) => {
                    cache.remove(BufferId(id));
                    prop_assert!(!cache.contains(BufferId(id)));
                }
            }

            prop_assert!(cache.len() <= capacity.get());
            let ids = cache.buffer_ids();
            prop_assert_eq!(ids.len(), cache.len());
            let unique: HashSet<BufferId> = ids.iter().copied().collect();
            prop_assert_eq!(unique.len(), ids.len());
        }
    }
}
