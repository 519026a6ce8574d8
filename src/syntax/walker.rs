// Depth-first walk from parse tree to highlight spans

use crate::syntax::{Category, NodeCategories};
use std::fmt::Write as _;

/// Read-only view of a parse-tree node. Byte offsets are half-open
/// `[start, end)` into the UTF-8 text that was parsed.
pub trait ParseNode: Sized {
    fn kind(&self) -> &str;
    fn start_byte(&self) -> usize;
    fn end_byte(&self) -> usize;
    fn child_count(&self) -> usize;
    fn child(&self, index: usize) -> Option<Self>;
}

/// A parsed tree that can hand out its root node.
pub trait SyntaxTree {
    type Node<'a>: ParseNode
    where
        Self: 'a;

    fn root_node(&self) -> Self::Node<'_>;
}

impl<'tree> ParseNode for tree_sitter::Node<'tree> {
    fn kind(&self) -> &str {
        tree_sitter::Node::kind(self)
    }

    fn start_byte(&self) -> usize {
        tree_sitter::Node::start_byte(self)
    }

    fn end_byte(&self) -> usize {
        tree_sitter::Node::end_byte(self)
    }

    fn child_count(&self) -> usize {
        tree_sitter::Node::child_count(self)
    }

    fn child(&self, index: usize) -> Option<Self> {
        tree_sitter::Node::child(self, index)
    }
}

impl SyntaxTree for tree_sitter::Tree {
    type Node<'a> = tree_sitter::Node<'a>;

    fn root_node(&self) -> Self::Node<'_> {
        tree_sitter::Tree::root_node(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HighlightSpan {
    pub category: Category,
    pub start: usize,
    pub end: usize,
}

/// Lazy pre-order walk producing the minimal span list for a tree.
///
/// A node is emitted when it has a category that differs from the category
/// its nearest emitted ancestor already covers it with. Unmapped nodes pass
/// the covering category down to their children unchanged. Child ranges are
/// trusted to nest inside their parent's range.
///
/// Each node is visited once; the iterator is not restartable.
pub struct HighlightWalker<'m, N, M: ?Sized> {
    node_map: &'m M,
    // (node, covering category inherited from the nearest mapped ancestor)
    stack: Vec<(N, Option<Category>)>,
}

impl<'m, N: ParseNode, M: NodeCategories + ?Sized> HighlightWalker<'m, N, M> {
    pub fn new(root: N, node_map: &'m M) -> Self {
        Self {
            node_map,
            stack: vec![(root, None)],
        }
    }
}

impl<N: ParseNode, M: NodeCategories + ?Sized> Iterator for HighlightWalker<'_, N, M> {
    type Item = HighlightSpan;

    fn next(&mut self) -> Option<HighlightSpan> {
        while let Some((node, covering)) = self.stack.pop() {
            let own = self.node_map.category(node.kind());
            let child_count = node.child_count();

            if child_count > 0 {
                let child_covering = own.or(covering);
                // Reverse so the first child is popped first.
                for index in (0..child_count).rev() {
                    if let Some(child) = node.child(index) {
                        self.stack.push((child, child_covering));
                    }
                }
            }

            // Leaves and inner nodes share the rule: unmapped nodes are never
            // emitted, mapped ones only when they differ from their cover.
            match own {
                Some(category) if own != covering => {
                    return Some(HighlightSpan {
                        category,
                        start: node.start_byte(),
                        end: node.end_byte(),
                    });
                }
                _ => continue,
            }
        }

        None
    }
}

pub fn walk<N: ParseNode, M: NodeCategories + ?Sized>(root: N, node_map: &M) -> HighlightWalker<'_, N, M> {
    HighlightWalker::new(root, node_map)
}

/// Indented `kind [start, end)` outline of a tree, one node per line.
pub fn dump_tree<N: ParseNode>(root: N) -> String {
    let mut out = String::new();
    let mut stack = vec![(root, 0usize)];

    while let Some((node, depth)) = stack.pop() {
        let _ = writeln!(
            out,
            "{}{} [{}, {})",
            "  ".repeat(depth),
            node.kind(),
            node.start_byte(),
            node.end_byte()
        );
        for index in (0..node.child_count()).rev() {
            if let Some(child) = node.child(index) {
                stack.push((child, depth + 1));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::NodeMap;

    struct Node {
        kind: &'static str,
        start: usize,
        end: usize,
        children: Vec<Node>,
    }

    fn leaf(kind: &'static str, start: usize, end: usize) -> Node {
        Node {
            kind,
            start,
            end,
            children: Vec::new(),
        }
    }

    fn branch(kind: &'static str, start: usize, end: usize, children: Vec<Node>) -> Node {
        Node {
            kind,
            start,
            end,
            children,
        }
    }

    impl<'a> ParseNode for &'a Node {
        fn kind(&self) -> &str {
            self.kind
        }

        fn start_byte(&self) -> usize {
            self.start
        }

        fn end_byte(&self) -> usize {
            self.end
        }

        fn child_count(&self) -> usize {
            self.children.len()
        }

        fn child(&self, index: usize) -> Option<Self> {
            let node: &'a Node = *self;
            node.children.get(index)
        }
    }

    fn map(entries: &[(&str, Category)]) -> NodeMap {
        entries.iter().map(|(k, c)| (k.to_string(), *c)).collect()
    }

    fn span(category: Category, start: usize, end: usize) -> HighlightSpan {
        HighlightSpan { category, start, end }
    }

    #[test]
    fn test_leaf_with_same_category_as_parent_is_suppressed() {
        // "a\n": content followed by an escape sequence
        let tree = branch(
            "string",
            0,
            6,
            vec![leaf("string_content", 1, 2), leaf("escape_sequence", 2, 4)],
        );
        let node_map = map(&[
            ("string", Category::String),
            ("string_content", Category::String),
            ("escape_sequence", Category::String),
        ]);

        let spans: Vec<_> = walk(&tree, &node_map).collect();
        assert_eq!(spans, vec![span(Category::String, 0, 6)]);
    }

    #[test]
    fn test_leaf_with_different_category_is_kept() {
        let tree = branch(
            "string",
            0,
            10,
            vec![leaf("string_content", 1, 3), leaf("constant", 4, 7)],
        );
        let node_map = map(&[
            ("string", Category::String),
            ("string_content", Category::String),
            ("constant", Category::Constant),
        ]);

        let spans: Vec<_> = walk(&tree, &node_map).collect();
        assert_eq!(
            spans,
            vec![span(Category::String, 0, 10), span(Category::Constant, 4, 7)]
        );
    }

    #[test]
    fn test_cover_propagates_through_unmapped_nodes() {
        let tree = branch(
            "string",
            0,
            10,
            vec![branch("interpolation", 2, 8, vec![leaf("string_content", 3, 5)])],
        );
        let node_map = map(&[
            ("string", Category::String),
            ("string_content", Category::String),
        ]);

        let spans: Vec<_> = walk(&tree, &node_map).collect();
        assert_eq!(spans, vec![span(Category::String, 0, 10)]);
    }

    #[test]
    fn test_nearest_mapped_ancestor_decides_cover() {
        // string > constant > string_content: the inner string is covered by
        // the constant, not the outer string, so it shows again.
        let tree = branch(
            "string",
            0,
            10,
            vec![branch("constant", 2, 8, vec![leaf("string_content", 3, 5)])],
        );
        let node_map = map(&[
            ("string", Category::String),
            ("constant", Category::Constant),
            ("string_content", Category::String),
        ]);

        let spans: Vec<_> = walk(&tree, &node_map).collect();
        assert_eq!(
            spans,
            vec![
                span(Category::String, 0, 10),
                span(Category::Constant, 2, 8),
                span(Category::String, 3, 5),
            ]
        );
    }

    #[test]
    fn test_unmapped_leaves_emit_nothing() {
        let tree = branch("program", 0, 3, vec![leaf("(", 0, 1), leaf(")", 1, 2)]);
        let spans: Vec<_> = walk(&tree, &NodeMap::new()).collect();
        assert!(spans.is_empty());
    }

    #[test]
    fn test_spans_come_out_in_pre_order() {
        let tree = branch(
            "program",
            0,
            20,
            vec![
                branch("call", 0, 10, vec![leaf("identifier", 0, 3), leaf("integer", 4, 6)]),
                leaf("comment", 11, 20),
            ],
        );
        let node_map = map(&[
            ("call", Category::FunctionName),
            ("identifier", Category::Variable),
            ("integer", Category::Number),
            ("comment", Category::Comment),
        ]);

        let spans: Vec<_> = walk(&tree, &node_map).collect();
        assert_eq!(
            spans,
            vec![
                span(Category::FunctionName, 0, 10),
                span(Category::Variable, 0, 3),
                span(Category::Number, 4, 6),
                span(Category::Comment, 11, 20),
            ]
        );
    }

    #[test]
    fn test_walker_is_lazy() {
        let tree = branch(
            "program",
            0,
            9,
            vec![leaf("comment", 0, 3), leaf("comment", 3, 6), leaf("comment", 6, 9)],
        );
        let node_map = map(&[("comment", Category::Comment)]);

        let mut walker = walk(&tree, &node_map);
        assert_eq!(walker.next(), Some(span(Category::Comment, 0, 3)));
        assert_eq!(walker.next(), Some(span(Category::Comment, 3, 6)));
        assert_eq!(walker.next(), Some(span(Category::Comment, 6, 9)));
        assert_eq!(walker.next(), None);
        assert_eq!(walker.next(), None);
    }

    #[test]
    fn test_dump_tree_outline() {
        let tree = branch("program", 0, 4, vec![leaf("comment", 0, 4)]);
        assert_eq!(dump_tree(&tree), "program [0, 4)\n  comment [0, 4)\n");
    }
}
