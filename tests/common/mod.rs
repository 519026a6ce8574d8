// Common test utilities: hand-built parse trees and a parser that serves them

use std::collections::HashMap;
use treelight::syntax::{ParseNode, ParserProvider, SyntaxTree, normalize_language};

/// Owned parse-tree node with explicit byte ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct MockNode {
    pub kind: String,
    pub start: usize,
    pub end: usize,
    pub children: Vec<MockNode>,
}

#[allow(dead_code)]
pub fn node(kind: &str, start: usize, end: usize, children: Vec<MockNode>) -> MockNode {
    MockNode {
        kind: kind.to_string(),
        start,
        end,
        children,
    }
}

#[allow(dead_code)]
pub fn leaf(kind: &str, start: usize, end: usize) -> MockNode {
    node(kind, start, end, Vec::new())
}

impl<'a> ParseNode for &'a MockNode {
    fn kind(&self) -> &str {
        &self.kind
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
        let node: &'a MockNode = *self;
        node.children.get(index)
    }
}

impl SyntaxTree for MockNode {
    type Node<'a> = &'a MockNode;

    fn root_node(&self) -> &MockNode {
        self
    }
}

/// Serves a fixed tree per language, regardless of the text.
#[derive(Default)]
pub struct MockProvider {
    trees: HashMap<String, MockNode>,
    pub parses: usize,
    pub reused: usize,
}

#[allow(dead_code)]
impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tree(mut self, language: &str, tree: MockNode) -> Self {
        self.set_tree(language, tree);
        self
    }

    pub fn set_tree(&mut self, language: &str, tree: MockNode) {
        self.trees.insert(normalize_language(language), tree);
    }
}

impl ParserProvider for MockProvider {
    type Tree = MockNode;

    fn supports(&self, language: &str) -> bool {
        self.trees.contains_key(&normalize_language(language))
    }

    fn parse(&mut self, language: &str, _text: &str, old_tree: Option<&MockNode>) -> Option<MockNode> {
        let tree = self.trees.get(&normalize_language(language))?.clone();
        self.parses += 1;
        if old_tree.is_some() {
            self.reused += 1;
        }
        Some(tree)
    }
}

/// Tree for `"# hi\ndef x\nend"` as a Ruby-like parser would produce it.
#[allow(dead_code)]
pub fn def_method_tree() -> MockNode {
    node(
        "program",
        0,
        14,
        vec![
            leaf("comment", 0, 4),
            node(
                "method",
                5,
                14,
                vec![leaf("def", 5, 8), leaf("identifier", 9, 10), leaf("end", 11, 14)],
            ),
        ],
    )
}

#[allow(dead_code)]
pub const DEF_METHOD_TEXT: &str = "# hi\ndef x\nend";
