// tests/grammar_test.rs - Highlighting with the real tree-sitter grammars

#![cfg(any(feature = "rust", feature = "ruby", feature = "python"))]

use treelight::syntax::{BufferId, Category, Highlighter, TreeSitterProvider};

fn highlighter() -> Highlighter<TreeSitterProvider> {
    Highlighter::new(TreeSitterProvider::with_builtin_grammars())
}

#[cfg(feature = "rust")]
#[test]
fn test_rust_function_and_comment() {
    let mut hl = highlighter();
    let maps = hl.highlight(BufferId(1), "rust", "fn main() {}\n// hi", 0);

    assert_eq!(maps.on.get(&0), Some(&Category::Keyword));
    assert_eq!(maps.off.get(&2), Some(&Category::Keyword));
    assert_eq!(maps.on.get(&3), Some(&Category::Variable));
    assert_eq!(maps.off.get(&7), Some(&Category::Variable));
    assert_eq!(maps.on.get(&13), Some(&Category::Comment));
}

#[cfg(feature = "rust")]
#[test]
fn test_rust_reparse_is_stable() {
    let mut hl = highlighter();
    let code = "let x = 42; // answer";

    let first = hl.highlight(BufferId(1), "rust", code, 0);
    let second = hl.highlight(BufferId(1), "rust", code, 0);

    assert!(!first.is_empty());
    assert_eq!(first, second);
    assert!(hl.cache().contains(BufferId(1)));
}

#[cfg(feature = "rust")]
#[test]
fn test_rust_base_offset() {
    let mut hl = highlighter();
    let plain = hl.highlight(BufferId(1), "rust", "fn f() {}", 0);
    let shifted = hl.highlight(BufferId(2), "rust", "fn f() {}", 40);

    let plain_keys: Vec<usize> = plain.on.keys().map(|k| k + 40).collect();
    let shifted_keys: Vec<usize> = shifted.on.keys().copied().collect();
    assert_eq!(plain_keys, shifted_keys);
}

#[cfg(feature = "ruby")]
#[test]
fn test_ruby_method() {
    let mut hl = highlighter();
    let maps = hl.highlight(BufferId(1), "ruby", "# hi\ndef x\nend", 0);

    assert_eq!(maps.on.get(&0), Some(&Category::Comment));
    assert_eq!(maps.off.get(&4), Some(&Category::Comment));
    // `def` sits inside a function_name method node but differs from it
    assert_eq!(maps.on.get(&5), Some(&Category::Keyword));
    assert_eq!(maps.on.get(&9), Some(&Category::Variable));
}

#[cfg(feature = "python")]
#[test]
fn test_python_string_is_highlighted() {
    let mut hl = highlighter();
    let maps = hl.highlight(BufferId(1), "py", "x = 'hi'", 0);

    assert_eq!(maps.on.get(&4), Some(&Category::String));
}
