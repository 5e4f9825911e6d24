//! Pre-order traversal over a tree-sitter subtree.
//!
//! Every node, named or anonymous, is yielded exactly once in document
//! order. All extractors share this walk so their ordering agrees.

use tree_sitter::{Node, TreeCursor};

pub struct PreorderWalk<'tree> {
    cursor: TreeCursor<'tree>,
    done: bool,
}

impl<'tree> PreorderWalk<'tree> {
    /// The cursor is rooted at `node`, so the walk never leaves its subtree.
    pub fn new(node: Node<'tree>) -> Self {
        Self {
            cursor: node.walk(),
            done: false,
        }
    }
}

impl<'tree> Iterator for PreorderWalk<'tree> {
    type Item = Node<'tree>;

    fn next(&mut self) -> Option<Node<'tree>> {
        if self.done {
            return None;
        }

        let node = self.cursor.node();
        if !self.cursor.goto_first_child() {
            loop {
                if self.cursor.goto_next_sibling() {
                    break;
                }
                if !self.cursor.goto_parent() {
                    self.done = true;
                    break;
                }
            }
        }

        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspector::parser::parse_module;

    #[test]
    fn test_walk_starts_at_root() {
        let tree = parse_module("x = 1\n").unwrap();
        let mut walk = PreorderWalk::new(tree.root_node());
        assert_eq!(walk.next().map(|n| n.kind()), Some("module"));
    }

    #[test]
    fn test_walk_is_document_order() {
        let tree = parse_module("def a():\n    def b(): pass\ndef c(): pass\n").unwrap();
        let source = "def a():\n    def b(): pass\ndef c(): pass\n";
        let names: Vec<&str> = PreorderWalk::new(tree.root_node())
            .filter(|n| n.kind() == "function_definition")
            .filter_map(|n| n.child_by_field_name("name"))
            .map(|n| &source[n.byte_range()])
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_walk_visits_every_node_once() {
        let tree = parse_module("import os, sys\n").unwrap();
        let visited = PreorderWalk::new(tree.root_node()).count();
        let mut expected = 0;
        let mut stack = vec![tree.root_node()];
        while let Some(node) = stack.pop() {
            expected += 1;
            let mut cursor = node.walk();
            stack.extend(node.children(&mut cursor));
        }
        assert_eq!(visited, expected);
    }

    #[test]
    fn test_walk_of_subtree_stays_inside() {
        let source = "class A:\n    x = 1\ny = 2\n";
        let tree = parse_module(source).unwrap();
        let class_node = tree.root_node().named_child(0).unwrap();
        let last = PreorderWalk::new(class_node).last().unwrap();
        assert!(last.end_byte() <= class_node.end_byte());
    }
}
