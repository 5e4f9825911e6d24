//! Tree-sitter parser integration for Python
//!
//! The grammar recovers from malformed input and still carries the Python 2
//! `print` and `exec` statements, so a tree is only accepted when it contains
//! no ERROR or MISSING nodes and none of those legacy statements.

use super::walk::PreorderWalk;
use crate::errors::{Error, Result};
use tree_sitter::{Node, Parser, Tree};

/// Parse Python source code into a tree-sitter syntax tree
pub fn parse_module(source: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| Error::Grammar(e.to_string()))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| Error::syntax(1, 1, "parser produced no tree"))?;

    match first_syntax_error(&tree) {
        Some(error) => Err(error),
        None => Ok(tree),
    }
}

/// Check if a parse tree has errors
pub fn has_parse_errors(tree: &Tree) -> bool {
    first_syntax_error(tree).is_some()
}

fn first_syntax_error(tree: &Tree) -> Option<Error> {
    let root = tree.root_node();
    let check_recovery = root.has_error();
    let found = PreorderWalk::new(root).find_map(|node| {
        let message = match node.kind() {
            "print_statement" => "missing parentheses in call to 'print'".to_string(),
            "exec_statement" => "missing parentheses in call to 'exec'".to_string(),
            kind if check_recovery && node.is_missing() => format!("missing {kind}"),
            _ if check_recovery && node.is_error() => "invalid syntax".to_string(),
            _ => return None,
        };
        Some(Error::syntax(node_line(&node), node_column(&node), message))
    });

    match found {
        None if check_recovery => Some(Error::syntax(1, 1, "invalid syntax")),
        found => found,
    }
}

/// Get text for a tree-sitter node
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    source.get(node.byte_range()).unwrap_or_default()
}

/// Get the line number for a tree-sitter node (1-indexed)
pub fn node_line(node: &Node) -> usize {
    node.start_position().row + 1
}

/// Get the column number for a tree-sitter node (1-indexed)
pub fn node_column(node: &Node) -> usize {
    node.start_position().column + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_module() {
        let tree = parse_module("def hello():\n    return 'world'\n").unwrap();
        assert_eq!(tree.root_node().kind(), "module");
        assert!(!has_parse_errors(&tree));
    }

    #[test]
    fn test_parse_empty_source() {
        let tree = parse_module("").unwrap();
        assert_eq!(tree.root_node().named_child_count(), 0);
    }

    #[test]
    fn test_unbalanced_parentheses_is_syntax_error() {
        let err = parse_module("print((1, 2)\n").unwrap_err();
        assert!(err.is_syntax());
    }

    #[test]
    fn test_python2_print_is_syntax_error() {
        for source in ["import os\nprint \"hi\"\n", "import sys\nprint >>sys.stderr, 'x'\n"] {
            match parse_module(source) {
                Err(Error::Syntax { line, column, message }) => {
                    assert_eq!((line, column), (2, 1));
                    assert_eq!(message, "missing parentheses in call to 'print'");
                }
                other => panic!("expected syntax error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_python2_exec_is_syntax_error() {
        let err = parse_module("def f():\n    exec \"x = 1\"\n").unwrap_err();
        assert!(err.is_syntax());
        assert!(err.to_string().contains("'exec'"));
    }

    #[test]
    fn test_print_call_is_accepted() {
        let tree = parse_module("print(\"hi\")\nexec(\"x = 1\")\n").unwrap();
        assert!(!has_parse_errors(&tree));
    }

    #[test]
    fn test_syntax_error_reports_line() {
        let source = "x = 1\ny = 2\ndef broken(:\n    pass\n";
        match parse_module(source) {
            Err(Error::Syntax { line, .. }) => assert!(line >= 3),
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn test_node_text_and_position() {
        let source = "import os\n";
        let tree = parse_module(source).unwrap();
        let stmt = tree.root_node().named_child(0).unwrap();
        assert_eq!(node_text(&stmt, source), "import os");
        assert_eq!(node_line(&stmt), 1);
        assert_eq!(node_column(&stmt), 1);
    }
}
