//! Python source inspection.
//!
//! Three independent, read-only extractions over one piece of source text:
//!
//! - [`parse_code`]: function, class, and imported module names
//! - [`extract_docstrings`]: docstrings of function and class definitions
//! - [`extract_comments`]: `#` comment text, line by line
//!
//! The first two parse the source with tree-sitter. Parsing is fail-soft:
//! source with a syntax error yields an empty result instead of an error.
//! The comment scan is purely lexical and never parses.
//!
//! Tree traversals run in pre-order (document order), so names and
//! docstrings come out in the order they appear in the file, outer
//! definitions before the definitions nested inside them.

pub mod comments;
pub mod docstrings;
pub mod parser;
pub mod symbols;
pub mod walk;

pub use docstrings::{clean_docstring, DocstringStyle};
pub use parser::parse_module;
pub use symbols::SymbolTable;

use crate::errors::Result;
use serde::{Deserialize, Serialize};
use tree_sitter::Tree;

/// Everything the inspector extracts from one source text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionReport {
    pub symbols: SymbolTable,
    pub docstrings: Vec<String>,
    pub comments: Vec<String>,
}

/// Extract function names, class names, and imported modules.
///
/// Returns an empty table when `source` does not parse.
pub fn parse_code(source: &str) -> SymbolTable {
    with_tree(source, |tree| symbols::collect_symbols(tree, source))
}

/// Extract cleaned docstrings of function and class definitions.
pub fn extract_docstrings(source: &str) -> Vec<String> {
    extract_docstrings_with(source, DocstringStyle::Clean)
}

pub fn extract_docstrings_with(source: &str, style: DocstringStyle) -> Vec<String> {
    with_tree(source, |tree| {
        docstrings::collect_docstrings(tree, source, style)
    })
}

/// Extract comment text following `#`, one entry per commented line.
pub fn extract_comments(source: &str) -> Vec<String> {
    comments::collect_comments(source)
}

/// Run all three extractions over the same source.
pub fn inspect(source: &str, style: DocstringStyle) -> InspectionReport {
    InspectionReport {
        symbols: parse_code(source),
        docstrings: extract_docstrings_with(source, style),
        comments: extract_comments(source),
    }
}

/// Check that `source` parses, reporting where it first fails.
pub fn check_syntax(source: &str) -> Result<()> {
    parse_module(source).map(|_| ())
}

fn with_tree<T: Default>(source: &str, extract: impl FnOnce(&Tree) -> T) -> T {
    match parse_module(source) {
        Ok(tree) => extract(&tree),
        Err(e) => {
            log::debug!("Returning empty result for unparsable source: {}", e);
            T::default()
        }
    }
}
