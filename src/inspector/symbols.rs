use super::parser::node_text;
use super::walk::PreorderWalk;
use serde::{Deserialize, Serialize};
use tree_sitter::{Node, Tree};

/// Names found in one module, in the order they were first encountered.
///
/// Duplicates are kept: a name defined twice appears twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolTable {
    pub functions: Vec<String>,
    pub classes: Vec<String>,
    pub imports: Vec<String>,
}

impl SymbolTable {
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.classes.is_empty() && self.imports.is_empty()
    }
}

pub(crate) fn collect_symbols(tree: &Tree, source: &str) -> SymbolTable {
    let mut symbols = SymbolTable::default();
    for node in PreorderWalk::new(tree.root_node()) {
        visit_node(node, source, &mut symbols);
    }
    symbols
}

fn visit_node(node: Node, source: &str, symbols: &mut SymbolTable) {
    match node.kind() {
        "function_definition" if !is_async_definition(&node) => {
            if let Some(name) = node.child_by_field_name("name") {
                symbols.functions.push(node_text(&name, source).to_string());
            }
        }
        "class_definition" => {
            if let Some(name) = node.child_by_field_name("name") {
                symbols.classes.push(node_text(&name, source).to_string());
            }
        }
        "import_statement" => {
            let mut cursor = node.walk();
            for name in node.children_by_field_name("name", &mut cursor) {
                symbols.imports.push(imported_module_name(name, source));
            }
        }
        "import_from_statement" => {
            symbols.imports.push(from_import_module(&node, source));
        }
        "future_import_statement" => {
            symbols.imports.push("__future__".to_string());
        }
        _ => {}
    }
}

/// `async def` is its own definition kind and is not a plain function.
pub(crate) fn is_async_definition(node: &Node) -> bool {
    node.child(0).is_some_and(|first| first.kind() == "async")
}

/// `import a.b as c` imports the module `a.b`; the alias is ignored.
fn imported_module_name(node: Node, source: &str) -> String {
    match node.kind() {
        "aliased_import" => node
            .child_by_field_name("name")
            .map(|dotted| dotted_name(dotted, source))
            .unwrap_or_default(),
        _ => dotted_name(node, source),
    }
}

/// Module named by `from X import ...`; relative dots are dropped and a bare
/// `from . import x` yields an empty name.
fn from_import_module(node: &Node, source: &str) -> String {
    let Some(module) = node.child_by_field_name("module_name") else {
        return String::new();
    };

    match module.kind() {
        "relative_import" => {
            let mut cursor = module.walk();
            let dotted = module
                .named_children(&mut cursor)
                .find(|child| child.kind() == "dotted_name");
            dotted
                .map(|dotted| dotted_name(dotted, source))
                .unwrap_or_default()
        }
        _ => dotted_name(module, source),
    }
}

/// Joins the identifiers of a dotted name so `a . b` reads as `a.b`.
fn dotted_name(node: Node, source: &str) -> String {
    if node.kind() != "dotted_name" {
        return node_text(&node, source).to_string();
    }

    let mut cursor = node.walk();
    let parts: Vec<&str> = node
        .named_children(&mut cursor)
        .filter(|child| child.kind() == "identifier")
        .map(|child| node_text(&child, source))
        .collect();
    parts.join(".")
}
