//! Docstring extraction for function and class definitions.
//!
//! A docstring is a lone string literal as the first statement of a
//! definition body. Byte strings and f-strings never qualify. The literal is
//! evaluated (prefixes stripped, escapes decoded unless raw) and then,
//! for [`DocstringStyle::Clean`], normalized the way Python's
//! `inspect.cleandoc` does.

use super::parser::node_text;
use super::symbols::is_async_definition;
use super::walk::PreorderWalk;
use serde::{Deserialize, Serialize};
use tree_sitter::{Node, Tree};

const TAB_WIDTH: usize = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocstringStyle {
    /// Evaluated literal value, indentation untouched
    Raw,
    /// Tabs expanded, common margin removed, blank edges trimmed
    #[default]
    Clean,
}

pub(crate) fn collect_docstrings(tree: &Tree, source: &str, style: DocstringStyle) -> Vec<String> {
    PreorderWalk::new(tree.root_node())
        .filter(is_documentable)
        .filter_map(|node| docstring_of(&node, source))
        .map(|text| match style {
            DocstringStyle::Raw => text,
            DocstringStyle::Clean => clean_docstring(&text),
        })
        .filter(|text| !text.is_empty())
        .collect()
}

fn is_documentable(node: &Node) -> bool {
    match node.kind() {
        "function_definition" => !is_async_definition(node),
        "class_definition" => true,
        _ => false,
    }
}

/// Evaluated value of the leading string statement, if any.
fn docstring_of(definition: &Node, source: &str) -> Option<String> {
    let body = definition.child_by_field_name("body")?;
    let first = first_statement(&body)?;
    if first.kind() != "expression_statement" {
        return None;
    }

    let mut literal = sole_expression(&first)?;
    while literal.kind() == "parenthesized_expression" {
        literal = sole_expression(&literal)?;
    }

    match literal.kind() {
        "string" => string_value(&literal, source),
        "concatenated_string" => {
            let mut cursor = literal.walk();
            let parts: Option<Vec<String>> = literal
                .named_children(&mut cursor)
                .filter(|part| part.kind() == "string")
                .map(|part| string_value(&part, source))
                .collect();
            parts.map(|parts| parts.concat())
        }
        _ => None,
    }
}

/// The only non-comment child of `node`, if it has exactly one.
fn sole_expression<'tree>(node: &Node<'tree>) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    let mut expressions = node
        .named_children(&mut cursor)
        .filter(|child| child.kind() != "comment");
    let only = expressions.next()?;
    match expressions.next() {
        Some(_) => None,
        None => Some(only),
    }
}

fn first_statement<'tree>(block: &Node<'tree>) -> Option<Node<'tree>> {
    let mut cursor = block.walk();
    let first = block
        .named_children(&mut cursor)
        .find(|child| child.kind() != "comment");
    first
}

/// Value of a single `str` literal; `None` for bytes and f-strings.
fn string_value(node: &Node, source: &str) -> Option<String> {
    let text = node_text(node, source);
    let quote_at = text.find(['\'', '"'])?;
    let prefix = text[..quote_at].to_ascii_lowercase();
    if prefix.contains(['b', 'f', 't']) {
        return None;
    }

    let delimited = &text[quote_at..];
    let quote_len = if delimited.starts_with("\"\"\"") || delimited.starts_with("'''") {
        3
    } else {
        1
    };
    if delimited.len() < quote_len * 2 {
        return None;
    }
    let body = &delimited[quote_len..delimited.len() - quote_len];

    if prefix.contains('r') {
        Some(body.to_string())
    } else {
        Some(decode_escapes(body))
    }
}

/// Decodes Python string escapes. Unknown escapes keep their backslash;
/// `\N{...}` is kept verbatim since no name table is bundled.
pub fn decode_escapes(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        let Some(escape) = chars.next() else {
            out.push('\\');
            break;
        };

        match escape {
            '\n' => {}
            '\r' => {
                chars.next_if_eq(&'\n');
            }
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            'a' => out.push('\x07'),
            'b' => out.push('\x08'),
            'f' => out.push('\x0c'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\x0b'),
            '0'..='7' => {
                let mut digits = String::from(escape);
                while digits.len() < 3 {
                    match chars.next_if(|d| d.is_digit(8)) {
                        Some(d) => digits.push(d),
                        None => break,
                    }
                }
                match u32::from_str_radix(&digits, 8).ok().and_then(char::from_u32) {
                    Some(decoded) => out.push(decoded),
                    None => {
                        out.push('\\');
                        out.push_str(&digits);
                    }
                }
            }
            'x' => push_hex_escape(&mut out, &mut chars, 'x', 2),
            'u' => push_hex_escape(&mut out, &mut chars, 'u', 4),
            'U' => push_hex_escape(&mut out, &mut chars, 'U', 8),
            other => {
                out.push('\\');
                out.push(other);
            }
        }
    }

    out
}

fn push_hex_escape(
    out: &mut String,
    chars: &mut std::iter::Peekable<std::str::Chars>,
    marker: char,
    width: usize,
) {
    let mut digits = String::with_capacity(width);
    while digits.len() < width {
        match chars.next_if(|d| d.is_ascii_hexdigit()) {
            Some(d) => digits.push(d),
            None => break,
        }
    }

    let decoded = (digits.len() == width)
        .then(|| u32::from_str_radix(&digits, 16).ok())
        .flatten()
        .and_then(char::from_u32);

    match decoded {
        Some(c) => out.push(c),
        None => {
            out.push('\\');
            out.push(marker);
            out.push_str(&digits);
        }
    }
}

/// Normalizes docstring indentation like `inspect.cleandoc`.
pub fn clean_docstring(doc: &str) -> String {
    let expanded = expand_tabs(doc, TAB_WIDTH);
    let raw_lines: Vec<&str> = expanded.split('\n').collect();

    let margin = raw_lines
        .iter()
        .skip(1)
        .filter_map(|&line| {
            let content = line.trim_start();
            (!content.is_empty()).then(|| line.chars().count() - content.chars().count())
        })
        .min();

    let mut lines: Vec<&str> = raw_lines
        .iter()
        .enumerate()
        .map(|(index, &line)| match (index, margin) {
            (0, _) => line.trim_start(),
            (_, Some(margin)) => strip_margin(line, margin),
            (_, None) => line,
        })
        .collect();

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    let leading_blank = lines.iter().take_while(|line| line.is_empty()).count();

    lines[leading_blank..].join("\n")
}

/// Drops the first `margin` chars. Only blank lines can be shorter than the
/// margin, and those become empty.
fn strip_margin(line: &str, margin: usize) -> &str {
    match line.char_indices().nth(margin) {
        Some((offset, _)) => &line[offset..],
        None => "",
    }
}

/// Expands tabs to the next multiple of `width`, column counting restarting
/// at each newline.
fn expand_tabs(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0;
    for c in text.chars() {
        match c {
            '\t' => {
                let pad = width - column % width;
                out.extend(std::iter::repeat(' ').take(pad));
                column += pad;
            }
            '\n' | '\r' => {
                out.push(c);
                column = 0;
            }
            _ => {
                out.push(c);
                column += 1;
            }
        }
    }
    out
}
