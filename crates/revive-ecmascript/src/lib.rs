//! Import lexer for JavaScript and TypeScript backed by tree-sitter.
//!
//! Reports the module specifier of every static `import`, side-effect
//! `import 'x'`, re-export `export ... from 'x'` and `import('x')` call with a
//! plain string argument, in source order. `require()` calls, TypeScript
//! `import x = require()` and template-literal dynamic imports are not reported.
//!
//! Specifiers are read from tree-sitter's error-recovered tree, so a
//! half-written function body elsewhere in the file does not hide them. Only a
//! syntax error inside an import or export (or a file that does not parse at
//! all) is reported as [`ImportLexError::Syntax`].

use anyhow::{Context, Result};
use tree_sitter::{Language, Node, Parser, Query, QueryCursor, StreamingIterator};

use revive_core::lexer::{ImportLexError, ImportLexer};

const SPECIFIER_QUERY_SRC: &str = r#"
(import_statement
  source: (string) @path)

(export_statement
  source: (string) @path)

(call_expression) @call
"#;

/// Grammar and compiled query for one dialect.
struct Dialect {
    language: Language,
    query: Query,
    path_idx: u32,
    call_idx: u32,
}

impl Dialect {
    fn new(language: Language, name: &str) -> Result<Self> {
        let query = Query::new(&language, SPECIFIER_QUERY_SRC)
            .with_context(|| format!("failed to compile {name} specifier query"))?;
        let path_idx = capture_index(&query, "path")?;
        let call_idx = capture_index(&query, "call")?;
        Ok(Self {
            language,
            query,
            path_idx,
            call_idx,
        })
    }
}

fn capture_index(query: &Query, name: &str) -> Result<u32> {
    query
        .capture_names()
        .iter()
        .position(|n| *n == name)
        .map(|i| i as u32)
        .with_context(|| format!("specifier query has no @{name} capture"))
}

/// Tree-sitter implementation of [`ImportLexer`].
///
/// `.ts`, `.mts` and `.cts` files use the TypeScript grammar; everything else,
/// plain JavaScript included, uses the TSX grammar so JSX parses.
pub struct TreeSitterImportLexer {
    typescript: Dialect,
    tsx: Dialect,
}

impl TreeSitterImportLexer {
    pub fn new() -> Result<Self> {
        let typescript = Dialect::new(
            tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            "TypeScript",
        )?;
        let tsx = Dialect::new(tree_sitter_typescript::LANGUAGE_TSX.into(), "TSX")?;
        Ok(Self { typescript, tsx })
    }

    fn dialect_for(&self, file_name: &str) -> &Dialect {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "ts" | "mts" | "cts" => &self.typescript,
            _ => &self.tsx,
        }
    }
}

impl ImportLexer for TreeSitterImportLexer {
    fn lex_imports(&self, file_name: &str, source: &str) -> Result<Vec<String>, ImportLexError> {
        let dialect = self.dialect_for(file_name);
        let mut parser = Parser::new();
        parser
            .set_language(&dialect.language)
            .map_err(|e| ImportLexError::Unavailable(e.to_string()))?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ImportLexError::Unavailable("parser produced no tree".to_string()))?;

        let root = tree.root_node();
        if root.is_error() {
            return Err(ImportLexError::Syntax {
                line: first_error_line(root),
            });
        }
        if root.has_error() {
            if let Some(line) = import_error_line(root) {
                return Err(ImportLexError::Syntax { line });
            }
        }

        let mut found: Vec<(usize, String)> = Vec::new();
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&dialect.query, root, source.as_bytes());
        while let Some(m) = matches.next() {
            for capture in m.captures {
                let node = capture.node;
                if capture.index == dialect.path_idx {
                    found.push((node.start_byte(), unquote(node, source)));
                } else if capture.index == dialect.call_idx {
                    if let Some(arg) = dynamic_import_argument(node) {
                        found.push((arg.start_byte(), unquote(arg, source)));
                    }
                }
            }
        }

        found.sort_by_key(|(offset, _)| *offset);
        Ok(found.into_iter().map(|(_, specifier)| specifier).collect())
    }
}

/// The string literal passed to an `import(...)` call, if that is what `call` is.
fn dynamic_import_argument(call: Node<'_>) -> Option<Node<'_>> {
    let callee = call.child_by_field_name("function")?;
    if callee.kind() != "import" {
        return None;
    }
    let first_arg = call.child_by_field_name("arguments")?.named_child(0)?;
    (first_arg.kind() == "string").then_some(first_arg)
}

/// The cooked value of a string literal node.
fn unquote(node: Node<'_>, source: &str) -> String {
    let mut value = String::new();
    let mut cursor = node.walk();
    for part in node.named_children(&mut cursor) {
        let text = &source[part.byte_range()];
        match part.kind() {
            "escape_sequence" => push_escape(&mut value, text),
            _ => value.push_str(text),
        }
    }
    value
}

/// Append the character an escape sequence such as `\"` or `\u{1F600}` stands for.
fn push_escape(out: &mut String, escape: &str) {
    let body = &escape[1..];
    let decoded = match body.chars().next() {
        Some('n') => Some('\n'),
        Some('t') => Some('\t'),
        Some('r') => Some('\r'),
        Some('b') => Some('\u{8}'),
        Some('f') => Some('\u{c}'),
        Some('v') => Some('\u{b}'),
        Some('0'..='7') => u32::from_str_radix(body, 8).ok().and_then(char::from_u32),
        Some('x') => u32::from_str_radix(&body[1..], 16).ok().and_then(char::from_u32),
        Some('u') => u32::from_str_radix(body[1..].trim_matches(|c| c == '{' || c == '}'), 16)
            .ok()
            .and_then(char::from_u32),
        // Line continuation
        Some('\r' | '\n' | '\u{2028}' | '\u{2029}') => return,
        Some(c) => Some(c),
        None => None,
    };
    match decoded {
        Some(c) => out.push(c),
        None => out.push_str(escape),
    }
}

/// Line of the first ERROR or MISSING node that sits inside an import, an
/// export's specifier list, or an `import()` call, or that swallowed an
/// `import` keyword. Errors inside an exported declaration's body do not count.
fn import_error_line(node: Node<'_>) -> Option<usize> {
    if (node.is_error() || node.is_missing()) && touches_import(node) {
        return Some(node.start_position().row + 1);
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|child| child.has_error() || child.is_missing())
        .find_map(import_error_line)
}

fn touches_import(node: Node<'_>) -> bool {
    let mut cursor = node.walk();
    if node.children(&mut cursor).any(|child| child.kind() == "import") {
        return true;
    }

    let mut child = node;
    while let Some(parent) = child.parent() {
        match parent.kind() {
            "import_statement" => return true,
            "export_statement" => {
                let in_body = ["declaration", "value"]
                    .iter()
                    .any(|field| parent.child_by_field_name(field) == Some(child));
                return !in_body;
            }
            "call_expression"
                if parent
                    .child_by_field_name("function")
                    .is_some_and(|callee| callee.kind() == "import") =>
            {
                return true
            }
            _ => {}
        }
        child = parent;
    }
    false
}

/// 1-based line of the first ERROR or MISSING node under `node`.
fn first_error_line(node: Node<'_>) -> usize {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.is_error() || child.is_missing() {
            return child.start_position().row + 1;
        }
        if child.has_error() {
            return first_error_line(child);
        }
    }
    node.start_position().row + 1
}
