//! Lexical rules for Python sources.
//!
//! | rule          | matches                                   | captures          |
//! |---------------|-------------------------------------------|-------------------|
//! | `py.function` | `def <ident>(`                            | the identifier    |
//! | `py.class`    | `class <ident>` with optional `(` or `:`  | the identifier    |
//! | `py.import`   | `from <ident> import` or `import <ident>` | the module name   |
//!
//! None of the patterns are anchored to a word boundary, so `undef foo(` and
//! `subclass Foo` match, and occurrences inside strings or comments count.
//! `from pkg.sub import name` does not match the `from` form (dotted module)
//! and is picked up by the `import` form instead, capturing `name`.
//! `import a, b` captures only `a`.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::FileMetrics;

static FUNCTION_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"def\s+([a-zA-Z_][a-zA-Z0-9_]*)\s*\(").expect("py.function pattern is valid")
});

static CLASS_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"class\s+([a-zA-Z_][a-zA-Z0-9_]*)\s*[(:]?").expect("py.class pattern is valid")
});

static IMPORT_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"from\s+([a-zA-Z_][a-zA-Z0-9_]*)\s+import|import\s+([a-zA-Z_][a-zA-Z0-9_]*)")
        .expect("py.import pattern is valid")
});

/// Route decorators or web-framework names.
const API_MARKERS: &[&str] = &["@app.route", "FastAPI"];

/// ORM names or DB-API cursor calls.
const DATABASE_MARKERS: &[&str] = &["SQLAlchemy", "cursor.execute"];

pub(crate) fn extract(content: &str, metrics: &mut FileMetrics) {
    metrics.functions = capture_all(&FUNCTION_RULE, content);
    metrics.classes = capture_all(&CLASS_RULE, content);
    metrics.imports = capture_all(&IMPORT_RULE, content);
    metrics.has_api = API_MARKERS.iter().any(|m| content.contains(m));
    metrics.has_database = DATABASE_MARKERS.iter().any(|m| content.contains(m));
}

/// First participating capture group of every non-overlapping match, in order.
fn capture_all(rule: &Regex, content: &str) -> Vec<String> {
    rule.captures_iter(content)
        .filter_map(|caps| {
            caps.iter()
                .skip(1)
                .flatten()
                .next()
                .map(|m| m.as_str().to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(content: &str) -> FileMetrics {
        let mut metrics = FileMetrics::default();
        extract(content, &mut metrics);
        metrics
    }

    #[test]
    fn test_functions_in_order_with_duplicates() {
        let content = r#"
def load(path):
    pass

async def fetch_all( ):
    pass

class Repo:
    def load(self):
        pass
"#;
        let metrics = run(content);
        assert_eq!(metrics.functions, vec!["load", "fetch_all", "load"]);
    }

    #[test]
    fn test_classes_with_and_without_bases() {
        let content = "class User(Base):\n    pass\nclass Empty:\n    pass\nclass Bare\n";
        assert_eq!(run(content).classes, vec!["User", "Empty", "Bare"]);
    }

    #[test]
    fn test_imports_capture_module_identifier() {
        let content = "import os\nfrom flask import Flask\nimport json as j\n";
        assert_eq!(run(content).imports, vec!["os", "flask", "json"]);
    }

    #[test]
    fn test_dotted_from_import_captures_imported_name() {
        let content = "from app.models import User\n";
        assert_eq!(run(content).imports, vec!["User"]);
    }

    #[test]
    fn test_known_false_positive_without_word_boundary() {
        let content = "undef helper(x)\nsubclass Thing\n";
        let metrics = run(content);
        assert_eq!(metrics.functions, vec!["helper"]);
        assert_eq!(metrics.classes, vec!["Thing"]);
    }

    #[test]
    fn test_api_markers() {
        assert!(run("@app.route('/users')\ndef users(): pass").has_api);
        assert!(run("from fastapi import FastAPI\napp = FastAPI()").has_api);
        assert!(!run("from flask import Flask").has_api);
    }

    #[test]
    fn test_database_markers() {
        assert!(run("from flask_sqlalchemy import SQLAlchemy").has_database);
        assert!(run("cursor.execute('SELECT 1')").has_database);
        assert!(!run("import sqlite3").has_database);
    }
}
