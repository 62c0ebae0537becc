//! Lexical rules for JavaScript and TypeScript sources.
//!
//! | rule          | matches                                                    | captures  |
//! |---------------|------------------------------------------------------------|-----------|
//! | `es.function` | `function <name>`                                          | `<name>`  |
//! |               | `const\|let\|var <name> = function`                        | `<name>`  |
//! |               | `const\|let\|var <name> = (<params>) =>`                   | `<name>`  |
//! | `es.class`    | `class <name>`                                             | `<name>`  |
//!
//! Not captured: methods, arrow functions assigned to object properties
//! (`obj.run = () => {}`), arrows with an unparenthesized parameter
//! (`const f = x => x`), `async` arrows and typed bindings
//! (`const f: Fn = () => {}`). Matches inside strings and comments count.
//!
//! Imports come from the [`ImportLexer`] collaborator rather than a pattern.

use std::sync::LazyLock;

use regex::Regex;

use crate::lexer::ImportLexer;
use crate::types::FileMetrics;

static FUNCTION_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:function\s+([a-zA-Z_$][a-zA-Z0-9_$]*)|(?:const|let|var)\s+([a-zA-Z_$][a-zA-Z0-9_$]*)\s*=\s*(?:function|\([^)]*\)\s*=>))",
    )
    .expect("es.function pattern is valid")
});

static CLASS_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"class\s+([a-zA-Z_$][a-zA-Z0-9_$]*)").expect("es.class pattern is valid")
});

/// HTTP server frameworks and client libraries.
const API_MARKERS: &[&str] = &["express", "fetch", "axios"];

/// ORMs and database drivers.
const DATABASE_MARKERS: &[&str] = &["mongoose", "sequelize", "prisma"];

pub(crate) fn extract(
    file_name: &str,
    content: &str,
    lexer: &dyn ImportLexer,
    metrics: &mut FileMetrics,
) {
    metrics.functions = FUNCTION_RULE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .collect();
    metrics.classes = CLASS_RULE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect();

    metrics.imports = match lexer.lex_imports(file_name, content) {
        Ok(specifiers) => specifiers.into_iter().filter(|s| !s.is_empty()).collect(),
        Err(e) => {
            tracing::warn!(file = file_name, error = %e, "failed to lex imports");
            Vec::new()
        }
    };

    metrics.has_api = API_MARKERS.iter().any(|m| content.contains(m));
    metrics.has_database = DATABASE_MARKERS.iter().any(|m| content.contains(m));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{ImportLexError, NoImports};

    struct Specifiers(Vec<&'static str>);

    impl ImportLexer for Specifiers {
        fn lex_imports(&self, _: &str, _: &str) -> Result<Vec<String>, ImportLexError> {
            Ok(self.0.iter().map(|s| s.to_string()).collect())
        }
    }

    struct Broken;

    impl ImportLexer for Broken {
        fn lex_imports(&self, _: &str, _: &str) -> Result<Vec<String>, ImportLexError> {
            Err(ImportLexError::Unavailable("grammar missing".to_string()))
        }
    }

    fn run(content: &str) -> FileMetrics {
        let mut metrics = FileMetrics::default();
        extract("index.js", content, &NoImports, &mut metrics);
        metrics
    }

    #[test]
    fn test_function_forms() {
        let content = r#"
function handler(req, res) {}
const load = function () {};
let save = (user, opts) => {};
var $init = () => null;
export async function boot() {}
"#;
        assert_eq!(
            run(content).functions,
            vec!["handler", "load", "save", "$init", "boot"]
        );
    }

    #[test]
    fn test_uncaptured_function_forms() {
        let content = r#"
api.get = () => {};
const double = x => x * 2;
const typed: Handler = () => {};
class Service { run() {} }
"#;
        assert!(run(content).functions.is_empty());
    }

    #[test]
    fn test_classes() {
        let content = "class UserService {}\nexport default class App extends Component {}";
        assert_eq!(run(content).classes, vec!["UserService", "App"]);
    }

    #[test]
    fn test_imports_from_lexer_drop_empty_specifiers() {
        let mut metrics = FileMetrics::default();
        let lexer = Specifiers(vec!["express", "", "./routes"]);
        extract("server.ts", "", &lexer, &mut metrics);
        assert_eq!(metrics.imports, vec!["express", "./routes"]);
    }

    #[test]
    fn test_lexer_error_yields_empty_imports() {
        let mut metrics = FileMetrics::default();
        extract("app.js", "const x = fetch('/api');", &Broken, &mut metrics);
        assert!(metrics.imports.is_empty());
        assert!(metrics.has_api);
    }

    #[test]
    fn test_api_markers() {
        assert!(run("const app = express();").has_api);
        assert!(run("await fetch(url)").has_api);
        assert!(run("import axios from 'axios'").has_api);
        assert!(!run("console.log('hi')").has_api);
    }

    #[test]
    fn test_database_markers() {
        assert!(run("mongoose.connect(uri)").has_database);
        assert!(run("new Sequelize(); sequelize.sync()").has_database);
        assert!(run("const prisma = new PrismaClient()").has_database);
        assert!(!run("const db = {}").has_database);
    }
}
