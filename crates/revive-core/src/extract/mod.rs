//! Per-file signal extraction.
//!
//! Every file gets the generic passes (documentation density, test markers,
//! framework markers, frontend file names). Python, the ECMAScript family and
//! Markdown additionally get a dedicated strategy; every other tag, `Unknown`
//! included, stops at the generic passes.

pub mod ecmascript;
pub mod markdown;
pub mod python;

use crate::lexer::ImportLexer;
use crate::types::{FileMetrics, LanguageTag, SourceFile};

/// Prefixes that make a trimmed line count as documentation.
const DOC_LINE_PREFIXES: &[&str] = &["\"\"\"", "'''", "//", "/*", "*", "#"];

/// Substrings of the file name that mark a test file.
const TEST_NAME_MARKERS: &[&str] = &["test", "spec"];

/// Substrings of the content that mark test-framework usage.
const TEST_CONTENT_MARKERS: &[&str] = &["describe(", "test(", "pytest"];

/// Extensions of files that count as frontend code. `.ts` is not one of them.
const FRONTEND_EXTENSIONS: &[&str] = &["html", "css", "js", "jsx", "tsx"];

/// Framework name and the content markers that reveal it, in report order.
const FRAMEWORK_MARKERS: &[(&str, &[&str])] = &[
    ("react", &["react", "useState", "useEffect"]),
    ("vue", &["Vue.", "createApp"]),
    ("angular", &["@Component", "@Injectable"]),
    ("django", &["django", "models.Model"]),
    ("flask", &["Flask(", "@app.route"]),
    ("fastapi", &["FastAPI(", "@app"]),
    ("express", &["express(", "app.use"]),
];

/// Extract the metrics of one file. Never fails.
pub fn extract(file: &SourceFile, lexer: &dyn ImportLexer) -> FileMetrics {
    let mut metrics = FileMetrics {
        documentation_level: documentation_level(&file.content),
        ..Default::default()
    };

    match file.language() {
        LanguageTag::Python => python::extract(&file.content, &mut metrics),
        LanguageTag::JavaScript | LanguageTag::TypeScript => {
            ecmascript::extract(&file.name, &file.content, lexer, &mut metrics)
        }
        LanguageTag::Markdown => {
            metrics.documentation_insights = Some(markdown::extract(&file.content))
        }
        LanguageTag::Html | LanguageTag::Css | LanguageTag::Sql | LanguageTag::Unknown => {}
    }

    metrics.has_tests = has_test_markers(&file.name, &file.content);
    metrics.frameworks = detect_frameworks(&file.content);
    metrics.has_frontend = is_frontend_file(&file.name);
    metrics
}

/// Comment density on a 0..=10 scale: `round(10 * doc_lines / total_lines)`.
///
/// Lines are split on `\n`, so even empty content is one line and the ratio
/// is always defined.
pub fn documentation_level(content: &str) -> u8 {
    let (total_lines, doc_lines) = content
        .split('\n')
        .fold((0usize, 0usize), |(total, docs), line| {
            let trimmed = line.trim();
            let is_doc = DOC_LINE_PREFIXES.iter().any(|p| trimmed.starts_with(p));
            (total + 1, docs + usize::from(is_doc))
        });

    let ratio = doc_lines as f64 / total_lines as f64;
    crate::scoring::round_to_score(ratio * 10.0)
}

/// Test detection shared by every language, including `Unknown`.
pub fn has_test_markers(file_name: &str, content: &str) -> bool {
    TEST_NAME_MARKERS.iter().any(|m| file_name.contains(m))
        || TEST_CONTENT_MARKERS.iter().any(|m| content.contains(m))
}

/// True when the file name carries a frontend extension, case-insensitively.
pub fn is_frontend_file(file_name: &str) -> bool {
    file_name.rsplit_once('.').is_some_and(|(_, ext)| {
        FRONTEND_EXTENSIONS
            .iter()
            .any(|e| e.eq_ignore_ascii_case(ext))
    })
}

/// Frameworks whose markers appear in `content`, in table order.
pub fn detect_frameworks(content: &str) -> Vec<String> {
    FRAMEWORK_MARKERS
        .iter()
        .filter(|(_, markers)| markers.iter().any(|m| content.contains(m)))
        .map(|(name, _)| name.to_string())
        .collect()
}
