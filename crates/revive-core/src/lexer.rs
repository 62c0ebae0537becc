use thiserror::Error;

/// Why an import lexer could not produce specifiers for a file.
#[derive(Debug, Error)]
pub enum ImportLexError {
    #[error("syntax error at line {line}")]
    Syntax { line: usize },
    #[error("lexer unavailable: {0}")]
    Unavailable(String),
}

/// Trait for the collaborator that lists import specifiers in
/// JavaScript/TypeScript source text.
///
/// Implementations run on worker threads, one call per file.
pub trait ImportLexer: Send + Sync {
    /// Return the specifiers referenced by `source`, in source order.
    ///
    /// `file_name` lets an implementation pick a dialect (e.g. JSX vs. plain TS).
    fn lex_imports(&self, file_name: &str, source: &str) -> Result<Vec<String>, ImportLexError>;
}

/// Lexer that finds nothing. Useful when only Python or markup files are analyzed.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoImports;

impl ImportLexer for NoImports {
    fn lex_imports(&self, _file_name: &str, _source: &str) -> Result<Vec<String>, ImportLexError> {
        Ok(Vec::new())
    }
}
