pub mod aggregate;
pub mod compose;
pub mod extract;
pub mod language;
pub mod lexer;
pub mod pipeline;
pub mod rules;
pub mod scoring;
pub mod stage;
pub mod types;

pub use lexer::{ImportLexError, ImportLexer, NoImports};
pub use pipeline::analyze_project;
pub use types::*;
