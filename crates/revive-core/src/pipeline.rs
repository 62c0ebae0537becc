use rayon::prelude::*;

use crate::aggregate::aggregate;
use crate::compose::compose;
use crate::extract;
use crate::lexer::ImportLexer;
use crate::types::{AggregateMetrics, AnalysisResult, FileMetrics, SourceFile};

/// Extract every file in parallel. The output is in input order regardless of
/// which extraction finishes first.
pub fn extract_all(files: &[SourceFile], lexer: &dyn ImportLexer) -> Vec<FileMetrics> {
    files
        .par_iter()
        .map(|file| extract::extract(file, lexer))
        .collect()
}

/// Extract and aggregate without composing a report.
pub fn collect_metrics(files: &[SourceFile], lexer: &dyn ImportLexer) -> AggregateMetrics {
    aggregate(&extract_all(files, lexer))
}

/// Analyze a project's files and produce the full result.
///
/// Pure with respect to its inputs: the same file list and lexer always give
/// the same result.
pub fn analyze_project(files: &[SourceFile], lexer: &dyn ImportLexer) -> AnalysisResult {
    let metrics = collect_metrics(files, lexer);
    tracing::debug!(
        files = files.len(),
        functions = metrics.functions.len(),
        classes = metrics.classes.len(),
        imports = metrics.imports.len(),
        "aggregated project metrics"
    );
    compose(files, &metrics)
}
