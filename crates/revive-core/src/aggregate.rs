use crate::types::{extend_unique, AggregateMetrics, FileMetrics};

/// Fold per-file metrics into one project-wide record.
///
/// Lists are concatenated in input order, flags are OR'ed, and the
/// documentation level is the maximum over all files. Frameworks keep their
/// first occurrence only, and Markdown insights merge the same way.
pub fn aggregate(files: &[FileMetrics]) -> AggregateMetrics {
    files
        .iter()
        .fold(AggregateMetrics::default(), |mut acc, file| {
            acc.functions.extend(file.functions.iter().cloned());
            acc.classes.extend(file.classes.iter().cloned());
            acc.imports.extend(file.imports.iter().cloned());
            acc.has_tests |= file.has_tests;
            acc.has_api |= file.has_api;
            acc.has_database |= file.has_database;
            acc.documentation_level = acc.documentation_level.max(file.documentation_level);
            acc.has_frontend |= file.has_frontend;
            extend_unique(&mut acc.frameworks, &file.frameworks);
            if let Some(insights) = &file.documentation_insights {
                acc.documentation_insights.merge(insights);
            }
            acc
        })
}
