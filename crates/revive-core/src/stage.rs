use crate::types::{AggregateMetrics, ProjectStage};

/// Classify the project stage; the first matching condition wins.
pub fn classify_stage(metrics: &AggregateMetrics) -> ProjectStage {
    let declarations = metrics.functions.len() + metrics.classes.len();

    match (metrics.has_api, metrics.has_database, metrics.has_tests) {
        _ if declarations == 0 => ProjectStage::InitialPlanning,
        (false, false, _) => ProjectStage::EarlyDevelopment,
        (true, false, _) => ProjectStage::ApiDevelopment,
        (true, true, false) => ProjectStage::Integration,
        _ => ProjectStage::TestingAndDocumentation,
    }
}
