use crate::rules;
use crate::scoring;
use crate::stage;
use crate::types::{AggregateMetrics, AnalysisResult, LanguageTag, ProjectStage, SourceFile};

/// Most frequent effective language among `files`; ties go to the tag seen
/// first. An empty list reports [`LanguageTag::Unknown`].
pub fn main_technology(files: &[SourceFile]) -> LanguageTag {
    let mut counts: Vec<(LanguageTag, usize)> = Vec::new();
    for file in files {
        let tag = file.language();
        match counts.iter_mut().find(|(t, _)| *t == tag) {
            Some((_, n)) => *n += 1,
            None => counts.push((tag, 1)),
        }
    }

    // Only a strictly larger count replaces the leader, so ties keep the earlier tag.
    counts
        .into_iter()
        .fold(None, |best: Option<(LanguageTag, usize)>, (tag, count)| match best {
            Some((_, leader)) if leader >= count => best,
            _ => Some((tag, count)),
        })
        .map(|(tag, _)| tag)
        .unwrap_or(LanguageTag::Unknown)
}

/// One-paragraph description of the project.
pub fn summarize(
    main_technology: LanguageTag,
    metrics: &AggregateMetrics,
    stage: ProjectStage,
) -> String {
    let api = if metrics.has_api { "includes" } else { "lacks" };
    let database = if metrics.has_database { "has" } else { "needs" };
    format!(
        "This {main_technology} project contains {} functions and {} classes. \
         It {api} API implementation and {database} database integration. \
         The project appears to be in the {stage} stage.",
        metrics.functions.len(),
        metrics.classes.len(),
    )
}

/// Assemble the result record from the aggregate.
pub fn compose(files: &[SourceFile], metrics: &AggregateMetrics) -> AnalysisResult {
    let findings = rules::evaluate(metrics);
    let project_score = scoring::calculate_score(metrics);
    let project_stage = stage::classify_stage(metrics);
    let main_technology = main_technology(files);

    AnalysisResult {
        summary: summarize(main_technology, metrics, project_stage),
        abandonment_reasons: findings.abandonment_reasons,
        missing_components: findings.missing_components,
        reboot_steps: findings.reboot_steps,
        suggested_technologies: findings.suggested_technologies,
        project_score,
        main_technology,
        project_stage,
        detected_frameworks: metrics.frameworks.clone(),
        has_frontend: metrics.has_frontend,
        documentation_insights: metrics.documentation_insights.clone(),
    }
}
