use crate::types::AggregateMetrics;

/// Documentation levels below this trigger the documentation finding.
pub const DOCUMENTATION_THRESHOLD: u8 = 5;

/// One row of the finding table: a predicate and what it appends when it holds.
pub struct FindingRule {
    pub name: &'static str,
    pub applies: fn(&AggregateMetrics) -> bool,
    pub abandonment_reason: Option<&'static str>,
    pub missing_component: Option<&'static str>,
    pub reboot_step: Option<&'static str>,
    pub suggested_technology: Option<&'static str>,
}

/// The fixed rule table, evaluated top to bottom.
pub const FINDING_RULES: &[FindingRule] = &[
    FindingRule {
        name: "missing_api",
        applies: lacks_api,
        abandonment_reason: Some("Incomplete API implementation"),
        missing_component: Some("API endpoints and routes"),
        reboot_step: Some("Create RESTful API endpoints"),
        suggested_technology: Some("FastAPI or Express.js for API development"),
    },
    FindingRule {
        name: "missing_database",
        applies: lacks_database,
        abandonment_reason: Some("No data persistence layer"),
        missing_component: Some("Database integration"),
        reboot_step: Some("Implement database models and queries"),
        suggested_technology: Some("PostgreSQL with Prisma or SQLAlchemy"),
    },
    FindingRule {
        name: "missing_tests",
        applies: lacks_tests,
        abandonment_reason: Some("Lack of testing"),
        missing_component: Some("Test coverage"),
        reboot_step: Some("Add unit and integration tests"),
        suggested_technology: Some("Jest or Pytest for testing"),
    },
    FindingRule {
        name: "poor_documentation",
        applies: poorly_documented,
        abandonment_reason: Some("Poor documentation"),
        missing_component: Some("Comprehensive documentation"),
        reboot_step: Some("Add detailed documentation and comments"),
        suggested_technology: None,
    },
];

fn lacks_api(m: &AggregateMetrics) -> bool {
    !m.has_api
}

fn lacks_database(m: &AggregateMetrics) -> bool {
    !m.has_database
}

fn lacks_tests(m: &AggregateMetrics) -> bool {
    !m.has_tests
}

fn poorly_documented(m: &AggregateMetrics) -> bool {
    m.documentation_level < DOCUMENTATION_THRESHOLD
}

/// The four finding lists produced by the rule table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    pub abandonment_reasons: Vec<String>,
    pub missing_components: Vec<String>,
    pub reboot_steps: Vec<String>,
    pub suggested_technologies: Vec<String>,
}

/// Fire every matching rule, in table order, without short-circuiting.
pub fn evaluate(metrics: &AggregateMetrics) -> Findings {
    let mut findings = Findings::default();

    for rule in FINDING_RULES.iter().filter(|r| (r.applies)(metrics)) {
        tracing::debug!(rule = rule.name, "finding rule fired");
        push_some(&mut findings.abandonment_reasons, rule.abandonment_reason);
        push_some(&mut findings.missing_components, rule.missing_component);
        push_some(&mut findings.reboot_steps, rule.reboot_step);
        push_some(&mut findings.suggested_technologies, rule.suggested_technology);
    }

    findings
}

fn push_some(list: &mut Vec<String>, entry: Option<&str>) {
    if let Some(entry) = entry {
        list.push(entry.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> AggregateMetrics {
        AggregateMetrics {
            has_api: true,
            has_database: true,
            has_tests: true,
            documentation_level: 8,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_aggregate_fires_every_rule() {
        let findings = evaluate(&AggregateMetrics::default());
        assert_eq!(
            findings.abandonment_reasons,
            vec![
                "Incomplete API implementation",
                "No data persistence layer",
                "Lack of testing",
                "Poor documentation",
            ]
        );
        assert_eq!(
            findings.missing_components,
            vec![
                "API endpoints and routes",
                "Database integration",
                "Test coverage",
                "Comprehensive documentation",
            ]
        );
        assert_eq!(
            findings.reboot_steps,
            vec![
                "Create RESTful API endpoints",
                "Implement database models and queries",
                "Add unit and integration tests",
                "Add detailed documentation and comments",
            ]
        );
        assert_eq!(
            findings.suggested_technologies,
            vec![
                "FastAPI or Express.js for API development",
                "PostgreSQL with Prisma or SQLAlchemy",
                "Jest or Pytest for testing",
            ]
        );
    }

    #[test]
    fn test_complete_project_has_no_findings() {
        assert_eq!(evaluate(&complete()), Findings::default());
    }

    #[test]
    fn test_documentation_threshold_boundary() {
        let mut metrics = complete();
        metrics.documentation_level = 5;
        assert!(evaluate(&metrics).abandonment_reasons.is_empty());

        metrics.documentation_level = 4;
        let findings = evaluate(&metrics);
        assert_eq!(findings.abandonment_reasons, vec!["Poor documentation"]);
        assert_eq!(findings.missing_components, vec!["Comprehensive documentation"]);
        assert_eq!(
            findings.reboot_steps,
            vec!["Add detailed documentation and comments"]
        );
        assert!(findings.suggested_technologies.is_empty());
    }

    #[test]
    fn test_single_rule_fires_alone() {
        let mut metrics = complete();
        metrics.has_database = false;
        let findings = evaluate(&metrics);
        assert_eq!(findings.abandonment_reasons, vec!["No data persistence layer"]);
        assert_eq!(findings.missing_components, vec!["Database integration"]);
        assert_eq!(
            findings.reboot_steps,
            vec!["Implement database models and queries"]
        );
        assert_eq!(
            findings.suggested_technologies,
            vec!["PostgreSQL with Prisma or SQLAlchemy"]
        );
    }

    #[test]
    fn test_rule_names_are_unique() {
        let mut names: Vec<_> = FINDING_RULES.iter().map(|r| r.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), FINDING_RULES.len());
    }
}
