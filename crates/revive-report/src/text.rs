use colored::{ColoredString, Colorize};

use revive_core::{AnalysisResult, DocumentationInsights, FixDifficulty, ProjectScore};

/// Format a full analysis report for terminal output.
pub fn format_report(result: &AnalysisResult) -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!("\n{}\n", "Revive - Project Diagnosis".bold()));
    out.push_str(&format!("{}\n\n", "=".repeat(40)));

    out.push_str(&format!("{}\n", result.summary));
    out.push_str(&format!(
        "\n{}: {}   {}: {}\n",
        "Main technology".bold(),
        result.main_technology,
        "Stage".bold(),
        result.project_stage,
    ));
    if !result.detected_frameworks.is_empty() {
        out.push_str(&format!(
            "{}: {}\n",
            "Frameworks".bold(),
            result.detected_frameworks.join(", ")
        ));
    }

    out.push_str(&format!(
        "{}: {}\n",
        "Frontend".bold(),
        if result.has_frontend { "yes" } else { "no" }
    ));

    out.push('\n');
    out.push_str(&format_score_section(&result.project_score));
    out.push_str(&format_documentation_section(&result.documentation_insights));

    let sections = [
        ("Why it stalled", &result.abandonment_reasons),
        ("Missing components", &result.missing_components),
        ("Reboot steps", &result.reboot_steps),
        ("Suggested technologies", &result.suggested_technologies),
    ];
    let mut any_findings = false;
    for (title, entries) in sections {
        if entries.is_empty() {
            continue;
        }
        any_findings = true;
        out.push_str(&format!("\n{}\n{}\n", title.bold(), "-".repeat(40)));
        for (i, entry) in entries.iter().enumerate() {
            out.push_str(&format!("  {}. {entry}\n", i + 1));
        }
    }

    if !any_findings {
        out.push_str(&format!("\n{}\n", "No gaps found!".green().bold()));
    }

    out.push('\n');
    out
}

fn format_score_section(score: &ProjectScore) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{}: {}/10 ({} to fix)\n",
        "Revival Potential".bold(),
        colored_score(score.revival_potential),
        colored_difficulty(score.fix_difficulty),
    ));
    out.push_str(&format!(
        "  Code Completeness:     {}/10\n",
        score.code_completeness
    ));
    out.push_str(&format!(
        "  Documentation Quality: {}/10\n",
        score.documentation_quality
    ));

    out
}

fn format_documentation_section(insights: &DocumentationInsights) -> String {
    if *insights == DocumentationInsights::default() {
        return String::new();
    }

    let check = |present: bool| if present { "yes".green() } else { "no".red() };
    let mut out = format!("\n{}\n{}\n", "Documentation".bold(), "-".repeat(40));
    out.push_str(&format!(
        "  Setup instructions: {}   API docs: {}   Requirements: {}\n",
        check(insights.has_setup_instructions),
        check(insights.has_api_docs),
        check(insights.has_requirements),
    ));
    if !insights.mentioned_technologies.is_empty() {
        out.push_str(&format!(
            "  Mentions: {}\n",
            insights.mentioned_technologies.join(", ")
        ));
    }
    for (label, items) in [
        ("Goals", &insights.project_goals),
        ("Known issues", &insights.known_issues),
    ] {
        if items.is_empty() {
            continue;
        }
        out.push_str(&format!("  {label}:\n"));
        for item in items {
            out.push_str(&format!("    - {item}\n"));
        }
    }
    out
}

fn colored_score(value: u8) -> ColoredString {
    let text = value.to_string();
    match value {
        7.. => text.green(),
        4..=6 => text.yellow(),
        _ => text.red(),
    }
}

fn colored_difficulty(difficulty: FixDifficulty) -> ColoredString {
    let text = difficulty.to_string();
    match difficulty {
        FixDifficulty::Easy => text.green(),
        FixDifficulty::Medium => text.yellow(),
        FixDifficulty::Hard => text.red().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use revive_core::{LanguageTag, ProjectStage};

    fn sample_result(with_findings: bool) -> AnalysisResult {
        let findings = |entries: &[&str]| -> Vec<String> {
            if with_findings {
                entries.iter().map(|s| s.to_string()).collect()
            } else {
                vec![]
            }
        };

        AnalysisResult {
            summary: "This Python project contains 3 functions and 1 classes.".to_string(),
            abandonment_reasons: findings(&["Lack of testing"]),
            missing_components: findings(&["Test coverage"]),
            reboot_steps: findings(&["Add unit and integration tests"]),
            suggested_technologies: findings(&["Jest or Pytest for testing"]),
            project_score: ProjectScore {
                code_completeness: 6,
                documentation_quality: 5,
                revival_potential: 5,
                fix_difficulty: FixDifficulty::Medium,
            },
            main_technology: LanguageTag::Python,
            project_stage: ProjectStage::Integration,
            detected_frameworks: vec!["flask".to_string()],
            has_frontend: false,
            documentation_insights: DocumentationInsights::default(),
        }
    }

    #[test]
    fn test_report_contains_scores_and_findings() {
        colored::control::set_override(false);
        let report = format_report(&sample_result(true));
        assert!(report.contains("Revival Potential: 5/10 (Medium to fix)"));
        assert!(report.contains("Code Completeness:     6/10"));
        assert!(report.contains("Documentation Quality: 5/10"));
        assert!(report.contains("Why it stalled"));
        assert!(report.contains("  1. Lack of testing"));
        assert!(report.contains("  1. Jest or Pytest for testing"));
        assert!(report.contains("Stage: integration"));
        assert!(report.contains("Frameworks: flask"));
        assert!(!report.contains("No gaps found!"));
        assert!(report.contains("Frontend: no"));
        assert!(!report.contains("Documentation\n"));
    }

    #[test]
    fn test_report_documentation_section() {
        colored::control::set_override(false);
        let mut result = sample_result(true);
        result.documentation_insights = DocumentationInsights {
            has_setup_instructions: true,
            mentioned_technologies: vec!["react".to_string(), "docker".to_string()],
            known_issues: vec!["login breaks on refresh".to_string()],
            ..Default::default()
        };
        let report = format_report(&result);
        assert!(report.contains("Setup instructions: yes   API docs: no   Requirements: no"));
        assert!(report.contains("Mentions: react, docker"));
        assert!(report.contains("  Known issues:\n    - login breaks on refresh"));
        assert!(!report.contains("Goals:"));
    }

    #[test]
    fn test_report_without_findings() {
        colored::control::set_override(false);
        let report = format_report(&sample_result(false));
        assert!(report.contains("No gaps found!"));
        assert!(!report.contains("Reboot steps"));
    }
}
