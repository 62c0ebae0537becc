//! Documentation insights for Markdown sources.
//!
//! Every match runs on the lowercased document and is a plain substring test,
//! so `api` also fires on "rapid", `go` on "good" and `java` on "javascript".
//! Goals and known issues are the bullet items that follow the first
//! `goal`/`objective`/`purpose` (resp. `issue`/`bug`/`limitation`/`todo`)
//! keyword, up to the next blank line or heading. A heading followed by a
//! blank line therefore yields no items. None of this feeds findings or
//! scores.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::DocumentationInsights;

/// Section keywords, in report order.
const SECTIONS: &[&str] = &[
    "introduction",
    "requirements",
    "installation",
    "setup",
    "usage",
    "api",
    "endpoints",
    "configuration",
    "deployment",
    "contributing",
];

const REQUIREMENT_SECTIONS: &[&str] = &["requirements"];
const SETUP_SECTIONS: &[&str] = &["installation", "setup"];
const API_SECTIONS: &[&str] = &["api", "endpoints"];

/// Technology keywords grouped frontend, backend, database, tools.
const TECHNOLOGY_KEYWORDS: &[&str] = &[
    "react",
    "vue",
    "angular",
    "javascript",
    "typescript",
    "html",
    "css",
    "python",
    "node",
    "java",
    "go",
    "ruby",
    "php",
    "sql",
    "mongodb",
    "postgresql",
    "mysql",
    "redis",
    "docker",
    "kubernetes",
    "git",
    "aws",
    "azure",
    "gcp",
];

static GOALS_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(?:goals?|objectives?|purpose)(.*?)(?:\n\n|\n#|$)")
        .expect("goals pattern is valid")
});

static ISSUES_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(?:issues?|bugs?|limitations?|todo)(.*?)(?:\n\n|\n#|$)")
        .expect("issues pattern is valid")
});

static BULLET_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-*]\s*(.+)").expect("bullet pattern is valid"));

pub(crate) fn extract(content: &str) -> DocumentationInsights {
    let lower = content.to_lowercase();

    let sections: Vec<String> = SECTIONS
        .iter()
        .filter(|s| lower.contains(*s))
        .map(|s| s.to_string())
        .collect();
    let has_section = |group: &[&str]| sections.iter().any(|s| group.contains(&s.as_str()));

    DocumentationInsights {
        has_requirements: has_section(REQUIREMENT_SECTIONS),
        has_setup_instructions: has_section(SETUP_SECTIONS),
        has_api_docs: has_section(API_SECTIONS),
        mentioned_technologies: TECHNOLOGY_KEYWORDS
            .iter()
            .filter(|t| lower.contains(*t))
            .map(|t| t.to_string())
            .collect(),
        project_goals: bullet_items(&GOALS_BLOCK, &lower),
        known_issues: bullet_items(&ISSUES_BLOCK, &lower),
        sections,
    }
}

/// Trimmed, non-empty bullet items of the first block `block` matches.
fn bullet_items(block: &Regex, content: &str) -> Vec<String> {
    let Some(body) = block.captures(content).and_then(|caps| caps.get(1)) else {
        return Vec::new();
    };
    BULLET_ITEM
        .captures_iter(body.as_str())
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
