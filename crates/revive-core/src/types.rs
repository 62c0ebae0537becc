use serde::{Deserialize, Serialize};
use std::fmt;

use crate::language;

/// Language tag derived from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageTag {
    Python,
    JavaScript,
    TypeScript,
    #[serde(rename = "HTML")]
    Html,
    #[serde(rename = "CSS")]
    Css,
    Markdown,
    #[serde(rename = "SQL")]
    Sql,
    Unknown,
}

impl LanguageTag {
    /// True for the languages whose imports come from the ECMAScript import lexer.
    pub fn is_ecmascript(&self) -> bool {
        matches!(self, LanguageTag::JavaScript | LanguageTag::TypeScript)
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageTag::Python => write!(f, "Python"),
            LanguageTag::JavaScript => write!(f, "JavaScript"),
            LanguageTag::TypeScript => write!(f, "TypeScript"),
            LanguageTag::Html => write!(f, "HTML"),
            LanguageTag::Css => write!(f, "CSS"),
            LanguageTag::Markdown => write!(f, "Markdown"),
            LanguageTag::Sql => write!(f, "SQL"),
            LanguageTag::Unknown => write!(f, "Unknown"),
        }
    }
}

/// One input file. When `language` is absent it is derived from `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub name: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageTag>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            language: None,
        }
    }

    pub fn with_language(
        name: impl Into<String>,
        content: impl Into<String>,
        language: LanguageTag,
    ) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            language: Some(language),
        }
    }

    /// The supplied tag, or the classifier's answer for the file name.
    pub fn language(&self) -> LanguageTag {
        self.language.unwrap_or_else(|| language::classify(&self.name))
    }
}

/// Signals extracted from a single file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetrics {
    pub functions: Vec<String>,
    pub classes: Vec<String>,
    pub imports: Vec<String>,
    pub has_tests: bool,
    #[serde(rename = "hasAPI")]
    pub has_api: bool,
    pub has_database: bool,
    /// Comment density, 0..=10.
    pub documentation_level: u8,
    pub frameworks: Vec<String>,
    pub has_frontend: bool,
    /// Present for Markdown files only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation_insights: Option<DocumentationInsights>,
}

/// Project-wide fold of every [`FileMetrics`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateMetrics {
    pub functions: Vec<String>,
    pub classes: Vec<String>,
    pub imports: Vec<String>,
    pub has_tests: bool,
    #[serde(rename = "hasAPI")]
    pub has_api: bool,
    pub has_database: bool,
    /// Maximum of the per-file levels.
    pub documentation_level: u8,
    pub frameworks: Vec<String>,
    pub has_frontend: bool,
    pub documentation_insights: DocumentationInsights,
}

/// What the project's Markdown says about itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentationInsights {
    pub has_requirements: bool,
    pub has_setup_instructions: bool,
    pub has_api_docs: bool,
    pub sections: Vec<String>,
    pub mentioned_technologies: Vec<String>,
    pub project_goals: Vec<String>,
    pub known_issues: Vec<String>,
}

impl DocumentationInsights {
    /// OR the flags and append unseen list entries, keeping first occurrences.
    pub fn merge(&mut self, other: &DocumentationInsights) {
        self.has_requirements |= other.has_requirements;
        self.has_setup_instructions |= other.has_setup_instructions;
        self.has_api_docs |= other.has_api_docs;
        extend_unique(&mut self.sections, &other.sections);
        extend_unique(&mut self.mentioned_technologies, &other.mentioned_technologies);
        extend_unique(&mut self.project_goals, &other.project_goals);
        extend_unique(&mut self.known_issues, &other.known_issues);
    }
}

pub(crate) fn extend_unique(list: &mut Vec<String>, items: &[String]) {
    for item in items {
        if !list.contains(item) {
            list.push(item.clone());
        }
    }
}

/// How hard reviving the project is expected to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FixDifficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for FixDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixDifficulty::Easy => write!(f, "Easy"),
            FixDifficulty::Medium => write!(f, "Medium"),
            FixDifficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// The three 0..=10 scores plus the difficulty label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectScore {
    pub code_completeness: u8,
    pub documentation_quality: u8,
    pub revival_potential: u8,
    pub fix_difficulty: FixDifficulty,
}

/// Where the project appears to have stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStage {
    #[serde(rename = "initial planning")]
    InitialPlanning,
    #[serde(rename = "early development")]
    EarlyDevelopment,
    #[serde(rename = "API development")]
    ApiDevelopment,
    #[serde(rename = "integration")]
    Integration,
    #[serde(rename = "testing and documentation")]
    TestingAndDocumentation,
}

impl fmt::Display for ProjectStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectStage::InitialPlanning => write!(f, "initial planning"),
            ProjectStage::EarlyDevelopment => write!(f, "early development"),
            ProjectStage::ApiDevelopment => write!(f, "API development"),
            ProjectStage::Integration => write!(f, "integration"),
            ProjectStage::TestingAndDocumentation => write!(f, "testing and documentation"),
        }
    }
}

/// Full analysis output for one file list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub summary: String,
    pub abandonment_reasons: Vec<String>,
    pub missing_components: Vec<String>,
    pub reboot_steps: Vec<String>,
    pub suggested_technologies: Vec<String>,
    pub project_score: ProjectScore,
    pub main_technology: LanguageTag,
    pub project_stage: ProjectStage,
    pub detected_frameworks: Vec<String>,
    pub has_frontend: bool,
    pub documentation_insights: DocumentationInsights,
}
