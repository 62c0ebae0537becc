use crate::types::LanguageTag;

/// Map a file name to its language tag by lowercased extension.
///
/// The extension is whatever follows the last `.` in the name. Names without a
/// dot, and extensions outside the table, map to [`LanguageTag::Unknown`].
pub fn classify(file_name: &str) -> LanguageTag {
    let Some((_, extension)) = file_name.rsplit_once('.') else {
        return LanguageTag::Unknown;
    };

    match extension.to_lowercase().as_str() {
        "py" => LanguageTag::Python,
        "js" | "jsx" => LanguageTag::JavaScript,
        "ts" | "tsx" => LanguageTag::TypeScript,
        "html" => LanguageTag::Html,
        "css" | "scss" => LanguageTag::Css,
        "md" => LanguageTag::Markdown,
        "sql" => LanguageTag::Sql,
        _ => LanguageTag::Unknown,
    }
}
