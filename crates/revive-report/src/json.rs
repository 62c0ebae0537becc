use revive_core::AnalysisResult;

/// Format an analysis result as JSON with camelCase keys.
pub fn format_report(result: &AnalysisResult, compact: bool) -> String {
    if compact {
        serde_json::to_string(result).expect("AnalysisResult should be serializable")
    } else {
        serde_json::to_string_pretty(result).expect("AnalysisResult should be serializable")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use revive_core::{analyze_project, NoImports, SourceFile};

    fn sample_result() -> AnalysisResult {
        let files = vec![
            SourceFile::new(
                "app.py",
                "# service\n# entry\n# point\nfrom fastapi import FastAPI\ndef main():\n    pass",
            ),
            SourceFile::new("test_app.py", "def test_main():\n    assert True"),
        ];
        analyze_project(&files, &NoImports)
    }

    #[test]
    fn test_format_report_valid_json() {
        let json = format_report(&sample_result(), false);
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("should be valid JSON");
        assert!(parsed["summary"].as_str().unwrap().starts_with("This Python project"));
        assert_eq!(parsed["projectScore"]["fixDifficulty"], "Medium");
        assert_eq!(parsed["mainTechnology"], "Python");
        assert_eq!(parsed["projectStage"], "API development");
        assert_eq!(
            parsed["abandonmentReasons"],
            serde_json::json!(["No data persistence layer"])
        );
        assert_eq!(parsed["detectedFrameworks"], serde_json::json!([]));
        assert_eq!(parsed["hasFrontend"], false);
        assert_eq!(parsed["documentationInsights"]["hasApiDocs"], false);
        assert_eq!(
            parsed["documentationInsights"]["knownIssues"],
            serde_json::json!([])
        );
    }

    #[test]
    fn test_format_report_camel_case_keys() {
        let json = format_report(&sample_result(), true);
        for key in [
            "abandonmentReasons",
            "missingComponents",
            "rebootSteps",
            "suggestedTechnologies",
            "codeCompleteness",
            "documentationQuality",
            "revivalPotential",
        ] {
            assert!(json.contains(key), "missing key {key}: {json}");
        }
        assert!(!json.contains("abandonment_reasons"));
    }

    #[test]
    fn test_format_report_compact_is_single_line() {
        let json = format_report(&sample_result(), true);
        assert!(!json.contains('\n'), "compact JSON should be single line");
    }

    #[test]
    fn test_format_report_pretty_is_multiline() {
        let json = format_report(&sample_result(), false);
        assert!(json.contains('\n'), "pretty JSON should be multiline");
    }
}
