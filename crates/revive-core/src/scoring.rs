use crate::types::{AggregateMetrics, FixDifficulty, ProjectScore};

/// Upper bound of every score.
pub const MAX_SCORE: u8 = 10;

/// Import count above which the import-breadth bonus is 2 instead of 1.
const IMPORT_BREADTH_THRESHOLD: usize = 5;

/// Compute the three scores and the difficulty label from the aggregate.
pub fn calculate_score(metrics: &AggregateMetrics) -> ProjectScore {
    let code_completeness = code_completeness(metrics);
    let documentation_quality = metrics.documentation_level.min(MAX_SCORE);
    let revival_potential = revival_potential(metrics, code_completeness, documentation_quality);

    ProjectScore {
        code_completeness,
        documentation_quality,
        revival_potential,
        fix_difficulty: fix_difficulty(revival_potential),
    }
}

/// `round((F + C) / 10 + 2[api] + 2[db] + 2[tests])`, clamped to 0..=10.
pub fn code_completeness(metrics: &AggregateMetrics) -> u8 {
    let declarations = (metrics.functions.len() + metrics.classes.len()) as f64;
    let raw = declarations / 10.0
        + flag(metrics.has_api)
        + flag(metrics.has_database)
        + flag(metrics.has_tests);
    round_to_score(raw)
}

/// `round(0.4 cc + 0.3 dq + 2[tests] + breadth)`, clamped to 0..=10, where
/// breadth is 2 with more than five imports and 1 otherwise.
pub fn revival_potential(
    metrics: &AggregateMetrics,
    code_completeness: u8,
    documentation_quality: u8,
) -> u8 {
    let breadth = if metrics.imports.len() > IMPORT_BREADTH_THRESHOLD {
        2.0
    } else {
        1.0
    };
    let raw = f64::from(code_completeness) * 0.4
        + f64::from(documentation_quality) * 0.3
        + flag(metrics.has_tests)
        + breadth;
    round_to_score(raw)
}

/// Step function of revival potential alone.
pub fn fix_difficulty(revival_potential: u8) -> FixDifficulty {
    match revival_potential {
        7.. => FixDifficulty::Easy,
        4..=6 => FixDifficulty::Medium,
        _ => FixDifficulty::Hard,
    }
}

/// Round half up, then clamp into `0..=MAX_SCORE`.
pub(crate) fn round_to_score(value: f64) -> u8 {
    // f64::round breaks ties away from zero, which is upward for the
    // non-negative values produced here.
    value.round().clamp(0.0, f64::from(MAX_SCORE)) as u8
}

fn flag(set: bool) -> f64 {
    if set {
        2.0
    } else {
        0.0
    }
}
