use super::super::domain::RubricScores;
use super::config::HeuristicConfig;

/// Band estimate produced without any external service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandEstimate {
    pub holistic: f64,
    /// Index of the last matching score rule, `None` when the base score stands.
    pub matched_rule: Option<usize>,
    pub rubric: RubricScores,
}

pub(crate) fn estimate_band(essay: &str, word_count: usize, config: &HeuristicConfig) -> BandEstimate {
    let mut holistic = config.base_score;
    let mut matched_rule = None;

    for (index, rule) in config.score_rules.iter().enumerate() {
        if rule.matches(essay, word_count) {
            holistic = rule.score;
            matched_rule = Some(index);
        }
    }

    BandEstimate {
        holistic,
        matched_rule,
        rubric: rubric_from_holistic(holistic),
    }
}

/// Fixed offsets from the holistic band.
pub fn rubric_from_holistic(holistic: f64) -> RubricScores {
    RubricScores {
        task_achievement: holistic,
        coherence_cohesion: f64::max(4.0, holistic - 0.5),
        lexical_resource: f64::max(4.0, holistic - 0.3),
        grammatical_range: holistic + 0.2,
    }
}
