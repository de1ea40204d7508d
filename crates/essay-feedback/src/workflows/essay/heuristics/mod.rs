mod assembly;
mod config;
mod elements;
mod metrics;
mod scoring;

pub use assembly::{recommendations_for, HEURISTIC_CONFIDENCE, RECOMMENDATION_COUNT};
pub use config::{ElementTriggers, HeuristicConfig, MetricTriggers, ScoreRule};
pub use scoring::{rubric_from_holistic, BandEstimate};

use super::domain::{
    word_count, AnalysisResult, ArgumentElements, FallbackReason, LinguisticMetrics,
};
use assembly::{assemble, AssemblyInput};

/// Stateless analyzer substituting for the language model.
///
/// Every output is a pure function of the essay text and the injected configuration.
#[derive(Debug, Clone, Default)]
pub struct HeuristicAnalyzer {
    config: HeuristicConfig,
}

impl HeuristicAnalyzer {
    pub fn new(config: HeuristicConfig) -> Self {
        Self { config }
    }

    pub fn score(&self, essay: &str) -> BandEstimate {
        scoring::estimate_band(essay, word_count(essay), &self.config)
    }

    pub fn detect_elements(&self, essay: &str) -> ArgumentElements {
        elements::detect_elements(essay, &self.config.elements)
    }

    pub fn estimate_metrics(&self, essay: &str) -> LinguisticMetrics {
        metrics::estimate_metrics(essay, word_count(essay), &self.config.metrics)
    }

    pub fn analyze(&self, essay: &str, reason: FallbackReason) -> AnalysisResult {
        let words = word_count(essay);
        let estimate = scoring::estimate_band(essay, words, &self.config);
        let elements = elements::detect_elements(essay, &self.config.elements);
        let metrics = metrics::estimate_metrics(essay, words, &self.config.metrics);
        let organized = self
            .config
            .organizing_markers
            .iter()
            .any(|marker| essay.contains(marker.as_str()));

        tracing::debug!(
            words,
            holistic = estimate.holistic,
            matched_rule = ?estimate.matched_rule,
            missing = ?elements.missing_roles(),
            "heuristic analysis complete"
        );

        assemble(AssemblyInput {
            word_count: words,
            estimate,
            elements,
            metrics,
            organized,
            reason,
        })
    }
}
