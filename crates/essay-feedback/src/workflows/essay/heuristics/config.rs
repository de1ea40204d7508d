use serde::{Deserialize, Serialize};

/// Lexical triggers and score tiers driving the heuristic analyzer.
///
/// All phrase matching is case-sensitive substring matching. Phrase lists are ordered;
/// the first phrase present in the essay wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeuristicConfig {
    pub base_score: f64,
    pub score_rules: Vec<ScoreRule>,
    /// Phrases that earn the organizing-language remark in coherence feedback.
    pub organizing_markers: Vec<String>,
    pub elements: ElementTriggers,
    pub metrics: MetricTriggers,
}

/// A tier raising the holistic score. Rules are evaluated in order and the last match wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRule {
    pub score: f64,
    pub min_words: usize,
    /// Every phrase must be present.
    #[serde(default)]
    pub all_of: Vec<String>,
    /// At least one phrase must be present; ignored when empty.
    #[serde(default)]
    pub any_of: Vec<String>,
}

impl ScoreRule {
    pub fn matches(&self, essay: &str, word_count: usize) -> bool {
        word_count >= self.min_words
            && self.all_of.iter().all(|phrase| essay.contains(phrase.as_str()))
            && (self.any_of.is_empty()
                || self.any_of.iter().any(|phrase| essay.contains(phrase.as_str())))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementTriggers {
    pub lead_terminator: char,
    pub lead_effective_min_len: usize,
    pub position: Vec<String>,
    pub position_window_chars: usize,
    pub claim_openers: Vec<String>,
    /// Markers for the second and later claims, each yielding one claim instance.
    pub claim_followups: Vec<String>,
    /// Signals that lift claims from Adequate to Effective.
    pub claim_development: Vec<String>,
    pub evidence: Vec<String>,
    pub counterclaim: Vec<String>,
    pub rebuttal: Vec<String>,
    pub conclusion: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricTriggers {
    pub diversity_cap: f64,
    pub diversity_word_scale: f64,
    pub academic: Vec<String>,
    pub sophisticated: Vec<String>,
    pub subordinators: Vec<String>,
    pub relatives: Vec<String>,
}

fn phrases(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            base_score: 5.0,
            score_rules: vec![
                ScoreRule {
                    score: 6.5,
                    min_words: 300,
                    all_of: phrases(&["however", "conclusion"]),
                    any_of: Vec::new(),
                },
                ScoreRule {
                    score: 7.0,
                    min_words: 400,
                    all_of: phrases(&["furthermore", "In my opinion"]),
                    any_of: Vec::new(),
                },
                ScoreRule {
                    score: 7.5,
                    min_words: 0,
                    all_of: Vec::new(),
                    any_of: phrases(&["Nevertheless", "Consequently"]),
                },
            ],
            organizing_markers: phrases(&["Firstly"]),
            elements: ElementTriggers::default(),
            metrics: MetricTriggers::default(),
        }
    }
}

impl Default for ElementTriggers {
    fn default() -> Self {
        Self {
            lead_terminator: '.',
            lead_effective_min_len: 500,
            position: phrases(&["In my opinion", "I believe"]),
            position_window_chars: 100,
            claim_openers: phrases(&["Firstly", "First"]),
            claim_followups: phrases(&["Secondly", "Finally"]),
            claim_development: phrases(&["Secondly", "Furthermore"]),
            evidence: phrases(&["For example", "For instance"]),
            counterclaim: phrases(&["However", "On the other hand"]),
            rebuttal: phrases(&["Nevertheless", "Despite this"]),
            conclusion: phrases(&["In conclusion", "To conclude"]),
        }
    }
}

impl Default for MetricTriggers {
    fn default() -> Self {
        Self {
            diversity_cap: 0.8,
            diversity_word_scale: 500.0,
            academic: phrases(&["significant", "furthermore"]),
            sophisticated: phrases(&["sophisticated"]),
            subordinators: phrases(&["although", "because"]),
            relatives: phrases(&["which", "that"]),
        }
    }
}
