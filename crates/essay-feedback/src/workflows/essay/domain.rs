use std::fmt;

use serde::{Deserialize, Serialize};

/// Depth of analysis requested by the client. Informational only; every mode runs the
/// same pipeline, and unrecognized values are kept as `Other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum AnalysisMode {
    #[default]
    Comprehensive,
    Quick,
    Focused,
    Other,
}

impl From<String> for AnalysisMode {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "comprehensive" => Self::Comprehensive,
            "quick" => Self::Quick,
            "focused" => Self::Focused,
            _ => Self::Other,
        }
    }
}

/// Essay and task prompt as posted by the student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EssaySubmission {
    #[serde(default)]
    pub essay: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub mode: AnalysisMode,
}

impl EssaySubmission {
    pub fn new(essay: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            essay: essay.into(),
            prompt: prompt.into(),
            mode: AnalysisMode::default(),
        }
    }
}

/// Whitespace-delimited word count shared by validation, scoring and metrics.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Closed rating attached to every argumentative element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effectiveness {
    Effective,
    Adequate,
    Ineffective,
    Missing,
}

impl Effectiveness {
    pub fn label(&self) -> &'static str {
        match self {
            Effectiveness::Effective => "Effective",
            Effectiveness::Adequate => "Adequate",
            Effectiveness::Ineffective => "Ineffective",
            Effectiveness::Missing => "Missing",
        }
    }

    /// Lenient parse for model output ("effective", " Adequate ").
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "effective" => Some(Self::Effective),
            "adequate" => Some(Self::Adequate),
            "ineffective" => Some(Self::Ineffective),
            "missing" => Some(Self::Missing),
            _ => None,
        }
    }
}

impl fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Byte range `[start, end)` of an element inside the submitted essay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpan {
    pub start: usize,
    pub end: usize,
}

impl SourceSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Locates the first occurrence of `text` in `essay`.
    pub fn locate(essay: &str, text: &str) -> Option<Self> {
        let needle = text.trim();
        if needle.is_empty() {
            return None;
        }
        essay
            .find(needle)
            .map(|start| Self::new(start, start + needle.len()))
    }

    pub fn slice<'a>(&self, essay: &'a str) -> Option<&'a str> {
        essay.get(self.start..self.end)
    }
}

/// One detected argumentative role instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgumentElement {
    pub text: String,
    pub effectiveness: Effectiveness,
    pub feedback: String,
    #[serde(default)]
    pub indirect_feedback: String,
    #[serde(default)]
    pub reflection_prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<SourceSpan>,
}

impl ArgumentElement {
    pub fn is_missing(&self) -> bool {
        self.effectiveness == Effectiveness::Missing
    }
}

/// The seven Crossley roles. Claims and evidence are ordered by rhetorical position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentElements {
    pub lead: ArgumentElement,
    pub position: ArgumentElement,
    pub claims: Vec<ArgumentElement>,
    pub evidence: Vec<ArgumentElement>,
    pub counterclaim: ArgumentElement,
    pub rebuttal: ArgumentElement,
    pub conclusion: ArgumentElement,
}

impl ArgumentElements {
    /// Singletons in essay order, labelled for reporting.
    pub fn singletons(&self) -> [(&'static str, &ArgumentElement); 5] {
        [
            ("lead", &self.lead),
            ("position", &self.position),
            ("counterclaim", &self.counterclaim),
            ("rebuttal", &self.rebuttal),
            ("conclusion", &self.conclusion),
        ]
    }

    pub fn missing_roles(&self) -> Vec<&'static str> {
        let mut roles: Vec<&'static str> = self
            .singletons()
            .into_iter()
            .filter(|(_, element)| element.is_missing())
            .map(|(role, _)| role)
            .collect();
        if self.claims.iter().all(ArgumentElement::is_missing) {
            roles.push("claims");
        }
        roles
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinguisticMetrics {
    pub lexical_diversity: f64,
    pub academic_word_coverage: f64,
    pub lexical_prevalence: f64,
    #[serde(rename = "cUnitComplexity")]
    pub clause_complexity: f64,
    pub verb_phrase_ratio: f64,
    pub dependent_clause_ratio: f64,
}

/// The four IELTS Task 2 criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RubricCriterion {
    TaskAchievement,
    CoherenceCohesion,
    LexicalResource,
    GrammaticalRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RubricScores {
    pub task_achievement: f64,
    pub coherence_cohesion: f64,
    pub lexical_resource: f64,
    pub grammatical_range: f64,
}

impl RubricScores {
    pub fn get(&self, criterion: RubricCriterion) -> f64 {
        match criterion {
            RubricCriterion::TaskAchievement => self.task_achievement,
            RubricCriterion::CoherenceCohesion => self.coherence_cohesion,
            RubricCriterion::LexicalResource => self.lexical_resource,
            RubricCriterion::GrammaticalRange => self.grammatical_range,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RubricFeedback {
    pub task_achievement: String,
    pub coherence_cohesion: String,
    pub lexical_resource: String,
    pub grammatical_range: String,
}

/// Aggregate returned to the presentation layer by either analysis path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub holistic_score: f64,
    pub confidence: String,
    pub score_rationale: String,
    pub elements: ArgumentElements,
    pub linguistic_metrics: LinguisticMetrics,
    pub rubric_scores: RubricScores,
    pub rubric_feedback: RubricFeedback,
    pub natural_language_summary: String,
    pub recommendations: Vec<String>,
}

/// Why the heuristic analyzer produced a result instead of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    NotConfigured,
    UpstreamUnavailable,
    UpstreamFormat,
}

impl FallbackReason {
    pub fn note(&self) -> &'static str {
        match self {
            FallbackReason::NotConfigured => {
                "Note: This analysis is provided by a fallback system due to missing OpenAI API configuration."
            }
            FallbackReason::UpstreamUnavailable => {
                "Note: This analysis is provided by a fallback system because the AI scoring service could not be reached."
            }
            FallbackReason::UpstreamFormat => {
                "Note: This analysis is provided by a fallback system because the AI scoring service returned an unreadable response."
            }
        }
    }
}

/// Which path produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisSource {
    Model,
    Heuristic { reason: FallbackReason },
}

impl AnalysisSource {
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisSource::Model => "model",
            AnalysisSource::Heuristic { .. } => "heuristic",
        }
    }
}

/// Service output: the wire result plus the path that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedEssay {
    pub result: AnalysisResult,
    pub source: AnalysisSource,
}
