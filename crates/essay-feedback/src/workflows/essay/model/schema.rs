use serde::Deserialize;
use serde_json::{Map, Value};

use super::super::domain::{
    ArgumentElement, ArgumentElements, Effectiveness, LinguisticMetrics, RubricFeedback,
    RubricScores, SourceSpan,
};
use super::super::heuristics::{recommendations_for, rubric_from_holistic, RECOMMENDATION_COUNT};
use super::ModelError;

const MAX_BAND: f64 = 9.0;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawElement {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    effectiveness: Option<String>,
    #[serde(default)]
    feedback: Option<String>,
    #[serde(default, alias = "indirect_feedback")]
    indirect_feedback: Option<String>,
    #[serde(default, alias = "reflection_prompt")]
    reflection_prompt: Option<String>,
}

impl RawElement {
    fn into_element(self, essay: &str) -> ArgumentElement {
        let text = self.text.unwrap_or_default().trim().to_string();
        let rating = self
            .effectiveness
            .as_deref()
            .and_then(Effectiveness::parse_lenient);

        let effectiveness = match (text.is_empty(), rating) {
            (true, _) => Effectiveness::Missing,
            (false, Some(Effectiveness::Missing)) => Effectiveness::Ineffective,
            (false, Some(rating)) => rating,
            (false, None) => Effectiveness::Adequate,
        };
        let span = SourceSpan::locate(essay, &text);

        ArgumentElement {
            text,
            effectiveness,
            feedback: self.feedback.unwrap_or_default(),
            indirect_feedback: self.indirect_feedback.unwrap_or_default(),
            reflection_prompt: self.reflection_prompt.unwrap_or_default(),
            span,
        }
    }
}

fn missing_element() -> ArgumentElement {
    ArgumentElement {
        text: String::new(),
        effectiveness: Effectiveness::Missing,
        feedback: "This element was not identified in your essay.".to_string(),
        indirect_feedback: String::new(),
        reflection_prompt: String::new(),
        span: None,
    }
}

fn format_error(what: &str, detail: impl std::fmt::Display) -> ModelError {
    ModelError::Format(format!("{what}: {detail}"))
}

/// Returns `root[key]` when present as an object, otherwise `root` itself.
fn unwrap_section<'v>(root: &'v Value, key: &str, what: &str) -> Result<&'v Map<String, Value>, ModelError> {
    let object = root
        .as_object()
        .ok_or_else(|| format_error(what, "payload is not a JSON object"))?;
    match object.get(key) {
        Some(Value::Object(inner)) => Ok(inner),
        Some(_) => Err(format_error(what, format!("`{key}` is not an object"))),
        None => Ok(object),
    }
}

fn parse_single(value: &Value, essay: &str) -> Result<ArgumentElement, ModelError> {
    RawElement::deserialize(value)
        .map(|raw| raw.into_element(essay))
        .map_err(|err| format_error("element payload", err))
}

/// Key of the form `"claim 2"`, `"Claim2 "` or `"evidence_3"`, yielding its ordinal.
fn numbered_key(key: &str, stem: &str) -> Option<u32> {
    let normalized = key.trim().to_ascii_lowercase();
    let rest = normalized.strip_prefix(stem)?;
    rest.trim_start_matches(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .parse()
        .ok()
}

/// Collects an ordered role sequence from the array, single-object or numbered-key shapes.
fn parse_sequence(
    elements: &Map<String, Value>,
    plural: &str,
    stem: &str,
    essay: &str,
) -> Result<Vec<ArgumentElement>, ModelError> {
    let mut sequence = Vec::new();

    match elements.get(plural).or_else(|| elements.get(stem)) {
        Some(Value::Array(items)) => {
            for item in items {
                sequence.push(parse_single(item, essay)?);
            }
        }
        Some(single @ Value::Object(_)) => sequence.push(parse_single(single, essay)?),
        Some(Value::Null) | None => {}
        Some(_) => return Err(format_error(plural, "expected an array or object")),
    }

    let mut numbered: Vec<(u32, &Value)> = elements
        .iter()
        .filter_map(|(key, value)| numbered_key(key, stem).map(|ordinal| (ordinal, value)))
        .collect();
    numbered.sort_by_key(|(ordinal, _)| *ordinal);
    for (_, value) in numbered {
        sequence.push(parse_single(value, essay)?);
    }

    sequence.retain(|element| !element.is_missing());
    if sequence.is_empty() {
        sequence.push(missing_element());
    }
    Ok(sequence)
}

fn parse_singleton(
    elements: &Map<String, Value>,
    key: &str,
    essay: &str,
) -> Result<ArgumentElement, ModelError> {
    match elements.get(key) {
        Some(value @ Value::Object(_)) => parse_single(value, essay),
        Some(Value::Null) | None => Ok(missing_element()),
        Some(_) => Err(format_error(key, "expected an object")),
    }
}

/// Parses the element-analysis payload, normalizing legacy claim/evidence shapes.
pub fn parse_elements(root: &Value, essay: &str) -> Result<ArgumentElements, ModelError> {
    let elements = unwrap_section(root, "elements", "element payload")?;

    Ok(ArgumentElements {
        lead: parse_singleton(elements, "lead", essay)?,
        position: parse_singleton(elements, "position", essay)?,
        claims: parse_sequence(elements, "claims", "claim", essay)?,
        evidence: parse_sequence(elements, "evidence", "evidence", essay)?,
        counterclaim: parse_singleton(elements, "counterclaim", essay)?,
        rebuttal: parse_singleton(elements, "rebuttal", essay)?,
        conclusion: parse_singleton(elements, "conclusion", essay)?,
    })
}

/// Parses the linguistic payload; every metric is required and must be finite.
pub fn parse_linguistic(root: &Value) -> Result<LinguisticMetrics, ModelError> {
    let section = unwrap_section(root, "linguisticMetrics", "linguistic payload")?;
    let metrics = LinguisticMetrics::deserialize(Value::Object(section.clone()))
        .map_err(|err| format_error("linguistic payload", err))?;

    let values = [
        metrics.lexical_diversity,
        metrics.academic_word_coverage,
        metrics.lexical_prevalence,
        metrics.clause_complexity,
        metrics.verb_phrase_ratio,
        metrics.dependent_clause_ratio,
    ];
    if values.iter().any(|value| !value.is_finite() || *value < 0.0) {
        return Err(format_error(
            "linguistic payload",
            "metrics must be finite and non-negative",
        ));
    }

    Ok(LinguisticMetrics {
        lexical_diversity: metrics.lexical_diversity.min(1.0),
        dependent_clause_ratio: metrics.dependent_clause_ratio.min(1.0),
        ..metrics
    })
}

/// Scores may arrive as numbers or numeric strings ("6.5").
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
enum Band {
    Number(f64),
    Text(#[serde(deserialize_with = "band_from_str")] f64),
}

fn band_from_str<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.trim().parse().map_err(serde::de::Error::custom)
}

impl Band {
    fn value(self) -> f64 {
        match self {
            Band::Number(value) | Band::Text(value) => value,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRubricScores {
    task_achievement: Band,
    coherence_cohesion: Band,
    lexical_resource: Band,
    grammatical_range: Band,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawHolistic {
    holistic_score: Band,
    #[serde(default)]
    confidence: Option<String>,
    #[serde(default)]
    score_rationale: String,
    #[serde(default)]
    rubric_scores: Option<RawRubricScores>,
    #[serde(default)]
    rubric_feedback: RubricFeedback,
    #[serde(default)]
    natural_language_summary: String,
    #[serde(default)]
    recommendations: Vec<String>,
}

/// Holistic scoring fields of an `AnalysisResult`.
#[derive(Debug, Clone, PartialEq)]
pub struct HolisticAssessment {
    pub holistic_score: f64,
    pub confidence: String,
    pub score_rationale: String,
    pub rubric_scores: RubricScores,
    pub rubric_feedback: RubricFeedback,
    pub natural_language_summary: String,
    pub recommendations: Vec<String>,
}

/// Clamps to [0, 9] and rounds to the nearest half band.
fn half_band(value: f64) -> f64 {
    (value.clamp(0.0, MAX_BAND) * 2.0).round() / 2.0
}

pub fn parse_holistic(root: &Value) -> Result<HolisticAssessment, ModelError> {
    let raw = RawHolistic::deserialize(root).map_err(|err| format_error("holistic payload", err))?;

    let holistic_score = raw.holistic_score.value();
    if !holistic_score.is_finite() {
        return Err(format_error("holistic payload", "holisticScore is not finite"));
    }
    let holistic_score = half_band(holistic_score);

    let rubric_scores = match raw.rubric_scores {
        Some(scores) => {
            let bands = [
                scores.task_achievement.value(),
                scores.coherence_cohesion.value(),
                scores.lexical_resource.value(),
                scores.grammatical_range.value(),
            ];
            if bands.iter().any(|band| !band.is_finite()) {
                return Err(format_error("holistic payload", "rubric score is not finite"));
            }
            RubricScores {
                task_achievement: half_band(bands[0]),
                coherence_cohesion: half_band(bands[1]),
                lexical_resource: half_band(bands[2]),
                grammatical_range: half_band(bands[3]),
            }
        }
        None => rubric_from_holistic(holistic_score),
    };

    let mut recommendations: Vec<String> = raw
        .recommendations
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .take(RECOMMENDATION_COUNT)
        .collect();
    for filler in recommendations_for(holistic_score) {
        if recommendations.len() == RECOMMENDATION_COUNT {
            break;
        }
        if !recommendations.contains(&filler) {
            recommendations.push(filler);
        }
    }

    Ok(HolisticAssessment {
        holistic_score,
        confidence: raw
            .confidence
            .filter(|confidence| !confidence.trim().is_empty())
            .unwrap_or_else(|| "Not reported".to_string()),
        score_rationale: raw.score_rationale,
        rubric_scores,
        rubric_feedback: raw.rubric_feedback,
        natural_language_summary: raw.natural_language_summary,
        recommendations,
    })
}
