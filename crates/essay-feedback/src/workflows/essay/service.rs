use std::sync::Arc;

use serde_json::Value;

use super::domain::{AnalysisResult, AnalysisSource, AnalyzedEssay, EssaySubmission, FallbackReason};
use super::heuristics::HeuristicAnalyzer;
use super::model::{
    extract_json_object, parse_elements, parse_holistic, parse_linguistic, LanguageModel,
    ModelCall, ModelError, OpenAiChatModel, PromptBuilder,
};
use super::reference::ReferenceDataset;
use super::validation::{SubmissionValidator, ValidationError};

/// Service composing validation, the language model and the heuristic fallback.
pub struct EssayAnalysisService<M> {
    validator: SubmissionValidator,
    heuristics: Arc<HeuristicAnalyzer>,
    prompts: PromptBuilder,
    model: Option<Arc<M>>,
}

/// Service wired to the chat-completions client.
pub type DefaultAnalysisService = EssayAnalysisService<OpenAiChatModel>;

impl<M> EssayAnalysisService<M>
where
    M: LanguageModel + 'static,
{
    /// Heuristic-only service; every submission is scored without the model.
    pub fn new(heuristics: HeuristicAnalyzer, dataset: Arc<ReferenceDataset>) -> Self {
        Self {
            validator: SubmissionValidator::default(),
            heuristics: Arc::new(heuristics),
            prompts: PromptBuilder::new(dataset),
            model: None,
        }
    }

    pub fn with_model(mut self, model: Arc<M>) -> Self {
        self.model = Some(model);
        self
    }

    pub fn with_validator(mut self, validator: SubmissionValidator) -> Self {
        self.validator = validator;
        self
    }

    pub fn model_configured(&self) -> bool {
        self.model.is_some()
    }

    pub fn heuristics(&self) -> &HeuristicAnalyzer {
        &self.heuristics
    }

    /// Validate and analyze a submission.
    ///
    /// Only validation failures reach the caller. Any model failure substitutes the
    /// heuristic result; dropping the future abandons in-flight model calls.
    pub async fn analyze(
        &self,
        submission: &EssaySubmission,
    ) -> Result<AnalyzedEssay, ValidationError> {
        self.validator.validate(submission)?;

        let Some(model) = &self.model else {
            tracing::info!(mode = ?submission.mode, "no language model configured, using heuristic analysis");
            return Ok(self.fallback(submission, FallbackReason::NotConfigured));
        };

        match self.analyze_with_model(model.as_ref(), submission).await {
            Ok(result) => {
                tracing::info!(
                    model = model.name(),
                    mode = ?submission.mode,
                    holistic = result.holistic_score,
                    "model analysis complete"
                );
                Ok(AnalyzedEssay {
                    result,
                    source: AnalysisSource::Model,
                })
            }
            Err(err) => {
                tracing::warn!(
                    model = model.name(),
                    error = %err,
                    "model analysis failed, falling back to heuristic analysis"
                );
                Ok(self.fallback(submission, err.fallback_reason()))
            }
        }
    }

    fn fallback(&self, submission: &EssaySubmission, reason: FallbackReason) -> AnalyzedEssay {
        AnalyzedEssay {
            result: self.heuristics.analyze(&submission.essay, reason),
            source: AnalysisSource::Heuristic { reason },
        }
    }

    async fn analyze_with_model(
        &self,
        model: &M,
        submission: &EssaySubmission,
    ) -> Result<AnalysisResult, ModelError> {
        let EssaySubmission { essay, prompt, .. } = submission;
        let elements_request = self.prompts.request(ModelCall::Elements, prompt, essay);
        let linguistic_request = self.prompts.request(ModelCall::Linguistic, prompt, essay);
        let holistic_request = self.prompts.request(ModelCall::Holistic, prompt, essay);

        let (elements, linguistic, holistic) = tokio::join!(
            model.complete(&elements_request),
            model.complete(&linguistic_request),
            model.complete(&holistic_request),
        );

        let elements = parse_elements(&decode(&elements?)?, essay)?;
        let linguistic_metrics = parse_linguistic(&decode(&linguistic?)?)?;
        let holistic = parse_holistic(&decode(&holistic?)?)?;

        Ok(AnalysisResult {
            holistic_score: holistic.holistic_score,
            confidence: holistic.confidence,
            score_rationale: holistic.score_rationale,
            elements,
            linguistic_metrics,
            rubric_scores: holistic.rubric_scores,
            rubric_feedback: holistic.rubric_feedback,
            natural_language_summary: holistic.natural_language_summary,
            recommendations: holistic.recommendations,
        })
    }
}

fn decode(text: &str) -> Result<Value, ModelError> {
    let object = extract_json_object(text)?;
    serde_json::from_str(object).map_err(|err| ModelError::Format(err.to_string()))
}
