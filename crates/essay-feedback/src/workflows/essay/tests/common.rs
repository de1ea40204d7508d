use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::{json, Value};

use crate::workflows::essay::heuristics::HeuristicAnalyzer;
use crate::workflows::essay::model::{LanguageModel, ModelCall, ModelError, ModelRequest};
use crate::workflows::essay::reference::ReferenceDataset;
use crate::workflows::essay::service::EssayAnalysisService;
use crate::workflows::essay::{analysis_router, word_count, EssaySubmission};

pub(super) const PROMPT: &str = "Some people believe that technology has made learning easier. Discuss both views and give your own opinion.";

const FILLER: [&str; 10] = [
    "students", "learn", "new", "skills", "every", "day", "at", "school", "and", "home",
];

/// Trigger-free words, with a full stop after every tenth word.
pub(super) fn filler(count: usize) -> String {
    let mut text = String::new();
    for index in 0..count {
        if index > 0 {
            text.push(' ');
        }
        text.push_str(FILLER[index % FILLER.len()]);
        if index % 10 == 9 {
            text.push('.');
        }
    }
    text
}

/// `phrases` followed by filler so the essay has exactly `total_words` words.
pub(super) fn essay_with(total_words: usize, phrases: &[&str]) -> String {
    let lead = phrases.join(" ");
    let used = word_count(&lead);
    assert!(used <= total_words, "phrases exceed requested length");
    let essay = if lead.is_empty() {
        filler(total_words)
    } else {
        format!("{lead} {}", filler(total_words - used))
    };
    assert_eq!(word_count(&essay), total_words);
    essay
}

pub(super) fn submission(essay: impl Into<String>) -> EssaySubmission {
    EssaySubmission::new(essay, PROMPT)
}

pub(super) fn analyzer() -> HeuristicAnalyzer {
    HeuristicAnalyzer::default()
}

pub(super) fn heuristic_service() -> EssayAnalysisService<ScriptedModel> {
    EssayAnalysisService::new(analyzer(), Arc::new(ReferenceDataset::builtin()))
}

pub(super) fn model_service(model: Arc<ScriptedModel>) -> EssayAnalysisService<ScriptedModel> {
    heuristic_service().with_model(model)
}

pub(super) fn application_router(service: EssayAnalysisService<ScriptedModel>) -> axum::Router {
    analysis_router(Arc::new(service))
}

/// Language model double returning canned completions per call kind.
#[derive(Default)]
pub(super) struct ScriptedModel {
    responses: HashMap<ModelCall, Result<String, ModelError>>,
    calls: Mutex<Vec<ModelCall>>,
}

impl ScriptedModel {
    pub(super) fn respond(mut self, call: ModelCall, response: Result<String, ModelError>) -> Self {
        self.responses.insert(call, response);
        self
    }

    pub(super) fn calls(&self) -> Vec<ModelCall> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }

    /// All three calls answered with well-formed payloads wrapped in prose.
    pub(super) fn healthy(essay: &str) -> Self {
        Self::default()
            .respond(
                ModelCall::Elements,
                Ok(format!("```json\n{}\n```", element_payload(essay))),
            )
            .respond(
                ModelCall::Linguistic,
                Ok(format!("Here are the metrics: {}", linguistic_payload())),
            )
            .respond(ModelCall::Holistic, Ok(holistic_payload().to_string()))
    }
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, request: &ModelRequest) -> Result<String, ModelError> {
        self.calls
            .lock()
            .expect("calls mutex poisoned")
            .push(request.call);
        self.responses
            .get(&request.call)
            .cloned()
            .unwrap_or_else(|| Err(ModelError::Unavailable("no scripted response".to_string())))
    }
}

pub(super) fn element_payload(essay: &str) -> Value {
    let lead = essay.split('.').next().unwrap_or_default();
    json!({
        "elements": {
            "lead": {
                "text": format!("{lead}."),
                "effectiveness": "Effective",
                "feedback": "Engaging opening.",
                "indirectFeedback": "Does the opening hook the reader?",
                "reflectionPrompt": "What makes an opening memorable?"
            },
            "position": {
                "text": "",
                "effectiveness": "Missing",
                "feedback": "State your position.",
                "indirectFeedback": "Where is your opinion?",
                "reflectionPrompt": "Why does a thesis matter?"
            },
            "claim 1": {
                "text": "Claim the model paraphrased",
                "effectiveness": "Adequate",
                "feedback": "Develop this claim.",
                "indirectFeedback": "Is the claim specific?",
                "reflectionPrompt": "How does it support the position?"
            },
            "evidence": [],
            "counterclaim": null,
            "rebuttal": {
                "text": "",
                "effectiveness": "Missing",
                "feedback": "Respond to the other side.",
                "indirectFeedback": "",
                "reflectionPrompt": ""
            },
            "conclusion": {
                "text": "",
                "effectiveness": "Missing",
                "feedback": "Add a conclusion.",
                "indirectFeedback": "",
                "reflectionPrompt": ""
            }
        }
    })
}

pub(super) fn linguistic_payload() -> Value {
    json!({
        "linguisticMetrics": {
            "lexicalDiversity": 0.58,
            "academicWordCoverage": 9.4,
            "lexicalPrevalence": 3.1,
            "cUnitComplexity": 1.3,
            "verbPhraseRatio": 1.15,
            "dependentClauseRatio": 0.28
        }
    })
}

pub(super) fn holistic_payload() -> Value {
    json!({
        "holisticScore": 6.0,
        "confidence": "High (85%)",
        "scoreRationale": "Clear but underdeveloped.",
        "rubricScores": {
            "taskAchievement": 6.0,
            "coherenceCohesion": 6.0,
            "lexicalResource": 5.5,
            "grammaticalRange": 6.5
        },
        "rubricFeedback": {
            "taskAchievement": "Addresses the task.",
            "coherenceCohesion": "Logical order.",
            "lexicalResource": "Some repetition.",
            "grammaticalRange": "Mix of structures."
        },
        "naturalLanguageSummary": "A competent response.",
        "recommendations": ["Add examples", "Vary vocabulary", "Strengthen the conclusion"]
    })
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
