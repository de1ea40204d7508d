use std::sync::Arc;

use super::super::reference::ReferenceDataset;
use super::{ModelCall, ModelRequest};

const ELEMENT_SCHEMA: &str = r#"{
  "elements": {
    "lead": ELEMENT,
    "position": ELEMENT,
    "claims": [ELEMENT, ...],
    "evidence": [ELEMENT, ...],
    "counterclaim": ELEMENT,
    "rebuttal": ELEMENT,
    "conclusion": ELEMENT
  }
}
where ELEMENT is
{
  "text": "exact text copied from the essay, or an empty string",
  "effectiveness": "Effective|Adequate|Ineffective|Missing",
  "feedback": "detailed feedback",
  "indirectFeedback": "an indirect question guiding the student",
  "reflectionPrompt": "a reflection question"
}"#;

const LINGUISTIC_SCHEMA: &str = r#"{
  "linguisticMetrics": {
    "lexicalDiversity": 0.65,
    "academicWordCoverage": 12.5,
    "lexicalPrevalence": 3.2,
    "cUnitComplexity": 1.4,
    "verbPhraseRatio": 1.2,
    "dependentClauseRatio": 0.35
  }
}"#;

const HOLISTIC_SCHEMA: &str = r#"{
  "holisticScore": 6.5,
  "confidence": "High (85%)",
  "scoreRationale": "brief explanation of the overall score",
  "rubricScores": {
    "taskAchievement": 6.0,
    "coherenceCohesion": 6.5,
    "lexicalResource": 6.0,
    "grammaticalRange": 7.0
  },
  "rubricFeedback": {
    "taskAchievement": "how well the essay addresses the task",
    "coherenceCohesion": "organization and flow",
    "lexicalResource": "vocabulary usage",
    "grammaticalRange": "grammar and sentence structures"
  },
  "naturalLanguageSummary": "summary that mirrors rubric language",
  "recommendations": ["recommendation 1", "recommendation 2", "recommendation 3"]
}"#;

/// Renders the three analysis prompts around the injected reference dataset.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    dataset: Arc<ReferenceDataset>,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(Arc::new(ReferenceDataset::builtin()))
    }
}

impl PromptBuilder {
    pub fn new(dataset: Arc<ReferenceDataset>) -> Self {
        Self { dataset }
    }

    pub fn request(&self, call: ModelCall, prompt: &str, essay: &str) -> ModelRequest {
        let text = match call {
            ModelCall::Elements => self.element_prompt(prompt, essay),
            ModelCall::Linguistic => linguistic_prompt(prompt, essay),
            ModelCall::Holistic => self.holistic_prompt(prompt, essay),
        };
        ModelRequest::new(call, text)
    }

    fn element_prompt(&self, prompt: &str, essay: &str) -> String {
        format!(
            "You are an expert IELTS Writing Task 2 assessor. Identify the argumentative \
             elements of the essay below following the Crossley discourse model: Lead, \
             Position, Claims, Evidence, Counterclaim, Rebuttal and Conclusion.\n\n\
             Annotated training examples:\n{examples}\n\n\
             IELTS Task 2 prompt:\n\"{prompt}\"\n\n\
             Essay to analyze:\n\"{essay}\"\n\n\
             Rate each element against how well it serves this prompt. List every claim and \
             every piece of evidence in the order it appears. Use an empty string and \
             \"Missing\" for any element the essay does not contain.\n\n\
             Return only JSON with this structure:\n{ELEMENT_SCHEMA}\n",
            examples = self.dataset.training_examples().trim(),
        )
    }

    fn holistic_prompt(&self, prompt: &str, essay: &str) -> String {
        format!(
            "You are an expert IELTS Writing Task 2 examiner. Each training example below \
             carries a holistic_essay_score; use them to calibrate your scoring.\n\n\
             Training examples:\n{examples}\n\n\
             Assessment criteria:\n{rubric}\n\n\
             IELTS Task 2 prompt:\n\"{prompt}\"\n\n\
             Essay:\n\"{essay}\"\n\n\
             Provide an overall band score (0-9, half bands allowed), a score and detailed \
             feedback for each criterion, a natural language summary, exactly three \
             recommendations for improvement, and a confidence level with rationale.\n\n\
             Return only JSON with this structure:\n{HOLISTIC_SCHEMA}\n",
            examples = self.dataset.training_examples().trim(),
            rubric = self.dataset.rubric_criteria().trim(),
        )
    }
}

fn linguistic_prompt(prompt: &str, essay: &str) -> String {
    format!(
        "Analyze the linguistic features of this essay.\n\n\
         Prompt: \"{prompt}\"\n\
         Essay: \"{essay}\"\n\n\
         Calculate:\n\
         1. Lexical Diversity (type-token ratio): unique words / total words\n\
         2. Academic Word Coverage: percentage of words from the Academic Word List\n\
         3. Lexical Prevalence: average frequency score (lower = more sophisticated)\n\
         4. C-unit Complexity: clauses per c-unit\n\
         5. Verb Phrase Ratio: c-units per verb phrase\n\
         6. Dependent Clause Ratio: dependent clauses / total clauses\n\n\
         Return only JSON with this structure:\n{LINGUISTIC_SCHEMA}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_embed_injected_dataset() {
        let builder = PromptBuilder::new(Arc::new(ReferenceDataset::new(
            "EXAMPLE-MARKER",
            "RUBRIC-MARKER",
        )));

        let elements = builder.request(ModelCall::Elements, "Discuss both views.", "My essay.");
        assert!(elements.prompt.contains("EXAMPLE-MARKER"));
        assert!(elements.prompt.contains("\"claims\": [ELEMENT, ...]"));
        assert!(elements.prompt.contains("My essay."));
        assert_eq!(elements.temperature, 0.3);

        let holistic = builder.request(ModelCall::Holistic, "Discuss both views.", "My essay.");
        assert!(holistic.prompt.contains("RUBRIC-MARKER"));
        assert!(holistic.prompt.contains("\"holisticScore\""));

        let linguistic = builder.request(ModelCall::Linguistic, "Discuss both views.", "My essay.");
        assert!(!linguistic.prompt.contains("EXAMPLE-MARKER"));
        assert!(linguistic.prompt.contains("cUnitComplexity"));
        assert_eq!(linguistic.temperature, 0.1);
    }
}
