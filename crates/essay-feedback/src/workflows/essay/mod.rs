//! IELTS Writing Task 2 essay analysis: validation, heuristic scoring, model delegation
//! and the HTTP surface that exposes them.

pub mod catalog;
pub mod domain;
pub mod heuristics;
pub mod model;
pub mod reference;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use catalog::{PromptCatalog, SamplePrompt};
pub use domain::{
    word_count, AnalysisMode, AnalysisResult, AnalysisSource, AnalyzedEssay, ArgumentElement,
    ArgumentElements, Effectiveness, EssaySubmission, FallbackReason, LinguisticMetrics,
    RubricCriterion, RubricFeedback, RubricScores, SourceSpan,
};
pub use heuristics::{HeuristicAnalyzer, HeuristicConfig};
pub use model::{LanguageModel, ModelCall, ModelError, ModelRequest, OpenAiChatModel};
pub use reference::{ReferenceDataset, ReferenceError};
pub use router::{analysis_router, ANALYSIS_SOURCE_HEADER};
pub use service::{DefaultAnalysisService, EssayAnalysisService};
pub use validation::{SubmissionValidator, ValidationError};
