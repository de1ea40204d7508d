//! Feedback engine for IELTS Writing Task 2 essays.
//!
//! Submissions are validated, then analyzed either by an OpenAI-compatible chat model or by
//! the deterministic heuristic analyzer. Both paths produce the same [`AnalysisResult`].
//!
//! [`AnalysisResult`]: workflows::essay::AnalysisResult

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
