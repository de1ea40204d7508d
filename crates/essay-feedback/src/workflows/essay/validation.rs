use super::domain::{word_count, EssaySubmission};

pub const DEFAULT_MINIMUM_WORDS: usize = 200;

/// Rejections raised before any analysis runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Essay must be at least {minimum} words")]
    EssayTooShort { minimum: usize, found: usize },
    #[error("Essay prompt is required")]
    MissingPrompt,
}

/// Gatekeeper for submissions. Passes accepted text through untouched.
#[derive(Debug, Clone)]
pub struct SubmissionValidator {
    minimum_words: usize,
}

impl Default for SubmissionValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MINIMUM_WORDS)
    }
}

impl SubmissionValidator {
    pub fn new(minimum_words: usize) -> Self {
        Self { minimum_words }
    }

    pub fn validate<'a>(
        &self,
        submission: &'a EssaySubmission,
    ) -> Result<&'a EssaySubmission, ValidationError> {
        let found = word_count(&submission.essay);
        if found < self.minimum_words {
            return Err(ValidationError::EssayTooShort {
                minimum: self.minimum_words,
                found,
            });
        }

        if submission.prompt.trim().is_empty() {
            return Err(ValidationError::MissingPrompt);
        }

        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(count: usize) -> String {
        vec!["word"; count].join(" ")
    }

    #[test]
    fn rejects_essay_below_minimum() {
        let validator = SubmissionValidator::default();
        let submission = EssaySubmission::new(words(199), "Discuss both views.");

        let err = validator.validate(&submission).expect_err("too short");

        assert_eq!(
            err,
            ValidationError::EssayTooShort {
                minimum: 200,
                found: 199
            }
        );
        assert_eq!(err.to_string(), "Essay must be at least 200 words");
    }

    #[test]
    fn rejects_empty_essay_before_prompt() {
        let validator = SubmissionValidator::default();
        let submission = EssaySubmission::new("", "");

        let err = validator.validate(&submission).expect_err("empty essay");

        assert!(matches!(err, ValidationError::EssayTooShort { found: 0, .. }));
    }

    #[test]
    fn rejects_blank_prompt() {
        let validator = SubmissionValidator::default();
        let submission = EssaySubmission::new(words(200), " \n ");

        let err = validator.validate(&submission).expect_err("blank prompt");

        assert_eq!(err, ValidationError::MissingPrompt);
        assert_eq!(err.to_string(), "Essay prompt is required");
    }

    #[test]
    fn accepts_exact_minimum_without_normalizing() {
        let validator = SubmissionValidator::default();
        let essay = format!("  {}  ", words(200));
        let submission = EssaySubmission::new(essay.clone(), "Prompt");

        let accepted = validator.validate(&submission).expect("accepted");

        assert_eq!(accepted.essay, essay);
    }
}
