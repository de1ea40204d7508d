use std::fs;
use std::path::{Path, PathBuf};

const TRAINING_EXAMPLES_FILE: &str = "training_examples.txt";
const RUBRIC_CRITERIA_FILE: &str = "rubric_criteria.txt";

const BUILTIN_TRAINING_EXAMPLES: &str = include_str!("../../../data/training_examples.txt");
const BUILTIN_RUBRIC_CRITERIA: &str = include_str!("../../../data/rubric_criteria.txt");

#[derive(Debug, thiserror::Error)]
pub enum ReferenceError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is empty")]
    Empty { path: PathBuf },
}

/// Read-only few-shot examples and rubric descriptors embedded into model prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceDataset {
    training_examples: String,
    rubric_criteria: String,
}

impl Default for ReferenceDataset {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ReferenceDataset {
    pub fn new(training_examples: impl Into<String>, rubric_criteria: impl Into<String>) -> Self {
        Self {
            training_examples: training_examples.into(),
            rubric_criteria: rubric_criteria.into(),
        }
    }

    /// Annotated essays and IELTS band descriptors shipped with the crate.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_TRAINING_EXAMPLES, BUILTIN_RUBRIC_CRITERIA)
    }

    /// Loads `training_examples.txt` and `rubric_criteria.txt` from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, ReferenceError> {
        Ok(Self::new(
            read_non_empty(&dir.join(TRAINING_EXAMPLES_FILE))?,
            read_non_empty(&dir.join(RUBRIC_CRITERIA_FILE))?,
        ))
    }

    pub fn training_examples(&self) -> &str {
        &self.training_examples
    }

    pub fn rubric_criteria(&self) -> &str {
        &self.rubric_criteria
    }
}

fn read_non_empty(path: &Path) -> Result<String, ReferenceError> {
    let contents = fs::read_to_string(path).map_err(|source| ReferenceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if contents.trim().is_empty() {
        return Err(ReferenceError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(contents)
}
