use std::path::Path;

use glimpsy_core::model::{QuestionDraft, QuestionSet};

use crate::error::DatasetError;

/// Parse and validate a JSON array of `{prompt, options, answer, points}` records.
///
/// # Errors
///
/// Returns `DatasetError::Json` for malformed input and `DatasetError::Invalid`
/// when the questions break a dataset rule.
pub fn parse_question_set(json: &str) -> Result<QuestionSet, DatasetError> {
    let drafts: Vec<QuestionDraft> = serde_json::from_str(json)?;
    Ok(QuestionSet::from_drafts(drafts)?)
}

/// Load a dataset file from disk.
///
/// # Errors
///
/// Returns `DatasetError::Io` if the file cannot be read, plus any parse error.
pub fn load_question_set(path: &Path) -> Result<QuestionSet, DatasetError> {
    let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let questions = parse_question_set(&json)?;
    tracing::info!(
        path = %path.display(),
        count = questions.len(),
        total_points = questions.total_points(),
        "loaded question set"
    );
    Ok(questions)
}
