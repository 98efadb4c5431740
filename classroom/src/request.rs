//! Tool request payloads and their validation.
//!
//! Requests serialize camelCase to match the generation service contract
//! (`{ prompt, language, gradeLevel, subject }`). Validation fails fast on the
//! first missing required input and never inspects optional selections.

use serde::{Deserialize, Serialize};

use crate::choices::{Complexity, GradeLevel, Language, Subject};
use crate::error::{Field, InputError};

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Checks that every required input is present.
pub trait Validate {
    /// # Errors
    ///
    /// Returns [`InputError::MissingInput`] naming the first empty field.
    fn validate(&self) -> Result<(), InputError>;
}

fn require_text(value: &str, field: Field) -> Result<(), InputError> {
    if value.trim().is_empty() {
        return Err(InputError::MissingInput(field));
    }
    Ok(())
}

// =============================================================================
// FILE REFERENCE
// =============================================================================

/// A user-selected file, known only by name and size. Content never leaves
/// the browser.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRef {
    pub name: String,
    pub size_bytes: u64,
}

impl FileRef {
    #[must_use]
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self { name: name.into(), size_bytes }
    }

    /// Size in megabytes with two decimals, e.g. `"1.50 MB"`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size_bytes as f64 / BYTES_PER_MB)
    }
}

// =============================================================================
// REQUESTS
// =============================================================================

/// StoryCrafter request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryRequest {
    pub prompt: String,
    pub language: Language,
    #[serde(default)]
    pub grade_level: GradeLevel,
    #[serde(default)]
    pub subject: Subject,
}

impl Validate for StoryRequest {
    fn validate(&self) -> Result<(), InputError> {
        require_text(&self.prompt, Field::Prompt)
    }
}

/// Snap2Sheet request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorksheetRequest {
    pub file: Option<FileRef>,
}

impl Validate for WorksheetRequest {
    fn validate(&self) -> Result<(), InputError> {
        match &self.file {
            Some(file) => require_text(&file.name, Field::File),
            None => Err(InputError::MissingInput(Field::File)),
        }
    }
}

/// GyaanGenie request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifyRequest {
    pub question: String,
    pub language: Language,
}

impl Default for SimplifyRequest {
    fn default() -> Self {
        Self { question: String::new(), language: Language::Marathi }
    }
}

impl Validate for SimplifyRequest {
    fn validate(&self) -> Result<(), InputError> {
        require_text(&self.question, Field::Question)
    }
}

/// DiagramGen request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualAidRequest {
    pub prompt: String,
    pub language: Language,
    #[serde(default)]
    pub complexity: Complexity,
}

impl Default for VisualAidRequest {
    fn default() -> Self {
        Self { prompt: String::new(), language: Language::Marathi, complexity: Complexity::Simple }
    }
}

impl Validate for VisualAidRequest {
    fn validate(&self) -> Result<(), InputError> {
        require_text(&self.prompt, Field::Description)
    }
}

/// Smart Evaluator request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRequest {
    pub files: Vec<FileRef>,
}

impl Validate for EvaluationRequest {
    fn validate(&self) -> Result<(), InputError> {
        if self.files.is_empty() {
            return Err(InputError::MissingInput(Field::AnswerSheets));
        }
        Ok(())
    }
}
