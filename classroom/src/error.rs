//! Input validation errors.
//!
//! There is exactly one error kind: a required field was left empty. Each
//! field knows the notification copy the UI shows for it.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Required form inputs across the tool views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// StoryCrafter content prompt.
    Prompt,
    /// GyaanGenie question.
    Question,
    /// DiagramGen visual-aid description.
    Description,
    /// Snap2Sheet source image or PDF.
    File,
    /// Smart Evaluator answer sheets.
    AnswerSheets,
}

impl Field {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prompt => "prompt",
            Self::Question => "question",
            Self::Description => "description",
            Self::File => "file",
            Self::AnswerSheets => "answer_sheets",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("missing required input: {0}")]
    MissingInput(Field),
}

impl InputError {
    /// Stable machine-readable code used in API error bodies.
    pub const CODE: &'static str = "E_MISSING_INPUT";

    #[must_use]
    pub fn field(self) -> Field {
        match self {
            Self::MissingInput(field) => field,
        }
    }

    /// Notification title shown to the teacher.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self.field() {
            Field::Prompt | Field::Description => "Please enter a prompt",
            Field::Question => "Please enter a question",
            Field::File => "Please upload a file",
            Field::AnswerSheets => "No files uploaded",
        }
    }

    /// Notification hint shown under the title.
    #[must_use]
    pub fn hint(self) -> &'static str {
        match self.field() {
            Field::Prompt => "Describe the story or content you'd like to create",
            Field::Description => "Describe what visual aid you need in regional language",
            Field::Question => "Ask any question in your regional language",
            Field::File => "Select an image or PDF to continue",
            Field::AnswerSheets => "Please upload answer sheets first",
        }
    }
}
