//! Tool result payloads returned by the generation service.

use serde::{Deserialize, Serialize};

use crate::choices::Language;

// =============================================================================
// STORYCRAFTER
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Storyboard {
    pub language: Language,
    pub slides: Vec<Slide>,
}

// =============================================================================
// SNAP2SHEET
// =============================================================================

/// Difficulty tier of a differentiated worksheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Beginner,
    Intermediate,
    Advanced,
}

impl Tier {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// Kinds of task the tier contains.
    #[must_use]
    pub fn focus(self) -> &'static str {
        match self {
            Self::Beginner => "Definitions, Match-the-following",
            Self::Intermediate => "MCQs, Fill-in-the-blanks",
            Self::Advanced => "HOTS, Short Answers",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierSheet {
    pub tier: Tier,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorksheetSet {
    /// Name of the uploaded source file.
    pub source: String,
    pub sheets: Vec<TierSheet>,
}

// =============================================================================
// GYAANGENIE
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplifiedAnswer {
    pub language: Language,
    pub text: String,
}

// =============================================================================
// DIAGRAMGEN
// =============================================================================

/// Where a label is pinned on the illustration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelAnchor {
    TopLeft,
    MiddleRight,
    BottomCenter,
}

impl LabelAnchor {
    /// CSS modifier class for the anchor.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::TopLeft => "visual-aid__label--top-left",
            Self::MiddleRight => "visual-aid__label--middle-right",
            Self::BottomCenter => "visual-aid__label--bottom-center",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramLabel {
    pub text: String,
    pub anchor: LabelAnchor,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualAid {
    pub image_url: String,
    pub labels: Vec<DiagramLabel>,
    /// Blackboard drawing instructions.
    pub instructions: String,
}

// =============================================================================
// SMART EVALUATOR
// =============================================================================

/// Reference material for one weak topic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub topic: String,
    pub resources: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentResult {
    pub student_name: String,
    pub file_name: String,
    pub total_marks: u32,
    pub scored_marks: u32,
    pub percentage: u32,
    pub weak_topics: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}

impl StudentResult {
    /// Reference links recommended for `topic`, empty if none.
    #[must_use]
    pub fn resources_for(&self, topic: &str) -> &[String] {
        self.recommendations
            .iter()
            .find(|rec| rec.topic == topic)
            .map_or(&[], |rec| rec.resources.as_slice())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub results: Vec<StudentResult>,
}
