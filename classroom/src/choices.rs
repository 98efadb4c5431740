//! Form enumerations shared by tool requests.
//!
//! Every enumeration carries a stable wire key (its serde representation and
//! the `<option value>` in the UI) and a display label. The [`Choice`] trait
//! lets a single select component render any of them.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "choices_test.rs"]
mod choices_test;

/// A closed set of selectable values with wire keys and display labels.
pub trait Choice: Copy + PartialEq + 'static {
    /// All values, in display order.
    fn all() -> &'static [Self];

    /// Stable wire key.
    fn key(self) -> &'static str;

    /// Human-readable label.
    fn label(self) -> &'static str;

    /// Resolve a wire key back to a value.
    fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|choice| choice.key() == key)
    }
}

// =============================================================================
// LANGUAGE
// =============================================================================

/// Output language for generated content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Marathi,
    Tamil,
    Bengali,
}

impl Choice for Language {
    fn all() -> &'static [Self] {
        &[Self::English, Self::Hindi, Self::Marathi, Self::Tamil, Self::Bengali]
    }

    fn key(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Hindi => "hindi",
            Self::Marathi => "marathi",
            Self::Tamil => "tamil",
            Self::Bengali => "bengali",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "हिंदी (Hindi)",
            Self::Marathi => "मराठी (Marathi)",
            Self::Tamil => "தமிழ் (Tamil)",
            Self::Bengali => "বাংলা (Bengali)",
        }
    }
}

/// Regional-language views list Marathi first and default to it.
pub static REGIONAL_LANGUAGES: [Language; 5] =
    [Language::Marathi, Language::Hindi, Language::English, Language::Tamil, Language::Bengali];

// =============================================================================
// GRADE LEVEL
// =============================================================================

/// Grade band a teacher works with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradeLevel {
    #[serde(rename = "1-3")]
    Grades1To3,
    #[default]
    #[serde(rename = "3-5")]
    Grades3To5,
    #[serde(rename = "5-8")]
    Grades5To8,
    #[serde(rename = "8-12")]
    Grades8To12,
    #[serde(rename = "mixed")]
    Mixed,
}

impl Choice for GradeLevel {
    fn all() -> &'static [Self] {
        &[Self::Grades1To3, Self::Grades3To5, Self::Grades5To8, Self::Grades8To12, Self::Mixed]
    }

    fn key(self) -> &'static str {
        match self {
            Self::Grades1To3 => "1-3",
            Self::Grades3To5 => "3-5",
            Self::Grades5To8 => "5-8",
            Self::Grades8To12 => "8-12",
            Self::Mixed => "mixed",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Grades1To3 => "Grades 1-3",
            Self::Grades3To5 => "Grades 3-5",
            Self::Grades5To8 => "Grades 5-8",
            Self::Grades8To12 => "Grades 8-12",
            Self::Mixed => "Mixed Grades",
        }
    }
}

// =============================================================================
// SUBJECT
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    #[default]
    Science,
    Mathematics,
    SocialStudies,
    #[serde(rename = "language")]
    LanguageArts,
    Environmental,
}

impl Choice for Subject {
    fn all() -> &'static [Self] {
        &[Self::Science, Self::Mathematics, Self::SocialStudies, Self::LanguageArts, Self::Environmental]
    }

    fn key(self) -> &'static str {
        match self {
            Self::Science => "science",
            Self::Mathematics => "mathematics",
            Self::SocialStudies => "social_studies",
            Self::LanguageArts => "language",
            Self::Environmental => "environmental",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Science => "Science",
            Self::Mathematics => "Mathematics",
            Self::SocialStudies => "Social Studies",
            Self::LanguageArts => "Language Arts",
            Self::Environmental => "Environmental Studies",
        }
    }
}

// =============================================================================
// COMPLEXITY
// =============================================================================

/// How much detail a visual aid should carry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    #[default]
    Simple,
    Detailed,
}

impl Choice for Complexity {
    fn all() -> &'static [Self] {
        &[Self::Simple, Self::Detailed]
    }

    fn key(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Detailed => "detailed",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Simple => "Simple (quick sketch)",
            Self::Detailed => "Detailed (full blackboard)",
        }
    }
}
