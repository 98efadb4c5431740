//! The five classroom tools and their presentation copy.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// A classroom tool view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// Story and content generator.
    StoryCrafter,
    /// Differentiated worksheet generator.
    Snap2Sheet,
    /// Knowledge simplifier.
    GyaanGenie,
    /// Visual-aid generator.
    DiagramGen,
    /// Student answer-sheet evaluator.
    SmartEvaluator,
}

/// Title and description pair for a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
}

impl Tool {
    pub const ALL: [Self; 5] =
        [Self::StoryCrafter, Self::Snap2Sheet, Self::GyaanGenie, Self::DiagramGen, Self::SmartEvaluator];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::StoryCrafter => "StoryCrafter",
            Self::Snap2Sheet => "Snap2Sheet",
            Self::GyaanGenie => "GyaanGenie",
            Self::DiagramGen => "DiagramGen",
            Self::SmartEvaluator => "Smart Evaluator",
        }
    }

    /// One-line description shown under the tool heading.
    #[must_use]
    pub fn tagline(self) -> &'static str {
        match self {
            Self::StoryCrafter => "Create culturally relevant stories and content with interactive storyboard slides",
            Self::Snap2Sheet => "Upload content and get worksheets for Beginner, Intermediate, and Advanced levels",
            Self::GyaanGenie => {
                "Ask questions in regional language and get simple explanations with local analogies"
            }
            Self::DiagramGen => "Generate AI-powered images with labels in your regional language",
            Self::SmartEvaluator => {
                "Upload offline test answer sheets for AI-powered evaluation and personalized recommendations"
            }
        }
    }

    /// Longer pitch used on the home page feature cards.
    #[must_use]
    pub fn summary(self) -> &'static str {
        match self {
            Self::StoryCrafter => {
                "Generate culturally relevant stories, examples, and content in your local language with voice and text input support"
            }
            Self::Snap2Sheet => {
                "Upload textbook photos and instantly create differentiated worksheets for multiple grades with voice instructions"
            }
            Self::GyaanGenie => {
                "Voice/Text Q&A system providing simple explanations with local analogies and voice responses"
            }
            Self::DiagramGen => {
                "AI sketch and blackboard diagram support with voice-guided creation for easy classroom reproduction"
            }
            Self::SmartEvaluator => {
                "Assess student progress with YouTube suggestions and AI-generated study materials, all with voice support"
            }
        }
    }

    /// Sample use shown on the feature card.
    #[must_use]
    pub fn example(self) -> &'static str {
        match self {
            Self::StoryCrafter => "Create a story in Marathi about farmers explaining soil types",
            Self::Snap2Sheet => "Convert any textbook page into grade-appropriate activities",
            Self::GyaanGenie => "Ask 'Why is the sky blue?' via voice or text, get spoken explanation",
            Self::DiagramGen => "Generate water cycle diagrams, plant structures, maps via voice commands",
            Self::SmartEvaluator => "Generate personalized remedial content with YouTube video recommendations",
        }
    }

    /// Route path of the tool view.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::StoryCrafter => "/content-generator",
            Self::Snap2Sheet => "/worksheet-generator",
            Self::GyaanGenie => "/knowledge-simplifier",
            Self::DiagramGen => "/visual-aid-generator",
            Self::SmartEvaluator => "/student-evaluator",
        }
    }

    /// Trigger label while idle.
    #[must_use]
    pub fn action_label(self) -> &'static str {
        match self {
            Self::StoryCrafter => "Generate Story Slides",
            Self::Snap2Sheet => "Generate Worksheets for All Levels",
            Self::GyaanGenie => "Get Simple Answer",
            Self::DiagramGen => "Generate Visual Aid",
            Self::SmartEvaluator => "Start AI Evaluation",
        }
    }

    /// Trigger label while a request is pending.
    #[must_use]
    pub fn busy_label(self) -> &'static str {
        match self {
            Self::StoryCrafter => "Generating Storyboard...",
            Self::Snap2Sheet => "Generating Differentiated Worksheets...",
            Self::GyaanGenie => "Processing Question...",
            Self::DiagramGen => "Generating AI Image...",
            Self::SmartEvaluator => "Evaluating Answer Sheets...",
        }
    }

    /// Notification emitted when a request completes.
    #[must_use]
    pub fn completion(self) -> Notice {
        match self {
            Self::StoryCrafter => Notice {
                title: "Storyboard Generated!",
                description: "Your interactive story slides are ready",
            },
            Self::Snap2Sheet => Notice {
                title: "Worksheets Generated!",
                description: "Three difficulty levels created successfully",
            },
            Self::GyaanGenie => Notice {
                title: "प्रश्नाचे उत्तर तयार!",
                description: "Regional language answer ready",
            },
            Self::DiagramGen => Notice {
                title: "Visual Aid Generated!",
                description: "AI-generated image with labels ready",
            },
            Self::SmartEvaluator => Notice {
                title: "Evaluation Complete!",
                description: "Answer sheets evaluated successfully",
            },
        }
    }

    /// Simulated generation latency in milliseconds.
    #[must_use]
    pub const fn default_latency_ms(self) -> u64 {
        match self {
            Self::StoryCrafter | Self::Snap2Sheet | Self::GyaanGenie => 2000,
            Self::DiagramGen | Self::SmartEvaluator => 3000,
        }
    }
}
