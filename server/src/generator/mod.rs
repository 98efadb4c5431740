//! Generation backend seam.
//!
//! DESIGN
//! ======
//! Route handlers only see the [`Generator`] trait. The shipped backend,
//! [`canned::CannedGenerator`], waits a fixed simulated latency and returns
//! deterministic payloads from `classroom::canned`. A model-backed
//! implementation can replace it without changing the HTTP contract.

pub mod canned;

use classroom::{
    EvaluationReport, EvaluationRequest, SimplifiedAnswer, SimplifyRequest, StoryRequest, Storyboard, VisualAid,
    VisualAidRequest, WorksheetRequest, WorksheetSet,
};

pub use canned::CannedGenerator;

/// Errors a generation backend may report. Callers validate input before
/// reaching the backend, so these describe backend-side failures only.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The backend could not be reached or is overloaded.
    #[error("generation backend unavailable: {0}")]
    Unavailable(String),

    /// The backend refused or could not process the input.
    #[error("generation rejected: {0}")]
    Rejected(String),
}

impl GenerationError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable(_) => "E_GENERATION_UNAVAILABLE",
            Self::Rejected(_) => "E_GENERATION_REJECTED",
        }
    }
}

/// One method per classroom tool. Requests arrive already validated.
#[async_trait::async_trait]
pub trait Generator: Send + Sync {
    async fn storyboard(&self, req: &StoryRequest) -> Result<Storyboard, GenerationError>;

    async fn worksheets(&self, req: &WorksheetRequest) -> Result<WorksheetSet, GenerationError>;

    async fn simplify(&self, req: &SimplifyRequest) -> Result<SimplifiedAnswer, GenerationError>;

    async fn visual_aid(&self, req: &VisualAidRequest) -> Result<VisualAid, GenerationError>;

    async fn evaluate(&self, req: &EvaluationRequest) -> Result<EvaluationReport, GenerationError>;
}
