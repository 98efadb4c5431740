//! Shared classroom-tool vocabulary for the Gurumitra server and UI.
//!
//! This crate owns the request/result contract spoken between the `client`
//! tool views and the `server` generation API, together with the canned
//! payloads the demo backend returns. It performs no I/O so both sides can
//! depend on it (including the WASM build).

pub mod canned;
pub mod catalog;
pub mod choices;
pub mod error;
pub mod export;
pub mod request;
pub mod result;

pub use catalog::Tool;
pub use choices::{Choice, Complexity, GradeLevel, Language, REGIONAL_LANGUAGES, Subject};
pub use error::{Field, InputError};
pub use request::{
    EvaluationRequest, FileRef, SimplifyRequest, StoryRequest, Validate, VisualAidRequest, WorksheetRequest,
};
pub use result::{
    DiagramLabel, EvaluationReport, LabelAnchor, Recommendation, SimplifiedAnswer, Slide, Storyboard, StudentResult,
    Tier, TierSheet, VisualAid, WorksheetSet,
};
