//! Generation service routes, one per classroom tool.
//!
//! Each handler validates the request before touching the generator, so an
//! empty required field costs no backend call and returns 400.

use axum::Json;
use axum::extract::State;
use classroom::{
    EvaluationReport, EvaluationRequest, SimplifiedAnswer, SimplifyRequest, StoryRequest, Storyboard, Validate,
    VisualAid, VisualAidRequest, WorksheetRequest, WorksheetSet,
};

use super::error::ApiError;
use crate::state::AppState;

/// StoryCrafter storyboard: `POST /api/story`.
pub async fn story(
    State(state): State<AppState>,
    Json(body): Json<StoryRequest>,
) -> Result<Json<Storyboard>, ApiError> {
    body.validate()?;
    Ok(Json(state.generator.storyboard(&body).await?))
}

/// Snap2Sheet tiered worksheets: `POST /api/worksheets`.
pub async fn worksheets(
    State(state): State<AppState>,
    Json(body): Json<WorksheetRequest>,
) -> Result<Json<WorksheetSet>, ApiError> {
    body.validate()?;
    Ok(Json(state.generator.worksheets(&body).await?))
}

/// GyaanGenie simplified answer: `POST /api/answers`.
pub async fn answer(
    State(state): State<AppState>,
    Json(body): Json<SimplifyRequest>,
) -> Result<Json<SimplifiedAnswer>, ApiError> {
    body.validate()?;
    Ok(Json(state.generator.simplify(&body).await?))
}

/// DiagramGen visual aid: `POST /api/visual-aids`.
pub async fn visual_aid(
    State(state): State<AppState>,
    Json(body): Json<VisualAidRequest>,
) -> Result<Json<VisualAid>, ApiError> {
    body.validate()?;
    Ok(Json(state.generator.visual_aid(&body).await?))
}

/// Smart Evaluator report: `POST /api/evaluations`.
pub async fn evaluation(
    State(state): State<AppState>,
    Json(body): Json<EvaluationRequest>,
) -> Result<Json<EvaluationReport>, ApiError> {
    body.validate()?;
    Ok(Json(state.generator.evaluate(&body).await?))
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
