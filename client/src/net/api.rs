//! Generation API calls, one per classroom tool.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since requests are only
//! issued from browser event handlers.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as display strings. When the server answered with a
//! JSON error body its message is used; otherwise the status code is shown.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use classroom::{
    EvaluationReport, EvaluationRequest, SimplifiedAnswer, SimplifyRequest, StoryRequest, Storyboard, Tool,
    VisualAid, VisualAidRequest, WorksheetRequest, WorksheetSet,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Endpoint that serves a tool.
#[must_use]
pub fn endpoint(tool: Tool) -> &'static str {
    match tool {
        Tool::StoryCrafter => "/api/story",
        Tool::Snap2Sheet => "/api/worksheets",
        Tool::GyaanGenie => "/api/answers",
        Tool::DiagramGen => "/api/visual-aids",
        Tool::SmartEvaluator => "/api/evaluations",
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(tool: Tool, status: u16, server_message: Option<String>) -> String {
    server_message
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("{} request failed: {status}", tool.name()))
}

#[cfg(feature = "hydrate")]
#[derive(Debug, serde::Deserialize)]
struct ErrorResponse {
    message: String,
}

async fn post<Req, Res>(tool: Tool, body: &Req) -> Result<Res, String>
where
    Req: Serialize,
    Res: DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(endpoint(tool))
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let server_message = resp.json::<ErrorResponse>().await.ok().map(|body| body.message);
            return Err(request_failed_message(tool, resp.status(), server_message));
        }
        resp.json::<Res>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (tool, body);
        Err("not available on server".to_owned())
    }
}

/// Request a storyboard via `POST /api/story`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn generate_storyboard(req: &StoryRequest) -> Result<Storyboard, String> {
    post(Tool::StoryCrafter, req).await
}

/// Request tiered worksheets via `POST /api/worksheets`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn generate_worksheets(req: &WorksheetRequest) -> Result<WorksheetSet, String> {
    post(Tool::Snap2Sheet, req).await
}

/// Request a simplified answer via `POST /api/answers`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn simplify(req: &SimplifyRequest) -> Result<SimplifiedAnswer, String> {
    post(Tool::GyaanGenie, req).await
}

/// Request a labelled visual aid via `POST /api/visual-aids`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn generate_visual_aid(req: &VisualAidRequest) -> Result<VisualAid, String> {
    post(Tool::DiagramGen, req).await
}

/// Request an evaluation report via `POST /api/evaluations`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn evaluate(req: &EvaluationRequest) -> Result<EvaluationReport, String> {
    post(Tool::SmartEvaluator, req).await
}
