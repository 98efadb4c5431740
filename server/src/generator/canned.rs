//! Canned generator with simulated latency.

use classroom::{
    EvaluationReport, EvaluationRequest, SimplifiedAnswer, SimplifyRequest, StoryRequest, Storyboard, Tool,
    VisualAid, VisualAidRequest, WorksheetRequest, WorksheetSet, canned,
};
use tracing::info;

use super::{GenerationError, Generator};
use crate::config::LatencyProfile;

/// Returns fixed payloads after each tool's simulated latency. Never fails.
pub struct CannedGenerator {
    latency: LatencyProfile,
}

impl CannedGenerator {
    #[must_use]
    pub fn new(latency: LatencyProfile) -> Self {
        Self { latency }
    }

    async fn simulate(&self, tool: Tool) {
        let delay = self.latency.for_tool(tool);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        info!(tool = tool.name(), delay = ?delay, "generator: canned response ready");
    }
}

#[async_trait::async_trait]
impl Generator for CannedGenerator {
    async fn storyboard(&self, req: &StoryRequest) -> Result<Storyboard, GenerationError> {
        info!(language = ?req.language, grade = ?req.grade_level, subject = ?req.subject, prompt_len = req.prompt.len(), "generator: storyboard requested");
        self.simulate(Tool::StoryCrafter).await;
        Ok(canned::storyboard(req))
    }

    async fn worksheets(&self, req: &WorksheetRequest) -> Result<WorksheetSet, GenerationError> {
        info!(file = req.file.as_ref().map(|f| f.name.as_str()), "generator: worksheets requested");
        self.simulate(Tool::Snap2Sheet).await;
        Ok(canned::worksheets(req))
    }

    async fn simplify(&self, req: &SimplifyRequest) -> Result<SimplifiedAnswer, GenerationError> {
        info!(language = ?req.language, question_len = req.question.len(), "generator: answer requested");
        self.simulate(Tool::GyaanGenie).await;
        Ok(canned::simplify(req))
    }

    async fn visual_aid(&self, req: &VisualAidRequest) -> Result<VisualAid, GenerationError> {
        info!(language = ?req.language, complexity = ?req.complexity, "generator: visual aid requested");
        self.simulate(Tool::DiagramGen).await;
        Ok(canned::visual_aid(req))
    }

    async fn evaluate(&self, req: &EvaluationRequest) -> Result<EvaluationReport, GenerationError> {
        info!(sheets = req.files.len(), "generator: evaluation requested");
        self.simulate(Tool::SmartEvaluator).await;
        Ok(canned::evaluate(req))
    }
}

#[cfg(test)]
#[path = "canned_test.rs"]
mod tests;
