use super::*;
use crate::generator::{GenerationError, Generator};
use crate::state::test_helpers;
use axum::http::StatusCode;
use classroom::{Field, FileRef, Language};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// =========================================================================
// CountingGenerator
// =========================================================================

/// Counts calls and always reports the backend as unavailable.
#[derive(Default)]
struct CountingGenerator {
    calls: AtomicUsize,
}

impl CountingGenerator {
    fn hit(&self) -> GenerationError {
        self.calls.fetch_add(1, Ordering::SeqCst);
        GenerationError::Unavailable("offline".into())
    }
}

#[async_trait::async_trait]
impl Generator for CountingGenerator {
    async fn storyboard(&self, _req: &StoryRequest) -> Result<Storyboard, GenerationError> {
        Err(self.hit())
    }

    async fn worksheets(&self, _req: &WorksheetRequest) -> Result<WorksheetSet, GenerationError> {
        Err(self.hit())
    }

    async fn simplify(&self, _req: &SimplifyRequest) -> Result<SimplifiedAnswer, GenerationError> {
        Err(self.hit())
    }

    async fn visual_aid(&self, _req: &VisualAidRequest) -> Result<VisualAid, GenerationError> {
        Err(self.hit())
    }

    async fn evaluate(&self, _req: &EvaluationRequest) -> Result<EvaluationReport, GenerationError> {
        Err(self.hit())
    }
}

fn counting_state() -> (AppState, Arc<CountingGenerator>) {
    let generator = Arc::new(CountingGenerator::default());
    (test_helpers::test_app_state_with(generator.clone()), generator)
}

fn missing_field(err: ApiError) -> Field {
    match err {
        ApiError::Input(input) => input.field(),
        ApiError::Generation(other) => panic!("expected input error, got {other}"),
    }
}

// =========================================================================
// Validation short-circuits the generator
// =========================================================================

#[tokio::test]
async fn empty_prompt_never_reaches_generator() {
    let (state, generator) = counting_state();
    let err = story(State(state), Json(StoryRequest { prompt: "   ".into(), ..StoryRequest::default() }))
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(missing_field(err), Field::Prompt);
    assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn every_tool_rejects_missing_input_without_generator_call() {
    let (state, generator) = counting_state();

    let err = worksheets(State(state.clone()), Json(WorksheetRequest::default())).await.unwrap_err();
    assert_eq!(missing_field(err), Field::File);

    let err = answer(State(state.clone()), Json(SimplifyRequest::default())).await.unwrap_err();
    assert_eq!(missing_field(err), Field::Question);

    let err = visual_aid(State(state.clone()), Json(VisualAidRequest::default())).await.unwrap_err();
    assert_eq!(missing_field(err), Field::Description);

    let err = evaluation(State(state), Json(EvaluationRequest::default())).await.unwrap_err();
    assert_eq!(missing_field(err), Field::AnswerSheets);

    assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn valid_request_reaches_generator_and_surfaces_failure() {
    let (state, generator) = counting_state();
    let req = SimplifyRequest { question: "Why?".into(), language: Language::English };
    let err = answer(State(state), Json(req)).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
}

// =========================================================================
// Canned backend
// =========================================================================

#[tokio::test]
async fn sky_question_gets_simple_english_answer() {
    let state = test_helpers::test_app_state();
    let req = SimplifyRequest { question: "Why is the sky blue?".into(), language: Language::English };
    let Json(answer) = answer(State(state), Json(req)).await.unwrap();
    assert!(answer.text.starts_with("Question: \"Why is the sky blue?\""));
    assert!(answer.text.contains("Simple Answer"));
}

#[tokio::test]
async fn story_returns_storyboard() {
    let state = test_helpers::test_app_state();
    let req = StoryRequest { prompt: "farmers and soil".into(), language: Language::Hindi, ..StoryRequest::default() };
    let Json(board) = story(State(state), Json(req)).await.unwrap();
    assert_eq!(board.language, Language::Hindi);
    assert_eq!(board.slides.len(), 9);
}

#[tokio::test]
async fn evaluation_scores_every_sheet() {
    let state = test_helpers::test_app_state();
    let req = EvaluationRequest { files: vec![FileRef::new("a.jpg", 10), FileRef::new("b.pdf", 20)] };
    let Json(report) = evaluation(State(state), Json(req)).await.unwrap();
    assert_eq!(report.results.len(), 2);
    assert_eq!(report.results[1].file_name, "b.pdf");
}

#[tokio::test]
async fn visual_aid_and_worksheets_succeed() {
    let state = test_helpers::test_app_state();
    let Json(aid) = visual_aid(
        State(state.clone()),
        Json(VisualAidRequest { prompt: "water cycle".into(), ..VisualAidRequest::default() }),
    )
    .await
    .unwrap();
    assert_eq!(aid.labels.len(), 3);

    let Json(set) =
        worksheets(State(state), Json(WorksheetRequest { file: Some(FileRef::new("solar.png", 1)) })).await.unwrap();
    assert_eq!(set.source, "solar.png");
}
