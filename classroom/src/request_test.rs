use super::*;

// =============================================================
// Text validation
// =============================================================

#[test]
fn story_rejects_empty_and_whitespace_prompt() {
    for prompt in ["", "   ", "\n\t "] {
        let req = StoryRequest { prompt: prompt.to_owned(), ..StoryRequest::default() };
        assert_eq!(req.validate(), Err(InputError::MissingInput(Field::Prompt)), "{prompt:?}");
    }
}

#[test]
fn story_accepts_padded_prompt() {
    let req = StoryRequest { prompt: "  soil types  ".to_owned(), ..StoryRequest::default() };
    assert_eq!(req.validate(), Ok(()));
}

#[test]
fn simplify_requires_question() {
    let req = SimplifyRequest::default();
    assert_eq!(req.validate(), Err(InputError::MissingInput(Field::Question)));
    let req = SimplifyRequest { question: "Why is the sky blue?".to_owned(), ..req };
    assert_eq!(req.validate(), Ok(()));
}

#[test]
fn visual_aid_requires_description() {
    let req = VisualAidRequest { prompt: " ".to_owned(), ..VisualAidRequest::default() };
    assert_eq!(req.validate(), Err(InputError::MissingInput(Field::Description)));
}

// =============================================================
// File validation
// =============================================================

#[test]
fn worksheet_requires_file() {
    assert_eq!(WorksheetRequest::default().validate(), Err(InputError::MissingInput(Field::File)));
    let req = WorksheetRequest { file: Some(FileRef::new("chapter-4.pdf", 2048)) };
    assert_eq!(req.validate(), Ok(()));
}

#[test]
fn worksheet_rejects_nameless_file() {
    let req = WorksheetRequest { file: Some(FileRef::new("  ", 10)) };
    assert_eq!(req.validate(), Err(InputError::MissingInput(Field::File)));
}

#[test]
fn evaluation_requires_at_least_one_sheet() {
    assert_eq!(EvaluationRequest::default().validate(), Err(InputError::MissingInput(Field::AnswerSheets)));
    let req = EvaluationRequest { files: vec![FileRef::new("a.jpg", 1)] };
    assert_eq!(req.validate(), Ok(()));
}

#[test]
fn file_size_label_uses_two_decimals() {
    assert_eq!(FileRef::new("a.png", 0).size_label(), "0.00 MB");
    assert_eq!(FileRef::new("a.png", 1_572_864).size_label(), "1.50 MB");
    assert_eq!(FileRef::new("a.png", 5_000).size_label(), "0.00 MB");
}

// =============================================================
// Defaults and wire shape
// =============================================================

#[test]
fn regional_views_default_to_marathi() {
    assert_eq!(SimplifyRequest::default().language, Language::Marathi);
    assert_eq!(VisualAidRequest::default().language, Language::Marathi);
    assert_eq!(StoryRequest::default().language, Language::English);
}

#[test]
fn story_request_serializes_camel_case() {
    let req = StoryRequest {
        prompt: "farmers".to_owned(),
        language: Language::Hindi,
        grade_level: GradeLevel::Grades5To8,
        subject: Subject::Environmental,
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "prompt": "farmers",
            "language": "hindi",
            "gradeLevel": "5-8",
            "subject": "environmental"
        })
    );
}

#[test]
fn story_request_fills_optional_selections() {
    let req: StoryRequest = serde_json::from_str(r#"{"prompt":"p","language":"tamil"}"#).unwrap();
    assert_eq!(req.grade_level, GradeLevel::Grades3To5);
    assert_eq!(req.subject, Subject::Science);
}

#[test]
fn file_ref_uses_size_bytes_key() {
    let json = serde_json::to_value(FileRef::new("scan.jpg", 42)).unwrap();
    assert_eq!(json, serde_json::json!({ "name": "scan.jpg", "sizeBytes": 42 }));
}
