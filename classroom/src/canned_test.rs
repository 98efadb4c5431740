use super::*;
use crate::choices::{Choice, GradeLevel, Subject};
use crate::request::FileRef;

fn simplify_in(language: Language, question: &str) -> SimplifiedAnswer {
    simplify(&SimplifyRequest { question: question.to_owned(), language })
}

fn sheets(names: &[&str]) -> EvaluationRequest {
    EvaluationRequest { files: names.iter().map(|name| FileRef::new(*name, 1024)).collect() }
}

// =========================================================================
// storyboard
// =========================================================================

#[test]
fn storyboard_has_nine_slides_in_order() {
    let board = storyboard(&StoryRequest { prompt: "soil".into(), ..StoryRequest::default() });
    assert_eq!(board.slides.len(), 9);
    assert_eq!(board.slides[0].title, "Slide 1: Introduction");
    assert_eq!(board.slides[8].title, "Slide 9: Conclusion");
}

#[test]
fn storyboard_echoes_language() {
    let req = StoryRequest {
        prompt: "soil".into(),
        language: Language::Bengali,
        grade_level: GradeLevel::Mixed,
        subject: Subject::Environmental,
    };
    assert_eq!(storyboard(&req).language, Language::Bengali);
}

// =========================================================================
// worksheets
// =========================================================================

#[test]
fn worksheets_cover_all_tiers_for_source() {
    let set = worksheets(&WorksheetRequest { file: Some(FileRef::new("solar.pdf", 10)) });
    assert_eq!(set.source, "solar.pdf");
    let tiers: Vec<Tier> = set.sheets.iter().map(|sheet| sheet.tier).collect();
    assert_eq!(tiers, Tier::ALL.to_vec());
    assert!(set.sheets[0].content.starts_with("BEGINNER LEVEL WORKSHEET"));
    assert!(set.sheets[2].content.contains("HIGHER ORDER THINKING SKILLS"));
}

// =========================================================================
// simplify
// =========================================================================

#[test]
fn english_answer_leads_with_question() {
    let answer = simplify_in(Language::English, "Why is the sky blue?");
    assert!(answer.text.starts_with("Question: \"Why is the sky blue?\""));
    assert!(answer.text.contains("Simple Answer"));
    assert_eq!(answer.language, Language::English);
}

#[test]
fn marathi_answer_is_marathi_text() {
    let answer = simplify_in(Language::Marathi, "आकाश निळे का दिसते?");
    assert!(answer.text.starts_with("प्रश्न: \"आकाश निळे का दिसते?\""));
    assert!(answer.text.contains("सोपे उत्तर"));
}

#[test]
fn hindi_answer_is_hindi_text() {
    let answer = simplify_in(Language::Hindi, "q");
    assert!(answer.text.contains("आसान जवाब"));
}

#[test]
fn tamil_and_bengali_fall_back_to_english() {
    let english = simplify_in(Language::English, "q").text;
    assert_eq!(simplify_in(Language::Tamil, "q").text, english);
    assert_eq!(simplify_in(Language::Bengali, "q").text, english);
}

#[test]
fn answer_depends_only_on_form_values() {
    for &language in Language::all() {
        assert_eq!(simplify_in(language, "Why?"), simplify_in(language, "Why?"));
    }
}

#[test]
fn answer_trims_question() {
    let answer = simplify_in(Language::English, "  Why?  ");
    assert!(answer.text.starts_with("Question: \"Why?\""));
}

// =========================================================================
// visual aid
// =========================================================================

#[test]
fn visual_aid_labels_follow_language() {
    let aid = visual_aid(&VisualAidRequest { prompt: "water cycle".into(), ..VisualAidRequest::default() });
    let texts: Vec<&str> = aid.labels.iter().map(|label| label.text.as_str()).collect();
    assert_eq!(texts, ["ढग (Cloud)", "पाऊस (Rain)", "नदी (River)"]);
    assert_eq!(aid.image_url, VISUAL_AID_IMAGE_URL);
}

#[test]
fn visual_aid_instructions_quote_prompt() {
    let aid = visual_aid(&VisualAidRequest {
        prompt: "water cycle".into(),
        language: Language::English,
        complexity: Complexity::Simple,
    });
    assert!(aid.instructions.starts_with("🎨 VISUAL AID GENERATED: \"water cycle\""));
    assert!(!aid.instructions.contains("BLACKBOARD SPACE NEEDED"));
}

#[test]
fn detailed_visual_aid_adds_board_layout() {
    let aid = visual_aid(&VisualAidRequest {
        prompt: "water cycle".into(),
        language: Language::English,
        complexity: Complexity::Detailed,
    });
    assert!(aid.instructions.contains("BLACKBOARD SPACE NEEDED"));
    assert!(aid.instructions.contains("STUDENT ACTIVITY"));
}

// =========================================================================
// evaluate
// =========================================================================

#[test]
fn evaluation_has_one_result_per_sheet() {
    let report = evaluate(&sheets(&["a.jpg", "b.jpg", "c.pdf"]));
    assert_eq!(report.results.len(), 3);
    assert_eq!(report.results[0].student_name, "Student 1");
    assert_eq!(report.results[2].student_name, "Student 3");
    assert_eq!(report.results[1].file_name, "b.jpg");
}

#[test]
fn evaluation_scores_stay_in_range() {
    let names: Vec<String> = (0..50).map(|i| format!("sheet-{i}.jpg")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    for result in evaluate(&sheets(&refs)).results {
        assert_eq!(result.total_marks, TOTAL_MARKS);
        assert!((60..100).contains(&result.scored_marks), "{}", result.scored_marks);
        assert_eq!(result.percentage, result.scored_marks * 100 / result.total_marks);
        assert!((1..=3).contains(&result.weak_topics.len()));
        assert_eq!(result.weak_topics[0], "Algebra");
    }
}

#[test]
fn evaluation_is_reproducible() {
    let req = sheets(&["x.jpg", "y.jpg"]);
    assert_eq!(evaluate(&req), evaluate(&req));
}

#[test]
fn recommendations_only_cover_weak_topics() {
    let names: Vec<String> = (0..20).map(|i| format!("p{i}.png")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    for result in evaluate(&sheets(&refs)).results {
        for rec in &result.recommendations {
            assert!(result.weak_topics.contains(&rec.topic));
            assert_eq!(rec.resources.len(), 2);
        }
        assert_eq!(result.resources_for("Trigonometry"), &[] as &[String]);
    }
}

#[test]
fn empty_evaluation_request_yields_empty_report() {
    assert!(evaluate(&EvaluationRequest::default()).results.is_empty());
}
