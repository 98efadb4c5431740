use super::*;

const FIELDS: [Field; 5] = [Field::Prompt, Field::Question, Field::Description, Field::File, Field::AnswerSheets];

#[test]
fn missing_input_reports_its_field() {
    for field in FIELDS {
        assert_eq!(InputError::MissingInput(field).field(), field);
    }
}

#[test]
fn display_names_the_field() {
    let err = InputError::MissingInput(Field::AnswerSheets);
    assert_eq!(err.to_string(), "missing required input: answer_sheets");
}

#[test]
fn every_field_has_notification_copy() {
    for field in FIELDS {
        let err = InputError::MissingInput(field);
        assert!(!err.title().is_empty(), "{field}");
        assert!(!err.hint().is_empty(), "{field}");
    }
}

#[test]
fn file_copy_asks_for_upload() {
    let err = InputError::MissingInput(Field::File);
    assert_eq!(err.title(), "Please upload a file");
    assert_eq!(err.hint(), "Select an image or PDF to continue");
}

#[test]
fn field_serializes_snake_case() {
    assert_eq!(serde_json::to_value(Field::AnswerSheets).unwrap(), "answer_sheets");
    assert_eq!(serde_json::to_value(Field::Question).unwrap(), Field::Question.as_str());
}
