use super::*;
use classroom::{Field, InputError, Validate};

#[test]
fn empty_list_fails_evaluation_validation() {
    let uploads = UploadList::default();
    assert!(uploads.is_empty());
    assert_eq!(uploads.to_request().validate(), Err(InputError::MissingInput(Field::AnswerSheets)));
}

#[test]
fn add_appends_and_counts() {
    let mut uploads = UploadList::default();
    assert_eq!(uploads.add([FileRef::new("a.jpg", 1), FileRef::new("b.jpg", 2)]), 2);
    assert_eq!(uploads.add([FileRef::new("c.pdf", 3)]), 1);
    let names: Vec<&str> = uploads.files().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["a.jpg", "b.jpg", "c.pdf"]);
    assert_eq!(uploads.to_request().files.len(), 3);
}

#[test]
fn adding_nothing_reports_zero() {
    let mut uploads = UploadList::default();
    assert_eq!(uploads.add(Vec::new()), 0);
    assert!(uploads.is_empty());
}

#[test]
fn added_message_formats_count() {
    assert_eq!(added_message(2), "2 answer sheet(s) added for evaluation");
}
