use super::*;
use classroom::Field;

// =============================================================
// push / dismiss
// =============================================================

#[test]
fn ids_increase_monotonically() {
    let mut queue = ToastQueue::default();
    let a = queue.push("a", "", ToastKind::Default);
    let b = queue.push("b", "", ToastKind::Default);
    assert!(b > a);
    queue.dismiss(b);
    let c = queue.push("c", "", ToastKind::Default);
    assert!(c > b);
}

#[test]
fn overflow_drops_oldest() {
    let mut queue = ToastQueue::default();
    for title in ["one", "two", "three", "four", "five"] {
        queue.push(title, "", ToastKind::Default);
    }
    let titles: Vec<&str> = queue.visible().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["three", "four", "five"]);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut queue = ToastQueue::default();
    let a = queue.push("a", "", ToastKind::Default);
    let b = queue.push("b", "", ToastKind::Default);
    assert!(queue.dismiss(a));
    assert!(!queue.dismiss(a));
    assert_eq!(queue.visible().len(), 1);
    assert_eq!(queue.visible()[0].id, b);
}

#[test]
fn dismissing_evicted_toast_is_noop() {
    let mut queue = ToastQueue::default();
    let first = queue.push("first", "", ToastKind::Default);
    for _ in 0..MAX_VISIBLE {
        queue.push("later", "", ToastKind::Default);
    }
    assert!(!queue.dismiss(first));
    assert_eq!(queue.visible().len(), MAX_VISIBLE);
}

// =============================================================
// helpers
// =============================================================

#[test]
fn validation_toast_is_destructive_with_field_copy() {
    let mut queue = ToastQueue::default();
    queue.push_validation(InputError::MissingInput(Field::Question));
    let toast = &queue.visible()[0];
    assert_eq!(toast.kind, ToastKind::Destructive);
    assert_eq!(toast.title, "Please enter a question");
    assert_eq!(toast.description, "Ask any question in your regional language");
}

#[test]
fn completion_toast_uses_tool_notice() {
    let mut queue = ToastQueue::default();
    queue.push_completion(Tool::SmartEvaluator);
    let toast = &queue.visible()[0];
    assert_eq!(toast.kind, ToastKind::Default);
    assert_eq!(toast.title, "Evaluation Complete!");
}

#[test]
fn failure_toast_names_tool_and_message() {
    let mut queue = ToastQueue::default();
    queue.push_failure(Tool::DiagramGen, "story request failed: 503");
    let toast = &queue.visible()[0];
    assert_eq!(toast.kind, ToastKind::Destructive);
    assert_eq!(toast.title, "DiagramGen request failed");
    assert_eq!(toast.description, "story request failed: 503");
}

#[test]
fn kind_css_classes() {
    assert_eq!(ToastKind::Default.css_class(), "toast");
    assert_eq!(ToastKind::Destructive.css_class(), "toast toast--destructive");
}
