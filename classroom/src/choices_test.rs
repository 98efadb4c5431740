use super::*;

fn assert_keys_resolve<C: Choice + std::fmt::Debug>() {
    for &choice in C::all() {
        assert_eq!(C::from_key(choice.key()), Some(choice), "key {:?} should resolve", choice.key());
    }
}

#[test]
fn every_key_resolves_to_its_value() {
    assert_keys_resolve::<Language>();
    assert_keys_resolve::<GradeLevel>();
    assert_keys_resolve::<Subject>();
    assert_keys_resolve::<Complexity>();
}

#[test]
fn unknown_key_is_rejected() {
    assert_eq!(Language::from_key("klingon"), None);
    assert_eq!(GradeLevel::from_key("3 - 5"), None);
    assert_eq!(Subject::from_key(""), None);
}

#[test]
fn serde_uses_the_wire_keys() {
    assert_eq!(serde_json::to_value(Language::Marathi).unwrap(), "marathi");
    assert_eq!(serde_json::to_value(GradeLevel::Grades8To12).unwrap(), "8-12");
    assert_eq!(serde_json::to_value(Subject::SocialStudies).unwrap(), "social_studies");
    assert_eq!(serde_json::to_value(Subject::LanguageArts).unwrap(), "language");
    assert_eq!(serde_json::to_value(Complexity::Detailed).unwrap(), "detailed");
}

#[test]
fn serde_keys_match_choice_keys() {
    for &language in Language::all() {
        assert_eq!(serde_json::to_value(language).unwrap(), language.key());
    }
    for &grade in GradeLevel::all() {
        assert_eq!(serde_json::to_value(grade).unwrap(), grade.key());
    }
    for &subject in Subject::all() {
        assert_eq!(serde_json::to_value(subject).unwrap(), subject.key());
    }
}

#[test]
fn defaults_match_the_forms() {
    assert_eq!(Language::default(), Language::English);
    assert_eq!(GradeLevel::default(), GradeLevel::Grades3To5);
    assert_eq!(Subject::default(), Subject::Science);
    assert_eq!(Complexity::default(), Complexity::Simple);
}

#[test]
fn regional_list_starts_with_marathi_and_covers_all_languages() {
    assert_eq!(REGIONAL_LANGUAGES[0], Language::Marathi);
    for language in Language::all() {
        assert!(REGIONAL_LANGUAGES.contains(language));
    }
}

#[test]
fn labels_carry_native_script() {
    assert_eq!(Language::Hindi.label(), "हिंदी (Hindi)");
    assert_eq!(GradeLevel::Mixed.label(), "Mixed Grades");
}
