use std::collections::HashMap;

use cvcheck::domain::{CvSubmission, SubmissionFields};

#[test]
fn given_empty_mapping_when_coercing_then_all_five_keys_are_empty_strings() {
    let fields = HashMap::new();

    let coerced = SubmissionFields::coerce(&fields);

    assert_eq!(coerced, SubmissionFields::default());
    assert_eq!(coerced.full_name, "");
    assert_eq!(coerced.email, "");
    assert_eq!(coerced.phone, "");
    assert_eq!(coerced.skills, "");
    assert_eq!(coerced.experience, "");
}

#[test]
fn given_complete_mapping_when_coercing_then_values_are_preserved() {
    let mut fields = HashMap::new();
    fields.insert("fullName".to_string(), vec!["Jane Doe".to_string()]);
    fields.insert("email".to_string(), vec!["jane@x.com".to_string()]);
    fields.insert("phone".to_string(), vec!["555".to_string()]);
    fields.insert("skills".to_string(), vec!["Go".to_string()]);
    fields.insert("experience".to_string(), vec!["5y".to_string()]);

    let coerced = SubmissionFields::coerce(&fields);

    assert_eq!(coerced.full_name, "Jane Doe");
    assert_eq!(coerced.email, "jane@x.com");
    assert_eq!(coerced.phone, "555");
    assert_eq!(coerced.skills, "Go");
    assert_eq!(coerced.experience, "5y");
}

#[test]
fn given_repeated_field_when_coercing_then_first_value_wins() {
    let mut fields = HashMap::new();
    fields.insert(
        "email".to_string(),
        vec!["first@x.com".to_string(), "second@x.com".to_string()],
    );

    let coerced = SubmissionFields::coerce(&fields);

    assert_eq!(coerced.email, "first@x.com");
}

#[test]
fn given_unrecognized_fields_when_coercing_then_they_are_dropped() {
    let mut fields = HashMap::new();
    fields.insert("favoriteColor".to_string(), vec!["teal".to_string()]);
    fields.insert("fullName".to_string(), vec!["Jane".to_string()]);

    let coerced = SubmissionFields::coerce(&fields);

    assert_eq!(coerced.full_name, "Jane");
    assert_eq!(coerced.email, "");
}

#[test]
fn given_fields_and_text_when_assembling_then_record_holds_both() {
    let mut raw = HashMap::new();
    raw.insert("fullName".to_string(), vec!["Jane".to_string()]);
    let fields = SubmissionFields::coerce(&raw);

    let submission = CvSubmission::assemble(fields.clone(), "extracted".to_string());

    assert_eq!(submission.fields, fields);
    assert_eq!(submission.pdf_text, "extracted");
}

#[test]
fn given_fields_when_serializing_then_json_uses_camel_case_keys() {
    let fields = SubmissionFields {
        full_name: "Jane".to_string(),
        ..SubmissionFields::default()
    };

    let json = serde_json::to_value(&fields).unwrap();

    assert_eq!(json["fullName"], "Jane");
    assert_eq!(json["email"], "");
}
