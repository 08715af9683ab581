use cvcheck::presentation::config::Environment;

#[test]
fn given_known_labels_when_parsing_then_variants_are_returned() {
    assert_eq!(Environment::try_from("local".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from("test".to_string()), Ok(Environment::Test));
    assert_eq!(Environment::try_from("prod".to_string()), Ok(Environment::Prod));
    assert_eq!(
        Environment::try_from("production".to_string()),
        Ok(Environment::Prod)
    );
}

#[test]
fn given_mixed_case_label_when_parsing_then_variant_is_returned() {
    assert_eq!(Environment::try_from("PROD".to_string()), Ok(Environment::Prod));
    assert_eq!(Environment::try_from("Local".to_string()), Ok(Environment::Local));
}

#[test]
fn given_unknown_label_when_parsing_then_error_names_the_label() {
    let error = Environment::try_from("staging".to_string()).unwrap_err();

    assert!(error.contains("staging"));
}

#[test]
fn given_environment_when_displaying_then_label_is_lowercase() {
    assert_eq!(Environment::Local.to_string(), "local");
    assert_eq!(Environment::Prod.to_string(), "prod");
}

#[test]
fn given_environments_when_checking_prod_then_only_prod_matches() {
    assert!(Environment::Prod.is_prod());
    assert!(!Environment::Local.is_prod());
    assert!(!Environment::Test.is_prod());
}

#[test]
fn given_no_label_when_defaulting_then_local_is_used() {
    assert_eq!(Environment::default(), Environment::Local);
}
