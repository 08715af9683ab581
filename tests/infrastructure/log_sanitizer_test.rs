use cvcheck::infrastructure::observability::sanitize_for_log;

#[test]
fn given_empty_text_when_sanitizing_then_placeholder_is_returned() {
    assert_eq!(sanitize_for_log(""), "[EMPTY]");
    assert_eq!(sanitize_for_log("   \n  "), "[EMPTY]");
}

#[test]
fn given_short_text_when_sanitizing_then_text_is_unchanged() {
    assert_eq!(sanitize_for_log("Jane Doe"), "Jane Doe");
}

#[test]
fn given_multiline_text_when_sanitizing_then_newlines_are_flattened() {
    let sanitized = sanitize_for_log("line one\nline two");

    assert!(!sanitized.contains('\n'));
    assert!(sanitized.contains("line one"));
    assert!(sanitized.contains("line two"));
}

#[test]
fn given_bearer_token_when_sanitizing_then_value_is_redacted() {
    let sanitized = sanitize_for_log("Authorization: Bearer sk-abc123 and more");

    assert!(!sanitized.contains("sk-abc123"));
    assert_eq!(sanitized, "Authorization: Bearer [REDACTED] and more");
}

#[test]
fn given_repeated_secrets_when_sanitizing_then_every_value_is_redacted() {
    let sanitized = sanitize_for_log("token=first then token=second");

    assert!(!sanitized.contains("first"));
    assert!(!sanitized.contains("second"));
    assert_eq!(sanitized, "token=[REDACTED] then token=[REDACTED]");
}

#[test]
fn given_quoted_password_when_sanitizing_then_delimiter_survives() {
    let sanitized = sanitize_for_log("password=hunter2\" rest");

    assert_eq!(sanitized, "password=[REDACTED]\" rest");
}

#[test]
fn given_long_text_when_sanitizing_then_output_is_truncated_with_total() {
    let long = "x".repeat(500);

    let sanitized = sanitize_for_log(&long);

    assert!(sanitized.len() < 500);
    assert!(sanitized.contains("500 chars total"));
}
