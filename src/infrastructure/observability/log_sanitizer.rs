const MAX_VISIBLE_LENGTH: usize = 120;
const REDACTED: &str = "[REDACTED]";

/// Credential-shaped prefixes that may appear in extracted document text or
/// comparison replies. The value following a prefix is masked up to the next
/// delimiter.
const SENSITIVE_PREFIXES: [&str; 5] = ["Bearer ", "api_key=", "password=", "secret=", "token="];

/// Sanitizes user-supplied text (form fields, extracted document text,
/// comparison replies) for safe single-line logging: collapses newlines,
/// truncates to a bounded prefix, and redacts credential-shaped values.
pub fn sanitize_for_log(text: &str) -> String {
    let flattened: String = text
        .trim()
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    if flattened.is_empty() {
        return String::from("[EMPTY]");
    }

    let bounded = if flattened.chars().count() > MAX_VISIBLE_LENGTH {
        let prefix: String = flattened.chars().take(MAX_VISIBLE_LENGTH).collect();
        format!("{}... ({} chars total)", prefix, flattened.chars().count())
    } else {
        flattened
    };

    redact_secrets(&bounded)
}

fn redact_secrets(text: &str) -> String {
    let mut result = text.to_string();

    for prefix in SENSITIVE_PREFIXES {
        let mut from = 0;
        while let Some(found) = result[from..].find(prefix) {
            let start = from + found + prefix.len();
            let end = result[start..]
                .find(|c: char| c.is_whitespace() || matches!(c, '&' | '"' | '\''))
                .map(|i| start + i)
                .unwrap_or(result.len());
            result.replace_range(start..end, REDACTED);
            from = start + REDACTED.len();
        }
    }

    result
}
