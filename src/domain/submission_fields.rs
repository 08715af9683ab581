use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The five recognized form fields of a CV submission.
///
/// Coercion guarantees all five keys are always present: a missing field
/// normalizes to an empty string, never to null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionFields {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub skills: String,
    pub experience: String,
}

impl SubmissionFields {
    /// Coerces a raw multipart field mapping into the five-key form.
    ///
    /// Total over any input: multiple values under one name take the first,
    /// absent names become empty strings, unrecognized names are dropped.
    pub fn coerce(fields: &HashMap<String, Vec<String>>) -> Self {
        let first = |name: &str| -> String {
            fields
                .get(name)
                .and_then(|values| values.first())
                .cloned()
                .unwrap_or_default()
        };

        Self {
            full_name: first("fullName"),
            email: first("email"),
            phone: first("phone"),
            skills: first("skills"),
            experience: first("experience"),
        }
    }
}
