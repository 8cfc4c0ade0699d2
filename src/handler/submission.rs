//! Submission parsing and validation
//!
//! Extracts the name/phone pair from a JSON request body. Validation is
//! ordered and short-circuit: name is checked before phone, only the first
//! violation is reported.

use hyper::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Rejection reason for an inbound submission
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("invalid JSON")]
    InvalidJson,
    #[error("name required")]
    MissingName,
    #[error("phone required")]
    MissingPhone,
}

impl SubmissionError {
    pub const fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

/// A validated name/phone pair from one form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub phone: String,
}

impl Submission {
    /// Message text forwarded to the destination chat
    pub fn to_message(&self) -> String {
        format!(
            "New contact form submission:\nName: {}\nPhone: {}",
            self.name, self.phone
        )
    }
}

/// Parse a request body into a validated submission.
///
/// An empty body is treated as an empty object. A field that is absent or
/// not a string counts as an empty string and fails validation after
/// trimming.
pub fn parse(body: &[u8]) -> Result<Submission, SubmissionError> {
    let data: Value = if body.is_empty() {
        Value::Object(serde_json::Map::new())
    } else {
        serde_json::from_slice(body).map_err(|_| SubmissionError::InvalidJson)?
    };

    let name = field(&data, "name");
    if name.is_empty() {
        return Err(SubmissionError::MissingName);
    }

    let phone = field(&data, "phone");
    if phone.is_empty() {
        return Err(SubmissionError::MissingPhone);
    }

    Ok(Submission {
        name: name.to_string(),
        phone: phone.to_string(),
    })
}

/// Read a field as trimmed text; absent or non-string yields ""
fn field<'a>(data: &'a Value, key: &str) -> &'a str {
    data.get(key).and_then(Value::as_str).unwrap_or("").trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_submission() {
        let sub = parse(br#"{"name": "Ivan", "phone": "+1555"}"#).unwrap();
        assert_eq!(sub.name, "Ivan");
        assert_eq!(sub.phone, "+1555");
    }

    #[test]
    fn test_fields_are_trimmed() {
        let sub = parse(br#"{"name": "  Ivan  ", "phone": " +1555 "}"#).unwrap();
        assert_eq!(sub.name, "Ivan");
        assert_eq!(sub.phone, "+1555");
    }

    #[test]
    fn test_empty_body_is_empty_object() {
        assert_eq!(parse(b""), Err(SubmissionError::MissingName));
    }

    #[test]
    fn test_empty_object_missing_name() {
        assert_eq!(parse(b"{}"), Err(SubmissionError::MissingName));
    }

    #[test]
    fn test_whitespace_only_name_is_missing() {
        assert_eq!(
            parse(br#"{"name": "  "}"#),
            Err(SubmissionError::MissingName)
        );
    }

    #[test]
    fn test_name_without_phone() {
        assert_eq!(
            parse(br#"{"name": "Ivan"}"#),
            Err(SubmissionError::MissingPhone)
        );
    }

    #[test]
    fn test_name_checked_before_phone() {
        // Both missing: only the name violation is reported
        assert_eq!(
            parse(br#"{"name": "", "phone": ""}"#),
            Err(SubmissionError::MissingName)
        );
    }

    #[test]
    fn test_non_string_field_counts_as_empty() {
        assert_eq!(
            parse(br#"{"name": 123, "phone": "+1555"}"#),
            Err(SubmissionError::MissingName)
        );
    }

    #[test]
    fn test_non_object_body_has_no_fields() {
        // Valid JSON that is not an object parses, then fails field lookup
        assert_eq!(parse(br#""just a string""#), Err(SubmissionError::MissingName));
    }

    #[test]
    fn test_malformed_json() {
        assert_eq!(parse(b"{not json"), Err(SubmissionError::InvalidJson));
        assert_eq!(parse(b"   "), Err(SubmissionError::InvalidJson));
    }

    #[test]
    fn test_error_messages_match_contract() {
        assert_eq!(SubmissionError::InvalidJson.to_string(), "invalid JSON");
        assert_eq!(SubmissionError::MissingName.to_string(), "name required");
        assert_eq!(SubmissionError::MissingPhone.to_string(), "phone required");
    }

    #[test]
    fn test_message_template() {
        let sub = Submission {
            name: "Ivan".to_string(),
            phone: "+1555".to_string(),
        };
        assert_eq!(
            sub.to_message(),
            "New contact form submission:\nName: Ivan\nPhone: +1555"
        );
    }
}
