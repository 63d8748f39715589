//! Submission domain types and payload validation.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use thiserror::Error;

/// Errors raised while turning a request payload into a submission.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    /// One or more required fields absent, null, or empty.
    #[error("Name, email, and message are required fields")]
    MissingField,
}

/// Raw contact-form request body.
///
/// Every field is optional at the serde layer so that an absent field and a
/// present-but-empty field both surface as validation failures rather than
/// deserialization errors. Unknown extra fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl FormPayload {
    /// Check the three required fields for presence and non-emptiness.
    ///
    /// Presence check only, no trimming: a whitespace-only value passes.
    pub fn validate(self) -> Result<FormFields, SubmissionError> {
        let name = Self::required(self.name)?;
        let email = Self::required(self.email)?;
        let message = Self::required(self.message)?;
        Ok(FormFields {
            name,
            email,
            message,
        })
    }

    fn required(value: Option<String>) -> Result<String, SubmissionError> {
        match value {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(SubmissionError::MissingField),
        }
    }
}

/// The validated field set of a submission. Invariant: all non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A single accepted contact-form record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
    /// ISO-8601 UTC timestamp with millisecond precision, set at receipt.
    pub timestamp: String,
    /// Peer address of the submitting connection.
    pub ip: String,
}

impl Submission {
    /// Stamp validated fields into a record with the receipt time and
    /// source address.
    pub fn record(fields: FormFields, ip: IpAddr) -> Self {
        Self {
            name: fields.name,
            email: fields.email,
            message: fields.message,
            timestamp: utc_timestamp(),
            ip: ip.to_string(),
        }
    }
}

/// Current UTC time as an ISO-8601 string, e.g. `2026-08-06T12:00:00.000Z`.
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, email: &str, message: &str) -> FormPayload {
        FormPayload {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            message: Some(message.to_string()),
        }
    }

    #[test]
    fn test_valid_payload() {
        let fields = payload("Ada", "ada@x.com", "hi").validate().unwrap();
        assert_eq!(fields.name, "Ada");
        assert_eq!(fields.email, "ada@x.com");
        assert_eq!(fields.message, "hi");
    }

    #[test]
    fn test_missing_field_rejected() {
        let mut p = payload("Ada", "ada@x.com", "hi");
        p.message = None;
        assert_eq!(p.validate(), Err(SubmissionError::MissingField));
    }

    #[test]
    fn test_empty_field_rejected() {
        for field in ["name", "email", "message"] {
            let mut p = payload("Ada", "ada@x.com", "hi");
            match field {
                "name" => p.name = Some(String::new()),
                "email" => p.email = Some(String::new()),
                _ => p.message = Some(String::new()),
            }
            assert_eq!(p.validate(), Err(SubmissionError::MissingField));
        }
    }

    #[test]
    fn test_whitespace_only_accepted() {
        // Presence check only, no trimming
        assert!(payload(" ", "a@b.com", "hi").validate().is_ok());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let p: FormPayload = serde_json::from_value(serde_json::json!({
            "name": "Ada",
            "email": "ada@x.com",
            "message": "hi",
            "subject": "ignored",
            "hp_token": 42,
        }))
        .unwrap();
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_null_field_rejected() {
        let p: FormPayload = serde_json::from_value(serde_json::json!({
            "name": null,
            "email": "ada@x.com",
            "message": "hi",
        }))
        .unwrap();
        assert_eq!(p.validate(), Err(SubmissionError::MissingField));
    }

    #[test]
    fn test_record_stamps_timestamp_and_ip() {
        let fields = payload("Ada", "ada@x.com", "hi").validate().unwrap();
        let submission = Submission::record(fields, "127.0.0.1".parse().unwrap());
        assert_eq!(submission.ip, "127.0.0.1");
        assert!(submission.timestamp.ends_with('Z'));
        assert!(submission.timestamp.contains('T'));
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            SubmissionError::MissingField.to_string(),
            "Name, email, and message are required fields"
        );
    }
}
