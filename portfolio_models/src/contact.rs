use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use email_address::EmailAddress;
use nutype::nutype;
use serde::Serialize;
use thiserror::Error;

/// A validated contact form submission, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub timestamp: DateTime<Utc>,
    pub name: ContactName,
    pub email: ContactEmail,
    pub message: ContactMessageContent,
}

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 256),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, AsRef, Display)
)]
pub struct ContactName(String);

#[nutype(
    validate(predicate = |s| !s.trim().is_empty(), len_char_max = 8192),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, AsRef, Display)
)]
pub struct ContactMessageContent(String);

impl ContactName {
    pub fn parse(raw: &str) -> Result<Self, ContactValidationError> {
        Self::try_new(raw.to_owned()).map_err(|_| {
            let reason = if raw.trim().is_empty() {
                "must not be empty"
            } else {
                "must be at most 256 characters long"
            };
            ContactValidationError::new(ContactField::Name, reason)
        })
    }
}

impl ContactMessageContent {
    pub fn parse(raw: &str) -> Result<Self, ContactValidationError> {
        Self::try_new(raw.to_owned()).map_err(|_| {
            let reason = if raw.trim().is_empty() {
                "must not be empty"
            } else {
                "must be at most 8192 characters long"
            };
            ContactValidationError::new(ContactField::Message, reason)
        })
    }
}

/// An email address of the form `local@domain.tld`.
///
/// Stricter than [`EmailAddress`]: display names, quoted local parts
/// containing `@`, domain literals and single-label domains are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail(EmailAddress);

impl ContactEmail {
    pub fn parse(raw: &str) -> Result<Self, ContactValidationError> {
        let invalid = |reason| ContactValidationError::new(ContactField::Email, reason);

        let raw = raw.trim();
        if raw.is_empty() {
            return Err(invalid("must not be empty"));
        }
        if raw.matches('@').count() != 1
            || raw.contains(|c: char| c.is_whitespace() || c == '<' || c == '>')
        {
            return Err(invalid("is not a valid email address"));
        }

        let address =
            EmailAddress::from_str(raw).map_err(|_| invalid("is not a valid email address"))?;

        let domain = address.domain();
        if domain.starts_with('[')
            || !domain.contains('.')
            || domain.split('.').any(|label| label.is_empty())
        {
            return Err(invalid("must have a domain containing at least one dot"));
        }

        Ok(Self(address))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a submission timestamp.
///
/// RFC 3339 timestamps are converted to UTC, ISO 8601 date-times without an
/// offset are interpreted as UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, ContactValidationError> {
    let raw = raw.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|timestamp| timestamp.and_utc())
        .ok_or_else(|| {
            ContactValidationError::new(ContactField::Timestamp, "is not a valid ISO 8601 timestamp")
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
    Timestamp,
}

impl ContactField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
            Self::Timestamp => "timestamp",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}

/// A contact submission field violated its input contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field} {reason}")]
pub struct ContactValidationError {
    pub field: ContactField,
    pub reason: &'static str,
}

impl ContactValidationError {
    pub fn new(field: ContactField, reason: &'static str) -> Self {
        Self { field, reason }
    }
}
