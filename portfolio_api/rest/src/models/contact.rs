use portfolio_core_contact_contracts::{
    ContactAcknowledgement, ContactStatus, ContactSubmitRequest,
};
use portfolio_models::contact::{ContactField, ContactValidationError};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactRequest {
    /// Full name of the sender
    #[serde(default)]
    pub name: ApiText,
    /// Email address of the sender
    #[serde(default)]
    pub email: ApiText,
    /// Content of the message
    #[serde(default)]
    pub message: ApiText,
    /// Submission time as ISO 8601, defaults to the time of the request
    #[serde(default)]
    pub timestamp: ApiText,
}

/// A text field of a request body. Missing fields and `null` are both
/// [`ApiText::Absent`], values of any other JSON type are kept as
/// [`ApiText::Invalid`] so they can be reported for their field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ApiText {
    #[default]
    Absent,
    Text(String),
    Invalid,
}

impl ApiText {
    fn into_field(self, field: ContactField) -> Result<Option<String>, ContactValidationError> {
        match self {
            Self::Absent => Ok(None),
            Self::Text(text) => Ok(Some(text)),
            Self::Invalid => Err(ContactValidationError::new(field, "must be a string")),
        }
    }
}

impl<'de> Deserialize<'de> for ApiText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => Self::Absent,
            Value::String(text) => Self::Text(text),
            _ => Self::Invalid,
        })
    }
}

impl TryFrom<ApiContactRequest> for ContactSubmitRequest {
    type Error = ContactValidationError;

    fn try_from(value: ApiContactRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: value.name.into_field(ContactField::Name)?.unwrap_or_default(),
            email: value.email.into_field(ContactField::Email)?.unwrap_or_default(),
            message: value
                .message
                .into_field(ContactField::Message)?
                .unwrap_or_default(),
            timestamp: value.timestamp.into_field(ContactField::Timestamp)?,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiContactAcknowledgement {
    pub status: ApiContactStatus,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiContactStatus {
    Success,
}

impl From<ContactAcknowledgement> for ApiContactAcknowledgement {
    fn from(value: ContactAcknowledgement) -> Self {
        Self {
            status: value.status.into(),
            message: value.message,
        }
    }
}

impl From<ContactStatus> for ApiContactStatus {
    fn from(value: ContactStatus) -> Self {
        match value {
            ContactStatus::Success => Self::Success,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiValidationErrorDetail {
    pub field: ContactField,
    pub message: String,
}

impl From<ContactValidationError> for ApiValidationErrorDetail {
    fn from(value: ContactValidationError) -> Self {
        Self {
            field: value.field,
            message: value.to_string(),
        }
    }
}
