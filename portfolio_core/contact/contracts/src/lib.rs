use std::future::Future;

use portfolio_models::contact::ContactValidationError;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactService: Send + Sync + 'static {
    /// Validates a contact form submission and appends it to the message
    /// log.
    ///
    /// If the request carries no timestamp, the current time is recorded.
    fn submit(
        &self,
        request: ContactSubmitRequest,
    ) -> impl Future<Output = Result<ContactAcknowledgement, ContactSubmitError>> + Send;
}

/// Unvalidated contact form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmitRequest {
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactAcknowledgement {
    pub status: ContactStatus,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactStatus {
    Success,
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error(transparent)]
    Validation(#[from] ContactValidationError),
    #[error("Failed to persist message: {0:#}")]
    Persistence(anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactService {
    pub fn with_submit(
        mut self,
        request: ContactSubmitRequest,
        result: Result<ContactAcknowledgement, ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
