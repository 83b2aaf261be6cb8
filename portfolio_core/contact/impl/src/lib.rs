use portfolio_core_contact_contracts::{
    ContactAcknowledgement, ContactService, ContactStatus, ContactSubmitError,
    ContactSubmitRequest,
};
use portfolio_models::contact::{
    parse_timestamp, ContactEmail, ContactMessageContent, ContactName, ContactSubmission,
    ContactValidationError,
};
use portfolio_persistence_contracts::message_log::MessageLogRepository;
use portfolio_shared_contracts::time::TimeService;
use tracing::{debug, error, info};


pub const ACKNOWLEDGEMENT: &str = "Thank you for reaching out!";

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<Time, MessageLog> {
    time: Time,
    message_log: MessageLog,
}

impl<Time, MessageLog> ContactServiceImpl<Time, MessageLog> {
    pub fn new(time: Time, message_log: MessageLog) -> Self {
        Self { time, message_log }
    }
}

impl<Time, MessageLog> ContactService for ContactServiceImpl<Time, MessageLog>
where
    Time: TimeService,
    MessageLog: MessageLogRepository,
{
    #[tracing::instrument(skip_all)]
    async fn submit(
        &self,
        request: ContactSubmitRequest,
    ) -> Result<ContactAcknowledgement, ContactSubmitError> {
        let submission = self
            .validate(request)
            .inspect_err(|err| debug!("rejected contact message: {err}"))?;

        self.message_log
            .append(&submission)
            .await
            .map_err(|err| {
                error!("Failed to persist contact message: {err:#}");
                ContactSubmitError::Persistence(err)
            })?;

        info!(timestamp = %submission.timestamp, "accepted contact message");

        Ok(ContactAcknowledgement {
            status: ContactStatus::Success,
            message: ACKNOWLEDGEMENT.into(),
        })
    }
}

impl<Time, MessageLog> ContactServiceImpl<Time, MessageLog>
where
    Time: TimeService,
{
    fn validate(
        &self,
        request: ContactSubmitRequest,
    ) -> Result<ContactSubmission, ContactValidationError> {
        let name = ContactName::parse(&request.name)?;
        let email = ContactEmail::parse(&request.email)?;
        let message = ContactMessageContent::parse(&request.message)?;

        // The clock is read only once every field is known to be valid.
        let timestamp = match request.timestamp.as_deref() {
            Some(raw) => parse_timestamp(raw)?,
            None => self.time.now(),
        };

        Ok(ContactSubmission {
            timestamp,
            name,
            email,
            message,
        })
    }
}
