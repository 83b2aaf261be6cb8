use std::future::Future;

use portfolio_models::contact::ContactSubmission;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait MessageLogRepository: Send + Sync + 'static {
    /// Appends the submission as one complete record to the end of the log.
    ///
    /// Either the whole record is written or nothing is. Concurrent appends
    /// never interleave.
    fn append(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockMessageLogRepository {
    pub fn with_append(mut self, submission: ContactSubmission) -> Self {
        self.expect_append()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(|_| Box::pin(std::future::ready(Ok(()))));
        self
    }

    pub fn with_append_error(mut self, submission: ContactSubmission, cause: &'static str) -> Self {
        self.expect_append()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(Err(anyhow::anyhow!(cause)))));
        self
    }
}
