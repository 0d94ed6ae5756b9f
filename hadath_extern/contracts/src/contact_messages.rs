use std::future::Future;

use hadath_models::contact::ContactSubmission;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactMessagesApiService: Send + Sync + 'static {
    /// Inserts the submission as a new row of the remote contact messages
    /// table.
    ///
    /// Fails on network errors, rejected credentials and rows rejected by
    /// the backend. Nothing is retried.
    fn insert(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockContactMessagesApiService {
    pub fn with_insert(mut self, submission: ContactSubmission, success: bool) -> Self {
        self.expect_insert()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| {
                let result = if success {
                    Ok(())
                } else {
                    Err(anyhow::anyhow!("insert rejected"))
                };
                Box::pin(std::future::ready(result))
            });
        self
    }
}
