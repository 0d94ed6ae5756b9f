use std::future::Future;

use hadath_models::{
    contact::{ContactFieldError, ContactForm, ContactFormErrors, ContactSubmission},
    country::Country,
};
use thiserror::Error;

pub mod validate;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validate the whole contact form.
    ///
    /// Returns the sanitized submission if every field is valid and the
    /// complete set of field errors otherwise.
    fn validate(&self, form: &ContactForm) -> Result<ContactSubmission, ContactFormErrors>;

    /// Check only the phone number, as done while the user is typing.
    ///
    /// Returns `None` if the number is valid or empty.
    fn validate_phone(&self, country: Country, phone: &str) -> Option<ContactFieldError>;

    /// Insert the submission into the contact messages table.
    ///
    /// Failures are logged and reported without their cause. Nothing is
    /// retried.
    fn submit(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = Result<(), ContactSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("Failed to send message.")]
    Send,
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_validate(
        mut self,
        form: ContactForm,
        result: Result<ContactSubmission, ContactFormErrors>,
    ) -> Self {
        self.expect_validate()
            .once()
            .with(mockall::predicate::eq(form))
            .return_once(|_| result);
        self
    }

    pub fn with_validate_phone(
        mut self,
        country: Country,
        phone: String,
        result: Option<ContactFieldError>,
    ) -> Self {
        self.expect_validate_phone()
            .once()
            .with(
                mockall::predicate::eq(country),
                mockall::predicate::eq(phone),
            )
            .return_const(result);
        self
    }

    pub fn with_submit(mut self, submission: ContactSubmission, ok: bool) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| {
                Box::pin(std::future::ready(if ok {
                    Ok(())
                } else {
                    Err(ContactSubmitError::Send)
                }))
            });
        self
    }
}
