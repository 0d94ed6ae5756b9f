//! Form state and submission status of the contact form.

use std::{sync::Arc, time::Duration};

use chrono::NaiveDate;
use hadath_core_contact_contracts::ContactFeatureService;
use hadath_models::{
    contact::{ContactField, ContactForm, ContactFormErrors, ContactFormStatus},
    country::Country,
    event_type::EventType,
};
use tokio::{sync::watch, task::AbortHandle};
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub struct ContactFormPresenterConfig {
    /// Delay after which a success or error banner returns to idle.
    pub dismiss_after: Duration,
}

impl Default for ContactFormPresenterConfig {
    fn default() -> Self {
        Self {
            dismiss_after: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed. The field errors have been updated and nothing was
    /// sent.
    Invalid,
    /// The message was stored and the form has been reset.
    Sent,
    /// The message could not be stored. The form is left untouched.
    Failed,
}

/// Owns the contact form and drives the idle/submitting/success/error state
/// machine.
///
/// Submitting takes `&mut self`, so there is never more than one submission
/// in flight. Success and error statuses return to idle on their own after
/// [`ContactFormPresenterConfig::dismiss_after`]; this requires a tokio
/// runtime.
#[derive(Debug)]
pub struct ContactFormPresenter<Contact> {
    contact: Contact,
    config: ContactFormPresenterConfig,
    form: ContactForm,
    errors: ContactFormErrors,
    status: Arc<watch::Sender<ContactFormStatus>>,
    dismiss: Option<AbortHandle>,
}

impl<Contact> ContactFormPresenter<Contact>
where
    Contact: ContactFeatureService,
{
    pub fn new(contact: Contact, config: ContactFormPresenterConfig) -> Self {
        Self {
            contact,
            config,
            form: ContactForm::default(),
            errors: ContactFormErrors::default(),
            status: Arc::new(watch::Sender::new(ContactFormStatus::Idle)),
            dismiss: None,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn errors(&self) -> &ContactFormErrors {
        &self.errors
    }

    pub fn status(&self) -> ContactFormStatus {
        *self.status.borrow()
    }

    /// Returns a receiver that observes every status change.
    pub fn subscribe(&self) -> watch::Receiver<ContactFormStatus> {
        self.status.subscribe()
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.status() != ContactFormStatus::Submitting
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
        self.errors.remove(ContactField::Name);
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.form.email = email.into();
        self.errors.remove(ContactField::Email);
    }

    /// Updates the phone digits and re-validates only the phone number.
    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.form.phone = phone.into();
        self.revalidate_phone();
    }

    /// Selects another country and re-checks the digits already entered
    /// against its numbering plan.
    pub fn set_country(&mut self, country: Country) {
        self.form.country = country;
        self.revalidate_phone();
    }

    pub fn set_event_type(&mut self, event_type: Option<EventType>) {
        self.form.event_type = event_type;
        self.errors.remove(ContactField::EventType);
    }

    pub fn set_event_date(&mut self, event_date: Option<NaiveDate>) {
        self.form.event_date = event_date;
        self.errors.remove(ContactField::EventDate);
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.form.message = message.into();
        self.errors.remove(ContactField::Message);
    }

    /// Replaces every field of the form at once, e.g. when it was filled in
    /// elsewhere. Field errors are left as they are until the next submit.
    pub fn fill(&mut self, form: ContactForm) {
        self.form = form;
    }

    /// Validates the form and, if it is valid, submits it.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let submission = match self.contact.validate(&self.form) {
            Ok(submission) => submission,
            Err(errors) => {
                debug!(invalid_fields = errors.len(), "Contact form is invalid");
                self.errors = errors;
                return SubmitOutcome::Invalid;
            }
        };
        self.errors.clear();

        self.cancel_dismiss();
        self.set_status(ContactFormStatus::Submitting);

        let outcome = match self.contact.submit(submission).await {
            Ok(()) => {
                self.form = ContactForm::default();
                self.set_status(ContactFormStatus::Success);
                SubmitOutcome::Sent
            }
            Err(_) => {
                self.set_status(ContactFormStatus::Error);
                SubmitOutcome::Failed
            }
        };

        self.schedule_dismiss();

        outcome
    }

    /// Closes the success or error banner immediately.
    pub fn dismiss(&mut self) {
        self.cancel_dismiss();
        close_banner(&self.status);
    }

    /// Waits until the current banner has been dismissed.
    pub async fn wait_dismissed(&self) {
        let mut status = self.subscribe();
        // the sender is owned by `self`, so it cannot be dropped while waiting
        let _ = status
            .wait_for(|&status| status == ContactFormStatus::Idle)
            .await;
    }

    fn set_status(&self, status: ContactFormStatus) {
        debug!(?status, "contact form status changed");
        self.status.send_replace(status);
    }

    fn revalidate_phone(&mut self) {
        match self
            .contact
            .validate_phone(self.form.country, &self.form.phone)
        {
            Some(error) => self.errors.insert(error),
            None => {
                self.errors.remove(ContactField::Phone);
            }
        }
    }

    fn schedule_dismiss(&mut self) {
        let status = Arc::clone(&self.status);
        let dismiss_after = self.config.dismiss_after;
        let task = tokio::spawn(async move {
            tokio::time::sleep(dismiss_after).await;
            if close_banner(&status) {
                debug!("contact form status dismissed after {dismiss_after:?}");
            }
        });
        self.dismiss = Some(task.abort_handle());
    }

    fn cancel_dismiss(&mut self) {
        if let Some(dismiss) = self.dismiss.take() {
            dismiss.abort();
        }
    }
}

impl<Contact> Drop for ContactFormPresenter<Contact> {
    fn drop(&mut self) {
        if let Some(dismiss) = self.dismiss.take() {
            dismiss.abort();
        }
    }
}

/// Moves a success or error banner back to idle. Any other status is left
/// untouched.
pub(crate) fn close_banner(status: &watch::Sender<ContactFormStatus>) -> bool {
    status.send_if_modified(|status| {
        let dismissible = matches!(
            status,
            ContactFormStatus::Success | ContactFormStatus::Error
        );
        if dismissible {
            debug!(from = ?status, "contact form status dismissed");
            *status = ContactFormStatus::Idle;
        }
        dismissible
    })
}
