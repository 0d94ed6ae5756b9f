use hadath_core_contact_contracts::{
    validate::ContactValidateService, ContactFeatureService, ContactSubmitError,
};
use hadath_di::Build;
use hadath_extern_contracts::contact_messages::ContactMessagesApiService;
use hadath_models::{
    contact::{ContactFieldError, ContactForm, ContactFormErrors, ContactSubmission},
    country::Country,
};
use hadath_utils::trace_instrument;
use tracing::{error, info};

pub mod presenter;
pub mod validate;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Build)]
#[cfg_attr(test, derive(Default))]
pub struct ContactFeatureServiceImpl<Validate, ContactApi> {
    validate: Validate,
    contact_api: ContactApi,
}

impl<Validate, ContactApi> ContactFeatureService for ContactFeatureServiceImpl<Validate, ContactApi>
where
    Validate: ContactValidateService,
    ContactApi: ContactMessagesApiService,
{
    #[trace_instrument(skip(self))]
    fn validate(&self, form: &ContactForm) -> Result<ContactSubmission, ContactFormErrors> {
        self.validate.validate(form)
    }

    #[trace_instrument(skip(self))]
    fn validate_phone(&self, country: Country, phone: &str) -> Option<ContactFieldError> {
        self.validate.validate_phone(country, phone).err()
    }

    #[trace_instrument(skip(self))]
    async fn submit(&self, submission: ContactSubmission) -> Result<(), ContactSubmitError> {
        let event_type = submission.event_type;

        self.contact_api.insert(submission).await.map_err(|err| {
            error!("Failed to submit contact message: {err:#}");
            ContactSubmitError::Send
        })?;

        info!(%event_type, "Contact message submitted");

        Ok(())
    }
}
