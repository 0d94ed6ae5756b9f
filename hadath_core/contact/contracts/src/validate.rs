use hadath_models::{
    contact::{ContactFieldError, ContactForm, ContactFormErrors, ContactSubmission},
    country::Country,
    phone::PhoneNumber,
};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactValidateService: Send + Sync + 'static {
    /// Sanitize and validate every field of the form.
    ///
    /// The returned error set replaces any previous one. The phone number and
    /// the event date are only checked if they are set.
    fn validate(&self, form: &ContactForm) -> Result<ContactSubmission, ContactFormErrors>;

    /// Sanitize and normalize the phone number for the selected country.
    fn validate_phone(
        &self,
        country: Country,
        phone: &str,
    ) -> Result<Option<PhoneNumber>, ContactFieldError>;
}

#[cfg(feature = "mock")]
impl MockContactValidateService {
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
        result: Result<Option<PhoneNumber>, ContactFieldError>,
    ) -> Self {
        self.expect_validate_phone()
            .once()
            .with(
                mockall::predicate::eq(country),
                mockall::predicate::eq(phone),
            )
            .return_once(|_, _| result);
        self
    }
}
