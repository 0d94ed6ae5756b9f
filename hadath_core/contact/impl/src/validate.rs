use hadath_core_contact_contracts::validate::ContactValidateService;
use hadath_di::Build;
use hadath_models::{
    contact::{
        ContactEmail, ContactFieldError, ContactForm, ContactFormErrors, ContactFullName,
        ContactMessageContent, ContactSubmission,
    },
    country::Country,
    phone::PhoneNumber,
    sanitize::sanitize_input,
};
use hadath_shared_contracts::time::TimeService;
use hadath_utils::trace_instrument;

#[derive(Debug, Clone, Build)]
#[cfg_attr(test, derive(Default))]
pub struct ContactValidateServiceImpl<Time> {
    pub(crate) time: Time,
}

impl<Time> ContactValidateService for ContactValidateServiceImpl<Time>
where
    Time: TimeService,
{
    #[trace_instrument(skip(self))]
    fn validate(&self, form: &ContactForm) -> Result<ContactSubmission, ContactFormErrors> {
        let mut errors = ContactFormErrors::default();

        let full_name = check(&mut errors, validate_name(&form.name));
        let email = check(&mut errors, validate_email(&form.email));
        let phone = check(&mut errors, self.validate_phone(form.country, &form.phone));
        let event_type = check(
            &mut errors,
            form.event_type.ok_or(ContactFieldError::EventTypeRequired),
        );
        let preferred_date = check(
            &mut errors,
            match form.event_date {
                Some(date) if date < self.time.today() => Err(ContactFieldError::EventDateInPast),
                date => Ok(date),
            },
        );
        let message = check(&mut errors, validate_message(&form.message));

        match (full_name, email, phone, event_type, preferred_date, message) {
            (
                Some(full_name),
                Some(email),
                Some(phone),
                Some(event_type),
                Some(preferred_date),
                Some(message),
            ) => Ok(ContactSubmission {
                full_name,
                email,
                phone,
                event_type,
                preferred_date,
                message,
            }),
            _ => Err(errors),
        }
    }

    #[trace_instrument(skip(self))]
    fn validate_phone(
        &self,
        country: Country,
        phone: &str,
    ) -> Result<Option<PhoneNumber>, ContactFieldError> {
        PhoneNumber::parse(country, &sanitize_input(phone))
            .map_err(|_| ContactFieldError::PhoneInvalid)
    }
}

/// Records the error of a failed field check.
fn check<T>(errors: &mut ContactFormErrors, result: Result<T, ContactFieldError>) -> Option<T> {
    result.map_err(|err| errors.insert(err)).ok()
}

fn validate_name(name: &str) -> Result<ContactFullName, ContactFieldError> {
    let name = sanitize_input(name);
    if name.is_empty() {
        return Err(ContactFieldError::NameRequired);
    }
    ContactFullName::try_new(name).map_err(|_| ContactFieldError::NameTooShort)
}

fn validate_email(email: &str) -> Result<ContactEmail, ContactFieldError> {
    let email = sanitize_input(email);
    if email.is_empty() {
        return Err(ContactFieldError::EmailRequired);
    }
    ContactEmail::try_new(email).map_err(|_| ContactFieldError::EmailInvalid)
}

fn validate_message(message: &str) -> Result<ContactMessageContent, ContactFieldError> {
    let message = sanitize_input(message);
    let length = message.chars().count();
    if length == 0 {
        Err(ContactFieldError::MessageRequired)
    } else if length < ContactMessageContent::MIN_LENGTH {
        Err(ContactFieldError::MessageTooShort)
    } else if length > ContactMessageContent::MAX_LENGTH {
        Err(ContactFieldError::MessageTooLong)
    } else {
        ContactMessageContent::try_new(message).map_err(|_| ContactFieldError::MessageTooLong)
    }
}
