use std::{collections::BTreeMap, sync::LazyLock};

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

use crate::{
    country::Country, event_type::EventType, language::Language, macros::nutype_string,
    phone::PhoneNumber, sanitize::sanitize_input,
};

pub static CONTACT_EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Current values of the contact form inputs, as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub country: Country,
    pub phone: String,
    pub event_type: Option<EventType>,
    pub event_date: Option<NaiveDate>,
    pub message: String,
}

/// Row inserted into the `contact_messages` table.
///
/// Can only be obtained by validating a [`ContactForm`]. The id and the
/// `created_at` timestamp are assigned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub full_name: ContactFullName,
    pub email: ContactEmail,
    pub phone: Option<PhoneNumber>,
    pub event_type: EventType,
    pub preferred_date: Option<NaiveDate>,
    pub message: ContactMessageContent,
}

nutype_string!(ContactFullName(
    sanitize(with = sanitize_input_owned),
    validate(len_char_min = ContactFullName::MIN_LENGTH)
));
impl ContactFullName {
    pub const MIN_LENGTH: usize = 2;
}

nutype_string!(ContactEmail(
    sanitize(with = sanitize_input_owned),
    validate(regex = CONTACT_EMAIL_REGEX)
));

nutype_string!(ContactMessageContent(
    sanitize(with = sanitize_input_owned),
    validate(
        len_char_min = ContactMessageContent::MIN_LENGTH,
        len_char_max = ContactMessageContent::MAX_LENGTH
    )
));
impl ContactMessageContent {
    pub const MIN_LENGTH: usize = 10;
    pub const MAX_LENGTH: usize = 1000;
}

fn sanitize_input_owned(input: String) -> String {
    sanitize_input(&input)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    EventType,
    EventDate,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactFieldError {
    NameRequired,
    NameTooShort,
    EmailRequired,
    EmailInvalid,
    PhoneInvalid,
    EventTypeRequired,
    EventDateInPast,
    MessageRequired,
    MessageTooShort,
    MessageTooLong,
}

impl ContactFieldError {
    pub fn field(self) -> ContactField {
        match self {
            Self::NameRequired | Self::NameTooShort => ContactField::Name,
            Self::EmailRequired | Self::EmailInvalid => ContactField::Email,
            Self::PhoneInvalid => ContactField::Phone,
            Self::EventTypeRequired => ContactField::EventType,
            Self::EventDateInPast => ContactField::EventDate,
            Self::MessageRequired | Self::MessageTooShort | Self::MessageTooLong => {
                ContactField::Message
            }
        }
    }

    pub fn message(self, language: Language) -> &'static str {
        match self {
            Self::NameRequired => language.pick("Name is required", "الاسم مطلوب"),
            Self::NameTooShort => language.pick(
                "Name must be at least 2 characters",
                "يجب أن يكون الاسم على الأقل حرفين",
            ),
            Self::EmailRequired => language.pick("Email is required", "البريد الإلكتروني مطلوب"),
            Self::EmailInvalid => language.pick("Email is invalid", "البريد الإلكتروني غير صحيح"),
            Self::PhoneInvalid => language.pick(
                "Phone number is invalid for the selected country",
                "رقم الهاتف غير صالح للدولة المختارة",
            ),
            Self::EventTypeRequired => language.pick("Event type is required", "نوع الفعالية مطلوب"),
            Self::EventDateInPast => language.pick(
                "Event date cannot be in the past",
                "لا يمكن أن يكون تاريخ الفعالية في الماضي",
            ),
            Self::MessageRequired => language.pick("Message is required", "الرسالة مطلوبة"),
            Self::MessageTooShort => language.pick(
                "Message must be at least 10 characters",
                "يجب أن تكون الرسالة على الأقل 10 أحرف",
            ),
            Self::MessageTooLong => language.pick(
                "Message must be at most 1000 characters",
                "يجب ألا تتجاوز الرسالة 1000 حرف",
            ),
        }
    }
}

/// Field level validation errors. A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormErrors(BTreeMap<ContactField, ContactFieldError>);

impl ContactFormErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: ContactField) -> Option<ContactFieldError> {
        self.0.get(&field).copied()
    }

    /// Records `error` for the field it belongs to, replacing any previous
    /// error of that field.
    pub fn insert(&mut self, error: ContactFieldError) {
        self.0.insert(error.field(), error);
    }

    pub fn remove(&mut self, field: ContactField) -> Option<ContactFieldError> {
        self.0.remove(&field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, ContactFieldError)> + '_ {
        self.0.iter().map(|(&field, &error)| (field, error))
    }

    pub fn localize(&self, language: Language) -> BTreeMap<ContactField, &'static str> {
        self.iter()
            .map(|(field, error)| (field, error.message(language)))
            .collect()
    }
}

impl FromIterator<ContactFieldError> for ContactFormErrors {
    fn from_iter<T: IntoIterator<Item = ContactFieldError>>(iter: T) -> Self {
        let mut errors = Self::default();
        for error in iter {
            errors.insert(error);
        }
        errors
    }
}

/// State of the submission of the contact form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ContactFormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl ContactFormStatus {
    /// Text of the banner shown for this status, if any.
    pub fn banner(self, language: Language) -> Option<&'static str> {
        match self {
            Self::Idle | Self::Submitting => None,
            Self::Success => Some(language.pick(
                "Your message has been sent successfully! We'll get back to you soon.",
                "تم إرسال رسالتك بنجاح! سنتواصل معك قريباً.",
            )),
            Self::Error => Some(language.pick(
                "There was an error sending your message. Please try again or contact us directly.",
                "حدث خطأ في إرسال رسالتك. يرجى المحاولة مرة أخرى أو التواصل معنا مباشرة.",
            )),
        }
    }
}
