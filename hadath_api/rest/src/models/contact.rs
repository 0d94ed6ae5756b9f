use std::collections::BTreeMap;

use chrono::NaiveDate;
use hadath_models::{
    contact::{ContactField, ContactForm},
    country::Country,
    event_type::EventType,
    language::Language,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactForm {
    /// Full name of the user
    #[serde(default)]
    pub name: String,
    /// Email address of the user
    #[serde(default)]
    pub email: String,
    /// Country whose calling code is prepended to the phone number
    #[serde(default)]
    pub country: Country,
    /// National phone number, formatting characters are ignored
    #[serde(default)]
    pub phone: String,
    /// One of the event types, empty if none was selected
    #[serde(default)]
    pub event_type: String,
    /// Preferred date of the event (`YYYY-MM-DD`)
    #[serde(default)]
    pub event_date: Option<NaiveDate>,
    #[serde(default)]
    pub message: String,
}

impl From<ApiContactForm> for ContactForm {
    fn from(value: ApiContactForm) -> Self {
        Self {
            name: value.name,
            email: value.email,
            country: value.country,
            phone: value.phone,
            event_type: value.event_type.parse().ok(),
            event_date: value.event_date,
            message: value.message,
        }
    }
}

#[derive(Serialize)]
pub struct ApiContactFormErrors {
    pub detail: &'static str,
    pub errors: BTreeMap<ContactField, &'static str>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiPhoneCheck {
    #[serde(default)]
    pub country: Country,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiPhoneCheckResult {
    pub valid: bool,
    pub error: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiCountry {
    pub code: Country,
    pub calling_code: &'static str,
    pub name: &'static str,
}

impl ApiCountry {
    pub fn new(country: Country, language: Language) -> Self {
        Self {
            code: country,
            calling_code: country.calling_code(),
            name: country.name(language),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiEventType {
    pub value: EventType,
    pub label: &'static str,
}

impl ApiEventType {
    pub fn new(event_type: EventType, language: Language) -> Self {
        Self {
            value: event_type,
            label: event_type.label(language),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn unknown_event_type_is_unselected() {
        let form: ApiContactForm =
            serde_json::from_str(r#"{"name":"Ali","event_type":"wedding"}"#).unwrap();

        let form = ContactForm::from(form);

        assert_eq!(form.event_type, None);
        assert_eq!(form.country, Country::Iraq);
        assert_eq!(form.phone, "");
    }

    #[test]
    fn full_form() {
        let form: ApiContactForm = serde_json::from_str(
            r#"{"name":"Ali","email":"ali@example.com","country":"KW","phone":"5000 1234",
                "event_type":"cultural","event_date":"2026-12-03","message":"Hello there!"}"#,
        )
        .unwrap();

        let form = ContactForm::from(form);

        assert_eq!(form.country, Country::Kuwait);
        assert_eq!(form.event_type, Some(EventType::Cultural));
        assert_eq!(form.event_date, NaiveDate::from_ymd_opt(2026, 12, 3));
    }
}
