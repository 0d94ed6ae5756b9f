use std::sync::LazyLock;

use chrono::NaiveDate;
use hadath_models::{
    contact::{
        ContactEmail, ContactForm, ContactFullName, ContactMessageContent, ContactSubmission,
    },
    country::Country,
    event_type::EventType,
    phone::PhoneNumber,
};

/// National digits of a valid Iraqi mobile number.
pub const IRAQI_MOBILE: &str = "783 344 5511";

pub static ALI_FORM: LazyLock<ContactForm> = LazyLock::new(|| ContactForm {
    name: "Ali Hassan".into(),
    email: "ali@example.com".into(),
    country: Country::Iraq,
    phone: String::new(),
    event_type: Some(EventType::Corporate),
    event_date: None,
    message: "Please plan a 200-guest gala for our anniversary.".into(),
});

pub static ALI_SUBMISSION: LazyLock<ContactSubmission> = LazyLock::new(|| ContactSubmission {
    full_name: ContactFullName::try_new("Ali Hassan".to_owned()).unwrap(),
    email: ContactEmail::try_new("ali@example.com".to_owned()).unwrap(),
    phone: None,
    event_type: EventType::Corporate,
    preferred_date: None,
    message: ContactMessageContent::try_new("Please plan a 200-guest gala for our anniversary.".to_owned())
        .unwrap(),
});

pub static SARA_FORM: LazyLock<ContactForm> = LazyLock::new(|| ContactForm {
    name: "  Sara Al-Jubouri ".into(),
    email: " sara@example.iq".into(),
    country: Country::Iraq,
    phone: IRAQI_MOBILE.into(),
    event_type: Some(EventType::Conference),
    event_date: NaiveDate::from_ymd_opt(2026, 12, 3),
    message: "We need a two-day <b>medical</b> conference for 300 attendees.".into(),
});

pub static SARA_SUBMISSION: LazyLock<ContactSubmission> = LazyLock::new(|| ContactSubmission {
    full_name: ContactFullName::try_new("Sara Al-Jubouri".to_owned()).unwrap(),
    email: ContactEmail::try_new("sara@example.iq".to_owned()).unwrap(),
    phone: PhoneNumber::parse(Country::Iraq, IRAQI_MOBILE).unwrap(),
    event_type: EventType::Conference,
    preferred_date: NaiveDate::from_ymd_opt(2026, 12, 3),
    message: ContactMessageContent::try_new(
        "We need a two-day bmedical/b conference for 300 attendees.".to_owned(),
    )
    .unwrap(),
});
