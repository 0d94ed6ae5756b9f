pub mod contact;
pub mod country;
pub mod event_type;
pub mod language;
mod macros;
pub mod phone;
pub mod preferences;
pub mod sanitize;
