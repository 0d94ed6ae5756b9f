use std::fmt;

use phonenumber::Mode;
use serde::Serialize;
use thiserror::Error;

use crate::country::Country;

/// Phone number in E.164 format that is valid for the country it was entered
/// for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PhoneNumber(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("The phone number is not valid for the selected country.")]
pub struct InvalidPhoneNumber;

impl PhoneNumber {
    /// Combines the calling code of `country` with the digits of `input`.
    ///
    /// Every non-digit character of `input` is ignored. Returns `Ok(None)` if
    /// no digits remain, as the phone number is optional. Numbers that cannot
    /// be parsed and numbers that parse but do not follow the numbering plan
    /// of `country` are rejected alike.
    pub fn parse(country: Country, input: &str) -> Result<Option<Self>, InvalidPhoneNumber> {
        let digits = input
            .chars()
            .filter(char::is_ascii_digit)
            .collect::<String>();
        if digits.is_empty() {
            return Ok(None);
        }

        let region = country.region();
        let number = phonenumber::parse(
            Some(region),
            format!("{}{digits}", country.calling_code()),
        )
        .map_err(|_| InvalidPhoneNumber)?;

        if !number.is_valid() || number.country().id() != Some(region) {
            return Err(InvalidPhoneNumber);
        }

        Ok(Some(Self(number.format().mode(Mode::E164).to_string())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
