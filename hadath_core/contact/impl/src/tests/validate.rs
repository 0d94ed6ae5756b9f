use hadath_core_contact_contracts::{
    validate::MockContactValidateService, ContactFeatureService,
};
use hadath_demo::contact::{ALI_FORM, ALI_SUBMISSION, IRAQI_MOBILE};
use hadath_models::{
    contact::{ContactFieldError, ContactForm},
    country::Country,
    phone::PhoneNumber,
};
use pretty_assertions::assert_eq;

use crate::{tests::Sut, ContactFeatureServiceImpl};

#[test]
fn valid_form() {
    // Arrange
    let validate = MockContactValidateService::new()
        .with_validate(ALI_FORM.clone(), Ok(ALI_SUBMISSION.clone()));

    let sut = ContactFeatureServiceImpl {
        validate,
        ..Sut::default()
    };

    // Act
    let result = sut.validate(&ALI_FORM);

    // Assert
    assert_eq!(result.unwrap(), *ALI_SUBMISSION);
}

#[test]
fn invalid_form() {
    // Arrange
    let form = ContactForm {
        email: "not-an-email".into(),
        ..ALI_FORM.clone()
    };
    let expected = [ContactFieldError::EmailInvalid].into_iter().collect();

    let validate =
        MockContactValidateService::new().with_validate(form.clone(), Err(expected));

    let sut = ContactFeatureServiceImpl {
        validate,
        ..Sut::default()
    };

    // Act
    let result = sut.validate(&form);

    // Assert
    assert_eq!(
        result.unwrap_err(),
        [ContactFieldError::EmailInvalid].into_iter().collect()
    );
}

#[test]
fn valid_phone() {
    // Arrange
    let phone = PhoneNumber::parse(Country::Iraq, IRAQI_MOBILE).unwrap();
    let validate = MockContactValidateService::new().with_validate_phone(
        Country::Iraq,
        IRAQI_MOBILE.into(),
        Ok(phone),
    );

    let sut = ContactFeatureServiceImpl {
        validate,
        ..Sut::default()
    };

    // Act
    let result = sut.validate_phone(Country::Iraq, IRAQI_MOBILE);

    // Assert
    assert_eq!(result, None);
}

#[test]
fn invalid_phone() {
    // Arrange
    let validate = MockContactValidateService::new().with_validate_phone(
        Country::Jordan,
        IRAQI_MOBILE.into(),
        Err(ContactFieldError::PhoneInvalid),
    );

    let sut = ContactFeatureServiceImpl {
        validate,
        ..Sut::default()
    };

    // Act
    let result = sut.validate_phone(Country::Jordan, IRAQI_MOBILE);

    // Assert
    assert_eq!(result, Some(ContactFieldError::PhoneInvalid));
}
