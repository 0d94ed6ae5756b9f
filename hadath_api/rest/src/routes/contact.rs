use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use hadath_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use hadath_models::{country::Country, event_type::EventType};

use super::error;
use crate::models::{
    contact::{
        ApiContactForm, ApiContactFormErrors, ApiCountry, ApiEventType, ApiPhoneCheck,
        ApiPhoneCheckResult,
    },
    ApiLanguageQuery,
};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/contact", routing::post(submit))
        .route("/contact/phone", routing::post(check_phone))
        .route("/contact/countries", routing::get(list_countries))
        .route("/contact/event-types", routing::get(list_event_types))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    Query(ApiLanguageQuery { lang }): Query<ApiLanguageQuery>,
    Json(form): Json<ApiContactForm>,
) -> Response {
    let submission = match service.validate(&form.into()) {
        Ok(submission) => submission,
        Err(errors) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ApiContactFormErrors {
                    detail: "Invalid contact form",
                    errors: errors.localize(lang),
                }),
            )
                .into_response()
        }
    };

    match service.submit(submission).await {
        Ok(()) => Json(true).into_response(),
        Err(ContactSubmitError::Send) => {
            error(StatusCode::INTERNAL_SERVER_ERROR, "Could not send message")
        }
    }
}

async fn check_phone(
    service: State<Arc<impl ContactFeatureService>>,
    Query(ApiLanguageQuery { lang }): Query<ApiLanguageQuery>,
    Json(check): Json<ApiPhoneCheck>,
) -> Json<ApiPhoneCheckResult> {
    let error = service.validate_phone(check.country, &check.phone);
    Json(ApiPhoneCheckResult {
        valid: error.is_none(),
        error: error.map(|err| err.message(lang)),
    })
}

async fn list_countries(
    Query(ApiLanguageQuery { lang }): Query<ApiLanguageQuery>,
) -> Json<Vec<ApiCountry>> {
    Json(
        Country::ALL
            .into_iter()
            .map(|country| ApiCountry::new(country, lang))
            .collect(),
    )
}

async fn list_event_types(
    Query(ApiLanguageQuery { lang }): Query<ApiLanguageQuery>,
) -> Json<Vec<ApiEventType>> {
    Json(
        EventType::ALL
            .into_iter()
            .map(|event_type| ApiEventType::new(event_type, lang))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request},
    };
    use hadath_core_contact_contracts::MockContactFeatureService;
    use hadath_demo::contact::{ALI_FORM, ALI_SUBMISSION, IRAQI_MOBILE};
    use hadath_models::contact::{ContactFieldError, ContactForm};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;

    fn ali_json() -> Value {
        json!({
            "name": "Ali Hassan",
            "email": "ali@example.com",
            "phone": "",
            "event_type": "corporate",
            "message": "Please plan a 200-guest gala for our anniversary.",
        })
    }

    async fn send(
        service: MockContactFeatureService,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = router(Arc::new(service)).oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn submit_ok() {
        // Arrange
        let service = MockContactFeatureService::new()
            .with_validate(ALI_FORM.clone(), Ok(ALI_SUBMISSION.clone()))
            .with_submit(ALI_SUBMISSION.clone(), true);

        // Act
        let (status, body) = send(service, Method::POST, "/contact", Some(ali_json())).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(true));
    }

    #[tokio::test]
    async fn submit_invalid() {
        // Arrange
        let form = ContactForm {
            email: "not-an-email".into(),
            ..ALI_FORM.clone()
        };
        let service = MockContactFeatureService::new().with_validate(
            form,
            Err([ContactFieldError::EmailInvalid].into_iter().collect()),
        );
        let mut body = ali_json();
        body["email"] = json!("not-an-email");

        // Act
        let (status, body) = send(service, Method::POST, "/contact?lang=ar", Some(body)).await;

        // Assert
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            json!({
                "detail": "Invalid contact form",
                "errors": {"email": "البريد الإلكتروني غير صحيح"},
            })
        );
    }

    #[tokio::test]
    async fn submit_failed() {
        // Arrange
        let service = MockContactFeatureService::new()
            .with_validate(ALI_FORM.clone(), Ok(ALI_SUBMISSION.clone()))
            .with_submit(ALI_SUBMISSION.clone(), false);

        // Act
        let (status, body) = send(service, Method::POST, "/contact", Some(ali_json())).await;

        // Assert
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"detail": "Could not send message"}));
    }

    #[tokio::test]
    async fn phone_valid() {
        // Arrange
        let service = MockContactFeatureService::new().with_validate_phone(
            Country::Iraq,
            IRAQI_MOBILE.into(),
            None,
        );

        // Act
        let (status, body) = send(
            service,
            Method::POST,
            "/contact/phone",
            Some(json!({"country": "IQ", "phone": IRAQI_MOBILE})),
        )
        .await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"valid": true, "error": null}));
    }

    #[tokio::test]
    async fn phone_invalid() {
        // Arrange
        let service = MockContactFeatureService::new().with_validate_phone(
            Country::Kuwait,
            IRAQI_MOBILE.into(),
            Some(ContactFieldError::PhoneInvalid),
        );

        // Act
        let (status, body) = send(
            service,
            Method::POST,
            "/contact/phone?lang=en",
            Some(json!({"country": "KW", "phone": IRAQI_MOBILE})),
        )
        .await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "valid": false,
                "error": "Phone number is invalid for the selected country",
            })
        );
    }

    #[tokio::test]
    async fn countries() {
        // Act
        let (status, body) = send(
            MockContactFeatureService::new(),
            Method::GET,
            "/contact/countries?lang=ar",
            None,
        )
        .await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        let countries = body.as_array().unwrap();
        assert_eq!(countries.len(), Country::ALL.len());
        assert_eq!(
            countries[0],
            json!({"code": "IQ", "calling_code": "+964", "name": "العراق"})
        );
    }

    #[tokio::test]
    async fn event_types() {
        // Act
        let (status, body) = send(
            MockContactFeatureService::new(),
            Method::GET,
            "/contact/event-types",
            None,
        )
        .await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                {"value": "conference", "label": "Conference"},
                {"value": "corporate", "label": "Corporate Event"},
                {"value": "cultural", "label": "Cultural Event"},
                {"value": "exhibition", "label": "Exhibition"},
                {"value": "other", "label": "Other"},
            ])
        );
    }
}
