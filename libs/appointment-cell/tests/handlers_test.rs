use std::sync::Arc;

use assert_matches::assert_matches;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use appointment_cell::handlers::*;
use appointment_cell::models::BookAppointmentRequest;
use shared_models::error::AppError;
use shared_utils::test_utils::{MockStoreResponses, TestConfig};

fn config_for(
    store: &MockServer,
    mail: &MockServer,
) -> Arc<shared_config::AppConfig> {
    let mut config = TestConfig::default().to_app_config();
    config.supabase_url = store.uri();
    config.mail_api_url = mail.uri();
    Arc::new(config)
}

fn book_request(doctor_id: &str) -> BookAppointmentRequest {
    BookAppointmentRequest {
        patient_external_id: "ext-123".to_string(),
        doctor_id: doctor_id.to_string(),
        date: "2025-03-01".to_string(),
        time: "10:30".to_string(),
    }
}

async fn mount_doctor(store: &MockServer, doctor_id: &Uuid) {
    Mock::given(method("GET"))
        .and(path("/rest/v1/doctors"))
        .and(query_param("id", format!("eq.{}", doctor_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockStoreResponses::doctor_row(&doctor_id.to_string(), "Dr. Grey", "cardiology")
        ])))
        .mount(store)
        .await;
}

#[tokio::test]
async fn test_booking_with_missing_field_creates_nothing() {
    let store = MockServer::start().await;
    let mail = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/appointments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
        .expect(0)
        .mount(&store)
        .await;

    for missing in ["patient", "doctor", "date", "time"] {
        let mut request = book_request(&Uuid::new_v4().to_string());
        match missing {
            "patient" => request.patient_external_id = String::new(),
            "doctor" => request.doctor_id = String::new(),
            "date" => request.date = String::new(),
            _ => request.time = String::new(),
        }

        let result = book_appointment(State(config_for(&store, &mail)), Json(request)).await;
        assert_matches!(result, Err(AppError::ValidationError(_)));
    }
}

#[tokio::test]
async fn test_booking_with_unknown_doctor_creates_nothing() {
    let store = MockServer::start().await;
    let mail = MockServer::start().await;
    let doctor_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/rest/v1/doctors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&store)
        .await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/appointments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
        .expect(0)
        .mount(&store)
        .await;

    let result = book_appointment(
        State(config_for(&store, &mail)),
        Json(book_request(&doctor_id.to_string())),
    )
    .await;

    assert_matches!(result, Err(AppError::NotFound(_)));
}

#[tokio::test]
async fn test_booking_with_malformed_doctor_id_is_not_found() {
    let store = MockServer::start().await;
    let mail = MockServer::start().await;

    let result = book_appointment(
        State(config_for(&store, &mail)),
        Json(book_request("definitely-not-a-uuid")),
    )
    .await;

    assert_matches!(result, Err(AppError::NotFound(_)));
}

#[tokio::test]
async fn test_booking_persists_pending_appointment_and_notifies() {
    let store = MockServer::start().await;
    let mail = MockServer::start().await;
    let doctor_id = Uuid::new_v4();

    mount_doctor(&store, &doctor_id).await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/appointments"))
        .and(body_partial_json(json!({ "status": "pending" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            MockStoreResponses::appointment_row("ext-123", &doctor_id.to_string(), "2025-03-01", "10:30")
        ])))
        .expect(1)
        .mount(&store)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/send"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "msg-1" })))
        .expect(1)
        .mount(&mail)
        .await;

    let result = book_appointment(
        State(config_for(&store, &mail)),
        Json(book_request(&doctor_id.to_string())),
    )
    .await;

    let (status, body) = result.expect("booking should succeed");
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.0["message"], "Appointment booked");
    assert!(body.0["appointmentId"].is_string());
}

#[tokio::test]
async fn test_booking_succeeds_when_mail_provider_fails() {
    let store = MockServer::start().await;
    let mail = MockServer::start().await;
    let doctor_id = Uuid::new_v4();

    mount_doctor(&store, &doctor_id).await;

    // The appointment must still be written exactly once.
    Mock::given(method("POST"))
        .and(path("/rest/v1/appointments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            MockStoreResponses::appointment_row("ext-123", &doctor_id.to_string(), "2025-03-01", "10:30")
        ])))
        .expect(1)
        .mount(&store)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/send"))
        .respond_with(ResponseTemplate::new(500).set_body_json(
            MockStoreResponses::error_response("smtp relay unavailable"),
        ))
        .expect(1)
        .mount(&mail)
        .await;

    let result = book_appointment(
        State(config_for(&store, &mail)),
        Json(book_request(&doctor_id.to_string())),
    )
    .await;

    let (status, _) = result.expect("booking must not depend on the notifier");
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_list_for_patient_joins_doctor_names_newest_first() {
    let store = MockServer::start().await;
    let mail = MockServer::start().await;
    let doctor_id = Uuid::new_v4();

    // The store performs the sort; the handler must request date.desc and
    // preserve row order, including dangling doctor references.
    Mock::given(method("GET"))
        .and(path("/rest/v1/appointments"))
        .and(query_param("patient_external_id", "eq.ext-123"))
        .and(query_param("select", "*,doctors(name)"))
        .and(query_param("order", "date.desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockStoreResponses::appointment_join_row(
                "ext-123", &doctor_id.to_string(), "2025-03-01", "10:30", Some("Dr. Grey"),
            ),
            MockStoreResponses::appointment_join_row(
                "ext-123", &Uuid::new_v4().to_string(), "2025-01-01", "09:00", None,
            ),
        ])))
        .mount(&store)
        .await;

    let result = get_patient_appointments(
        State(config_for(&store, &mail)),
        Path("ext-123".to_string()),
    )
    .await;

    let body = result.expect("listing should succeed").0;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["date"], "2025-03-01");
    assert_eq!(rows[0]["doctorName"], "Dr. Grey");
    assert_eq!(rows[1]["date"], "2025-01-01");
    assert!(rows[1]["doctorName"].is_null());
}
