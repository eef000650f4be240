use std::sync::Arc;

use assert_matches::assert_matches;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use prescription_cell::handlers::*;
use prescription_cell::models::UploadPrescriptionRequest;
use shared_models::error::AppError;
use shared_utils::test_utils::{MockStoreResponses, TestConfig};

fn config_for(mock_server: &MockServer) -> Arc<shared_config::AppConfig> {
    let mut config = TestConfig::default().to_app_config();
    config.supabase_url = mock_server.uri();
    Arc::new(config)
}

#[tokio::test]
async fn test_upload_prescription_inserts_row() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/prescriptions"))
        .and(body_partial_json(json!({
            "patient_external_id": "ext-123",
            "file_reference": "uploads/rx-42.pdf"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            MockStoreResponses::prescription_row("ext-123", "uploads/rx-42.pdf")
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = upload_prescription(
        State(config_for(&mock_server)),
        Json(UploadPrescriptionRequest {
            patient_external_id: "ext-123".to_string(),
            file_reference: "uploads/rx-42.pdf".to_string(),
        }),
    )
    .await;

    let (status, body) = result.expect("upload should succeed");
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.0["message"], "Prescription uploaded");
    assert!(body.0["prescriptionId"].is_string());
}

#[tokio::test]
async fn test_upload_prescription_rejects_missing_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/prescriptions"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = upload_prescription(
        State(config_for(&mock_server)),
        Json(UploadPrescriptionRequest {
            patient_external_id: "ext-123".to_string(),
            file_reference: "  ".to_string(),
        }),
    )
    .await;

    assert_matches!(result, Err(AppError::ValidationError(_)));
}
