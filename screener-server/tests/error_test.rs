//! Wire shape of error responses: `{"error": "<message>"}` with the
//! status the error kind dictates.

use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use screener_server::ApiError;
use serde_json::Value;

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn invalid_input_encodes_as_400_error_object() {
    let resp = ApiError::InvalidInput.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp).await;
    assert_eq!(json["error"], "Invalid input. 'features' key missing.");
}

#[tokio::test]
async fn empty_body_encodes_as_400_error_object() {
    let resp = ApiError::EmptyBody.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp).await;
    assert_eq!(json["error"], "No JSON data received.");
}

#[tokio::test]
async fn processing_failure_encodes_as_500_with_message() {
    let resp = ApiError::Processing("disk full".to_string()).into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(resp).await;
    assert_eq!(json["error"], "disk full");
}
