//! Integration tests for the visualizer endpoints: upload validation and
//! `/api/visualize` request validation. Vendor calls are never reached --
//! every request here fails validation first.

mod common;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, build_test_app, multipart_body, post_json};
use serde_json::json;
use tower::ServiceExt;

async fn post_multipart(
    app: axum::Router,
    uri: &str,
    body: Vec<u8>,
    content_type: &str,
) -> axum::http::Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Test: /api/visualize rejects missing fields with 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn visualize_missing_fields_returns_400() {
    for body in [
        json!({}),
        json!({ "image_url": "https://example.test/a.jpg" }),
        json!({ "image_url": "https://example.test/a.jpg", "kind": "paint" }),
        json!({ "kind": "paint", "options": { "color": "red" } }),
        json!({ "image_url": "", "kind": "paint", "options": { "color": "red" } }),
    ] {
        let app = build_test_app();
        let response = post_json(app, "/api/visualize", body.clone()).await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "body {body} should be rejected"
        );

        let json = body_json(response).await;
        assert_eq!(json["code"], "BAD_REQUEST");
    }
}

// ---------------------------------------------------------------------------
// Test: unknown visualization kind returns 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn visualize_unknown_kind_returns_400() {
    let app = build_test_app();

    let body = json!({
        "image_url": "https://example.test/a.jpg",
        "kind": "driveway",
        "options": { "color": "red" },
    });

    let response = post_json(app, "/api/visualize", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    let message = json["error"].as_str().unwrap();
    assert!(
        message.contains("paint, fence, roof, or flooring"),
        "error should name the valid kinds, got: {message}"
    );
}

// ---------------------------------------------------------------------------
// Test: blank option values return 400 before any vendor call
// ---------------------------------------------------------------------------

#[tokio::test]
async fn visualize_blank_option_returns_400() {
    let app = build_test_app();

    let body = json!({
        "image_url": "https://example.test/a.jpg",
        "kind": "paint",
        "options": { "color": "   " },
    });

    let response = post_json(app, "/api/visualize", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: non-http image URL returns 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn visualize_non_http_url_returns_400() {
    let app = build_test_app();

    let body = json!({
        "image_url": "file:///etc/passwd",
        "kind": "roof",
        "options": { "color": "charcoal" },
    });

    let response = post_json(app, "/api/visualize", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: upload rejects non-image mime types
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upload_rejects_non_image_mime() {
    let app = build_test_app();

    let (body, content_type) = multipart_body("image", "notes.txt", "text/plain", b"hello");
    let response = post_multipart(app, "/api/upload-image", body, &content_type).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Only image files are allowed");
}

// ---------------------------------------------------------------------------
// Test: upload rejects a missing image field
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upload_rejects_missing_field() {
    let app = build_test_app();

    let (body, content_type) = multipart_body("attachment", "a.png", "image/png", b"fake");
    let response = post_multipart(app, "/api/upload-image", body, &content_type).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "No image file provided");
}

// ---------------------------------------------------------------------------
// Test: upload rejects an empty file
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upload_rejects_empty_file() {
    let app = build_test_app();

    let (body, content_type) = multipart_body("image", "a.png", "image/png", b"");
    let response = post_multipart(app, "/api/upload-image", body, &content_type).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: upload rejects an image over the 10 MB limit
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upload_rejects_oversized_image() {
    let app = build_test_app();

    // One byte over the limit; still within the request body limit.
    let oversized = vec![0u8; 10 * 1024 * 1024 + 1];
    let (body, content_type) = multipart_body("image", "big.jpg", "image/jpeg", &oversized);
    let response = post_multipart(app, "/api/upload-image", body, &content_type).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("10 MB"), "got: {message}");
}
