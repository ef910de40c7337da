//! Integration tests for `POST /api/measure`.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, post_json};
use serde_json::json;

/// A ~111 m x ~111 m square near the equator (0.001 degrees per side).
fn square_points() -> serde_json::Value {
    json!([
        { "lat": 0.0,   "lng": 0.0 },
        { "lat": 0.0,   "lng": 0.001 },
        { "lat": 0.001, "lng": 0.001 },
        { "lat": 0.001, "lng": 0.0 },
    ])
}

// ---------------------------------------------------------------------------
// Test: totals are computed per kind, in both unit systems
// ---------------------------------------------------------------------------

#[tokio::test]
async fn measure_returns_totals_per_kind() {
    let app = build_test_app();

    let body = json!({
        "shapes": [
            { "kind": "land",  "points": square_points() },
            { "kind": "roof",  "points": square_points() },
            { "kind": "fence", "points": [
                { "lat": 0.0, "lng": 0.0 },
                { "lat": 0.001, "lng": 0.0 },
            ]},
        ],
        "roof_pitch": 1.3,
    });

    let response = post_json(app, "/api/measure", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;

    assert_eq!(json["land_count"], 1);
    assert_eq!(json["roof_count"], 1);
    assert_eq!(json["fence_count"], 1);

    // ~111.32 m sides: area ~12,392 m², fence ~111.3 m.
    let land_sq_m = json["land_sq_m"].as_f64().unwrap();
    assert!((12_000.0..13_000.0).contains(&land_sq_m), "got {land_sq_m}");

    let fence_m = json["fence_m"].as_f64().unwrap();
    assert!((110.0..113.0).contains(&fence_m), "got {fence_m}");

    // Unit conversions hold.
    let land_sq_ft = json["land_sq_ft"].as_f64().unwrap();
    assert!((land_sq_ft - land_sq_m * 10.7639).abs() < 1.0);

    // Pitch scales the roof footprint.
    let roof_sq_m = json["roof_sq_m"].as_f64().unwrap();
    let adjusted = json["roof_adjusted_sq_m"].as_f64().unwrap();
    assert!((adjusted - roof_sq_m * 1.3).abs() < 0.01);
}

// ---------------------------------------------------------------------------
// Test: roof pitch defaults to 1.0 (flat)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn measure_pitch_defaults_to_flat() {
    let app = build_test_app();

    let body = json!({
        "shapes": [{ "kind": "roof", "points": square_points() }],
    });

    let response = post_json(app, "/api/measure", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["roof_pitch"], 1.0);
    assert_eq!(json["roof_sq_m"], json["roof_adjusted_sq_m"]);
}

// ---------------------------------------------------------------------------
// Test: missing shapes field returns 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn measure_missing_shapes_returns_400() {
    let app = build_test_app();

    let response = post_json(app, "/api/measure", json!({ "roof_pitch": 1.0 })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Test: roof pitch below 1.0 returns 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn measure_pitch_below_one_returns_400() {
    let app = build_test_app();

    let body = json!({
        "shapes": [{ "kind": "roof", "points": square_points() }],
        "roof_pitch": 0.5,
    });

    let response = post_json(app, "/api/measure", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: a polygon with fewer than 3 points returns 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn measure_degenerate_polygon_returns_400() {
    let app = build_test_app();

    let body = json!({
        "shapes": [{ "kind": "land", "points": [
            { "lat": 0.0, "lng": 0.0 },
            { "lat": 0.001, "lng": 0.0 },
        ]}],
    });

    let response = post_json(app, "/api/measure", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: empty shape list measures all zeros
// ---------------------------------------------------------------------------

#[tokio::test]
async fn measure_empty_shapes_is_all_zero() {
    let app = build_test_app();

    let response = post_json(app, "/api/measure", json!({ "shapes": [] })).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["land_sq_m"], 0.0);
    assert_eq!(json["fence_m"], 0.0);
    assert_eq!(json["land_count"], 0);
}
