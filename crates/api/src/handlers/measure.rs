//! Handler for `POST /api/measure`.
//!
//! The browser computes live measurements with its mapping SDK while the
//! user draws; this endpoint reproduces the same numbers server-side so
//! reports and estimates don't depend on a browser session.

use axum::Json;
use serde::Deserialize;

use parcelview_core::geo::LatLng;
use parcelview_core::shape::{measure_shapes, MeasurementSummary, Shape, ShapeKind};

use crate::error::{AppError, AppResult};

/// One drawn shape as submitted by the client.
#[derive(Debug, Deserialize)]
pub struct ShapeInput {
    pub kind: ShapeKind,
    pub points: Vec<LatLng>,
}

/// Request body for `POST /api/measure`.
#[derive(Debug, Deserialize)]
pub struct MeasureRequest {
    pub shapes: Option<Vec<ShapeInput>>,
    /// Roof pitch multiplier; 1.0 (flat) when omitted.
    #[serde(default = "default_roof_pitch")]
    pub roof_pitch: f64,
}

fn default_roof_pitch() -> f64 {
    1.0
}

/// POST /api/measure
pub async fn measure(Json(input): Json<MeasureRequest>) -> AppResult<Json<MeasurementSummary>> {
    let inputs = input
        .shapes
        .ok_or_else(|| AppError::BadRequest("Missing required field: shapes".into()))?;

    let shapes = inputs
        .into_iter()
        .map(|s| Shape::new(s.kind, s.points))
        .collect::<Result<Vec<_>, _>>()?;

    let summary = measure_shapes(shapes.iter(), input.roof_pitch)?;
    Ok(Json(summary))
}
