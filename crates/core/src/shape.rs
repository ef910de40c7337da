//! Drawn shapes and their collections.
//!
//! The drawing UI keeps three typed overlay collections (land, roof, fence)
//! with at most one shape selected at a time. [`ShapeSet`] models that state
//! plus the vertex-edit operations the editor performs, and produces the
//! measurement totals shown in the sidebar.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::geo::{self, LatLng};
use crate::types::EntityId;

/// Minimum roof pitch multiplier. 1.0 means a flat roof; steeper pitches
/// scale the footprint area up.
pub const MIN_ROOF_PITCH: f64 = 1.0;

/// What a drawn shape measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Land lot polygon (area).
    Land,
    /// Roof footprint polygon (area, pitch-adjustable).
    Roof,
    /// Fence line polyline (length).
    Fence,
}

impl ShapeKind {
    /// Polygons enclose area; the fence polyline measures length.
    pub fn is_polygon(self) -> bool {
        !matches!(self, Self::Fence)
    }

    /// Fewest vertices a valid shape of this kind can have.
    pub fn min_points(self) -> usize {
        if self.is_polygon() {
            3
        } else {
            2
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Land => "land",
            Self::Roof => "roof",
            Self::Fence => "fence",
        }
    }
}

/// A single drawn overlay: an ordered vertex path plus its kind.
///
/// Construct through [`Shape::new`] so the minimum-vertex rule holds.
#[derive(Debug, Clone, Serialize)]
pub struct Shape {
    pub id: EntityId,
    pub kind: ShapeKind,
    points: Vec<LatLng>,
}

impl Shape {
    /// Create a shape from a completed drawing. Rejects paths with fewer
    /// vertices than the kind requires.
    pub fn new(kind: ShapeKind, points: Vec<LatLng>) -> Result<Self, CoreError> {
        if points.len() < kind.min_points() {
            return Err(CoreError::Validation(format!(
                "A {} shape requires at least {} points, got {}",
                kind.label(),
                kind.min_points(),
                points.len()
            )));
        }
        Ok(Self {
            id: EntityId::new_v4(),
            kind,
            points,
        })
    }

    pub fn points(&self) -> &[LatLng] {
        &self.points
    }

    /// Insert a vertex before `index` (so `index == len` appends).
    pub fn insert_point(&mut self, index: usize, point: LatLng) -> Result<(), CoreError> {
        if index > self.points.len() {
            return Err(CoreError::Validation(format!(
                "Insert index {index} out of range for {} points",
                self.points.len()
            )));
        }
        self.points.insert(index, point);
        Ok(())
    }

    /// Move the vertex at `index` to a new position.
    pub fn move_point(&mut self, index: usize, point: LatLng) -> Result<(), CoreError> {
        let slot = self.points.get_mut(index).ok_or_else(|| {
            CoreError::Validation(format!("Vertex index {index} out of range"))
        })?;
        *slot = point;
        Ok(())
    }

    /// Remove the vertex at `index`. Rejects edits that would shrink the
    /// shape below its kind's minimum vertex count.
    pub fn remove_point(&mut self, index: usize) -> Result<(), CoreError> {
        if index >= self.points.len() {
            return Err(CoreError::Validation(format!(
                "Vertex index {index} out of range"
            )));
        }
        if self.points.len() - 1 < self.kind.min_points() {
            return Err(CoreError::Validation(format!(
                "Cannot remove vertex: a {} shape requires at least {} points",
                self.kind.label(),
                self.kind.min_points()
            )));
        }
        self.points.remove(index);
        Ok(())
    }

    /// Enclosed area in square meters. Zero for fence polylines.
    pub fn area_sq_m(&self) -> f64 {
        if self.kind.is_polygon() {
            geo::compute_area(&self.points)
        } else {
            0.0
        }
    }

    /// Path length in meters. Zero for polygons (they measure area).
    pub fn length_m(&self) -> f64 {
        if self.kind.is_polygon() {
            0.0
        } else {
            geo::compute_length(&self.points)
        }
    }
}

/// Measurement totals across a [`ShapeSet`], in both unit systems.
#[derive(Debug, Clone, Serialize)]
pub struct MeasurementSummary {
    pub land_sq_m: f64,
    pub land_sq_ft: f64,
    pub land_acres: f64,
    pub land_count: usize,
    pub roof_sq_m: f64,
    pub roof_sq_ft: f64,
    /// Roof footprint scaled by the pitch multiplier.
    pub roof_adjusted_sq_m: f64,
    pub roof_adjusted_sq_ft: f64,
    pub roof_pitch: f64,
    pub roof_count: usize,
    pub fence_m: f64,
    pub fence_ft: f64,
    pub fence_count: usize,
}

/// The drawing surface's shape collections and selection state.
///
/// Invariant: at most one shape is selected at a time.
#[derive(Debug, Default)]
pub struct ShapeSet {
    shapes: Vec<Shape>,
    selected: Option<EntityId>,
}

impl ShapeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a completed shape, returning its id.
    pub fn add(&mut self, shape: Shape) -> EntityId {
        let id = shape.id;
        self.shapes.push(shape);
        id
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Number of shapes of one kind.
    pub fn count(&self, kind: ShapeKind) -> usize {
        self.shapes.iter().filter(|s| s.kind == kind).count()
    }

    pub fn get(&self, id: EntityId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }

    /// Select a shape, replacing any previous selection.
    pub fn select(&mut self, id: EntityId) -> Result<(), CoreError> {
        if self.get(id).is_none() {
            return Err(CoreError::NotFound { entity: "Shape", id });
        }
        self.selected = Some(id);
        Ok(())
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Shape> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Delete the selected shape, if any, returning it.
    pub fn delete_selected(&mut self) -> Option<Shape> {
        let id = self.selected.take()?;
        self.remove_by_id(id)
    }

    /// Delete a shape by id. Clears the selection if it pointed at it.
    pub fn delete(&mut self, id: EntityId) -> Result<Shape, CoreError> {
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.remove_by_id(id)
            .ok_or(CoreError::NotFound { entity: "Shape", id })
    }

    /// Remove every shape and clear the selection.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.selected = None;
    }

    fn remove_by_id(&mut self, id: EntityId) -> Option<Shape> {
        let index = self.shapes.iter().position(|s| s.id == id)?;
        Some(self.shapes.remove(index))
    }

    /// Compute measurement totals with the given roof pitch multiplier.
    pub fn measure(&self, roof_pitch: f64) -> Result<MeasurementSummary, CoreError> {
        measure_shapes(self.shapes.iter(), roof_pitch)
    }
}

/// Measurement totals for any iterator of shapes.
///
/// The roof pitch multiplier scales the flat roof footprint to sloped
/// surface area; values below 1.0 are rejected.
pub fn measure_shapes<'a>(
    shapes: impl Iterator<Item = &'a Shape>,
    roof_pitch: f64,
) -> Result<MeasurementSummary, CoreError> {
    if !roof_pitch.is_finite() || roof_pitch < MIN_ROOF_PITCH {
        return Err(CoreError::Validation(format!(
            "Roof pitch multiplier must be at least {MIN_ROOF_PITCH}, got {roof_pitch}"
        )));
    }

    let mut land_sq_m = 0.0;
    let mut roof_sq_m = 0.0;
    let mut fence_m = 0.0;
    let (mut land_count, mut roof_count, mut fence_count) = (0, 0, 0);

    for shape in shapes {
        match shape.kind {
            ShapeKind::Land => {
                land_sq_m += shape.area_sq_m();
                land_count += 1;
            }
            ShapeKind::Roof => {
                roof_sq_m += shape.area_sq_m();
                roof_count += 1;
            }
            ShapeKind::Fence => {
                fence_m += shape.length_m();
                fence_count += 1;
            }
        }
    }

    Ok(MeasurementSummary {
        land_sq_m,
        land_sq_ft: geo::sq_m_to_sq_ft(land_sq_m),
        land_acres: geo::sq_m_to_acres(land_sq_m),
        land_count,
        roof_sq_m,
        roof_sq_ft: geo::sq_m_to_sq_ft(roof_sq_m),
        roof_adjusted_sq_m: roof_sq_m * roof_pitch,
        roof_adjusted_sq_ft: geo::sq_m_to_sq_ft(roof_sq_m * roof_pitch),
        roof_pitch,
        roof_count,
        fence_m,
        fence_ft: geo::m_to_ft(fence_m),
        fence_count,
    })
}
