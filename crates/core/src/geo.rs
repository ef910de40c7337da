//! Spherical geometry for geographic paths.
//!
//! Area uses the spherical-excess method (fan triangulation from the first
//! vertex, signed excess per triangle), length uses the haversine formula.
//! Both run on a sphere of the WGS84 equatorial radius, which is what the
//! mapping vendor's client-side geometry library uses, so server-side
//! results agree with what the browser displayed.

use serde::{Deserialize, Serialize};

/// Earth radius in meters (WGS84 equatorial).
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Square feet per square meter.
pub const SQ_FT_PER_SQ_M: f64 = 10.7639;

/// Feet per meter.
pub const FT_PER_M: f64 = 3.28084;

/// Square meters per acre (international acre).
pub const SQ_M_PER_ACRE: f64 = 4_046.856_422_4;

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Unit vector on the sphere for this coordinate.
    fn to_unit_vector(self) -> [f64; 3] {
        let lat = self.lat.to_radians();
        let lng = self.lng.to_radians();
        [lat.cos() * lng.cos(), lat.cos() * lng.sin(), lat.sin()]
    }
}

/// Great-circle distance between two coordinates, in meters (haversine).
pub fn compute_distance(from: LatLng, to: LatLng) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * a.sqrt().asin() * EARTH_RADIUS_M
}

/// Total length of a path in meters. Fewer than 2 vertices measure zero.
pub fn compute_length(path: &[LatLng]) -> f64 {
    path.windows(2).map(|w| compute_distance(w[0], w[1])).sum()
}

/// Signed area of a closed path in square meters.
///
/// Counter-clockwise paths are positive. Closure is implicit: the last
/// vertex connects back to the first, and an explicitly duplicated closing
/// vertex only adds a degenerate (zero-area) triangle.
pub fn compute_signed_area(path: &[LatLng]) -> f64 {
    if path.len() < 3 {
        return 0.0;
    }

    let origin = path[0];
    let excess: f64 = path
        .windows(2)
        .skip(1)
        .map(|w| signed_triangle_excess(origin, w[0], w[1]))
        .sum();

    excess * EARTH_RADIUS_M * EARTH_RADIUS_M
}

/// Area of a closed path in square meters, independent of winding order.
pub fn compute_area(path: &[LatLng]) -> f64 {
    compute_signed_area(path).abs()
}

/// Signed spherical excess of the triangle (a, b, c) on the unit sphere.
///
/// Magnitude via l'Huilier's theorem; sign from the orientation of the
/// vertex triple (positive when counter-clockwise seen from outside).
fn signed_triangle_excess(a: LatLng, b: LatLng, c: LatLng) -> f64 {
    let va = a.to_unit_vector();
    let vb = b.to_unit_vector();
    let vc = c.to_unit_vector();

    let ab = angular_distance(va, vb);
    let bc = angular_distance(vb, vc);
    let ca = angular_distance(vc, va);

    let s = (ab + bc + ca) / 2.0;
    let t = (s / 2.0).tan()
        * ((s - ab) / 2.0).tan()
        * ((s - bc) / 2.0).tan()
        * ((s - ca) / 2.0).tan();

    // Degenerate triangles (collinear or repeated vertices) produce tiny
    // negative t from floating-point noise.
    let excess = 4.0 * t.max(0.0).sqrt().atan();

    excess * triple_product(va, vb, vc).signum()
}

/// Central angle between two unit vectors.
fn angular_distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dot = a[0] * b[0] + a[1] * b[1] + a[2] * b[2];
    dot.clamp(-1.0, 1.0).acos()
}

/// Scalar triple product a . (b x c).
fn triple_product(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> f64 {
    a[0] * (b[1] * c[2] - b[2] * c[1]) - a[1] * (b[0] * c[2] - b[2] * c[0])
        + a[2] * (b[0] * c[1] - b[1] * c[0])
}

/// Convert square meters to square feet.
pub fn sq_m_to_sq_ft(sq_m: f64) -> f64 {
    sq_m * SQ_FT_PER_SQ_M
}

/// Convert square meters to acres.
pub fn sq_m_to_acres(sq_m: f64) -> f64 {
    sq_m / SQ_M_PER_ACRE
}

/// Convert meters to feet.
pub fn m_to_ft(m: f64) -> f64 {
    m * FT_PER_M
}
