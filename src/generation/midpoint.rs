//! Geodesic midpoint projection

use glam::DVec3;

/// Midpoint of the shorter great-circle arc between two unit vectors
///
/// Computed as the normalized arithmetic midpoint. The inputs must not be
/// antipodal; no edge of the octahedron or of any of its subdivisions joins
/// two antipodal points, so the engine never asks for one.
///
/// ```
/// use glam::DVec3;
/// use octsphere::generation::midpoint;
///
/// let m = midpoint(DVec3::X, DVec3::Y);
/// assert!((m.length() - 1.0).abs() < 1e-12);
/// assert!((m.x - m.y).abs() < 1e-12);
/// ```
#[inline]
pub fn midpoint(p1: DVec3, p2: DVec3) -> DVec3 {
    ((p1 + p2) / 2.0).normalize()
}
