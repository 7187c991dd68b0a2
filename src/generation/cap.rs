//! Hemisphere capping
//!
//! The refined upper half-octahedron is open along the equator. The cap adds
//! an explicit ring of equator vertices and one flat polygon over them. The
//! ring coincides (up to rounding) with the boundary vertices the refinement
//! already produced at `z = 0`; the two are not stitched together.

use glam::DVec3;
use tracing::debug;

use crate::mesh::{SphereMesh, TriangleMesh};
use crate::resolution::equator_sides;

/// Unit-radius equator ring with `sides + 1` points
///
/// Point `n` sits at angle `n·360/sides` degrees, so the last point repeats
/// the first. The cap polygon never references that closing duplicate; it is
/// kept so vertex counts stay `sides + 1` per ring.
pub fn equator_ring(sides: usize) -> Vec<DVec3> {
    (0..=sides)
        .map(|n| {
            let t = (n as f64 * 360.0 / sides as f64).to_radians();
            DVec3::new(t.cos(), t.sin(), 0.0)
        })
        .collect()
}

/// Close the refined upper half-octahedron with a flat equatorial polygon
///
/// Appends `4·2^levels + 1` ring vertices after the existing ones and sets the
/// cap to the first `4·2^levels` of them, in order of increasing angle.
pub fn cap_hemisphere(mesh: TriangleMesh, levels: u32) -> SphereMesh {
    let sides = equator_sides(levels);
    let TriangleMesh {
        mut vertices,
        triangles,
    } = mesh;

    let start = vertices.len();
    vertices.extend(equator_ring(sides));
    let cap: Vec<usize> = (start..start + sides).collect();

    debug!(
        "Capped hemisphere: {}-gon at vertices {}..{}",
        sides,
        start,
        start + sides
    );

    SphereMesh {
        vertices,
        triangles,
        cap: Some(cap),
    }
}
