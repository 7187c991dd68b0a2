//! OctSphere main structure

use tracing::info;

use crate::config::SphereConfig;
use crate::error::{Result, SphereError};
use crate::generation::unit_sphere;
use crate::mesh::SphereMesh;
use crate::resolution::equator_sides;

/// A generated octahedron-based sphere or hemisphere
///
/// Holds the configuration it was generated from, the selected subdivision
/// level, and the finished mesh at the configured radius.
///
/// # Examples
///
/// ```
/// use octsphere::*;
///
/// let config = SphereConfigBuilder::new()
///     .radius(10.0)
///     .unwrap()
///     .fragments(32.0)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let sphere = OctSphere::generate(config).unwrap();
/// assert_eq!(sphere.levels(), 3);
/// assert_eq!(sphere.equator_sides(), 32);
/// assert_eq!(sphere.mesh().triangle_count(), 8 * 64);
/// ```
#[derive(Debug, Clone)]
pub struct OctSphere {
    /// Configuration used to generate this sphere
    config: SphereConfig,

    /// Subdivision passes applied to the base octahedron
    levels: u32,

    /// Finished mesh, scaled to the configured radius
    mesh: SphereMesh,
}

impl OctSphere {
    /// Generate a sphere from configuration
    ///
    /// # Errors
    ///
    /// Returns `TooManyLevels` if the configured resolution selects more
    /// subdivision levels than `config.max_levels`.
    pub fn generate(config: SphereConfig) -> Result<Self> {
        let radius = config.radius();
        let levels = config.levels();
        if levels > config.max_levels {
            return Err(SphereError::TooManyLevels {
                levels,
                max: config.max_levels,
            });
        }

        let mut mesh = unit_sphere(levels, config.hemisphere);
        mesh.scale(radius);

        info!(
            "Generated {} (radius {}, {} levels): {} vertices, {} faces",
            if config.hemisphere { "hemisphere" } else { "sphere" },
            radius,
            levels,
            mesh.vertex_count(),
            mesh.face_count()
        );

        Ok(Self {
            config,
            levels,
            mesh,
        })
    }

    /// Get the configuration used to generate this sphere
    #[inline]
    pub fn config(&self) -> &SphereConfig {
        &self.config
    }

    /// Get the number of subdivision passes applied
    #[inline]
    pub fn levels(&self) -> u32 {
        self.levels
    }

    /// Get the number of sides of the equator polygon
    #[inline]
    pub fn equator_sides(&self) -> usize {
        equator_sides(self.levels)
    }

    /// Get the sphere radius
    #[inline]
    pub fn radius(&self) -> f64 {
        self.config.radius()
    }

    /// Get the generated mesh
    #[inline]
    pub fn mesh(&self) -> &SphereMesh {
        &self.mesh
    }

    /// Take ownership of the generated mesh
    pub fn into_mesh(self) -> SphereMesh {
        self.mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SphereConfigBuilder;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sphere_generation() {
        let config = SphereConfigBuilder::new()
            .radius(4.0)
            .unwrap()
            .fragments(8.0)
            .unwrap()
            .build()
            .unwrap();

        let sphere = OctSphere::generate(config).unwrap();
        assert_eq!(sphere.levels(), 1);
        assert_eq!(sphere.radius(), 4.0);
        assert_eq!(sphere.mesh().vertex_count(), 48);
        assert_eq!(sphere.mesh().face_count(), 32);
        for v in &sphere.mesh().vertices {
            assert_abs_diff_eq!(v.length(), 4.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_hemisphere_generation() {
        let config = SphereConfigBuilder::new()
            .diameter(2.0)
            .unwrap()
            .hemisphere(true)
            .fragments(16.0)
            .unwrap()
            .build()
            .unwrap();

        let sphere = OctSphere::generate(config).unwrap();
        let mesh = sphere.mesh();
        assert_eq!(sphere.equator_sides(), 16);
        assert_eq!(mesh.triangle_count(), 64);
        assert_eq!(mesh.face_count(), 65);
        assert!(mesh.vertices.iter().all(|v| v.z >= -1e-12));
    }

    #[test]
    fn test_too_many_levels() {
        let config = SphereConfigBuilder::new()
            .fragments(1024.0)
            .unwrap()
            .max_levels(4)
            .unwrap()
            .build()
            .unwrap();

        let err = OctSphere::generate(config).unwrap_err();
        assert_eq!(err, SphereError::TooManyLevels { levels: 8, max: 4 });
    }

    #[test]
    fn test_matches_assemble() {
        let config = SphereConfigBuilder::new()
            .radius(3.0)
            .unwrap()
            .hemisphere(true)
            .fragments(12.0)
            .unwrap()
            .build()
            .unwrap();

        let sphere = OctSphere::generate(config).unwrap();
        assert_eq!(sphere.levels(), 2);
        assert_eq!(*sphere.mesh(), crate::assemble(3.0, true, 12.0));
    }

    #[test]
    fn test_into_mesh() {
        let sphere = OctSphere::generate(SphereConfig::default()).unwrap();
        let config = *sphere.config();
        let mesh = sphere.into_mesh();
        assert_eq!(config, SphereConfig::default());
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 8);
    }
}
