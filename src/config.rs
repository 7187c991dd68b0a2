//! Sphere Configuration and Builder
//!
//! This module provides validated configuration for [`OctSphere`](crate::OctSphere)
//! generation. The free functions in [`generation`](crate::generation) take raw
//! numbers and trust them; the builder is where inputs get checked.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SphereError};
use crate::resolution::Resolution;

/// Hard ceiling for [`SphereConfigBuilder::max_levels`]
///
/// Twelve passes already produce 8·4^12 (~134 million) triangles.
pub const LEVELS_CEILING: u32 = 12;

/// Sphere size given as radius and/or diameter
///
/// Either may be set. A positive radius takes precedence over the diameter,
/// and the radius defaults to 1 if neither is set.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SphereSize {
    /// Requested radius
    pub radius: Option<f64>,
    /// Requested diameter
    pub diameter: Option<f64>,
}

impl SphereSize {
    /// Effective radius
    #[inline]
    pub fn radius(&self) -> f64 {
        crate::generation::resolve_radius(self.radius, self.diameter)
    }
}

/// Configuration for sphere generation
///
/// # Example
///
/// ```rust
/// use octsphere::*;
///
/// let config = SphereConfigBuilder::new()
///     .diameter(20.0)
///     .unwrap()
///     .hemisphere(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.radius(), 10.0);
/// # #[cfg(feature = "serde")]
/// # {
/// let json = serde_json::to_string(&config).unwrap();
/// let restored: SphereConfig = serde_json::from_str(&json).unwrap();
/// assert_eq!(config, restored);
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereConfig {
    /// Radius and/or diameter
    pub size: SphereSize,

    /// Generate only the upper half, closed by a flat equatorial cap
    pub hemisphere: bool,

    /// Resolution used to pick the subdivision level
    pub resolution: Resolution,

    /// Largest subdivision level generation will accept
    ///
    /// Selecting more levels than this fails with `TooManyLevels` instead of
    /// allocating an enormous mesh.
    pub max_levels: u32,
}

impl SphereConfig {
    /// Get the effective radius for this configuration
    #[inline]
    pub fn radius(&self) -> f64 {
        self.size.radius()
    }

    /// Fragment hint for this configuration's radius
    #[inline]
    pub fn fragments(&self) -> f64 {
        self.resolution.fragments(self.radius())
    }

    /// Subdivision level this configuration selects
    #[inline]
    pub fn levels(&self) -> u32 {
        self.resolution.levels(self.radius())
    }
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            size: SphereSize::default(),
            hemisphere: false,
            resolution: Resolution::default(),
            max_levels: 8,
        }
    }
}

/// Builder for creating SphereConfig with validation
///
/// # Example
///
/// ```rust
/// use octsphere::*;
///
/// // Use defaults: unit sphere, angular resolution
/// let config = SphereConfigBuilder::new().build().unwrap();
///
/// // Customize
/// let config = SphereConfigBuilder::new()
///     .radius(5.0)
///     .unwrap()
///     .fragments(64.0)
///     .unwrap()
///     .max_levels(6)
///     .unwrap()
///     .build()
///     .unwrap();
/// assert_eq!(config.levels(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct SphereConfigBuilder {
    config: SphereConfig,
}

impl SphereConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - radius: 1 (neither radius nor diameter set)
    /// - hemisphere: false
    /// - resolution: 12° minimum angle, 2 units minimum fragment size
    /// - max_levels: 8
    pub fn new() -> Self {
        Self {
            config: SphereConfig::default(),
        }
    }

    /// Set the radius
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the radius is not finite and positive
    pub fn radius(mut self, radius: f64) -> Result<Self> {
        self.config.size.radius = Some(positive("radius", radius)?);
        Ok(self)
    }

    /// Set the diameter
    ///
    /// Ignored when a radius is also set.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the diameter is not finite and positive
    pub fn diameter(mut self, diameter: f64) -> Result<Self> {
        self.config.size.diameter = Some(positive("diameter", diameter)?);
        Ok(self)
    }

    /// Generate a hemisphere instead of a full sphere
    pub fn hemisphere(mut self, hemisphere: bool) -> Self {
        self.config.hemisphere = hemisphere;
        self
    }

    /// Use a fixed fragment count as the resolution hint
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the count is not finite and positive
    pub fn fragments(mut self, fragments: f64) -> Result<Self> {
        self.config.resolution = Resolution::Fragments(positive("fragment count", fragments)?);
        Ok(self)
    }

    /// Derive the fragment count from a minimum angle and fragment size
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if either value is not finite and positive
    pub fn angular(mut self, min_angle: f64, min_size: f64) -> Result<Self> {
        self.config.resolution = Resolution::Angular {
            min_angle: positive("minimum angle", min_angle)?,
            min_size: positive("minimum size", min_size)?,
        };
        Ok(self)
    }

    /// Set the largest subdivision level generation will accept
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `levels` exceeds [`LEVELS_CEILING`]
    pub fn max_levels(mut self, levels: u32) -> Result<Self> {
        if levels > LEVELS_CEILING {
            return Err(SphereError::InvalidConfig(format!(
                "max levels must be <= {} (got {})",
                LEVELS_CEILING, levels
            )));
        }
        self.config.max_levels = levels;
        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> Result<SphereConfig> {
        Ok(self.config)
    }
}

impl Default for SphereConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn positive(what: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SphereError::InvalidConfig(format!(
            "{} must be finite and positive (got {})",
            what, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = SphereConfigBuilder::new().build().unwrap();
        assert_eq!(config, SphereConfig::default());
        assert_eq!(config.radius(), 1.0);
        assert!(!config.hemisphere);
        assert_eq!(config.max_levels, 8);
        assert_eq!(config.levels(), 0);
    }

    #[test]
    fn test_radius_over_diameter() {
        let config = SphereConfigBuilder::new()
            .diameter(10.0)
            .unwrap()
            .radius(2.0)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.radius(), 2.0);

        let config = SphereConfigBuilder::new().diameter(10.0).unwrap().build().unwrap();
        assert_eq!(config.radius(), 5.0);
    }

    #[test]
    fn test_builder_rejects_bad_size() {
        assert!(SphereConfigBuilder::new().radius(0.0).is_err());
        assert!(SphereConfigBuilder::new().radius(-1.0).is_err());
        assert!(SphereConfigBuilder::new().radius(f64::NAN).is_err());
        assert!(SphereConfigBuilder::new().diameter(f64::INFINITY).is_err());
    }

    #[test]
    fn test_builder_resolution() {
        let config = SphereConfigBuilder::new().fragments(10.0).unwrap().build().unwrap();
        assert_eq!(config.resolution, Resolution::Fragments(10.0));
        assert_eq!(config.levels(), 1);

        let config = SphereConfigBuilder::new()
            .radius(100.0)
            .unwrap()
            .angular(6.0, 1.0)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.fragments(), 60.0);
        assert_eq!(config.levels(), 4);
    }

    #[test]
    fn test_builder_rejects_bad_resolution() {
        assert!(SphereConfigBuilder::new().fragments(0.0).is_err());
        assert!(SphereConfigBuilder::new().angular(0.0, 2.0).is_err());
        assert!(SphereConfigBuilder::new().angular(12.0, -2.0).is_err());
    }

    #[test]
    fn test_builder_max_levels() {
        let config = SphereConfigBuilder::new().max_levels(3).unwrap().build().unwrap();
        assert_eq!(config.max_levels, 3);

        let err = SphereConfigBuilder::new().max_levels(LEVELS_CEILING + 1).unwrap_err();
        assert!(matches!(err, SphereError::InvalidConfig(_)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serialization() {
        let config = SphereConfigBuilder::new()
            .radius(3.0)
            .unwrap()
            .hemisphere(true)
            .fragments(32.0)
            .unwrap()
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let restored: SphereConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }
}
