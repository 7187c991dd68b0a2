//! Octahedron-based geodesic sphere meshes
//!
//! Builds triangulated spheres and hemispheres by recursively splitting the
//! faces of an octahedron and projecting the new vertices onto the sphere.
//! The number of passes is chosen so the equator polygon has the `4·2^n`
//! sides closest to a requested fragment count.
//!
//! # Quick Start
//!
//! ```rust
//! use octsphere::*;
//!
//! // Direct call: radius 5, full sphere, aim for a 30-sided equator
//! let mesh = octsphere(Some(5.0), None, false, 30.0);
//! assert_eq!(mesh.triangle_count(), 8 * 4usize.pow(3));
//!
//! // Configured call with validation
//! let config = SphereConfigBuilder::new()
//!     .radius(5.0).unwrap()
//!     .hemisphere(true)
//!     .build().unwrap();
//!
//! let sphere = OctSphere::generate(config).unwrap();
//! let data = sphere.mesh().to_mesh_data();
//! println!("Generated {} triangles", data.triangle_count());
//! ```
//!
//! # Features
//!
//! - `serde`: Enables serialization support for configuration and meshes

// Modules
pub mod error;
pub mod config;
pub mod resolution;
pub mod generation;
pub mod mesh;
pub mod sphere;

// Re-export core types for convenience
pub use error::{SphereError, Result};
pub use config::{SphereConfig, SphereConfigBuilder, SphereSize, LEVELS_CEILING};
pub use resolution::{Resolution, select_levels, equator_sides};
pub use generation::{octsphere, assemble, unit_sphere};
pub use mesh::{TriangleMesh, SphereMesh, MeshData};
pub use sphere::OctSphere;

// Re-export glam::DVec3 for convenience
pub use glam::DVec3;
