//! Flat vertex buffers for rendering engines

use super::SphereMesh;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Engine-agnostic mesh data output
///
/// Contains raw vertex data suitable for any rendering engine:
/// - Bevy: Convert to `Mesh` with a position attribute and `Indices::U32`
/// - Godot: Convert to `ArrayMesh`
/// - wgpu: Use directly as vertex buffers
///
/// Triangles are counter-clockwise when viewed from outside, the common
/// front-face convention of real-time renderers.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Vertex positions (3D coordinates)
    pub positions: Vec<[f32; 3]>,
    /// Triangle indices
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if mesh is empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl SphereMesh {
    /// Convert to flat `f32` buffers for rendering
    ///
    /// Every triangle has its winding reversed, and the hemisphere cap is
    /// expanded into a triangle fan around its first vertex.
    pub fn to_mesh_data(&self) -> MeshData {
        let positions = self
            .vertices
            .iter()
            .map(|v| v.as_vec3().to_array())
            .collect();

        let fan_len = self.cap.as_ref().map_or(0, |cap| cap.len().saturating_sub(2));
        let mut indices = Vec::with_capacity(3 * (self.triangles.len() + fan_len));

        for &[a, b, c] in &self.triangles {
            indices.extend([a as u32, c as u32, b as u32]);
        }

        if let Some(cap) = &self.cap {
            for pair in cap.windows(2).skip(1) {
                indices.extend([cap[0] as u32, pair[1] as u32, pair[0] as u32]);
            }
        }

        MeshData { positions, indices }
    }
}
