//! Mesh modifiers
//!
//! Modifiers bake changes into a `Mesh` in place. They are how geometry-level
//! edits (a sphere stretched into a body, a vertex gradient painted on) are
//! applied before a mesh is frozen inside a shape.
//!
//! # Fluent API
//!
//! ```no_run
//! use nightingale::mesh::*;
//!
//! let mut body: Mesh = generate_sphere(1.15, 48, 36);
//! body.apply(Transform::scale(1.28, 1.02, 2.08));
//! ```

use glam::{Mat4, Vec3};

use super::types::Mesh;

/// Trait for mesh modifiers
pub trait MeshModifier {
    /// Apply this modifier to a mesh, modifying it in place
    fn apply(&self, mesh: &mut Mesh);
}

/// Extension trait for fluent modifier application
pub trait MeshApply {
    /// Apply a modifier and return `&mut Self` for chaining
    fn apply<M: MeshModifier>(&mut self, modifier: M) -> &mut Self;
}

impl MeshApply for Mesh {
    fn apply<M: MeshModifier>(&mut self, modifier: M) -> &mut Self {
        modifier.apply(self);
        self
    }
}

/// Linear transform baked into positions and normals
///
/// Normals go through the inverse transpose and are renormalized.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    matrix: Mat4,
}

impl Transform {
    /// Per-axis stretch, used to bake ellipsoids
    pub fn scale(x: f32, y: f32, z: f32) -> Self {
        Self::scale_vec(Vec3::new(x, y, z))
    }

    pub fn scale_vec(s: Vec3) -> Self {
        Self {
            matrix: Mat4::from_scale(s),
        }
    }
}

impl MeshModifier for Transform {
    fn apply(&self, mesh: &mut Mesh) {
        let normal_matrix = self.matrix.inverse().transpose();

        for pos in &mut mesh.positions {
            *pos = self.matrix.transform_point3(Vec3::from(*pos)).to_array();
        }

        for norm in &mut mesh.normals {
            *norm = normal_matrix
                .transform_vector3(Vec3::from(*norm))
                .normalize_or_zero()
                .to_array();
        }
    }
}
