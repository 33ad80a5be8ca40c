//! Mesh generation and modification

mod lathe;
mod primitives;
mod types;

pub mod modifiers;
pub mod vertex_color;

pub use lathe::{generate_capsule, generate_lathe};
pub use primitives::{generate_box, generate_cone, generate_cylinder, generate_sphere, generate_torus};
pub use types::{Mesh, MeshBuilder};

// Convenience re-exports
pub use modifiers::{MeshApply, MeshModifier, Transform};
pub use vertex_color::{speckle_noise, VertexGradient};
