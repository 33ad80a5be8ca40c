//! Shape builders
//!
//! Each builder turns one part of a [`BirdParams`](crate::params::BirdParams)
//! table into a node. Builders are pure: same parameters in, same subtree
//! out. Bilateral builders take a [`Side`] and are called once per side, so a
//! part is never described twice.

mod beak;
mod body;
mod eye;
mod head;
mod leg;
mod tail;
mod wing;

use glam::Vec3;

pub use beak::{build_beak, build_nostril, build_tomial_edge, BeakNodes};
pub use body::{build_belly, build_body};
pub use eye::{build_eye, build_supercilium};
pub use head::{build_brow, build_cheek, build_head};
pub use leg::{build_foot, build_leg};
pub use tail::build_tail;
pub use wing::{build_feather_row, build_scapulars, build_wing};

use crate::error::BuildError;
use crate::mesh::{generate_sphere, Mesh, MeshApply, Transform};
use crate::params::{EllipsoidParams, Side};
use crate::scene::{Primitive, ShapeNode};

/// Reflect a left-side offset onto `side`
#[inline]
pub(crate) fn mirror(v: Vec3, side: Side) -> Vec3 {
    Vec3::new(v.x * side.sign(), v.y, v.z)
}

/// Sphere with its stretch baked into the vertices
pub(crate) fn ellipsoid_mesh(params: &EllipsoidParams) -> Mesh {
    let mut mesh: Mesh = generate_sphere(params.radius, params.width_segments, params.height_segments);
    if params.stretch != Vec3::ONE {
        mesh.apply(Transform::scale_vec(params.stretch));
    }
    mesh
}

/// Ellipsoid shape at its (optionally mirrored) position with its node scale
pub(crate) fn ellipsoid(name: impl Into<String>, params: &EllipsoidParams, side: Option<Side>) -> ShapeNode {
    let position = match side {
        Some(side) => mirror(params.position, side),
        None => params.position,
    };
    ShapeNode::new(name, Primitive::Sphere, ellipsoid_mesh(params), params.material)
        .at(position)
        .scaled(params.scale)
}

/// Reject repeated parts with nothing to repeat
pub(crate) fn require_elements(part: &str, count: u32) -> Result<(), BuildError> {
    if count == 0 {
        return Err(BuildError::EmptyRow {
            part: part.to_string(),
        });
    }
    Ok(())
}
