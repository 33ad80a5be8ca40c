//! Beak, tomial edges and nares

use super::{ellipsoid, mirror};
use crate::error::BuildError;
use crate::mesh::{generate_capsule, generate_cone, generate_lathe, Mesh};
use crate::params::{BeakParams, EllipsoidParams, MandibleParams, Side, TomialEdgeParams};
use crate::scene::{GroupNode, Node, Primitive, ShapeNode};
use glam::Vec3;

/// The beak subtree plus the name of the part the idle loop rolls
#[derive(Debug, Clone)]
pub struct BeakNodes {
    pub node: Node,
    pub animated: String,
}

fn mandible(name: &str, params: &MandibleParams) -> Result<ShapeNode, BuildError> {
    let mesh: Mesh = generate_lathe(&params.profile, params.segments).ok_or_else(|| {
        BuildError::ProfileTooShort {
            part: name.to_string(),
            points: params.profile.len(),
        }
    })?;
    Ok(ShapeNode::new(name, Primitive::Lathe, mesh, params.material)
        .at(params.position)
        .rotated(params.rotation)
        .shadows(params.cast_shadow, false))
}

pub fn build_beak(params: &BeakParams) -> Result<BeakNodes, BuildError> {
    match params {
        BeakParams::Cone {
            cone,
            position,
            rotation,
            material,
        } => {
            let mesh: Mesh = generate_cone(cone.radius, cone.height, cone.segments);
            let node = ShapeNode::new("beak", Primitive::Cone, mesh, *material)
                .at(*position)
                .rotated(*rotation);
            Ok(BeakNodes {
                node: node.into(),
                animated: "beak".to_string(),
            })
        }
        BeakParams::Lathe(params) => Ok(BeakNodes {
            node: mandible("beak", params)?.into(),
            animated: "beak".to_string(),
        }),
        BeakParams::Mandibles { upper, lower } => {
            let group = GroupNode::new("beak")
                .with_child(mandible("beak.upper", upper)?)
                .with_child(mandible("beak.lower", lower)?);
            Ok(BeakNodes {
                node: group.into(),
                animated: "beak.lower".to_string(),
            })
        }
    }
}

/// Dark cutting-edge line along one side of the beak
pub fn build_tomial_edge(params: &TomialEdgeParams, side: Side) -> ShapeNode {
    let capsule = &params.capsule;
    let mesh: Mesh = generate_capsule(
        capsule.radius,
        capsule.length,
        capsule.cap_segments,
        capsule.radial_segments,
    );
    let rotation = Vec3::new(
        params.rotation.x,
        params.rotation.y * side.sign(),
        params.rotation.z,
    );
    ShapeNode::new(side.name("tomial_edge"), Primitive::Capsule, mesh, params.material)
        .at(mirror(params.position, side))
        .rotated(rotation)
        .shadows(false, false)
}

pub fn build_nostril(params: &EllipsoidParams, side: Side) -> ShapeNode {
    ellipsoid(side.name("naris"), params, Some(side)).shadows(false, false)
}
