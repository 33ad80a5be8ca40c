//! Tail: a single cone or a fan of box feathers

use glam::Vec3;

use super::require_elements;
use crate::error::BuildError;
use crate::mesh::{generate_box, generate_cone, Mesh};
use crate::params::{TailFanParams, TailParams};
use crate::scene::{GroupNode, Node, Primitive, ShapeNode};

impl TailFanParams {
    /// Offset of feather `i` from the fan center, in feather widths
    #[inline]
    pub fn offset(&self, i: u32) -> f32 {
        i as f32 - (self.count as f32 - 1.0) * 0.5
    }

    /// Triangular length profile peaking at the center feather
    #[inline]
    pub fn length(&self, i: u32) -> f32 {
        self.center_length - self.offset(i).abs() * self.taper
    }
}

fn build_fan(fan: &TailFanParams) -> Result<GroupNode, BuildError> {
    require_elements("tail", fan.count)?;

    let mut group = GroupNode::new("tail").at(fan.position).rotated(fan.rotation);
    for i in 0..fan.count {
        let offset = fan.offset(i);
        let length = fan.length(i);
        if length <= 0.0 {
            return Err(BuildError::InvalidParameter {
                part: format!("tail.{i}"),
                reason: format!("taper leaves feather length {length}"),
            });
        }

        let mesh: Mesh = generate_box(fan.width, fan.thickness, length);
        group.push(
            ShapeNode::new(format!("tail.{i}"), Primitive::Box, mesh, fan.material)
                .at(Vec3::new(offset * fan.spacing, fan.y, fan.z - length * 0.5))
                .rotated(Vec3::new(0.0, offset * fan.yaw_step * fan.yaw_scale, 0.0))
                .shadows(true, true),
        );
    }
    Ok(group)
}

/// The tail node is always named `tail`; it is what the idle loop flicks
pub fn build_tail(params: &TailParams) -> Result<Node, BuildError> {
    match params {
        TailParams::Cone {
            cone,
            position,
            rotation,
            material,
        } => {
            let mesh: Mesh = generate_cone(cone.radius, cone.height, cone.segments);
            Ok(ShapeNode::new("tail", Primitive::Cone, mesh, *material)
                .at(*position)
                .rotated(*rotation)
                .into())
        }
        TailParams::Fan(fan) => Ok(build_fan(fan)?.into()),
    }
}
