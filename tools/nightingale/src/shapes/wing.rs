//! Folded wings and scapular feather rows

use glam::Vec3;
use tracing::debug;

use super::{mirror, require_elements};
use crate::error::BuildError;
use crate::mesh::{generate_box, Mesh};
use crate::params::{FeatherRowParams, Side, WingParams};
use crate::scene::{GroupNode, Primitive, ShapeNode};

/// One row of thin box feathers named `{name}.{i}`
pub fn build_feather_row(name: String, row: &FeatherRowParams, side: Side) -> Result<GroupNode, BuildError> {
    require_elements(&name, row.count)?;

    let mut group = GroupNode::new(&name);
    for i in 0..row.count {
        let mesh: Mesh = generate_box(row.thickness, row.height.at(i), row.length.at(i));
        let position = Vec3::new(row.x.at(i), row.y.at(i), row.z.at(i));
        let feather = ShapeNode::new(format!("{name}.{i}"), Primitive::Box, mesh, row.material)
            .at(mirror(position, side))
            .rotated(Vec3::new(0.0, row.yaw.at(i) * side.sign(), 0.0))
            .shadows(row.cast_shadow, row.receive_shadow);
        group.push(feather);
    }

    debug!(row = %name, count = row.count, "built feather row");
    Ok(group)
}

/// Folded wing on one side of the body
pub fn build_wing(params: &WingParams, side: Side) -> Result<GroupNode, BuildError> {
    let base = side.name("wing");
    let mut group = GroupNode::new(&base);

    match params {
        WingParams::Panels { panels } => {
            require_elements(&base, panels.len() as u32)?;
            for (i, panel) in panels.iter().enumerate() {
                let mesh: Mesh = generate_box(panel.size.x, panel.size.y, panel.size.z);
                group.push(
                    ShapeNode::new(format!("{base}.panel.{i}"), Primitive::Box, mesh, panel.material)
                        .at(mirror(panel.position, side))
                        .rotated(Vec3::new(0.0, panel.yaw * side.sign(), 0.0)),
                );
            }
        }
        WingParams::Layered { rows } => {
            require_elements(&base, rows.len() as u32)?;
            for row in rows {
                group.push(build_feather_row(format!("{base}.{}", row.name), row, side)?);
            }
        }
    }

    Ok(group)
}

/// Back feathers outside the wing group
pub fn build_scapulars(row: &FeatherRowParams, side: Side) -> Result<GroupNode, BuildError> {
    build_feather_row(side.name(&row.name), row, side)
}
