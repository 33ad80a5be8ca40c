//! Legs and feet gripping the perch

use glam::Vec3;

use super::{mirror, require_elements};
use crate::error::BuildError;
use crate::mesh::{generate_cone, generate_cylinder, Mesh};
use crate::params::{ConeParams, LegParams, RearToeParams, Side};
use crate::scene::{GroupNode, Primitive, ShapeNode};

fn cone_mesh(cone: &ConeParams) -> Mesh {
    generate_cone(cone.radius, cone.height, cone.segments)
}

fn rear(name: String, params: &RearToeParams, side: Side) -> ShapeNode {
    ShapeNode::new(name, Primitive::Cone, cone_mesh(&params.cone), params.material)
        .at(mirror(params.offset, side))
        .rotated(Vec3::new(params.pitch, 0.0, 0.0))
        .scaled(Vec3::splat(params.scale))
}

/// Front toes with their claws plus the rear toe, in leg space
pub fn build_foot(params: &LegParams, side: Side) -> Result<GroupNode, BuildError> {
    let base = side.name("foot");
    let toes = &params.toes;
    require_elements(&base, toes.count)?;

    let mut group = GroupNode::new(&base);
    let center = (toes.count as f32 - 1.0) * 0.5;
    let toe_mesh = cone_mesh(&toes.cone);

    for i in 0..toes.count {
        let x = (i as f32 - center) * toes.spacing;
        group.push(
            ShapeNode::new(format!("{base}.toe.{i}"), Primitive::Cone, toe_mesh.clone(), toes.material)
                .at(mirror(Vec3::new(x, toes.y, toes.z), side))
                .rotated(Vec3::new(toes.pitch, 0.0, 0.0)),
        );
        if let Some(claw) = &params.claws {
            group.push(
                ShapeNode::new(format!("{base}.claw.{i}"), Primitive::Cone, cone_mesh(&claw.cone), claw.material)
                    .at(mirror(Vec3::new(x, claw.y, claw.z), side))
                    .rotated(Vec3::new(claw.pitch, 0.0, 0.0))
                    .shadows(false, false),
            );
        }
    }

    group.push(rear(format!("{base}.rear_toe"), &params.rear_toe, side));
    if let Some(claw) = &params.rear_claw {
        group.push(rear(format!("{base}.rear_claw"), claw, side).shadows(false, false));
    }

    Ok(group)
}

/// Tarsus and foot under one group placed beside the body
pub fn build_leg(params: &LegParams, side: Side) -> Result<GroupNode, BuildError> {
    let base = side.name("leg");
    let tarsus = &params.tarsus;
    let mesh: Mesh = generate_cylinder(tarsus.radius_bottom, tarsus.radius_top, tarsus.height, tarsus.segments);

    let group = GroupNode::new(&base)
        .at(mirror(params.position, side))
        .with_child(
            ShapeNode::new(format!("{base}.tarsus"), Primitive::Cylinder, mesh, tarsus.material)
                .at(tarsus.position)
                .rotated(Vec3::new(tarsus.pitch, 0.0, 0.0))
                .shadows(true, true),
        )
        .with_child(build_foot(params, side)?);
    Ok(group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{presets::Preset, LegParams};
    use crate::scene::Node;

    fn legs() -> LegParams {
        Preset::V7.params().bird.legs
    }

    #[test]
    fn test_foot_has_three_toes_and_rear_toe() {
        let foot = build_foot(&legs(), Side::Left).unwrap();
        let names: Vec<&str> = foot.children().iter().map(Node::name).collect();
        assert_eq!(
            names,
            vec![
                "foot.left.toe.0",
                "foot.left.claw.0",
                "foot.left.toe.1",
                "foot.left.claw.1",
                "foot.left.toe.2",
                "foot.left.claw.2",
                "foot.left.rear_toe",
                "foot.left.rear_claw",
            ]
        );
    }

    #[test]
    fn test_toes_spread_around_center() {
        let foot = build_foot(&legs(), Side::Left).unwrap();
        let xs: Vec<f32> = foot
            .children()
            .iter()
            .filter(|n| n.name().contains(".toe."))
            .map(|n| n.transform().position.x)
            .collect();
        assert!((xs[0] + 0.085).abs() < 1e-6);
        assert_eq!(xs[1], 0.0);
        assert!((xs[2] - 0.085).abs() < 1e-6);
    }

    #[test]
    fn test_rear_toe_mirrors() {
        let left = build_leg(&legs(), Side::Left).unwrap();
        let right = build_leg(&legs(), Side::Right).unwrap();
        let left: Node = left.into();
        let right: Node = right.into();

        assert_eq!(left.transform().position.x, 0.22);
        assert_eq!(right.transform().position.x, -0.22);

        let l = left.find("foot.left.rear_toe").unwrap().transform();
        let r = right.find("foot.right.rear_toe").unwrap().transform();
        assert_eq!(l.position.x, -0.02);
        assert_eq!(r.position.x, 0.02);
        assert_eq!(l.scale, Vec3::splat(0.9));
    }

    #[test]
    fn test_no_toes_is_rejected() {
        let mut params = legs();
        params.toes.count = 0;
        let err = build_leg(&params, Side::Left).unwrap_err();
        assert_eq!(
            err,
            BuildError::EmptyRow {
                part: "foot.left".to_string()
            }
        );
    }
}
