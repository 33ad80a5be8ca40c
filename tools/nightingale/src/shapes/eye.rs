//! Eyes and the pale supercilium above them

use glam::Vec3;
use std::f32::consts::PI;

use super::{ellipsoid, ellipsoid_mesh, mirror};
use crate::error::BuildError;
use crate::mesh::{generate_capsule, generate_torus, Mesh};
use crate::params::{EyeParams, RingParams, Side, SuperciliumParams};
use crate::scene::{GroupNode, Primitive, ShapeNode};

fn ring(name: String, params: &RingParams, side: Side) -> ShapeNode {
    let torus = &params.torus;
    let mesh: Mesh = generate_torus(
        torus.radius,
        torus.tube,
        torus.radial_segments,
        torus.tubular_segments,
        torus.arc,
    );
    let rotation = Vec3::new(
        params.rotation.x,
        params.rotation.y,
        params.rotation.z * side.sign(),
    );
    ShapeNode::new(name, Primitive::Torus, mesh, params.material)
        .rotated(rotation)
        .shadows(params.cast_shadow, false)
}

/// Eyeball with its ring, highlight and lid, grouped at the eye center
pub fn build_eye(params: &EyeParams, side: Side) -> GroupNode {
    let base = side.name("eye");
    let eyeball = &params.eyeball;

    let mut group = GroupNode::new(&base).at(mirror(eyeball.position, side));
    group.push(
        ShapeNode::new(
            format!("{base}.ball"),
            Primitive::Sphere,
            ellipsoid_mesh(eyeball),
            eyeball.material,
        )
        .scaled(eyeball.scale)
        .shadows(params.cast_shadow, false),
    );

    if let Some(ring_params) = &params.ring {
        group.push(ring(format!("{base}.ring"), ring_params, side));
    }
    if let Some(highlight) = &params.highlight {
        group.push(ellipsoid(format!("{base}.highlight"), highlight, Some(side)).shadows(false, false));
    }
    if let Some(lid) = &params.lid {
        group.push(ring(format!("{base}.lid"), lid, side));
    }

    group
}

/// Arc of capsule segments above one eye
pub fn build_supercilium(params: &SuperciliumParams, side: Side) -> Result<GroupNode, BuildError> {
    let base = side.name("supercilium");
    if params.segments < 2 {
        return Err(BuildError::InvalidParameter {
            part: base,
            reason: format!("needs at least 2 segments, got {}", params.segments),
        });
    }

    let capsule = &params.capsule;
    let mesh: Mesh = generate_capsule(
        capsule.radius,
        capsule.length,
        capsule.cap_segments,
        capsule.radial_segments,
    );

    let mut group = GroupNode::new(&base);
    let last = (params.segments - 1) as f32;
    for i in 0..params.segments {
        let t = i as f32 / last - 0.5;
        let position = Vec3::new(
            params.center_x + t * params.spread,
            params.y + (t * PI).sin() * params.arch,
            params.z + (t * PI).cos() * params.depth,
        );
        group.push(
            ShapeNode::new(format!("{base}.{i}"), Primitive::Capsule, mesh.clone(), params.material)
                .at(mirror(position, side))
                .rotated(params.rotation)
                .shadows(false, false),
        );
    }

    Ok(group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::params::{CapsuleParams, EllipsoidParams, MaterialParams, TorusParams};
    use crate::scene::Node;

    fn material(hex: u32) -> MaterialParams {
        MaterialParams::new(Rgb::hex(hex), 0.9, 0.05)
    }

    fn eye_params() -> EyeParams {
        let torus = TorusParams {
            radius: 0.14,
            tube: 0.018,
            radial_segments: 8,
            tubular_segments: 24,
            arc: PI * 0.9,
        };
        EyeParams {
            eyeball: EllipsoidParams::new(0.085, 18, 14, material(0x111111)).at(0.21, 1.09, 0.92),
            cast_shadow: true,
            ring: None,
            highlight: Some(EllipsoidParams::new(0.024, 10, 8, material(0xffffff)).at(0.028, 0.02, 0.02)),
            lid: Some(RingParams {
                torus,
                rotation: Vec3::new(0.0, PI / 2.0, 0.6),
                material: material(0x6f5030),
                cast_shadow: false,
            }),
        }
    }

    fn supercilium(segments: u32) -> SuperciliumParams {
        SuperciliumParams {
            segments,
            center_x: 0.12,
            spread: 0.3,
            y: 1.15,
            arch: 0.03,
            z: 0.86,
            depth: 0.08,
            capsule: CapsuleParams {
                radius: 0.007,
                length: 0.02,
                cap_segments: 2,
                radial_segments: 4,
            },
            rotation: Vec3::new(0.0, PI / 2.0, 0.0),
            material: material(0xefe6cf),
        }
    }

    fn child<'a>(group: &'a GroupNode, name: &str) -> &'a Node {
        group.children().iter().find(|n| n.name() == name).unwrap()
    }

    #[test]
    fn test_eye_mirrors_offsets_and_lid_roll() {
        let params = eye_params();
        let left = build_eye(&params, Side::Left);
        let right = build_eye(&params, Side::Right);

        assert_eq!(left.transform.position, Vec3::new(0.21, 1.09, 0.92));
        assert_eq!(right.transform.position, Vec3::new(-0.21, 1.09, 0.92));

        let hl = child(&right, "eye.right.highlight").transform().position;
        assert_eq!(hl, Vec3::new(-0.028, 0.02, 0.02));

        let lid_left = child(&left, "eye.left.lid").transform().rotation;
        let lid_right = child(&right, "eye.right.lid").transform().rotation;
        assert_eq!(lid_left.z, 0.6);
        assert_eq!(lid_right.z, -0.6);
        assert_eq!(lid_left.y, lid_right.y);
    }

    #[test]
    fn test_optional_parts_are_skipped() {
        let group = build_eye(&eye_params(), Side::Left);
        let names: Vec<_> = group.children().iter().map(Node::name).collect();
        assert_eq!(names, vec!["eye.left.ball", "eye.left.highlight", "eye.left.lid"]);
    }

    #[test]
    fn test_eye_shadow_flags() {
        let mut params = eye_params();
        let group = build_eye(&params, Side::Left);
        let ball = child(&group, "eye.left.ball").as_shape().unwrap();
        let lid = child(&group, "eye.left.lid").as_shape().unwrap();
        let highlight = child(&group, "eye.left.highlight").as_shape().unwrap();
        assert!(ball.cast_shadow);
        assert!(!lid.cast_shadow);
        assert!(!highlight.cast_shadow);

        params.cast_shadow = false;
        let group = build_eye(&params, Side::Right);
        assert!(!child(&group, "eye.right.ball").as_shape().unwrap().cast_shadow);
    }

    #[test]
    fn test_supercilium_arc() {
        let group = build_supercilium(&supercilium(11), Side::Left).unwrap();
        assert_eq!(group.children().len(), 11);

        // Ends sit on the arc baseline, the middle segment at the peak depth
        let first = group.children()[0].transform().position;
        let middle = group.children()[5].transform().position;
        assert!((first.x - (0.12 - 0.15)).abs() < 1e-6);
        assert!((first.y - (1.15 - 0.03)).abs() < 1e-6);
        assert!((middle.z - 0.94).abs() < 1e-6);
        assert!((middle.x - 0.12).abs() < 1e-6);
    }

    #[test]
    fn test_supercilium_needs_two_segments() {
        let err = build_supercilium(&supercilium(1), Side::Right).unwrap_err();
        assert!(matches!(err, BuildError::InvalidParameter { ref part, .. } if part == "supercilium.right"));
    }
}
