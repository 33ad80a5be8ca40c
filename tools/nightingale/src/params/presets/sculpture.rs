//! The first draft: a handful of flat-shaded primitives

use glam::Vec3;
use std::f32::consts::{PI, TAU};

use super::{camera, directional, hemisphere, perch};
use crate::color::Rgb;
use crate::params::*;

const UPPER: Rgb = Rgb::hex(0x7d5b34);
const LOWER: Rgb = Rgb::hex(0xeadfca);
const HEAD: Rgb = Rgb::hex(0x6f5030);
const BEAK: Rgb = Rgb::hex(0x3a2c1a);
const TAIL: Rgb = Rgb::hex(0xa85624);
const WING: Rgb = Rgb::hex(0x6e5131);
const LEG: Rgb = Rgb::hex(0x7a4e25);
const TOE: Rgb = Rgb::hex(0x6b431e);
const EYE: Rgb = Rgb::hex(0x111111);
const EYE_RING: Rgb = Rgb::hex(0xf3e6cf);
const BRANCH: Rgb = Rgb::hex(0x6b4a2e);

const fn low_poly(color: Rgb) -> MaterialParams {
    MaterialParams::new(color, 0.95, 0.05).flat()
}

pub(super) fn params() -> SceneParams {
    let toe = ConeParams::new(0.07, 0.22, 6);

    let bird = BirdParams {
        body: BodyParams {
            shape: EllipsoidParams::new(1.15, 12, 10, low_poly(UPPER)).scaled(1.25, 1.0, 2.0),
            gradient: None,
        },
        belly: Some(
            EllipsoidParams::new(1.0, 10, 8, low_poly(LOWER))
                .scaled(1.0, 0.8, 1.5)
                .at(0.0, -0.18, 0.15),
        ),
        head: EllipsoidParams::new(0.65, 12, 10, low_poly(HEAD)).at(0.0, 0.95, 0.6),
        brow: None,
        cheek: None,
        eyes: EyeParams {
            eyeball: EllipsoidParams::new(0.075, 10, 6, MaterialParams::new(EYE, 0.4, 0.2)).at(0.2, 1.06, 0.88),
            cast_shadow: true,
            ring: Some(RingParams {
                torus: TorusParams {
                    radius: 0.12,
                    tube: 0.015,
                    radial_segments: 6,
                    tubular_segments: 18,
                    arc: TAU,
                },
                rotation: Vec3::new(0.0, PI / 2.0, 0.0),
                material: low_poly(EYE_RING),
                cast_shadow: true,
            }),
            highlight: None,
            lid: None,
        },
        supercilium: None,
        beak: BeakParams::Cone {
            cone: ConeParams::new(0.09, 0.55, 8),
            position: Vec3::new(0.0, 0.92, 1.08),
            rotation: Vec3::new(PI / 2.0, 0.0, 0.0),
            material: low_poly(BEAK),
        },
        tomial_edge: None,
        nares: None,
        wings: WingParams::Panels {
            panels: vec![
                PanelParams {
                    size: Vec3::new(0.25, 0.6, 1.2),
                    position: Vec3::new(0.65, 0.25, -0.2),
                    yaw: -0.35,
                    material: low_poly(WING),
                },
                PanelParams {
                    size: Vec3::new(0.22, 0.5, 0.9),
                    position: Vec3::new(0.95, 0.2, -0.3),
                    yaw: -0.45,
                    material: low_poly(WING),
                },
            ],
        },
        scapulars: None,
        tail: TailParams::Cone {
            cone: ConeParams::new(0.45, 1.4, 4),
            position: Vec3::new(0.0, -0.1, -1.2),
            rotation: Vec3::new(-PI / 2.6, 0.0, 0.0),
            material: low_poly(TAIL),
        },
        legs: LegParams {
            position: Vec3::new(0.22, 0.0, 0.05),
            tarsus: TarsusParams {
                radius_top: 0.05,
                radius_bottom: 0.07,
                height: 0.85,
                segments: 6,
                position: Vec3::new(0.0, -0.65, 0.0),
                pitch: PI / 24.0,
                material: low_poly(LEG),
            },
            toes: ToeParams {
                count: 3,
                cone: toe,
                spacing: 0.085,
                y: -1.02,
                z: 0.12,
                pitch: PI / 1.9,
                material: low_poly(TOE),
            },
            claws: None,
            rear_toe: RearToeParams {
                cone: toe,
                offset: Vec3::new(-0.02, -0.98, -0.02),
                pitch: -PI / 1.2,
                scale: 0.9,
                material: low_poly(TOE),
            },
            rear_claw: None,
        },
        idle: IdleParams {
            breathe: Channel::sine(0.025, 1.6).with_base(0.22),
            tail_pitch: Channel::sine(0.05, 2.2),
            head_pitch: Channel::sine(0.03, 1.2),
            head_yaw: Channel::sine(0.02, 0.8),
            beak_roll: Channel::sine(0.01, 2.0),
            wing_flap: None,
        },
    };

    let environment = EnvironmentParams {
        perch: perch(
            0.08,
            0.11,
            8,
            Vec3::new(PI / 14.0, 0.0, PI / 8.0),
            MaterialParams::new(BRANCH, 1.0, 0.0).flat(),
        ),
        root_position: Vec3::new(0.0, 0.2, 0.0),
        camera: camera(5.2, 2.8, 6.5, 0.8),
        lights: vec![
            hemisphere(0x7fa4ff, 0x203050, 0.45),
            directional(
                0xffefcf,
                1.0,
                Vec3::new(4.0, 6.0, 4.0),
                Some(ShadowParams {
                    map_size: 1024,
                    near: 1.0,
                    far: 30.0,
                }),
            ),
        ],
        max_pixel_ratio: 2.0,
    };

    SceneParams {
        name: "sculpture".to_string(),
        description: super::Preset::Sculpture.description().to_string(),
        bird,
        environment,
    }
}
