//! v4: smooth shading, body gradient, lathe beak, layered wings and claws

use glam::Vec3;
use std::f32::consts::{PI, TAU};

use super::{
    camera, clawed_legs, directional, feather_row, hemisphere, key_shadow, perch, profile,
    receiving, tail_fan, LegPalette,
};
use crate::color::Rgb;
use crate::params::*;

const UPPER: Rgb = Rgb::hex(0x7d5b34);
const LOWER: Rgb = Rgb::hex(0xeadfca);
const HEAD: Rgb = Rgb::hex(0x6f5030);
const BEAK: Rgb = Rgb::hex(0x3a2c1a);
const TAIL: Rgb = Rgb::hex(0xa85624);
const WING: Rgb = Rgb::hex(0x6e5131);
const LEG: Rgb = Rgb::hex(0x8a5a30);
const TOE: Rgb = Rgb::hex(0x6b431e);
const CLAW: Rgb = Rgb::hex(0x2a2015);
const EYE: Rgb = Rgb::hex(0x111111);
const EYE_RING: Rgb = Rgb::hex(0xf3e6cf);
const BRANCH: Rgb = Rgb::hex(0x6b4a2e);

const fn material(color: Rgb) -> MaterialParams {
    MaterialParams::new(color, 0.9, 0.05)
}

pub(super) fn params() -> SceneParams {
    let wing = material(WING);

    let bird = BirdParams {
        body: BodyParams {
            shape: EllipsoidParams::new(1.15, 32, 24, material(UPPER)).stretched(1.28, 1.0, 2.05),
            gradient: Some(GradientParams {
                y_min: -1.0,
                y_max: 1.0,
                bottom: LOWER,
                top: UPPER,
                speckle: 0.0,
            }),
        },
        belly: None,
        head: EllipsoidParams::new(0.67, 28, 20, material(HEAD)).at(0.0, 0.97, 0.62),
        brow: None,
        cheek: None,
        eyes: EyeParams {
            eyeball: EllipsoidParams::new(0.075, 14, 10, material(EYE).finish(0.35, 0.3)).at(0.2, 1.08, 0.9),
            cast_shadow: true,
            ring: Some(RingParams {
                torus: TorusParams {
                    radius: 0.12,
                    tube: 0.013,
                    radial_segments: 8,
                    tubular_segments: 20,
                    arc: TAU,
                },
                rotation: Vec3::new(0.0, PI / 2.0, 0.0),
                material: material(EYE_RING),
                cast_shadow: true,
            }),
            highlight: Some(
                EllipsoidParams::new(0.02, 8, 6, material(Rgb::WHITE).finish(0.1, 0.9)).at(0.02, 0.02, 0.02),
            ),
            lid: None,
        },
        supercilium: None,
        beak: BeakParams::Lathe(MandibleParams {
            profile: profile(&[(0.0, 0.0), (0.035, 0.05), (0.06, 0.18), (0.05, 0.35), (0.03, 0.52)]),
            segments: 32,
            position: Vec3::new(0.0, 0.92, 1.11),
            rotation: Vec3::new(PI / 2.0, 0.0, 0.0),
            material: material(BEAK).finish(0.6, 0.1),
            cast_shadow: true,
        }),
        tomial_edge: None,
        nares: None,
        wings: WingParams::Layered {
            rows: vec![
                receiving(feather_row(
                    "secondaries",
                    6,
                    0.04,
                    (0.8, -0.05),
                    (0.5, 0.04),
                    (0.62, 0.05),
                    (0.32, -0.015),
                    (-0.15, -0.04),
                    (-0.35, -0.03),
                    wing,
                )),
                receiving(feather_row(
                    "primaries",
                    7,
                    0.04,
                    (1.2, -0.06),
                    (0.55, 0.02),
                    (0.95, 0.06),
                    (0.22, -0.008),
                    (-0.32, -0.06),
                    (-0.5, -0.04),
                    wing,
                )),
            ],
        },
        scapulars: None,
        tail: tail_fan(6, 1.4, 0.2, PI / 2.55, material(TAIL)),
        legs: clawed_legs(
            LegPalette {
                leg: material(LEG),
                toe: material(TOE),
                claw: material(CLAW).finish(0.4, 0.3),
            },
            12,
            10,
            8,
        ),
        idle: IdleParams {
            breathe: Channel::sine(0.02, 1.3).with_base(0.22),
            tail_pitch: Channel::sine(0.04, 2.1),
            head_pitch: Channel::sine(0.03, 1.1),
            head_yaw: Channel::sine(0.02, 0.7),
            beak_roll: Channel::sine(0.01, 1.8),
            wing_flap: None,
        },
    };

    let environment = EnvironmentParams {
        perch: perch(
            0.085,
            0.12,
            16,
            Vec3::new(PI / 14.0, 0.0, PI / 8.0),
            MaterialParams::new(BRANCH, 1.0, 0.0),
        ),
        root_position: Vec3::new(0.0, 0.2, 0.0),
        camera: camera(5.0, 2.6, 6.2, 0.85),
        lights: vec![
            hemisphere(0x87a8ff, 0x1a283f, 0.5),
            directional(0xffefcf, 1.05, Vec3::new(4.0, 6.0, 4.0), key_shadow()),
        ],
        max_pixel_ratio: 2.0,
    };

    SceneParams {
        name: "v4".to_string(),
        description: super::Preset::V4.description().to_string(),
        bird,
        environment,
    }
}
