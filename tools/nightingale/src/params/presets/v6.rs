//! v6: supercilium, auricular patch, tomial edge, median coverts, rim light

use glam::Vec3;
use std::f32::consts::{PI, TAU};

use super::{
    camera, clawed_legs, directional, feather_row, hemisphere, key_shadow, perch, profile,
    receiving, scapular_row, tail_fan, LegPalette,
};
use crate::color::Rgb;
use crate::params::*;

const UPPER: Rgb = Rgb::hex(0x7d5b34);
const LOWER: Rgb = Rgb::hex(0xeadfca);
const HEAD: Rgb = Rgb::hex(0x6f5030);
const SUPERCILIUM: Rgb = Rgb::hex(0xe9e0c8);
const AURICULAR: Rgb = Rgb::hex(0x5b4027);
const BEAK_UPPER: Rgb = Rgb::hex(0x3a2c1a);
const BEAK_LOWER: Rgb = Rgb::hex(0x4a3822);
const TOMIUM: Rgb = Rgb::hex(0x2a1d12);
const TAIL: Rgb = Rgb::hex(0xa85624);
const WING: Rgb = Rgb::hex(0x6e5131);
const WING_LIGHT: Rgb = Rgb::hex(0x7a6040);
const LEG: Rgb = Rgb::hex(0x8a5a30);
const TOE: Rgb = Rgb::hex(0x6b431e);
const CLAW: Rgb = Rgb::hex(0x2a2015);
const EYE: Rgb = Rgb::hex(0x111111);
const EYE_RING: Rgb = Rgb::hex(0xf3e6cf);
const NOSTRIL: Rgb = Rgb::hex(0x1a1410);
const BRANCH: Rgb = Rgb::hex(0x6b4a2e);

const fn material(color: Rgb) -> MaterialParams {
    MaterialParams::new(color, 0.9, 0.05)
}

pub(super) fn params() -> SceneParams {
    let wing = material(WING);

    let bird = BirdParams {
        body: BodyParams {
            shape: EllipsoidParams::new(1.15, 44, 34, material(UPPER)).stretched(1.28, 1.0, 2.05),
            gradient: Some(GradientParams {
                y_min: -1.0,
                y_max: 1.0,
                bottom: LOWER,
                top: UPPER,
                speckle: 0.0,
            }),
        },
        belly: None,
        head: EllipsoidParams::new(0.72, 40, 30, material(HEAD))
            .stretched(1.03, 0.96, 1.06)
            .at(0.0, 1.0, 0.63),
        brow: Some(
            EllipsoidParams::new(0.36, 28, 20, material(HEAD))
                .scaled(1.3, 0.58, 0.9)
                .at(0.0, 1.1, 0.58),
        ),
        cheek: Some(
            EllipsoidParams::new(0.26, 24, 18, material(AURICULAR))
                .scaled(1.1, 0.7, 0.5)
                .at(0.0, 0.96, 0.72),
        ),
        eyes: EyeParams {
            eyeball: EllipsoidParams::new(0.09, 20, 16, material(EYE).finish(0.2, 0.45)).at(0.21, 1.09, 0.93),
            cast_shadow: false,
            ring: Some(RingParams {
                torus: TorusParams {
                    radius: 0.145,
                    tube: 0.016,
                    radial_segments: 10,
                    tubular_segments: 24,
                    arc: TAU,
                },
                rotation: Vec3::new(0.0, PI / 2.0, 0.0),
                material: material(EYE_RING),
                cast_shadow: false,
            }),
            highlight: Some(
                EllipsoidParams::new(0.023, 10, 8, material(Rgb::WHITE).finish(0.1, 0.9)).at(0.03, 0.02, 0.02),
            ),
            lid: None,
        },
        supercilium: Some(SuperciliumParams {
            segments: 10,
            center_x: 0.12,
            spread: 0.28,
            y: 1.14,
            arch: 0.03,
            z: 0.86,
            depth: 0.08,
            capsule: CapsuleParams {
                radius: 0.008,
                length: 0.02,
                cap_segments: 2,
                radial_segments: 4,
            },
            rotation: Vec3::new(0.0, PI / 2.0, 0.0),
            material: material(SUPERCILIUM),
        }),
        beak: BeakParams::Mandibles {
            upper: MandibleParams {
                profile: profile(&[(0.0, 0.0), (0.03, 0.06), (0.055, 0.2), (0.048, 0.38), (0.03, 0.6)]),
                segments: 64,
                position: Vec3::new(0.0, 0.94, 1.12),
                rotation: Vec3::new(PI / 2.0, 0.0, 0.0),
                material: material(BEAK_UPPER).finish(0.55, 0.12),
                cast_shadow: false,
            },
            lower: MandibleParams {
                profile: profile(&[(0.0, 0.0), (0.028, 0.05), (0.045, 0.18), (0.04, 0.34), (0.022, 0.55)]),
                segments: 64,
                position: Vec3::new(0.0, 0.93, 1.105),
                rotation: Vec3::new(PI / 2.0, 0.0, -0.05),
                material: material(BEAK_LOWER).finish(0.6, 0.1),
                cast_shadow: false,
            },
        },
        tomial_edge: Some(TomialEdgeParams {
            capsule: CapsuleParams {
                radius: 0.006,
                length: 0.55,
                cap_segments: 2,
                radial_segments: 4,
            },
            position: Vec3::new(0.06, 0.935, 0.87),
            rotation: Vec3::new(PI / 2.0, -0.06, 0.0),
            material: material(TOMIUM),
        }),
        nares: Some(
            EllipsoidParams::new(0.03, 14, 12, material(NOSTRIL).finish(0.6, 0.1))
                .scaled(1.2, 0.7, 0.8)
                .at(0.07, 0.98, 1.01),
        ),
        wings: WingParams::Layered {
            rows: vec![
                receiving(feather_row(
                    "greater_coverts",
                    7,
                    0.03,
                    (0.62, -0.04),
                    (0.52, 0.03),
                    (0.55, 0.05),
                    (0.36, -0.015),
                    (-0.1, -0.03),
                    (-0.28, -0.03),
                    wing,
                )),
                feather_row(
                    "median_coverts",
                    6,
                    0.028,
                    (0.54, -0.04),
                    (0.48, 0.03),
                    (0.58, 0.05),
                    (0.33, -0.015),
                    (-0.06, -0.03),
                    (-0.25, -0.03),
                    material(WING_LIGHT),
                ),
                receiving(feather_row(
                    "secondaries",
                    7,
                    0.03,
                    (0.82, -0.05),
                    (0.52, 0.03),
                    (0.68, 0.055),
                    (0.3, -0.012),
                    (-0.2, -0.04),
                    (-0.38, -0.03),
                    wing,
                )),
                receiving(feather_row(
                    "primaries",
                    8,
                    0.03,
                    (1.24, -0.06),
                    (0.55, 0.02),
                    (0.98, 0.06),
                    (0.22, -0.008),
                    (-0.34, -0.055),
                    (-0.5, -0.035),
                    wing,
                )),
            ],
        },
        scapulars: Some(scapular_row(0.028, wing)),
        tail: tail_fan(8, 1.45, 0.2, PI / 2.55, material(TAIL)),
        legs: clawed_legs(
            LegPalette {
                leg: material(LEG),
                toe: material(TOE),
                claw: material(CLAW).finish(0.4, 0.3),
            },
            16,
            12,
            10,
        ),
        idle: IdleParams {
            breathe: Channel::sine(0.02, 1.15).with_base(0.22),
            tail_pitch: Channel::sine(0.03, 2.0),
            head_pitch: Channel::sine(0.028, 1.05),
            head_yaw: Channel::sine(0.02, 0.7),
            beak_roll: Channel::sine(0.004, 1.7),
            wing_flap: None,
        },
    };

    let environment = EnvironmentParams {
        perch: perch(
            0.085,
            0.12,
            20,
            Vec3::new(PI / 14.0, 0.0, PI / 8.0),
            MaterialParams::new(BRANCH, 1.0, 0.0),
        ),
        root_position: Vec3::new(0.0, 0.2, 0.0),
        camera: camera(4.6, 2.4, 5.8, 0.85),
        lights: vec![
            hemisphere(0x7f9bff, 0x162238, 0.45),
            directional(0xfff0d8, 1.05, Vec3::new(3.8, 6.0, 3.4), key_shadow()),
            directional(0x90b0ff, 0.25, Vec3::new(-4.0, 2.5, -3.0), None),
        ],
        max_pixel_ratio: 2.0,
    };

    SceneParams {
        name: "v6".to_string(),
        description: super::Preset::V6.description().to_string(),
        bird,
        environment,
    }
}
