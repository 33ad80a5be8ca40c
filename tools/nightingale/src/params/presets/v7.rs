//! v7: lighter mottled underparts, pale wing band, longer tail, three-point lighting

use glam::Vec3;
use std::f32::consts::{PI, TAU};

use super::{
    camera, clawed_legs, directional, feather_row, hemisphere, key_shadow, perch, profile,
    receiving, scapular_row, tail_fan, LegPalette,
};
use crate::color::Rgb;
use crate::params::*;

const UPPER: Rgb = Rgb::hex(0x7b5932);
const LOWER: Rgb = Rgb::hex(0xf0e7d4);
const HEAD: Rgb = Rgb::hex(0x6c4e2f);
const SUPERCILIUM: Rgb = Rgb::hex(0xefe6cf);
const AURICULAR: Rgb = Rgb::hex(0x5a3f26);
const BEAK_UPPER: Rgb = Rgb::hex(0x352817);
const BEAK_LOWER: Rgb = Rgb::hex(0x43321d);
const TOMIUM: Rgb = Rgb::hex(0x2a1d12);
const TAIL: Rgb = Rgb::hex(0xbb5f2a);
const WING: Rgb = Rgb::hex(0x6e5131);
const WING_LIGHT: Rgb = Rgb::hex(0x94734c);
const BAND: Rgb = Rgb::hex(0xbda27a);
const LEG: Rgb = Rgb::hex(0x8a5a30);
const TOE: Rgb = Rgb::hex(0x6b431e);
const CLAW: Rgb = Rgb::hex(0x2a2015);
const EYE: Rgb = Rgb::hex(0x0f0f0f);
const EYE_RING: Rgb = Rgb::hex(0xf3e6cf);
const NOSTRIL: Rgb = Rgb::hex(0x1a1410);
const BRANCH: Rgb = Rgb::hex(0x6b4a2e);

const fn material(color: Rgb) -> MaterialParams {
    MaterialParams::new(color, 0.9, 0.05)
}

pub(super) fn params() -> SceneParams {
    let wing = material(WING);

    let mut band = feather_row(
        "pale_band",
        5,
        0.02,
        (0.5, -0.04),
        (0.03, 0.0),
        (0.62, 0.05),
        (0.31, -0.015),
        (-0.02, -0.03),
        (-0.24, -0.03),
        material(BAND),
    );
    band.cast_shadow = false;

    let bird = BirdParams {
        body: BodyParams {
            shape: EllipsoidParams::new(1.15, 48, 36, material(UPPER)).stretched(1.28, 1.02, 2.08),
            gradient: Some(GradientParams {
                y_min: -1.0,
                y_max: 1.0,
                bottom: LOWER,
                top: UPPER,
                speckle: 0.06,
            }),
        },
        belly: None,
        head: EllipsoidParams::new(0.73, 44, 32, material(HEAD))
            .stretched(1.02, 1.06, 1.02)
            .at(0.0, 1.01, 0.6),
        brow: Some(
            EllipsoidParams::new(0.33, 30, 22, material(HEAD))
                .scaled(1.2, 0.52, 0.88)
                .at(0.0, 1.11, 0.56),
        ),
        cheek: Some(
            EllipsoidParams::new(0.25, 28, 20, material(AURICULAR))
                .scaled(1.05, 0.7, 0.5)
                .at(0.0, 0.96, 0.7),
        ),
        eyes: EyeParams {
            eyeball: EllipsoidParams::new(0.09, 22, 16, material(EYE).finish(0.18, 0.45))
                .at(0.205, 1.095, 0.915),
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
                EllipsoidParams::new(0.023, 10, 8, material(Rgb::WHITE).finish(0.1, 0.9)).at(0.028, 0.02, 0.02),
            ),
            lid: None,
        },
        supercilium: Some(SuperciliumParams {
            segments: 11,
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
            material: material(SUPERCILIUM),
        }),
        beak: BeakParams::Mandibles {
            upper: MandibleParams {
                profile: profile(&[(0.0, 0.0), (0.028, 0.055), (0.048, 0.18), (0.042, 0.33), (0.028, 0.52)]),
                segments: 64,
                position: Vec3::new(0.0, 0.94, 1.09),
                rotation: Vec3::new(PI / 2.0, 0.0, 0.0),
                material: material(BEAK_UPPER).finish(0.5, 0.12),
                cast_shadow: false,
            },
            lower: MandibleParams {
                profile: profile(&[(0.0, 0.0), (0.024, 0.045), (0.04, 0.16), (0.036, 0.29), (0.02, 0.47)]),
                segments: 64,
                position: Vec3::new(0.0, 0.93, 1.075),
                rotation: Vec3::new(PI / 2.0, 0.0, -0.045),
                material: material(BEAK_LOWER).finish(0.55, 0.1),
                cast_shadow: false,
            },
        },
        tomial_edge: Some(TomialEdgeParams {
            capsule: CapsuleParams {
                radius: 0.006,
                length: 0.5,
                cap_segments: 2,
                radial_segments: 4,
            },
            position: Vec3::new(0.056, 0.935, 0.88),
            rotation: Vec3::new(PI / 2.0, -0.06, 0.0),
            material: material(TOMIUM),
        }),
        nares: Some(
            EllipsoidParams::new(0.028, 14, 12, material(NOSTRIL).finish(0.6, 0.1))
                .scaled(1.2, 0.7, 0.8)
                .at(0.064, 0.982, 0.995),
        ),
        wings: WingParams::Layered {
            rows: vec![
                receiving(feather_row(
                    "greater_coverts",
                    7,
                    0.028,
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
                    0.026,
                    (0.56, -0.04),
                    (0.49, 0.03),
                    (0.6, 0.05),
                    (0.33, -0.015),
                    (-0.06, -0.03),
                    (-0.25, -0.03),
                    material(WING_LIGHT),
                ),
                band,
                receiving(feather_row(
                    "secondaries",
                    7,
                    0.028,
                    (0.84, -0.05),
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
                    0.028,
                    (1.26, -0.06),
                    (0.55, 0.02),
                    (0.98, 0.06),
                    (0.22, -0.008),
                    (-0.34, -0.055),
                    (-0.5, -0.035),
                    wing,
                )),
            ],
        },
        scapulars: Some(scapular_row(0.026, wing)),
        tail: tail_fan(9, 1.55, 0.22, PI / 2.52, material(TAIL)),
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
            tail_pitch: Channel::sine(0.03, 1.9),
            head_pitch: Channel::sine(0.026, 1.0),
            head_yaw: Channel::sine(0.02, 0.7),
            beak_roll: Channel::sine(0.004, 1.6),
            wing_flap: None,
        },
    };

    let environment = EnvironmentParams {
        perch: perch(
            0.085,
            0.12,
            20,
            Vec3::new(PI / 13.0, 0.0, PI / 7.2),
            MaterialParams::new(BRANCH, 1.0, 0.0),
        ),
        root_position: Vec3::new(0.0, 0.2, 0.0),
        camera: camera(4.5, 2.45, 5.7, 0.85),
        lights: vec![
            hemisphere(0x86a4ff, 0x142033, 0.42),
            directional(0xffecd2, 1.15, Vec3::new(3.5, 6.2, 3.2), key_shadow()),
            directional(0x9ab6ff, 0.32, Vec3::new(-4.5, 2.7, -3.2), None),
            directional(0xffd7aa, 0.18, Vec3::new(0.0, 2.0, -2.0), None),
        ],
        max_pixel_ratio: 2.0,
    };

    SceneParams {
        name: "v7".to_string(),
        description: super::Preset::V7.description().to_string(),
        bird,
        environment,
    }
}
