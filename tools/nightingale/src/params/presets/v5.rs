//! v5: refined head with brow and eyelids, split beak, scapulars, speckled breast

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
const BEAK_UPPER: Rgb = Rgb::hex(0x3a2c1a);
const BEAK_LOWER: Rgb = Rgb::hex(0x4a3822);
const TAIL: Rgb = Rgb::hex(0xa85624);
const WING: Rgb = Rgb::hex(0x6e5131);
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
            shape: EllipsoidParams::new(1.15, 40, 30, material(UPPER)).stretched(1.28, 1.0, 2.05),
            gradient: Some(GradientParams {
                y_min: -1.0,
                y_max: 1.0,
                bottom: LOWER,
                top: UPPER,
                speckle: 0.08,
            }),
        },
        belly: None,
        head: EllipsoidParams::new(0.72, 36, 28, material(HEAD))
            .stretched(1.02, 0.98, 1.05)
            .at(0.0, 1.0, 0.63),
        brow: Some(
            EllipsoidParams::new(0.38, 24, 18, material(HEAD))
                .scaled(1.2, 0.6, 0.9)
                .at(0.0, 1.1, 0.58),
        ),
        cheek: None,
        eyes: EyeParams {
            eyeball: EllipsoidParams::new(0.085, 18, 14, material(EYE).finish(0.2, 0.4)).at(0.21, 1.09, 0.92),
            cast_shadow: true,
            ring: Some(RingParams {
                torus: TorusParams {
                    radius: 0.14,
                    tube: 0.016,
                    radial_segments: 10,
                    tubular_segments: 24,
                    arc: TAU,
                },
                rotation: Vec3::new(0.0, PI / 2.0, 0.0),
                material: material(EYE_RING),
                cast_shadow: true,
            }),
            highlight: Some(
                EllipsoidParams::new(0.024, 10, 8, material(Rgb::WHITE).finish(0.1, 0.9)).at(0.028, 0.02, 0.02),
            ),
            lid: Some(RingParams {
                torus: TorusParams {
                    radius: 0.14,
                    tube: 0.018,
                    radial_segments: 8,
                    tubular_segments: 24,
                    arc: PI * 0.9,
                },
                rotation: Vec3::new(0.0, PI / 2.0, 0.6),
                material: material(HEAD),
                cast_shadow: false,
            }),
        },
        supercilium: None,
        beak: BeakParams::Mandibles {
            upper: MandibleParams {
                profile: profile(&[(0.0, 0.0), (0.03, 0.06), (0.055, 0.2), (0.048, 0.38), (0.03, 0.6)]),
                segments: 48,
                position: Vec3::new(0.0, 0.94, 1.11),
                rotation: Vec3::new(PI / 2.0, 0.0, 0.0),
                material: material(BEAK_UPPER).finish(0.55, 0.12),
                cast_shadow: true,
            },
            lower: MandibleParams {
                profile: profile(&[(0.0, 0.0), (0.028, 0.05), (0.045, 0.18), (0.04, 0.34), (0.022, 0.55)]),
                segments: 48,
                position: Vec3::new(0.0, 0.93, 1.095),
                rotation: Vec3::new(PI / 2.0, 0.0, -0.05),
                material: material(BEAK_LOWER).finish(0.6, 0.1),
                cast_shadow: true,
            },
        },
        tomial_edge: None,
        nares: Some(
            EllipsoidParams::new(0.03, 12, 10, material(NOSTRIL).finish(0.6, 0.1))
                .scaled(1.2, 0.7, 0.8)
                .at(0.07, 0.98, 1.0),
        ),
        wings: WingParams::Layered {
            rows: vec![
                receiving(feather_row(
                    "coverts",
                    7,
                    0.035,
                    (0.6, -0.04),
                    (0.5, 0.03),
                    (0.55, 0.05),
                    (0.36, -0.015),
                    (-0.1, -0.03),
                    (-0.28, -0.03),
                    wing,
                )),
                receiving(feather_row(
                    "secondaries",
                    7,
                    0.035,
                    (0.8, -0.05),
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
                    0.035,
                    (1.22, -0.06),
                    (0.55, 0.02),
                    (0.98, 0.06),
                    (0.22, -0.008),
                    (-0.34, -0.055),
                    (-0.5, -0.035),
                    wing,
                )),
            ],
        },
        scapulars: Some(scapular_row(0.03, wing)),
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
            breathe: Channel::sine(0.02, 1.2).with_base(0.22),
            tail_pitch: Channel::sine(0.035, 2.0),
            head_pitch: Channel::sine(0.03, 1.1),
            head_yaw: Channel::sine(0.02, 0.7),
            beak_roll: Channel::sine(0.005, 1.8),
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
        camera: camera(4.8, 2.5, 6.0, 0.85),
        lights: vec![
            hemisphere(0x87a8ff, 0x1a283f, 0.5),
            directional(0xffefcf, 1.05, Vec3::new(4.0, 6.0, 4.0), key_shadow()),
        ],
        max_pixel_ratio: 2.0,
    };

    SceneParams {
        name: "v5".to_string(),
        description: super::Preset::V5.description().to_string(),
        bird,
        environment,
    }
}
