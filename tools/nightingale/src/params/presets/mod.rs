//! Built-in parameter tables
//!
//! Each preset reproduces one revision of the nightingale sculpture, from the
//! flat-shaded low-poly first draft up to the detailed v7 bird.

mod sculpture;
mod v4;
mod v5;
mod v6;
mod v7;

use glam::{Vec2, Vec3};
use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use super::{
    CameraParams, ClawParams, ConeParams, FeatherRowParams, LegParams, LightParams,
    MaterialParams, PerchParams, Progression, RearToeParams, SceneParams, ShadowParams,
    TailFanParams, TailParams, TarsusParams, ToeParams,
};
use crate::color::Rgb;
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Sculpture,
    V4,
    V5,
    V6,
    V7,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Sculpture,
        Preset::V4,
        Preset::V5,
        Preset::V6,
        Preset::V7,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Sculpture => "sculpture",
            Preset::V4 => "v4",
            Preset::V5 => "v5",
            Preset::V6 => "v6",
            Preset::V7 => "v7",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Preset::Sculpture => "minimal flat-shaded low-poly bird",
            Preset::V4 => "high detail: gradient body, lathe beak, layered wings, claws",
            Preset::V5 => "refined head, split beak with nares, eyelids, scapulars, speckle",
            Preset::V6 => "supercilium, auricular patch, tomial edge, median coverts, rim light",
            Preset::V7 => "lighter underparts, pale wing band, longer tail, fill light",
        }
    }

    /// Build the full parameter table for this preset
    pub fn params(self) -> SceneParams {
        match self {
            Preset::Sculpture => sculpture::params(),
            Preset::V4 => v4::params(),
            Preset::V5 => v5::params(),
            Preset::V6 => v6::params(),
            Preset::V7 => v7::params(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownPreset(s.to_string()))
    }
}

// Shared building blocks. Every revision frames the bird with the same
// perspective camera and differs only in where it sits.

fn camera(x: f32, y: f32, z: f32, target_y: f32) -> CameraParams {
    CameraParams {
        fov: 55.0,
        near: 0.1,
        far: 200.0,
        position: Vec3::new(x, y, z),
        target: Vec3::new(0.0, target_y, 0.0),
    }
}

fn perch(
    radius_top: f32,
    radius_bottom: f32,
    segments: u32,
    rotation: Vec3,
    material: MaterialParams,
) -> PerchParams {
    PerchParams {
        radius_top,
        radius_bottom,
        length: 6.5,
        segments,
        position: Vec3::new(0.0, 0.1, 0.0),
        rotation,
        material,
    }
}

fn hemisphere(sky: u32, ground: u32, intensity: f32) -> LightParams {
    LightParams::Hemisphere {
        sky: Rgb::hex(sky),
        ground: Rgb::hex(ground),
        intensity,
    }
}

fn directional(color: u32, intensity: f32, position: Vec3, shadow: Option<ShadowParams>) -> LightParams {
    LightParams::Directional {
        color: Rgb::hex(color),
        intensity,
        position,
        shadow,
    }
}

fn profile(points: &[(f32, f32)]) -> Vec<Vec2> {
    points.iter().map(|&(r, y)| Vec2::new(r, y)).collect()
}

/// Feather row whose six progressions are `(start, step)` pairs
///
/// Yaw is given for the left wing, so it is negative.
#[allow(clippy::too_many_arguments)]
fn feather_row(
    name: &str,
    count: u32,
    thickness: f32,
    length: (f32, f32),
    height: (f32, f32),
    x: (f32, f32),
    y: (f32, f32),
    z: (f32, f32),
    yaw: (f32, f32),
    material: MaterialParams,
) -> FeatherRowParams {
    FeatherRowParams {
        name: name.to_string(),
        count,
        thickness,
        length: Progression::linear(length.0, length.1),
        height: Progression::linear(height.0, height.1),
        x: Progression::linear(x.0, x.1),
        y: Progression::linear(y.0, y.1),
        z: Progression::linear(z.0, z.1),
        yaw: Progression::linear(yaw.0, yaw.1),
        material,
        cast_shadow: true,
        receive_shadow: false,
    }
}

fn receiving(mut row: FeatherRowParams) -> FeatherRowParams {
    row.receive_shadow = true;
    row
}

/// Nine alternating-height feathers along the back
///
/// Scapulars cast shadows but never receive them, in every revision that
/// has them.
fn scapular_row(thickness: f32, material: MaterialParams) -> FeatherRowParams {
    let mut row = feather_row(
        "scapulars",
        9,
        thickness,
        (0.35, -0.01),
        (0.08, 0.0),
        (0.45, 0.02),
        (0.42, -0.005),
        (0.05, -0.05),
        (-0.2, -0.02),
        material,
    );
    row.height = row.height.alternating(0.02);
    row
}

fn tail_fan(count: u32, center_length: f32, yaw_scale: f32, pitch: f32, material: MaterialParams) -> TailParams {
    TailParams::Fan(TailFanParams {
        count,
        center_length,
        taper: 0.12,
        width: 0.05,
        thickness: 0.08,
        spacing: 0.09,
        y: -0.1,
        z: -0.6,
        yaw_step: 0.06,
        yaw_scale,
        position: Vec3::new(0.0, -0.12, -0.6),
        rotation: Vec3::new(-pitch, 0.0, 0.0),
        material,
    })
}

/// Tarsus, three clawed front toes and a clawed rear toe
struct LegPalette {
    leg: MaterialParams,
    toe: MaterialParams,
    claw: MaterialParams,
}

fn clawed_legs(palette: LegPalette, tarsus_segments: u32, toe_segments: u32, claw_segments: u32) -> LegParams {
    let claw = ConeParams::new(0.02, 0.06, claw_segments);
    LegParams {
        position: Vec3::new(0.22, 0.0, 0.0),
        tarsus: TarsusParams {
            radius_top: 0.055,
            radius_bottom: 0.07,
            height: 0.86,
            segments: tarsus_segments,
            position: Vec3::new(0.0, -0.65, 0.05),
            pitch: PI / 24.0,
            material: palette.leg,
        },
        toes: ToeParams {
            count: 3,
            cone: ConeParams::new(0.07, 0.22, toe_segments),
            spacing: 0.085,
            y: -1.02,
            z: 0.12,
            pitch: PI / 1.9,
            material: palette.toe,
        },
        claws: Some(ClawParams {
            cone: claw,
            y: -1.11,
            z: 0.18,
            pitch: PI / 1.7,
            material: palette.claw,
        }),
        rear_toe: RearToeParams {
            cone: ConeParams::new(0.07, 0.2, toe_segments),
            offset: Vec3::new(-0.02, -0.98, -0.02),
            pitch: -PI / 1.2,
            scale: 0.9,
            material: palette.toe,
        },
        rear_claw: Some(RearToeParams {
            cone: claw,
            offset: Vec3::new(-0.02, -1.05, -0.07),
            pitch: -PI / 1.4,
            scale: 1.0,
            material: palette.claw,
        }),
    }
}

fn key_shadow() -> Option<ShadowParams> {
    Some(ShadowParams {
        map_size: 2048,
        near: 0.5,
        far: 40.0,
    })
}
