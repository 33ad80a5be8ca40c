//! Body-part parameter records
//!
//! Bilateral parts are always described for the left side (+X). The builders
//! derive the right side by negating the X offset, plus whichever rotation
//! components the part mirrors (documented on each record).

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::color::Rgb;

fn one() -> Vec3 {
    Vec3::ONE
}

fn is_one(v: &Vec3) -> bool {
    *v == Vec3::ONE
}

fn is_zero(v: &Vec3) -> bool {
    *v == Vec3::ZERO
}

fn is_zero_f32(v: &f32) -> bool {
    *v == 0.0
}

fn full_turn() -> f32 {
    TAU
}

fn is_full_turn(v: &f32) -> bool {
    *v == TAU
}

/// Surface description handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialParams {
    pub color: Rgb,
    pub roughness: f32,
    pub metalness: f32,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub flat_shading: bool,
}

impl MaterialParams {
    pub const fn new(color: Rgb, roughness: f32, metalness: f32) -> Self {
        Self {
            color,
            roughness,
            metalness,
            flat_shading: false,
        }
    }

    /// Same material with faceted shading
    pub const fn flat(mut self) -> Self {
        self.flat_shading = true;
        self
    }

    /// Same material with different roughness and metalness
    pub const fn finish(mut self, roughness: f32, metalness: f32) -> Self {
        self.roughness = roughness;
        self.metalness = metalness;
        self
    }
}

/// A sphere, optionally stretched into an ellipsoid
///
/// `stretch` is baked into the vertices (so vertex colors see the final
/// shape), `scale` is applied on the node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipsoidParams {
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
    #[serde(default = "one", skip_serializing_if = "is_one")]
    pub stretch: Vec3,
    #[serde(default = "one", skip_serializing_if = "is_one")]
    pub scale: Vec3,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub position: Vec3,
    pub material: MaterialParams,
}

impl EllipsoidParams {
    pub const fn new(radius: f32, width_segments: u32, height_segments: u32, material: MaterialParams) -> Self {
        Self {
            radius,
            width_segments,
            height_segments,
            stretch: Vec3::ONE,
            scale: Vec3::ONE,
            position: Vec3::ZERO,
            material,
        }
    }

    pub const fn stretched(mut self, x: f32, y: f32, z: f32) -> Self {
        self.stretch = Vec3::new(x, y, z);
        self
    }

    pub const fn scaled(mut self, x: f32, y: f32, z: f32) -> Self {
        self.scale = Vec3::new(x, y, z);
        self
    }

    pub const fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.position = Vec3::new(x, y, z);
        self
    }
}

/// Vertical underparts-to-upperparts gradient painted on the body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientParams {
    pub y_min: f32,
    pub y_max: f32,
    pub bottom: Rgb,
    pub top: Rgb,
    #[serde(default, skip_serializing_if = "is_zero_f32")]
    pub speckle: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyParams {
    pub shape: EllipsoidParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<GradientParams>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConeParams {
    pub radius: f32,
    pub height: f32,
    pub segments: u32,
}

impl ConeParams {
    pub const fn new(radius: f32, height: f32, segments: u32) -> Self {
        Self {
            radius,
            height,
            segments,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapsuleParams {
    pub radius: f32,
    pub length: f32,
    pub cap_segments: u32,
    pub radial_segments: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TorusParams {
    pub radius: f32,
    pub tube: f32,
    pub radial_segments: u32,
    pub tubular_segments: u32,
    #[serde(default = "full_turn", skip_serializing_if = "is_full_turn")]
    pub arc: f32,
}

/// A torus placed around the eye (eye-ring or eyelid)
///
/// Centered on the eyeball. Only `rotation.z` is mirrored for the right eye.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingParams {
    pub torus: TorusParams,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub rotation: Vec3,
    pub material: MaterialParams,
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub cast_shadow: bool,
}

/// Eyeball plus its optional ring, highlight and eyelid
///
/// `eyeball.position` is the left eye center. `highlight.position` is an
/// offset from the eye center (X mirrored). `cast_shadow` applies to the
/// eyeball; the highlight never casts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EyeParams {
    pub eyeball: EllipsoidParams,
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub cast_shadow: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ring: Option<RingParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<EllipsoidParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lid: Option<RingParams>,
}

/// Pale eyebrow stripe: `segments` capsules along a shallow arc
///
/// Segment `i` sits at parameter `t = i / (segments - 1)`:
/// `x = center_x + (t - 0.5) * spread`, `y = y + sin((t - 0.5)π) * arch`,
/// `z = z + cos((t - 0.5)π) * depth`, with X mirrored. `rotation` is shared
/// by both sides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuperciliumParams {
    pub segments: u32,
    pub center_x: f32,
    pub spread: f32,
    pub y: f32,
    pub arch: f32,
    pub z: f32,
    pub depth: f32,
    pub capsule: CapsuleParams,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub rotation: Vec3,
    pub material: MaterialParams,
}

/// One beak mandible revolved from a `(radius, length)` profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MandibleParams {
    pub profile: Vec<Vec2>,
    pub segments: u32,
    pub position: Vec3,
    pub rotation: Vec3,
    pub material: MaterialParams,
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub cast_shadow: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BeakParams {
    /// Single cone
    Cone {
        cone: ConeParams,
        position: Vec3,
        rotation: Vec3,
        material: MaterialParams,
    },
    /// Single lathe-revolved beak
    Lathe(MandibleParams),
    /// Upper and lower lathe mandibles; the lower one is the animated part
    Mandibles {
        upper: MandibleParams,
        lower: MandibleParams,
    },
}

/// Dark cutting-edge line along the beak side (X and `rotation.y` mirrored)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TomialEdgeParams {
    pub capsule: CapsuleParams,
    pub position: Vec3,
    pub rotation: Vec3,
    pub material: MaterialParams,
}

/// `start + step * i + alternate * (i % 2)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Progression {
    pub start: f32,
    #[serde(default, skip_serializing_if = "is_zero_f32")]
    pub step: f32,
    #[serde(default, skip_serializing_if = "is_zero_f32")]
    pub alternate: f32,
}

impl Progression {
    pub const fn linear(start: f32, step: f32) -> Self {
        Self {
            start,
            step,
            alternate: 0.0,
        }
    }

    pub const fn constant(value: f32) -> Self {
        Self::linear(value, 0.0)
    }

    pub const fn alternating(mut self, alternate: f32) -> Self {
        self.alternate = alternate;
        self
    }

    #[inline]
    pub fn at(&self, index: u32) -> f32 {
        self.start + self.step * index as f32 + self.alternate * (index % 2) as f32
    }
}

/// A row of thin box feathers generated from arithmetic progressions
///
/// Feather `i` is a box `thickness × height(i) × length(i)` placed at
/// `(x(i), y(i), z(i))` with yaw `yaw(i)`. X and yaw are mirrored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatherRowParams {
    pub name: String,
    pub count: u32,
    pub thickness: f32,
    pub length: Progression,
    pub height: Progression,
    pub x: Progression,
    pub y: Progression,
    pub z: Progression,
    pub yaw: Progression,
    pub material: MaterialParams,
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub cast_shadow: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub receive_shadow: bool,
}

fn default_true() -> bool {
    true
}

fn is_true(v: &bool) -> bool {
    *v
}

/// Flat wing slab (X and yaw mirrored)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelParams {
    pub size: Vec3,
    pub position: Vec3,
    pub yaw: f32,
    pub material: MaterialParams,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WingParams {
    /// A few solid slabs
    Panels { panels: Vec<PanelParams> },
    /// Layered feather rows (coverts, secondaries, primaries, ...)
    Layered { rows: Vec<FeatherRowParams> },
}

/// Fan of box feathers with a triangular length profile
///
/// With `c = (count - 1) / 2`, feather `i` has length
/// `center_length - |i - c| * taper`, sits at
/// `((i - c) * spacing, y, z - length / 2)` and is yawed by
/// `(i - c) * yaw_step * yaw_scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TailFanParams {
    pub count: u32,
    pub center_length: f32,
    pub taper: f32,
    pub width: f32,
    pub thickness: f32,
    pub spacing: f32,
    pub y: f32,
    pub z: f32,
    pub yaw_step: f32,
    pub yaw_scale: f32,
    pub position: Vec3,
    pub rotation: Vec3,
    pub material: MaterialParams,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TailParams {
    Cone {
        cone: ConeParams,
        position: Vec3,
        rotation: Vec3,
        material: MaterialParams,
    },
    Fan(TailFanParams),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TarsusParams {
    pub radius_top: f32,
    pub radius_bottom: f32,
    pub height: f32,
    pub segments: u32,
    pub position: Vec3,
    pub pitch: f32,
    pub material: MaterialParams,
}

/// Forward toes spread along X: toe `i` sits at `(i - (count - 1) / 2) * spacing`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToeParams {
    pub count: u32,
    pub cone: ConeParams,
    pub spacing: f32,
    pub y: f32,
    pub z: f32,
    pub pitch: f32,
    pub material: MaterialParams,
}

/// Claw at the tip of each forward toe (same X as its toe)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClawParams {
    pub cone: ConeParams,
    pub y: f32,
    pub z: f32,
    pub pitch: f32,
    pub material: MaterialParams,
}

/// Backward-pointing cone, offset given for the left foot (X mirrored)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RearToeParams {
    pub cone: ConeParams,
    pub offset: Vec3,
    pub pitch: f32,
    #[serde(default = "unit_scale")]
    pub scale: f32,
    pub material: MaterialParams,
}

fn unit_scale() -> f32 {
    1.0
}

/// Tarsus, toes and claws of one leg; `position` is the left leg (X mirrored)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegParams {
    pub position: Vec3,
    pub tarsus: TarsusParams,
    pub toes: ToeParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claws: Option<ClawParams>,
    pub rear_toe: RearToeParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rear_claw: Option<RearToeParams>,
}
