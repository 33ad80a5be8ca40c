//! Parameter tables
//!
//! A [`SceneParams`] fully describes one bird: every body part, its idle
//! motion and the environment it is shown in. Tables are plain data. They
//! can be built in code (see [`presets`]) or loaded from TOML (see
//! [`crate::config`]).

mod environment;
mod motion;
mod parts;

pub mod presets;

use serde::{Deserialize, Serialize};

pub use environment::{CameraParams, EnvironmentParams, LightParams, PerchParams, ShadowParams};
pub use motion::{Channel, IdleParams, SineTerm};
pub use parts::{
    BeakParams, BodyParams, CapsuleParams, ClawParams, ConeParams, EllipsoidParams, EyeParams,
    FeatherRowParams, GradientParams, LegParams, MandibleParams, MaterialParams, PanelParams,
    Progression, RearToeParams, RingParams, SuperciliumParams, TailFanParams, TailParams,
    TarsusParams, ToeParams, TomialEdgeParams, TorusParams, WingParams,
};
pub use presets::Preset;

/// Which copy of a bilateral part is being built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// +1 for the left side, -1 for the right side
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }

    /// Suffix appended to mirrored node names
    pub fn suffix(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    /// `"{base}.left"` or `"{base}.right"`
    pub fn name(self, base: &str) -> String {
        format!("{base}.{}", self.suffix())
    }
}

/// Every body part of the bird plus its idle motion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirdParams {
    pub body: BodyParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub belly: Option<EllipsoidParams>,
    pub head: EllipsoidParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brow: Option<EllipsoidParams>,
    /// Auricular patch, left side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cheek: Option<EllipsoidParams>,
    pub eyes: EyeParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supercilium: Option<SuperciliumParams>,
    pub beak: BeakParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tomial_edge: Option<TomialEdgeParams>,
    /// Nostril, left side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nares: Option<EllipsoidParams>,
    pub wings: WingParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scapulars: Option<FeatherRowParams>,
    pub tail: TailParams,
    pub legs: LegParams,
    pub idle: IdleParams,
}

/// A complete, named scene description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneParams {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub bird: BirdParams,
    pub environment: EnvironmentParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_sign_and_names() {
        assert_eq!(Side::Left.sign(), 1.0);
        assert_eq!(Side::Right.sign(), -1.0);
        assert_eq!(Side::Left.name("wing"), "wing.left");
        assert_eq!(Side::Right.name("eye.ring"), "eye.ring.right");
    }

    #[test]
    fn test_progression() {
        let p = Progression::linear(0.8, -0.05);
        assert_eq!(p.at(0), 0.8);
        assert!((p.at(2) - 0.7).abs() < 1e-6);

        let alt = Progression::constant(0.08).alternating(0.02);
        assert_eq!(alt.at(0), 0.08);
        assert!((alt.at(1) - 0.1).abs() < 1e-6);
        assert_eq!(alt.at(2), 0.08);
    }
}
