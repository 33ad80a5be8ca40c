//! Static surroundings: perch, camera framing and lights

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::parts::MaterialParams;
use crate::color::Rgb;

fn default_pixel_ratio() -> f32 {
    2.0
}

/// The branch the bird sits on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerchParams {
    pub radius_top: f32,
    pub radius_bottom: f32,
    pub length: f32,
    pub segments: u32,
    pub position: Vec3,
    pub rotation: Vec3,
    pub material: MaterialParams,
}

/// Initial camera framing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraParams {
    /// Vertical field of view in degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadowParams {
    pub map_size: u32,
    pub near: f32,
    pub far: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LightParams {
    Hemisphere {
        sky: Rgb,
        ground: Rgb,
        intensity: f32,
    },
    Directional {
        color: Rgb,
        intensity: f32,
        position: Vec3,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        shadow: Option<ShadowParams>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentParams {
    pub perch: PerchParams,
    /// Rest position of the bird root
    pub root_position: Vec3,
    pub camera: CameraParams,
    pub lights: Vec<LightParams>,
    /// Upper bound on the device pixel ratio used for the drawable surface
    #[serde(default = "default_pixel_ratio")]
    pub max_pixel_ratio: f32,
}
