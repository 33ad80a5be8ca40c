//! Idle animation parameters

use serde::{Deserialize, Serialize};

fn is_zero(v: &f32) -> bool {
    *v == 0.0
}

/// One `amplitude * sin(frequency * t + phase)` term
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SineTerm {
    pub amplitude: f32,
    pub frequency: f32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub phase: f32,
}

impl SineTerm {
    pub const fn new(amplitude: f32, frequency: f32) -> Self {
        Self {
            amplitude,
            frequency,
            phase: 0.0,
        }
    }

    #[inline]
    pub fn eval(&self, t: f32) -> f32 {
        self.amplitude * (self.frequency * t + self.phase).sin()
    }
}

/// A single animated transform field
///
/// The written value is `base + Σ terms`. Without an explicit `base` the
/// field's rest value (captured when the scene is composed) is used.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Channel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<f32>,
    #[serde(default)]
    pub terms: Vec<SineTerm>,
}

impl Channel {
    /// Channel of one sine term around the rest value
    pub fn sine(amplitude: f32, frequency: f32) -> Self {
        Self {
            base: None,
            terms: vec![SineTerm::new(amplitude, frequency)],
        }
    }

    pub fn with_base(mut self, base: f32) -> Self {
        self.base = Some(base);
        self
    }

    /// Sum of all sine terms at time `t` (seconds)
    pub fn offset(&self, t: f32) -> f32 {
        self.terms.iter().map(|term| term.eval(t)).sum()
    }

    /// Final value at time `t` given the rest value of the target field
    #[inline]
    pub fn value(&self, rest: f32, t: f32) -> f32 {
        self.base.unwrap_or(rest) + self.offset(t)
    }
}

/// The perched idle loop: breathing, tail flick, head bob, beak motion
///
/// `wing_flap` rolls both wings about Z, mirrored per side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdleParams {
    /// Root height
    pub breathe: Channel,
    /// Tail rotation about X
    pub tail_pitch: Channel,
    /// Head rotation about X
    pub head_pitch: Channel,
    /// Head rotation about Y
    pub head_yaw: Channel,
    /// Beak (or lower mandible) rotation about Z
    pub beak_roll: Channel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wing_flap: Option<Channel>,
}
