//! Idle animation
//!
//! The animator is a pure function of elapsed time: [`Animator::pose`]
//! evaluates every channel at `t`, [`Animator::apply`] writes the result into
//! the pre-resolved target nodes. Nothing accumulates between frames, so the
//! same time always gives the same pose.

use serde::Serialize;

use crate::error::BuildError;
use crate::params::{Channel, IdleParams};
use crate::scene::{AnimationTargets, Node, NodePath, Stage};

/// Transform values written by one animation step
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pose {
    /// Elapsed time in seconds
    pub time: f32,
    pub root_y: f32,
    pub tail_pitch: f32,
    pub head_pitch: f32,
    pub head_yaw: f32,
    pub beak_roll: f32,
    /// Roll of the left wing; the right wing mirrors it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wing_roll: Option<f32>,
}

/// Target field values at composition time
#[derive(Debug, Clone, Copy, PartialEq)]
struct Rest {
    root_y: f32,
    tail_pitch: f32,
    head_pitch: f32,
    head_yaw: f32,
    beak_roll: f32,
    wing_roll: f32,
}

/// Elapsed-time clock for the frame loop
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
    pub elapsed: f32,
}

impl AnimationState {
    /// Advance to a host timestamp in milliseconds. Time never runs backwards.
    pub fn advance_to(&mut self, now_ms: f64) -> f32 {
        let seconds = (now_ms / 1000.0) as f32;
        if seconds > self.elapsed {
            self.elapsed = seconds;
        }
        self.elapsed
    }
}

#[derive(Debug, Clone)]
pub struct Animator {
    idle: IdleParams,
    targets: AnimationTargets,
    rest: Rest,
}

fn node<'a>(root: &'a Node, path: &NodePath, what: &str) -> Result<&'a Node, BuildError> {
    root.get(path)
        .ok_or_else(|| BuildError::MissingTarget(what.to_string()))
}

impl Animator {
    /// Bind idle channels to a composed stage, capturing rest values
    pub fn new(idle: IdleParams, stage: &Stage) -> Result<Self, BuildError> {
        let targets = stage.targets().clone();
        let root = &stage.root;

        let head = node(root, &targets.head, "head")?.transform();
        let rest = Rest {
            root_y: node(root, &targets.root, "bird")?.transform().position.y,
            tail_pitch: node(root, &targets.tail, "tail")?.transform().rotation.x,
            head_pitch: head.rotation.x,
            head_yaw: head.rotation.y,
            beak_roll: node(root, &targets.beak, "beak")?.transform().rotation.z,
            wing_roll: node(root, &targets.wings[0], "wing.left")?.transform().rotation.z,
        };

        Ok(Self {
            idle,
            targets,
            rest,
        })
    }

    /// Evaluate every channel at `t` seconds
    pub fn pose(&self, t: f32) -> Pose {
        let idle = &self.idle;
        let rest = &self.rest;
        Pose {
            time: t,
            root_y: idle.breathe.value(rest.root_y, t),
            tail_pitch: idle.tail_pitch.value(rest.tail_pitch, t),
            head_pitch: idle.head_pitch.value(rest.head_pitch, t),
            head_yaw: idle.head_yaw.value(rest.head_yaw, t),
            beak_roll: idle.beak_roll.value(rest.beak_roll, t),
            wing_roll: idle
                .wing_flap
                .as_ref()
                .map(|flap: &Channel| flap.value(rest.wing_roll, t)),
        }
    }

    /// Write a pose into the stage. Only the targeted fields change.
    pub fn apply(&self, pose: &Pose, stage: &mut Stage) {
        let root = &mut stage.root;
        let targets = &self.targets;

        if let Some(bird) = root.get_mut(&targets.root) {
            bird.transform_mut().position.y = pose.root_y;
        }
        if let Some(tail) = root.get_mut(&targets.tail) {
            tail.transform_mut().rotation.x = pose.tail_pitch;
        }
        if let Some(head) = root.get_mut(&targets.head) {
            let transform = head.transform_mut();
            transform.rotation.x = pose.head_pitch;
            transform.rotation.y = pose.head_yaw;
        }
        if let Some(beak) = root.get_mut(&targets.beak) {
            beak.transform_mut().rotation.z = pose.beak_roll;
        }
        if let Some(roll) = pose.wing_roll {
            let [left, right] = &targets.wings;
            if let Some(wing) = root.get_mut(left) {
                wing.transform_mut().rotation.z = roll;
            }
            if let Some(wing) = root.get_mut(right) {
                wing.transform_mut().rotation.z = -roll;
            }
        }
    }

    /// `pose(t)` then `apply`
    pub fn animate(&self, t: f32, stage: &mut Stage) -> Pose {
        let pose = self.pose(t);
        self.apply(&pose, stage);
        pose
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Preset;
    use crate::scene::compose;
    use std::f32::consts::PI;

    fn animator(preset: Preset) -> (Animator, Stage) {
        let params = preset.params();
        let stage = compose(&params).unwrap();
        (Animator::new(params.bird.idle, &stage).unwrap(), stage)
    }

    #[test]
    fn test_pose_at_zero_is_rest_plus_base() {
        let (animator, _) = animator(Preset::V7);
        let pose = animator.pose(0.0);
        assert_eq!(pose.root_y, 0.22);
        assert!((pose.tail_pitch + PI / 2.52).abs() < 1e-6);
        assert_eq!(pose.head_pitch, 0.0);
        assert_eq!(pose.beak_roll, -0.045);
        assert_eq!(pose.wing_roll, None);
    }

    #[test]
    fn test_breathing_peak() {
        let (animator, _) = animator(Preset::Sculpture);
        let pose = animator.pose(PI / (2.0 * 1.6));
        assert!((pose.root_y - (0.22 + 0.025)).abs() < 1e-6);
    }

    #[test]
    fn test_same_time_same_pose() {
        let (animator, mut stage) = animator(Preset::V6);
        for t in [0.0, 0.016, 1.5, 90.25] {
            assert_eq!(animator.pose(t), animator.pose(t));
        }
        // Applying other frames in between changes nothing
        let first = animator.animate(3.2, &mut stage);
        animator.animate(10.0, &mut stage);
        let again = animator.animate(3.2, &mut stage);
        assert_eq!(first, again);
    }

    #[test]
    fn test_apply_writes_only_targets() {
        let (animator, mut stage) = animator(Preset::V5);
        let before = stage.root.clone();
        animator.animate(2.0, &mut stage);

        let written = ["bird", "head", "beak.lower", "tail"];
        let mut changed = Vec::new();
        let mut untouched = 0;
        for name in before.names() {
            let a = before.find(name).unwrap().transform();
            let b = stage.root.find(name).unwrap().transform();
            if a != b {
                changed.push(name.to_string());
            } else {
                untouched += 1;
            }
        }
        assert_eq!(changed, written);
        assert!(untouched > 100);
    }

    #[test]
    fn test_wing_flap_mirrors() {
        let params = Preset::V4.params();
        let stage = compose(&params).unwrap();
        let mut idle = params.bird.idle;
        idle.wing_flap = Some(Channel::sine(0.1, 3.0));
        let animator = Animator::new(idle, &stage).unwrap();
        let mut stage = stage;

        let pose = animator.animate(0.5, &mut stage);
        let roll = pose.wing_roll.unwrap();
        assert!((roll - 0.1 * 1.5f32.sin()).abs() < 1e-6);
        assert_eq!(stage.find("wing.left").unwrap().transform().rotation.z, roll);
        assert_eq!(stage.find("wing.right").unwrap().transform().rotation.z, -roll);
    }

    #[test]
    fn test_pose_json_omits_missing_wing_roll() {
        let (animator, _) = animator(Preset::V5);
        let json = serde_json::to_value(animator.pose(1.0)).unwrap();
        assert_eq!(json["time"], 1.0);
        assert!(json.get("root_y").is_some());
        assert!(json.get("wing_roll").is_none());
    }

    #[test]
    fn test_state_is_monotonic() {
        let mut state = AnimationState::default();
        assert_eq!(state.advance_to(1500.0), 1.5);
        assert_eq!(state.advance_to(1000.0), 1.5);
        assert_eq!(state.advance_to(2500.0), 2.5);
    }
}
