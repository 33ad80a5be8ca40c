//! The stage around the bird

use glam::Mat4;

use super::assembly::AnimationTargets;
use super::camera::{Camera, Viewport};
use super::node::{Node, Primitive, ShapeNode};
use crate::mesh::{generate_cylinder, Mesh};
use crate::params::{EnvironmentParams, LightParams, PerchParams};

/// A composed scene: the node tree, its lights and its camera
#[derive(Debug, Clone)]
pub struct Stage {
    /// The `scene` group holding the perch and the `bird` root
    pub root: Node,
    pub lights: Vec<LightParams>,
    pub camera: Camera,
    pub max_pixel_ratio: f32,
    pub(crate) targets: AnimationTargets,
}

impl Stage {
    pub(crate) fn new(root: Node, environment: &EnvironmentParams, targets: AnimationTargets) -> Self {
        Self {
            root,
            lights: environment.lights.clone(),
            camera: Camera::from_params(&environment.camera, Viewport::default()),
            max_pixel_ratio: environment.max_pixel_ratio,
            targets,
        }
    }

    /// The animated bird root
    pub fn bird(&self) -> Option<&Node> {
        self.root.get(&self.targets.root)
    }

    pub fn targets(&self) -> &AnimationTargets {
        &self.targets
    }

    pub fn find(&self, name: &str) -> Option<&Node> {
        self.root.find(name)
    }

    /// Visit every shape with its world matrix
    pub fn visit_shapes(&self, f: &mut impl FnMut(&ShapeNode, Mat4)) {
        self.root.visit_shapes(Mat4::IDENTITY, f);
    }
}

/// Static branch the bird grips
pub fn build_perch(params: &PerchParams) -> ShapeNode {
    let mesh: Mesh = generate_cylinder(params.radius_bottom, params.radius_top, params.length, params.segments);
    ShapeNode::new("perch", Primitive::Cylinder, mesh, params.material)
        .at(params.position)
        .rotated(params.rotation)
        .shadows(true, true)
}
