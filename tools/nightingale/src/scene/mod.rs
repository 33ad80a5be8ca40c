//! Scene tree, camera and composition

mod assembly;
mod camera;
mod environment;
mod node;

pub use assembly::{build_bird, compose, AnimationTargets};
pub use camera::{Camera, Viewport};
pub use environment::{build_perch, Stage};
pub use node::{GroupNode, LocalTransform, Material, Node, NodePath, Primitive, ShapeNode, TreeStats};
