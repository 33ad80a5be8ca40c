//! Composition of a full stage from a parameter table

use std::collections::HashSet;

use tracing::{debug, info};

use super::environment::{build_perch, Stage};
use super::node::{GroupNode, Node, NodePath};
use crate::error::BuildError;
use crate::params::{BirdParams, SceneParams, Side};
use crate::shapes::*;

/// Nodes the idle loop writes to, resolved once at composition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationTargets {
    pub root: NodePath,
    pub head: NodePath,
    pub tail: NodePath,
    pub beak: NodePath,
    /// Left then right
    pub wings: [NodePath; 2],
}

/// Build the `bird` group: every part, bilateral parts once per side
pub fn build_bird(params: &BirdParams) -> Result<(GroupNode, String), BuildError> {
    let mut bird = GroupNode::new("bird");

    bird.push(build_body(&params.body));
    if let Some(belly) = &params.belly {
        bird.push(build_belly(belly));
    }
    bird.push(build_head(&params.head));
    if let Some(brow) = &params.brow {
        bird.push(build_brow(brow));
    }

    for side in Side::BOTH {
        if let Some(cheek) = &params.cheek {
            bird.push(build_cheek(cheek, side));
        }
        bird.push(build_eye(&params.eyes, side));
        if let Some(supercilium) = &params.supercilium {
            bird.push(build_supercilium(supercilium, side)?);
        }
    }

    let beak = build_beak(&params.beak)?;
    bird.push(beak.node);

    for side in Side::BOTH {
        if let Some(edge) = &params.tomial_edge {
            bird.push(build_tomial_edge(edge, side));
        }
        if let Some(nostril) = &params.nares {
            bird.push(build_nostril(nostril, side));
        }
    }

    for side in Side::BOTH {
        bird.push(build_wing(&params.wings, side)?);
        if let Some(row) = &params.scapulars {
            bird.push(build_scapulars(row, side)?);
        }
    }

    bird.push(build_tail(&params.tail)?);

    for side in Side::BOTH {
        bird.push(build_leg(&params.legs, side)?);
    }

    debug!(parts = bird.children().len(), "built bird");
    Ok((bird, beak.animated))
}

fn check_unique_names(root: &Node) -> Result<(), BuildError> {
    let mut seen = HashSet::new();
    for name in root.names() {
        if !seen.insert(name) {
            return Err(BuildError::DuplicateNode(name.to_string()));
        }
    }
    Ok(())
}

fn resolve(root: &Node, name: &str) -> Result<NodePath, BuildError> {
    root.find_path(name)
        .ok_or_else(|| BuildError::MissingTarget(name.to_string()))
}

/// Compose the full stage: perch and bird under a `scene` root, with the
/// bird placed at its rest position and animation targets resolved
pub fn compose(params: &SceneParams) -> Result<Stage, BuildError> {
    let env = &params.environment;
    let (bird, beak) = build_bird(&params.bird)?;

    let root: Node = GroupNode::new("scene")
        .with_child(build_perch(&env.perch))
        .with_child(bird.at(env.root_position))
        .into();

    check_unique_names(&root)?;

    let targets = AnimationTargets {
        root: resolve(&root, "bird")?,
        head: resolve(&root, "head")?,
        tail: resolve(&root, "tail")?,
        beak: resolve(&root, &beak)?,
        wings: [
            resolve(&root, &Side::Left.name("wing"))?,
            resolve(&root, &Side::Right.name("wing"))?,
        ],
    };

    let stats = root.stats();
    info!(
        scene = %params.name,
        groups = stats.groups,
        shapes = stats.shapes,
        vertices = stats.vertices,
        triangles = stats.triangles,
        "composed scene"
    );

    Ok(Stage::new(root, env, targets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Preset;
    use glam::Vec3;

    #[test]
    fn test_compose_places_bird_at_rest() {
        let stage = compose(&Preset::V5.params()).unwrap();
        let bird = stage.bird().unwrap();
        assert_eq!(bird.name(), "bird");
        assert_eq!(bird.transform().position, Vec3::new(0.0, 0.2, 0.0));
        assert_eq!(stage.root.children()[0].name(), "perch");
    }

    #[test]
    fn test_targets_resolve_to_named_nodes() {
        let stage = compose(&Preset::V6.params()).unwrap();
        let targets = stage.targets();
        assert_eq!(stage.root.get(&targets.head).unwrap().name(), "head");
        assert_eq!(stage.root.get(&targets.tail).unwrap().name(), "tail");
        assert_eq!(stage.root.get(&targets.beak).unwrap().name(), "beak.lower");
        assert_eq!(stage.root.get(&targets.wings[1]).unwrap().name(), "wing.right");
    }

    #[test]
    fn test_optional_parts_follow_table() {
        let sculpture = compose(&Preset::Sculpture.params()).unwrap();
        assert!(sculpture.find("belly").is_some());
        assert!(sculpture.find("brow").is_none());
        assert!(sculpture.find("supercilium.left").is_none());

        let v7 = compose(&Preset::V7.params()).unwrap();
        assert!(v7.find("belly").is_none());
        assert!(v7.find("supercilium.right.10").is_some());
        assert!(v7.find("wing.left.pale_band.4").is_some());
        assert!(v7.find("naris.right").is_some());
    }

    #[test]
    fn test_duplicate_row_names_are_rejected() {
        let mut params = Preset::V4.params();
        if let crate::params::WingParams::Layered { rows } = &mut params.bird.wings {
            rows[1].name = rows[0].name.clone();
        }
        let err = compose(&params).unwrap_err();
        assert!(matches!(err, BuildError::DuplicateNode(name) if name == "wing.left.secondaries"));
    }

    #[test]
    fn test_composition_is_deterministic() {
        let a = compose(&Preset::V7.params()).unwrap();
        let b = compose(&Preset::V7.params()).unwrap();
        let mut meshes_a = Vec::new();
        a.visit_shapes(&mut |shape, world| meshes_a.push((shape.name().to_string(), shape.mesh().clone(), world)));
        let mut meshes_b = Vec::new();
        b.visit_shapes(&mut |shape, world| meshes_b.push((shape.name().to_string(), shape.mesh().clone(), world)));
        assert_eq!(meshes_a, meshes_b);
    }
}
