//! Scene tree nodes
//!
//! The tree owns its nodes outright: a group holds its children by value and
//! a shape holds its mesh and material. Geometry and material are private and
//! never change after construction. Only transforms are writable.

use glam::{EulerRot, Mat4, Quat, Vec3};
use std::fmt::Write as _;

use crate::color::Rgb;
use crate::mesh::Mesh;
use crate::params::MaterialParams;

/// Position, Euler rotation (radians, XYZ order) and scale of a node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalTransform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl LocalTransform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// `T * R * S`
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.quat(), self.position)
    }
}

/// Surface properties handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base color (sRGB)
    pub color: Rgb,
    pub roughness: f32,
    pub metalness: f32,
    pub flat_shading: bool,
    /// Multiply the base color by the mesh's vertex colors
    pub vertex_colors: bool,
}

impl From<MaterialParams> for Material {
    fn from(params: MaterialParams) -> Self {
        Self {
            color: params.color,
            roughness: params.roughness,
            metalness: params.metalness,
            flat_shading: params.flat_shading,
            vertex_colors: false,
        }
    }
}

/// Which generator produced a shape's mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Sphere,
    Cylinder,
    Cone,
    Box,
    Torus,
    Capsule,
    Lathe,
}

impl Primitive {
    pub fn label(self) -> &'static str {
        match self {
            Primitive::Sphere => "sphere",
            Primitive::Cylinder => "cylinder",
            Primitive::Cone => "cone",
            Primitive::Box => "box",
            Primitive::Torus => "torus",
            Primitive::Capsule => "capsule",
            Primitive::Lathe => "lathe",
        }
    }
}

/// One renderable primitive
#[derive(Debug, Clone)]
pub struct ShapeNode {
    name: String,
    primitive: Primitive,
    mesh: Mesh,
    material: Material,
    pub transform: LocalTransform,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl ShapeNode {
    /// A shadow-casting shape at the origin. Vertex coloring is switched on
    /// when the mesh carries colors.
    pub fn new(name: impl Into<String>, primitive: Primitive, mesh: Mesh, material: impl Into<Material>) -> Self {
        let mut material = material.into();
        material.vertex_colors = mesh.has_colors();
        Self {
            name: name.into(),
            primitive,
            mesh,
            material,
            transform: LocalTransform::IDENTITY,
            cast_shadow: true,
            receive_shadow: false,
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.transform.rotation = rotation;
        self
    }

    pub fn scaled(mut self, scale: Vec3) -> Self {
        self.transform.scale = scale;
        self
    }

    pub fn shadows(mut self, cast: bool, receive: bool) -> Self {
        self.cast_shadow = cast;
        self.receive_shadow = receive;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn primitive(&self) -> Primitive {
        self.primitive
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}

/// Named container of child nodes
#[derive(Debug, Clone)]
pub struct GroupNode {
    name: String,
    pub transform: LocalTransform,
    children: Vec<Node>,
}

impl GroupNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: LocalTransform::IDENTITY,
            children: Vec::new(),
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.transform.rotation = rotation;
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

#[derive(Debug, Clone)]
pub enum Node {
    Shape(ShapeNode),
    Group(GroupNode),
}

impl From<ShapeNode> for Node {
    fn from(shape: ShapeNode) -> Self {
        Node::Shape(shape)
    }
}

impl From<GroupNode> for Node {
    fn from(group: GroupNode) -> Self {
        Node::Group(group)
    }
}

/// Child indices leading from a root node to one of its descendants
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

/// Size of a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    pub groups: usize,
    pub shapes: usize,
    pub vertices: usize,
    pub triangles: usize,
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Shape(shape) => shape.name(),
            Node::Group(group) => group.name(),
        }
    }

    pub fn transform(&self) -> &LocalTransform {
        match self {
            Node::Shape(shape) => &shape.transform,
            Node::Group(group) => &group.transform,
        }
    }

    pub fn transform_mut(&mut self) -> &mut LocalTransform {
        match self {
            Node::Shape(shape) => &mut shape.transform,
            Node::Group(group) => &mut group.transform,
        }
    }

    /// Children of a group, empty for shapes
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Shape(_) => &[],
            Node::Group(group) => &group.children,
        }
    }

    pub fn as_shape(&self) -> Option<&ShapeNode> {
        match self {
            Node::Shape(shape) => Some(shape),
            Node::Group(_) => None,
        }
    }

    /// Depth-first search for a node by name
    pub fn find_path(&self, name: &str) -> Option<NodePath> {
        fn search(node: &Node, name: &str, path: &mut Vec<usize>) -> bool {
            if node.name() == name {
                return true;
            }
            for (i, child) in node.children().iter().enumerate() {
                path.push(i);
                if search(child, name, path) {
                    return true;
                }
                path.pop();
            }
            false
        }

        let mut path = Vec::new();
        search(self, name, &mut path).then_some(NodePath(path))
    }

    pub fn find(&self, name: &str) -> Option<&Node> {
        self.find_path(name).and_then(|path| self.get(&path))
    }

    pub fn get(&self, path: &NodePath) -> Option<&Node> {
        path.0
            .iter()
            .try_fold(self, |node, &i| node.children().get(i))
    }

    pub fn get_mut(&mut self, path: &NodePath) -> Option<&mut Node> {
        let mut node = self;
        for &i in &path.0 {
            node = match node {
                Node::Group(group) => group.children.get_mut(i)?,
                Node::Shape(_) => return None,
            };
        }
        Some(node)
    }

    /// Visit every node depth-first with its world matrix
    pub fn visit(&self, parent: Mat4, f: &mut impl FnMut(&Node, Mat4)) {
        let world = parent * self.transform().matrix();
        f(self, world);
        for child in self.children() {
            child.visit(world, f);
        }
    }

    /// Visit every shape depth-first with its world matrix
    pub fn visit_shapes(&self, parent: Mat4, f: &mut impl FnMut(&ShapeNode, Mat4)) {
        self.visit(parent, &mut |node, world| {
            if let Node::Shape(shape) = node {
                f(shape, world);
            }
        });
    }

    /// World matrix of the node at `path`, treating `self` as the world root
    pub fn world_matrix(&self, path: &NodePath) -> Option<Mat4> {
        let mut node = self;
        let mut world = node.transform().matrix();
        for &i in &path.0 {
            node = node.children().get(i)?;
            world *= node.transform().matrix();
        }
        Some(world)
    }

    /// Every node name in depth-first order
    pub fn names(&self) -> Vec<&str> {
        let mut names = vec![self.name()];
        for child in self.children() {
            names.extend(child.names());
        }
        names
    }

    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        self.visit(Mat4::IDENTITY, &mut |node, _| match node {
            Node::Shape(shape) => {
                stats.shapes += 1;
                stats.vertices += shape.mesh().vertex_count();
                stats.triangles += shape.mesh().triangle_count();
            }
            Node::Group(_) => stats.groups += 1,
        });
        stats
    }

    /// Indented one-line-per-node listing
    pub fn outline(&self) -> String {
        fn write_node(node: &Node, depth: usize, out: &mut String) {
            let indent = "  ".repeat(depth);
            let p = node.transform().position;
            match node {
                Node::Group(group) => {
                    let _ = writeln!(
                        out,
                        "{indent}{}/ ({} children) @ ({:.3}, {:.3}, {:.3})",
                        group.name(),
                        group.children().len(),
                        p.x,
                        p.y,
                        p.z
                    );
                }
                Node::Shape(shape) => {
                    let _ = writeln!(
                        out,
                        "{indent}{} [{}, {} verts] @ ({:.3}, {:.3}, {:.3})",
                        shape.name(),
                        shape.primitive().label(),
                        shape.mesh().vertex_count(),
                        p.x,
                        p.y,
                        p.z
                    );
                }
            }
            for child in node.children() {
                write_node(child, depth + 1, out);
            }
        }

        let mut out = String::new();
        write_node(self, 0, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::generate_box;
    use std::f32::consts::FRAC_PI_2;

    fn cube(name: &str) -> ShapeNode {
        ShapeNode::new(
            name,
            Primitive::Box,
            generate_box(1.0, 1.0, 1.0),
            MaterialParams::new(Rgb::WHITE, 0.9, 0.05),
        )
    }

    fn tree() -> Node {
        GroupNode::new("root")
            .at(Vec3::new(0.0, 1.0, 0.0))
            .with_child(cube("a").at(Vec3::X))
            .with_child(
                GroupNode::new("arm")
                    .at(Vec3::new(2.0, 0.0, 0.0))
                    .rotated(Vec3::new(0.0, 0.0, FRAC_PI_2))
                    .with_child(cube("hand").at(Vec3::X)),
            )
            .into()
    }

    #[test]
    fn test_transform_matrix_order() {
        let t = LocalTransform::from_position(Vec3::new(1.0, 2.0, 3.0))
            .with_rotation(Vec3::new(0.0, FRAC_PI_2, 0.0))
            .with_scale(Vec3::splat(2.0));
        // Scale first, then rotate +X onto -Z, then translate
        let p = t.matrix().transform_point3(Vec3::X);
        assert!((p - Vec3::new(1.0, 2.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn test_find_and_get() {
        let root = tree();
        let path = root.find_path("hand").unwrap();
        assert_eq!(path.indices(), &[1, 0]);
        assert_eq!(root.get(&path).unwrap().name(), "hand");
        assert!(root.find_path("missing").is_none());
        assert_eq!(root.find_path("root").unwrap().indices(), &[] as &[usize]);
    }

    #[test]
    fn test_world_matrix_composes_parents() {
        let root = tree();
        let path = root.find_path("hand").unwrap();
        let world = root.world_matrix(&path).unwrap();
        // arm at (2,1,0) rotated 90° about Z maps the hand's +X offset onto +Y
        let p = world.transform_point3(Vec3::ZERO);
        assert!((p - Vec3::new(2.0, 2.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_get_mut_only_touches_transform() {
        let mut root = tree();
        let path = root.find_path("a").unwrap();
        root.get_mut(&path).unwrap().transform_mut().rotation.x = 0.5;

        let a = root.find("a").and_then(Node::as_shape).unwrap();
        assert_eq!(a.transform.rotation.x, 0.5);
        assert_eq!(a.mesh().vertex_count(), 24);
    }

    #[test]
    fn test_stats_and_names() {
        let root = tree();
        let stats = root.stats();
        assert_eq!(stats.groups, 2);
        assert_eq!(stats.shapes, 2);
        assert_eq!(stats.vertices, 48);
        assert_eq!(stats.triangles, 24);
        assert_eq!(root.names(), vec!["root", "a", "arm", "hand"]);
        assert!(root.outline().contains("  arm/ (1 children)"));
    }

    #[test]
    fn test_vertex_colors_follow_mesh() {
        let plain = cube("plain");
        assert!(!plain.material().vertex_colors);

        let mut mesh: Mesh = generate_box(1.0, 1.0, 1.0);
        mesh.colors = vec![[1.0, 0.0, 0.0]; mesh.vertex_count()];
        let painted = ShapeNode::new("painted", Primitive::Box, mesh, MaterialParams::new(Rgb::WHITE, 0.9, 0.05));
        assert!(painted.material().vertex_colors);
    }
}
