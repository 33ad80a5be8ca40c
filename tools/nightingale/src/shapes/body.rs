//! Body and belly

use tracing::debug;

use super::{ellipsoid, ellipsoid_mesh};
use crate::mesh::{MeshApply, VertexGradient};
use crate::params::{BodyParams, EllipsoidParams};
use crate::scene::{Primitive, ShapeNode};

/// Stretched sphere, optionally painted with the underparts gradient
pub fn build_body(params: &BodyParams) -> ShapeNode {
    let shape = &params.shape;
    let mut mesh = ellipsoid_mesh(shape);

    if let Some(gradient) = &params.gradient {
        mesh.apply(VertexGradient {
            y_min: gradient.y_min,
            y_max: gradient.y_max,
            bottom: gradient.bottom,
            top: gradient.top,
            speckle: gradient.speckle,
        });
        debug!(vertices = mesh.vertex_count(), speckle = gradient.speckle, "painted body gradient");
    }

    ShapeNode::new("body", Primitive::Sphere, mesh, shape.material)
        .at(shape.position)
        .scaled(shape.scale)
        .shadows(true, true)
}

/// Pale underparts mass under the body
pub fn build_belly(params: &EllipsoidParams) -> ShapeNode {
    ellipsoid("belly", params, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::params::{GradientParams, MaterialParams};
    use glam::Vec3;

    fn body(gradient: Option<GradientParams>) -> BodyParams {
        BodyParams {
            shape: EllipsoidParams::new(1.15, 48, 36, MaterialParams::new(Rgb::hex(0x7b5932), 0.9, 0.05))
                .stretched(1.28, 1.02, 2.08),
            gradient,
        }
    }

    #[test]
    fn test_stretch_is_baked() {
        let node = build_body(&body(None));
        assert_eq!(node.transform.scale, Vec3::ONE);
        let (lo, hi) = node.mesh().bounds().unwrap();
        assert!((hi.z - 1.15 * 2.08).abs() < 1e-3);
        assert!((lo.y + 1.15 * 1.02).abs() < 1e-3);
        assert!(!node.material().vertex_colors);
    }

    #[test]
    fn test_gradient_enables_vertex_colors() {
        let node = build_body(&body(Some(GradientParams {
            y_min: -1.0,
            y_max: 1.0,
            bottom: Rgb::hex(0xf0e7d4),
            top: Rgb::hex(0x7b5932),
            speckle: 0.06,
        })));
        assert!(node.material().vertex_colors);
        assert_eq!(node.mesh().colors.len(), 49 * 37);
        assert!(node.receive_shadow);
    }
}
