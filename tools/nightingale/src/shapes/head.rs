//! Head, brow mass and auricular patches

use super::ellipsoid;
use crate::params::{EllipsoidParams, Side};
use crate::scene::ShapeNode;

pub fn build_head(params: &EllipsoidParams) -> ShapeNode {
    ellipsoid("head", params, None)
}

pub fn build_brow(params: &EllipsoidParams) -> ShapeNode {
    ellipsoid("brow", params, None)
}

/// Darker cheek oval, one per side
pub fn build_cheek(params: &EllipsoidParams, side: Side) -> ShapeNode {
    ellipsoid(side.name("cheek"), params, Some(side))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::params::MaterialParams;
    use glam::Vec3;

    #[test]
    fn test_cheeks_mirror() {
        let params = EllipsoidParams::new(0.25, 28, 20, MaterialParams::new(Rgb::hex(0x5a3f26), 0.9, 0.05))
            .scaled(1.05, 0.7, 0.5)
            .at(0.12, 0.96, 0.7);
        let left = build_cheek(&params, Side::Left);
        let right = build_cheek(&params, Side::Right);

        assert_eq!(left.name(), "cheek.left");
        assert_eq!(right.name(), "cheek.right");
        assert_eq!(left.transform.position, Vec3::new(0.12, 0.96, 0.7));
        assert_eq!(right.transform.position, Vec3::new(-0.12, 0.96, 0.7));
        assert_eq!(left.transform.scale, right.transform.scale);
    }

    #[test]
    fn test_head_geometry_stretch() {
        let params = EllipsoidParams::new(0.73, 44, 32, MaterialParams::new(Rgb::hex(0x6c4e2f), 0.9, 0.05))
            .stretched(1.02, 1.06, 1.02)
            .at(0.0, 1.01, 0.6);
        let head = build_head(&params);
        let (_, hi) = head.mesh().bounds().unwrap();
        assert!((hi.y - 0.73 * 1.06).abs() < 1e-4);
        assert_eq!(head.transform.position.y, 1.01);
    }
}
