//! Vertex color painting
//!
//! A vertical two-color gradient with optional speckle mottling on the lower
//! part of the mesh. Used for the pale underparts fading into warm brown
//! upperparts on the body.

use super::modifiers::MeshModifier;
use super::types::Mesh;
use crate::color::Rgb;

/// Paint a vertical gradient into the mesh's vertex colors
///
/// Vertices at or below `y_min` get `bottom`, at or above `y_max` get `top`,
/// and everything between is interpolated in linear space. When `speckle` is
/// non-zero, vertices below `(y_min + y_max) * 0.25` are darkened or
/// brightened by a deterministic per-vertex factor.
#[derive(Debug, Clone, Copy)]
pub struct VertexGradient {
    pub y_min: f32,
    pub y_max: f32,
    pub bottom: Rgb,
    pub top: Rgb,
    pub speckle: f32,
}

impl VertexGradient {
    /// Normalized height of `y` within the gradient, clamped to `[0, 1]`
    #[inline]
    pub fn factor(&self, y: f32) -> f32 {
        let span = self.y_max - self.y_min;
        if span.abs() <= f32::EPSILON {
            return if y < self.y_min { 0.0 } else { 1.0 };
        }
        ((y - self.y_min) / span).clamp(0.0, 1.0)
    }

    /// Height below which speckle is applied
    #[inline]
    pub fn speckle_threshold(&self) -> f32 {
        (self.y_min + self.y_max) * 0.25
    }

    /// Linear color for vertex `index` at height `y`
    pub fn color_at(&self, index: usize, y: f32) -> Rgb {
        let color = self
            .bottom
            .to_linear()
            .lerp(self.top.to_linear(), self.factor(y));

        if self.speckle > 0.0 && y < self.speckle_threshold() {
            let n = speckle_noise(index);
            color.scale(1.0 + (n - 0.5) * self.speckle)
        } else {
            color
        }
    }
}

impl MeshModifier for VertexGradient {
    fn apply(&self, mesh: &mut Mesh) {
        mesh.colors = mesh
            .positions
            .iter()
            .enumerate()
            .map(|(i, p)| self.color_at(i, p[1]).to_array())
            .collect();
    }
}

/// Sine-hash pseudo-noise keyed by vertex index
///
/// Not a random number generator: the same index always gives the same
/// value. The remainder is truncating, so results lie in `(-1, 1)`.
#[inline]
pub fn speckle_noise(index: usize) -> f32 {
    let x = index as f64;
    ((x * 12.9898).sin() * 43758.5453 % 1.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{generate_sphere, MeshApply, Transform};

    fn gradient(speckle: f32) -> VertexGradient {
        VertexGradient {
            y_min: -1.0,
            y_max: 1.0,
            bottom: Rgb::hex(0xf0e7d4),
            top: Rgb::hex(0x7b5932),
            speckle,
        }
    }

    #[test]
    fn test_factor_clamps_outside_range() {
        let g = gradient(0.0);
        assert_eq!(g.factor(-5.0), 0.0);
        assert_eq!(g.factor(-1.0), 0.0);
        assert_eq!(g.factor(0.0), 0.5);
        assert_eq!(g.factor(1.0), 1.0);
        assert_eq!(g.factor(1.2), 1.0);
    }

    #[test]
    fn test_out_of_range_heights_return_endpoint_colors() {
        let g = gradient(0.0);
        let bottom = Rgb::hex(0xf0e7d4).to_linear();
        let top = Rgb::hex(0x7b5932).to_linear();

        for y in [-1.0, -1.17, -3.0, -100.0] {
            assert_eq!(g.color_at(0, y), bottom);
        }
        for y in [1.0, 1.17, 3.0, 100.0] {
            let c = g.color_at(0, y);
            assert!((c.r - top.r).abs() < 1e-6);
            assert!((c.g - top.g).abs() < 1e-6);
            assert!((c.b - top.b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_speckle_only_below_threshold() {
        let plain = gradient(0.0);
        let speckled = gradient(0.08);

        // Threshold is 0.0 for a symmetric range
        for i in 0..64 {
            assert_eq!(plain.color_at(i, 0.5), speckled.color_at(i, 0.5));
            assert_eq!(plain.color_at(i, 0.0), speckled.color_at(i, 0.0));
        }
        let differs = (1..64).any(|i| plain.color_at(i, -0.5) != speckled.color_at(i, -0.5));
        assert!(differs);
    }

    #[test]
    fn test_speckle_noise_is_deterministic_and_bounded() {
        for i in 0..2000 {
            let n = speckle_noise(i);
            assert_eq!(n, speckle_noise(i));
            assert!(n > -1.0 && n < 1.0);
        }
        assert_eq!(speckle_noise(0), 0.0);
    }

    #[test]
    fn test_apply_paints_every_vertex() {
        let mut mesh = generate_sphere::<Mesh>(1.15, 24, 18);
        mesh.apply(Transform::scale(1.28, 1.02, 2.08)).apply(gradient(0.06));

        assert!(mesh.has_colors());
        // North pole overshoots y_max and must be clamped to the top color
        let top = Rgb::hex(0x7b5932).to_linear().to_array();
        for (a, b) in mesh.colors[0].iter().zip(top) {
            assert!((a - b).abs() < 1e-6);
        }
    }
}
