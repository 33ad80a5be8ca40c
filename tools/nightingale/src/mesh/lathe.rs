//! Surfaces of revolution
//!
//! A lathe revolves a 2D profile of `(radius, height)` samples around the Y
//! axis. Beak mandibles and capsules are both built this way.

use glam::{Vec2, Vec3};
use std::f32::consts::PI;
use tracing::warn;

use super::types::MeshBuilder;

/// Revolve `profile` around the Y axis
///
/// `profile[i].x` is the radius and `profile[i].y` the height of each sample.
/// A sample with zero radius collapses its whole ring onto the axis, which
/// closes the surface at that end.
///
/// # Returns
/// `None` when the profile has fewer than two points (there is nothing to
/// revolve), otherwise `(segments + 1) * profile.len()` vertices.
pub fn generate_lathe<M: MeshBuilder>(profile: &[Vec2], segments: u32) -> Option<M> {
    if profile.len() < 2 {
        return None;
    }
    let segments = if segments < 3 {
        warn!("generate_lathe: segments must be >= 3, clamping");
        3
    } else {
        segments.min(512)
    };

    let profile_normals = profile_normals(profile);
    let mut mesh = M::default();

    for i in 0..=segments {
        let phi = i as f32 / segments as f32 * 2.0 * PI;
        let (sin, cos) = phi.sin_cos();

        for (point, normal) in profile.iter().zip(&profile_normals) {
            let position = Vec3::new(point.x * sin, point.y, point.x * cos);
            let normal = Vec3::new(normal.x * sin, normal.y, normal.x * cos).normalize_or_zero();
            mesh.add_vertex(position, normal);
        }
    }

    let count = profile.len() as u32;
    for i in 0..segments {
        for j in 0..count - 1 {
            let base = j + i * count;
            let a = base;
            let b = base + count;
            let c = base + count + 1;
            let d = base + 1;

            mesh.add_triangle(a, b, d);
            mesh.add_triangle(c, d, b);
        }
    }

    Some(mesh)
}

/// Outward 2D normals per profile sample, averaged across interior joints
fn profile_normals(profile: &[Vec2]) -> Vec<Vec2> {
    let edge_normal = |from: Vec2, to: Vec2| {
        let d = to - from;
        Vec2::new(d.y, -d.x)
    };

    let last = profile.len() - 1;
    let mut normals = Vec::with_capacity(profile.len());
    let mut previous = edge_normal(profile[0], profile[1]);
    normals.push(previous.normalize_or_zero());

    for j in 1..last {
        let current = edge_normal(profile[j], profile[j + 1]);
        normals.push((current + previous).normalize_or_zero());
        previous = current;
    }

    normals.push(previous.normalize_or_zero());
    normals
}

/// Generate a capsule along the Y axis
///
/// # Arguments
/// * `radius` - Capsule radius
/// * `length` - Length of the straight middle section (>= 0.0)
/// * `cap_segments` - Divisions per hemisphere arc (min 1, max 64)
/// * `radial_segments` - Divisions around the axis (min 3, max 256)
///
/// # Returns
/// Total height = length + 2 * radius
pub fn generate_capsule<M: MeshBuilder>(
    radius: f32,
    length: f32,
    cap_segments: u32,
    radial_segments: u32,
) -> M {
    let radius = if radius <= 0.0 {
        warn!("generate_capsule: radius must be > 0.0, clamping to 0.001");
        0.001
    } else {
        radius
    };
    let length = if length < 0.0 {
        warn!("generate_capsule: length must be >= 0.0, clamping to 0.0");
        0.0
    } else {
        length
    };
    let cap_segments = cap_segments.clamp(1, 64);
    let half = length * 0.5;

    // Bottom pole up to the equator, then equator up to the top pole
    let mut profile = Vec::with_capacity(cap_segments as usize * 2 + 2);
    for k in 0..=cap_segments {
        let a = -PI * 0.5 + k as f32 / cap_segments as f32 * PI * 0.5;
        profile.push(Vec2::new(radius * a.cos(), -half + radius * a.sin()));
    }
    for k in 0..=cap_segments {
        let a = k as f32 / cap_segments as f32 * PI * 0.5;
        profile.push(Vec2::new(radius * a.cos(), half + radius * a.sin()));
    }

    // The profile always has at least four points
    generate_lathe(&profile, radial_segments.clamp(3, 256)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Mesh;

    fn beak_profile() -> Vec<Vec2> {
        [(0.0, 0.0), (0.03, 0.06), (0.055, 0.2), (0.048, 0.38), (0.03, 0.6)]
            .into_iter()
            .map(|(r, y)| Vec2::new(r, y))
            .collect()
    }

    fn radial_distance(p: &[f32; 3]) -> f32 {
        (p[0] * p[0] + p[2] * p[2]).sqrt()
    }

    #[test]
    fn test_lathe_rejects_short_profile() {
        assert!(generate_lathe::<Mesh>(&[], 32).is_none());
        assert!(generate_lathe::<Mesh>(&[Vec2::new(0.1, 0.0)], 32).is_none());
        assert!(generate_lathe::<Mesh>(&[Vec2::ZERO, Vec2::new(0.1, 0.2)], 32).is_some());
    }

    #[test]
    fn test_lathe_vertex_and_triangle_counts() {
        let mesh: Mesh = generate_lathe(&beak_profile(), 32).unwrap();
        assert_eq!(mesh.vertex_count(), 33 * 5);
        assert_eq!(mesh.triangle_count(), 32 * 4 * 2);
        for &idx in &mesh.indices {
            assert!((idx as usize) < mesh.vertex_count());
        }
    }

    #[test]
    fn test_lathe_radius_never_exceeds_profile_max() {
        let mesh: Mesh = generate_lathe(&beak_profile(), 32).unwrap();
        for p in &mesh.positions {
            assert!(radial_distance(p) <= 0.055 + 1e-6);
        }
    }

    #[test]
    fn test_lathe_zero_radius_closes_tip() {
        let mesh: Mesh = generate_lathe(&beak_profile(), 32).unwrap();
        // Every ring's first sample sits on the axis at height 0
        for ring in mesh.positions.chunks(5) {
            assert!(radial_distance(&ring[0]) < 1e-7);
            assert_eq!(ring[0][1], 0.0);
        }
    }

    #[test]
    fn test_lathe_seam_closes() {
        let mesh: Mesh = generate_lathe(&beak_profile(), 32).unwrap();
        let first = &mesh.positions[0..5];
        let last = &mesh.positions[32 * 5..33 * 5];
        for (a, b) in first.iter().zip(last) {
            assert!((Vec3::from(*a) - Vec3::from(*b)).length() < 1e-5);
        }
    }

    #[test]
    fn test_capsule_extent() {
        let mesh: Mesh = generate_capsule(0.006, 0.5, 2, 4);
        let (lo, hi) = mesh.bounds().unwrap();
        assert!((hi.y - lo.y - 0.512).abs() < 1e-5);
        for p in &mesh.positions {
            assert!(radial_distance(p) <= 0.006 + 1e-6);
        }
    }
}
