//! Procedural mesh primitives
//!
//! Sphere, cylinder/cone, box and torus generators. Vertices come in rows of
//! `segments + 1` with a duplicated seam, so per-vertex effects keyed by
//! vertex index (the body speckle) are stable.

use glam::Vec3;
use std::f32::consts::PI;
use tracing::warn;

use super::types::MeshBuilder;

/// Generate a UV sphere
///
/// # Arguments
/// * `radius` - Sphere radius (> 0.0)
/// * `width_segments` - Longitudinal divisions (min 3, max 256)
/// * `height_segments` - Latitudinal divisions (min 2, max 256)
///
/// # Returns
/// `(width_segments + 1) * (height_segments + 1)` vertices, pole rows included
pub fn generate_sphere<M: MeshBuilder>(radius: f32, width_segments: u32, height_segments: u32) -> M {
    let radius = if radius <= 0.0 {
        warn!("generate_sphere: radius must be > 0.0, clamping to 0.001");
        0.001
    } else {
        radius
    };
    let width_segments = width_segments.clamp(3, 256);
    let height_segments = height_segments.clamp(2, 256);

    let mut mesh = M::default();
    let mut grid: Vec<Vec<u32>> = Vec::with_capacity(height_segments as usize + 1);

    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;
        let mut row = Vec::with_capacity(width_segments as usize + 1);

        for ix in 0..=width_segments {
            let u = ix as f32 / width_segments as f32;
            let position = Vec3::new(
                -radius * (u * 2.0 * PI).cos() * (v * PI).sin(),
                radius * (v * PI).cos(),
                radius * (u * 2.0 * PI).sin() * (v * PI).sin(),
            );
            row.push(mesh.add_vertex(position, position.normalize_or_zero()));
        }
        grid.push(row);
    }

    for iy in 0..height_segments as usize {
        for ix in 0..width_segments as usize {
            let a = grid[iy][ix + 1];
            let b = grid[iy][ix];
            let c = grid[iy + 1][ix];
            let d = grid[iy + 1][ix + 1];

            // Pole rows collapse to a point, so skip the degenerate half
            if iy != 0 {
                mesh.add_triangle(a, b, d);
            }
            if iy != height_segments as usize - 1 {
                mesh.add_triangle(b, c, d);
            }
        }
    }

    mesh
}

/// Generate a cylinder or cone mesh
///
/// # Arguments
/// * `radius_bottom` - Bottom radius (>= 0.0)
/// * `radius_top` - Top radius (>= 0.0)
/// * `height` - Cylinder height, centered on the origin along Y
/// * `segments` - Number of radial divisions (min 3, max 256)
///
/// # Returns
/// Mesh with body and caps (caps only where the radius is > 0)
pub fn generate_cylinder<M: MeshBuilder>(
    radius_bottom: f32,
    radius_top: f32,
    height: f32,
    segments: u32,
) -> M {
    let radius_bottom = if radius_bottom < 0.0 {
        warn!("generate_cylinder: radius_bottom must be >= 0.0, clamping to 0.0");
        0.0
    } else {
        radius_bottom
    };

    let radius_top = if radius_top < 0.0 {
        warn!("generate_cylinder: radius_top must be >= 0.0, clamping to 0.0");
        0.0
    } else {
        radius_top
    };

    let height = if height <= 0.0 {
        warn!("generate_cylinder: height must be > 0.0, clamping to 0.001");
        0.001
    } else {
        height
    };

    let segments = segments.clamp(3, 256);

    let mut mesh = M::default();
    let half_height = height * 0.5;
    let slope = (radius_bottom - radius_top) / height;

    // Body: top ring then bottom ring, seam vertex duplicated
    let mut rings: [Vec<u32>; 2] = [Vec::new(), Vec::new()];
    for (y, ring) in rings.iter_mut().enumerate() {
        let v = y as f32;
        let radius = v * (radius_bottom - radius_top) + radius_top;

        for x in 0..=segments {
            let theta = (x as f32 / segments as f32) * 2.0 * PI;
            let (sin_theta, cos_theta) = theta.sin_cos();

            let position = Vec3::new(
                radius * sin_theta,
                -v * height + half_height,
                radius * cos_theta,
            );
            let normal = Vec3::new(sin_theta, slope, cos_theta).normalize();
            ring.push(mesh.add_vertex(position, normal));
        }
    }

    for x in 0..segments as usize {
        let a = rings[0][x];
        let b = rings[1][x];
        let c = rings[1][x + 1];
        let d = rings[0][x + 1];

        mesh.add_triangle(a, b, d);
        mesh.add_triangle(b, c, d);
    }

    if radius_top > 0.0 {
        add_cap(&mut mesh, radius_top, half_height, segments, true);
    }
    if radius_bottom > 0.0 {
        add_cap(&mut mesh, radius_bottom, half_height, segments, false);
    }

    mesh
}

/// Generate a cone (a cylinder with a zero top radius)
pub fn generate_cone<M: MeshBuilder>(radius: f32, height: f32, segments: u32) -> M {
    generate_cylinder(radius, 0.0, height, segments)
}

fn add_cap<M: MeshBuilder>(mesh: &mut M, radius: f32, half_height: f32, segments: u32, top: bool) {
    let sign = if top { 1.0 } else { -1.0 };
    let normal = Vec3::new(0.0, sign, 0.0);

    // One center vertex per segment, then the rim
    let centers: Vec<u32> = (0..segments)
        .map(|_| mesh.add_vertex(Vec3::new(0.0, half_height * sign, 0.0), normal))
        .collect();

    let rim: Vec<u32> = (0..=segments)
        .map(|x| {
            let theta = (x as f32 / segments as f32) * 2.0 * PI;
            let position = Vec3::new(radius * theta.sin(), half_height * sign, radius * theta.cos());
            mesh.add_vertex(position, normal)
        })
        .collect();

    for x in 0..segments as usize {
        let c = centers[x];
        let i = rim[x];
        let j = rim[x + 1];
        if top {
            mesh.add_triangle(i, j, c);
        } else {
            mesh.add_triangle(j, i, c);
        }
    }
}

/// Generate an axis-aligned box centered on the origin
///
/// # Arguments
/// * `width` - Extent along X
/// * `height` - Extent along Y
/// * `depth` - Extent along Z
///
/// # Returns
/// 24 vertices (4 per face, flat normals) and 12 triangles
pub fn generate_box<M: MeshBuilder>(width: f32, height: f32, depth: f32) -> M {
    let size = Vec3::new(width, height, depth);
    let size = if size.cmple(Vec3::ZERO).any() {
        warn!("generate_box: dimensions must be > 0.0, clamping to 0.001");
        size.max(Vec3::splat(0.001))
    } else {
        size
    };

    let mut mesh = M::default();

    // (u axis, v axis, w axis, u dir, v dir, plane width, plane height, plane depth)
    let planes: [(usize, usize, usize, f32, f32, f32, f32, f32); 6] = [
        (2, 1, 0, -1.0, -1.0, size.z, size.y, size.x),
        (2, 1, 0, 1.0, -1.0, size.z, size.y, -size.x),
        (0, 2, 1, 1.0, 1.0, size.x, size.z, size.y),
        (0, 2, 1, 1.0, -1.0, size.x, size.z, -size.y),
        (0, 1, 2, 1.0, -1.0, size.x, size.y, size.z),
        (0, 1, 2, -1.0, -1.0, size.x, size.y, -size.z),
    ];

    for (u, v, w, udir, vdir, plane_width, plane_height, plane_depth) in planes {
        let mut corners = [0u32; 4];
        let mut normal = Vec3::ZERO;
        normal[w] = plane_depth.signum();

        for iy in 0..2 {
            let y = iy as f32 * plane_height - plane_height * 0.5;
            for ix in 0..2 {
                let x = ix as f32 * plane_width - plane_width * 0.5;
                let mut position = Vec3::ZERO;
                position[u] = x * udir;
                position[v] = y * vdir;
                position[w] = plane_depth * 0.5;
                corners[iy * 2 + ix] = mesh.add_vertex(position, normal);
            }
        }

        let [a, d, b, c] = corners;
        mesh.add_triangle(a, b, d);
        mesh.add_triangle(b, c, d);
    }

    mesh
}

/// Generate a torus lying in the XY plane
///
/// # Arguments
/// * `radius` - Distance from the torus center to the tube center
/// * `tube` - Tube radius
/// * `radial_segments` - Divisions around the tube (min 3, max 256)
/// * `tubular_segments` - Divisions along the ring (min 3, max 512)
/// * `arc` - Swept angle in radians; less than `2π` leaves an open arc
pub fn generate_torus<M: MeshBuilder>(
    radius: f32,
    tube: f32,
    radial_segments: u32,
    tubular_segments: u32,
    arc: f32,
) -> M {
    let radius = if radius <= 0.0 {
        warn!("generate_torus: radius must be > 0.0, clamping to 0.001");
        0.001
    } else {
        radius
    };
    let tube = if tube <= 0.0 {
        warn!("generate_torus: tube must be > 0.0, clamping to 0.001");
        0.001
    } else {
        tube
    };
    let arc = if arc <= 0.0 || arc > 2.0 * PI {
        warn!("generate_torus: arc must be in (0, 2π], clamping");
        arc.clamp(0.001, 2.0 * PI)
    } else {
        arc
    };
    let radial_segments = radial_segments.clamp(3, 256);
    let tubular_segments = tubular_segments.clamp(3, 512);

    let mut mesh = M::default();

    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32 * 2.0 * PI;
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * arc;

            let position = Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            mesh.add_vertex(position, (position - center).normalize_or_zero());
        }
    }

    let stride = tubular_segments + 1;
    for j in 1..=radial_segments {
        for i in 1..=tubular_segments {
            let a = stride * j + i - 1;
            let b = stride * (j - 1) + i - 1;
            let c = stride * (j - 1) + i;
            let d = stride * j + i;

            mesh.add_triangle(a, b, d);
            mesh.add_triangle(b, c, d);
        }
    }

    mesh
}
