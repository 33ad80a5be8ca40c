//! Wavefront OBJ and MTL writers

use std::io::{self, Write};

use glam::{Mat3, Mat4, Vec3};

use crate::color::Rgb;
use crate::mesh::Mesh;
use crate::scene::{Material, Stage};

/// Counts of what was written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportStats {
    pub objects: usize,
    pub vertices: usize,
    pub triangles: usize,
}

/// Phong exponent for a roughness in `[0, 1]`
pub fn shininess(roughness: f32) -> f32 {
    let smooth = 1.0 - roughness.clamp(0.0, 1.0);
    1000.0 * smooth * smooth
}

/// Write every shape of the stage in world space, one `o` block per shape.
///
/// Each object uses a material named after the shape. Vertex colors are
/// written in sRGB after the position when the mesh has them.
pub fn write_obj(stage: &Stage, mtllib: Option<&str>, out: &mut impl Write) -> io::Result<ExportStats> {
    let mut stats = ExportStats::default();
    let mut result = Ok(());

    writeln!(out, "# nightingale scene export")?;
    if let Some(lib) = mtllib {
        writeln!(out, "mtllib {lib}")?;
    }

    stage.visit_shapes(&mut |shape, world| {
        if result.is_err() {
            return;
        }
        // 1-based, continuing across objects
        let base = stats.vertices as u32 + 1;
        result = write_object(&mut *out, shape.name(), shape.mesh(), world, base);
        stats.objects += 1;
        stats.vertices += shape.mesh().vertex_count();
        stats.triangles += shape.mesh().triangle_count();
    });
    result?;

    Ok(stats)
}

fn write_object(out: &mut impl Write, name: &str, mesh: &Mesh, world: Mat4, base: u32) -> io::Result<()> {
    let normal_matrix = Mat3::from_mat4(world).inverse().transpose();

    writeln!(out, "o {name}")?;
    writeln!(out, "usemtl {name}")?;

    let colored = mesh.has_colors();
    for (i, p) in mesh.positions.iter().enumerate() {
        let p = world.transform_point3(Vec3::from(*p));
        match mesh.colors.get(i).filter(|_| colored) {
            Some(c) => {
                let c = Rgb::from(*c).to_srgb();
                writeln!(out, "v {} {} {} {} {} {}", p.x, p.y, p.z, c.r, c.g, c.b)?;
            }
            None => writeln!(out, "v {} {} {}", p.x, p.y, p.z)?,
        }
    }

    for n in &mesh.normals {
        let n = (normal_matrix * Vec3::from(*n)).normalize_or_zero();
        writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
    }

    for tri in mesh.indices.chunks_exact(3) {
        let a = tri[0] + base;
        let b = tri[1] + base;
        let c = tri[2] + base;
        writeln!(out, "f {a}//{a} {b}//{b} {c}//{c}")?;
    }

    Ok(())
}

fn write_material(out: &mut impl Write, name: &str, material: &Material) -> io::Result<()> {
    let kd = material.color;
    writeln!(out, "newmtl {name}")?;
    writeln!(out, "Kd {} {} {}", kd.r, kd.g, kd.b)?;
    writeln!(out, "Ka 0 0 0")?;
    // Metals tint their highlight with the base color
    let ks = Rgb::new(0.04, 0.04, 0.04).lerp(kd, material.metalness.clamp(0.0, 1.0));
    writeln!(out, "Ks {} {} {}", ks.r, ks.g, ks.b)?;
    writeln!(out, "Ns {}", shininess(material.roughness))?;
    writeln!(out, "d 1")?;
    writeln!(out, "illum 2")?;
    writeln!(out)
}

/// Write one material per shape, matching the names `write_obj` uses
pub fn write_mtl(stage: &Stage, out: &mut impl Write) -> io::Result<usize> {
    let mut count = 0;
    let mut result = Ok(());

    writeln!(out, "# nightingale scene materials")?;
    stage.visit_shapes(&mut |shape, _| {
        if result.is_ok() {
            result = write_material(&mut *out, shape.name(), shape.material());
            count += 1;
        }
    });
    result?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Preset;
    use crate::scene::compose;

    fn obj_text(preset: Preset) -> (String, ExportStats) {
        let stage = compose(&preset.params()).unwrap();
        let mut buf = Vec::new();
        let stats = write_obj(&stage, Some("bird.mtl"), &mut buf).unwrap();
        (String::from_utf8(buf).unwrap(), stats)
    }

    #[test]
    fn test_counts_match_tree() {
        let stage = compose(&Preset::V5.params()).unwrap();
        let tree = stage.root.stats();
        let mut buf = Vec::new();
        let stats = write_obj(&stage, None, &mut buf).unwrap();
        assert_eq!(stats.objects, tree.shapes);
        assert_eq!(stats.vertices, tree.vertices);
        assert_eq!(stats.triangles, tree.triangles);

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().filter(|l| l.starts_with("o ")).count(), tree.shapes);
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), tree.vertices);
        assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), tree.triangles);
    }

    #[test]
    fn test_face_indices_stay_in_range() {
        let (text, stats) = obj_text(Preset::Sculpture);
        for line in text.lines().filter(|l| l.starts_with("f ")) {
            for corner in line[2..].split_whitespace() {
                let index: usize = corner.split("//").next().unwrap().parse().unwrap();
                assert!(index >= 1 && index <= stats.vertices, "{line}");
            }
        }
    }

    #[test]
    fn test_body_vertices_carry_colors() {
        let (text, _) = obj_text(Preset::V6);
        assert!(text.starts_with("# nightingale"));
        assert!(text.contains("mtllib bird.mtl\n"));

        let mut lines = text.lines().skip_while(|l| *l != "o body").skip(2);
        let first = lines.next().unwrap();
        assert_eq!(first.split_whitespace().count(), 7, "{first}");

        let mut lines = text.lines().skip_while(|l| *l != "o head").skip(2);
        let first = lines.next().unwrap();
        assert_eq!(first.split_whitespace().count(), 4, "{first}");
    }

    #[test]
    fn test_positions_are_world_space() {
        let stage = compose(&Preset::V6.params()).unwrap();
        let mut buf = Vec::new();
        write_obj(&stage, None, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let path = stage.root.find_path("head").unwrap();
        let world = stage.root.world_matrix(&path).unwrap();
        let local = stage.find("head").unwrap().as_shape().unwrap().mesh().positions[0];
        let expected = world.transform_point3(Vec3::from(local));

        let line = text.lines().skip_while(|l| *l != "o head").nth(2).unwrap();
        let coords: Vec<f32> = line.split_whitespace().skip(1).map(|v| v.parse().unwrap()).collect();
        assert!((Vec3::new(coords[0], coords[1], coords[2]) - expected).length() < 1e-5);
        // The bird sits above the origin, so world and local differ
        assert!((expected - Vec3::from(local)).length() > 0.1);
    }

    #[test]
    fn test_mtl_has_one_material_per_shape() {
        let stage = compose(&Preset::V7.params()).unwrap();
        let mut buf = Vec::new();
        let count = write_mtl(&stage, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(count, stage.root.stats().shapes);
        assert_eq!(text.lines().filter(|l| l.starts_with("newmtl ")).count(), count);
        assert!(text.contains("newmtl eye.left.ball\n"));
    }

    #[test]
    fn test_shininess_falls_with_roughness() {
        assert_eq!(shininess(0.0), 1000.0);
        assert_eq!(shininess(1.0), 0.0);
        assert!(shininess(0.3) > shininess(0.7));
    }
}
