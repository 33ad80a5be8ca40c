//! Offline export of a posed stage
//!
//! Writes Wavefront OBJ with a sibling MTL so a composed bird can be checked
//! in any model viewer.

mod obj;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ExportError;
use crate::scene::Stage;

pub use obj::{shininess, write_mtl, write_obj, ExportStats};

fn write_error(path: &Path) -> impl FnOnce(std::io::Error) -> ExportError {
    let path = path.to_path_buf();
    move |source| ExportError::Write { path, source }
}

fn create(path: &Path) -> Result<BufWriter<File>, ExportError> {
    File::create(path).map(BufWriter::new).map_err(write_error(path))
}

/// Write `stage` to `obj_path` and its materials to the same path with an
/// `.mtl` extension. Returns the MTL path with the counts.
pub fn export_stage(stage: &Stage, obj_path: &Path) -> Result<(PathBuf, ExportStats), ExportError> {
    let mtl_path = obj_path.with_extension("mtl");
    let mtl_name = mtl_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ExportError::InvalidPath(obj_path.to_path_buf()))?
        .to_string();

    let mut out = create(obj_path)?;
    let stats = write_obj(stage, Some(&mtl_name), &mut out).map_err(write_error(obj_path))?;
    out.flush().map_err(write_error(obj_path))?;

    let mut out = create(&mtl_path)?;
    let materials = write_mtl(stage, &mut out).map_err(write_error(&mtl_path))?;
    out.flush().map_err(write_error(&mtl_path))?;

    info!(
        obj = ?obj_path,
        objects = stats.objects,
        vertices = stats.vertices,
        triangles = stats.triangles,
        materials,
        "exported stage"
    );
    Ok((mtl_path, stats))
}
