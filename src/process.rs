//! Processing pipeline: extraction plus the chunk accumulators handed to
//! the container writers.

use std::path::Path;

use crate::container::write_output;
use crate::error::{Error, ProcessError};
use crate::extract::extract_meshes;
use crate::scene::Scene;

/// Accumulated container content.
///
/// `json` is object-interior content: it never opens or closes the
/// top-level object and never declares `buffers` — the container writer
/// injects that declaration and owns the enclosing braces. `bin` is the
/// buffer blob the declaration will describe.
pub struct ProcessOutput {
    pub json: String,
    pub bin: Vec<u8>,
}

/// Run extraction into `scene.meshes` and fill the chunk accumulators.
///
/// Downstream encoding stages append accessor, buffer-view, and mesh
/// declarations to `json` and vertex data to `bin`; until then only the
/// asset header is emitted so written containers hold well-formed JSON.
pub fn process(scene: &mut Scene) -> Result<ProcessOutput, ProcessError> {
    scene.meshes = extract_meshes(&scene.document, &scene.buffers);

    let json = format!(
        "\"asset\":{{\"generator\":\"gltfpack {}\",\"version\":\"2.0\"}}",
        env!("CARGO_PKG_VERSION")
    );

    Ok(ProcessOutput {
        json,
        bin: Vec::new(),
    })
}

/// Convert one file: load, process, write, in a fixed blocking sequence.
/// The first failing stage aborts the run; the scene (and with it the
/// document handle) is released on every path.
pub fn convert(input: &Path, output: &Path) -> Result<(), Error> {
    let mut scene = Scene::load(input).map_err(|source| Error::Load {
        path: input.to_path_buf(),
        source,
    })?;

    let chunks = process(&mut scene).map_err(|source| Error::Process {
        path: input.to_path_buf(),
        source,
    })?;

    write_output(&chunks.json, &chunks.bin, output).map_err(|source| Error::Output {
        path: output.to_path_buf(),
        source,
    })?;

    let vertices: usize = scene.meshes.iter().map(|m| m.vertex_count()).sum();
    let indices: usize = scene.meshes.iter().map(|m| m.indices.len()).sum();
    tracing::info!(
        "converted {:?} -> {:?}: {} meshes, {} vertices, {} indices",
        input,
        output,
        scene.meshes.len(),
        vertices,
        indices
    );

    Ok(())
}
