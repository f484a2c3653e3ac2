//! Scene ownership: the loaded document, its buffers, and extracted meshes.

use std::path::Path;

use crate::error::LoadError;
use crate::mesh::Mesh;

/// Exclusive owner of the parsed document and its binary buffers for the
/// duration of one conversion. Dropping the scene releases the document on
/// every exit path, success or failure.
pub struct Scene {
    pub document: gltf::Document,
    pub buffers: Vec<gltf::buffer::Data>,
    pub meshes: Vec<Mesh>,
}

impl Scene {
    /// Parse, validate, and load buffers for a glTF/GLB file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let (document, buffers, _images) = gltf::import(path)?;

        tracing::debug!(
            "loaded {:?}: {} nodes, {} buffers",
            path,
            document.nodes().count(),
            buffers.len()
        );

        Ok(Scene {
            document,
            buffers,
            meshes: Vec::new(),
        })
    }
}
