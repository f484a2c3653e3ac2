//! gltfpack library
//!
//! Extracts renderable geometry from glTF 2.0 scene graphs, bakes per-node
//! world transforms into the vertex data, and rewrites the result as either
//! a split container (.gltf + sidecar .bin) or a single binary container
//! (.glb).

pub mod container;
pub mod error;
pub mod extract;
pub mod mesh;
pub mod process;
pub mod scene;

// Re-export the conversion entry points and core types
pub use container::{encode_glb, write_output};
pub use error::{Error, LoadError, OutputError, ProcessError};
pub use extract::extract_meshes;
pub use mesh::{Attr, Mesh, Semantic, Stream};
pub use process::{convert, process, ProcessOutput};
pub use scene::Scene;
