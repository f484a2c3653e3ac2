//! Mesh data model: attribute streams and indexed primitives.

/// One vertex's value for one attribute channel, padded to four components.
///
/// Channels with fewer components leave the trailing components at the
/// accessor-defined default (0, except vertex-color alpha which defaults
/// to 1).
pub type Attr = [f32; 4];

/// Attribute channel kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Semantic {
    Position,
    Normal,
    Tangent,
    TexCoord,
    Color,
    Joints,
    Weights,
}

/// One attribute channel of a primitive.
pub struct Stream {
    /// Channel kind
    pub semantic: Semantic,
    /// Set index for channels that repeat (TEXCOORD_0, TEXCOORD_1, ...)
    pub set: u32,
    /// One record per vertex
    pub data: Vec<Attr>,
}

/// One glTF primitive after transform baking.
///
/// Never materialized empty: extraction drops primitives that end up with
/// no indices or no streams. All streams have `data.len()` equal to the
/// primitive's vertex count.
pub struct Mesh {
    pub streams: Vec<Stream>,
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Vertex count shared by every stream of this mesh.
    pub fn vertex_count(&self) -> usize {
        self.streams.first().map(|s| s.data.len()).unwrap_or(0)
    }
}
