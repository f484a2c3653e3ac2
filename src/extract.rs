//! Mesh extraction: walks the scene graph and bakes node world transforms
//! into the vertex data.

use glam::{Mat3, Mat4, Vec3};

use crate::mesh::{Attr, Mesh, Semantic, Stream};

/// Extract one [`Mesh`] per primitive of every mesh-bearing node, in node
/// order then primitive order, with the node's world transform baked into
/// position, normal, and tangent channels.
///
/// Extraction is lossy by design: primitives that end up with no indices or
/// no streams are dropped silently, as are attribute channels whose data
/// cannot be read.
pub fn extract_meshes(document: &gltf::Document, buffers: &[gltf::buffer::Data]) -> Vec<Mesh> {
    let world = world_transforms(document);
    let mut meshes = Vec::new();

    for node in document.nodes() {
        let Some(mesh) = node.mesh() else { continue };
        let transform = world[node.index()];

        for primitive in mesh.primitives() {
            let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

            // Indices decode to u32 regardless of the stored width
            let indices: Vec<u32> = reader
                .read_indices()
                .map(|iter| iter.into_u32().collect())
                .unwrap_or_default();

            let mut streams = Vec::new();
            for (semantic, _accessor) in primitive.attributes() {
                let stream = match semantic {
                    gltf::Semantic::Positions => reader.read_positions().map(|iter| Stream {
                        semantic: Semantic::Position,
                        set: 0,
                        data: iter.map(|[x, y, z]| [x, y, z, 0.0]).collect(),
                    }),
                    gltf::Semantic::Normals => reader.read_normals().map(|iter| Stream {
                        semantic: Semantic::Normal,
                        set: 0,
                        data: iter.map(|[x, y, z]| [x, y, z, 0.0]).collect(),
                    }),
                    gltf::Semantic::Tangents => reader.read_tangents().map(|iter| Stream {
                        semantic: Semantic::Tangent,
                        set: 0,
                        data: iter.collect(),
                    }),
                    gltf::Semantic::TexCoords(set) => {
                        reader.read_tex_coords(set).map(|iter| Stream {
                            semantic: Semantic::TexCoord,
                            set,
                            data: iter.into_f32().map(|[u, v]| [u, v, 0.0, 0.0]).collect(),
                        })
                    }
                    gltf::Semantic::Colors(set) => reader.read_colors(set).map(|iter| Stream {
                        semantic: Semantic::Color,
                        set,
                        data: iter.into_rgba_f32().collect(),
                    }),
                    gltf::Semantic::Joints(set) => reader.read_joints(set).map(|iter| Stream {
                        semantic: Semantic::Joints,
                        set,
                        data: iter
                            .into_u16()
                            .map(|j| [j[0] as f32, j[1] as f32, j[2] as f32, j[3] as f32])
                            .collect(),
                    }),
                    gltf::Semantic::Weights(set) => reader.read_weights(set).map(|iter| Stream {
                        semantic: Semantic::Weights,
                        set,
                        data: iter.into_f32().collect(),
                    }),
                    _ => None,
                };

                if let Some(stream) = stream {
                    streams.push(stream);
                }
            }

            for stream in &mut streams {
                match stream.semantic {
                    Semantic::Position => {
                        for attr in &mut stream.data {
                            transform_position(attr, &transform);
                        }
                    }
                    Semantic::Normal | Semantic::Tangent => {
                        for attr in &mut stream.data {
                            transform_normal(attr, &transform);
                        }
                    }
                    _ => {}
                }
            }

            if !indices.is_empty() && !streams.is_empty() {
                meshes.push(Mesh { streams, indices });
            } else {
                tracing::debug!(
                    "skipping primitive of node {}: {} indices, {} streams",
                    node.index(),
                    indices.len(),
                    streams.len()
                );
            }
        }
    }

    meshes
}

/// World transform per node, indexed by node index.
///
/// The hierarchy is defined by children edges alone, so roots are the nodes
/// no other node lists as a child; each root subtree is walked once with
/// `world = parent * local`. Local transforms come through the document's
/// TRS-or-matrix accessor.
fn world_transforms(document: &gltf::Document) -> Vec<Mat4> {
    let node_count = document.nodes().count();

    let mut is_child = vec![false; node_count];
    for node in document.nodes() {
        for child in node.children() {
            is_child[child.index()] = true;
        }
    }

    let mut world = vec![Mat4::IDENTITY; node_count];
    for node in document.nodes() {
        if !is_child[node.index()] {
            propagate_world(&node, Mat4::IDENTITY, &mut world);
        }
    }
    world
}

fn propagate_world(node: &gltf::Node, parent: Mat4, world: &mut [Mat4]) {
    let local = Mat4::from_cols_array_2d(&node.transform().matrix());
    let transform = parent * local;
    world[node.index()] = transform;

    for child in node.children() {
        propagate_world(&child, transform, world);
    }
}

/// Full affine transform for position channels: `M · (x, y, z, 1)`.
fn transform_position(attr: &mut Attr, m: &Mat4) {
    let p = m.transform_point3(Vec3::new(attr[0], attr[1], attr[2]));
    attr[0] = p.x;
    attr[1] = p.y;
    attr[2] = p.z;
}

/// Linear 3x3 part only for direction channels, renormalized to unit
/// length. A zero-length result stays the zero vector. The fourth
/// component (tangent handedness) is left untouched.
fn transform_normal(attr: &mut Attr, m: &Mat4) {
    let n = (Mat3::from_mat4(*m) * Vec3::new(attr[0], attr[1], attr[2])).normalize_or_zero();
    attr[0] = n.x;
    attr[1] = n.y;
    attr[2] = n.z;
}
