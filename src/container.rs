//! Output container writers (.gltf + sidecar .bin, and binary .glb).
//!
//! The caller-supplied JSON is object-interior content: the writer injects
//! the top-level buffer declaration as a prefix and owns the enclosing
//! braces. See [`crate::process::ProcessOutput`].
//!
//! Known limitation: a failure mid-write can leave a truncated output file
//! behind; the writers do not clean up partial output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::OutputError;

const GLB_MAGIC: u32 = 0x4654_6C67; // "glTF"
const GLB_VERSION: u32 = 2;
const CHUNK_JSON: u32 = 0x4E4F_534A; // "JSON"
const CHUNK_BIN: u32 = 0x004E_4942; // "BIN\0"

/// Write the accumulated JSON body and binary blob to `output`, in the
/// layout selected by the path's extension (case-insensitive `.gltf` or
/// `.glb`). Any other extension fails before a file is created.
pub fn write_output(json: &str, bin: &[u8], output: &Path) -> Result<(), OutputError> {
    let ext = output
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "gltf" => write_split(json, bin, output),
        "glb" => write_glb(json, bin, output),
        _ => Err(OutputError::UnknownExtension),
    }
}

/// Split layout: JSON document plus a sibling `.bin` holding the blob
/// verbatim. The sibling is referenced by file name only, so the JSON stays
/// valid wherever the pair is moved together.
fn write_split(json: &str, bin: &[u8], output: &Path) -> Result<(), OutputError> {
    let bin_path = output.with_extension("bin");
    let bin_name = bin_path
        .file_name()
        .unwrap_or(bin_path.as_os_str())
        .to_string_lossy();

    // Both handles close on every exit path, including a failed second open
    let json_file = File::create(output)?;
    let bin_file = File::create(&bin_path)?;

    let mut w = BufWriter::new(json_file);
    w.write_all(buffer_prefix(Some(&bin_name), bin.len()).as_bytes())?;
    w.write_all(json.as_bytes())?;
    w.write_all(b"}")?;
    w.flush()?;

    let mut w = BufWriter::new(bin_file);
    w.write_all(bin)?;
    w.flush()?;

    Ok(())
}

/// Binary layout: one self-describing three-chunk glTF container.
fn write_glb(json: &str, bin: &[u8], output: &Path) -> Result<(), OutputError> {
    let mut payload = buffer_prefix(None, bin.len());
    payload.push_str(json);
    payload.push('}');

    let glb = encode_glb(payload.as_bytes(), bin);

    let mut w = BufWriter::new(File::create(output)?);
    w.write_all(&glb)?;
    w.flush()?;

    Ok(())
}

/// Assemble a binary glTF container from a complete JSON payload and a
/// binary blob.
///
/// Layout: 12-byte header (magic, version 2, total length), then a JSON
/// chunk padded to a 4-byte boundary with trailing spaces, then a BIN chunk
/// padded with trailing zeros. Each chunk is a u32 length, a u32 type tag,
/// and its bytes; all integers little-endian.
pub fn encode_glb(json: &[u8], bin: &[u8]) -> Vec<u8> {
    let json_padding = (4 - json.len() % 4) % 4;
    let json_chunk_length = json.len() + json_padding;

    let bin_padding = (4 - bin.len() % 4) % 4;
    let bin_chunk_length = bin.len() + bin_padding;

    let total_length = 12 + 8 + json_chunk_length + 8 + bin_chunk_length;

    let mut glb = Vec::with_capacity(total_length);

    glb.extend_from_slice(&GLB_MAGIC.to_le_bytes());
    glb.extend_from_slice(&GLB_VERSION.to_le_bytes());
    glb.extend_from_slice(&(total_length as u32).to_le_bytes());

    glb.extend_from_slice(&(json_chunk_length as u32).to_le_bytes());
    glb.extend_from_slice(&CHUNK_JSON.to_le_bytes());
    glb.extend_from_slice(json);
    glb.extend(std::iter::repeat_n(0x20u8, json_padding));

    glb.extend_from_slice(&(bin_chunk_length as u32).to_le_bytes());
    glb.extend_from_slice(&CHUNK_BIN.to_le_bytes());
    glb.extend_from_slice(bin);
    glb.extend(std::iter::repeat_n(0u8, bin_padding));

    glb
}

/// Synthesized buffer-array declaration prefixed to the caller's JSON body.
/// Ends with the separating comma; the body follows as further members of
/// the top-level object.
fn buffer_prefix(uri: Option<&str>, byte_length: usize) -> String {
    match uri {
        Some(name) => format!(
            "{{\"buffers\":[{{\"uri\":{},\"byteLength\":{}}}],",
            serde_json::Value::from(name),
            byte_length
        ),
        None => format!("{{\"buffers\":[{{\"byteLength\":{}}}],", byte_length),
    }
}
