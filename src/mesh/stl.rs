use super::builder::Mesh;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a mesh to a binary STL file
///
/// Layout: an 80 byte header, a little-endian u32 triangle count, then
/// 50 bytes per triangle (12 byte normal, 36 bytes of vertices, 2 byte
/// attribute word).
///
/// The mesh stores unnormalized flat normals; STL expects unit normals,
/// so each face normal is normalized here (zero for degenerate faces).
pub fn write_stl(path: &Path, mesh: &Mesh) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create STL file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    let header: [u8; 80] =
        *b"prismgen - extruded prism mesh                                                  ";
    writer.write_all(&header)?;

    let count = mesh.triangle_count() as u32;
    writer.write_all(&count.to_le_bytes())?;

    for (corners, normal) in mesh.triangles() {
        let unit = normal.normalize_or_zero();
        for n in [unit.x, unit.y, unit.z] {
            writer.write_all(&n.to_le_bytes())?;
        }

        for vertex in corners {
            for coord in [vertex.x, vertex.y, vertex.z] {
                writer.write_all(&coord.to_le_bytes())?;
            }
        }

        // Attribute word, unused
        writer.write_all(&[0u8, 0u8])?;
    }

    writer.flush()?;

    Ok(())
}

/// File size of a binary STL with the given number of triangles
pub fn estimate_stl_size(triangle_count: usize) -> usize {
    // header + count + 50 bytes per triangle
    80 + 4 + triangle_count * 50
}
