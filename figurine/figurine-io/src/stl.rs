//! STL (Stereolithography) read/write.
//!
//! The slicing service consumes a binary STL payload over HTTP, so the
//! binary writer targets any `Write` sink: the same code path produces
//! files on disk and in-memory byte buffers.
//!
//! # Binary layout
//!
//! ```text
//! UINT8[80]    – Header
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal vector (recomputed on write)
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (0)
//! end
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use figurine_types::{IndexedMesh, MeshTopology, Vector3, Vertex};

use crate::error::{IoError, IoResult};

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Size of one triangle record in binary STL.
const TRIANGLE_SIZE: usize = 50;

/// Save a mesh to an STL file.
///
/// # Arguments
///
/// * `mesh` - The mesh to save
/// * `path` - Output file path
/// * `binary` - If true, save as binary STL; if false, as ASCII
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_stl<P: AsRef<Path>>(mesh: &IndexedMesh, path: P, binary: bool) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    if binary {
        write_stl_binary(mesh, &mut writer)
    } else {
        write_stl_ascii(mesh, &mut writer)
    }
}

/// Serialize a mesh to an in-memory binary STL payload.
///
/// This is the byte blob handed to the slicing service.
///
/// # Errors
///
/// Only if writing to the in-memory buffer fails, which it does not in
/// practice; the `Result` keeps the signature uniform with [`save_stl`].
///
/// # Example
///
/// ```
/// use figurine_io::stl_bytes;
/// use figurine_types::unit_cube;
///
/// let bytes = stl_bytes(&unit_cube()).unwrap();
/// // 80-byte header + count + 12 triangles
/// assert_eq!(bytes.len(), 80 + 4 + 12 * 50);
/// ```
pub fn stl_bytes(mesh: &IndexedMesh) -> IoResult<Vec<u8>> {
    let mut buffer =
        Vec::with_capacity(HEADER_SIZE + 4 + mesh.face_count() * TRIANGLE_SIZE);
    write_stl_binary(mesh, &mut buffer)?;
    Ok(buffer)
}

fn write_stl_binary<W: Write>(mesh: &IndexedMesh, writer: &mut W) -> IoResult<()> {
    let mut header = [b' '; HEADER_SIZE];
    let text = b"Binary STL generated by FigurineForge";
    header[..text.len()].copy_from_slice(text);
    writer.write_all(&header)?;

    #[allow(clippy::cast_possible_truncation)]
    let face_count = mesh.face_count() as u32;
    writer.write_all(&face_count.to_le_bytes())?;

    for tri in mesh.triangles() {
        // Normals recomputed per face; stored vertex normals may be stale
        // after compositing.
        let normal = tri.normal().unwrap_or_else(Vector3::zeros);
        write_f32_triple(writer, normal.x, normal.y, normal.z)?;
        for p in tri.vertices() {
            write_f32_triple(writer, p.x, p.y, p.z)?;
        }
        writer.write_all(&0u16.to_le_bytes())?;
    }

    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
fn write_f32_triple<W: Write>(writer: &mut W, x: f64, y: f64, z: f64) -> IoResult<()> {
    writer.write_all(&(x as f32).to_le_bytes())?;
    writer.write_all(&(y as f32).to_le_bytes())?;
    writer.write_all(&(z as f32).to_le_bytes())?;
    Ok(())
}

fn write_stl_ascii<W: Write>(mesh: &IndexedMesh, writer: &mut W) -> IoResult<()> {
    writeln!(writer, "solid keepsake")?;

    for tri in mesh.triangles() {
        let normal = tri.normal().unwrap_or_else(Vector3::zeros);
        writeln!(
            writer,
            "  facet normal {:.6e} {:.6e} {:.6e}",
            normal.x, normal.y, normal.z
        )?;
        writeln!(writer, "    outer loop")?;
        for p in tri.vertices() {
            writeln!(writer, "      vertex {:.6e} {:.6e} {:.6e}", p.x, p.y, p.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }

    writeln!(writer, "endsolid keepsake")?;
    Ok(())
}

/// Load a mesh from an STL file, auto-detecting ASCII vs binary.
///
/// ASCII files start with `solid` and contain no NUL bytes in the first
/// 80 bytes; everything else is treated as binary. Vertices are not
/// deduplicated on load.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid STL.
pub fn load_stl<P: AsRef<Path>>(path: P) -> IoResult<IndexedMesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;

    let mut reader = BufReader::new(file);
    let mut head = [0u8; HEADER_SIZE + 4];
    let mut bytes_read = 0;
    while bytes_read < head.len() {
        match reader.read(&mut head[bytes_read..])? {
            0 => break,
            n => bytes_read += n,
        }
    }

    if bytes_read < 6 {
        return Err(IoError::invalid_content("file too small to be valid STL"));
    }

    let looks_ascii = String::from_utf8_lossy(&head[..bytes_read.min(HEADER_SIZE)])
        .trim_start()
        .starts_with("solid")
        && !head[..bytes_read.min(HEADER_SIZE)].contains(&0);

    if looks_ascii {
        let file = File::open(path)?;
        read_stl_ascii(BufReader::new(file))
    } else {
        read_stl_binary(&head[..bytes_read], reader)
    }
}

fn read_stl_binary<R: Read>(head: &[u8], mut reader: R) -> IoResult<IndexedMesh> {
    if head.len() < HEADER_SIZE + 4 {
        return Err(IoError::invalid_content("binary STL header truncated"));
    }

    let face_count = u32::from_le_bytes([
        head[HEADER_SIZE],
        head[HEADER_SIZE + 1],
        head[HEADER_SIZE + 2],
        head[HEADER_SIZE + 3],
    ]);

    let mut mesh = IndexedMesh::with_capacity((face_count as usize) * 3, face_count as usize);
    let mut record = [0u8; TRIANGLE_SIZE];

    for i in 0..face_count {
        if reader.read_exact(&mut record).is_err() {
            return Err(IoError::TruncatedFile {
                expected: face_count,
                got: i,
            });
        }

        // Skip the stored normal (12 bytes); it is recomputed on demand
        #[allow(clippy::cast_possible_truncation)]
        let base = mesh.vertices.len() as u32;
        for k in 0..3 {
            let offset = 12 + k * 12;
            mesh.vertices.push(read_f32_vertex(&record[offset..offset + 12]));
        }
        mesh.faces.push([base, base + 1, base + 2]);
    }

    Ok(mesh)
}

fn read_f32_vertex(buf: &[u8]) -> Vertex {
    let x = f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let y = f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
    let z = f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]);
    Vertex::from_coords(f64::from(x), f64::from(y), f64::from(z))
}

fn read_stl_ascii<R: BufRead>(reader: R) -> IoResult<IndexedMesh> {
    let mut mesh = IndexedMesh::new();
    let mut pending: Vec<Vertex> = Vec::with_capacity(3);

    for line in reader.lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("vertex") => {
                let mut coord = || -> IoResult<f64> {
                    parts
                        .next()
                        .ok_or_else(|| IoError::invalid_content("vertex with missing coordinate"))?
                        .parse()
                        .map_err(IoError::from)
                };
                let (x, y, z) = (coord()?, coord()?, coord()?);
                pending.push(Vertex::from_coords(x, y, z));
            }
            Some("endfacet") => {
                if pending.len() == 3 {
                    #[allow(clippy::cast_possible_truncation)]
                    let base = mesh.vertices.len() as u32;
                    mesh.vertices.append(&mut pending);
                    mesh.faces.push([base, base + 1, base + 2]);
                } else {
                    return Err(IoError::invalid_content(format!(
                        "facet with {} vertices",
                        pending.len()
                    )));
                }
            }
            Some("endsolid") => break,
            _ => {}
        }
    }

    Ok(mesh)
}
