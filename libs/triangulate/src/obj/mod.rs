//! # Wavefront OBJ Reader
//!
//! Reads the geometry needed for triangulation from OBJ text: vertex
//! positions (`v`) and polygon faces (`f`).
//!
//! ## Supported Statements
//!
//! | Statement | Handling |
//! |-----------|----------|
//! | `v x y z [w]` | position, `w` ignored |
//! | `f v[/vt[/vn]] ...` | face loop of ≥ 3 vertices |
//! | `vt`, `vn`, `vp`, `o`, `g`, `s`, `l`, `usemtl`, `mtllib` | skipped |
//! | `# ...` | comment |
//!
//! Face indices are 1-based. Negative indices count back from the most
//! recently read vertex, so `-1` is the last `v` seen so far.

use log::trace;

use crate::error::{TriangulateError, TriangulateResult};
use crate::mesh::Mesh;

/// Parses OBJ source into a [`Mesh`].
///
/// # Example
///
/// ```rust
/// use tide_triangulate::parse_obj;
///
/// let mesh = parse_obj("
///     v 0 0 0
///     v 1 0 0
///     v 1 1 0
///     v 0 1 0
///     f 1 2 3 4
/// ").unwrap();
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.faces, vec![vec![0, 1, 2, 3]]);
/// ```
pub fn parse_obj(source: &str) -> TriangulateResult<Mesh> {
    let mut mesh = Mesh::new();

    for (number, raw) in source.lines().enumerate() {
        let line = number + 1;
        let content = raw.split('#').next().unwrap_or_default();
        let mut tokens = content.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };

        match keyword {
            "v" => {
                let position = parse_position(line, tokens)?;
                mesh.add_vertex(position)?;
            }
            "f" => {
                let face = parse_face(line, tokens, mesh.vertex_count())?;
                mesh.add_face(face);
            }
            "vt" | "vn" | "vp" | "o" | "g" | "s" | "l" | "usemtl" | "mtllib" => {}
            other => trace!("line {line}: skipping unsupported statement '{other}'"),
        }
    }

    Ok(mesh)
}

fn parse_position<'s>(
    line: usize,
    tokens: impl Iterator<Item = &'s str>,
) -> TriangulateResult<[f32; 3]> {
    let coords = tokens
        .take(3)
        .map(|token| {
            token
                .parse::<f32>()
                .map_err(|_| TriangulateError::parse(line, format!("invalid coordinate '{token}'")))
        })
        .collect::<TriangulateResult<Vec<f32>>>()?;

    match coords.as_slice() {
        &[x, y, z] => Ok([x, y, z]),
        _ => Err(TriangulateError::parse(
            line,
            format!("vertex needs 3 coordinates, got {}", coords.len()),
        )),
    }
}

fn parse_face<'s>(
    line: usize,
    tokens: impl Iterator<Item = &'s str>,
    vertex_count: usize,
) -> TriangulateResult<Vec<u32>> {
    let face = tokens
        .map(|token| resolve_index(line, token, vertex_count))
        .collect::<TriangulateResult<Vec<u32>>>()?;

    if face.len() < 3 {
        return Err(TriangulateError::parse(
            line,
            format!("face needs at least 3 vertices, got {}", face.len()),
        ));
    }
    Ok(face)
}

/// Converts one `v/vt/vn` reference to a 0-based vertex index.
fn resolve_index(line: usize, token: &str, vertex_count: usize) -> TriangulateResult<u32> {
    let position = token.split('/').next().unwrap_or_default();
    let raw: i64 = position
        .parse()
        .map_err(|_| TriangulateError::parse(line, format!("invalid face index '{token}'")))?;

    let resolved = match raw {
        0 => None,
        r if r > 0 => Some(r - 1),
        r => i64::try_from(vertex_count).ok().map(|n| n + r).filter(|&i| i >= 0),
    };

    resolved
        .and_then(|i| u32::try_from(i).ok())
        .ok_or_else(|| {
            TriangulateError::parse(
                line,
                format!("face index {raw} does not resolve with {vertex_count} vertices"),
            )
        })
}
