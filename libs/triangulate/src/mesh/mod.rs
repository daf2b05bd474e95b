//! # Polygon Mesh
//!
//! Vertex positions plus per-face vertex loops, as produced by a mesh file
//! loader. Faces may have any number of vertices (≥ 3); each face is
//! projected onto its own plane and triangulated independently.

use config::constants::POSITION_STRIDE;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{TriangulateError, TriangulateResult};
use crate::Triangulator;

/// A polygon mesh with shared vertices and n-gon faces.
///
/// # Example
///
/// ```rust
/// use tide_triangulate::Mesh;
///
/// let mut mesh = Mesh::new();
/// let a = mesh.add_vertex([0.0, 0.0, 0.0]).unwrap();
/// let b = mesh.add_vertex([1.0, 0.0, 0.0]).unwrap();
/// let c = mesh.add_vertex([1.0, 1.0, 0.0]).unwrap();
/// let d = mesh.add_vertex([0.0, 1.0, 0.0]).unwrap();
/// mesh.add_face(vec![a, b, c, d]);
///
/// let indices = mesh.triangulate().unwrap();
/// assert_eq!(indices.len(), 6);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Flat xyz positions.
    pub positions: Vec<f32>,
    /// Vertex loops, one per face, indexing `positions` by vertex.
    pub faces: Vec<Vec<u32>>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of whole vertices in `positions`.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / POSITION_STRIDE
    }

    /// Number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Triangles a successful triangulation will produce.
    pub fn triangle_count(&self) -> usize {
        self.faces.iter().map(|f| f.len().saturating_sub(2)).sum()
    }

    /// Appends a vertex and returns its index.
    ///
    /// # Errors
    ///
    /// [`TriangulateError::TooManyVertices`] once the index would not fit in
    /// `u32`; the mesh is left unchanged.
    pub fn add_vertex(&mut self, position: [f32; 3]) -> TriangulateResult<u32> {
        let index = vertex_index(self.vertex_count())?;
        self.positions.extend_from_slice(&position);
        Ok(index)
    }

    /// Appends a face loop.
    pub fn add_face(&mut self, face: Vec<u32>) {
        self.faces.push(face);
    }

    /// Position of vertex `index`.
    #[inline]
    pub fn position(&self, index: u32) -> [f32; 3] {
        let start = index as usize * POSITION_STRIDE;
        [
            self.positions[start],
            self.positions[start + 1],
            self.positions[start + 2],
        ]
    }

    /// Triangulates every face with the default configuration.
    pub fn triangulate(&self) -> TriangulateResult<Vec<u32>> {
        self.triangulate_with(&Triangulator::default())
    }

    /// Triangulates every face, returning mesh vertex indices in face order.
    ///
    /// Each triangle keeps the winding of its face loop.
    ///
    /// # Errors
    ///
    /// - [`TriangulateError::FaceIndexOutOfBounds`] for a loop naming a
    ///   missing vertex
    /// - [`TriangulateError::FaceFailed`] wrapping the first face that could
    ///   not be projected or triangulated
    pub fn triangulate_with(&self, triangulator: &Triangulator) -> TriangulateResult<Vec<u32>> {
        let per_face = self
            .faces
            .par_iter()
            .enumerate()
            .map(|(face, vertices)| self.triangulate_face(triangulator, face, vertices))
            .collect::<TriangulateResult<Vec<_>>>()?;
        Ok(per_face.concat())
    }

    fn triangulate_face(
        &self,
        triangulator: &Triangulator,
        face: usize,
        vertices: &[u32],
    ) -> TriangulateResult<Vec<u32>> {
        let vertex_count = self.vertex_count();
        let mut loop_positions = Vec::with_capacity(vertices.len() * POSITION_STRIDE);
        for &index in vertices {
            if index as usize >= vertex_count {
                return Err(TriangulateError::FaceIndexOutOfBounds {
                    face,
                    index,
                    vertex_count,
                });
            }
            loop_positions.extend_from_slice(&self.position(index));
        }

        let local = triangulator
            .try_triangulate_3d(&loop_positions, 0)
            .map_err(|err| TriangulateError::face_failed(face, err))?;
        Ok(local.into_iter().map(|i| vertices[i as usize]).collect())
    }
}

/// Index of the next vertex appended to a mesh holding `count` vertices.
fn vertex_index(count: usize) -> TriangulateResult<u32> {
    u32::try_from(count).map_err(|_| TriangulateError::TooManyVertices {
        count: count.saturating_add(1),
        max: (u32::MAX as usize).saturating_add(1),
    })
}

#[cfg(test)]
mod tests;
