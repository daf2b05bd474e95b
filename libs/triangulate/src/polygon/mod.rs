//! # Vertex Ring
//!
//! Index-based doubly-linked ring over the vertices of one polygon.
//!
//! Each vertex owns a small record holding its offset into the caller's
//! attribute buffer and the indices of its ring neighbours. Removing a vertex
//! rewires its two neighbours in O(1); nothing is shifted and no references
//! are held between records.
//!
//! ## Invariants
//!
//! - `next`/`prev` links form a single cycle over exactly the live vertices
//! - `live_count` equals the length of that cycle
//! - the cursor always names a live vertex
//!
//! ## Scan Direction
//!
//! The cursor walks either along `next` links from vertex 0 or along `prev`
//! links from the last vertex. A backward scan over a polygon visits vertices
//! in exactly the order a forward scan visits the same polygon listed in
//! reverse, which is what makes triangulation independent of input winding.

use config::constants::{MIN_ATTRIBUTE_STRIDE, MIN_POLYGON_VERTICES};

use crate::core::vec2::{self, Vec2};
use crate::error::{TriangulateError, TriangulateResult};

/// Link record for one polygon vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RingEntry {
    /// Offset of the vertex's X attribute in the attribute buffer.
    attribute_offset: usize,
    prev: usize,
    next: usize,
    alive: bool,
}

/// Direction the cursor walks the ring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScanDirection {
    /// Follow `next` links, starting at vertex 0.
    #[default]
    Forward,
    /// Follow `prev` links, starting at the last vertex.
    Backward,
}

/// A live vertex resolved with its ring neighbours and coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingVertex {
    /// Vertex index in the input buffer.
    pub index: usize,
    /// Index of the following live vertex.
    pub next: usize,
    /// Index of the preceding live vertex.
    pub prev: usize,
    /// X, Y position widened to `f64`.
    pub point: Vec2,
}

/// Polygon under triangulation.
///
/// Borrows the attribute buffer read-only and owns the ring. One `Polygon`
/// is built per triangulation attempt and dropped with it.
///
/// # Example
///
/// ```rust
/// use tide_triangulate::polygon::Polygon;
///
/// let square = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];
/// let mut polygon = Polygon::new(&square, 2).unwrap();
///
/// let a = polygon.get(polygon.cursor());
/// assert_eq!((a.prev, a.index, a.next), (3, 0, 1));
///
/// polygon.remove_triangle(a.next, a.prev);
/// assert_eq!(polygon.live_count(), 3);
/// assert_eq!(polygon.get(3).next, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Polygon<'a> {
    attributes: &'a [f32],
    ring: Vec<RingEntry>,
    cursor: usize,
    live: usize,
    direction: ScanDirection,
}

impl<'a> Polygon<'a> {
    /// Builds a ring over every vertex of `attributes`, `stride` floats per
    /// vertex, linked in buffer order, scanning forward from vertex 0.
    ///
    /// # Errors
    ///
    /// See [`Polygon::with_direction`].
    pub fn new(attributes: &'a [f32], stride: usize) -> TriangulateResult<Self> {
        Self::with_direction(attributes, stride, ScanDirection::Forward)
    }

    /// Builds a ring linked in buffer order whose cursor walks in
    /// `direction`.
    ///
    /// # Errors
    ///
    /// - [`TriangulateError::InvalidStride`] if `stride < 2`
    /// - [`TriangulateError::MisalignedBuffer`] if the buffer length is not a
    ///   multiple of `stride`
    /// - [`TriangulateError::InsufficientVertices`] for fewer than 3 vertices
    /// - [`TriangulateError::NonFiniteCoordinate`] if an X or Y is NaN or
    ///   infinite
    pub fn with_direction(
        attributes: &'a [f32],
        stride: usize,
        direction: ScanDirection,
    ) -> TriangulateResult<Self> {
        let count = vertex_count(attributes, stride)?;
        if count < MIN_POLYGON_VERTICES {
            return Err(TriangulateError::InsufficientVertices { count });
        }
        let non_finite = (0..count).find(|&i| !vec2::read(attributes, i * stride).is_finite());
        if let Some(vertex) = non_finite {
            return Err(TriangulateError::NonFiniteCoordinate { vertex });
        }

        let ring = (0..count)
            .map(|i| RingEntry {
                attribute_offset: i * stride,
                prev: if i == 0 { count - 1 } else { i - 1 },
                next: if i + 1 == count { 0 } else { i + 1 },
                alive: true,
            })
            .collect();

        let cursor = match direction {
            ScanDirection::Forward => 0,
            ScanDirection::Backward => count - 1,
        };

        Ok(Self {
            attributes,
            ring,
            cursor,
            live: count,
            direction,
        })
    }

    /// Number of vertices still linked into the ring.
    #[inline]
    pub fn live_count(&self) -> usize {
        self.live
    }

    /// Total vertices the ring was built with.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.ring.len()
    }

    /// Index of the vertex under the cursor.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Resolves a live vertex.
    ///
    /// `index` must name a live vertex; asking for a removed one is a caller
    /// bug and trips a debug assertion.
    #[inline]
    pub fn get(&self, index: usize) -> RingVertex {
        let entry = self.ring[index];
        debug_assert!(entry.alive, "vertex {index} was already clipped");
        RingVertex {
            index,
            next: entry.next,
            prev: entry.prev,
            point: vec2::read(self.attributes, entry.attribute_offset),
        }
    }

    /// Position of vertex `index`.
    #[inline]
    pub fn point(&self, index: usize) -> Vec2 {
        vec2::read(self.attributes, self.ring[index].attribute_offset)
    }

    /// Direction the cursor walks.
    #[inline]
    pub fn direction(&self) -> ScanDirection {
        self.direction
    }

    /// Moves the cursor to the following live vertex in scan order.
    #[inline]
    pub fn advance(&mut self) {
        let entry = self.ring[self.cursor];
        self.cursor = match self.direction {
            ScanDirection::Forward => entry.next,
            ScanDirection::Backward => entry.prev,
        };
    }

    /// Unlinks the vertex under the cursor, whose neighbours are `next` and
    /// `prev`, and moves the cursor to the neighbour in scan order (`next`
    /// when scanning forward).
    pub fn remove_triangle(&mut self, next: usize, prev: usize) {
        let cursor = self.cursor;
        debug_assert_eq!(self.ring[cursor].next, next);
        debug_assert_eq!(self.ring[cursor].prev, prev);

        self.ring[prev].next = next;
        self.ring[next].prev = prev;
        self.ring[cursor].alive = false;
        self.live -= 1;
        self.cursor = match self.direction {
            ScanDirection::Forward => next,
            ScanDirection::Backward => prev,
        };
    }

    /// Iterates live vertex indices in ring order, starting at the cursor.
    pub fn live_indices(&self) -> LiveIndices<'_, 'a> {
        LiveIndices {
            polygon: self,
            current: self.cursor,
            remaining: self.live,
        }
    }
}

/// Iterator over live vertex indices, see [`Polygon::live_indices`].
#[derive(Debug)]
pub struct LiveIndices<'p, 'a> {
    polygon: &'p Polygon<'a>,
    current: usize,
    remaining: usize,
}

impl Iterator for LiveIndices<'_, '_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.current;
        self.current = self.polygon.ring[index].next;
        self.remaining -= 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for LiveIndices<'_, '_> {}

/// Number of whole vertices in `attributes` at the given stride.
pub(crate) fn vertex_count(attributes: &[f32], stride: usize) -> TriangulateResult<usize> {
    if stride < MIN_ATTRIBUTE_STRIDE {
        return Err(TriangulateError::InvalidStride {
            stride,
            min: MIN_ATTRIBUTE_STRIDE,
        });
    }
    if attributes.len() % stride != 0 {
        return Err(TriangulateError::MisalignedBuffer {
            len: attributes.len(),
            stride,
        });
    }
    Ok(attributes.len() / stride)
}

#[cfg(test)]
mod tests;
