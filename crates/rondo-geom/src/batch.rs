use std::fmt;

use crate::coords::Vec2;

/// A contiguous span of vertices drawn as one primitive.
///
/// `first` is the vertex offset into the owning batch, `count` the number of
/// vertices — the same pair a host passes to its draw call.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DrawRange {
    pub first: u32,
    pub count: u32,
}

impl DrawRange {
    #[inline]
    pub const fn new(first: u32, count: u32) -> Self {
        Self { first, count }
    }

    #[inline]
    pub const fn end(self) -> u32 {
        self.first + self.count
    }
}

/// A malformed range table.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchError {
    pub message: String,
    /// Index of the offending range.
    pub range: usize,
}

impl BatchError {
    fn new(msg: impl Into<String>, range: usize) -> Self {
        Self { message: msg.into(), range }
    }
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "geometry batch error at range {}: {}", self.range, self.message)
    }
}

impl std::error::Error for BatchError {}

/// An ordered vertex sequence plus a table of per-sub-shape draw ranges.
///
/// Several independent sub-shapes (e.g. the twelve polygons of a rounded
/// polygon sheet) share one vertex buffer; each gets a `DrawRange` recorded
/// in generation order. Ranges built through [`push_shape`](Self::push_shape)
/// are contiguous and non-overlapping by construction; tables assembled from
/// external parts can be checked with [`validate`](Self::validate).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryBatch {
    vertices: Vec<Vec2>,
    ranges: Vec<DrawRange>,
}

impl GeometryBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize, ranges: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            ranges: Vec::with_capacity(ranges),
        }
    }

    /// Appends one sub-shape and records its draw range.
    pub fn push_shape(&mut self, vertices: impl IntoIterator<Item = Vec2>) -> DrawRange {
        let first = self.vertices.len() as u32;
        self.vertices.extend(vertices);
        let count = self.vertices.len() as u32 - first;
        let range = DrawRange::new(first, count);
        self.ranges.push(range);
        range
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    #[inline]
    pub fn ranges(&self) -> &[DrawRange] {
        &self.ranges
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Vertices of one recorded sub-shape.
    pub fn shape(&self, index: usize) -> &[Vec2] {
        let r = self.ranges[index];
        &self.vertices[r.first as usize..r.end() as usize]
    }

    /// Raw byte view for buffer upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Checks the range-table invariant: ranges are contiguous in order,
    /// starting at zero, and together cover every vertex exactly once.
    pub fn validate(&self) -> Result<(), BatchError> {
        let mut cursor = 0u32;
        for (i, r) in self.ranges.iter().enumerate() {
            if r.first != cursor {
                return Err(BatchError::new(
                    format!("range starts at {} but previous ranges end at {cursor}", r.first),
                    i,
                ));
            }
            if r.count == 0 {
                return Err(BatchError::new("empty range", i));
            }
            cursor = r.end();
        }
        if cursor as usize != self.vertices.len() {
            return Err(BatchError::new(
                format!("ranges cover {cursor} vertices, buffer holds {}", self.vertices.len()),
                self.ranges.len().saturating_sub(1),
            ));
        }
        Ok(())
    }
}
