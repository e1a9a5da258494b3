//! Surface edges, deduplicated by vertex index pairs.

use super::vertex::Vertex;
use serde::{Deserialize, Serialize};

/// An edge between two vertices, stored by vertex index.
///
/// Identity is the unordered index pair `(min, max)`; the string form of
/// that key is reserved for I/O.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    start: usize,
    end: usize,
}

impl Edge {
    /// # Panics
    ///
    /// Panics when start and end are the same vertex.
    pub fn new(start: usize, end: usize) -> Self {
        if start == end {
            panic!("Edge: start and end vertex must not be identical.");
        }
        Edge { start, end }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Canonical deduplication key `(min, max)`.
    pub fn key(&self) -> (usize, usize) {
        if self.start < self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }

    /// String identifier `min-max`, used in text output.
    pub fn id(&self) -> String {
        let (a, b) = self.key();
        format!("{}-{}", a, b)
    }

    /// Edge length for the given vertex set.
    pub fn length(&self, vertices: &[Vertex]) -> f64 {
        (vertices[self.start].position() - vertices[self.end].position()).norm()
    }
}
