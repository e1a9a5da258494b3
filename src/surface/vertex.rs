//! Surface vertices.

use crate::vector::Vec3;
use serde::{Deserialize, Serialize};

/// A vertex of a polyhedron: position, outward unit normal, and the
/// index that identifies it in edge keys and collocation vectors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    index: usize,
    position: Vec3,
    normal: Vec3,
}

impl Vertex {
    pub fn new(index: usize, position: Vec3, normal: Vec3) -> Self {
        Vertex {
            index,
            position,
            normal,
        }
    }

    /// Index assigned at creation; identifies this vertex in edge keys.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub(crate) fn set_position(&mut self, r: Vec3) {
        self.position = r;
    }

    pub(crate) fn set_normal(&mut self, n: Vec3) {
        self.normal = n;
    }
}
