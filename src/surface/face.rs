//! Polygonal faces: triangles and pentagons.

use super::vertex::Vertex;
use crate::vector::Vec3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A face given by an ordered vertex index tuple. Edge slots are filled
/// by the owning polyhedron after deduplication, so adjacent faces share
/// the canonical edge instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Face {
    vertex_indices: Vec<usize>,
    edge_indices: Vec<usize>,
}

impl Face {
    /// A triangle.
    ///
    /// # Panics
    ///
    /// Panics when two vertices coincide.
    pub fn triangle(v0: usize, v1: usize, v2: usize) -> Self {
        if v0 == v1 || v1 == v2 || v2 == v0 {
            panic!("Triangle: 2 or 3 vertices are identical.");
        }
        Face {
            vertex_indices: vec![v0, v1, v2],
            edge_indices: Vec::new(),
        }
    }

    /// A pentagon with explicitly ordered vertices.
    ///
    /// # Panics
    ///
    /// Panics when two vertices coincide.
    pub fn pentagon(v: [usize; 5]) -> Self {
        for i in 0..4 {
            for j in (i + 1)..5 {
                if v[i] == v[j] {
                    panic!("Pentagon: 2 or more vertices are identical.");
                }
            }
        }
        Face {
            vertex_indices: v.to_vec(),
            edge_indices: Vec::new(),
        }
    }

    /// Ordered vertex indices.
    pub fn vertex_indices(&self) -> &[usize] {
        &self.vertex_indices
    }

    /// Indices into the owning polyhedron's deduplicated edge vector.
    pub fn edge_indices(&self) -> &[usize] {
        &self.edge_indices
    }

    pub(crate) fn set_edge_indices(&mut self, edges: Vec<usize>) {
        self.edge_indices = edges;
    }

    /// Consecutive vertex index pairs around the face, closing the loop.
    pub fn vertex_pairs(&self) -> Vec<(usize, usize)> {
        let n = self.vertex_indices.len();
        (0..n)
            .map(|k| (self.vertex_indices[k], self.vertex_indices[(k + 1) % n]))
            .collect()
    }

    /// Face area: Heron's formula for triangles, the regular-pentagon
    /// expression from the average side length for pentagons.
    pub fn area(&self, vertices: &[Vertex]) -> f64 {
        match self.vertex_indices.len() {
            3 => {
                let a = (vertices[self.vertex_indices[0]].position()
                    - vertices[self.vertex_indices[1]].position())
                .norm();
                let b = (vertices[self.vertex_indices[1]].position()
                    - vertices[self.vertex_indices[2]].position())
                .norm();
                let c = (vertices[self.vertex_indices[2]].position()
                    - vertices[self.vertex_indices[0]].position())
                .norm();
                let s = 0.5 * (a + b + c);
                (s * (s - a) * (s - b) * (s - c)).sqrt()
            }
            5 => {
                let mut total = 0.0;
                for (i, j) in self.vertex_pairs() {
                    total += (vertices[i].position() - vertices[j].position()).norm();
                }
                let average = total / 5.0;
                5.0 * average * average * (3.0 * PI / 10.0).tan() / 4.0
            }
            n => panic!("Face with {} vertices has no area formula.", n),
        }
    }

    /// Face centroid.
    pub fn center(&self, vertices: &[Vertex]) -> Vec3 {
        let mut center = Vec3::zero();
        for &i in &self.vertex_indices {
            center += vertices[i].position();
        }
        center / self.vertex_indices.len() as f64
    }

    /// Unit normal oriented away from `body_center`.
    pub fn normal(&self, vertices: &[Vertex], body_center: &Vec3) -> Vec3 {
        let r0 = vertices[self.vertex_indices[0]].position();
        let r1 = vertices[self.vertex_indices[1]].position();
        let r2 = vertices[self.vertex_indices[2]].position();
        let normal = (r1 - r0).cross(&(r2 - r0)).normalize();
        let outward = self.center(vertices) - *body_center;
        if normal.dot(&outward) >= 0.0 {
            normal
        } else {
            -normal
        }
    }
}
