//! Closed polyhedral surfaces.

use super::edge::Edge;
use super::face::Face;
use super::vertex::Vertex;
use crate::vector::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A polyhedron owning vertices, faces and deduplicated edges.
///
/// Edges are deduplicated by the unordered vertex index pair; every face
/// refers to the canonical edge instances through indices into the edge
/// vector. Construction asserts the Euler characteristic V − E + F = 2 of
/// a simply connected surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polyhedron {
    vertices: Vec<Vertex>,
    faces: Vec<Face>,
    edges: Vec<Edge>,
    center: Vec3,
}

impl Polyhedron {
    /// Builds a polyhedron from vertices and faces, deduplicating edges
    /// and wiring each face to the canonical edge instances.
    ///
    /// Fails when the Euler characteristic is not 2.
    pub fn new(vertices: Vec<Vertex>, mut faces: Vec<Face>) -> Result<Self, String> {
        let mut edge_map: HashMap<(usize, usize), usize> = HashMap::new();
        let mut edges: Vec<Edge> = Vec::new();
        for face in &mut faces {
            let mut edge_indices = Vec::with_capacity(face.vertex_indices().len());
            for (start, end) in face.vertex_pairs() {
                let edge = Edge::new(start, end);
                let slot = *edge_map.entry(edge.key()).or_insert_with(|| {
                    edges.push(edge);
                    edges.len() - 1
                });
                edge_indices.push(slot);
            }
            face.set_edge_indices(edge_indices);
        }

        let euler = vertices.len() as i64 - edges.len() as i64 + faces.len() as i64;
        if euler != 2 {
            return Err(format!(
                "Not a simply connected polyhedron: Euler characteristic is {}, must be 2.",
                euler
            ));
        }

        let mut polyhedron = Polyhedron {
            vertices,
            faces,
            edges,
            center: Vec3::zero(),
        };
        polyhedron.recompute_center();
        Ok(polyhedron)
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn number_of_faces(&self) -> usize {
        self.faces.len()
    }

    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    /// V − E + F.
    pub fn euler_characteristic(&self) -> i64 {
        self.vertices.len() as i64 - self.edges.len() as i64 + self.faces.len() as i64
    }

    /// Total surface area.
    pub fn area(&self) -> f64 {
        self.faces.iter().map(|f| f.area(&self.vertices)).sum()
    }

    /// Geometric center of the vertices.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Centroid and outward unit normal of a face.
    pub fn face_center_and_normal(&self, face: &Face) -> (Vec3, Vec3) {
        (
            face.center(&self.vertices),
            face.normal(&self.vertices, &self.center),
        )
    }

    /// Replaces vertex positions. Used by the dotted-surface mapping;
    /// callers must follow up with [`Polyhedron::reset_vertex_normals`].
    pub(crate) fn set_vertex_position(&mut self, index: usize, r: Vec3) {
        self.vertices[index].set_position(r);
    }

    pub(crate) fn recompute_center(&mut self) {
        let mut center = Vec3::zero();
        for v in &self.vertices {
            center += v.position();
        }
        self.center = center / self.vertices.len() as f64;
    }

    /// Recomputes every vertex normal as the normalized average of the
    /// unit normals of its incident faces.
    pub fn reset_vertex_normals(&mut self) {
        let mut normals = vec![Vec3::zero(); self.vertices.len()];
        let mut counters = vec![0usize; self.vertices.len()];
        for face in &self.faces {
            let normal = face.normal(&self.vertices, &self.center);
            for &i in face.vertex_indices() {
                normals[i] += normal;
                counters[i] += 1;
            }
        }
        for (i, vertex) in self.vertices.iter_mut().enumerate() {
            if counters[i] > 0 {
                let average = normals[i] / counters[i] as f64;
                vertex.set_normal(average.normalize());
            }
        }
    }
}
