//! Spherical triangulation stages: dodecahedron, 60-triangle sphere, and
//! recursive subdivision.

use super::face::Face;
use super::polyhedron::Polyhedron;
use super::vertex::Vertex;
use crate::vector::Vec3;
use std::collections::HashMap;

fn radial_vertex(index: usize, r: Vec3) -> Vertex {
    let normal = r.normalize();
    Vertex::new(index, r, normal)
}

/// The 20-vertex dodecahedron of the given radius, with its 12 canonical
/// pentagons.
///
/// Side lengths: pentagon a = 2r/√3, cage b = 4r/((1 + √5)√3), and the
/// offset d = b·√((3 − √5)/8).
pub fn dodecahedron(radius: f64) -> (Vec<Vertex>, Vec<Face>) {
    let a = 2.0 * radius / 3.0_f64.sqrt();
    let b = 4.0 * radius / ((1.0 + 5.0_f64.sqrt()) * 3.0_f64.sqrt());
    let d = b * ((3.0 - 5.0_f64.sqrt()) / 8.0).sqrt();

    let positions = [
        Vec3::new(0.5 * a - d, 0.0, 0.5 * a + 0.5 * b),
        Vec3::new(0.5 * a, 0.5 * a, 0.5 * a),
        Vec3::new(0.0, 0.5 * a + 0.5 * b, 0.5 * a - d),
        Vec3::new(-0.5 * a, 0.5 * a, 0.5 * a),
        Vec3::new(-0.5 * a + d, 0.0, 0.5 * a + 0.5 * b),
        Vec3::new(0.0, 0.5 * a + 0.5 * b, -0.5 * a + d),
        Vec3::new(0.5 * a, 0.5 * a, -0.5 * a),
        Vec3::new(0.5 * a - d, 0.0, -0.5 * a - 0.5 * b),
        Vec3::new(-0.5 * a + d, 0.0, -0.5 * a - 0.5 * b),
        Vec3::new(-0.5 * a, 0.5 * a, -0.5 * a),
        Vec3::new(0.5 * a, -0.5 * a, -0.5 * a),
        Vec3::new(-0.5 * a, -0.5 * a, -0.5 * a),
        Vec3::new(0.0, -0.5 * a - 0.5 * b, -0.5 * a + d),
        Vec3::new(0.5 * a, -0.5 * a, 0.5 * a),
        Vec3::new(0.0, -0.5 * a - 0.5 * b, 0.5 * a - d),
        Vec3::new(-0.5 * a, -0.5 * a, 0.5 * a),
        Vec3::new(0.5 * a + 0.5 * b, -0.5 * a + d, 0.0),
        Vec3::new(0.5 * a + 0.5 * b, 0.5 * a - d, 0.0),
        Vec3::new(-0.5 * a - 0.5 * b, -0.5 * a + d, 0.0),
        Vec3::new(-0.5 * a - 0.5 * b, 0.5 * a - d, 0.0),
    ];
    let vertices: Vec<Vertex> = positions
        .into_iter()
        .enumerate()
        .map(|(i, r)| radial_vertex(i, r))
        .collect();

    // The 12 canonical pentagons, each an explicitly ordered vertex
    // tuple.
    let pentagons = [
        [0, 1, 2, 3, 4],
        [4, 3, 19, 18, 15],
        [4, 15, 14, 13, 0],
        [0, 13, 16, 17, 1],
        [7, 6, 5, 9, 8],
        [8, 9, 19, 18, 11],
        [8, 11, 12, 10, 7],
        [7, 10, 16, 17, 6],
        [17, 6, 5, 2, 1],
        [5, 9, 19, 3, 2],
        [16, 13, 14, 12, 10],
        [12, 11, 18, 15, 14],
    ];
    let faces = pentagons.into_iter().map(Face::pentagon).collect();

    (vertices, faces)
}

/// Splits each pentagon of a dodecahedron into 5 triangles through its
/// centroid pushed onto the sphere, yielding 60 triangles and 32
/// vertices.
pub fn triangles_60(polyhedron: &Polyhedron, radius: f64) -> (Vec<Vertex>, Vec<Face>) {
    let mut vertices: Vec<Vertex> = polyhedron.vertices().to_vec();
    let mut triangles = Vec::with_capacity(5 * polyhedron.number_of_faces());

    for face in polyhedron.faces() {
        // Pentagon centroid, scaled to the sphere surface.
        let mut center = Vec3::zero();
        for &i in face.vertex_indices() {
            center += vertices[i].position();
        }
        center = center / face.vertex_indices().len() as f64;
        center = center * (radius / center.norm());

        // The centroid becomes a new vertex.
        let centroid_index = vertices.len();
        vertices.push(Vertex::new(centroid_index, center, center / radius));

        let indices = face.vertex_indices();
        for k in 0..indices.len() {
            let v_i = indices[k];
            let v_next = indices[(k + 1) % indices.len()];
            triangles.push(Face::triangle(v_i, v_next, centroid_index));
        }
    }
    log::debug!(
        "{} vertices, {} triangles after pentagon splitting.",
        vertices.len(),
        triangles.len()
    );
    (vertices, triangles)
}

/// Repeatedly quarters every triangle, creating midpoint vertices on the
/// sphere surface, until the triangle count reaches `number_of_triangles`.
///
/// Midpoints are cached by the unordered edge key so adjacent triangles
/// share vertices.
pub fn divide(
    polyhedron: &Polyhedron,
    number_of_triangles: usize,
    radius: f64,
) -> (Vec<Vertex>, Vec<Face>) {
    let mut vertices: Vec<Vertex> = polyhedron.vertices().to_vec();
    let mut current: Vec<Face> = polyhedron.faces().to_vec();
    let mut midpoints: HashMap<(usize, usize), usize> = HashMap::new();

    while current.len() < number_of_triangles {
        let mut triangles = Vec::with_capacity(4 * current.len());
        for triangle in &current {
            for (start, end) in triangle.vertex_pairs() {
                let key = if start < end { (start, end) } else { (end, start) };
                if !midpoints.contains_key(&key) {
                    let start_r = vertices[start].position();
                    let end_r = vertices[end].position();
                    let mut mp = start_r + 0.5 * (end_r - start_r);
                    // Put it on the surface of the sphere.
                    mp = mp * (radius / mp.norm());

                    let index = vertices.len();
                    vertices.push(Vertex::new(index, mp, mp / radius));
                    midpoints.insert(key, index);
                }
            }

            let indices = triangle.vertex_indices();
            let key = |a: usize, b: usize| if a < b { (a, b) } else { (b, a) };
            let c1 = midpoints[&key(indices[0], indices[1])];
            let c2 = midpoints[&key(indices[1], indices[2])];
            let c3 = midpoints[&key(indices[2], indices[0])];
            triangles.push(Face::triangle(c1, c2, c3));
            triangles.push(Face::triangle(c1, c2, indices[1]));
            triangles.push(Face::triangle(c2, c3, indices[2]));
            triangles.push(Face::triangle(c3, c1, indices[0]));
        }
        current = triangles;
    }

    log::debug!(
        "{} vertices, {} triangles after subdivision.",
        vertices.len(),
        current.len()
    );
    (vertices, current)
}
