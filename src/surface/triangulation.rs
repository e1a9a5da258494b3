//! Triangulation generators and surface file I/O.

use super::face::Face;
use super::polyhedron::Polyhedron;
use super::sphere;
use super::vertex::Vertex;
use crate::util;
use crate::vector::Vec3;
use std::io::{BufRead, Write};

/// Produces a closed triangulated sphere of the given radius with at
/// least `number_of_triangles` triangles.
///
/// Pipeline: dodecahedron, 60-triangle sphere through the pentagon
/// centroids, then recursive 4-way subdivision until the target count.
pub fn spherical(radius: f64, number_of_triangles: usize) -> Result<Polyhedron, String> {
    // Dodecahedron.
    let (vertices, pentagons) = sphere::dodecahedron(radius);
    let polyhedron = Polyhedron::new(vertices, pentagons)?;
    log::debug!("{}: area dodecahedron.", polyhedron.area());

    // 60 triangles and 32 vertices from the 12 pentagons.
    let (vertices, triangles) = sphere::triangles_60(&polyhedron, radius);
    let polyhedron = Polyhedron::new(vertices, triangles)?;
    log::debug!("{}: area triangulated sphere with 60 triangles.", polyhedron.area());

    // Subdivide until the requested number of triangles is reached.
    let (vertices, triangles) = sphere::divide(&polyhedron, number_of_triangles, radius);
    let mut surface = Polyhedron::new(vertices, triangles)?;
    surface.reset_vertex_normals();
    Ok(surface)
}

/// Triangulated cube: 8 vertices, 12 triangles (two per cube face).
pub fn cubic(side_length: f64) -> Result<Polyhedron, String> {
    let sl = side_length;
    let positions = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(sl, 0.0, 0.0),
        Vec3::new(sl, sl, 0.0),
        Vec3::new(0.0, sl, 0.0),
        Vec3::new(0.0, 0.0, sl),
        Vec3::new(sl, 0.0, sl),
        Vec3::new(sl, sl, sl),
        Vec3::new(0.0, sl, sl),
    ];
    let vertices: Vec<Vertex> = positions
        .into_iter()
        .enumerate()
        .map(|(i, r)| Vertex::new(i, r, Vec3::zero()))
        .collect();

    let triangles = vec![
        Face::triangle(0, 1, 2),
        Face::triangle(0, 2, 3),
        Face::triangle(2, 3, 7),
        Face::triangle(2, 6, 7),
        Face::triangle(0, 3, 7),
        Face::triangle(0, 4, 7),
        Face::triangle(0, 1, 4),
        Face::triangle(1, 4, 5),
        Face::triangle(1, 2, 6),
        Face::triangle(1, 5, 6),
        Face::triangle(4, 5, 6),
        Face::triangle(4, 6, 7),
    ];
    let mut cube = Polyhedron::new(vertices, triangles)?;
    cube.reset_vertex_normals();
    Ok(cube)
}

/// Maps the vertices of a polyhedron onto a dotted surface.
///
/// Dots and vertices are centered on their geometric centers, the
/// vertices scaled to the longest dot length; every vertex then claims
/// the nearest unclaimed dot in its own octant, compared after radial
/// projection onto the vertex length. Deterministic given the dot
/// ordering. Fails when a vertex finds no dot in its octant.
pub fn map_onto(dots: &[Vec3], polyhedron: &mut Polyhedron) -> Result<(), String> {
    if dots.len() < polyhedron.number_of_vertices() {
        return Err(format!(
            "{} dots cannot cover {} vertices.",
            dots.len(),
            polyhedron.number_of_vertices()
        ));
    }

    // Move the geometric center of the dots to the origin and find the
    // longest dot.
    let mut center = Vec3::zero();
    for dot in dots {
        center += *dot;
    }
    center = center / dots.len() as f64;
    let mut pool: Vec<Vec3> = dots.iter().map(|d| d - &center).collect();
    let largest = pool.iter().map(|d| d.norm()).fold(0.0, f64::max);

    // Move the geometric center of the vertices to the origin and adjust
    // the vertex lengths to the dotted surface dimension.
    let body_center = polyhedron.center();
    for i in 0..polyhedron.number_of_vertices() {
        let mut r = polyhedron.vertices()[i].position() - body_center;
        r = r * (largest / r.norm());
        polyhedron.set_vertex_position(i, r);
    }

    // Replace each vertex by the best dot in the same octant.
    for i in 0..polyhedron.number_of_vertices() {
        let r = polyhedron.vertices()[i].position();
        let vertex_length = r.norm();

        let mut best: Option<(usize, f64)> = None;
        for (k, dot) in pool.iter().enumerate() {
            if util::sgn(dot.x) == util::sgn(r.x)
                && util::sgn(dot.y) == util::sgn(r.y)
                && util::sgn(dot.z) == util::sgn(r.z)
            {
                let dot_length = dot.norm();
                let rv = (dot_length / vertex_length) * r;
                let distance2 = (rv - *dot).norm_squared();
                if best.is_none_or(|(_, closest)| distance2 < closest) {
                    best = Some((k, distance2));
                }
            }
        }
        match best {
            Some((k, _)) => {
                let dot = pool.remove(k);
                polyhedron.set_vertex_position(i, dot);
            }
            None => {
                return Err("Could not map vertex onto dotted surface: \
                     no dots in the same octant as the vertex."
                    .to_string());
            }
        }
    }

    polyhedron.recompute_center();
    polyhedron.reset_vertex_normals();
    Ok(())
}

/// Writes the surface in the triangulated-surface text format: a header
/// `Vcount Fcount`, vertex positions, vertex normals, then vertex index
/// triples per face.
pub fn write<W: Write>(stream: &mut W, polyhedron: &Polyhedron) -> std::io::Result<()> {
    writeln!(
        stream,
        "{} {}",
        polyhedron.number_of_vertices(),
        polyhedron.number_of_faces()
    )?;
    for vertex in polyhedron.vertices() {
        writeln!(stream, "{}", vertex.position())?;
    }
    for vertex in polyhedron.vertices() {
        writeln!(stream, "{}", vertex.normal())?;
    }
    for face in polyhedron.faces() {
        let indices = face.vertex_indices();
        writeln!(stream, " {} {} {}", indices[0], indices[1], indices[2])?;
    }
    Ok(())
}

/// Parses a surface from the triangulated-surface text format.
pub fn parse<R: BufRead>(stream: &mut R) -> Result<Polyhedron, String> {
    let mut numbers = Vec::new();
    for line in stream.lines() {
        let line = line.map_err(|e| format!("Surface read failed: {}", e))?;
        for token in line.split_whitespace() {
            numbers.push(token.to_string());
        }
    }
    let mut cursor = numbers.into_iter();
    let mut next = |what: &str| {
        cursor
            .next()
            .ok_or_else(|| format!("Surface file ended early, expected {}.", what))
    };
    let n_vertices: usize = next("vertex count")?
        .parse()
        .map_err(|e| format!("Bad vertex count: {}", e))?;
    let n_faces: usize = next("face count")?
        .parse()
        .map_err(|e| format!("Bad face count: {}", e))?;

    let mut read_vec3 = |what: &str| -> Result<Vec3, String> {
        let mut components = [0.0; 3];
        for c in &mut components {
            *c = next(what)?
                .parse()
                .map_err(|e| format!("Bad {}: {}", what, e))?;
        }
        Ok(Vec3::new(components[0], components[1], components[2]))
    };

    let mut positions = Vec::with_capacity(n_vertices);
    for _ in 0..n_vertices {
        positions.push(read_vec3("vertex position")?);
    }
    let mut normals = Vec::with_capacity(n_vertices);
    for _ in 0..n_vertices {
        normals.push(read_vec3("vertex normal")?);
    }
    let vertices: Vec<Vertex> = positions
        .into_iter()
        .zip(normals)
        .enumerate()
        .map(|(i, (r, n))| Vertex::new(i, r, n))
        .collect();

    let mut faces = Vec::with_capacity(n_faces);
    for _ in 0..n_faces {
        let mut indices = [0usize; 3];
        for idx in &mut indices {
            *idx = next("face index")?
                .parse()
                .map_err(|e| format!("Bad face index: {}", e))?;
        }
        faces.push(Face::triangle(indices[0], indices[1], indices[2]));
    }

    Polyhedron::new(vertices, faces)
}

/// Writes a dotted surface: a header count, then one position triple per
/// line.
pub fn write_dots<W: Write>(stream: &mut W, dots: &[Vec3]) -> std::io::Result<()> {
    writeln!(stream, "{}", dots.len())?;
    for dot in dots {
        writeln!(stream, "{}", dot)?;
    }
    Ok(())
}
