//! # Triangulated and Dotted Surfaces
//!
//! Closed triangulated surfaces for the boundary element solver, plus the
//! icosahedral dotted-surface generator used to shape a triangulated
//! sphere around an arbitrary particle system.
//!
//! The triangulation pipeline: a 20-vertex dodecahedron, split into 60
//! triangles through the pentagon centroids, recursively subdivided until
//! the requested triangle count, and optionally mapped onto a dotted
//! surface. Every produced polyhedron satisfies the Euler characteristic
//! V − E + F = 2; violating that is a hard failure.

pub mod dots;
pub mod edge;
pub mod face;
pub mod polyhedron;
pub mod sphere;
pub mod tests;
pub mod triangulation;
pub mod vertex;

pub use polyhedron::Polyhedron;
pub use vertex::Vertex;
