//! # Boundary Element Solver
//!
//! Assembles and solves the dense surface integral equation for the
//! reaction potential on a closed triangulated dielectric boundary.
//! Collocation places the unknowns either at triangle centers (constant
//! approximation per flat triangle) or at the vertices (per-triangle
//! integral distributed to the corners by area/3).
//!
//! A curved-triangle strategy would integrate the kernel over patches
//! bounded by parametric edge curves; the curves ([`curve::Curve`]) are
//! provided, a quadrature rule over such patches is not.

pub mod curve;
pub mod data;
pub mod flat_centers;
pub mod flat_vertices;
pub mod kernels;
pub mod rhs;
pub mod tests;

use crate::vector::Vec3;

/// Strategy for calculating surface and reaction potentials.
///
/// The workflow is `surface_matrix` once per surface, then per charge
/// distribution `right_hand_side`, `solve`, and reaction potential
/// evaluations at probe points.
pub trait BemCalculator {
    /// Computes and LU-factorizes the surface matrix S in S·x = b.
    fn surface_matrix(&mut self) -> Result<(), String>;

    /// Computes the right-hand side b for the given charges.
    fn right_hand_side(&mut self, positions: &[Vec3], charges: &[f64]) -> Result<(), String>;

    /// Finds x in S·x = b.
    fn solve(&mut self) -> Result<(), String>;

    /// Reaction potentials at points in the solute region.
    fn reaction_potential_solute(&self, points: &[Vec3]) -> Result<Vec<f64>, String>;

    /// Reaction potentials at points in the solvent region.
    fn reaction_potential_solvent(&self, points: &[Vec3]) -> Result<Vec<f64>, String>;
}
