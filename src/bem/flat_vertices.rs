//! Flat-triangle calculator with vertex collocation.

use super::data::{BemData, Node};
use super::kernels;
use super::rhs;
use super::BemCalculator;
use crate::param::Parameters;
use crate::surface::Polyhedron;
use crate::vector::Vec3;
use std::sync::Arc;

/// Collocates at the vertices; the per-triangle kernel integral is
/// distributed to the triangle's three vertices by area/3.
pub struct FlatTriVertices {
    surface: Arc<Polyhedron>,
    data: BemData,
}

impl FlatTriVertices {
    pub fn new(param: &Parameters, surface: Arc<Polyhedron>) -> Result<Self, String> {
        let mut data = BemData::new(param, surface.number_of_vertices())?;
        data.nodes = assign_nodes(&surface);
        log::debug!("{} vertex nodes.", data.nodes.len());
        Ok(FlatTriVertices { surface, data })
    }

    /// The underlying dataset, for diagnostics.
    pub fn data(&self) -> &BemData {
        &self.data
    }

    fn reaction_potential(&self, factor: f64, points: &[Vec3]) -> Vec<f64> {
        let eps_ratio = self.data.eps_ratio;
        points
            .iter()
            .map(|rk| {
                let mut potential = 0.0;
                for face in self.surface.faces() {
                    let (center, normal) = self.surface.face_center_and_normal(face);
                    let area = face.area(self.surface.vertices());
                    let value = kernels::lij0(eps_ratio, &center, &normal, rk) * area / 3.0;
                    for &index in face.vertex_indices() {
                        potential += factor * value * self.data.x[index];
                    }
                }
                potential
            })
            .collect()
    }
}

/// Assign vertices as nodes.
fn assign_nodes(surface: &Polyhedron) -> Vec<Node> {
    surface
        .vertices()
        .iter()
        .map(|vertex| Node {
            position: vertex.position(),
            normal: vertex.normal(),
            index: vertex.index(),
            area: None,
        })
        .collect()
}

impl BemCalculator for FlatTriVertices {
    fn surface_matrix(&mut self) -> Result<(), String> {
        let n = self.data.n_col();
        log::debug!("{}: dimension of surface matrix.", n);

        let eps_ratio = self.data.eps_ratio;
        self.data.s.fill(0.0);
        for i in 0..n {
            self.data.s[(i, i)] = 1.0;
        }

        // No singularities to worry about: the kernel is evaluated at
        // face centers, never at the collocation vertex itself.
        for face in self.surface.faces() {
            let (center, normal) = self.surface.face_center_and_normal(face);
            let area = face.area(self.surface.vertices());
            for node in &self.data.nodes {
                let value =
                    kernels::lij0(eps_ratio, &center, &normal, &node.position) * area / 3.0;
                for &index_j in face.vertex_indices() {
                    self.data.s[(node.index, index_j)] -= value;
                }
            }
        }

        // LU-decomposition.
        let lu = self.data.s.clone().lu();
        if lu.determinant() == 0.0 {
            return Err("Surface matrix is singular: collocation points overlap.".to_string());
        }
        self.data.lu = Some(lu);
        Ok(())
    }

    fn right_hand_side(&mut self, positions: &[Vec3], charges: &[f64]) -> Result<(), String> {
        self.data.b = rhs::right_hand_side(
            &self.data.nodes,
            positions,
            charges,
            self.data.eps_solvent,
            self.data.eps_solute,
        )?;
        Ok(())
    }

    fn solve(&mut self) -> Result<(), String> {
        let lu = self
            .data
            .lu
            .as_ref()
            .ok_or("Surface matrix has not been computed.")?;
        self.data.x = lu
            .solve(&self.data.b)
            .ok_or("Surface matrix is singular; cannot solve.")?;
        Ok(())
    }

    fn reaction_potential_solute(&self, points: &[Vec3]) -> Result<Vec<f64>, String> {
        let factor = (self.data.eps_ratio + 1.0) / 2.0;
        Ok(self.reaction_potential(factor, points))
    }

    fn reaction_potential_solvent(&self, points: &[Vec3]) -> Result<Vec<f64>, String> {
        let factor = (self.data.eps_ratio + 1.0) / (2.0 * self.data.eps_ratio);
        Ok(self.reaction_potential(factor, points))
    }
}
