//! Flat-triangle calculator with face-center collocation.

use super::data::{BemData, Node};
use super::kernels;
use super::rhs;
use super::BemCalculator;
use crate::param::Parameters;
use crate::surface::Polyhedron;
use crate::vector::Vec3;
use std::sync::Arc;

/// Collocates at triangle centers with a constant approximation on each
/// flat triangle.
pub struct FlatTriCenters {
    surface: Arc<Polyhedron>,
    data: BemData,
}

impl FlatTriCenters {
    pub fn new(param: &Parameters, surface: Arc<Polyhedron>) -> Result<Self, String> {
        let mut data = BemData::new(param, surface.number_of_faces())?;
        data.nodes = assign_nodes(&surface);
        log::debug!(
            "{} nodes, {}: inverse Debye length.",
            data.nodes.len(),
            data.ka
        );
        Ok(FlatTriCenters { surface, data })
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
                for node in &self.data.nodes {
                    let value = kernels::lij0(eps_ratio, &node.position, &node.normal, rk);
                    let area = node.area.unwrap_or(0.0);
                    potential += factor * value * area * self.data.x[node.index];
                }
                potential
            })
            .collect()
    }
}

/// Assign triangle centers as nodes.
fn assign_nodes(surface: &Polyhedron) -> Vec<Node> {
    surface
        .faces()
        .iter()
        .enumerate()
        .map(|(counter, face)| {
            let (center, normal) = surface.face_center_and_normal(face);
            Node {
                position: center,
                normal,
                index: counter,
                area: Some(face.area(surface.vertices())),
            }
        })
        .collect()
}

impl BemCalculator for FlatTriCenters {
    fn surface_matrix(&mut self) -> Result<(), String> {
        let n = self.data.n_col();
        log::debug!(
            "{}: dimension of surface matrix; {} triangles.",
            n,
            self.surface.number_of_faces()
        );

        let eps_ratio = self.data.eps_ratio;
        self.data.s.fill(0.0);
        for i in 0..n {
            self.data.s[(i, i)] = 1.0;
        }
        for i in 0..n {
            let r0 = self.data.nodes[i].position;
            for j in 0..n {
                if i == j {
                    continue;
                }
                let node_j = &self.data.nodes[j];
                let value = kernels::lij0(eps_ratio, &node_j.position, &node_j.normal, &r0)
                    * node_j.area.unwrap_or(0.0);
                self.data.s[(i, j)] -= value;
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
