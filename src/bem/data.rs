//! BEM data holder.

use crate::param::Parameters;
use crate::vector::Vec3;
use nalgebra::{DMatrix, DVector, Dyn};

/// A collocation node: position, outward unit normal, index into the
/// collocation vector, and the face area for triangle-center nodes.
#[derive(Debug, Clone)]
pub struct Node {
    pub position: Vec3,
    pub normal: Vec3,
    pub index: usize,
    pub area: Option<f64>,
}

/// Dense data of one boundary element problem.
pub struct BemData {
    /// Surface matrix, N_col x N_col.
    pub s: DMatrix<f64>,
    /// LU decomposition of S, present after `surface_matrix`.
    pub lu: Option<nalgebra::LU<f64, Dyn, Dyn>>,
    /// Right-hand side.
    pub b: DVector<f64>,
    /// Unknowns at the collocation points.
    pub x: DVector<f64>,
    /// Collocation nodes.
    pub nodes: Vec<Node>,
    /// Dielectric constant of the solute.
    pub eps_solute: f64,
    /// Dielectric constant of the solvent.
    pub eps_solvent: f64,
    /// Ratio between the dielectric constants outside and inside the
    /// dielectric boundary.
    pub eps_ratio: f64,
    /// Inverse Debye length.
    pub ka: f64,
}

impl BemData {
    /// Reads `bem.solute.eps`, `bem.solvent.eps` and `bem.solvent.ka`
    /// from the parameters and allocates for `n_col` collocation points.
    pub fn new(param: &Parameters, n_col: usize) -> Result<Self, String> {
        let eps_solute = param.real("bem.solute.eps")?;
        let eps_solvent = param.real("bem.solvent.eps")?;
        let ka = param.real_or("bem.solvent.ka", 0.0);
        if eps_solute <= 0.0 || eps_solvent <= 0.0 {
            return Err(format!(
                "({}, {}): permittivities must be positive.",
                eps_solute, eps_solvent
            ));
        }
        if ka < 0.0 {
            return Err(format!("{}: inverse Debye length must be >= 0.", ka));
        }
        Ok(BemData {
            s: DMatrix::zeros(n_col, n_col),
            lu: None,
            b: DVector::zeros(n_col),
            x: DVector::zeros(n_col),
            nodes: Vec::new(),
            eps_solute,
            eps_solvent,
            eps_ratio: eps_solvent / eps_solute,
            ka,
        })
    }

    /// Number of collocation points.
    pub fn n_col(&self) -> usize {
        self.b.len()
    }
}
