//! Right-hand side of the surface equation.

use super::data::Node;
use crate::units;
use crate::vector::Vec3;
use nalgebra::DVector;

/// b[i] = Σ_Q 2/((1 + ε_ratio)·4πε0·ε_solute) · Q / |rQ − r_i| over all
/// source charges, for every collocation node.
///
/// Fails on empty nodes, on empty charges, and on a length mismatch
/// between positions and charges.
pub fn right_hand_side(
    nodes: &[Node],
    positions: &[Vec3],
    charges: &[f64],
    eps_solvent: f64,
    eps_solute: f64,
) -> Result<DVector<f64>, String> {
    if nodes.is_empty() {
        return Err("Nodes not provided.".to_string());
    }
    if positions.len() != charges.len() {
        return Err(format!(
            "{} charges vs {} positions: lengths are not the same.",
            charges.len(),
            positions.len()
        ));
    }
    if positions.is_empty() {
        return Err("Positions and/or charges not provided.".to_string());
    }

    let eps_ratio = eps_solvent / eps_solute;
    let mut b = DVector::zeros(nodes.len());
    let f1 = 2.0 / ((1.0 + eps_ratio) * units::FOUR_PI_E0 * eps_solute);
    for (r_q, q) in positions.iter().zip(charges) {
        for node in nodes {
            let dis = (r_q - &node.position).norm();
            b[node.index] += f1 * q / dis;
        }
    }
    Ok(b)
}
