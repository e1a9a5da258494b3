//! Full periodic boundary conditions with the nearest-image convention.

use super::BoundaryCondition;
use crate::particle::cell::SimBox;
use crate::util;
use crate::vector::Vec3;

/// Minimum image in all three axes.
#[derive(Debug, Clone)]
pub struct Pbc {
    simbox: SimBox,
}

impl Pbc {
    pub fn new(simbox: SimBox) -> Self {
        Pbc { simbox }
    }

    /// Folds a single coordinate into `[0, L_k)`.
    pub(crate) fn fold(simbox: &SimBox, r: &Vec3) -> Result<Vec3, String> {
        let mut r_in = *r;
        for k in 0..3 {
            let box_k = simbox.length(k);
            let n = util::nint((r_in[k] / box_k).floor());
            r_in[k] -= n * box_k;
            if !(0.0..=box_k).contains(&r_in[k]) {
                return Err(format!(
                    "Position ({}) is not inside the box after folding.",
                    r_in
                ));
            }
        }
        Ok(r_in)
    }
}

impl BoundaryCondition for Pbc {
    fn displacement(&self, ri: &Vec3, rj: &Vec3) -> Vec3 {
        let mut rij = ri - rj;
        for k in 0..3 {
            let box_k = self.simbox.length(k);
            let dr = ri[k] - rj[k];
            let n = util::nint(dr / box_k);
            rij[k] = dr - n * box_k;
        }
        rij
    }

    fn place_inside(&self, r: &Vec3) -> Result<Vec3, String> {
        Pbc::fold(&self.simbox, r)
    }
}
