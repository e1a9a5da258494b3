//! Two-dimensional periodic boundary conditions with stochastic
//! reinjection in the remaining direction.

use super::{crossed, BoundaryCondition, Direction};
use crate::particle::cell::SimBox;
use crate::util;
use crate::vector::Vec3;

/// Periodicity in two axes. The third coordinate, when out of range, is
/// redrawn uniformly inside `[0, L_k)`, which models stochastic
/// reinjection at surfaces.
#[derive(Debug, Clone)]
pub struct Pbc2d {
    simbox: SimBox,
    directions: [usize; 2],
    reinsert: usize,
}

impl Pbc2d {
    /// Creates the boundary condition periodic in `d1` and `d2`,
    /// reinjecting along `reinsert`.
    ///
    /// # Panics
    ///
    /// Panics when the three directions are not distinct.
    pub fn new(simbox: SimBox, d1: Direction, d2: Direction, reinsert: Direction) -> Self {
        if d1 == d2 || d1 == reinsert || d2 == reinsert {
            panic!("PBC-2D requires three distinct directions.");
        }
        Pbc2d {
            simbox,
            directions: [d1.value(), d2.value()],
            reinsert: reinsert.value(),
        }
    }
}

impl BoundaryCondition for Pbc2d {
    fn displacement(&self, ri: &Vec3, rj: &Vec3) -> Vec3 {
        let mut rij = ri - rj;
        for &k in &self.directions {
            let box_k = self.simbox.length(k);
            let dr = ri[k] - rj[k];
            let n = util::nint(dr / box_k);
            rij[k] = dr - n * box_k;
        }
        rij
    }

    fn place_inside(&self, r: &Vec3) -> Result<Vec3, String> {
        let mut r_in = *r;
        for &k in &self.directions {
            let box_k = self.simbox.length(k);
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

    fn reinject(&self, r: &Vec3) -> Vec3 {
        let k = self.reinsert;
        let mut r_in = *r;
        if crossed(r_in[k], k, &self.simbox) {
            r_in[k] = util::random_uniform(0.0, self.simbox.length(k));
        }
        r_in
    }
}
