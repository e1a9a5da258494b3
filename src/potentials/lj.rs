//! Lennard-Jones interaction.

use super::{unit_vector, PairPotential};
use crate::boundary::BoundaryCondition;
use crate::forcefield::ForceField;
use crate::particle::Particle;
use crate::vector::Vec3;
use std::sync::Arc;

/// U(r) = C12/r¹² − C6/r⁶, truncated at the cutoff.
pub struct LennardJones {
    forcefield: Arc<ForceField>,
    bc: Arc<dyn BoundaryCondition>,
    cutoff: f64,
}

impl LennardJones {
    pub fn new(forcefield: Arc<ForceField>, bc: Arc<dyn BoundaryCondition>, cutoff: f64) -> Self {
        LennardJones {
            forcefield,
            bc,
            cutoff,
        }
    }

    /// Energy and force on particle i for precomputed pair geometry.
    pub(crate) fn force_and_energy(
        rij: &Vec3,
        r: f64,
        r2: f64,
        c12: f64,
        c6: f64,
    ) -> (f64, Vec3) {
        let r6 = r2 * r2 * r2;
        let r12 = r6 * r6;
        let t1 = c12 / r12;
        let t2 = c6 / r6;
        let energy = t1 - t2;

        let uv = unit_vector(rij, r);
        let dlj_dr = -6.0 * (2.0 * t1 - t2) / r;
        (energy, -dlj_dr * uv)
    }
}

impl PairPotential for LennardJones {
    fn energy_force(&self, pi: &Particle, pj: &Particle) -> Result<(f64, Vec3), String> {
        let (c12, c6) = self
            .forcefield
            .lennard_jones(pi.spec().name(), pj.spec().name())?;

        let rij = self.bc.displacement(&pi.position(), &pj.position());
        let r = rij.norm();
        if r >= self.cutoff {
            return Ok((0.0, Vec3::zero()));
        }
        Ok(LennardJones::force_and_energy(&rij, r, r * r, c12, c6))
    }
}
