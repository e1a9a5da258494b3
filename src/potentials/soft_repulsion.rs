//! DPD-style soft repulsion.

use super::{unit_vector, PairPotential};
use crate::boundary::BoundaryCondition;
use crate::forcefield::ForceField;
use crate::particle::Particle;
use crate::vector::Vec3;
use std::sync::Arc;

/// U(r) = −A·(r − r²/(2·rc)) + ½·A·rc for r < rc, zero beyond.
///
/// The corresponding force A·(1 − r/rc)·û is the standard conservative
/// DPD repulsion.
pub struct SoftRepulsion {
    forcefield: Arc<ForceField>,
    bc: Arc<dyn BoundaryCondition>,
    cutoff: f64,
}

impl SoftRepulsion {
    /// # Panics
    ///
    /// Panics when the cutoff is not positive.
    pub fn new(forcefield: Arc<ForceField>, bc: Arc<dyn BoundaryCondition>, cutoff: f64) -> Self {
        if cutoff <= 0.0 {
            panic!("A cutoff distance must be > 0.0.");
        }
        SoftRepulsion {
            forcefield,
            bc,
            cutoff,
        }
    }

    /// Energy and force on particle i for a precomputed unit vector.
    pub(crate) fn force_and_energy(uv: &Vec3, r: f64, r2: f64, a_ij: f64, rc: f64) -> (f64, Vec3) {
        let energy = -a_ij * (r - r2 / (2.0 * rc)) + 0.5 * a_ij * rc;
        let f = a_ij * (1.0 - r / rc) * uv;
        (energy, f)
    }
}

impl PairPotential for SoftRepulsion {
    fn energy_force(&self, pi: &Particle, pj: &Particle) -> Result<(f64, Vec3), String> {
        let a_ij = self
            .forcefield
            .soft_repulsion(pi.spec().name(), pj.spec().name())?;

        let rij = self.bc.displacement(&pi.position(), &pj.position());
        let r = rij.norm();
        if r >= self.cutoff {
            return Ok((0.0, Vec3::zero()));
        }
        let uv = unit_vector(&rij, r);
        Ok(SoftRepulsion::force_and_energy(
            &uv,
            r,
            r * r,
            a_ij,
            self.cutoff,
        ))
    }
}
