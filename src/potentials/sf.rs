//! Shifted-force Coulomb interaction (Levitt form).

use super::{unit_vector, PairPotential};
use crate::boundary::BoundaryCondition;
use crate::forcefield::ForceField;
use crate::particle::Particle;
use crate::units;
use crate::vector::Vec3;
use std::sync::Arc;

/// U(r) = q1·q2/(4πε0·εr) · (1/r − 1/rc + (r − rc)/rc²).
///
/// Energy and force go to zero at the cutoff by construction.
pub struct ShiftedForce {
    forcefield: Arc<ForceField>,
    bc: Arc<dyn BoundaryCondition>,
    cutoff: f64,
}

impl ShiftedForce {
    pub fn new(forcefield: Arc<ForceField>, bc: Arc<dyn BoundaryCondition>, cutoff: f64) -> Self {
        ShiftedForce {
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
        q1: f64,
        q2: f64,
        eps_inside_rc: f64,
        rc: f64,
    ) -> (f64, Vec3) {
        let rc2 = rc * rc;
        let t1 = q1 * q2 / (units::FOUR_PI_E0 * eps_inside_rc);
        let elec = t1 * (1.0 / r - 1.0 / rc + (r - rc) / rc2); // kJ/mol

        let uv = unit_vector(rij, r);
        let d_elec_dr = t1 * (-1.0 / r2 + 1.0 / rc2);
        (elec, -d_elec_dr * uv) // kJ/(mol nm)
    }
}

impl PairPotential for ShiftedForce {
    fn energy_force(&self, pi: &Particle, pj: &Particle) -> Result<(f64, Vec3), String> {
        let eps_inside_rc = self
            .forcefield
            .shifted_force(pi.spec().name(), pj.spec().name())?;

        let rij = self.bc.displacement(&pi.position(), &pj.position());
        let r = rij.norm();
        if r >= self.cutoff {
            return Ok((0.0, Vec3::zero()));
        }
        Ok(ShiftedForce::force_and_energy(
            &rij,
            r,
            r * r,
            pi.charge(),
            pj.charge(),
            eps_inside_rc,
            self.cutoff,
        ))
    }
}
