//! Screened Coulomb interaction.

use super::{unit_vector, PairPotential};
use crate::boundary::BoundaryCondition;
use crate::forcefield::ForceField;
use crate::particle::Particle;
use crate::units;
use crate::vector::Vec3;
use std::sync::Arc;

/// Plain Coulomb interaction with a fixed relative permittivity. No
/// cutoff shift.
pub struct ScreenedCoulomb {
    forcefield: Arc<ForceField>,
    bc: Arc<dyn BoundaryCondition>,
}

impl ScreenedCoulomb {
    pub fn new(forcefield: Arc<ForceField>, bc: Arc<dyn BoundaryCondition>) -> Self {
        ScreenedCoulomb { forcefield, bc }
    }

    /// Energy and force on particle i for precomputed pair geometry.
    pub(crate) fn force_and_energy(
        rij: &Vec3,
        r: f64,
        r2: f64,
        q1: f64,
        q2: f64,
        eps: f64,
    ) -> (f64, Vec3) {
        let c1 = 1.0 / (units::FOUR_PI_E0 * eps);
        let energy = c1 * q1 * q2 / r;
        let d_dr = -c1 * q1 * q2 / r2;
        let uv = unit_vector(rij, r);
        (energy, -d_dr * uv)
    }
}

impl PairPotential for ScreenedCoulomb {
    fn energy_force(&self, pi: &Particle, pj: &Particle) -> Result<(f64, Vec3), String> {
        let eps = self
            .forcefield
            .screened_coulomb(pi.spec().name(), pj.spec().name())?;

        let rij = self.bc.displacement(&pi.position(), &pj.position());
        let r = rij.norm();
        Ok(ScreenedCoulomb::force_and_energy(
            &rij,
            r,
            r * r,
            pi.charge(),
            pj.charge(),
            eps,
        ))
    }
}
