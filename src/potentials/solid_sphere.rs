//! Damped shifted-force Coulomb interaction for solid dielectric
//! spheres.

use super::{PairPotential, EPS_DISTANCE};
use crate::boundary::BoundaryCondition;
use crate::particle::Particle;
use crate::units;
use crate::vector::Vec3;
use std::sync::Arc;

/// Coulomb shifted force outside a solid sphere of radius a; inside
/// (r < a) the potential transitions smoothly to (3 − r²/a²)/(2a).
pub struct SolidSphereDsf {
    bc: Arc<dyn BoundaryCondition>,
    cutoff: f64,
    radius: f64,
}

impl SolidSphereDsf {
    /// # Panics
    ///
    /// Panics when cutoff or radius is not positive.
    pub fn new(bc: Arc<dyn BoundaryCondition>, cutoff: f64, radius: f64) -> Self {
        if cutoff <= 0.0 {
            panic!("A cutoff distance must be > 0.0.");
        }
        if radius <= 0.0 {
            panic!("A sphere radius must be > 0.0.");
        }
        SolidSphereDsf { bc, cutoff, radius }
    }

    /// Energy and force on particle i for precomputed pair geometry.
    pub(crate) fn force_and_energy(
        &self,
        rij: &Vec3,
        r: f64,
        r2: f64,
        q1: f64,
        q2: f64,
    ) -> (f64, Vec3) {
        let rc = self.cutoff;
        let rc2 = rc * rc;
        let a = self.radius;
        let a2 = a * a;
        let a3 = a2 * a;

        if r2 > rc2 {
            return (0.0, Vec3::zero());
        }

        let t1 = q1 * q2 / units::FOUR_PI_E0;
        let uv = if r > EPS_DISTANCE { rij / r } else { *rij };
        if r2 > a2 {
            // Outside the solid sphere.
            let d_elec_dr = t1 * (-1.0 / r2 + 1.0 / rc2);
            let energy = t1 * (1.0 / r - 1.0 / rc + (r - rc) / rc2);
            (energy, -d_elec_dr * uv)
        } else {
            // Inside the solid sphere.
            let pot_r = 0.5 * (3.0 - r2 / a2) / a;
            let d_elec_dr = t1 * (-r / a3 + 1.0 / rc2);
            let energy = t1 * (pot_r - 1.0 / rc + (r - rc) / rc2);
            (energy, -d_elec_dr * uv)
        }
    }
}

impl PairPotential for SolidSphereDsf {
    fn energy_force(&self, pi: &Particle, pj: &Particle) -> Result<(f64, Vec3), String> {
        let rij = self.bc.displacement(&pi.position(), &pj.position());
        let r = rij.norm();
        Ok(self.force_and_energy(&rij, r, r * r, pi.charge(), pj.charge()))
    }
}
