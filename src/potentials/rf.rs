//! Reaction-field Coulomb interaction.

use super::{unit_vector, PairPotential};
use crate::boundary::BoundaryCondition;
use crate::forcefield::ForceField;
use crate::particle::Particle;
use crate::units;
use crate::vector::Vec3;
use std::sync::Arc;

/// Coulomb interaction with the reaction-field correction of Riniker and
/// Christen, parameterized by the cutoff radius, the inverse Debye length
/// κ, and the permittivities inside and beyond the cutoff.
pub struct ReactionField {
    kappa: f64,
    forcefield: Arc<ForceField>,
    bc: Arc<dyn BoundaryCondition>,
    cutoff: f64,
}

impl ReactionField {
    pub fn new(
        kappa: f64,
        forcefield: Arc<ForceField>,
        bc: Arc<dyn BoundaryCondition>,
        cutoff: f64,
    ) -> Self {
        ReactionField {
            kappa,
            forcefield,
            bc,
            cutoff,
        }
    }

    /// The self-consistent reaction-field constant C_rf.
    ///
    /// See Eq. (33) of Christen et al., J. Comput. Chem. 26:1719-1751,
    /// 2005.
    pub(crate) fn compute_c_rf(kappa: f64, rc: f64, eps_inside: f64, eps_outside: f64) -> f64 {
        let kappa_rc = kappa * rc;
        let kappa_rc_2 = kappa_rc * kappa_rc;
        let eps_rf = (1.0 + kappa_rc_2 / (2.0 * (kappa_rc + 1.0))) * eps_outside;

        let c1 = 2.0 * eps_inside - 2.0 * eps_rf;
        let c2 = eps_inside + 2.0 * eps_rf;
        let c3 = 1.0 + kappa_rc;
        let c_rf = (c1 * c3 - eps_rf * kappa_rc_2) / (c2 * c3 + eps_rf * kappa_rc_2);
        log::debug!(
            "kappa: {}, eps_rf: {}, C_rf: {}",
            kappa,
            eps_rf,
            c_rf
        );
        c_rf
    }

    /// Energy and force on particle i for precomputed pair geometry.
    pub(crate) fn force_and_energy(
        rij: &Vec3,
        r: f64,
        r2: f64,
        q1: f64,
        q2: f64,
        kappa: f64,
        rc: f64,
        eps_inside: f64,
        eps_outside: f64,
    ) -> (f64, Vec3) {
        let rf = rc;
        let rf3 = rf * rf * rf;
        let c_rf = ReactionField::compute_c_rf(kappa, rc, eps_inside, eps_outside);

        let c1 = q1 * q2 / (units::FOUR_PI_E0 * eps_inside);
        let coulomb = c1 / r;
        let reaction = -c1 * (0.5 * c_rf * r2 / rf3 + (1.0 - 0.5 * c_rf) / rf);
        let energy = coulomb + reaction;

        let uv = unit_vector(rij, r);
        let d_crf_dr = -c1 * (1.0 / r2 + c_rf * r / rf3);
        (energy, -d_crf_dr * uv)
    }
}

impl PairPotential for ReactionField {
    fn energy_force(&self, pi: &Particle, pj: &Particle) -> Result<(f64, Vec3), String> {
        let (eps_inside, eps_outside) = self
            .forcefield
            .reaction_field(pi.spec().name(), pj.spec().name())?;

        let rij = self.bc.displacement(&pi.position(), &pj.position());
        let r = rij.norm();
        if r >= self.cutoff {
            return Ok((0.0, Vec3::zero()));
        }
        Ok(ReactionField::force_and_energy(
            &rij,
            r,
            r * r,
            pi.charge(),
            pj.charge(),
            self.kappa,
            self.cutoff,
            eps_inside,
            eps_outside,
        ))
    }
}
