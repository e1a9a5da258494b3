//! Coulomb interaction between overlapping Gaussian charge densities,
//! in shifted-force form.

use super::soft_repulsion::SoftRepulsion;
use super::{unit_vector, PairPotential, EPS_DISTANCE};
use crate::boundary::BoundaryCondition;
use crate::forcefield::ForceField;
use crate::particle::Particle;
use crate::units;
use crate::vector::Vec3;
use std::f64::consts::PI;
use std::sync::Arc;

/// Factor S for erf(x) with x = S·r, from the widths of the two
/// densities.
fn s_factor(sigma_i: f64, sigma_j: f64) -> f64 {
    (1.0 / (sigma_i * sigma_i + sigma_j * sigma_j)).sqrt()
}

/// U(rc) and dU/dr(rc) of the unshifted Gaussian interaction.
fn at_cutoff(q_i: f64, q_j: f64, s: f64, cutoff: f64, mesoscopic: bool) -> (f64, f64) {
    let four_pi = 4.0 * PI;
    let sqrt_pi = PI.sqrt();

    let x = s * cutoff;
    let erf_x = erf(x);
    let t = erf_x * q_i * q_j / cutoff;
    let u = if mesoscopic {
        t / four_pi
    } else {
        t / units::FOUR_PI_E0
    };

    let e = (-x * x).exp();
    let t = (2.0 / sqrt_pi * e * x - erf_x) * q_i * q_j / (cutoff * cutoff);
    let du_dr = if mesoscopic {
        t / four_pi
    } else {
        t / units::FOUR_PI_E0
    };

    (u, du_dr)
}

/// Error function, Abramowitz & Stegun 7.1.26 rational approximation
/// (absolute error below 1.5e-7).
pub(crate) fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + 0.3275911 * x);
    let y = 1.0
        - (((((1.061405429 * t - 1.453152027) * t) + 1.421413741) * t - 0.284496736) * t
            + 0.254829592)
            * t
            * (-x * x).exp();
    sign * y
}

/// Error-function Coulomb between Gaussian charge densities with widths
/// σi, σj, made to vanish at the cutoff by the shifted-force
/// construction. The `mesoscopic` flag removes the 4πε0 prefactor.
pub struct GaussianShiftedForce {
    forcefield: Arc<ForceField>,
    bc: Arc<dyn BoundaryCondition>,
    cutoff: f64,
    mesoscopic: bool,
}

impl GaussianShiftedForce {
    /// # Panics
    ///
    /// Panics when the cutoff is not positive.
    pub fn new(
        forcefield: Arc<ForceField>,
        bc: Arc<dyn BoundaryCondition>,
        cutoff: f64,
        mesoscopic: bool,
    ) -> Self {
        if cutoff <= 0.0 {
            panic!("A cutoff distance must be > 0.0.");
        }
        GaussianShiftedForce {
            forcefield,
            bc,
            cutoff,
            mesoscopic,
        }
    }

    /// Energy and force on particle i for precomputed pair geometry.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn force_and_energy(
        rij: &Vec3,
        r: f64,
        r2: f64,
        q_i: f64,
        q_j: f64,
        sigma_i: f64,
        sigma_j: f64,
        cutoff: f64,
        mesoscopic: bool,
    ) -> (f64, Vec3) {
        let four_pi = 4.0 * PI;
        let sqrt_pi = PI.sqrt();

        if r >= cutoff {
            return (0.0, Vec3::zero());
        }
        if r <= EPS_DISTANCE {
            log::warn!("{}: zero distance encountered between two particles.", r);
        }

        let s = s_factor(sigma_i, sigma_j);
        let (u_at_cutoff, du_dr_at_cutoff) = at_cutoff(q_i, q_j, s, cutoff, mesoscopic);

        let x = s * r;
        let erf_x = erf(x);
        let t = erf_x * q_i * q_j / r;
        let t = if mesoscopic {
            t / four_pi
        } else {
            t / units::FOUR_PI_E0
        };
        // Shifted force
        let energy = t - u_at_cutoff - du_dr_at_cutoff * (r - cutoff);

        let e = (-x * x).exp();
        let t = (2.0 / sqrt_pi * e * x - erf_x) * q_i * q_j / r2;
        let du_dr = if mesoscopic {
            t / four_pi
        } else {
            t / units::FOUR_PI_E0
        };
        let uv = unit_vector(rij, r);
        let f = (-du_dr + du_dr_at_cutoff) * uv;

        (energy, f)
    }
}

impl PairPotential for GaussianShiftedForce {
    fn energy_force(&self, pi: &Particle, pj: &Particle) -> Result<(f64, Vec3), String> {
        let (sigma_i, sigma_j) = self
            .forcefield
            .gaussian_charge_density(pi.spec().name(), pj.spec().name())?;

        let rij = self.bc.displacement(&pi.position(), &pj.position());
        let r = rij.norm();
        Ok(GaussianShiftedForce::force_and_energy(
            &rij,
            r,
            r * r,
            pi.charge(),
            pj.charge(),
            sigma_i,
            sigma_j,
            self.cutoff,
            self.mesoscopic,
        ))
    }
}

/// Gaussian shifted-force electrostatics plus soft repulsion, sharing the
/// pair geometry.
pub struct GaussianShiftedForceSoftRepulsion {
    forcefield: Arc<ForceField>,
    bc: Arc<dyn BoundaryCondition>,
    cutoff: f64,
    mesoscopic: bool,
}

impl GaussianShiftedForceSoftRepulsion {
    /// # Panics
    ///
    /// Panics when the cutoff is not positive.
    pub fn new(
        forcefield: Arc<ForceField>,
        bc: Arc<dyn BoundaryCondition>,
        cutoff: f64,
        mesoscopic: bool,
    ) -> Self {
        if cutoff <= 0.0 {
            panic!("A cutoff distance must be > 0.0.");
        }
        GaussianShiftedForceSoftRepulsion {
            forcefield,
            bc,
            cutoff,
            mesoscopic,
        }
    }
}

impl PairPotential for GaussianShiftedForceSoftRepulsion {
    fn energy_force(&self, pi: &Particle, pj: &Particle) -> Result<(f64, Vec3), String> {
        let name_i = pi.spec().name();
        let name_j = pj.spec().name();
        let (sigma_i, sigma_j) = self.forcefield.gaussian_charge_density(name_i, name_j)?;
        let a_ij = self.forcefield.soft_repulsion(name_i, name_j)?;

        let rij = self.bc.displacement(&pi.position(), &pj.position());
        let r = rij.norm();
        let r2 = r * r;

        let (e_gauss, f_gauss) = GaussianShiftedForce::force_and_energy(
            &rij,
            r,
            r2,
            pi.charge(),
            pj.charge(),
            sigma_i,
            sigma_j,
            self.cutoff,
            self.mesoscopic,
        );
        let (e_sr, f_sr) = if r < self.cutoff {
            let uv = unit_vector(&rij, r);
            SoftRepulsion::force_and_energy(&uv, r, r2, a_ij, self.cutoff)
        } else {
            (0.0, Vec3::zero())
        };

        Ok((e_gauss + e_sr, f_gauss + f_sr))
    }
}
