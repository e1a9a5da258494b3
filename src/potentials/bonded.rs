//! Bonded pair potentials: harmonic, half-attractive variants, and the
//! harmonic plus soft-repulsion combination.

use super::soft_repulsion::SoftRepulsion;
use super::{unit_vector, PairPotential};
use crate::boundary::BoundaryCondition;
use crate::forcefield::ForceField;
use crate::particle::Particle;
use crate::vector::Vec3;
use std::sync::Arc;

/// Harmonic bond, U(r) = ½·fc·(r − r0)².
pub struct Harmonic {
    forcefield: Arc<ForceField>,
    bc: Arc<dyn BoundaryCondition>,
}

impl Harmonic {
    pub fn new(forcefield: Arc<ForceField>, bc: Arc<dyn BoundaryCondition>) -> Self {
        Harmonic { forcefield, bc }
    }

    /// Energy and force on particle i for a precomputed unit vector.
    pub(crate) fn force_and_energy(uv: &Vec3, r: f64, r0: f64, fc: f64) -> (f64, Vec3) {
        let dr = r - r0;
        let energy = 0.5 * fc * dr * dr;
        let d_hp_dr = fc * dr;
        (energy, -d_hp_dr * uv)
    }
}

impl PairPotential for Harmonic {
    fn energy_force(&self, pi: &Particle, pj: &Particle) -> Result<(f64, Vec3), String> {
        let (r0, fc) = self
            .forcefield
            .harmonic(pi.spec().name(), pj.spec().name())?;

        let rij = self.bc.displacement(&pi.position(), &pj.position());
        let r = rij.norm();
        let uv = unit_vector(&rij, r);
        Ok(Harmonic::force_and_energy(&uv, r, r0, fc))
    }
}

/// Half-attractive harmonic bond: harmonic beyond r0, zero when
/// compressed (r ≤ r0).
pub struct HalveAttractiveHarmonic {
    forcefield: Arc<ForceField>,
    bc: Arc<dyn BoundaryCondition>,
}

impl HalveAttractiveHarmonic {
    pub fn new(forcefield: Arc<ForceField>, bc: Arc<dyn BoundaryCondition>) -> Self {
        HalveAttractiveHarmonic { forcefield, bc }
    }
}

impl PairPotential for HalveAttractiveHarmonic {
    fn energy_force(&self, pi: &Particle, pj: &Particle) -> Result<(f64, Vec3), String> {
        let (r0, fc) = self
            .forcefield
            .halve_attractive_harmonic(pi.spec().name(), pj.spec().name())?;

        let rij = self.bc.displacement(&pi.position(), &pj.position());
        let r = rij.norm();
        let dr = r - r0;
        if dr > 0.0 {
            let uv = unit_vector(&rij, r);
            Ok(Harmonic::force_and_energy(&uv, r, r0, fc))
        } else {
            Ok((0.0, Vec3::zero()))
        }
    }
}

/// Half-attractive quartic bond: U(r) = ½·fc·(r − r0)⁴ beyond r0, zero
/// when compressed.
pub struct HalveAttractiveQuartic {
    forcefield: Arc<ForceField>,
    bc: Arc<dyn BoundaryCondition>,
}

impl HalveAttractiveQuartic {
    pub fn new(forcefield: Arc<ForceField>, bc: Arc<dyn BoundaryCondition>) -> Self {
        HalveAttractiveQuartic { forcefield, bc }
    }
}

impl PairPotential for HalveAttractiveQuartic {
    fn energy_force(&self, pi: &Particle, pj: &Particle) -> Result<(f64, Vec3), String> {
        let (r0, fc) = self
            .forcefield
            .halve_attractive_quartic(pi.spec().name(), pj.spec().name())?;

        let rij = self.bc.displacement(&pi.position(), &pj.position());
        let r = rij.norm();
        let dr = r - r0;
        if dr > 0.0 {
            let dr3 = dr * dr * dr;
            let dr4 = dr * dr3;
            let energy = 0.5 * fc * dr4;
            let d_qp_dr = 2.0 * fc * dr3;
            let uv = unit_vector(&rij, r);
            Ok((energy, -d_qp_dr * uv))
        } else {
            Ok((0.0, Vec3::zero()))
        }
    }
}

/// Harmonic bond plus soft repulsion, sharing one unit vector so the
/// direction is computed once per pair.
pub struct HarmonicSoftRepulsion {
    forcefield: Arc<ForceField>,
    bc: Arc<dyn BoundaryCondition>,
    cutoff: f64,
}

impl HarmonicSoftRepulsion {
    /// # Panics
    ///
    /// Panics when the cutoff is not positive.
    pub fn new(forcefield: Arc<ForceField>, bc: Arc<dyn BoundaryCondition>, cutoff: f64) -> Self {
        if cutoff <= 0.0 {
            panic!("A cutoff distance must be > 0.0.");
        }
        HarmonicSoftRepulsion {
            forcefield,
            bc,
            cutoff,
        }
    }
}

impl PairPotential for HarmonicSoftRepulsion {
    fn energy_force(&self, pi: &Particle, pj: &Particle) -> Result<(f64, Vec3), String> {
        let (r0, fc, a_ij) = self
            .forcefield
            .harmonic_soft_repulsion(pi.spec().name(), pj.spec().name())?;

        let rij = self.bc.displacement(&pi.position(), &pj.position());
        let r = rij.norm();
        let r2 = r * r;
        let uv = unit_vector(&rij, r);

        let (e_sr, f_sr) = if r < self.cutoff {
            SoftRepulsion::force_and_energy(&uv, r, r2, a_ij, self.cutoff)
        } else {
            (0.0, Vec3::zero())
        };
        let (e_hp, f_hp) = Harmonic::force_and_energy(&uv, r, r0, fc);

        Ok((e_sr + e_hp, f_sr + f_hp))
    }
}
