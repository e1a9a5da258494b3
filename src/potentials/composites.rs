//! Composite pair potentials: Lennard-Jones plus an electrostatic scheme,
//! and the hard-sphere variants used by Monte Carlo style drivers.

use super::lekner::Lekner;
use super::lj::LennardJones;
use super::rf::ReactionField;
use super::sc::ScreenedCoulomb;
use super::sf::ShiftedForce;
use super::PairPotential;
use crate::boundary::BoundaryCondition;
use crate::forcefield::ForceField;
use crate::particle::Particle;
use crate::units::LARGE;
use crate::vector::Vec3;
use std::sync::Arc;

/// Lennard-Jones plus shifted-force electrostatics.
pub struct LjShiftedForce {
    forcefield: Arc<ForceField>,
    bc: Arc<dyn BoundaryCondition>,
    cutoff: f64,
}

impl LjShiftedForce {
    pub fn new(forcefield: Arc<ForceField>, bc: Arc<dyn BoundaryCondition>, cutoff: f64) -> Self {
        LjShiftedForce {
            forcefield,
            bc,
            cutoff,
        }
    }
}

impl PairPotential for LjShiftedForce {
    fn energy_force(&self, pi: &Particle, pj: &Particle) -> Result<(f64, Vec3), String> {
        let name_i = pi.spec().name();
        let name_j = pj.spec().name();
        let (c12, c6) = self.forcefield.lennard_jones(name_i, name_j)?;
        let eps_inside_rc = self.forcefield.shifted_force(name_i, name_j)?;

        let rij = self.bc.displacement(&pi.position(), &pj.position());
        let r = rij.norm();
        if r >= self.cutoff {
            return Ok((0.0, Vec3::zero()));
        }
        let r2 = r * r;

        let (e_lj, f_lj) = LennardJones::force_and_energy(&rij, r, r2, c12, c6);
        let (e_el, f_el) = ShiftedForce::force_and_energy(
            &rij,
            r,
            r2,
            pi.charge(),
            pj.charge(),
            eps_inside_rc,
            self.cutoff,
        );
        Ok((e_lj + e_el, f_lj + f_el))
    }
}

/// Lennard-Jones plus reaction-field electrostatics.
pub struct LjReactionField {
    kappa: f64,
    forcefield: Arc<ForceField>,
    bc: Arc<dyn BoundaryCondition>,
    cutoff: f64,
}

impl LjReactionField {
    pub fn new(
        kappa: f64,
        forcefield: Arc<ForceField>,
        bc: Arc<dyn BoundaryCondition>,
        cutoff: f64,
    ) -> Self {
        LjReactionField {
            kappa,
            forcefield,
            bc,
            cutoff,
        }
    }
}

impl PairPotential for LjReactionField {
    fn energy_force(&self, pi: &Particle, pj: &Particle) -> Result<(f64, Vec3), String> {
        let name_i = pi.spec().name();
        let name_j = pj.spec().name();
        let (c12, c6) = self.forcefield.lennard_jones(name_i, name_j)?;
        let (eps_inside, eps_outside) = self.forcefield.reaction_field(name_i, name_j)?;

        let rij = self.bc.displacement(&pi.position(), &pj.position());
        let r = rij.norm();
        if r >= self.cutoff {
            return Ok((0.0, Vec3::zero()));
        }
        let r2 = r * r;

        let (e_lj, f_lj) = LennardJones::force_and_energy(&rij, r, r2, c12, c6);
        let (e_rf, f_rf) = ReactionField::force_and_energy(
            &rij,
            r,
            r2,
            pi.charge(),
            pj.charge(),
            self.kappa,
            self.cutoff,
            eps_inside,
            eps_outside,
        );
        Ok((e_lj + e_rf, f_lj + f_rf))
    }
}

/// Overlap test shared by the hard-sphere variants: the pair energy and
/// every force component become LARGE when the distance drops below the
/// sum of the radii.
fn hard_sphere_overlap(pi: &Particle, pj: &Particle, r: f64) -> bool {
    r <= pi.spec().radius() + pj.spec().radius()
}

/// Hard spheres with shifted-force electrostatics.
pub struct HardSphereShiftedForce {
    forcefield: Arc<ForceField>,
    bc: Arc<dyn BoundaryCondition>,
    cutoff: f64,
}

impl HardSphereShiftedForce {
    pub fn new(forcefield: Arc<ForceField>, bc: Arc<dyn BoundaryCondition>, cutoff: f64) -> Self {
        HardSphereShiftedForce {
            forcefield,
            bc,
            cutoff,
        }
    }
}

impl PairPotential for HardSphereShiftedForce {
    fn energy_force(&self, pi: &Particle, pj: &Particle) -> Result<(f64, Vec3), String> {
        let rij = self.bc.displacement(&pi.position(), &pj.position());
        let r = rij.norm();
        if hard_sphere_overlap(pi, pj, r) {
            return Ok((LARGE, Vec3::new(LARGE, LARGE, LARGE)));
        }
        if r >= self.cutoff {
            return Ok((0.0, Vec3::zero()));
        }
        let eps = self
            .forcefield
            .shifted_force(pi.spec().name(), pj.spec().name())?;
        Ok(ShiftedForce::force_and_energy(
            &rij,
            r,
            r * r,
            pi.charge(),
            pj.charge(),
            eps,
            self.cutoff,
        ))
    }
}

/// Hard spheres with screened Coulomb electrostatics.
pub struct HardSphereScreenedCoulomb {
    forcefield: Arc<ForceField>,
    bc: Arc<dyn BoundaryCondition>,
}

impl HardSphereScreenedCoulomb {
    pub fn new(forcefield: Arc<ForceField>, bc: Arc<dyn BoundaryCondition>) -> Self {
        HardSphereScreenedCoulomb { forcefield, bc }
    }
}

impl PairPotential for HardSphereScreenedCoulomb {
    fn energy_force(&self, pi: &Particle, pj: &Particle) -> Result<(f64, Vec3), String> {
        let rij = self.bc.displacement(&pi.position(), &pj.position());
        let r = rij.norm();
        if hard_sphere_overlap(pi, pj, r) {
            return Ok((LARGE, Vec3::new(LARGE, LARGE, LARGE)));
        }
        let eps = self
            .forcefield
            .screened_coulomb(pi.spec().name(), pj.spec().name())?;
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

/// Hard spheres with Lekner 2D-periodic electrostatics.
pub struct HardSphereLekner {
    forcefield: Arc<ForceField>,
    bc: Arc<dyn BoundaryCondition>,
    lekner: Lekner,
}

impl HardSphereLekner {
    pub fn new(forcefield: Arc<ForceField>, bc: Arc<dyn BoundaryCondition>, lekner: Lekner) -> Self {
        HardSphereLekner {
            forcefield,
            bc,
            lekner,
        }
    }
}

impl PairPotential for HardSphereLekner {
    fn energy_force(&self, pi: &Particle, pj: &Particle) -> Result<(f64, Vec3), String> {
        let rij = self.bc.displacement(&pi.position(), &pj.position());
        let r = rij.norm();
        if hard_sphere_overlap(pi, pj, r) {
            return Ok((LARGE, Vec3::new(LARGE, LARGE, LARGE)));
        }
        let eps_r = self
            .forcefield
            .screened_coulomb(pi.spec().name(), pj.spec().name())?;
        let (energy, force) = self.lekner.force_and_energy(&rij, pi.charge(), pj.charge());
        Ok((energy / eps_r, force / eps_r))
    }
}

/// The null interaction.
#[derive(Default)]
pub struct NonInteracting;

impl NonInteracting {
    pub fn new() -> Self {
        NonInteracting
    }
}

impl PairPotential for NonInteracting {
    fn energy_force(&self, _pi: &Particle, _pj: &Particle) -> Result<(f64, Vec3), String> {
        Ok((0.0, Vec3::zero()))
    }
}
