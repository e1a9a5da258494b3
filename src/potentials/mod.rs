//! # Pair-Potential Catalog
//!
//! Every pair potential is a pure functor from two particles to an
//! interaction energy and the force on the first particle; the force on
//! the second follows from Newton's third law and is applied by the
//! pair-list driver. Potentials hold shared immutable handles to the force
//! field, the box, and the boundary condition, and are configured once at
//! construction.
//!
//! Edge-case behavior is uniform across the family:
//! - a pair distance below machine-small substitutes a uniformly random
//!   unit vector for the displacement direction and logs a warning;
//! - a distance at or beyond the potential's cutoff yields `(0.0, 0)`;
//!   the shifted-force members additionally vanish at the cutoff by
//!   construction.

pub mod bonded;
pub mod composites;
pub mod gauss;
pub mod lekner;
pub mod lj;
pub mod rf;
pub mod sc;
pub mod sf;
pub mod soft_repulsion;
pub mod solid_sphere;

use crate::boundary::BoundaryCondition;
use crate::forcefield::ForceField;
use crate::param::Parameters;
use crate::particle::cell::SimBox;
use crate::particle::Particle;
use crate::util;
use crate::vector::Vec3;
use std::sync::Arc;

/// Distance below which two particles count as coincident.
pub(crate) const EPS_DISTANCE: f64 = f32::MIN_POSITIVE as f64;

/// A pair interaction: energy in kJ/mol and force on the first particle in
/// kJ/(mol nm).
pub trait PairPotential: Send + Sync {
    /// Evaluates the interaction for a particle pair. No side effects on
    /// the particles.
    fn energy_force(&self, pi: &Particle, pj: &Particle) -> Result<(f64, Vec3), String>;
}

/// Unit vector along `rij`, substituting a random direction for a
/// coincident pair. The substitution is logged once per occurrence.
pub(crate) fn unit_vector(rij: &Vec3, r: f64) -> Vec3 {
    if r > EPS_DISTANCE {
        rij / r
    } else {
        log::warn!("{}: zero distance encountered between two particles.", r);
        util::random_unit_vector()
    }
}

/// Cutoff distance for the given box: the configured non-bonded cutoff,
/// capped at half the smallest box length.
pub fn cutoff_distance(param: &Parameters, simbox: &SimBox) -> Result<f64, String> {
    let rc = param.real("forces.nb.cutoff")?;
    if rc <= 0.0 {
        return Err(format!("{}: cutoff distance must be > 0.", rc));
    }
    Ok(rc.min(simbox.half_extent()))
}

/// Creates a pair potential from its catalog name.
///
/// Recognized names: `lj`, `sf`, `sc`, `rf`, `lj+sf`, `lj+rf`, `hs+sf`,
/// `hs+sc`, `hs+lekner`, `hp`, `ha-hp`, `ha-qp`, `sr`, `hp+sr`,
/// `gauss-sf`, `gauss-sf+sr`, `ss-dsf`, `lekner`, `none`.
pub fn create_pair_potential(
    name: &str,
    forcefield: Arc<ForceField>,
    simbox: &SimBox,
    bc: Arc<dyn BoundaryCondition>,
    param: &Parameters,
) -> Result<Box<dyn PairPotential>, String> {
    let mesoscopic = param.boolean_or("simulation.mesoscale", false);
    match name {
        "lj" => {
            let rc = cutoff_distance(param, simbox)?;
            Ok(Box::new(lj::LennardJones::new(forcefield, bc, rc)))
        }
        "sf" => {
            let rc = cutoff_distance(param, simbox)?;
            Ok(Box::new(sf::ShiftedForce::new(forcefield, bc, rc)))
        }
        "sc" => Ok(Box::new(sc::ScreenedCoulomb::new(forcefield, bc))),
        "rf" => {
            let rc = cutoff_distance(param, simbox)?;
            let kappa = param.real_or("forces.nb.kappa", 0.0);
            Ok(Box::new(rf::ReactionField::new(kappa, forcefield, bc, rc)))
        }
        "lj+sf" => {
            let rc = cutoff_distance(param, simbox)?;
            Ok(Box::new(composites::LjShiftedForce::new(forcefield, bc, rc)))
        }
        "lj+rf" => {
            let rc = cutoff_distance(param, simbox)?;
            let kappa = param.real_or("forces.nb.kappa", 0.0);
            Ok(Box::new(composites::LjReactionField::new(
                kappa, forcefield, bc, rc,
            )))
        }
        "hs+sf" => {
            let rc = cutoff_distance(param, simbox)?;
            Ok(Box::new(composites::HardSphereShiftedForce::new(
                forcefield, bc, rc,
            )))
        }
        "hs+sc" => Ok(Box::new(composites::HardSphereScreenedCoulomb::new(
            forcefield, bc,
        ))),
        "hs+lekner" => {
            let summation = lekner::Lekner::new(*simbox, bc.clone(), crate::units::SMALL, 100, 100);
            Ok(Box::new(composites::HardSphereLekner::new(
                forcefield, bc, summation,
            )))
        }
        "hp" => Ok(Box::new(bonded::Harmonic::new(forcefield, bc))),
        "ha-hp" => Ok(Box::new(bonded::HalveAttractiveHarmonic::new(
            forcefield, bc,
        ))),
        "ha-qp" => Ok(Box::new(bonded::HalveAttractiveQuartic::new(
            forcefield, bc,
        ))),
        "sr" => {
            let rc = cutoff_distance(param, simbox)?;
            Ok(Box::new(soft_repulsion::SoftRepulsion::new(
                forcefield, bc, rc,
            )))
        }
        "hp+sr" => {
            let rc = cutoff_distance(param, simbox)?;
            Ok(Box::new(bonded::HarmonicSoftRepulsion::new(
                forcefield, bc, rc,
            )))
        }
        "gauss-sf" => {
            let rc = cutoff_distance(param, simbox)?;
            Ok(Box::new(gauss::GaussianShiftedForce::new(
                forcefield, bc, rc, mesoscopic,
            )))
        }
        "gauss-sf+sr" => {
            let rc = cutoff_distance(param, simbox)?;
            Ok(Box::new(gauss::GaussianShiftedForceSoftRepulsion::new(
                forcefield, bc, rc, mesoscopic,
            )))
        }
        "ss-dsf" => {
            let rc = cutoff_distance(param, simbox)?;
            let radius = param.real("forces.nb.sphere-radius")?;
            Ok(Box::new(solid_sphere::SolidSphereDsf::new(bc, rc, radius)))
        }
        "lekner" => Ok(Box::new(lekner::Lekner::new(
            *simbox,
            bc,
            crate::units::SMALL,
            100,
            100,
        ))),
        "none" => Ok(Box::new(composites::NonInteracting::new())),
        other => Err(format!("{}: no such pair potential.", other)),
    }
}
