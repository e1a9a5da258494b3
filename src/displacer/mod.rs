//! # Displacers
//!
//! A displacer advances the particle system by one time step and reports
//! step diagnostics. Steps are strictly sequential and atomic: when any
//! force evaluation fails or produces a non-finite component, the step
//! returns an error and the integrator does not apply partial results
//! (positions already advanced are not rolled back; the caller decides).

pub mod dpd;
pub mod tests;
pub mod velocity_verlet;

use crate::particle::system::ParticleSystem;
use crate::particle::Particle;
use crate::units;
use serde::{Deserialize, Serialize};

/// Diagnostics of a single step.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimulationData {
    /// Kinetic energy at the end of the step, kJ/mol.
    pub kinetic: f64,
    /// Potential energy at the end of the step, kJ/mol.
    pub potential: f64,
    /// Instantaneous temperature, K.
    pub temperature: f64,
    /// Norm of the total linear momentum, (u nm)/ps.
    pub total_momentum: f64,
}

impl SimulationData {
    /// Total energy, kJ/mol.
    pub fn total_energy(&self) -> f64 {
        self.kinetic + self.potential
    }
}

/// Advances a particle system one step in time.
pub trait Displacer {
    fn displace(&mut self, system: &mut ParticleSystem) -> Result<SimulationData, String>;

    /// Finishes the run, e.g. flushing accumulated external-potential
    /// output.
    fn complete(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Kinetic energy of the given particles, kJ/mol.
pub(crate) fn kinetic_energy(particles: &[Particle]) -> f64 {
    particles
        .iter()
        .map(|p| 0.5 * p.mass() * p.velocity().norm_squared())
        .sum()
}

/// Instantaneous temperature from the kinetic energy of the non-frozen
/// particles.
pub(crate) fn temperature(particles: &[Particle], ekin: f64) -> f64 {
    let n_free = particles.iter().filter(|p| !p.is_frozen()).count();
    if n_free == 0 {
        return 0.0;
    }
    2.0 * ekin / (3.0 * n_free as f64 * units::KB)
}

/// Fails when any particle carries a non-finite force component.
pub(crate) fn check_finite_forces(particles: &[Particle]) -> Result<(), String> {
    for p in particles {
        if !p.force().is_finite() {
            return Err(format!(
                "{}: non-finite force on this particle; the step is fatal.",
                p.id()
            ));
        }
    }
    Ok(())
}
