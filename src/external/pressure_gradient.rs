//! Constant external force on every particle.

use super::ExternalPotential;
use crate::particle::Particle;
use crate::vector::Vec3;

/// Pressure gradient modeled as a constant force f on each particle,
/// with energy −f·r.
pub struct PressureGradient {
    f: Vec3,
}

impl PressureGradient {
    pub fn new(f: Vec3) -> Self {
        log::info!("({}): external force due to pressure gradient.", f);
        PressureGradient { f }
    }
}

impl ExternalPotential for PressureGradient {
    fn energy_force(&self, particle: &Particle) -> (f64, Vec3) {
        let r = particle.position();
        (-self.f.dot(&r), self.f)
    }
}
