//! # External Potentials
//!
//! Single-particle energies and forces from walls, uniformly charged
//! planes, applied voltages, pressure gradients, and the virtual-plane
//! accumulator. Each external potential provides an evaluation operator
//! plus lifecycle hooks (`initialize`, `update_system`, `update_particle`,
//! `fallback`, `complete`) that default to no-ops; only the virtual
//! planes carry state across steps.

pub mod pressure_gradient;
pub mod surface_charge;
pub mod tests;
pub mod voltage;
pub mod vplanes;
pub mod wall;

use crate::particle::system::ParticleSystem;
use crate::particle::Particle;
use crate::vector::Vec3;

/// A coordinate plane of the simulation box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plane {
    XY,
    YZ,
    ZX,
}

impl Plane {
    /// Short name, used in surface descriptions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Plane::XY => "xy",
            Plane::YZ => "yz",
            Plane::ZX => "zx",
        }
    }
}

/// A flat surface parallel to one of the coordinate planes, at a given
/// distance along the remaining axis.
#[derive(Debug, Clone, Copy)]
pub struct FlatSurface {
    plane: Plane,
    distance_to_plane: f64,
    unit_vector: Vec3,
    coordinate: usize,
}

impl FlatSurface {
    pub fn new(plane: Plane, distance_to_plane: f64) -> Self {
        let (unit_vector, coordinate) = match plane {
            Plane::XY => (Vec3::z_hat(), 2),
            Plane::YZ => (Vec3::x_hat(), 0),
            Plane::ZX => (Vec3::y_hat(), 1),
        };
        FlatSurface {
            plane,
            distance_to_plane,
            unit_vector,
            coordinate,
        }
    }

    /// The xy-plane through the origin.
    pub fn xy() -> Self {
        FlatSurface::new(Plane::XY, 0.0)
    }

    /// Perpendicular distance from `r` to the surface, and the separation
    /// vector from the surface to the particle.
    pub fn distance_to(&self, r: &Vec3) -> (f64, Vec3) {
        let distance = (self.distance_to_plane - r[self.coordinate]).abs();
        let ris = if distance > self.distance_to_plane {
            distance * self.unit_vector
        } else {
            -distance * self.unit_vector
        };
        (distance, ris)
    }

    /// Unit vector perpendicular to the surface, pointing toward the
    /// positive axis.
    pub fn unit_vector_perpendicular(&self) -> Vec3 {
        self.unit_vector
    }

    pub fn plane(&self) -> Plane {
        self.plane
    }
}

impl std::fmt::Display for FlatSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FlatSurface({}, distance = {}, normal = ({}))",
            self.plane.as_str(),
            self.distance_to_plane,
            self.unit_vector
        )
    }
}

/// An external potential: energy and force on a single particle, plus
/// lifecycle hooks for stateful members.
pub trait ExternalPotential: Send + Sync {
    /// Energy in kJ/mol and force in kJ/(mol nm) on the particle.
    fn energy_force(&self, particle: &Particle) -> (f64, Vec3);

    /// Called once before the first step.
    fn initialize(&mut self, system: &ParticleSystem) {
        let _ = system;
    }

    /// Called after every accepted system move.
    fn update_system(&mut self, system: &ParticleSystem) {
        let _ = system;
    }

    /// Called after a single-particle move.
    fn update_particle(&mut self, particle: &Particle) {
        let _ = particle;
    }

    /// Reverts the most recent update (one level only).
    fn fallback(&mut self) {}

    /// Called once after the last step, e.g. to write accumulated output.
    fn complete(&self) -> Result<(), String> {
        Ok(())
    }
}
