//! Charged flat surfaces with uniform surface charge density.

use super::{ExternalPotential, FlatSurface};
use crate::boundary::BoundaryCondition;
use crate::particle::Particle;
use crate::units;
use crate::vector::Vec3;
use std::sync::Arc;

/// Uniformly charged flat surface with a Stern-layer exclusion zone.
///
/// Energy is −σ·R·q/(2·ε0·εr) with R the perpendicular distance to the
/// surface; the force −σ·q/(2·ε0·εr)·n̂ points along the surface normal.
/// A particle closer than the Stern width plus its own radius gets
/// (LARGE, 0).
pub struct UniformSurfaceChargeDensity {
    sigma: f64,
    surface: FlatSurface,
    eps_r: f64,
    bc: Arc<dyn BoundaryCondition>,
    delta: f64,
    mesoscopic: bool,
}

impl UniformSurfaceChargeDensity {
    /// # Arguments
    /// * `sigma` - Surface charge density, e/nm².
    /// * `delta` - Stern layer width, nm.
    ///
    /// # Panics
    ///
    /// Panics when the relative permittivity is not positive.
    pub fn new(
        sigma: f64,
        surface: FlatSurface,
        eps_r: f64,
        bc: Arc<dyn BoundaryCondition>,
        delta: f64,
        mesoscopic: bool,
    ) -> Self {
        if eps_r <= 0.0 {
            panic!("Relative permittivity must be a positive number.");
        }
        log::info!(
            "{}: surface charge density; {}: Stern layer width; {}.",
            sigma,
            delta,
            surface
        );
        UniformSurfaceChargeDensity {
            sigma,
            surface,
            eps_r,
            bc,
            delta,
            mesoscopic,
        }
    }

    /// Evaluation for an explicit position, radius and charge.
    pub fn force_and_energy(&self, r: &Vec3, radius: f64, q: f64) -> (f64, Vec3) {
        let ri = match self.bc.place_inside(r) {
            Ok(ri) => ri,
            Err(_) => *r,
        };
        let (distance, _) = self.surface.distance_to(&ri);
        if distance <= self.delta + radius {
            return (units::LARGE, Vec3::zero());
        }
        let e0 = if self.mesoscopic { 1.0 } else { units::E0 };
        let energy = -self.sigma * distance * q / (2.0 * e0 * self.eps_r);
        let du_dr = -self.sigma / (2.0 * e0 * self.eps_r);
        let f = -du_dr * q * self.surface.unit_vector_perpendicular();
        (energy, f)
    }
}

impl ExternalPotential for UniformSurfaceChargeDensity {
    fn energy_force(&self, particle: &Particle) -> (f64, Vec3) {
        self.force_and_energy(
            &particle.position(),
            particle.spec().radius(),
            particle.charge(),
        )
    }
}

/// Uniformly charged flat surface without the Stern-layer check. The
/// building block of the voltage potentials.
pub struct ConstantSurfaceChargeDensity {
    sigma: f64,
    surface: FlatSurface,
    eps_r: f64,
    bc: Arc<dyn BoundaryCondition>,
}

impl ConstantSurfaceChargeDensity {
    pub fn new(sigma: f64, surface: FlatSurface, eps_r: f64, bc: Arc<dyn BoundaryCondition>) -> Self {
        if eps_r <= 0.0 {
            panic!("Relative permittivity must be a positive number.");
        }
        ConstantSurfaceChargeDensity {
            sigma,
            surface,
            eps_r,
            bc,
        }
    }

    /// Evaluation for an explicit position and charge.
    pub fn force_and_energy(
        sigma: f64,
        surface: &FlatSurface,
        eps_r: f64,
        r: &Vec3,
        q: f64,
    ) -> (f64, Vec3) {
        let (distance, _) = surface.distance_to(r);
        let energy = -sigma * distance * q / (2.0 * units::E0 * eps_r);
        let du_dr = -sigma / (2.0 * units::E0 * eps_r);
        let f = -du_dr * q * surface.unit_vector_perpendicular();
        (energy, f)
    }
}

impl ExternalPotential for ConstantSurfaceChargeDensity {
    fn energy_force(&self, particle: &Particle) -> (f64, Vec3) {
        let r = match self.bc.place_inside(&particle.position()) {
            Ok(r) => r,
            Err(_) => particle.position(),
        };
        ConstantSurfaceChargeDensity::force_and_energy(
            self.sigma,
            &self.surface,
            self.eps_r,
            &r,
            particle.charge(),
        )
    }
}
