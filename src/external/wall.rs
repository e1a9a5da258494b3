//! Impenetrable wall: charged surface plus Lennard-Jones repulsion.

use super::surface_charge::UniformSurfaceChargeDensity;
use super::{ExternalPotential, FlatSurface};
use crate::boundary::BoundaryCondition;
use crate::particle::Particle;
use crate::potentials::lj::LennardJones;
use crate::vector::Vec3;
use std::sync::Arc;

/// Uniform surface charge plus a (C12, C6) Lennard-Jones interaction
/// with the surface.
pub struct Wall {
    c12: f64,
    c6: f64,
    bc: Arc<dyn BoundaryCondition>,
    surface: FlatSurface,
    charged_surface: UniformSurfaceChargeDensity,
}

impl Wall {
    pub fn new(
        c12: f64,
        c6: f64,
        bc: Arc<dyn BoundaryCondition>,
        surface: FlatSurface,
        sigma: f64,
    ) -> Self {
        let charged_surface =
            UniformSurfaceChargeDensity::new(sigma, surface, 1.0, bc.clone(), 0.0, false);
        Wall {
            c12,
            c6,
            bc,
            surface,
            charged_surface,
        }
    }
}

impl ExternalPotential for Wall {
    fn energy_force(&self, particle: &Particle) -> (f64, Vec3) {
        // Interaction with the charged surface.
        let (e_charge, f_charge) = self.charged_surface.energy_force(particle);

        // Lennard-Jones interaction with the surface.
        let r = match self.bc.place_inside(&particle.position()) {
            Ok(r) => r,
            Err(_) => particle.position(),
        };
        let (distance, rij) = self.surface.distance_to(&r);
        let (e_lj, f_lj) =
            LennardJones::force_and_energy(&rij, distance, distance * distance, self.c12, self.c6);

        (e_charge + e_lj, f_charge + f_lj)
    }
}
