//! Applied electric potential differences.

use super::{ExternalPotential, FlatSurface, Plane};
use crate::boundary::{BoundaryCondition, Direction};
use crate::external::surface_charge::ConstantSurfaceChargeDensity;
use crate::particle::Particle;
use crate::units;
use crate::vector::Vec3;
use std::sync::Arc;

/// The coordinate plane holding the charged surface that realizes a field
/// along the given direction.
fn surface_location(direction: Direction) -> Plane {
    match direction {
        Direction::X => Plane::YZ,
        Direction::Y => Plane::ZX,
        Direction::Z => Plane::XY,
    }
}

/// Constant electric field E = −ΔV/d along a chosen axis.
///
/// Energy is −q·(r·E)/εr and the force q·E/εr. The `mesoscopic` flag
/// drops the V to kJ/(mol e) conversion.
pub struct Voltage {
    e0: Vec3,
    bc: Arc<dyn BoundaryCondition>,
    eps_r: f64,
}

impl Voltage {
    /// Voltage `delta_v` over distance `distance` along `direction`.
    ///
    /// # Panics
    ///
    /// Panics when the relative permittivity is not positive.
    pub fn new(
        delta_v: f64,
        distance: f64,
        direction: Direction,
        bc: Arc<dyn BoundaryCondition>,
        eps_r: f64,
        mesoscopic: bool,
    ) -> Self {
        let conversion = if mesoscopic {
            1.0
        } else {
            units::V_TO_KJ_MOL_E
        };
        let mut e0 = Vec3::zero();
        e0[direction.value()] = -conversion * delta_v / distance;
        Voltage::with_field(e0, bc, eps_r)
    }

    /// Directly prescribed static homogeneous field.
    pub fn with_field(e0: Vec3, bc: Arc<dyn BoundaryCondition>, eps_r: f64) -> Self {
        if eps_r <= 0.0 {
            panic!("Relative permittivity must be a positive number.");
        }
        log::info!("({}): external static homogeneous electric field.", e0);
        Voltage { e0, bc, eps_r }
    }
}

impl ExternalPotential for Voltage {
    fn energy_force(&self, particle: &Particle) -> (f64, Vec3) {
        let r = match self.bc.place_inside(&particle.position()) {
            Ok(r) => r,
            Err(_) => particle.position(),
        };
        let q = particle.charge();
        let energy = -q * r.dot(&self.e0) / self.eps_r;
        let f = (q / self.eps_r) * self.e0;
        (energy, f)
    }
}

/// Electric potential difference realized as a constant surface charge
/// density on a box face, the reference point for the potential being
/// that face rather than infinity.
pub struct ElectricPotentialDifference {
    sigma: f64,
    surface: FlatSurface,
    eps_r: f64,
    bc: Arc<dyn BoundaryCondition>,
}

impl ElectricPotentialDifference {
    /// Potential difference `delta_v` (in V) over `distance` along
    /// `direction`.
    pub fn new(
        delta_v: f64,
        distance: f64,
        eps_r: f64,
        bc: Arc<dyn BoundaryCondition>,
        direction: Direction,
    ) -> Self {
        if eps_r <= 0.0 {
            panic!("Relative permittivity must be a positive number.");
        }
        let surface = FlatSurface::new(surface_location(direction), 0.0);
        let epd = units::V_TO_KJ_MOL_E * delta_v;
        let sigma = -epd * 2.0 * units::E0 * eps_r / distance;
        ElectricPotentialDifference {
            sigma,
            surface,
            eps_r,
            bc,
        }
    }
}

impl ExternalPotential for ElectricPotentialDifference {
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
