//! Virtual planes: time-averaged slab surface-charge densities for boxes
//! periodic in x and y only.
//!
//! Parallel planes perpendicular to z accumulate the charge of the
//! particles currently in their slab. The time-averaged surface charge
//! density of each plane represents the external charge distribution
//! beyond the simulation box during sampling. All state is owned by the
//! [`VirtualPlanes`] instance: the current per-plane charge, the pending
//! difference of the last commit, the cumulative charge, and the commit
//! counter.

use super::ExternalPotential;
use crate::boundary::BoundaryCondition;
use crate::particle::cell::SimBox;
use crate::particle::system::ParticleSystem;
use crate::particle::Particle;
use crate::units;
use crate::util;
use crate::vector::Vec3;
use std::f64::consts::PI;
use std::io::Write;
use std::sync::Arc;

/// One plane at a fixed z location with its current surface charge
/// density.
#[derive(Debug, Clone)]
pub struct VirtualPlane {
    location: f64,
    sigma: f64,
    eps_r: f64,
}

impl VirtualPlane {
    fn new(location: f64, eps_r: f64) -> Self {
        VirtualPlane {
            location,
            sigma: 0.0,
            eps_r,
        }
    }

    /// Plane location along z, in nm.
    pub fn location(&self) -> f64 {
        self.location
    }

    /// Current (time-averaged) surface charge density, e/nm².
    pub fn surface_charge_density(&self) -> f64 {
        self.sigma
    }

    /// Interaction energy of a charge q at position `r` (already placed
    /// inside the box) with this plane. Energy only; no force as of yet.
    pub fn interaction_energy(&self, r: &Vec3, q: f64, lx: f64) -> f64 {
        let pi_eps_r_e0 = PI * self.eps_r * units::E0;
        let constant_at_0 = lx * (3.0 * PI / 8.0).tan().ln() / pi_eps_r_e0;
        let two_over = 2.0 / pi_eps_r_e0;
        let quarter_lx2 = lx * lx / 4.0;

        let distance = (self.location - r.z).abs();
        let r2 = distance * distance;
        let integrand = |x: f64| {
            let cos_x = x.cos();
            let cos_2_x = cos_x * cos_x;
            ((quarter_lx2 + r2 * cos_2_x) / cos_2_x).sqrt()
        };
        let integral = util::integrate(integrand, 0.0, PI / 4.0, 1.0e-6);

        -q * self.sigma * (two_over * integral - constant_at_0)
    }
}

/// The plane collection with its commit/rollback state.
pub struct VirtualPlanes {
    simbox: SimBox,
    bc: Arc<dyn BoundaryCondition>,
    spacing: f64,
    eps_r: f64,
    planes: Vec<VirtualPlane>,
    /// Current charge of each plane.
    state: Vec<f64>,
    /// Change applied by the most recent commit.
    difference: Vec<f64>,
    /// Cumulative charge of each plane over all commits.
    accumulated: Vec<f64>,
    /// Number of commits.
    counter: u64,
}

impl VirtualPlanes {
    /// Creates planes at z = k·spacing for k in 0..K with
    /// K = ⌊Lz/spacing⌋. The actual spacing is refitted to Lz/K and may
    /// differ slightly from the request.
    ///
    /// # Panics
    ///
    /// Panics on zero spacing or nonpositive permittivity.
    pub fn new(simbox: SimBox, bc: Arc<dyn BoundaryCondition>, spacing: f64, eps_r: f64) -> Self {
        if spacing <= 0.0 {
            panic!("There must be some space between virtual planes.");
        }
        if eps_r <= 0.0 {
            panic!("Relative permittivity must be a positive number.");
        }

        let number_of_planes = (simbox.length_z() / spacing) as usize;
        let spacing = simbox.length_z() / number_of_planes as f64;
        let planes = (0..number_of_planes)
            .map(|i| VirtualPlane::new(i as f64 * spacing, eps_r))
            .collect();

        log::info!(
            "{}: spacing between virtual planes; {}: number of virtual planes.",
            spacing,
            number_of_planes
        );

        VirtualPlanes {
            simbox,
            bc,
            spacing,
            eps_r,
            planes,
            state: vec![0.0; number_of_planes],
            difference: vec![0.0; number_of_planes],
            accumulated: vec![0.0; number_of_planes],
            counter: 0,
        }
    }

    /// All planes with their current surface charge densities.
    pub fn planes(&self) -> &[VirtualPlane] {
        &self.planes
    }

    /// Current per-plane charges. After any commit these sum to the total
    /// charge of the non-frozen particles.
    pub fn state(&self) -> &[f64] {
        &self.state
    }

    /// Cumulative per-plane charges.
    pub fn accumulated(&self) -> &[f64] {
        &self.accumulated
    }

    /// Joint surface charge density of all planes.
    pub fn total_surface_charge_density(&self) -> f64 {
        self.planes.iter().map(|p| p.sigma).sum()
    }

    fn area(&self) -> f64 {
        self.simbox.length_x() * self.simbox.length_y()
    }

    fn plane_index(&self, z: f64) -> usize {
        ((z / self.spacing) as usize).min(self.planes.len() - 1)
    }

    /// Accumulates per-plane charge changes for the given particles into
    /// `difference`. Frozen and uncharged particles are skipped. The
    /// previous position is consulted only after the first commit.
    fn determine_state_changes(&mut self, particles: &[&Particle]) {
        let mut difference = vec![0.0; self.planes.len()];
        for p in particles {
            let q = p.charge();
            if p.is_frozen() || q.abs() == 0.0 {
                continue;
            }
            if self.counter > 0 {
                // Remove charge from the plane of the previous position.
                if let Ok(r_p) = self.bc.place_inside(&p.previous_position()) {
                    let index_p = self.plane_index(r_p.z);
                    difference[index_p] -= q;
                }
            }
            // Add charge to the plane of the current position.
            if let Ok(r) = self.bc.place_inside(&p.position()) {
                let index = self.plane_index(r.z);
                difference[index] += q;
            }
        }
        self.difference = difference;
    }

    fn update_state_and_accumulated(&mut self) {
        for k in 0..self.state.len() {
            self.state[k] += self.difference[k];
            self.accumulated[k] += self.state[k];
        }
    }

    /// Removes the current state from the accumulation, restores the
    /// previous state, and adds the restored state back.
    fn revert_state_and_accumulated(&mut self) {
        for k in 0..self.state.len() {
            self.accumulated[k] -= self.state[k];
            self.state[k] -= self.difference[k];
            self.accumulated[k] += self.state[k];
        }
    }

    /// Resets each plane's surface charge density to the mean state over
    /// all commits divided by the box xy-area.
    fn reset_surface_charge_densities(&mut self) {
        let area = self.area();
        let counter = if self.counter == 0 { 1 } else { self.counter };
        for (k, plane) in self.planes.iter_mut().enumerate() {
            let average = self.accumulated[k] / counter as f64;
            plane.sigma = average / area;
        }
    }

    fn commit(&mut self) {
        self.update_state_and_accumulated();
        self.counter += 1;
        self.reset_surface_charge_densities();
    }

    /// Writes per-plane location, surface charge density and cumulative
    /// charge to `vplanes.dat` in the working directory.
    pub fn write_planes(&self) -> Result<(), String> {
        let file_name = "vplanes.dat";
        let mut stream = std::fs::File::create(file_name)
            .map_err(|e| format!("{}: cannot create output file: {}", file_name, e))?;
        for (k, plane) in self.planes.iter().enumerate() {
            writeln!(
                stream,
                "{:15.7e} {:15.7e} {:15.7e}",
                plane.location, plane.sigma, self.accumulated[k]
            )
            .map_err(|e| format!("{}: write failed: {}", file_name, e))?;
        }
        log::info!(
            "{}: virtual planes data (location, surface charge density, \
             cumulative charge) was written to this output file.",
            file_name
        );
        Ok(())
    }
}

impl ExternalPotential for VirtualPlanes {
    fn energy_force(&self, particle: &Particle) -> (f64, Vec3) {
        let lx = self.simbox.length_x();
        let r = match self.bc.place_inside(&particle.position()) {
            Ok(r) => r,
            Err(_) => particle.position(),
        };
        let q = particle.charge();
        let energy = self
            .planes
            .iter()
            .map(|plane| plane.interaction_energy(&r, q, lx))
            .sum();
        // Energy only, no forces as of yet.
        (energy, Vec3::zero())
    }

    fn initialize(&mut self, system: &ParticleSystem) {
        let particles: Vec<&Particle> = system.particles().iter().collect();
        self.determine_state_changes(&particles);
        self.commit();
        log::info!(
            "{}: joint total surface charge density of all virtual planes.",
            self.total_surface_charge_density()
        );
    }

    fn update_system(&mut self, system: &ParticleSystem) {
        let particles: Vec<&Particle> = system.particles().iter().collect();
        self.determine_state_changes(&particles);
        self.commit();
    }

    fn update_particle(&mut self, particle: &Particle) {
        self.determine_state_changes(&[particle]);
        self.commit();
    }

    /// Restores the state preceding the last commit. The commit counter
    /// is not decremented. Two consecutive fallbacks are not supported.
    fn fallback(&mut self) {
        self.revert_state_and_accumulated();
        self.reset_surface_charge_densities();
    }

    fn complete(&self) -> Result<(), String> {
        self.write_planes()
    }
}
