//! The particle system: exclusive owner of particles, groups and the box.

use super::cell::SimBox;
use super::group::ParticleGroup;
use super::spec::ParticleSpec;
use super::Particle;
use crate::vector::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// Owns particles and groups, and the simulation box.
///
/// Particles are addressed by their sequential index; the index of a
/// particle never changes for the lifetime of the system. Particles that
/// belong to a group are "bonded"; the remaining ones are "free".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    groups: Vec<ParticleGroup>,
    simbox: SimBox,
}

impl ParticleSystem {
    /// Creates an empty system in the given box.
    pub fn new(simbox: SimBox) -> Self {
        ParticleSystem {
            particles: Vec::new(),
            groups: Vec::new(),
            simbox,
        }
    }

    /// Adds a particle, assigning it the next sequential index.
    ///
    /// Returns the index of the new particle.
    pub fn add_particle(&mut self, id: &str, name: &str, spec: Arc<ParticleSpec>) -> usize {
        let index = self.particles.len();
        self.particles.push(Particle::new(id, index, name, spec));
        index
    }

    /// Adds a group of previously added particles.
    ///
    /// # Panics
    ///
    /// Panics when a member index is out of range or already belongs to
    /// another group.
    pub fn add_group(&mut self, group: ParticleGroup) {
        let in_groups: HashSet<usize> = self
            .groups
            .iter()
            .flat_map(|g| g.members().iter().copied())
            .collect();
        for &m in group.members() {
            if m >= self.particles.len() {
                panic!("Group member index {} out of range.", m);
            }
            if in_groups.contains(&m) {
                panic!("Particle {} already belongs to a group.", m);
            }
        }
        self.groups.push(group);
    }

    /// Number of particles.
    pub fn number_of_particles(&self) -> usize {
        self.particles.len()
    }

    /// All particles, read-only.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// All particles, mutable.
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// All groups.
    pub fn groups(&self) -> &[ParticleGroup] {
        &self.groups
    }

    /// Groups together with mutable particle access, for callers that must
    /// update correlated particles per group in one consistent snapshot.
    pub fn groups_and_particles_mut(&mut self) -> (&[ParticleGroup], &mut [Particle]) {
        (&self.groups, &mut self.particles)
    }

    /// Indices of particles that belong to no group.
    pub fn free_indices(&self) -> Vec<usize> {
        let in_groups: HashSet<usize> = self
            .groups
            .iter()
            .flat_map(|g| g.members().iter().copied())
            .collect();
        (0..self.particles.len())
            .filter(|i| !in_groups.contains(i))
            .collect()
    }

    /// The simulation box.
    pub fn simbox(&self) -> &SimBox {
        &self.simbox
    }

    /// Finds a particle by its stable identifier.
    pub fn find(&self, id: &str) -> Option<&Particle> {
        self.particles.iter().find(|p| p.id() == id)
    }

    /// Total charge of all non-frozen particles, in e.
    pub fn total_charge_unfrozen(&self) -> f64 {
        self.particles
            .iter()
            .filter(|p| !p.is_frozen())
            .map(|p| p.charge())
            .sum()
    }

    /// Total linear momentum of all particles.
    pub fn linear_momentum(&self) -> Vec3 {
        self.particles
            .iter()
            .fold(Vec3::zero(), |acc, p| acc + p.momentum())
    }

    /// Translates all positions so that the center of mass sits at the
    /// origin. The surface triangulation driver does this before
    /// generating dots.
    pub fn set_origin_to_center_of_mass(&mut self) {
        let mut total_mass = 0.0;
        let mut com = Vec3::zero();
        for p in &self.particles {
            total_mass += p.mass();
            com += p.mass() * p.position();
        }
        if total_mass <= 0.0 {
            return;
        }
        com = com / total_mass;
        for p in &mut self.particles {
            let r = p.position() - com;
            p.set_position(r);
        }
    }

    /// Resets all forces to zero, keeping the previous values.
    pub fn reset_forces(&mut self) {
        for p in &mut self.particles {
            p.reset_force();
        }
    }
}
