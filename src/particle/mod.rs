//! # Particle Data Model
//!
//! This module owns the particle-level data model of the simulation engine:
//! per-species specifications, individual particles, bonded particle
//! groups, the orthogonal simulation box, and the particle system that
//! owns all of them.
//!
//! ## Ownership
//!
//! The `ParticleSystem` exclusively owns its particles and groups. Species
//! specifications are shared immutable handles (`Arc<ParticleSpec>`):
//! registered once in a catalog and never mutated afterwards. Groups refer
//! to particles by index, which uniquely addresses a particle within its
//! owning system for the lifetime of that system.

pub mod cell;
pub mod group;
pub mod spec;
pub mod system;
pub mod tests;

use crate::vector::Vec3;
use serde::{Deserialize, Serialize};
use spec::ParticleSpec;
use std::sync::Arc;

/// Recognizable unit composing the physical system at any time. Has a
/// location, feels forces, and may be moving. Charge and mass come from the
/// immutable specification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    id: String,
    index: usize,
    name: String,
    spec: Arc<ParticleSpec>,
    position: Vec3,
    previous_position: Vec3,
    velocity: Vec3,
    force: Vec3,
    previous_force: Vec3,
    frozen: bool,
}

impl Particle {
    /// Creates a new particle.
    ///
    /// # Arguments
    /// * `id` - Stable identifier, unique within the owning system.
    /// * `index` - Sequential index in `0..N`, used as array key.
    /// * `name` - Particle name, does not need to be unique.
    /// * `spec` - Species specification handle.
    ///
    /// # Panics
    ///
    /// Panics when the name is empty; a particle without a name cannot be
    /// round-tripped through the text format.
    pub fn new(id: &str, index: usize, name: &str, spec: Arc<ParticleSpec>) -> Self {
        if name.is_empty() {
            panic!("A particle name must be provided.");
        }
        Particle {
            id: id.to_string(),
            index,
            name: name.to_string(),
            spec,
            position: Vec3::zero(),
            previous_position: Vec3::zero(),
            velocity: Vec3::zero(),
            force: Vec3::zero(),
            previous_force: Vec3::zero(),
            frozen: false,
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Sequential index, the array key within the owning system.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Particle name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Species specification.
    pub fn spec(&self) -> &Arc<ParticleSpec> {
        &self.spec
    }

    /// Total charge, in e.
    pub fn charge(&self) -> f64 {
        self.spec.charge()
    }

    /// Total mass, in u. Always positive.
    pub fn mass(&self) -> f64 {
        self.spec.mass()
    }

    /// Current position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Sets the position. The old position is kept as the previous
    /// position, which the virtual-plane accumulator consults.
    pub fn set_position(&mut self, r: Vec3) {
        self.previous_position = self.position;
        self.position = r;
    }

    /// Position before the most recent `set_position`.
    pub fn previous_position(&self) -> Vec3 {
        self.previous_position
    }

    /// Current velocity.
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Sets the velocity.
    pub fn set_velocity(&mut self, v: Vec3) {
        self.velocity = v;
    }

    /// Linear momentum, mass times velocity.
    pub fn momentum(&self) -> Vec3 {
        self.mass() * self.velocity
    }

    /// Current force acting on this particle.
    pub fn force(&self) -> Vec3 {
        self.force
    }

    /// Sets the force.
    pub fn set_force(&mut self, f: Vec3) {
        self.force = f;
    }

    /// Adds to the current force.
    pub fn add_force(&mut self, f: Vec3) {
        self.force += f;
    }

    /// Resets the force to zero, remembering the old value as the previous
    /// force.
    pub fn reset_force(&mut self) {
        self.previous_force = self.force;
        self.force = Vec3::zero();
    }

    /// Force before the most recent reset.
    pub fn previous_force(&self) -> Vec3 {
        self.previous_force
    }

    /// Whether this particle is frozen. Integrators must not mutate the
    /// position or velocity of a frozen particle.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Freezes or unfreezes this particle.
    pub fn set_frozen(&mut self, frozen: bool) {
        self.frozen = frozen;
    }
}
