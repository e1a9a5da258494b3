//! Bonded particle groups.

use super::Particle;
use crate::vector::Vec3;
use serde::{Deserialize, Serialize};

/// Ordered list of particle indices representing a bonded molecule.
///
/// Bonded potentials run over the group's bond pairs, and reflecting
/// boundary conditions apply the same velocity sign pattern to all members
/// so that no group straddles a reflection asymmetrically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleGroup {
    members: Vec<usize>,
    bonds: Vec<(usize, usize)>,
}

impl ParticleGroup {
    /// Creates a group from member indices with explicit bonds.
    ///
    /// # Panics
    ///
    /// Panics when a bond refers to a particle outside the group.
    pub fn new(members: Vec<usize>, bonds: Vec<(usize, usize)>) -> Self {
        for &(i, j) in &bonds {
            if !members.contains(&i) || !members.contains(&j) {
                panic!("Group bond ({}, {}) refers to a non-member particle.", i, j);
            }
        }
        ParticleGroup { members, bonds }
    }

    /// Creates a group whose members form a linear chain, bonding each
    /// consecutive pair. This is the interpretation of groups read from
    /// the particle system text format, which lists members only.
    pub fn chain(members: Vec<usize>) -> Self {
        let bonds = members.windows(2).map(|w| (w[0], w[1])).collect();
        ParticleGroup { members, bonds }
    }

    /// Member particle indices, in order.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Bonded pairs within the group.
    pub fn bonds(&self) -> &[(usize, usize)] {
        &self.bonds
    }

    /// Mass-weighted geometric center of the group.
    pub fn position(&self, particles: &[Particle]) -> Vec3 {
        let mut total_mass = 0.0;
        let mut center = Vec3::zero();
        for &i in &self.members {
            let p = &particles[i];
            total_mass += p.mass();
            center += p.mass() * p.position();
        }
        center / total_mass
    }
}
