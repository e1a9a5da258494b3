//! Tracked pair distance.

use super::Analyzer;
use crate::boundary::BoundaryCondition;
use crate::particle::system::ParticleSystem;
use std::sync::Arc;

/// Records the distance between two identified particles per frame.
pub struct Distance {
    id_i: String,
    id_j: String,
    bc: Arc<dyn BoundaryCondition>,
    distances: Vec<(usize, f64)>,
}

impl Distance {
    pub fn new(id_i: &str, id_j: &str, bc: Arc<dyn BoundaryCondition>) -> Self {
        Distance {
            id_i: id_i.to_string(),
            id_j: id_j.to_string(),
            bc,
            distances: Vec::new(),
        }
    }

    /// Rows of (frame counter, distance).
    pub fn results(&self) -> &[(usize, f64)] {
        &self.distances
    }
}

impl Analyzer for Distance {
    fn perform(&mut self, system: &ParticleSystem) {
        let pi = system.find(&self.id_i);
        let pj = system.find(&self.id_j);
        let (pi, pj) = match (pi, pj) {
            (Some(pi), Some(pj)) => (pi, pj),
            _ => panic!("({}, {}): no such particle(s).", self.id_i, self.id_j),
        };
        let rij = self.bc.displacement(&pi.position(), &pj.position());
        self.distances.push((self.distances.len() + 1, rij.norm()));
    }
}
