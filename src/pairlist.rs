//! Non-bonded pair lists.
//!
//! A pair list is an ordered sequence of particle index pairs (i, j) with
//! i < j, rebuilt periodically per a configured stride; stale lists are
//! permissible between rebuilds. The `modified` flag tells the pair-list
//! driver to discard its cached partition into sub-lists.

use crate::boundary::BoundaryCondition;
use crate::particle::system::ParticleSystem;
use std::collections::HashSet;
use std::sync::Arc;

/// Ordered non-bonded particle pairs.
#[derive(Debug, Clone, Default)]
pub struct PairList {
    pairs: Vec<(usize, usize)>,
    modified: bool,
}

impl PairList {
    pub fn new(pairs: Vec<(usize, usize)>) -> Self {
        PairList {
            pairs,
            modified: true,
        }
    }

    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Whether the list changed since the flag was last cleared.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Clears the modified flag; the driver calls this after refreshing
    /// its partition.
    pub fn clear_modified(&mut self) {
        self.modified = false;
    }
}

/// Builds pair lists from current positions.
///
/// All pairs of particles within the cutoff are listed, except pairs that
/// belong to the same group; those interact through the bonded potentials
/// instead.
pub struct PairListGenerator {
    cutoff: f64,
    bc: Arc<dyn BoundaryCondition>,
}

impl PairListGenerator {
    /// # Panics
    ///
    /// Panics when the cutoff is not positive.
    pub fn new(cutoff: f64, bc: Arc<dyn BoundaryCondition>) -> Self {
        if cutoff <= 0.0 {
            panic!("A cutoff distance must be > 0.0.");
        }
        PairListGenerator { cutoff, bc }
    }

    /// Generates a fresh pair list; the returned list carries the
    /// `modified` flag.
    pub fn generate(&self, system: &ParticleSystem) -> PairList {
        let cutoff2 = self.cutoff * self.cutoff;
        let particles = system.particles();

        // Group membership, to exclude bonded pairs.
        let mut group_of = vec![usize::MAX; particles.len()];
        for (g, group) in system.groups().iter().enumerate() {
            for &m in group.members() {
                group_of[m] = g;
            }
        }

        let mut pairs = Vec::new();
        for i in 0..particles.len() {
            for j in (i + 1)..particles.len() {
                if group_of[i] != usize::MAX && group_of[i] == group_of[j] {
                    continue;
                }
                let rij = self
                    .bc
                    .displacement(&particles[i].position(), &particles[j].position());
                if rij.norm_squared() < cutoff2 {
                    pairs.push((i, j));
                }
            }
        }
        log::debug!("{}: number of particle pairs.", pairs.len());
        PairList::new(pairs)
    }
}

/// True when every pair satisfies i < j and no pair repeats.
pub fn validate_ordering(pair_list: &PairList) -> bool {
    let mut seen = HashSet::new();
    pair_list
        .pairs()
        .iter()
        .all(|&(i, j)| i < j && seen.insert((i, j)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::pbc::Pbc;
    use crate::boundary::NoBc;
    use crate::particle::cell::SimBox;
    use crate::particle::group::ParticleGroup;
    use crate::particle::spec::ParticleSpec;
    use crate::particle::system::ParticleSystem;
    use crate::vector::Vec3;
    use std::sync::Arc;

    fn three_particles(positions: [Vec3; 3]) -> ParticleSystem {
        let spec = Arc::new(ParticleSpec::new("A", 1.0, 0.0, 0.1, false));
        let mut system = ParticleSystem::new(SimBox::cubic(10.0));
        for (k, r) in positions.into_iter().enumerate() {
            let i = system.add_particle(&format!("p{}", k), "A", spec.clone());
            system.particles_mut()[i].set_position(r);
        }
        system
    }

    #[test]
    fn cutoff_filters_pairs() {
        let system = three_particles([
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(1.5, 1.0, 1.0),
            Vec3::new(5.0, 5.0, 5.0),
        ]);
        let generator = PairListGenerator::new(1.0, Arc::new(NoBc::new()));
        let list = generator.generate(&system);

        assert_eq!(list.pairs(), &[(0, 1)]);
        assert!(list.is_modified());
        assert!(validate_ordering(&list));
    }

    #[test]
    fn minimum_image_finds_wrapped_neighbors() {
        let system = three_particles([
            Vec3::new(0.2, 1.0, 1.0),
            Vec3::new(9.8, 1.0, 1.0),
            Vec3::new(5.0, 5.0, 5.0),
        ]);
        let generator = PairListGenerator::new(1.0, Arc::new(Pbc::new(SimBox::cubic(10.0))));
        let list = generator.generate(&system);
        assert_eq!(list.pairs(), &[(0, 1)]);
    }

    #[test]
    fn bonded_pairs_are_excluded() {
        let mut system = three_particles([
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(1.4, 1.0, 1.0),
            Vec3::new(1.8, 1.0, 1.0),
        ]);
        system.add_group(ParticleGroup::chain(vec![0, 1]));
        let generator = PairListGenerator::new(2.0, Arc::new(NoBc::new()));
        let list = generator.generate(&system);

        // (0, 1) is bonded; the cross pairs with the free particle stay.
        assert_eq!(list.pairs(), &[(0, 2), (1, 2)]);
    }

    #[test]
    fn modified_flag_clears_once() {
        let mut list = PairList::new(vec![(0, 1)]);
        assert!(list.is_modified());
        list.clear_modified();
        assert!(!list.is_modified());
    }
}
