//! # Force and Energy Accumulation
//!
//! The pair-list driver: computes the total potential energy and
//! accumulates per-particle forces from the non-bonded pair list, the
//! bonded groups, and the external potentials. Newton's third law is
//! applied here (`f_i += F`, `f_j -= F` per pair), not in the potentials.
//!
//! ## Concurrency
//!
//! When the particle count exceeds [`MIN_PARTICLES_PARALLEL`], the pair
//! list is partitioned into sub-lists of roughly equal size that are
//! evaluated as parallel rayon tasks. Each task accumulates into its own
//! `(epot, forces[N])` scratch, so no two workers ever touch the same
//! particle; the driver merges the results serially in sub-list order.
//! The partition is cached and reused until the pair list flips its
//! `modified` flag. A step is an indivisible unit: if any task fails, no
//! forces are applied at all.

use crate::boundary::BoundaryCondition;
use crate::external::ExternalPotential;
use crate::pairlist::PairList;
use crate::particle::system::ParticleSystem;
use crate::particle::Particle;
use crate::potentials::PairPotential;
use crate::units::MIN_PARTICLES_PARALLEL;
use crate::vector::Vec3;
use rayon::prelude::*;
use std::ops::Range;
use std::sync::Arc;

/// Computes forces on particles.
pub struct Forces {
    bc: Arc<dyn BoundaryCondition>,
    partition: Vec<Range<usize>>,
}

impl Forces {
    pub fn new(bc: Arc<dyn BoundaryCondition>) -> Self {
        Forces {
            bc,
            partition: Vec::new(),
        }
    }

    /// Non-bonded energy; forces are added to the per-particle force
    /// vectors. Fails without touching any particle when a potential
    /// evaluation fails.
    pub fn non_bonded(
        &mut self,
        system: &mut ParticleSystem,
        pair_list: &mut PairList,
        potential: &dyn PairPotential,
    ) -> Result<f64, String> {
        let n = system.number_of_particles();
        let (epot, forces) = if n > MIN_PARTICLES_PARALLEL {
            self.refresh_partition(pair_list);
            let particles = system.particles();
            let pairs = pair_list.pairs();
            let results: Vec<Result<(f64, Vec<Vec3>), String>> = self
                .partition
                .par_iter()
                .map(|range| accumulate(particles, &pairs[range.clone()], potential))
                .collect();

            // Merge serially in sub-list order.
            let mut epot = 0.0;
            let mut forces = vec![Vec3::zero(); n];
            for result in results {
                let (e, f) = result?;
                epot += e;
                for (total, partial) in forces.iter_mut().zip(&f) {
                    *total += *partial;
                }
            }
            (epot, forces)
        } else {
            accumulate(system.particles(), pair_list.pairs(), potential)?
        };

        for (p, f) in system.particles_mut().iter_mut().zip(&forces) {
            p.add_force(*f);
        }
        Ok(epot)
    }

    /// Bonded energy over all group bonds; forces are added to the
    /// per-particle force vectors.
    pub fn bonded(
        &self,
        system: &mut ParticleSystem,
        potential: &dyn PairPotential,
    ) -> Result<f64, String> {
        let n = system.number_of_particles();
        let mut epot = 0.0;
        let mut forces = vec![Vec3::zero(); n];
        for group in system.groups() {
            for &(i, j) in group.bonds() {
                let particles = system.particles();
                let (e, f) = potential.energy_force(&particles[i], &particles[j])?;
                epot += e;
                forces[i] += f;
                forces[j] -= f;
            }
        }
        for (p, f) in system.particles_mut().iter_mut().zip(&forces) {
            p.add_force(*f);
        }
        Ok(epot)
    }

    /// External-potential energy over all particles; forces are added to
    /// the per-particle force vectors.
    pub fn external(
        &self,
        system: &mut ParticleSystem,
        potentials: &[Box<dyn ExternalPotential>],
    ) -> f64 {
        let mut epot = 0.0;
        for p in system.particles_mut() {
            for potential in potentials {
                let (e, f) = potential.energy_force(p);
                epot += e;
                p.add_force(f);
            }
        }
        epot
    }

    /// The boundary condition shared with the potentials.
    pub fn bc(&self) -> &Arc<dyn BoundaryCondition> {
        &self.bc
    }

    /// Recomputes the cached sub-list partition when the pair list was
    /// rebuilt since the last step.
    fn refresh_partition(&mut self, pair_list: &mut PairList) {
        if !pair_list.is_modified() && !self.partition.is_empty() {
            return;
        }
        let n_pairs = pair_list.len();
        let n_tasks = rayon::current_num_threads().max(1);
        let chunk = n_pairs.div_ceil(n_tasks).max(1);
        self.partition = (0..n_pairs)
            .step_by(chunk)
            .map(|start| start..(start + chunk).min(n_pairs))
            .collect();
        pair_list.clear_modified();
        log::debug!(
            "{}: number of sub-lists for parallel force evaluation.",
            self.partition.len()
        );
    }
}

/// Sequential accumulation over one sub-list into local scratch.
fn accumulate(
    particles: &[Particle],
    pairs: &[(usize, usize)],
    potential: &dyn PairPotential,
) -> Result<(f64, Vec<Vec3>), String> {
    let mut epot = 0.0;
    let mut forces = vec![Vec3::zero(); particles.len()];
    for &(i, j) in pairs {
        let (e, f) = potential.energy_force(&particles[i], &particles[j])?;
        epot += e;
        forces[i] += f;
        forces[j] -= f;
    }
    Ok((epot, forces))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::NoBc;
    use crate::forcefield::ForceField;
    use crate::pairlist::PairListGenerator;
    use crate::particle::cell::SimBox;
    use crate::particle::spec::ParticleSpec;
    use crate::potentials::soft_repulsion::SoftRepulsion;
    use rand::prelude::*;
    use rand::rngs::StdRng;

    fn dense_system(n: usize) -> ParticleSystem {
        let spec = std::sync::Arc::new(ParticleSpec::new("W", 18.0, 0.0, 0.1, false));
        let mut system = ParticleSystem::new(SimBox::cubic(5.0));
        let mut rng = StdRng::seed_from_u64(2024);
        for k in 0..n {
            let i = system.add_particle(&format!("w{}", k), "W", spec.clone());
            let r = crate::vector::Vec3::new(
                rng.random_range(0.0..5.0),
                rng.random_range(0.0..5.0),
                rng.random_range(0.0..5.0),
            );
            system.particles_mut()[i].set_position(r);
        }
        system
    }

    fn soft_repulsion() -> SoftRepulsion {
        let mut ff = ForceField::new();
        ff.add_soft_repulsion("W", "W", 25.0);
        SoftRepulsion::new(std::sync::Arc::new(ff), std::sync::Arc::new(NoBc::new()), 1.0)
    }

    #[test]
    fn parallel_matches_sequential() {
        // Above the threshold the driver fans out; totals must agree
        // with a plain sequential accumulation up to rounding.
        let bc: Arc<dyn BoundaryCondition> = Arc::new(NoBc::new());
        let mut system = dense_system(600);
        let generator = PairListGenerator::new(1.0, bc.clone());
        let mut pair_list = generator.generate(&system);
        let potential = soft_repulsion();

        let (e_seq, f_seq) =
            accumulate(system.particles(), pair_list.pairs(), &potential).unwrap();

        let mut forces = Forces::new(bc);
        let e_par = forces
            .non_bonded(&mut system, &mut pair_list, &potential)
            .unwrap();

        assert!((e_seq - e_par).abs() <= 1e-9 * e_seq.abs().max(1.0));
        for (p, f) in system.particles().iter().zip(&f_seq) {
            assert!(p.force().approx_eq(f, 1e-9));
        }
    }

    #[test]
    fn partition_cache_survives_unmodified_lists() {
        let bc: Arc<dyn BoundaryCondition> = Arc::new(NoBc::new());
        let mut system = dense_system(600);
        let generator = PairListGenerator::new(1.0, bc.clone());
        let mut pair_list = generator.generate(&system);
        let potential = soft_repulsion();

        let mut forces = Forces::new(bc);
        assert!(pair_list.is_modified());
        forces
            .non_bonded(&mut system, &mut pair_list, &potential)
            .unwrap();
        assert!(!pair_list.is_modified());
        let cached = forces.partition.clone();

        system.reset_forces();
        forces
            .non_bonded(&mut system, &mut pair_list, &potential)
            .unwrap();
        assert_eq!(cached, forces.partition);
    }

    #[test]
    fn newton_iii_sums_to_zero_total_force() {
        let bc: Arc<dyn BoundaryCondition> = Arc::new(NoBc::new());
        let mut system = dense_system(100);
        let generator = PairListGenerator::new(1.0, bc.clone());
        let mut pair_list = generator.generate(&system);
        let potential = soft_repulsion();

        let mut forces = Forces::new(bc);
        forces
            .non_bonded(&mut system, &mut pair_list, &potential)
            .unwrap();

        let total = system
            .particles()
            .iter()
            .fold(crate::vector::Vec3::zero(), |acc, p| acc + p.force());
        assert!(total.norm() < 1e-9);
    }
}
