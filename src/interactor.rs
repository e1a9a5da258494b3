//! The interactor: one-stop force and energy evaluation for integrators.
//!
//! Owns the pair list and its generator, the configured pair potentials,
//! and the external potentials. Each call to [`Interactor::interact`]
//! refreshes the pair list per the configured stride, resets all forces,
//! and accumulates non-bonded, bonded and external contributions.

use crate::boundary::BoundaryCondition;
use crate::external::ExternalPotential;
use crate::forces::Forces;
use crate::pairlist::{PairList, PairListGenerator};
use crate::particle::system::ParticleSystem;
use crate::potentials::PairPotential;
use std::sync::Arc;

pub struct Interactor {
    forces: Forces,
    non_bonded: Box<dyn PairPotential>,
    bonded: Option<Box<dyn PairPotential>>,
    externals: Vec<Box<dyn ExternalPotential>>,
    generator: PairListGenerator,
    pair_list: PairList,
    update_stride: u64,
    step: u64,
    externals_initialized: bool,
}

impl Interactor {
    /// # Arguments
    /// * `non_bonded` - Pair potential applied to every pair in the list.
    /// * `bonded` - Optional potential applied to group bonds.
    /// * `update_stride` - Pair-list rebuild interval in steps.
    ///
    /// # Panics
    ///
    /// Panics when the update stride is zero.
    pub fn new(
        bc: Arc<dyn BoundaryCondition>,
        non_bonded: Box<dyn PairPotential>,
        bonded: Option<Box<dyn PairPotential>>,
        externals: Vec<Box<dyn ExternalPotential>>,
        generator: PairListGenerator,
        update_stride: u64,
    ) -> Self {
        if update_stride == 0 {
            panic!("Pair list update stride must be > 0.");
        }
        Interactor {
            forces: Forces::new(bc),
            non_bonded,
            bonded,
            externals,
            generator,
            pair_list: PairList::default(),
            update_stride,
            step: 0,
            externals_initialized: false,
        }
    }

    /// Computes all forces and the total potential energy for the current
    /// positions. Forces are reset first, so the particle force vectors
    /// hold exactly this step's forces afterwards.
    pub fn interact(&mut self, system: &mut ParticleSystem) -> Result<f64, String> {
        if self.step % self.update_stride == 0 {
            self.pair_list = self.generator.generate(system);
        }
        self.step += 1;

        // Stateful external potentials commit the current configuration
        // before their energies enter this step.
        if !self.externals.is_empty() {
            if self.externals_initialized {
                self.update_externals_internal(system);
            } else {
                self.initialize_externals_internal(system);
            }
        }

        system.reset_forces();
        let mut epot = self
            .forces
            .non_bonded(system, &mut self.pair_list, self.non_bonded.as_ref())?;
        if let Some(bonded) = &self.bonded {
            epot += self.forces.bonded(system, bonded.as_ref())?;
        }
        epot += self.forces.external(system, &self.externals);
        Ok(epot)
    }

    /// The current pair list. Stale between rebuilds, by design of the
    /// pair-list contract.
    pub fn pair_list(&self) -> &PairList {
        &self.pair_list
    }

    fn initialize_externals_internal(&mut self, system: &ParticleSystem) {
        for potential in &mut self.externals {
            potential.initialize(system);
        }
        self.externals_initialized = true;
    }

    fn update_externals_internal(&mut self, system: &ParticleSystem) {
        for potential in &mut self.externals {
            potential.update_system(system);
        }
    }

    /// Runs the `complete` lifecycle hook of every external potential.
    pub fn complete_externals(&self) -> Result<(), String> {
        for potential in &self.externals {
            potential.complete()?;
        }
        Ok(())
    }

    /// The shared boundary condition.
    pub fn bc(&self) -> Arc<dyn BoundaryCondition> {
        self.forces.bc().clone()
    }
}
