#[cfg(test)]
mod units {
    use crate::boundary::{BoundaryCondition, NoBc};
    use crate::displacer::dpd::Dpd;
    use crate::displacer::velocity_verlet::VelocityVerlet;
    use crate::displacer::Displacer;
    use crate::forcefield::ForceField;
    use crate::interactor::Interactor;
    use crate::pairlist::PairListGenerator;
    use crate::param::Parameters;
    use crate::particle::cell::SimBox;
    use crate::particle::group::ParticleGroup;
    use crate::particle::spec::ParticleSpec;
    use crate::particle::system::ParticleSystem;
    use crate::potentials::bonded::Harmonic;
    use crate::potentials::composites::NonInteracting;
    use crate::potentials::soft_repulsion::SoftRepulsion;
    use crate::vector::Vec3;
    use std::sync::Arc;

    fn bead() -> Arc<ParticleSpec> {
        Arc::new(ParticleSpec::new("B", 1.0, 0.0, 0.1, false))
    }

    /// Two bonded particles on a stiff harmonic spring, stretched by
    /// 0.05 nm along x.
    fn oscillator() -> ParticleSystem {
        let mut system = ParticleSystem::new(SimBox::cubic(10.0));
        let a = system.add_particle("a", "B", bead());
        let b = system.add_particle("b", "B", bead());
        system.particles_mut()[a].set_position(Vec3::new(4.0, 5.0, 5.0));
        system.particles_mut()[b].set_position(Vec3::new(4.25, 5.0, 5.0));
        system.add_group(ParticleGroup::chain(vec![a, b]));
        system
    }

    fn harmonic_interactor(bc: Arc<dyn BoundaryCondition>) -> Interactor {
        let mut ff = ForceField::new();
        ff.add_harmonic("B", "B", 0.2, 1000.0);
        let ff = Arc::new(ff);
        Interactor::new(
            bc.clone(),
            Box::new(NonInteracting::new()),
            Some(Box::new(Harmonic::new(ff, bc.clone()))),
            Vec::new(),
            PairListGenerator::new(2.5, bc),
            10,
        )
    }

    fn oscillator_params(dt: f64) -> Parameters {
        let mut param = Parameters::new();
        param.put_real("simulation.timestep", dt);
        param.put_real("simulation.temperature", 298.15);
        param.put_real("simulation.gamma", 0.0);
        param.put_real("simulation.dpd.lambda", 0.5);
        param.put_real("forces.nb.cutoff", 2.5);
        param.put_integer("simulation.seed", 1984);
        param
    }

    #[test]
    fn velocity_verlet_conserves_oscillator_energy() {
        let bc: Arc<dyn BoundaryCondition> = Arc::new(NoBc::new());
        let dt = 0.001;
        let mut vv =
            VelocityVerlet::new(&oscillator_params(dt), harmonic_interactor(bc)).unwrap();
        let mut system = oscillator();

        // Initial total energy is all potential: 0.5 * 1000 * 0.05^2.
        let e0 = 1.25;
        for _ in 0..500 {
            let data = vv.displace(&mut system).unwrap();
            assert!(
                (data.total_energy() - e0).abs() < 0.01,
                "energy drifted to {}",
                data.total_energy()
            );
        }
    }

    #[test]
    fn dpd_without_noise_reduces_to_velocity_verlet() {
        // gamma = 0 kills both the dissipative force and the random
        // amplitude sigma = sqrt(2 gamma kB T).
        let bc: Arc<dyn BoundaryCondition> = Arc::new(NoBc::new());
        let param = oscillator_params(0.001);

        let mut vv = VelocityVerlet::new(&param, harmonic_interactor(bc.clone())).unwrap();
        let mut dpd = Dpd::new(&param, harmonic_interactor(bc)).unwrap();
        let mut system_vv = oscillator();
        let mut system_dpd = oscillator();

        for _ in 0..100 {
            vv.displace(&mut system_vv).unwrap();
            dpd.displace(&mut system_dpd).unwrap();
        }
        for (p, q) in system_vv.particles().iter().zip(system_dpd.particles()) {
            assert!(p.position().approx_eq(&q.position(), 1e-10));
            assert!(p.velocity().approx_eq(&q.velocity(), 1e-10));
        }
    }

    #[test]
    fn dpd_single_step_smoke() {
        // Scenario: one pair at distance 0.8, rc = 1.0, gamma = 4.5,
        // T = 1.0 (reduced), dt = 0.04, lambda = 0.5, m = 1, zero
        // initial velocities, deterministic seed.
        let bc: Arc<dyn BoundaryCondition> = Arc::new(NoBc::new());
        let mut ff = ForceField::new();
        ff.add_soft_repulsion("B", "B", 25.0);
        let ff = Arc::new(ff);

        let mut param = Parameters::new();
        param.put_real("simulation.timestep", 0.04);
        param.put_real("simulation.temperature", 1.0);
        param.put_real("simulation.gamma", 4.5);
        param.put_real("simulation.dpd.lambda", 0.5);
        param.put_real("forces.nb.cutoff", 1.0);
        param.put_integer("simulation.seed", 42);

        let interactor = Interactor::new(
            bc.clone(),
            Box::new(SoftRepulsion::new(ff, bc.clone(), 1.0)),
            None,
            Vec::new(),
            PairListGenerator::new(1.0, bc),
            10,
        );
        let mut dpd = Dpd::new(&param, interactor).unwrap();

        let mut system = ParticleSystem::new(SimBox::cubic(10.0));
        let a = system.add_particle("a", "B", bead());
        let b = system.add_particle("b", "B", bead());
        system.particles_mut()[a].set_position(Vec3::new(4.0, 5.0, 5.0));
        system.particles_mut()[b].set_position(Vec3::new(4.8, 5.0, 5.0));

        let data = dpd.displace(&mut system).unwrap();

        // All forces act along the pair axis: positions change in x only.
        for p in system.particles() {
            assert_eq!(p.position().y, 5.0);
            assert_eq!(p.position().z, 5.0);
            assert_ne!(p.position().x, 4.0 + 0.8 * p.index() as f64);
        }
        assert!(data.kinetic > 0.0);
        assert!(data.temperature > 0.0);
    }

    #[test]
    fn frozen_particles_do_not_move() {
        let bc: Arc<dyn BoundaryCondition> = Arc::new(NoBc::new());
        let mut vv =
            VelocityVerlet::new(&oscillator_params(0.001), harmonic_interactor(bc)).unwrap();
        let mut system = oscillator();
        system.particles_mut()[0].set_frozen(true);
        let r0 = system.particles()[0].position();

        for _ in 0..50 {
            vv.displace(&mut system).unwrap();
        }
        assert_eq!(system.particles()[0].position(), r0);
        assert_eq!(system.particles()[0].velocity(), Vec3::zero());
        // The free partner still oscillates.
        assert_ne!(system.particles()[1].position(), Vec3::new(4.25, 5.0, 5.0));
    }
}
