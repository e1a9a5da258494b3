#[cfg(test)]
mod units {
    use crate::boundary::pbc_2d::Pbc2d;
    use crate::boundary::{BoundaryCondition, Direction, NoBc};
    use crate::external::pressure_gradient::PressureGradient;
    use crate::external::surface_charge::UniformSurfaceChargeDensity;
    use crate::external::voltage::Voltage;
    use crate::external::vplanes::VirtualPlanes;
    use crate::external::{ExternalPotential, FlatSurface};
    use crate::particle::cell::SimBox;
    use crate::particle::spec::ParticleSpec;
    use crate::particle::system::ParticleSystem;
    use crate::units;
    use crate::vector::Vec3;
    use std::sync::Arc;

    fn electrolyte_box() -> SimBox {
        SimBox::new(60.0, 60.0, 120.0)
    }

    fn pbc_2d(simbox: SimBox) -> Arc<dyn BoundaryCondition> {
        Arc::new(Pbc2d::new(simbox, Direction::X, Direction::Y, Direction::Z))
    }

    fn two_ion_system(simbox: SimBox) -> ParticleSystem {
        let mut system = ParticleSystem::new(simbox);
        let na = Arc::new(ParticleSpec::new("Na+", 22.98977, 1.0, 0.095, false));
        let cl = Arc::new(ParticleSpec::new("Cl-", 35.453, -1.0, 0.181, false));
        let i = system.add_particle("na", "Na+", na);
        let j = system.add_particle("cl", "Cl-", cl);
        system.particles_mut()[i].set_position(Vec3::new(30.0, 30.0, 10.3));
        system.particles_mut()[j].set_position(Vec3::new(10.0, 50.0, 110.7));
        system
    }

    #[test]
    fn vplanes_initialize_scenario() {
        // Scenario: box (60, 60, 120), spacing 1.0, q = +1 at z = 10.3
        // and q = -1 at z = 110.7.
        let simbox = electrolyte_box();
        let system = two_ion_system(simbox);
        let mut planes = VirtualPlanes::new(simbox, pbc_2d(simbox), 1.0, 78.5);
        planes.initialize(&system);

        assert_eq!(planes.planes().len(), 120);
        assert_eq!(planes.state()[10], 1.0);
        assert_eq!(planes.state()[110], -1.0);
        assert_eq!(planes.state().iter().sum::<f64>(), 0.0);
        for (s, a) in planes.state().iter().zip(planes.accumulated()) {
            assert_eq!(s, a);
        }
        let sigma = planes.planes()[10].surface_charge_density();
        assert!((sigma - 1.0 / (60.0 * 60.0)).abs() < 1e-15);
    }

    #[test]
    fn vplanes_state_sums_to_unfrozen_charge() {
        let simbox = electrolyte_box();
        let mut system = two_ion_system(simbox);
        system.particles_mut()[1].set_frozen(true);
        let mut planes = VirtualPlanes::new(simbox, pbc_2d(simbox), 1.0, 78.5);
        planes.initialize(&system);

        let total: f64 = planes.state().iter().sum();
        assert_eq!(total, system.total_charge_unfrozen());
        assert_eq!(total, 1.0);
    }

    #[test]
    fn vplanes_update_moves_charge_between_planes() {
        let simbox = electrolyte_box();
        let mut system = two_ion_system(simbox);
        let mut planes = VirtualPlanes::new(simbox, pbc_2d(simbox), 1.0, 78.5);
        planes.initialize(&system);

        // One step: the cation moves from plane 10 to plane 20, the
        // anion stays put.
        system.particles_mut()[0].set_position(Vec3::new(30.0, 30.0, 20.5));
        let r_anion = system.particles()[1].position();
        system.particles_mut()[1].set_position(r_anion);
        planes.update_system(&system);

        assert_eq!(planes.state()[10], 0.0);
        assert_eq!(planes.state()[20], 1.0);
        assert_eq!(planes.state().iter().sum::<f64>(), 0.0);
        // Two commits: plane 10 held charge for one of them.
        let sigma_10 = planes.planes()[10].surface_charge_density();
        assert!((sigma_10 - 0.5 / 3600.0).abs() < 1e-15);
    }

    #[test]
    fn vplanes_fallback_restores_state_and_accumulated() {
        let simbox = electrolyte_box();
        let mut system = two_ion_system(simbox);
        let mut planes = VirtualPlanes::new(simbox, pbc_2d(simbox), 1.0, 78.5);
        planes.initialize(&system);

        let state_before: Vec<f64> = planes.state().to_vec();
        let accum_before: Vec<f64> = planes.accumulated().to_vec();

        system.particles_mut()[0].set_position(Vec3::new(30.0, 30.0, 55.5));
        let r_anion = system.particles()[1].position();
        system.particles_mut()[1].set_position(r_anion);
        planes.update_system(&system);
        planes.fallback();

        assert_eq!(planes.state(), state_before.as_slice());
        // fallback removed the rejected state and re-added the restored
        // one: accumulated = accum_before + state_before.
        let expected: Vec<f64> = accum_before
            .iter()
            .zip(&state_before)
            .map(|(a, s)| a + s)
            .collect();
        assert_eq!(planes.accumulated(), expected.as_slice());

        // Re-committing the identical move reproduces the rolled-back
        // update.
        planes.update_system(&system);
        assert_eq!(planes.state()[55], 1.0);
        assert_eq!(planes.state()[10], 0.0);
    }

    #[test]
    fn vplane_energy_decreases_with_distance_for_attraction() {
        let simbox = electrolyte_box();
        let system = two_ion_system(simbox);
        let mut planes = VirtualPlanes::new(simbox, pbc_2d(simbox), 1.0, 78.5);
        planes.initialize(&system);

        // Negative plane (110) attracts a positive charge: the
        // interaction is more favorable (lower) the closer the charge.
        let plane = &planes.planes()[110];
        let near = plane.interaction_energy(&Vec3::new(30.0, 30.0, 100.0), 1.0, 60.0);
        let far = plane.interaction_energy(&Vec3::new(30.0, 30.0, 60.0), 1.0, 60.0);
        assert!(near < far);
    }

    #[test]
    fn uniform_surface_charge_profile() {
        let bc: Arc<dyn BoundaryCondition> = Arc::new(NoBc::new());
        let eps_r = 78.5;
        let sigma = -0.15;
        let potential = UniformSurfaceChargeDensity::new(
            sigma,
            FlatSurface::xy(),
            eps_r,
            bc,
            0.0,
            false,
        );

        // Inside the Stern exclusion (R <= radius): LARGE.
        let (energy, force) = potential.force_and_energy(&Vec3::new(0.0, 0.0, 0.1), 0.15, 1.0);
        assert_eq!(energy, units::LARGE);
        assert_eq!(force, Vec3::zero());

        // Outside: linear attraction of a cation toward the anionic
        // surface.
        let z = 5.0;
        let (energy, force) = potential.force_and_energy(&Vec3::new(0.0, 0.0, z), 0.15, 1.0);
        let expected = -sigma * z / (2.0 * units::E0 * eps_r);
        assert!((energy - expected).abs() < 1e-12 * expected.abs());
        assert!(force.z < 0.0);
        assert_eq!((force.x, force.y), (0.0, 0.0));
    }

    #[test]
    fn voltage_constant_field() {
        let bc: Arc<dyn BoundaryCondition> = Arc::new(NoBc::new());
        let voltage = Voltage::with_field(Vec3::new(0.0, 0.0, -2.0), bc, 1.0);
        let spec = Arc::new(ParticleSpec::new("q", 1.0, 1.0, 0.1, false));
        let mut p = crate::particle::Particle::new("q1", 0, "q1", spec);
        p.set_position(Vec3::new(0.0, 0.0, 3.0));

        let (energy, force) = voltage.energy_force(&p);
        // U = -q (r . E) = -1 * (3 * -2) = 6; F = q E.
        assert!((energy - 6.0).abs() < 1e-12);
        assert!(force.approx_eq(&Vec3::new(0.0, 0.0, -2.0), 1e-12));
    }

    #[test]
    fn pressure_gradient_force_is_constant() {
        let gradient = PressureGradient::new(Vec3::new(0.1, 0.0, 0.0));
        let spec = Arc::new(ParticleSpec::new("b", 1.0, 0.0, 0.1, false));
        let mut p = crate::particle::Particle::new("b1", 0, "b1", spec);
        p.set_position(Vec3::new(2.0, 5.0, -1.0));

        let (energy, force) = gradient.energy_force(&p);
        assert!((energy + 0.2).abs() < 1e-12);
        assert_eq!(force, Vec3::new(0.1, 0.0, 0.0));
    }
}
