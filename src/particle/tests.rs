#[cfg(test)]
mod units {
    use crate::particle::cell::SimBox;
    use crate::particle::group::ParticleGroup;
    use crate::particle::spec::{ParticleSpec, SpecCatalog};
    use crate::particle::system::ParticleSystem;
    use crate::vector::Vec3;
    use std::sync::Arc;

    fn argon() -> Arc<ParticleSpec> {
        Arc::new(ParticleSpec::new("Ar", 39.948, 0.0, 0.188, false))
    }

    #[test]
    fn particle_tracks_previous_position_and_force() {
        let mut system = ParticleSystem::new(SimBox::cubic(10.0));
        let i = system.add_particle("p1", "Ar", argon());
        let p = &mut system.particles_mut()[i];

        p.set_position(Vec3::new(1.0, 2.0, 3.0));
        p.set_position(Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(p.previous_position(), Vec3::new(1.0, 2.0, 3.0));

        p.set_force(Vec3::x_hat());
        p.reset_force();
        assert_eq!(p.previous_force(), Vec3::x_hat());
        assert_eq!(p.force(), Vec3::zero());
    }

    #[test]
    fn momentum_is_mass_times_velocity() {
        let mut system = ParticleSystem::new(SimBox::cubic(10.0));
        let i = system.add_particle("p1", "Ar", argon());
        system.particles_mut()[i].set_velocity(Vec3::new(0.5, 0.0, 0.0));
        let p = &system.particles()[i];
        assert!(p.momentum().approx_eq(&Vec3::new(39.948 * 0.5, 0.0, 0.0), 1e-12));
    }

    #[test]
    #[should_panic]
    fn nonpositive_mass_rejected() {
        ParticleSpec::new("bad", 0.0, 0.0, 0.1, false);
    }

    #[test]
    fn catalog_lookup() {
        let mut catalog = SpecCatalog::new();
        catalog.add(ParticleSpec::new("Na+", 22.98977, 1.0, 0.095, false));
        catalog.add(ParticleSpec::new("Cl-", 35.453, -1.0, 0.181, false));

        assert_eq!(catalog.find("Na+").unwrap().charge(), 1.0);
        assert!(catalog.find("K+").is_err());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn free_particles_exclude_group_members() {
        let mut system = ParticleSystem::new(SimBox::cubic(10.0));
        for k in 0..4 {
            system.add_particle(&format!("p{}", k), "Ar", argon());
        }
        system.add_group(ParticleGroup::chain(vec![1, 2]));

        assert_eq!(system.free_indices(), vec![0, 3]);
        assert_eq!(system.groups()[0].bonds(), &[(1, 2)]);
    }

    #[test]
    fn group_center_is_mass_weighted() {
        let mut system = ParticleSystem::new(SimBox::cubic(10.0));
        let a = system.add_particle("a", "Ar", argon());
        let b = system.add_particle("b", "Ar", argon());
        system.particles_mut()[a].set_position(Vec3::zero());
        system.particles_mut()[b].set_position(Vec3::new(2.0, 0.0, 0.0));

        let group = ParticleGroup::chain(vec![a, b]);
        let center = group.position(system.particles());
        assert!(center.approx_eq(&Vec3::new(1.0, 0.0, 0.0), 1e-12));
    }

    #[test]
    fn center_of_mass_translation() {
        let mut system = ParticleSystem::new(SimBox::cubic(10.0));
        let a = system.add_particle("a", "Ar", argon());
        let b = system.add_particle("b", "Ar", argon());
        system.particles_mut()[a].set_position(Vec3::new(1.0, 1.0, 1.0));
        system.particles_mut()[b].set_position(Vec3::new(3.0, 1.0, 1.0));

        system.set_origin_to_center_of_mass();
        let com = system
            .particles()
            .iter()
            .fold(Vec3::zero(), |acc, p| acc + p.position());
        assert!(com.approx_eq(&Vec3::zero(), 1e-12));
    }

    #[test]
    fn total_charge_skips_frozen() {
        let mut catalog = SpecCatalog::new();
        let na = catalog.add(ParticleSpec::new("Na+", 22.98977, 1.0, 0.095, false));
        let cl = catalog.add(ParticleSpec::new("Cl-", 35.453, -1.0, 0.181, false));

        let mut system = ParticleSystem::new(SimBox::cubic(10.0));
        system.add_particle("na", "Na+", na);
        let j = system.add_particle("cl", "Cl-", cl);
        assert_eq!(system.total_charge_unfrozen(), 0.0);

        system.particles_mut()[j].set_frozen(true);
        assert_eq!(system.total_charge_unfrozen(), 1.0);
    }
}
