#[cfg(test)]
mod units {
    use crate::analysis::dipole::DipoleMoment;
    use crate::analysis::gr::Gr;
    use crate::analysis::msd::Msd;
    use crate::analysis::{analyze, Analyzer};
    use crate::boundary::{BoundaryCondition, NoBc};
    use crate::io::trajectory;
    use crate::particle::cell::SimBox;
    use crate::particle::group::ParticleGroup;
    use crate::particle::spec::ParticleSpec;
    use crate::particle::system::ParticleSystem;
    use crate::vector::Vec3;
    use std::sync::Arc;

    fn spec(name: &str, charge: f64) -> Arc<ParticleSpec> {
        Arc::new(ParticleSpec::new(name, 1.0, charge, 0.1, false))
    }

    #[test]
    fn gr_bins_a_fixed_pair() {
        let mut system = ParticleSystem::new(SimBox::cubic(10.0));
        let a = system.add_particle("a", "A", spec("A", 0.0));
        let b = system.add_particle("b", "B", spec("B", 0.0));
        system.particles_mut()[a].set_position(Vec3::new(1.0, 1.0, 1.0));
        system.particles_mut()[b].set_position(Vec3::new(1.5, 1.0, 1.0));

        let bc: Arc<dyn BoundaryCondition> = Arc::new(NoBc::new());
        let mut gr = Gr::new(0.02, 2.5, "A", "B", bc);
        gr.perform(&system);

        let results = gr.results();
        let expected_bin = (0.5_f64 / 0.02) as usize;
        for (i, (r, g)) in results.iter().enumerate() {
            assert!((r - i as f64 * 0.02).abs() < 1e-12);
            if i == expected_bin {
                assert!(*g > 0.0, "expected occupancy at r = {}", r);
            } else {
                assert_eq!(*g, 0.0);
            }
        }
    }

    #[test]
    fn msd_of_ballistic_motion_is_quadratic() {
        let mut system = ParticleSystem::new(SimBox::cubic(100.0));
        let i = system.add_particle("p", "A", spec("A", 0.0));

        let dt = 0.5;
        let v = 2.0;
        let mut msd = Msd::new(dt, 5.0 * dt);
        for frame in 0..10 {
            let x = v * dt * frame as f64;
            system.particles_mut()[i].set_position(Vec3::new(x, 0.0, 0.0));
            msd.perform(&system);
        }

        for (t, value) in msd.results() {
            let expected = (v * t) * (v * t);
            assert!(
                (value - expected).abs() < 1e-9,
                "msd({}) = {}, expected {}",
                t,
                value,
                expected
            );
        }
    }

    #[test]
    fn dipole_moment_of_an_ion_pair() {
        let mut system = ParticleSystem::new(SimBox::cubic(10.0));
        let plus = system.add_particle("p", "P", spec("P", 1.0));
        let minus = system.add_particle("m", "M", spec("M", -1.0));
        let d = 0.3;
        system.particles_mut()[plus].set_position(Vec3::new(1.0, 1.0, 1.0));
        system.particles_mut()[minus].set_position(Vec3::new(1.0 + d, 1.0, 1.0));
        system.add_group(ParticleGroup::chain(vec![plus, minus]));

        let mut dipole = DipoleMoment::new(0.05, 1.0);
        dipole.perform(&system);

        assert!((dipole.average_m2() - d * d).abs() < 1e-12);
        let results = dipole.results();
        let expected_bin = (d / 0.05) as usize;
        assert_eq!(results[expected_bin].1, 1);
    }

    #[test]
    fn frohlich_is_one_for_vanishing_dipoles() {
        let eps = DipoleMoment::frohlich(0.0, 298.15, 1000.0);
        assert!((eps - 1.0).abs() < 1e-12);
    }

    #[test]
    fn analyze_skips_the_prefix() {
        struct Counter(usize);
        impl Analyzer for Counter {
            fn perform(&mut self, _system: &ParticleSystem) {
                self.0 += 1;
            }
        }

        let mut system = ParticleSystem::new(SimBox::cubic(10.0));
        let i = system.add_particle("p", "A", spec("A", 0.0));

        // Three frames in a memory buffer.
        let mut buffer: Vec<u8> = Vec::new();
        for frame in 0..3 {
            system.particles_mut()[i].set_position(Vec3::new(frame as f64, 0.0, 0.0));
            trajectory::write_frame(&mut buffer, &system).unwrap();
        }

        let mut counter = Counter(0);
        let mut reader = std::io::BufReader::new(buffer.as_slice());
        let analyzed = analyze(&mut counter, &mut system, &mut reader, 1).unwrap();
        assert_eq!(analyzed, 2);
        assert_eq!(counter.0, 2);
    }
}
