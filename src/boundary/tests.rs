#[cfg(test)]
mod units {
    use crate::boundary::pbc::Pbc;
    use crate::boundary::pbc_1d::{Pbc1dBounceBack, Pbc1dSpecular};
    use crate::boundary::pbc_2d::Pbc2d;
    use crate::boundary::{BoundaryCondition, Direction, NoBc};
    use crate::particle::cell::SimBox;
    use crate::particle::group::ParticleGroup;
    use crate::particle::spec::ParticleSpec;
    use crate::particle::system::ParticleSystem;
    use crate::vector::Vec3;
    use std::sync::Arc;

    #[test]
    fn no_bc_is_identity() {
        let bc = NoBc::new();
        let ri = Vec3::new(1.0, 2.0, 3.0);
        let rj = Vec3::new(9.0, 9.0, 9.0);
        assert_eq!(bc.displacement(&ri, &rj), ri - rj);
        assert_eq!(bc.place_inside(&rj).unwrap(), rj);
        assert_eq!(bc.reflect_velocity(&ri, &rj), ri);
    }

    #[test]
    fn minimum_image_scenario() {
        // Scenario: L = (10, 10, 10), ri = (0.5, 0, 0), rj = (9.5, 0, 0).
        let bc = Pbc::new(SimBox::cubic(10.0));
        let rij = bc.displacement(&Vec3::new(0.5, 0.0, 0.0), &Vec3::new(9.5, 0.0, 0.0));
        assert!(rij.approx_eq(&Vec3::new(1.0, 0.0, 0.0), 1e-12));
    }

    #[test]
    fn minimum_image_bound() {
        let simbox = SimBox::new(4.0, 6.0, 8.0);
        let bc = Pbc::new(simbox);
        let points = [
            (Vec3::new(0.1, 5.9, 7.9), Vec3::new(3.9, 0.1, 0.1)),
            (Vec3::new(2.0, 3.0, 4.0), Vec3::new(2.0, 3.0, 4.0)),
            (Vec3::new(0.0, 0.0, 0.0), Vec3::new(3.99, 5.99, 7.99)),
        ];
        for (ri, rj) in points {
            let rij = bc.displacement(&ri, &rj);
            for k in 0..3 {
                assert!(rij[k].abs() <= 0.5 * simbox.length(k) + 1e-12);
            }
        }
    }

    #[test]
    fn place_inside_folds_into_box() {
        let bc = Pbc::new(SimBox::cubic(10.0));
        let folded = bc.place_inside(&Vec3::new(12.5, -0.5, 25.0)).unwrap();
        assert!(folded.approx_eq(&Vec3::new(2.5, 9.5, 5.0), 1e-9));
    }

    #[test]
    fn place_inside_rejects_nan() {
        let bc = Pbc::new(SimBox::cubic(10.0));
        assert!(bc.place_inside(&Vec3::new(f64::NAN, 0.0, 0.0)).is_err());
    }

    #[test]
    fn bounce_back_reverses_full_velocity() {
        let bc = Pbc1dBounceBack::new(SimBox::cubic(2.0), Direction::Z);
        let v = Vec3::new(1.0, -2.0, 3.0);
        // Inside: unchanged.
        assert_eq!(bc.reflect_velocity(&v, &Vec3::new(1.0, 1.0, 1.0)), v);
        // Crossed in x (normal to z): full reversal.
        let reflected = bc.reflect_velocity(&v, &Vec3::new(2.5, 1.0, 1.0));
        assert_eq!(reflected, -v);
        assert!((reflected.norm() - v.norm()).abs() < 1e-15);
    }

    #[test]
    fn specular_preserves_magnitude() {
        let bc = Pbc1dSpecular::new(SimBox::cubic(2.0), Direction::Z);
        let v = Vec3::new(1.0, -2.0, 3.0);
        let reflected = bc.reflect_velocity(&v, &Vec3::new(2.5, 1.0, 1.0));
        assert_eq!(reflected, Vec3::new(-1.0, -2.0, 3.0));
        assert!((reflected.norm() - v.norm()).abs() < 1e-15);
    }

    #[test]
    fn specular_group_reflection_is_consistent() {
        let spec = Arc::new(ParticleSpec::new("W", 18.0, 0.0, 0.15, false));
        let mut system = ParticleSystem::new(SimBox::cubic(2.0));
        let a = system.add_particle("a", "W", spec.clone());
        let b = system.add_particle("b", "W", spec);
        // Group center beyond the x wall even though b is still inside.
        system.particles_mut()[a].set_position(Vec3::new(2.6, 1.0, 1.0));
        system.particles_mut()[b].set_position(Vec3::new(1.9, 1.0, 1.0));
        system.particles_mut()[a].set_velocity(Vec3::new(1.0, 0.5, 0.0));
        system.particles_mut()[b].set_velocity(Vec3::new(2.0, -0.5, 0.0));
        system.add_group(ParticleGroup::chain(vec![a, b]));

        let bc = Pbc1dSpecular::new(SimBox::cubic(2.0), Direction::Z);
        let (groups, particles) = system.groups_and_particles_mut();
        bc.apply_to_group_velocities(&groups[0], particles);

        // Both members got the same x sign flip.
        assert_eq!(particles[a].velocity(), Vec3::new(-1.0, 0.5, 0.0));
        assert_eq!(particles[b].velocity(), Vec3::new(-2.0, -0.5, 0.0));
    }

    #[test]
    fn pbc_2d_folds_periodic_axes_only() {
        let bc = Pbc2d::new(
            SimBox::new(2.0, 2.0, 4.0),
            Direction::X,
            Direction::Y,
            Direction::Z,
        );
        let folded = bc.place_inside(&Vec3::new(2.5, -0.5, 7.0)).unwrap();
        assert!((folded.x - 0.5).abs() < 1e-12);
        assert!((folded.y - 1.5).abs() < 1e-12);
        // z is left alone by place_inside.
        assert_eq!(folded.z, 7.0);
    }

    #[test]
    fn pbc_2d_reinjects_third_axis() {
        crate::util::reseed_fallback_rng(11);
        let bc = Pbc2d::new(
            SimBox::new(2.0, 2.0, 4.0),
            Direction::X,
            Direction::Y,
            Direction::Z,
        );
        let r = bc.reinject(&Vec3::new(1.0, 1.0, 9.0));
        assert!(r.z >= 0.0 && r.z < 4.0);
        // In-range positions are untouched.
        let inside = Vec3::new(1.0, 1.0, 2.0);
        assert_eq!(bc.reinject(&inside), inside);
    }

    #[test]
    fn pbc_2d_minimum_image_two_axes() {
        let bc = Pbc2d::new(
            SimBox::new(10.0, 10.0, 20.0),
            Direction::X,
            Direction::Y,
            Direction::Z,
        );
        let rij = bc.displacement(&Vec3::new(0.5, 0.5, 0.0), &Vec3::new(9.5, 9.5, 15.0));
        assert!(rij.approx_eq(&Vec3::new(1.0, 1.0, -15.0), 1e-12));
    }
}
