#[cfg(test)]
mod units {
    use crate::bem::flat_centers::FlatTriCenters;
    use crate::bem::flat_vertices::FlatTriVertices;
    use crate::bem::BemCalculator;
    use crate::param::Parameters;
    use crate::surface::triangulation;
    use crate::units;
    use crate::vector::Vec3;
    use std::sync::Arc;

    fn bem_params(eps_solute: f64, eps_solvent: f64, ka: f64) -> Parameters {
        let mut param = Parameters::new();
        param.put_real("bem.solute.eps", eps_solute);
        param.put_real("bem.solvent.eps", eps_solvent);
        param.put_real("bem.solvent.ka", ka);
        param
    }

    /// Born reaction potential of a point charge at the center of a
    /// sphere of radius a: q/(4 pi e0) (1/eps_solvent - 1/eps_solute)/a.
    fn born_potential(q: f64, a: f64, eps_solute: f64, eps_solvent: f64) -> f64 {
        q * units::F_EL * (1.0 / eps_solvent - 1.0 / eps_solute) / a
    }

    #[test]
    fn born_point_charge_face_centers() {
        let radius = 2.0;
        let (eps_solute, eps_solvent) = (2.0, 78.5);
        let surface = Arc::new(triangulation::spherical(radius, 960).unwrap());
        let param = bem_params(eps_solute, eps_solvent, 0.0);

        let mut calculator = FlatTriCenters::new(&param, surface).unwrap();
        calculator.surface_matrix().unwrap();
        calculator
            .right_hand_side(&[Vec3::zero()], &[1.0])
            .unwrap();
        calculator.solve().unwrap();

        let potentials = calculator
            .reaction_potential_solute(&[Vec3::zero()])
            .unwrap();
        let expected = born_potential(1.0, radius, eps_solute, eps_solvent);
        let relative = (potentials[0] - expected).abs() / expected.abs();
        assert!(
            relative < 0.08,
            "Born potential off by {:.3}: got {}, expected {}",
            relative,
            potentials[0],
            expected
        );
    }

    #[test]
    fn born_point_charge_vertex_collocation() {
        let radius = 2.0;
        let (eps_solute, eps_solvent) = (2.0, 78.5);
        let surface = Arc::new(triangulation::spherical(radius, 960).unwrap());
        let param = bem_params(eps_solute, eps_solvent, 0.0);

        let mut calculator = FlatTriVertices::new(&param, surface).unwrap();
        calculator.surface_matrix().unwrap();
        calculator
            .right_hand_side(&[Vec3::zero()], &[1.0])
            .unwrap();
        calculator.solve().unwrap();

        let potentials = calculator
            .reaction_potential_solute(&[Vec3::zero()])
            .unwrap();
        let expected = born_potential(1.0, radius, eps_solute, eps_solvent);
        let relative = (potentials[0] - expected).abs() / expected.abs();
        assert!(
            relative < 0.2,
            "Born potential off by {:.3}: got {}, expected {}",
            relative,
            potentials[0],
            expected
        );
    }

    #[test]
    fn solute_and_solvent_factors_differ_by_eps_ratio() {
        let surface = Arc::new(triangulation::spherical(1.0, 240).unwrap());
        let param = bem_params(4.0, 80.0, 0.0);

        let mut calculator = FlatTriCenters::new(&param, surface).unwrap();
        calculator.surface_matrix().unwrap();
        calculator
            .right_hand_side(&[Vec3::zero()], &[1.0])
            .unwrap();
        calculator.solve().unwrap();

        let probe = [Vec3::zero()];
        let solute = calculator.reaction_potential_solute(&probe).unwrap()[0];
        let solvent = calculator.reaction_potential_solvent(&probe).unwrap()[0];
        let eps_ratio = 80.0 / 4.0;
        assert!((solute / solvent - eps_ratio).abs() < 1e-9);
    }

    #[test]
    fn rhs_validates_inputs() {
        let surface = Arc::new(triangulation::spherical(1.0, 60).unwrap());
        let param = bem_params(2.0, 78.5, 0.0);
        let mut calculator = FlatTriCenters::new(&param, surface).unwrap();

        // Length mismatch.
        let err = calculator
            .right_hand_side(&[Vec3::zero()], &[1.0, -1.0])
            .unwrap_err();
        assert!(err.contains("lengths"));

        // Empty charge set.
        let err = calculator.right_hand_side(&[], &[]).unwrap_err();
        assert!(err.contains("not provided"));
    }

    #[test]
    fn solve_requires_surface_matrix() {
        let surface = Arc::new(triangulation::spherical(1.0, 60).unwrap());
        let param = bem_params(2.0, 78.5, 0.0);
        let mut calculator = FlatTriCenters::new(&param, surface).unwrap();
        calculator
            .right_hand_side(&[Vec3::zero()], &[1.0])
            .unwrap();
        assert!(calculator.solve().is_err());
    }

    #[test]
    fn charge_scaling_is_linear() {
        let surface = Arc::new(triangulation::spherical(1.5, 240).unwrap());
        let param = bem_params(2.0, 78.5, 0.0);

        let mut calculator = FlatTriCenters::new(&param, surface).unwrap();
        calculator.surface_matrix().unwrap();

        let probe = [Vec3::new(0.2, 0.0, 0.0)];
        calculator
            .right_hand_side(&[Vec3::zero()], &[1.0])
            .unwrap();
        calculator.solve().unwrap();
        let phi_1 = calculator.reaction_potential_solute(&probe).unwrap()[0];

        calculator
            .right_hand_side(&[Vec3::zero()], &[2.0])
            .unwrap();
        calculator.solve().unwrap();
        let phi_2 = calculator.reaction_potential_solute(&probe).unwrap()[0];

        assert!((phi_2 - 2.0 * phi_1).abs() < 1e-9 * phi_1.abs().max(1.0));
    }

    #[test]
    fn nonpositive_permittivity_is_rejected() {
        let surface = Arc::new(triangulation::spherical(1.0, 60).unwrap());
        let param = bem_params(-1.0, 78.5, 0.0);
        assert!(FlatTriCenters::new(&param, surface).is_err());
    }
}
