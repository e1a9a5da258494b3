#[cfg(test)]
mod units {
    use crate::forcefield::ForceField;

    #[test]
    fn lookup_is_symmetric_in_the_pair() {
        let mut ff = ForceField::new();
        ff.add_lennard_jones("Na+", "Cl-", 1.5e-6, 2.5e-3);
        assert_eq!(ff.lennard_jones("Na+", "Cl-").unwrap(), (1.5e-6, 2.5e-3));
        assert_eq!(ff.lennard_jones("Cl-", "Na+").unwrap(), (1.5e-6, 2.5e-3));
    }

    #[test]
    fn missing_pair_names_the_table() {
        let ff = ForceField::new();
        let err = ff.harmonic("A", "B").unwrap_err();
        assert!(err.contains("harmonic"));
        assert!(err.contains("A"));
    }

    #[test]
    fn toml_round_trip() {
        let text = r#"
            eps-inside-cutoff = 2.0
            eps-beyond-cutoff = 78.5

            [[lj]]
            specs = ["Ar", "Ar"]
            c12 = 1.0e-5
            c6 = 1.0e-2

            [[electrostatics]]
            specs = ["Na+", "Cl-"]
            eps = 78.5

            [[hp]]
            specs = ["A", "B"]
            r0 = 0.2
            fc = 1000.0

            [[sr]]
            specs = ["W", "W"]
            a = 25.0

            [[gauss]]
            spec = "W"
            sigma = 0.2
        "#;
        let ff = ForceField::from_toml_str(text).unwrap();
        assert_eq!(ff.lennard_jones("Ar", "Ar").unwrap(), (1.0e-5, 1.0e-2));
        assert_eq!(ff.shifted_force("Cl-", "Na+").unwrap(), 78.5);
        assert_eq!(ff.harmonic("B", "A").unwrap(), (0.2, 1000.0));
        assert_eq!(ff.soft_repulsion("W", "W").unwrap(), 25.0);
        assert_eq!(ff.gaussian_charge_density("W", "W").unwrap(), (0.2, 0.2));
        assert_eq!(ff.relative_permittivity_inside_cutoff(), 2.0);
        let (inside, outside) = ff.reaction_field("X", "Y").unwrap();
        assert_eq!((inside, outside), (2.0, 78.5));
    }
}
