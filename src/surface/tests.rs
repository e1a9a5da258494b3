#[cfg(test)]
mod units {
    use crate::surface::dots;
    use crate::surface::sphere;
    use crate::surface::triangulation;
    use crate::surface::Polyhedron;
    use crate::vector::Vec3;
    use std::f64::consts::PI;

    #[test]
    fn dodecahedron_counts_and_euler() {
        let (vertices, pentagons) = sphere::dodecahedron(1.0);
        assert_eq!(vertices.len(), 20);
        assert_eq!(pentagons.len(), 12);

        let polyhedron = Polyhedron::new(vertices, pentagons).unwrap();
        assert_eq!(polyhedron.number_of_edges(), 30);
        assert_eq!(polyhedron.euler_characteristic(), 2);

        // All vertices sit on the sphere.
        for v in polyhedron.vertices() {
            assert!((v.position().norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn sixty_triangle_sphere() {
        let surface = triangulation::spherical(1.0, 60).unwrap();
        assert_eq!(surface.number_of_faces(), 60);
        assert_eq!(surface.number_of_vertices(), 32);
        assert_eq!(surface.number_of_edges(), 90);
        assert_eq!(surface.euler_characteristic(), 2);
    }

    #[test]
    fn subdivision_reaches_target_and_keeps_euler() {
        for target in [240, 960] {
            let surface = triangulation::spherical(1.0, target).unwrap();
            assert!(surface.number_of_faces() >= target);
            assert_eq!(surface.euler_characteristic(), 2);
            // 60 * 4^n triangles, n_vertices = n_faces / 2 + 2.
            assert_eq!(
                surface.number_of_vertices(),
                surface.number_of_faces() / 2 + 2
            );
        }
    }

    #[test]
    fn sphere_area_converges_monotonically() {
        let exact = 4.0 * PI;
        let mut previous_error = f64::INFINITY;
        for target in [60, 240, 960] {
            let surface = triangulation::spherical(1.0, target).unwrap();
            let error = (surface.area() / exact - 1.0).abs();
            assert!(
                error <= previous_error,
                "area error grew from {} to {} at {} triangles",
                previous_error,
                error,
                target
            );
            previous_error = error;
        }
        // Scenario: at >= 960 triangles the area is within 5e-3 of 4 pi.
        assert!(previous_error < 5e-3);
    }

    #[test]
    fn edges_are_deduplicated_with_canonical_keys() {
        let surface = triangulation::spherical(1.0, 60).unwrap();
        let mut ids = std::collections::HashSet::new();
        for edge in surface.edges() {
            let (a, b) = edge.key();
            assert!(a < b);
            assert_eq!(edge.id(), format!("{}-{}", a, b));
            assert!(ids.insert(edge.id()), "duplicate edge {}", edge.id());
            assert!(edge.length(surface.vertices()) > 0.0);
        }
        assert_eq!(ids.len(), surface.number_of_edges());
    }

    #[test]
    fn vertex_normals_are_radial_for_spheres() {
        let surface = triangulation::spherical(2.0, 240).unwrap();
        for v in surface.vertices() {
            let radial = v.position().normalize();
            assert!(v.normal().approx_eq(&radial, 1e-2));
            assert!((v.normal().norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn cubic_triangulation() {
        let cube = triangulation::cubic(2.0).unwrap();
        assert_eq!(cube.number_of_vertices(), 8);
        assert_eq!(cube.number_of_faces(), 12);
        assert_eq!(cube.euler_characteristic(), 2);
        assert!((cube.area() - 6.0 * 4.0).abs() < 1e-9);
    }

    #[test]
    fn euler_violation_is_fatal() {
        // A single triangle is not a closed surface.
        let vertices = vec![
            crate::surface::Vertex::new(0, Vec3::zero(), Vec3::z_hat()),
            crate::surface::Vertex::new(1, Vec3::x_hat(), Vec3::z_hat()),
            crate::surface::Vertex::new(2, Vec3::y_hat(), Vec3::z_hat()),
        ];
        let faces = vec![crate::surface::face::Face::triangle(0, 1, 2)];
        let err = Polyhedron::new(vertices, faces).unwrap_err();
        assert!(err.contains("Euler"));
    }

    #[test]
    fn unit_dot_counts_follow_the_selection_rule() {
        // 32 = 30 * 1 + 2 from the dodecahedron refinement.
        let dod = dots::ico_dot_dod(32).unwrap();
        assert_eq!(dod.len(), 32);

        // 42 = 10 * 4 + 2 from the arc refinement.
        let arc = dots::ico_dot_arc(42).unwrap();
        assert_eq!(arc.len(), 42);

        for d in dod.iter().chain(&arc) {
            assert!((d.norm() - 1.0).abs() < 1e-9);
        }

        // The selector picks the mode wasting fewer points.
        assert_eq!(dots::unit_sphere_dots(12).unwrap().len(), 12);
        assert_eq!(dots::unit_sphere_dots(32).unwrap().len(), 32);
    }

    #[test]
    fn higher_density_distributions() {
        let fine = dots::unit_sphere_dots(500).unwrap();
        assert!(fine.len() >= 500);
        for d in &fine {
            assert!((d.norm() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn spherical_dots_scale_with_radius() {
        let (dotted, area) = dots::spherical(3.0, 200).unwrap();
        assert!(dotted.len() >= 200);
        for d in &dotted {
            assert!((d.norm() - 3.0).abs() < 1e-9);
        }
        assert!((area - 4.0 * PI * 9.0).abs() < 1e-9);
    }

    #[test]
    fn composite_surface_discards_buried_dots() {
        let positions = vec![Vec3::zero(), Vec3::new(0.13, 0.0, 0.0)];
        let radii = vec![0.12, 0.18];
        let (dotted, area) = dots::general(&positions, &radii, 200).unwrap();

        let n_unit = dots::unit_sphere_dots(200).unwrap().len();
        // Overlapping spheres lose dots and area.
        assert!(dotted.len() < 2 * n_unit);
        let full = 4.0 * PI * (0.12_f64.powi(2) + 0.18_f64.powi(2));
        assert!(area < full);
        assert!(area > 0.0);

        // No retained dot lies strictly inside the other sphere.
        for d in &dotted {
            let in_first = (d - &positions[0]).norm() < 0.12 - 1e-9;
            let in_second = (d - &positions[1]).norm() < 0.18 - 1e-9;
            assert!(!(in_first || in_second));
        }
    }

    #[test]
    fn distant_spheres_keep_everything() {
        let positions = vec![Vec3::zero(), Vec3::new(10.0, 0.0, 0.0)];
        let radii = vec![1.0, 1.0];
        let (dotted, area) = dots::general(&positions, &radii, 100).unwrap();
        let n_unit = dots::unit_sphere_dots(100).unwrap().len();
        assert_eq!(dotted.len(), 2 * n_unit);
        assert!((area - 8.0 * PI).abs() < 1e-9);
    }

    #[test]
    fn mismatched_inputs_are_rejected() {
        let err = dots::general(&[Vec3::zero()], &[1.0, 2.0], 100).unwrap_err();
        assert!(err.contains("lengths"));
        let err = dots::general(&[Vec3::zero()], &[0.0], 100).unwrap_err();
        assert!(err.contains("radii"));
    }

    #[test]
    fn map_onto_composite_dotted_surface() {
        // Two overlapping spheres, as in the diatomic solute case.
        let positions = vec![Vec3::new(0.01, 0.02, 0.03), Vec3::new(0.14, 0.02, 0.03)];
        let radii = vec![0.12, 0.18];
        let (dotted, _) = dots::general(&positions, &radii, 500).unwrap();

        let mut surface = triangulation::spherical(1.0, 60).unwrap();
        triangulation::map_onto(&dotted, &mut surface).unwrap();

        assert_eq!(surface.euler_characteristic(), 2);
        assert!(surface.area() > 0.0);

        // Every vertex was replaced by one of the (centered) dots, each
        // dot claimed at most once.
        let mut center = Vec3::zero();
        for dot in &dotted {
            center += *dot;
        }
        center = center / dotted.len() as f64;
        for v in surface.vertices() {
            let matches = dotted
                .iter()
                .filter(|d| (**d - center).approx_eq(&v.position(), 1e-12))
                .count();
            assert_eq!(matches, 1, "vertex not mapped to a unique dot");
        }
    }

    #[test]
    fn surface_file_round_trip() {
        let surface = triangulation::spherical(1.5, 240).unwrap();
        let mut buffer: Vec<u8> = Vec::new();
        triangulation::write(&mut buffer, &surface).unwrap();

        let mut reader = std::io::BufReader::new(buffer.as_slice());
        let parsed = triangulation::parse(&mut reader).unwrap();

        assert_eq!(parsed.number_of_vertices(), surface.number_of_vertices());
        assert_eq!(parsed.number_of_faces(), surface.number_of_faces());
        assert_eq!(parsed.euler_characteristic(), 2);
        for (a, b) in surface.vertices().iter().zip(parsed.vertices()) {
            assert!(a.position().approx_eq(&b.position(), 1e-8));
        }
        assert!((parsed.area() - surface.area()).abs() < 1e-6);
    }
}
