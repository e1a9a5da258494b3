//! Parametric cubic curves along surface edges.

use crate::surface::Vertex;
use crate::vector::Vec3;

/// Cubic curve r(t) = a + b·t + c·t² + d·t³ for t in [0, 1] between two
/// vertices, constructed so the curve leaves the start vertex and enters
/// the end vertex consistently with their normals.
pub struct Curve {
    start_normal: Vec3,
    end_normal: Vec3,
    a: Vec3,
    b: Vec3,
    c: Vec3,
    d: Vec3,
}

impl Curve {
    pub fn new(start: &Vertex, end: &Vertex) -> Self {
        let position_start = start.position();
        let position_end = end.position();
        let r = position_end - position_start;
        let normal_start = start.normal();
        let normal_end = end.normal();
        let imp1 = r.dot(&normal_start);
        let imp2 = r.dot(&normal_end);
        let imp3 = normal_end.dot(&normal_end);
        let imp4 = normal_start.dot(&normal_start);
        let imp5 = normal_start.dot(&normal_end);

        // Constant vectors of the cubic.
        let f1 = (imp1 * imp3 + 0.5 * imp2 * imp5) / (imp4 * imp3 / 3.0 - (imp5 * imp5) / 12.0);
        let f2 = (-imp2 - f1 * imp5 / 6.0) / (imp3 / 3.0);
        let a = position_start;
        let c = 0.5 * f1 * normal_start;
        let d = (f2 * normal_end - f1 * normal_start) / 6.0;
        let b = position_end - a - c - d;

        Curve {
            start_normal: normal_start,
            end_normal: normal_end,
            a,
            b,
            c,
            d,
        }
    }

    /// Position and unit normal at curve parameter t.
    ///
    /// The normal derives from the curvature vector of the curve; for a
    /// curvature-free (straight) stretch it falls back to the normalized
    /// average of the end-vertex normals. Orientation always matches the
    /// incoming normals.
    pub fn point(&self, t: f64) -> (Vec3, Vec3) {
        let tt = t * t;
        let ttt = t * tt;

        // Position.
        let r = self.a + self.b * t + self.c * tt + self.d * ttt;

        // First and second derivatives.
        let der1 = self.b + 2.0 * self.c * t + 3.0 * self.d * tt;
        let der2 = 2.0 * self.c + 6.0 * self.d * t;
        let l_der1 = der1.norm_squared();
        let imp = der1.dot(&der2);

        // Curvature vector.
        let cv = (der2 - (imp / l_der1) * der1) / l_der1;
        let l_cv_2 = cv.norm_squared();

        let average = (self.start_normal + self.end_normal) / 2.0;
        let mut normal = if l_cv_2 > 0.0 {
            cv / l_cv_2.sqrt()
        } else {
            average.normalize()
        };

        // Same orientation as the start and end vertex normals.
        if normal.dot(&average) <= 0.0 {
            normal = -normal;
        }
        (r, normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere_vertex(index: usize, r: Vec3) -> Vertex {
        let normal = r.normalize();
        Vertex::new(index, r, normal)
    }

    #[test]
    fn endpoints_are_interpolated() {
        let start = sphere_vertex(0, Vec3::new(1.0, 0.0, 0.0));
        let end = sphere_vertex(1, Vec3::new(0.0, 1.0, 0.0));
        let curve = Curve::new(&start, &end);

        let (r0, _) = curve.point(0.0);
        let (r1, _) = curve.point(1.0);
        assert!(r0.approx_eq(&start.position(), 1e-12));
        assert!(r1.approx_eq(&end.position(), 1e-12));
    }

    #[test]
    fn midpoint_bulges_toward_the_sphere() {
        // The straight chord between two unit-sphere vertices passes at
        // distance cos(45 deg) from the center; the curve must do better.
        let start = sphere_vertex(0, Vec3::new(1.0, 0.0, 0.0));
        let end = sphere_vertex(1, Vec3::new(0.0, 1.0, 0.0));
        let curve = Curve::new(&start, &end);

        let (mid, _) = curve.point(0.5);
        let chord_mid = 0.5_f64.sqrt();
        assert!(mid.norm() > chord_mid);
        assert!(mid.norm() <= 1.0 + 1e-6);
    }

    #[test]
    fn normal_matches_vertex_normal_orientation() {
        let start = sphere_vertex(0, Vec3::new(1.0, 0.0, 0.0));
        let end = sphere_vertex(1, Vec3::new(0.0, 1.0, 0.0));
        let curve = Curve::new(&start, &end);

        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let (r, n) = curve.point(t);
            assert!((n.norm() - 1.0).abs() < 1e-12);
            // Outward on a sphere patch: along the position direction.
            assert!(n.dot(&r.normalize()) > 0.0);
        }
    }
}
