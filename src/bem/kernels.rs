//! Dielectric boundary kernels.
//!
//! The zero-ionic-strength kernel L⁰ and the κ > 0 kernel family K, L,
//! M, N of the surface integral formulation (Juffer et al., J. Comput.
//! Phys. 97:144, 1991).

use crate::vector::Vec3;
use std::f64::consts::PI;

/// L⁰(r, n, r0) = −(ε_ratio − 1)·(r − r0)·n / (2π·(ε_ratio + 1)·|r − r0|³).
pub fn lij0(eps_ratio: f64, r: &Vec3, normal: &Vec3, r0: &Vec3) -> f64 {
    let disv = r - r0;
    let dis = disv.norm();
    let imp = disv.dot(normal);
    let f1 = 2.0 * (eps_ratio - 1.0) / (eps_ratio + 1.0);
    let f2 = 4.0 * PI * dis * dis * dis;
    -f1 * imp / f2
}

/// Screened single-layer kernel L(r, n, r0) for inverse Debye length κ.
pub fn lij(ka: f64, eps_ratio: f64, r: &Vec3, normal: &Vec3, r0: &Vec3) -> f64 {
    let disv = r - r0;
    let dis = disv.norm();
    let imp = disv.dot(normal);
    let t0 = 1.0 + ka * dis;
    let t1 = (-ka * dis).exp();
    let t2 = t0 * t1;
    let t3 = 2.0 / (1.0 + eps_ratio);
    let t4 = 4.0 * PI * dis;
    let t5 = t4 * dis * dis;
    t3 * (1.0 - eps_ratio * t2) * imp / t5
}

/// The kernel tuple (K, L, M, N) at nonzero ionic strength.
pub fn klmn(
    ka: f64,
    eps_ratio: f64,
    r: &Vec3,
    n: &Vec3,
    r0: &Vec3,
    n0: &Vec3,
) -> (f64, f64, f64, f64) {
    let disv = r - r0; // r - r0.
    let dis = disv.norm(); // |r - r0|.
    let dis2 = dis * dis;
    let imp = disv.dot(n); // (r - r0) . n.
    let t0 = 1.0 + ka * dis;
    let t1 = (-ka * dis).exp();
    let t2 = t0 * t1;
    let mut t3 = 2.0 / (1.0 + eps_ratio);
    let t4 = 4.0 * PI * dis;
    let t5 = t4 * dis2;
    let t6 = t3 / t5;
    let lij = t6 * (1.0 - eps_ratio * t2) * imp; // Kernel L(r,r0).
    let kij = t3 * (1.0 - t1) / t4; // Kernel K(r,r0).
    let imp0 = disv.dot(n0);
    t3 *= eps_ratio;
    let nij = t6 * eps_ratio * imp0 * (1.0 - t2 / eps_ratio); // Kernel N(r,r0).
    let t7 = n.dot(n0);
    let t8 = imp * imp0;
    let t9 = t8 / t5;
    let m0 = 3.0 * t9 * (1.0 - t2) / dis2;
    let m1 = t7 * (t2 - 1.0) / t5;
    let m2 = t9 * ka * ka * t1;
    let mij = t3 * (m0 + m1 - m2); // Kernel M(r,r0).
    (kij, lij, mij, nij)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lij_reduces_to_lij0_at_zero_ka() {
        let r = Vec3::new(1.0, 0.2, -0.3);
        let n = Vec3::new(0.0, 0.0, 1.0);
        let r0 = Vec3::new(-0.5, 0.7, 0.1);
        let eps_ratio = 39.25;
        let a = lij0(eps_ratio, &r, &n, &r0);
        let b = lij(0.0, eps_ratio, &r, &n, &r0);
        // lij0 carries the (eps-1)/(eps+1) weight, lij the screened
        // (1 - eps t2) form; at ka = 0 both reduce to the same algebra.
        assert!((a - b).abs() < 1e-14 * a.abs().max(1.0));
    }

    #[test]
    fn klmn_l_component_matches_lij() {
        let r = Vec3::new(0.4, -0.8, 0.3);
        let n = Vec3::new(0.0, 1.0, 0.0);
        let r0 = Vec3::new(-0.2, 0.5, -0.6);
        let n0 = Vec3::new(1.0, 0.0, 0.0);
        let (ka, eps_ratio) = (0.3, 40.0);
        let (_, l, _, _) = klmn(ka, eps_ratio, &r, &n, &r0, &n0);
        assert!((l - lij(ka, eps_ratio, &r, &n, &r0)).abs() < 1e-15);
    }
}
