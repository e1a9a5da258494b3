//! Lekner summation for systems periodic in x and y only.

use super::PairPotential;
use crate::boundary::BoundaryCondition;
use crate::particle::cell::SimBox;
use crate::particle::Particle;
use crate::units;
use crate::util;
use crate::vector::Vec3;
use std::f64::consts::PI;
use std::sync::Arc;

/// Rapidly converging 2D-periodic Coulomb sum, Eqs. (7) and (8) of
/// Juffer, Shepherd and Vogel, J. Chem. Phys. 114:1892, 2001.
///
/// Forces are not implemented: the energy is returned with a zero force
/// and a logged advisory, which restricts this potential to Monte Carlo
/// style drivers.
pub struct Lekner {
    simbox: SimBox,
    bc: Arc<dyn BoundaryCondition>,
    tolerance: f64,
    n_max: usize,
    k_max: usize,
}

impl Lekner {
    /// # Arguments
    /// * `tolerance` - Convergence tolerance for the double summations.
    /// * `n_max`, `k_max` - Hard caps on the outer and inner summation
    ///   indices.
    pub fn new(
        simbox: SimBox,
        bc: Arc<dyn BoundaryCondition>,
        tolerance: f64,
        n_max: usize,
        k_max: usize,
    ) -> Self {
        Lekner {
            simbox,
            bc,
            tolerance,
            n_max,
            k_max,
        }
    }

    /// Interaction energy of two charges separated by `rij`.
    ///
    /// Returns LARGE when the pair distance is below SMALL. The force is
    /// always zero.
    pub fn force_and_energy(&self, rij: &Vec3, qi: f64, qj: f64) -> (f64, Vec3) {
        static ADVISORY: std::sync::Once = std::sync::Once::new();
        ADVISORY.call_once(|| {
            log::warn!("Lekner summation returns energies only; forces are zero.");
        });

        let two_pi = 2.0 * PI;
        let log_2 = std::f64::consts::LN_2;
        let lx = self.simbox.length_x();
        let ly = self.simbox.length_y();
        let ly2_over_lx2 = ly * ly / (lx * lx);
        let lx2_over_ly2 = lx * lx / (ly * ly);

        let r = rij.norm();
        if r < crate::units::SMALL {
            return (crate::units::LARGE, Vec3::zero());
        }
        let dx = rij.x;
        let dy = rij.y;
        let dz = rij.z;

        let dx_over_lx = dx / lx;
        let dy_over_ly = dy / ly;
        let dz_over_ly = dz / ly;
        let dz_over_lx = dz / lx;
        let dz_over_lx2 = dz_over_lx * dz_over_lx;
        let dz_over_ly2 = dz_over_ly * dz_over_ly;

        let mut energy: f64;
        if dy.abs() > crate::units::SMALL {
            // Eq (7): outer sum over n, inner sum over k and -k.
            let mut sum_n = 0.0;
            let mut n = 1;
            loop {
                let sum_n_previous = sum_n;
                let two_pi_n = two_pi * n as f64;
                let cos_term = (two_pi_n * dx_over_lx).cos();

                // Inner sum initialized with the k = 0 term.
                let a2 = dy_over_ly * dy_over_ly;
                let t1 = ly2_over_lx2 * a2 + dz_over_lx2;
                let mut sum_k = util::bessel_k0(two_pi_n * t1.sqrt());
                let mut k = 1;
                loop {
                    let sum_k_previous = sum_k;
                    let dk = k as f64;

                    // Positive k.
                    let a1 = dy_over_ly + dk;
                    let t1 = ly2_over_lx2 * a1 * a1 + dz_over_lx2;
                    sum_k += util::bessel_k0(two_pi_n * t1.sqrt());

                    // Negative k.
                    let a1 = dy_over_ly - dk;
                    let t1 = ly2_over_lx2 * a1 * a1 + dz_over_lx2;
                    sum_k += util::bessel_k0(two_pi_n * t1.sqrt());

                    let d_sum_k = sum_k - sum_k_previous;
                    k += 1;
                    if d_sum_k.abs() <= self.tolerance || k >= self.k_max {
                        break;
                    }
                }
                sum_n += cos_term * sum_k;
                let d_sum_n = sum_n - sum_n_previous;
                n += 1;
                if d_sum_n.abs() <= self.tolerance || n >= self.n_max {
                    break;
                }
            }

            let qi_qj_over_lx = qi * qj / lx;
            energy = 4.0 * qi_qj_over_lx * sum_n;
            let log_term = ((two_pi * dz_over_ly).cosh() - (two_pi * dy_over_ly).cos()).ln();
            energy -= qi_qj_over_lx * log_term;
            energy -= qi_qj_over_lx * log_2; // Subtraction of just a constant.
        } else {
            // Eq (8): roles of n and k swapped.
            let mut sum_k = 0.0;
            let mut k = 1;
            loop {
                let sum_k_previous = sum_k;
                let two_pi_k = two_pi * k as f64;
                let cos_term = (two_pi_k * dy_over_ly).cos();

                // Inner sum initialized with the n = 0 term.
                let t1 = lx2_over_ly2 * dx_over_lx * dx_over_lx + dz_over_ly2;
                let mut sum_n = util::bessel_k0(two_pi_k * t1.sqrt());
                let mut n = 1;
                loop {
                    let sum_n_previous = sum_n;
                    let dn = n as f64;

                    // Positive n.
                    let a1 = dx_over_lx + dn;
                    let t1 = lx2_over_ly2 * a1 * a1 + dz_over_ly2;
                    sum_n += util::bessel_k0(two_pi_k * t1.sqrt());

                    // Negative n.
                    let a1 = dx_over_lx - dn;
                    let t1 = lx2_over_ly2 * a1 * a1 + dz_over_ly2;
                    sum_n += util::bessel_k0(two_pi_k * t1.sqrt());

                    let d_sum_n = sum_n - sum_n_previous;
                    n += 1;
                    if d_sum_n.abs() <= self.tolerance || n >= self.n_max {
                        break;
                    }
                }
                sum_k += cos_term * sum_n;
                let d_sum_k = sum_k - sum_k_previous;
                k += 1;
                if d_sum_k.abs() <= self.tolerance || k >= self.k_max {
                    break;
                }
            }

            let qi_qj_over_ly = qi * qj / ly;
            energy = 4.0 * qi_qj_over_ly * sum_k;
            let log_term = ((two_pi * dz_over_lx).cosh() - (two_pi * dx_over_lx).cos()).ln();
            energy -= qi_qj_over_ly * log_term;
            energy -= qi_qj_over_ly * log_2;
        }
        energy /= units::FOUR_PI_E0;

        (energy, Vec3::zero())
    }
}

impl PairPotential for Lekner {
    fn energy_force(&self, pi: &Particle, pj: &Particle) -> Result<(f64, Vec3), String> {
        let rij = self.bc.displacement(&pi.position(), &pj.position());
        Ok(self.force_and_energy(&rij, pi.charge(), pj.charge()))
    }
}
