//! Group dipole moments.

use super::Analyzer;
use crate::particle::system::ParticleSystem;
use crate::units;
use crate::vector::Vec3;

/// Histograms the dipole moment magnitude of every particle group and
/// tracks the running average of M².
pub struct DipoleMoment {
    bin_width: f64,
    histogram: Vec<usize>,
    sum_m2: f64,
    observations: usize,
}

impl DipoleMoment {
    /// # Arguments
    /// * `bin_width` - Histogram bin width, e nm.
    /// * `m_max` - Largest binned dipole moment, e nm.
    pub fn new(bin_width: f64, m_max: f64) -> Self {
        let n_bins = (m_max / bin_width).ceil() as usize;
        DipoleMoment {
            bin_width,
            histogram: vec![0; n_bins],
            sum_m2: 0.0,
            observations: 0,
        }
    }

    /// Histogram rows of (dipole moment, count).
    pub fn results(&self) -> Vec<(f64, usize)> {
        self.histogram
            .iter()
            .enumerate()
            .map(|(i, count)| (i as f64 * self.bin_width, *count))
            .collect()
    }

    /// Running average of the squared total dipole moment, (e nm)².
    pub fn average_m2(&self) -> f64 {
        if self.observations == 0 {
            0.0
        } else {
            self.sum_m2 / self.observations as f64
        }
    }

    /// Fröhlich estimate of the relative permittivity from the average
    /// squared dipole moment at the given temperature.
    pub fn frohlich(ave_m2: f64, temperature: f64, volume: f64) -> f64 {
        let kt = units::KB * temperature;
        let h = 1.0 / (units::E0 * volume) * ave_m2 / (3.0 * kt);
        let a = 2.0;
        let b = -1.0 - 3.0 * h;
        let c = -1.0;
        let discriminant = b * b - 4.0 * a * c;
        (-b + discriminant.sqrt()) / (2.0 * a)
    }
}

impl Analyzer for DipoleMoment {
    fn perform(&mut self, system: &ParticleSystem) {
        let particles = system.particles();
        let mut total = Vec3::zero();
        for group in system.groups() {
            let center = group.position(particles);
            let mut m = Vec3::zero();
            for &i in group.members() {
                let p = &particles[i];
                m += p.charge() * (p.position() - center);
            }
            total += m;
            let index = (m.norm() / self.bin_width) as usize;
            if index < self.histogram.len() {
                self.histogram[index] += 1;
            }
        }
        self.sum_m2 += total.norm_squared();
        self.observations += 1;
    }
}
