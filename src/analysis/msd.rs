//! Mean-squared displacement of particle groups.

use super::Analyzer;
use crate::particle::system::ParticleSystem;
use crate::vector::Vec3;
use std::collections::VecDeque;

/// Group mean-squared displacement over a sliding time window.
///
/// For every frame, displacements against all earlier frames within the
/// window of length τ contribute to the MSD at their time separation.
/// Systems without groups fall back to per-particle displacements.
pub struct Msd {
    dt: f64,
    n_window: usize,
    window: VecDeque<Vec<Vec3>>,
    msd: Vec<f64>,
    counts: Vec<usize>,
}

impl Msd {
    /// # Arguments
    /// * `dt` - Time interval between successive trajectory states, ps.
    /// * `tau` - Window length for the mean-squared displacement, ps.
    ///
    /// # Panics
    ///
    /// Panics when the window holds less than one interval.
    pub fn new(dt: f64, tau: f64) -> Self {
        let n_window = (tau / dt) as usize;
        if n_window < 1 {
            panic!("MSD window must span at least one time interval.");
        }
        Msd {
            dt,
            n_window,
            window: VecDeque::new(),
            msd: vec![0.0; n_window],
            counts: vec![0; n_window],
        }
    }

    fn centers(system: &ParticleSystem) -> Vec<Vec3> {
        if system.groups().is_empty() {
            system.particles().iter().map(|p| p.position()).collect()
        } else {
            system
                .groups()
                .iter()
                .map(|g| g.position(system.particles()))
                .collect()
        }
    }

    /// Rows of (time, msd).
    pub fn results(&self) -> Vec<(f64, f64)> {
        self.msd
            .iter()
            .zip(&self.counts)
            .enumerate()
            .map(|(k, (sum, count))| {
                let time = (k + 1) as f64 * self.dt;
                let value = if *count > 0 { sum / *count as f64 } else { 0.0 };
                (time, value)
            })
            .collect()
    }
}

impl Analyzer for Msd {
    fn perform(&mut self, system: &ParticleSystem) {
        let centers = Self::centers(system);

        for (age, earlier) in self.window.iter().rev().enumerate() {
            let separation = age + 1;
            if separation > self.n_window {
                break;
            }
            let mut sum = 0.0;
            for (now, then) in centers.iter().zip(earlier) {
                sum += (now - then).norm_squared();
            }
            self.msd[separation - 1] += sum / centers.len() as f64;
            self.counts[separation - 1] += 1;
        }

        self.window.push_back(centers);
        if self.window.len() > self.n_window {
            self.window.pop_front();
        }
    }
}
