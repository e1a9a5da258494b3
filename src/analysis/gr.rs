//! Radial distribution function g(r).

use super::Analyzer;
use crate::boundary::BoundaryCondition;
use crate::particle::system::ParticleSystem;
use std::f64::consts::PI;
use std::sync::Arc;

/// Calculates g(r) between particles of two specifications.
pub struct Gr {
    dr: f64,
    r_max: f64,
    spec_name_1: String,
    spec_name_2: String,
    bc: Arc<dyn BoundaryCondition>,
    counter: usize,
    hr: Vec<f64>,
    volume: f64,
    n_particles_1: usize,
    n_particles_2: usize,
}

impl Gr {
    /// # Panics
    ///
    /// Panics on empty specification names.
    pub fn new(
        dr: f64,
        cutoff: f64,
        spec_name_1: &str,
        spec_name_2: &str,
        bc: Arc<dyn BoundaryCondition>,
    ) -> Self {
        if spec_name_1.is_empty() || spec_name_2.is_empty() {
            panic!("g(r): two particle specification names must be provided.");
        }
        let n_bins = (cutoff / dr) as usize;
        Gr {
            dr,
            r_max: cutoff,
            spec_name_1: spec_name_1.to_string(),
            spec_name_2: spec_name_2.to_string(),
            bc,
            counter: 0,
            hr: vec![0.0; n_bins],
            volume: 0.0,
            n_particles_1: 0,
            n_particles_2: 0,
        }
    }

    fn bin_pairs(&mut self, system: &ParticleSystem) {
        let rc2 = self.r_max * self.r_max;
        let particles = system.particles();
        for (i, pi) in particles.iter().enumerate() {
            if pi.spec().name() != self.spec_name_1 {
                continue;
            }
            let ri = pi.position();
            for (j, pj) in particles.iter().enumerate() {
                if i == j || pj.spec().name() != self.spec_name_2 {
                    continue;
                }
                let rij = self.bc.displacement(&ri, &pj.position());
                let rij2 = rij.norm_squared();
                if rij2 < rc2 {
                    let index = (rij2.sqrt() / self.dr) as usize;
                    if index < self.hr.len() {
                        self.hr[index] += 1.0;
                    }
                }
            }
        }
    }

    /// Normalized g(r).
    ///
    /// See Friedman, "A course in statistical mechanics", Prentice Hall,
    /// 1985, p. 82, Eq. (4.20).
    pub fn results(&self) -> Vec<(f64, f64)> {
        let factor = 4.0 * PI / 3.0;
        // Number density of the second specification.
        let rho2 = self.n_particles_2 as f64 / self.volume;

        self.hr
            .iter()
            .enumerate()
            .map(|(i, h)| {
                // Volume of the current shell.
                let ri = i as f64 * self.dr;
                let rii = (i + 1) as f64 * self.dr;
                let dv = factor * (rii * rii * rii - ri * ri * ri);

                // Uncorrelated (ideal gas) count in the shell.
                let n2 = rho2 * dv;
                let g = if self.counter > 0 && self.n_particles_1 > 0 {
                    h / (n2 * (self.n_particles_1 * self.counter) as f64)
                } else {
                    0.0
                };
                (ri, g)
            })
            .collect()
    }
}

impl Analyzer for Gr {
    fn perform(&mut self, system: &ParticleSystem) {
        self.counter += 1;
        if self.counter == 1 {
            self.volume = system.simbox().volume();
            for p in system.particles() {
                if p.spec().name() == self.spec_name_1 {
                    self.n_particles_1 += 1;
                }
                if p.spec().name() == self.spec_name_2 {
                    self.n_particles_2 += 1;
                }
            }
            log::debug!(
                "{} of '{}', {} of '{}'.",
                self.n_particles_1,
                self.spec_name_1,
                self.n_particles_2,
                self.spec_name_2
            );
            if self.n_particles_1 == 0 || self.n_particles_2 == 0 {
                panic!(
                    "g(r): no particles of specification '{}' and/or '{}'.",
                    self.spec_name_1, self.spec_name_2
                );
            }
        }
        self.bin_pairs(system);
    }
}
