//! Dissipative particle dynamics.
//!
//! Employs the velocity-Verlet-with-prediction algorithm of Groot and
//! Warren, J. Chem. Phys. 107:4423, 1997. Random and dissipative pair
//! forces obey the fluctuation-dissipation relation: with friction γ and
//! temperature T, the random force amplitude is σ = √(2·γ·kB·T), both
//! weighted by w(r) = max(0, 1 − r/rc) as wR = w and wD = w².

use super::{check_finite_forces, kinetic_energy, temperature, Displacer, SimulationData};
use crate::interactor::Interactor;
use crate::param::Parameters;
use crate::particle::system::ParticleSystem;
use crate::units;
use crate::vector::Vec3;
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

pub struct Dpd {
    dt: f64,
    temperature: f64,
    gamma: f64,
    lambda: f64,
    cutoff: f64,
    interactor: Interactor,
    rng: StdRng,
    normal: Normal<f64>,
    /// Forces at time t(n), by particle index.
    fi_old: Vec<Vec3>,
    /// Velocities at time t(n), by particle index.
    vi_old: Vec<Vec3>,
    step: u64,
}

impl Dpd {
    /// Reads `simulation.timestep`, `simulation.temperature`,
    /// `simulation.gamma`, `simulation.dpd.lambda` and `forces.nb.cutoff`
    /// from the parameters. The random stream is seeded from
    /// `simulation.seed` when present, from OS entropy otherwise.
    pub fn new(param: &Parameters, interactor: Interactor) -> Result<Self, String> {
        let dt = param.real("simulation.timestep")?;
        let temperature = param.real("simulation.temperature")?;
        let gamma = param.real("simulation.gamma")?;
        let lambda = param.real("simulation.dpd.lambda")?;
        let cutoff = param.real("forces.nb.cutoff")?;
        if dt <= 0.0 {
            return Err(format!("{}: time step must be > 0.", dt));
        }
        let rng = match param.integer("simulation.seed") {
            Ok(seed) => StdRng::seed_from_u64(seed as u64),
            Err(_) => StdRng::from_os_rng(),
        };
        Ok(Dpd {
            dt,
            temperature,
            gamma,
            lambda,
            cutoff,
            interactor,
            rng,
            normal: Normal::new(0.0, 1.0).unwrap(),
            fi_old: Vec::new(),
            vi_old: Vec::new(),
            step: 0,
        })
    }

    /// Adds random and dissipative pair forces over all pair-list pairs,
    /// using the particles' current positions and velocities.
    fn random_dissipative_forces(&mut self, system: &mut ParticleSystem) {
        let sigma = (2.0 * self.gamma * units::KB * self.temperature).sqrt();
        let factor = 1.0 / self.dt.sqrt();
        let bc = self.interactor.bc();

        let pairs: Vec<(usize, usize)> = self.interactor.pair_list().pairs().to_vec();
        let particles = system.particles_mut();
        for (i, j) in pairs {
            let ri = particles[i].position();
            let rj = particles[j].position();
            let rij = bc.displacement(&ri, &rj);
            let dist = rij.norm();

            let mut w = 1.0 - dist / self.cutoff;
            if w < 0.0 {
                w = 0.0;
            }
            if w == 0.0 {
                continue;
            }
            let uv = crate::potentials::unit_vector(&rij, dist);
            let w_d = w * w;
            let w_r = w;

            let v = particles[i].velocity() - particles[j].velocity();
            let ip = uv.dot(&v);
            let wiener: f64 = self.normal.sample(&mut self.rng);

            let random_f = sigma * w_r * wiener * factor * uv;
            let dissipative_f = -self.gamma * w_d * ip * uv;
            let total = random_f + dissipative_f;

            particles[i].add_force(total);
            particles[j].add_force(-total);
        }
    }

    /// Stores the forces at t(n) and advances positions:
    /// r(t+dt) = r(t) + dt·v(t) + ½·dt²·f(t)/m.
    fn displace_positions(&mut self, system: &mut ParticleSystem) {
        let dt = self.dt;
        for p in system.particles_mut() {
            let index = p.index();
            self.fi_old[index] = p.force();
            if p.is_frozen() {
                continue;
            }
            let r = p.position() + dt * p.velocity() + (0.5 * dt * dt / p.mass()) * p.force();
            p.set_position(r);
        }
    }

    /// Writes the uncorrected velocity v*(t+dt) = v(t) + λ·dt·f(t)/m and
    /// stores v(t).
    fn displace_velocities_uncorrected(&mut self, system: &mut ParticleSystem) {
        let dt = self.dt;
        let lambda = self.lambda;
        for p in system.particles_mut() {
            let index = p.index();
            self.vi_old[index] = p.velocity();
            if p.is_frozen() {
                continue;
            }
            let v = p.velocity() + (lambda * dt / p.mass()) * self.fi_old[index];
            p.set_velocity(v);
        }
    }

    /// Corrects velocities with the average of the old and new forces:
    /// v(t+dt) = v(t) + ½·dt·(f(t) + f(t+dt))/m.
    fn correct_velocities(&mut self, system: &mut ParticleSystem) {
        let dt = self.dt;
        for p in system.particles_mut() {
            let index = p.index();
            if p.is_frozen() {
                continue;
            }
            let v = self.vi_old[index] + (0.5 * dt / p.mass()) * (self.fi_old[index] + p.force());
            p.set_velocity(v);
        }
    }
}

impl Displacer for Dpd {
    fn displace(&mut self, system: &mut ParticleSystem) -> Result<SimulationData, String> {
        self.step += 1;

        if self.step == 1 {
            let n = system.number_of_particles();
            self.fi_old = vec![Vec3::zero(); n];
            self.vi_old = vec![Vec3::zero(); n];

            // Initial conservative forces plus the stochastic pair
            // forces.
            self.interactor.interact(system)?;
            self.random_dissipative_forces(system);
        }

        self.displace_positions(system);
        self.displace_velocities_uncorrected(system);

        // Conservative forces and energies at the new positions.
        let epot = self.interactor.interact(system)?;

        // Random and dissipative forces from the uncorrected velocities
        // and positions at t(n+1).
        self.random_dissipative_forces(system);
        check_finite_forces(system.particles())?;

        self.correct_velocities(system);

        let ekin = kinetic_energy(system.particles());
        let data = SimulationData {
            kinetic: ekin,
            potential: epot,
            temperature: temperature(system.particles(), ekin),
            total_momentum: system.linear_momentum().norm(),
        };
        if !data.kinetic.is_finite() {
            return Err("Non-finite kinetic energy; the step is fatal.".to_string());
        }
        Ok(data)
    }

    fn complete(&self) -> Result<(), String> {
        self.interactor.complete_externals()
    }
}
