//! Deterministic velocity-Verlet integration.

use super::{check_finite_forces, kinetic_energy, temperature, Displacer, SimulationData};
use crate::interactor::Interactor;
use crate::param::Parameters;
use crate::particle::system::ParticleSystem;
use crate::vector::Vec3;

/// Plain velocity Verlet. DPD with γ = 0 agrees with this integrator to
/// O(dt²).
pub struct VelocityVerlet {
    dt: f64,
    interactor: Interactor,
    fi_old: Vec<Vec3>,
    step: u64,
}

impl VelocityVerlet {
    /// Reads `simulation.timestep` from the parameters.
    pub fn new(param: &Parameters, interactor: Interactor) -> Result<Self, String> {
        let dt = param.real("simulation.timestep")?;
        if dt <= 0.0 {
            return Err(format!("{}: time step must be > 0.", dt));
        }
        Ok(VelocityVerlet {
            dt,
            interactor,
            fi_old: Vec::new(),
            step: 0,
        })
    }
}

impl Displacer for VelocityVerlet {
    fn displace(&mut self, system: &mut ParticleSystem) -> Result<SimulationData, String> {
        self.step += 1;

        if self.step == 1 {
            self.fi_old = vec![Vec3::zero(); system.number_of_particles()];
            self.interactor.interact(system)?;
        }

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

        let epot = self.interactor.interact(system)?;
        check_finite_forces(system.particles())?;

        for p in system.particles_mut() {
            let index = p.index();
            if p.is_frozen() {
                continue;
            }
            let v = p.velocity() + (0.5 * dt / p.mass()) * (self.fi_old[index] + p.force());
            p.set_velocity(v);
        }

        let ekin = kinetic_energy(system.particles());
        Ok(SimulationData {
            kinetic: ekin,
            potential: epot,
            temperature: temperature(system.particles(), ekin),
            total_momentum: system.linear_momentum().norm(),
        })
    }

    fn complete(&self) -> Result<(), String> {
        self.interactor.complete_externals()
    }
}
