//! # Simulation Engine
//!
//! Drives a displacer over a particle system for a configured number of
//! steps, with snapshot capture at a configurable interval. Snapshots are
//! transmitted over an MPSC channel so that trajectory I/O runs on a
//! dedicated receiver thread and never stalls the integration loop.

use crate::displacer::{Displacer, SimulationData};
use crate::particle::system::ParticleSystem;
use crate::vector::Vec3;
use serde::{Deserialize, Serialize};
use std::sync::mpsc;

/// Temporal snapshot of the simulation state.
///
/// All particle states in a snapshot represent the exact same step, so
/// spatial and velocity correlations are preserved for analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    /// Step number when this snapshot was captured.
    pub step: u64,
    /// Simulation time, ps.
    pub timestamp: f64,
    /// Per-particle position and velocity.
    pub states: Vec<(Vec3, Vec3)>,
    /// Step diagnostics.
    pub data: SimulationData,
}

/// The integration loop.
pub struct Engine {
    system: ParticleSystem,
    displacer: Box<dyn Displacer>,
    dt: f64,
    step_count: u64,
    current_time: f64,
    frame_sender: Option<mpsc::Sender<SimulationSnapshot>>,
    frame_interval: u64,
}

impl Engine {
    /// # Arguments
    /// * `frame_interval` - Snapshot capture frequency (every N steps).
    ///
    /// # Panics
    ///
    /// Panics on an empty particle system or a zero frame interval.
    pub fn new(
        system: ParticleSystem,
        displacer: Box<dyn Displacer>,
        dt: f64,
        frame_sender: Option<mpsc::Sender<SimulationSnapshot>>,
        frame_interval: u64,
    ) -> Self {
        if system.number_of_particles() < 1 {
            panic!("Simulation requires at least one particle.");
        }
        if frame_interval == 0 {
            panic!("Frame interval must be > 0.");
        }
        Engine {
            system,
            displacer,
            dt,
            step_count: 0,
            current_time: 0.0,
            frame_sender,
            frame_interval,
        }
    }

    /// Returns the current step count.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Returns the current simulation time.
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Read access to the particle system.
    pub fn system(&self) -> &ParticleSystem {
        &self.system
    }

    /// Consumes the engine, handing the particle system back.
    pub fn into_system(self) -> ParticleSystem {
        self.system
    }

    /// Finishes the run: flushes accumulated external-potential output.
    pub fn complete(&self) -> Result<(), String> {
        self.displacer.complete()
    }

    /// Runs `n_steps` steps, returning the last step's diagnostics.
    ///
    /// A step failure aborts the run immediately; completed steps are
    /// not rolled back.
    pub fn run(&mut self, n_steps: u64) -> Result<SimulationData, String> {
        let mut last = SimulationData::default();
        for _ in 0..n_steps {
            last = self.step()?;

            // Send frame data if interval reached
            if self.step_count % self.frame_interval == 0 {
                self.send_frame_data(last);
            }
        }
        Ok(last)
    }

    /// Advances the simulation by one time step.
    fn step(&mut self) -> Result<SimulationData, String> {
        let data = self.displacer.displace(&mut self.system)?;
        self.step_count += 1;
        self.current_time += self.dt;
        if self.step_count % 100 == 0 {
            log::info!(
                "step {}: epot = {:.6}, ekin = {:.6}, T = {:.3}",
                self.step_count,
                data.potential,
                data.kinetic,
                data.temperature
            );
        }
        Ok(data)
    }

    /// Transmits the current state through the snapshot channel.
    ///
    /// Non-blocking send: if the receiver is gone, the simulation just
    /// continues.
    fn send_frame_data(&self, data: SimulationData) {
        if let Some(sender) = &self.frame_sender {
            let frame = SimulationSnapshot {
                step: self.step_count,
                timestamp: self.current_time,
                states: self
                    .system
                    .particles()
                    .iter()
                    .map(|p| (p.position(), p.velocity()))
                    .collect(),
                data,
            };
            if let Err(err) = sender.send(frame) {
                log::error!("Failed to send frame data: {}", err);
            }
        }
    }
}
