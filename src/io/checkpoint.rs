//! Binary checkpoints of the full particle system.

use crate::particle::system::ParticleSystem;
use std::path::Path;

/// Saves the particle system as a bincode checkpoint for restarts.
pub fn save(path: &Path, system: &ParticleSystem) -> Result<(), Box<dyn std::error::Error>> {
    let writer = crate::io::open_output(path)?;
    bincode::serialize_into(writer, system)?;
    Ok(())
}

/// Loads a particle system from a bincode checkpoint.
pub fn load(path: &Path) -> Result<ParticleSystem, Box<dyn std::error::Error>> {
    let reader = crate::io::open_input(path)?;
    let system = bincode::deserialize_from(reader)?;
    Ok(system)
}
