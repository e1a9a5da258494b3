//! # Trajectory Analyzers
//!
//! Analyzers consume state frames from a trajectory stream, after a
//! configurable skip prefix, and accumulate their statistics over the
//! remaining frames.

pub mod dipole;
pub mod distance;
pub mod gr;
pub mod msd;
pub mod tests;

use crate::io::trajectory;
use crate::particle::system::ParticleSystem;
use std::io::BufRead;

/// One observation per trajectory frame.
pub trait Analyzer {
    fn perform(&mut self, system: &ParticleSystem);
}

/// Feeds every frame of a trajectory stream through an analyzer,
/// skipping the first `skip` frames. The loop terminates on stream EOF.
/// Returns the number of analyzed frames.
pub fn analyze<R: BufRead>(
    analyzer: &mut dyn Analyzer,
    system: &mut ParticleSystem,
    reader: &mut R,
    skip: usize,
) -> Result<usize, String> {
    let mut frame = 0usize;
    let mut analyzed = 0usize;
    while trajectory::read_frame(reader, system)? {
        frame += 1;
        if frame <= skip {
            continue;
        }
        analyzer.perform(system);
        analyzed += 1;
    }
    log::info!("{} frames read, {} analyzed.", frame, analyzed);
    Ok(analyzed)
}
