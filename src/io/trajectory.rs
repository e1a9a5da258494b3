//! Trajectory streams.
//!
//! A trajectory is a sequence of state frames, each consisting of one
//! line per particle with the position and velocity triples. Frames are
//! read sequentially; the loop terminates on stream EOF.

use crate::engine::SimulationSnapshot;
use crate::particle::system::ParticleSystem;
use crate::vector::Vec3;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

/// Appends the current state of the system as one frame.
pub fn write_frame<W: Write>(stream: &mut W, system: &ParticleSystem) -> std::io::Result<()> {
    for p in system.particles() {
        writeln!(stream, "{} {}", p.position(), p.velocity())?;
    }
    Ok(())
}

/// Appends a snapshot as one frame.
pub fn write_snapshot<W: Write>(
    stream: &mut W,
    snapshot: &SimulationSnapshot,
) -> std::io::Result<()> {
    for (r, v) in &snapshot.states {
        writeln!(stream, "{} {}", r, v)?;
    }
    Ok(())
}

/// Reads the next frame into the system's particle states.
///
/// Returns `Ok(false)` on a clean EOF before the frame starts; a frame
/// truncated mid-way is an error.
pub fn read_frame<R: BufRead>(
    stream: &mut R,
    system: &mut ParticleSystem,
) -> Result<bool, String> {
    let n = system.number_of_particles();
    let mut states = Vec::with_capacity(n);
    let mut line = String::new();
    while states.len() < n {
        line.clear();
        let read = stream
            .read_line(&mut line)
            .map_err(|e| format!("Trajectory read failed: {}", e))?;
        if read == 0 {
            if states.is_empty() {
                return Ok(false);
            }
            return Err(format!(
                "Trajectory frame truncated: {} of {} particle states.",
                states.len(),
                n
            ));
        }
        if line.trim().is_empty() {
            continue;
        }
        let values: Result<Vec<f64>, _> =
            line.split_whitespace().map(|t| t.parse::<f64>()).collect();
        let values = values.map_err(|e| format!("{}: bad trajectory line: {}", line.trim(), e))?;
        if values.len() != 6 {
            return Err(format!(
                "{}: trajectory line must hold 6 values.",
                line.trim()
            ));
        }
        states.push((
            Vec3::new(values[0], values[1], values[2]),
            Vec3::new(values[3], values[4], values[5]),
        ));
    }
    for (p, (r, v)) in system.particles_mut().iter_mut().zip(states) {
        p.set_position(r);
        p.set_velocity(v);
    }
    Ok(true)
}

/// Starts a background receiver thread that appends every snapshot
/// arriving on the channel to the trajectory file. The thread runs until
/// all senders are dropped.
pub fn start_receiver_thread(
    rx: mpsc::Receiver<SimulationSnapshot>,
    path: PathBuf,
) -> thread::JoinHandle<Result<(), String>> {
    thread::spawn(move || {
        let mut writer = crate::io::open_output(&path).map_err(|e| e.to_string())?;
        while let Ok(snapshot) = rx.recv() {
            write_snapshot(&mut writer, &snapshot).map_err(|e| e.to_string())?;
        }
        Ok(())
    })
}
