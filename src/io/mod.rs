//! # IO Module - Model, Trajectory and Checkpoint Persistence
//!
//! Text formats for particle systems, specification catalogs and
//! trajectories, matching the legacy streams so that any file this crate
//! emits round-trips through its own readers. Binary checkpoints use
//! bincode.

pub mod checkpoint;
pub mod system;
pub mod trajectory;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Opens a buffered reader for a text input file.
pub fn open_input(path: &Path) -> Result<BufReader<File>, Box<dyn std::error::Error>> {
    let file = File::open(path)
        .map_err(|e| format!("{}: cannot open input file: {}", path.display(), e))?;
    Ok(BufReader::new(file))
}

/// Opens a buffered writer for an output file, creating parent
/// directories as needed.
pub fn open_output(path: &Path) -> Result<BufWriter<File>, Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)
        .map_err(|e| format!("{}: cannot create output file: {}", path.display(), e))?;
    Ok(BufWriter::new(file))
}
