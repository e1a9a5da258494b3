//! Particle system and specification catalog text formats.
//!
//! Particle system:
//! ```text
//! N
//! name spec-name id x y z vx vy vz     (N lines)
//! G
//! size id1 id2 ...                     (G lines)
//! ```
//!
//! Catalog:
//! ```text
//! N
//! name mass charge radius protonatable  (N lines, flag 0 or 1)
//! ```

use crate::particle::cell::SimBox;
use crate::particle::group::ParticleGroup;
use crate::particle::spec::{ParticleSpec, SpecCatalog};
use crate::particle::system::ParticleSystem;
use crate::vector::Vec3;
use std::collections::HashMap;
use std::io::{BufRead, Write};

/// Writes the specification catalog.
pub fn write_catalog<W: Write>(stream: &mut W, catalog: &SpecCatalog) -> std::io::Result<()> {
    writeln!(stream, "{}", catalog.len())?;
    for spec in catalog.iter() {
        writeln!(
            stream,
            "{} {:.10e} {:.10e} {:.10e} {}",
            spec.name(),
            spec.mass(),
            spec.charge(),
            spec.radius(),
            if spec.is_protonatable() { 1 } else { 0 }
        )?;
    }
    Ok(())
}

/// Parses a specification catalog.
pub fn read_catalog<R: BufRead>(stream: &mut R) -> Result<SpecCatalog, String> {
    let mut lines = stream.lines();
    let count: usize = next_line(&mut lines)?
        .trim()
        .parse()
        .map_err(|e| format!("Bad catalog count: {}", e))?;

    let mut catalog = SpecCatalog::new();
    for _ in 0..count {
        let line = next_line(&mut lines)?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 5 {
            return Err(format!("{}: malformed catalog line.", line));
        }
        let mass = parse_real(tokens[1], "mass")?;
        let charge = parse_real(tokens[2], "charge")?;
        let radius = parse_real(tokens[3], "radius")?;
        let protonatable = tokens[4] == "1" || tokens[4] == "true";
        catalog.add(ParticleSpec::new(
            tokens[0],
            mass,
            charge,
            radius,
            protonatable,
        ));
    }
    Ok(catalog)
}

/// Writes a particle system in the legacy text format.
pub fn write_system<W: Write>(stream: &mut W, system: &ParticleSystem) -> std::io::Result<()> {
    writeln!(stream, "{}", system.number_of_particles())?;
    for p in system.particles() {
        let r = p.position();
        let v = p.velocity();
        writeln!(
            stream,
            "{} {} {} {} {}",
            p.name(),
            p.spec().name(),
            p.id(),
            r,
            v
        )?;
    }
    writeln!(stream, "{}", system.groups().len())?;
    for group in system.groups() {
        write!(stream, "{}", group.members().len())?;
        for &m in group.members() {
            write!(stream, " {}", system.particles()[m].id())?;
        }
        writeln!(stream)?;
    }
    Ok(())
}

/// Parses a particle system, resolving specifications in the catalog.
pub fn read_system<R: BufRead>(
    stream: &mut R,
    catalog: &SpecCatalog,
    simbox: SimBox,
) -> Result<ParticleSystem, String> {
    let mut lines = stream.lines();
    let count: usize = next_line(&mut lines)?
        .trim()
        .parse()
        .map_err(|e| format!("Bad particle count: {}", e))?;

    let mut system = ParticleSystem::new(simbox);
    let mut index_of: HashMap<String, usize> = HashMap::new();
    for _ in 0..count {
        let line = next_line(&mut lines)?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 9 {
            return Err(format!("{}: malformed particle line.", line));
        }
        let name = tokens[0];
        let spec = catalog.find(tokens[1])?;
        let id = tokens[2];
        let r = Vec3::new(
            parse_real(tokens[3], "x")?,
            parse_real(tokens[4], "y")?,
            parse_real(tokens[5], "z")?,
        );
        let v = Vec3::new(
            parse_real(tokens[6], "vx")?,
            parse_real(tokens[7], "vy")?,
            parse_real(tokens[8], "vz")?,
        );
        let index = system.add_particle(id, name, spec);
        if index_of.insert(id.to_string(), index).is_some() {
            return Err(format!("{}: duplicate particle identifier.", id));
        }
        system.particles_mut()[index].set_position(r);
        system.particles_mut()[index].set_velocity(v);
    }

    // Groups follow as a list with group size and member ids.
    let n_groups: usize = match lines.next() {
        Some(line) => line
            .map_err(|e| format!("Read failed: {}", e))?
            .trim()
            .parse()
            .map_err(|e| format!("Bad group count: {}", e))?,
        None => 0,
    };
    for _ in 0..n_groups {
        let line = next_line(&mut lines)?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            return Err("Empty group line.".to_string());
        }
        let size: usize = tokens[0]
            .parse()
            .map_err(|e| format!("Bad group size: {}", e))?;
        if tokens.len() != size + 1 {
            return Err(format!("{}: group line does not match its size.", line));
        }
        let mut members = Vec::with_capacity(size);
        for id in &tokens[1..] {
            let index = index_of
                .get(*id)
                .ok_or_else(|| format!("{}: unknown group member.", id))?;
            members.push(*index);
        }
        system.add_group(ParticleGroup::chain(members));
    }
    Ok(system)
}

fn next_line<B: BufRead>(lines: &mut std::io::Lines<B>) -> Result<String, String> {
    loop {
        match lines.next() {
            Some(Ok(line)) => {
                if !line.trim().is_empty() {
                    return Ok(line);
                }
            }
            Some(Err(e)) => return Err(format!("Read failed: {}", e)),
            None => return Err("Unexpected end of stream.".to_string()),
        }
    }
}

fn parse_real(token: &str, what: &str) -> Result<f64, String> {
    token
        .parse()
        .map_err(|e| format!("{}: bad {} value: {}", token, what, e))
}
