//! Particle species specifications and their catalog.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Constant per-species data. Never mutated after registration in a
/// catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleSpec {
    name: String,
    mass: f64,
    charge: f64,
    radius: f64,
    protonatable: bool,
}

impl ParticleSpec {
    /// Creates a new specification.
    ///
    /// # Panics
    ///
    /// Panics when mass or radius is not positive; every downstream
    /// integrator divides by the mass.
    pub fn new(name: &str, mass: f64, charge: f64, radius: f64, protonatable: bool) -> Self {
        if name.is_empty() {
            panic!("A particle specification name must be provided.");
        }
        if mass <= 0.0 {
            panic!("{}: specification mass must be > 0.", name);
        }
        if radius < 0.0 {
            panic!("{}: specification radius must be >= 0.", name);
        }
        ParticleSpec {
            name: name.to_string(),
            mass,
            charge,
            radius,
            protonatable,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mass, in u.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Charge, in e.
    pub fn charge(&self) -> f64 {
        self.charge
    }

    /// Radius, in nm.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn is_protonatable(&self) -> bool {
        self.protonatable
    }
}

/// Catalog of particle specifications keyed by name. Frozen after load.
#[derive(Debug, Clone, Default)]
pub struct SpecCatalog {
    specs: BTreeMap<String, Arc<ParticleSpec>>,
}

impl SpecCatalog {
    pub fn new() -> Self {
        SpecCatalog {
            specs: BTreeMap::new(),
        }
    }

    /// Registers a specification. Replaces any previous entry of the same
    /// name.
    pub fn add(&mut self, spec: ParticleSpec) -> Arc<ParticleSpec> {
        let handle = Arc::new(spec);
        self.specs.insert(handle.name().to_string(), handle.clone());
        handle
    }

    /// Looks up a specification by name.
    pub fn find(&self, name: &str) -> Result<Arc<ParticleSpec>, String> {
        self.specs
            .get(name)
            .cloned()
            .ok_or_else(|| format!("{}: no such particle specification.", name))
    }

    /// Iterates over all specifications in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<ParticleSpec>> {
        self.specs.values()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
