//! # Force Field Registry
//!
//! Maps unordered particle-specification pairs to the parameter tuples of
//! each pair-potential family. Lookup is symmetric in the pair, and all
//! parameters are frozen after load. The interactor, the integrators and
//! the potentials share one registry through `Arc<ForceField>`.
//!
//! The registry can be populated programmatically or from a TOML
//! description:
//!
//! ```toml
//! eps-inside-cutoff = 78.5
//! eps-beyond-cutoff = 78.5
//!
//! [[lj]]
//! specs = ["Ar", "Ar"]
//! c12 = 1.0e-5
//! c6 = 1.0e-2
//!
//! [[hp]]
//! specs = ["PMU", "PMU"]
//! r0 = 0.2
//! fc = 1000.0
//!
//! [[electrostatics]]
//! specs = ["Na+", "Cl-"]
//! eps = 78.5
//!
//! [[sr]]
//! specs = ["W", "W"]
//! a = 25.0
//!
//! [[gauss]]
//! spec = "W"
//! sigma = 0.2
//! ```

pub mod tests;

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Unordered specification-name pair, the lookup key of every table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PairKey(String, String);

impl PairKey {
    /// Builds the canonical (lexicographically ordered) key.
    pub fn new(spec_a: &str, spec_b: &str) -> Self {
        if spec_a <= spec_b {
            PairKey(spec_a.to_string(), spec_b.to_string())
        } else {
            PairKey(spec_b.to_string(), spec_a.to_string())
        }
    }
}

fn missing(table: &str, a: &str, b: &str) -> String {
    format!("({}, {}): no {} parameters for this spec pair.", a, b, table)
}

/// Per-pair interaction parameters for all potential families.
#[derive(Debug, Clone, Default)]
pub struct ForceField {
    lj: HashMap<PairKey, (f64, f64)>,
    electrostatic_eps: HashMap<PairKey, f64>,
    harmonic: HashMap<PairKey, (f64, f64)>,
    halve_attractive_harmonic: HashMap<PairKey, (f64, f64)>,
    halve_attractive_quartic: HashMap<PairKey, (f64, f64)>,
    soft_repulsion: HashMap<PairKey, f64>,
    gauss_sigma: HashMap<String, f64>,
    eps_inside_cutoff: f64,
    eps_beyond_cutoff: f64,
}

impl ForceField {
    pub fn new() -> Self {
        ForceField {
            eps_inside_cutoff: 1.0,
            eps_beyond_cutoff: 78.5,
            ..Default::default()
        }
    }

    /// Loads a force field from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Parses a force field from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, Box<dyn std::error::Error>> {
        #[derive(Deserialize)]
        struct PairEntry {
            specs: [String; 2],
            #[serde(default)]
            c12: f64,
            #[serde(default)]
            c6: f64,
            #[serde(default)]
            r0: f64,
            #[serde(default)]
            fc: f64,
            #[serde(default)]
            eps: f64,
            #[serde(default)]
            a: f64,
        }

        #[derive(Deserialize)]
        struct GaussEntry {
            spec: String,
            sigma: f64,
        }

        #[derive(Deserialize)]
        struct FfFile {
            #[serde(default, rename = "eps-inside-cutoff")]
            eps_inside_cutoff: Option<f64>,
            #[serde(default, rename = "eps-beyond-cutoff")]
            eps_beyond_cutoff: Option<f64>,
            #[serde(default)]
            lj: Vec<PairEntry>,
            #[serde(default)]
            electrostatics: Vec<PairEntry>,
            #[serde(default)]
            hp: Vec<PairEntry>,
            #[serde(default, rename = "ha-hp")]
            ha_hp: Vec<PairEntry>,
            #[serde(default, rename = "ha-qp")]
            ha_qp: Vec<PairEntry>,
            #[serde(default)]
            sr: Vec<PairEntry>,
            #[serde(default)]
            gauss: Vec<GaussEntry>,
        }

        let file: FfFile = toml::from_str(text)?;
        let mut ff = ForceField::new();
        if let Some(eps) = file.eps_inside_cutoff {
            ff.eps_inside_cutoff = eps;
        }
        if let Some(eps) = file.eps_beyond_cutoff {
            ff.eps_beyond_cutoff = eps;
        }
        for e in file.lj {
            ff.add_lennard_jones(&e.specs[0], &e.specs[1], e.c12, e.c6);
        }
        for e in file.electrostatics {
            ff.add_electrostatic_eps(&e.specs[0], &e.specs[1], e.eps);
        }
        for e in file.hp {
            ff.add_harmonic(&e.specs[0], &e.specs[1], e.r0, e.fc);
        }
        for e in file.ha_hp {
            ff.add_halve_attractive_harmonic(&e.specs[0], &e.specs[1], e.r0, e.fc);
        }
        for e in file.ha_qp {
            ff.add_halve_attractive_quartic(&e.specs[0], &e.specs[1], e.r0, e.fc);
        }
        for e in file.sr {
            ff.add_soft_repulsion(&e.specs[0], &e.specs[1], e.a);
        }
        for e in file.gauss {
            ff.add_gauss_width(&e.spec, e.sigma);
        }
        Ok(ff)
    }

    pub fn add_lennard_jones(&mut self, spec_a: &str, spec_b: &str, c12: f64, c6: f64) {
        self.lj.insert(PairKey::new(spec_a, spec_b), (c12, c6));
    }

    /// Relative permittivity inside the cutoff for the given pair, used by
    /// the Coulombic potentials (SF, SC, hard-sphere variants).
    pub fn add_electrostatic_eps(&mut self, spec_a: &str, spec_b: &str, eps: f64) {
        if eps <= 0.0 {
            panic!("({}, {}): relative permittivity must be > 0.", spec_a, spec_b);
        }
        self.electrostatic_eps
            .insert(PairKey::new(spec_a, spec_b), eps);
    }

    pub fn add_harmonic(&mut self, spec_a: &str, spec_b: &str, r0: f64, fc: f64) {
        self.harmonic.insert(PairKey::new(spec_a, spec_b), (r0, fc));
    }

    pub fn add_halve_attractive_harmonic(&mut self, spec_a: &str, spec_b: &str, r0: f64, fc: f64) {
        self.halve_attractive_harmonic
            .insert(PairKey::new(spec_a, spec_b), (r0, fc));
    }

    pub fn add_halve_attractive_quartic(&mut self, spec_a: &str, spec_b: &str, r0: f64, fc: f64) {
        self.halve_attractive_quartic
            .insert(PairKey::new(spec_a, spec_b), (r0, fc));
    }

    pub fn add_soft_repulsion(&mut self, spec_a: &str, spec_b: &str, a_ij: f64) {
        self.soft_repulsion.insert(PairKey::new(spec_a, spec_b), a_ij);
    }

    /// Gaussian charge-density width for one specification.
    pub fn add_gauss_width(&mut self, spec: &str, sigma: f64) {
        self.gauss_sigma.insert(spec.to_string(), sigma);
    }

    pub fn set_eps_inside_cutoff(&mut self, eps: f64) {
        self.eps_inside_cutoff = eps;
    }

    pub fn set_eps_beyond_cutoff(&mut self, eps: f64) {
        self.eps_beyond_cutoff = eps;
    }

    pub fn lennard_jones(&self, spec_a: &str, spec_b: &str) -> Result<(f64, f64), String> {
        self.lj
            .get(&PairKey::new(spec_a, spec_b))
            .copied()
            .ok_or_else(|| missing("Lennard-Jones", spec_a, spec_b))
    }

    /// Permittivity inside the cutoff for the shifted-force electrostatic.
    pub fn shifted_force(&self, spec_a: &str, spec_b: &str) -> Result<f64, String> {
        self.electrostatic_eps
            .get(&PairKey::new(spec_a, spec_b))
            .copied()
            .ok_or_else(|| missing("shifted-force electrostatic", spec_a, spec_b))
    }

    /// Permittivity for the plain screened Coulomb interaction.
    pub fn screened_coulomb(&self, spec_a: &str, spec_b: &str) -> Result<f64, String> {
        self.electrostatic_eps
            .get(&PairKey::new(spec_a, spec_b))
            .copied()
            .ok_or_else(|| missing("screened Coulomb", spec_a, spec_b))
    }

    /// Inner and outer permittivity for the reaction-field interaction.
    pub fn reaction_field(&self, spec_a: &str, spec_b: &str) -> Result<(f64, f64), String> {
        let inside = self
            .electrostatic_eps
            .get(&PairKey::new(spec_a, spec_b))
            .copied()
            .unwrap_or(self.eps_inside_cutoff);
        Ok((inside, self.eps_beyond_cutoff))
    }

    pub fn relative_permittivity_inside_cutoff(&self) -> f64 {
        self.eps_inside_cutoff
    }

    pub fn relative_permittivity_beyond_cutoff(&self) -> f64 {
        self.eps_beyond_cutoff
    }

    pub fn harmonic(&self, spec_a: &str, spec_b: &str) -> Result<(f64, f64), String> {
        self.harmonic
            .get(&PairKey::new(spec_a, spec_b))
            .copied()
            .ok_or_else(|| missing("harmonic", spec_a, spec_b))
    }

    pub fn halve_attractive_harmonic(
        &self,
        spec_a: &str,
        spec_b: &str,
    ) -> Result<(f64, f64), String> {
        self.halve_attractive_harmonic
            .get(&PairKey::new(spec_a, spec_b))
            .copied()
            .ok_or_else(|| missing("halve-attractive harmonic", spec_a, spec_b))
    }

    pub fn halve_attractive_quartic(
        &self,
        spec_a: &str,
        spec_b: &str,
    ) -> Result<(f64, f64), String> {
        self.halve_attractive_quartic
            .get(&PairKey::new(spec_a, spec_b))
            .copied()
            .ok_or_else(|| missing("halve-attractive quartic", spec_a, spec_b))
    }

    pub fn soft_repulsion(&self, spec_a: &str, spec_b: &str) -> Result<f64, String> {
        self.soft_repulsion
            .get(&PairKey::new(spec_a, spec_b))
            .copied()
            .ok_or_else(|| missing("soft repulsion", spec_a, spec_b))
    }

    /// Harmonic plus soft-repulsion parameters (r0, fc, a_ij).
    pub fn harmonic_soft_repulsion(
        &self,
        spec_a: &str,
        spec_b: &str,
    ) -> Result<(f64, f64, f64), String> {
        let (r0, fc) = self.harmonic(spec_a, spec_b)?;
        let a_ij = self.soft_repulsion(spec_a, spec_b)?;
        Ok((r0, fc, a_ij))
    }

    /// Gaussian charge-density widths of the two specifications.
    pub fn gaussian_charge_density(
        &self,
        spec_a: &str,
        spec_b: &str,
    ) -> Result<(f64, f64), String> {
        let sigma_a = self
            .gauss_sigma
            .get(spec_a)
            .copied()
            .ok_or_else(|| format!("{}: no Gaussian charge-density width.", spec_a))?;
        let sigma_b = self
            .gauss_sigma
            .get(spec_b)
            .copied()
            .ok_or_else(|| format!("{}: no Gaussian charge-density width.", spec_b))?;
        Ok((sigma_a, sigma_b))
    }
}
