//! Physical constants in molecular units (MU) and algorithmic constants.
//!
//! Molecular units:
//! - Time: ps
//! - Distance, position: nm
//! - Velocity: nm/ps
//! - Mass: u (unified atomic mass unit)
//! - Energy: kJ/mol = (u nm²)/(ps²)
//! - Force: kJ/(mol nm) = (u nm)/(ps²)
//! - Charge: e
//!
//! The values below are derived from CODATA SI values and are the energy and
//! force scales every potential in this crate works in.

/// Elementary charge, in e.
pub const E: f64 = 1.0;

/// Electric constant (vacuum permittivity), in (mol e²)/(kJ nm).
pub const E0: f64 = 5.727656e-4;

/// 4π·ε0, in (mol e²)/(kJ nm).
pub const FOUR_PI_E0: f64 = 4.0 * std::f64::consts::PI * E0;

/// Electric factor 1/(4π·ε0), in (kJ nm)/(mol e²).
pub const F_EL: f64 = 1.0 / FOUR_PI_E0;

/// Boltzmann constant, in kJ/(mol K).
pub const KB: f64 = 8.314462618e-3;

/// Molar gas constant, in kJ/(mol K).
pub const R: f64 = KB;

/// Value of kT at room temperature (298.15 K), in kJ/mol.
pub const KT_ROOM: f64 = KB * 298.15;

/// Proton mass, in u.
pub const PROTON_MASS: f64 = 1.007276466;

/// Proton charge, in e.
pub const PROTON_CHARGE: f64 = 1.0;

/// Conversion from V to kJ/(mol e).
pub const V_TO_KJ_MOL_E: f64 = 96.48533212;

/// Conversion from e·nm (dipole moment) to Debye.
pub const E_NM_TO_DEBYE: f64 = 48.0320467;

/// Ångström to nm.
pub const ANGSTROM_TO_NM: f64 = 0.1;

/// A very large positive number, the energy returned on hard-sphere overlap
/// and on Stern-layer violation.
pub const LARGE: f64 = 1.0e+30;

/// A small positive real number, below which a distance counts as zero.
pub const SMALL: f64 = 1.0e-10;

/// Minimum number of particles before the non-bonded pair-list driver
/// switches from sequential to parallel evaluation.
pub const MIN_PARTICLES_PARALLEL: usize = 500;
