//! # Boundary Conditions
//!
//! A boundary condition maps pair displacements to their minimum image,
//! reinjects drifted positions into the box, and reflects velocities on
//! boundary crossings. Variants:
//!
//! - [`NoBc`]: identity in all operations.
//! - [`pbc::Pbc`]: minimum image in all three axes.
//! - [`pbc_1d::Pbc1dBounceBack`]: periodic along one axis, bounce-back
//!   reflection (full velocity reversal) in the others.
//! - [`pbc_1d::Pbc1dSpecular`]: periodic along one axis, specular
//!   reflection in the others, with group-consistent reflection.
//! - [`pbc_2d::Pbc2d`]: periodic in two axes, stochastic reinjection in
//!   the third.
//!
//! All implementations are immutable after construction and shared by the
//! interactor, the integrators and the potentials through
//! `Arc<dyn BoundaryCondition>`.

pub mod pbc;
pub mod pbc_1d;
pub mod pbc_2d;
pub mod tests;

use crate::particle::group::ParticleGroup;
use crate::particle::Particle;
use crate::vector::Vec3;

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    X,
    Y,
    Z,
}

impl Direction {
    /// Axis index, `X => 0`, `Y => 1`, `Z => 2`.
    pub fn value(&self) -> usize {
        match self {
            Direction::X => 0,
            Direction::Y => 1,
            Direction::Z => 2,
        }
    }

    /// Parses a direction from its lowercase letter.
    pub fn value_of(c: char) -> Result<Direction, String> {
        match c {
            'x' => Ok(Direction::X),
            'y' => Ok(Direction::Y),
            'z' => Ok(Direction::Z),
            other => Err(format!("{}: no such direction.", other)),
        }
    }

    /// The two axes normal to this one.
    pub fn normal_components(&self) -> [usize; 2] {
        match self {
            Direction::X => [1, 2],
            Direction::Y => [0, 2],
            Direction::Z => [0, 1],
        }
    }
}

/// Boundary condition operations.
///
/// The default implementations are the identity, which is the behavior of
/// [`NoBc`].
pub trait BoundaryCondition: Send + Sync {
    /// Pair displacement `ri - rj` under this boundary condition
    /// (minimum image for periodic variants).
    fn displacement(&self, ri: &Vec3, rj: &Vec3) -> Vec3 {
        ri - rj
    }

    /// Reinjects a drifted position into the box.
    ///
    /// Fails with a diagnostic when a folded coordinate still lies outside
    /// `[0, L_k)`, which happens only on NaN or overflow; such failures
    /// are fatal for the step.
    fn place_inside(&self, r: &Vec3) -> Result<Vec3, String> {
        Ok(*r)
    }

    /// Reflects a velocity when the position `r` has crossed a
    /// non-periodic boundary.
    fn reflect_velocity(&self, v: &Vec3, r: &Vec3) -> Vec3 {
        let _ = r;
        *v
    }

    /// Redraws out-of-range coordinates for variants with stochastic
    /// reinjection.
    fn reinject(&self, r: &Vec3) -> Vec3 {
        *r
    }

    /// Applies a group-consistent velocity reflection: the same sign
    /// pattern, derived from the group center, for every member.
    fn apply_to_group_velocities(&self, group: &ParticleGroup, particles: &mut [Particle]) {
        let _ = (group, particles);
    }
}

/// No boundary condition: identity in all operations.
#[derive(Debug, Default)]
pub struct NoBc;

impl NoBc {
    pub fn new() -> Self {
        NoBc
    }
}

impl BoundaryCondition for NoBc {}

/// True when coordinate `rc` lies outside `[0, L_k)` of axis `k`.
pub(crate) fn crossed(rc: f64, k: usize, simbox: &crate::particle::cell::SimBox) -> bool {
    rc > simbox.length(k) || rc < 0.0
}
