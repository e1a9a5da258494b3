//! One-dimensional periodic boundary conditions with reflecting walls in
//! the normal directions.

use super::pbc::Pbc;
use super::{crossed, BoundaryCondition, Direction};
use crate::particle::cell::SimBox;
use crate::particle::group::ParticleGroup;
use crate::particle::Particle;
use crate::util;
use crate::vector::Vec3;

fn minimum_image_1d(simbox: &SimBox, axis: usize, ri: &Vec3, rj: &Vec3) -> Vec3 {
    let mut rij = ri - rj;
    let box_k = simbox.length(axis);
    let dr = ri[axis] - rj[axis];
    let n = util::nint(dr / box_k);
    rij[axis] = dr - n * box_k;
    rij
}

/// Periodic along one configured axis; a particle leaving the box in any
/// other axis has its full velocity reversed (bounce-back).
#[derive(Debug, Clone)]
pub struct Pbc1dBounceBack {
    simbox: SimBox,
    direction: Direction,
}

impl Pbc1dBounceBack {
    pub fn new(simbox: SimBox, direction: Direction) -> Self {
        Pbc1dBounceBack { simbox, direction }
    }
}

impl BoundaryCondition for Pbc1dBounceBack {
    fn displacement(&self, ri: &Vec3, rj: &Vec3) -> Vec3 {
        minimum_image_1d(&self.simbox, self.direction.value(), ri, rj)
    }

    fn place_inside(&self, r: &Vec3) -> Result<Vec3, String> {
        Pbc::fold(&self.simbox, r)
    }

    fn reflect_velocity(&self, v: &Vec3, r: &Vec3) -> Vec3 {
        let out = self
            .direction
            .normal_components()
            .iter()
            .any(|&k| crossed(r[k], k, &self.simbox));
        if out {
            -1.0 * v
        } else {
            *v
        }
    }
}

/// Periodic along one configured axis; crossing a wall in a normal axis
/// negates only the velocity component along that axis, preserving the
/// velocity magnitude.
#[derive(Debug, Clone)]
pub struct Pbc1dSpecular {
    simbox: SimBox,
    direction: Direction,
}

impl Pbc1dSpecular {
    pub fn new(simbox: SimBox, direction: Direction) -> Self {
        Pbc1dSpecular { simbox, direction }
    }
}

impl BoundaryCondition for Pbc1dSpecular {
    fn displacement(&self, ri: &Vec3, rj: &Vec3) -> Vec3 {
        minimum_image_1d(&self.simbox, self.direction.value(), ri, rj)
    }

    fn place_inside(&self, r: &Vec3) -> Result<Vec3, String> {
        Pbc::fold(&self.simbox, r)
    }

    fn reflect_velocity(&self, v: &Vec3, r: &Vec3) -> Vec3 {
        let mut vel = *v;
        for k in self.direction.normal_components() {
            if crossed(r[k], k, &self.simbox) {
                vel[k] = -vel[k];
            }
        }
        vel
    }

    /// Applies one sign pattern, determined by the group center, to every
    /// member velocity, so that a group never straddles a reflection
    /// asymmetrically.
    fn apply_to_group_velocities(&self, group: &ParticleGroup, particles: &mut [Particle]) {
        let r = group.position(particles);
        let nc = self.direction.normal_components();
        let group_crossed = nc.iter().any(|&k| crossed(r[k], k, &self.simbox));
        if !group_crossed {
            return;
        }
        let mut factor = [1.0; 3];
        for k in nc {
            if crossed(r[k], k, &self.simbox) {
                factor[k] = -1.0;
            }
        }
        for &i in group.members() {
            let mut v = particles[i].velocity();
            for k in nc {
                v[k] *= factor[k];
            }
            particles[i].set_velocity(v);
        }
    }
}
