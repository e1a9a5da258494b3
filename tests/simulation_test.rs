//! Integration tests for the simulation engine.
//!
//! These drive the full stack: particle system, force field, boundary
//! condition, interactor, DPD displacer and the engine loop with frame
//! capture.

use mesomd_lib::boundary::pbc::Pbc;
use mesomd_lib::boundary::BoundaryCondition;
use mesomd_lib::displacer::dpd::Dpd;
use mesomd_lib::displacer::Displacer;
use mesomd_lib::engine::Engine;
use mesomd_lib::forcefield::ForceField;
use mesomd_lib::interactor::Interactor;
use mesomd_lib::pairlist::PairListGenerator;
use mesomd_lib::param::Parameters;
use mesomd_lib::particle::cell::SimBox;
use mesomd_lib::particle::spec::ParticleSpec;
use mesomd_lib::particle::system::ParticleSystem;
use mesomd_lib::potentials;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::sync::mpsc;
use std::sync::Arc;

fn water_bead() -> Arc<ParticleSpec> {
    Arc::new(ParticleSpec::new("W", 18.0, 0.0, 0.1, false))
}

fn dpd_fluid(n: usize, simbox: SimBox, seed: u64) -> ParticleSystem {
    let spec = water_bead();
    let mut system = ParticleSystem::new(simbox);
    let mut rng = StdRng::seed_from_u64(seed);
    for k in 0..n {
        let i = system.add_particle(&format!("w{}", k), "W", spec.clone());
        let r = mesomd_lib::vector::Vec3::new(
            rng.random_range(0.0..simbox.length_x()),
            rng.random_range(0.0..simbox.length_y()),
            rng.random_range(0.0..simbox.length_z()),
        );
        system.particles_mut()[i].set_position(r);
    }
    system
}

fn dpd_parameters() -> Parameters {
    let mut param = Parameters::new();
    param.put_real("simulation.timestep", 0.02);
    param.put_real("simulation.temperature", 298.15);
    param.put_real("simulation.gamma", 4.5);
    param.put_real("simulation.dpd.lambda", 0.5);
    param.put_real("forces.nb.cutoff", 1.0);
    param.put_integer("simulation.seed", 7);
    param
}

fn dpd_engine(system: ParticleSystem, param: &Parameters, tx: mpsc::Sender<mesomd_lib::engine::SimulationSnapshot>) -> Engine {
    let simbox = *system.simbox();
    let bc: Arc<dyn BoundaryCondition> = Arc::new(Pbc::new(simbox));
    let mut ff = ForceField::new();
    ff.add_soft_repulsion("W", "W", 25.0);
    let ff = Arc::new(ff);

    let non_bonded =
        potentials::create_pair_potential("sr", ff, &simbox, bc.clone(), param).unwrap();
    let generator = PairListGenerator::new(1.0, bc.clone());
    let interactor = Interactor::new(bc, non_bonded, None, Vec::new(), generator, 10);
    let displacer: Box<dyn Displacer> = Box::new(Dpd::new(param, interactor).unwrap());
    Engine::new(system, displacer, 0.02, Some(tx), 5)
}

#[test]
fn dpd_fluid_runs_and_streams_frames() {
    let param = dpd_parameters();
    let system = dpd_fluid(64, SimBox::cubic(4.0), 11);

    let (tx, rx) = mpsc::channel();
    let mut engine = dpd_engine(system, &param, tx);
    let last = engine.run(50).unwrap();
    drop(engine);

    // 50 steps at interval 5 produce 10 frames.
    let frames: Vec<_> = rx.iter().collect();
    assert_eq!(frames.len(), 10);
    assert_eq!(frames.last().unwrap().step, 50);
    for frame in &frames {
        assert_eq!(frame.states.len(), 64);
    }

    assert!(last.kinetic.is_finite());
    assert!(last.potential.is_finite());
    assert!(last.kinetic > 0.0);
    assert!(last.temperature > 0.0);
}

#[test]
fn dpd_thermostat_reaches_a_sensible_temperature() {
    // The random/dissipative pair obeys fluctuation-dissipation, so the
    // fluid equilibrates near the target temperature.
    let param = dpd_parameters();
    let system = dpd_fluid(125, SimBox::cubic(4.0), 23);

    let (tx, rx) = mpsc::channel();
    let mut engine = dpd_engine(system, &param, tx);
    engine.run(200).unwrap();

    // Average the temperature over the late frames.
    let frames: Vec<_> = rx.try_iter().collect();
    let late: Vec<_> = frames.iter().skip(frames.len() / 2).collect();
    let average: f64 =
        late.iter().map(|f| f.data.temperature).sum::<f64>() / late.len() as f64;
    assert!(
        average > 100.0 && average < 600.0,
        "equilibrated temperature {} K is far from the 298 K target",
        average
    );
}

#[test]
fn dpd_is_reproducible_for_a_fixed_seed() {
    let param = dpd_parameters();

    let run = |seed_system: u64| {
        let system = dpd_fluid(32, SimBox::cubic(3.0), seed_system);
        let (tx, _rx) = mpsc::channel();
        let mut engine = dpd_engine(system, &param, tx);
        engine.run(20).unwrap();
        engine
            .system()
            .particles()
            .iter()
            .map(|p| p.position())
            .collect::<Vec<_>>()
    };

    let first = run(5);
    let second = run(5);
    for (a, b) in first.iter().zip(&second) {
        assert!(a.approx_eq(b, 1e-12));
    }
}

#[test]
fn failed_step_surfaces_synchronously() {
    // An interactor with a potential whose parameters are missing fails
    // the very first step with a diagnostic; the engine propagates it.
    let param = dpd_parameters();
    let system = dpd_fluid(8, SimBox::cubic(2.0), 3);
    let simbox = *system.simbox();
    let bc: Arc<dyn BoundaryCondition> = Arc::new(Pbc::new(simbox));
    let empty_ff = Arc::new(ForceField::new());

    let non_bonded =
        potentials::create_pair_potential("sr", empty_ff, &simbox, bc.clone(), &param).unwrap();
    let generator = PairListGenerator::new(1.0, bc.clone());
    let interactor = Interactor::new(bc, non_bonded, None, Vec::new(), generator, 10);
    let displacer: Box<dyn Displacer> = Box::new(Dpd::new(&param, interactor).unwrap());
    let mut engine = Engine::new(system, displacer, 0.02, None, 5);

    let err = engine.run(1).unwrap_err();
    assert!(err.contains("soft repulsion"));
}
