//! # CLI Module - Command Line Interface for the Simulation Pipeline
//!
//! Four drivers cover the pipeline:
//!
//! ## `simulate`
//!
//! Time-integrates a particle system under a configured force field,
//! boundary condition and displacer, streaming trajectory frames to disk
//! through a dedicated receiver thread.
//!
//! ```bash
//! mesomd simulate -i in.model -c specs.dat -f forcefield.toml \
//!     -p simulation.toml --steps 5000 --displacer dpd
//! ```
//!
//! ## `triangulate`
//!
//! Builds a dotted surface around a particle system and maps a
//! triangulated sphere onto it.
//!
//! ```bash
//! mesomd triangulate -i in.model -c specs.dat --number-of-triangles 3840
//! ```
//!
//! ## `bem`
//!
//! Assembles the boundary element surface matrix for a triangulated
//! surface, solves for the given charge distribution, and reports
//! reaction potentials.
//!
//! ```bash
//! mesomd bem --radius 2.0 --number-of-triangles 960 -p bem.toml
//! ```
//!
//! ## `analyze`
//!
//! Runs a trajectory analyzer (g(r), MSD, dipole moments, tracked pair
//! distance) over a stored trajectory after a configurable skip prefix.
//!
//! ```bash
//! mesomd analyze --analysis gr --spec-1 Na+ --spec-2 Cl- --skip 100
//! ```
//!
//! All drivers exit with code 0 on success and non-zero on argument or
//! computation errors.

use crate::analysis;
use crate::bem::flat_centers::FlatTriCenters;
use crate::bem::flat_vertices::FlatTriVertices;
use crate::bem::BemCalculator;
use crate::boundary::pbc::Pbc;
use crate::boundary::pbc_1d::{Pbc1dBounceBack, Pbc1dSpecular};
use crate::boundary::pbc_2d::Pbc2d;
use crate::boundary::{BoundaryCondition, Direction, NoBc};
use crate::displacer::dpd::Dpd;
use crate::displacer::velocity_verlet::VelocityVerlet;
use crate::displacer::Displacer;
use crate::engine::Engine;
use crate::external::vplanes::VirtualPlanes;
use crate::external::ExternalPotential;
use crate::forcefield::ForceField;
use crate::interactor::Interactor;
use crate::io;
use crate::pairlist::PairListGenerator;
use crate::param::{Parameters, Value};
use crate::particle::cell::SimBox;
use crate::potentials;
use crate::surface::{dots, triangulation};
use crate::vector::Vec3;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Time-integrate a particle system
    Simulate {
        /// Input particle system file
        #[arg(short, long, default_value = "in.model")]
        input_model: PathBuf,

        /// Particle specification catalog file
        #[arg(short, long, default_value = "particle-spec-catalog.dat")]
        catalog: PathBuf,

        /// Force field description file
        #[arg(short, long, default_value = "forcefield.toml")]
        forcefield: PathBuf,

        /// Simulation parameters file
        #[arg(short, long, default_value = "simulation.toml")]
        parameters: PathBuf,

        /// Output trajectory file
        #[arg(short, long, default_value = "trajectory.dat")]
        trajectory: PathBuf,

        /// Output particle system file
        #[arg(short, long, default_value = "out.model")]
        output_model: PathBuf,

        /// Number of steps to run
        #[arg(long, default_value_t = 1000)]
        steps: u64,

        /// Steps between trajectory frames
        #[arg(long, default_value_t = 10)]
        frame_interval: u64,

        /// Non-bonded pair potential
        #[arg(long, default_value = "sr")]
        pair_potential: String,

        /// Bonded pair potential for particle groups
        #[arg(long)]
        bonded_potential: Option<String>,

        /// Boundary condition: none, pbc, pbc-1d-bb, pbc-1d-sr, pbc-2d
        #[arg(long, default_value = "pbc")]
        boundary: String,

        /// Displacer: dpd or vv
        #[arg(long, default_value = "dpd")]
        displacer: String,

        /// Track virtual-plane surface charge densities (writes
        /// vplanes.dat)
        #[arg(long)]
        vplanes: bool,

        /// Binary checkpoint of the final state
        #[arg(long)]
        checkpoint: Option<PathBuf>,

        /// Simulation report (parameters and final step data)
        #[arg(long, default_value = "report.json")]
        report: PathBuf,
    },

    /// Triangulate the surface of a particle system
    Triangulate {
        /// Input particle system file
        #[arg(short, long, default_value = "in.model")]
        input_model: PathBuf,

        /// Particle specification catalog file
        #[arg(short, long, default_value = "particle-spec-catalog.dat")]
        catalog: PathBuf,

        /// Simulation parameters file (for the box)
        #[arg(short, long, default_value = "simulation.toml")]
        parameters: PathBuf,

        /// Requested number of triangles
        #[arg(long, default_value_t = 3840)]
        number_of_triangles: usize,

        /// Requested dots per sphere
        #[arg(long, default_value_t = 500)]
        dot_density: usize,

        /// Output file for the triangulated surface
        #[arg(short, long, default_value = "triangulated-surface.dat")]
        output_surface: PathBuf,

        /// Output file for the dotted surface
        #[arg(long, default_value = "dotted-surface.dat")]
        output_dots: PathBuf,
    },

    /// Solve the boundary element equation on a dielectric surface
    Bem {
        /// Triangulated surface file; a sphere is generated when absent
        #[arg(long)]
        surface: Option<PathBuf>,

        /// Radius of the generated sphere
        #[arg(long, default_value_t = 2.0)]
        radius: f64,

        /// Triangle count of the generated sphere
        #[arg(long, default_value_t = 960)]
        number_of_triangles: usize,

        /// Parameters file carrying bem.solute.eps, bem.solvent.eps and
        /// bem.solvent.ka
        #[arg(short, long, default_value = "simulation.toml")]
        parameters: PathBuf,

        /// Particle system carrying the source charges; a unit charge at
        /// the origin is used when absent
        #[arg(short, long)]
        input_model: Option<PathBuf>,

        /// Particle specification catalog file
        #[arg(short, long, default_value = "particle-spec-catalog.dat")]
        catalog: PathBuf,

        /// Collocation strategy: centers or vertices
        #[arg(long, default_value = "centers")]
        collocation: String,

        /// Output file for reaction potentials
        #[arg(short, long, default_value = "potentials.dat")]
        output: PathBuf,
    },

    /// Analyze a stored trajectory
    Analyze {
        /// Analysis type: gr, msd, dipole, distance
        #[arg(long, default_value = "gr")]
        analysis: String,

        /// Input particle system file
        #[arg(short, long, default_value = "in.model")]
        input_model: PathBuf,

        /// Particle specification catalog file
        #[arg(short, long, default_value = "particle-spec-catalog.dat")]
        catalog: PathBuf,

        /// Simulation parameters file (for the box)
        #[arg(short, long, default_value = "simulation.toml")]
        parameters: PathBuf,

        /// Input trajectory file
        #[arg(short, long, default_value = "trajectory.dat")]
        trajectory: PathBuf,

        /// Output file
        #[arg(short, long, default_value = "analysis.dat")]
        output: PathBuf,

        /// Number of leading frames to skip
        #[arg(long, default_value_t = 0)]
        skip: usize,

        /// First specification name (gr)
        #[arg(long, default_value = "")]
        spec_1: String,

        /// Second specification name (gr)
        #[arg(long, default_value = "")]
        spec_2: String,

        /// Bin width for gr (nm) and dipole histograms (e nm)
        #[arg(long, default_value_t = 0.02)]
        bin_width: f64,

        /// Upper limit for gr (nm) and dipole histograms (e nm)
        #[arg(long, default_value_t = 2.5)]
        upper_limit: f64,

        /// Time interval between trajectory states (msd), ps
        #[arg(long, default_value_t = 0.2)]
        time_interval: f64,

        /// Window time interval for msd, ps
        #[arg(long, default_value_t = 10.0)]
        tau: f64,

        /// First particle identifier (distance)
        #[arg(long, default_value = "")]
        id_1: String,

        /// Second particle identifier (distance)
        #[arg(long, default_value = "")]
        id_2: String,
    },
}

/// Runs the selected driver.
pub fn execute(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::Simulate {
            input_model,
            catalog,
            forcefield,
            parameters,
            trajectory,
            output_model,
            steps,
            frame_interval,
            pair_potential,
            bonded_potential,
            boundary,
            displacer,
            vplanes,
            checkpoint,
            report,
        } => simulate(SimulateConfig {
            input_model,
            catalog,
            forcefield,
            parameters,
            trajectory,
            output_model,
            steps,
            frame_interval,
            pair_potential,
            bonded_potential,
            boundary,
            displacer,
            vplanes,
            checkpoint,
            report,
        }),
        Commands::Triangulate {
            input_model,
            catalog,
            parameters,
            number_of_triangles,
            dot_density,
            output_surface,
            output_dots,
        } => triangulate(
            &input_model,
            &catalog,
            &parameters,
            number_of_triangles,
            dot_density,
            &output_surface,
            &output_dots,
        ),
        Commands::Bem {
            surface,
            radius,
            number_of_triangles,
            parameters,
            input_model,
            catalog,
            collocation,
            output,
        } => bem(
            surface.as_deref(),
            radius,
            number_of_triangles,
            &parameters,
            input_model.as_deref(),
            &catalog,
            &collocation,
            &output,
        ),
        Commands::Analyze {
            analysis,
            input_model,
            catalog,
            parameters,
            trajectory,
            output,
            skip,
            spec_1,
            spec_2,
            bin_width,
            upper_limit,
            time_interval,
            tau,
            id_1,
            id_2,
        } => analyze(AnalyzeConfig {
            analysis,
            input_model,
            catalog,
            parameters,
            trajectory,
            output,
            skip,
            spec_1,
            spec_2,
            bin_width,
            upper_limit,
            time_interval,
            tau,
            id_1,
            id_2,
        }),
    }
}

fn simbox_from(param: &Parameters) -> Result<SimBox, String> {
    Ok(SimBox::new(
        param.real("box.x")?,
        param.real("box.y")?,
        param.real("box.z")?,
    ))
}

fn create_bc(name: &str, simbox: SimBox) -> Result<Arc<dyn BoundaryCondition>, String> {
    match name {
        "none" => Ok(Arc::new(NoBc::new())),
        "pbc" => Ok(Arc::new(Pbc::new(simbox))),
        "pbc-1d-bb" => Ok(Arc::new(Pbc1dBounceBack::new(simbox, Direction::Z))),
        "pbc-1d-sr" => Ok(Arc::new(Pbc1dSpecular::new(simbox, Direction::Z))),
        "pbc-2d" => Ok(Arc::new(Pbc2d::new(
            simbox,
            Direction::X,
            Direction::Y,
            Direction::Z,
        ))),
        other => Err(format!("{}: no such boundary condition.", other)),
    }
}

struct SimulateConfig {
    input_model: PathBuf,
    catalog: PathBuf,
    forcefield: PathBuf,
    parameters: PathBuf,
    trajectory: PathBuf,
    output_model: PathBuf,
    steps: u64,
    frame_interval: u64,
    pair_potential: String,
    bonded_potential: Option<String>,
    boundary: String,
    displacer: String,
    vplanes: bool,
    checkpoint: Option<PathBuf>,
    report: PathBuf,
}

fn simulate(config: SimulateConfig) -> Result<(), Box<dyn Error>> {
    let param = Parameters::from_file(&config.parameters)?;
    let mut reader = io::open_input(&config.catalog)?;
    let catalog = io::system::read_catalog(&mut reader)?;
    let simbox = simbox_from(&param)?;
    let mut reader = io::open_input(&config.input_model)?;
    let system = io::system::read_system(&mut reader, &catalog, simbox)?;
    log::info!("{}: number of particles.", system.number_of_particles());

    let ff = Arc::new(ForceField::from_file(&config.forcefield)?);
    let bc = create_bc(&config.boundary, simbox)?;

    let non_bonded = potentials::create_pair_potential(
        &config.pair_potential,
        ff.clone(),
        &simbox,
        bc.clone(),
        &param,
    )?;
    let bonded = match &config.bonded_potential {
        Some(name) => Some(potentials::create_pair_potential(
            name,
            ff.clone(),
            &simbox,
            bc.clone(),
            &param,
        )?),
        None => None,
    };

    let mut externals: Vec<Box<dyn ExternalPotential>> = Vec::new();
    if config.vplanes {
        let spacing = param.real_or("forces.external.vplane-spacing", 1.0);
        let eps_r = param.real_or("forces.external.vplane-eps", 78.5);
        externals.push(Box::new(VirtualPlanes::new(
            simbox,
            bc.clone(),
            spacing,
            eps_r,
        )));
    }

    let pairlist_cutoff = param.real_or(
        "forces.nb.pairlist-cutoff",
        param.real("forces.nb.cutoff")?,
    );
    let update_stride = param.integer_or("simulation.pairlist-update", 10) as u64;
    let generator = PairListGenerator::new(pairlist_cutoff, bc.clone());
    let interactor = Interactor::new(bc, non_bonded, bonded, externals, generator, update_stride);

    let displacer: Box<dyn Displacer> = match config.displacer.as_str() {
        "dpd" => Box::new(Dpd::new(&param, interactor)?),
        "vv" => Box::new(VelocityVerlet::new(&param, interactor)?),
        other => return Err(format!("{}: no such displacer.", other).into()),
    };

    let (tx, rx) = mpsc::channel();
    let writer_handle = io::trajectory::start_receiver_thread(rx, config.trajectory.clone());

    let dt = param.real("simulation.timestep")?;
    let mut engine = Engine::new(system, displacer, dt, Some(tx), config.frame_interval);
    let last = engine.run(config.steps)?;
    engine.complete()?;

    // Final state, checkpoint and report.
    let system = {
        let mut writer = io::open_output(&config.output_model)?;
        let system = engine.into_system();
        io::system::write_system(&mut writer, &system)?;
        system
    };
    if let Some(path) = &config.checkpoint {
        io::checkpoint::save(path, &system)?;
    }
    write_report(&config.report, &param, &last)?;

    // The engine dropped its sender; drain the writer thread.
    writer_handle
        .join()
        .map_err(|_| "Trajectory writer thread panicked.".to_string())??;

    log::info!(
        "{}: final total energy after {} steps.",
        last.total_energy(),
        config.steps
    );
    Ok(())
}

fn write_report(
    path: &PathBuf,
    param: &Parameters,
    last: &crate::displacer::SimulationData,
) -> Result<(), Box<dyn Error>> {
    let mut parameters = serde_json::Map::new();
    for (key, value) in param.iter() {
        let json_value = match value {
            Value::Real(v) => serde_json::json!(v),
            Value::Integer(v) => serde_json::json!(v),
            Value::Boolean(v) => serde_json::json!(v),
            Value::Text(v) => serde_json::json!(v),
        };
        parameters.insert(key.clone(), json_value);
    }
    let report = serde_json::json!({
        "parameters": parameters,
        "final": last,
    });
    let mut writer = io::open_output(path)?;
    serde_json::to_writer_pretty(&mut writer, &report)?;
    writer.flush()?;
    Ok(())
}

fn triangulate(
    input_model: &PathBuf,
    catalog: &PathBuf,
    parameters: &PathBuf,
    number_of_triangles: usize,
    dot_density: usize,
    output_surface: &PathBuf,
    output_dots: &PathBuf,
) -> Result<(), Box<dyn Error>> {
    let param = Parameters::from_file(parameters)?;
    let mut reader = io::open_input(catalog)?;
    let catalog = io::system::read_catalog(&mut reader)?;
    let simbox = simbox_from(&param)?;
    let mut reader = io::open_input(input_model)?;
    let mut system = io::system::read_system(&mut reader, &catalog, simbox)?;
    log::info!("{}: number of particles.", system.number_of_particles());

    system.set_origin_to_center_of_mass();
    let positions: Vec<Vec3> = system.particles().iter().map(|p| p.position()).collect();
    let radii: Vec<f64> = system
        .particles()
        .iter()
        .map(|p| p.spec().radius())
        .collect();

    let (dotted, area) = dots::general(&positions, &radii, dot_density)?;
    log::info!("{}: area dotted surface.", area);

    let mut surface = triangulation::spherical(1.0, number_of_triangles)?;
    triangulation::map_onto(&dotted, &mut surface)?;
    log::info!("{}: area triangulated surface.", surface.area());

    let mut writer = io::open_output(output_surface)?;
    triangulation::write(&mut writer, &surface)?;
    log::info!("{}: wrote triangulated surface.", output_surface.display());

    let mut writer = io::open_output(output_dots)?;
    triangulation::write_dots(&mut writer, &dotted)?;
    log::info!("{}: wrote dotted surface.", output_dots.display());
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn bem(
    surface: Option<&std::path::Path>,
    radius: f64,
    number_of_triangles: usize,
    parameters: &PathBuf,
    input_model: Option<&std::path::Path>,
    catalog: &PathBuf,
    collocation: &str,
    output: &PathBuf,
) -> Result<(), Box<dyn Error>> {
    let param = Parameters::from_file(parameters)?;

    let surface = match surface {
        Some(path) => {
            let mut reader = io::open_input(path)?;
            Arc::new(triangulation::parse(&mut reader)?)
        }
        None => Arc::new(triangulation::spherical(radius, number_of_triangles)?),
    };
    log::info!(
        "{} vertices, {} triangles, area {}.",
        surface.number_of_vertices(),
        surface.number_of_faces(),
        surface.area()
    );

    // Source charges: from the model when given, a unit charge at the
    // origin otherwise.
    let (positions, charges) = match input_model {
        Some(path) => {
            let mut reader = io::open_input(catalog)?;
            let catalog = io::system::read_catalog(&mut reader)?;
            let simbox = simbox_from(&param)?;
            let mut reader = io::open_input(path)?;
            let system = io::system::read_system(&mut reader, &catalog, simbox)?;
            let positions: Vec<Vec3> = system.particles().iter().map(|p| p.position()).collect();
            let charges: Vec<f64> = system.particles().iter().map(|p| p.charge()).collect();
            (positions, charges)
        }
        None => (vec![Vec3::zero()], vec![1.0]),
    };

    let mut calculator: Box<dyn BemCalculator> = match collocation {
        "centers" => Box::new(FlatTriCenters::new(&param, surface)?),
        "vertices" => Box::new(FlatTriVertices::new(&param, surface)?),
        other => return Err(format!("{}: no such collocation strategy.", other).into()),
    };

    calculator.surface_matrix()?;
    calculator.right_hand_side(&positions, &charges)?;
    calculator.solve()?;
    let potentials = calculator.reaction_potential_solute(&positions)?;

    let mut writer = io::open_output(output)?;
    for (r, phi) in positions.iter().zip(&potentials) {
        writeln!(writer, "{} {:15.7e}", r, phi)?;
    }
    log::info!("{}: wrote reaction potentials.", output.display());
    Ok(())
}

struct AnalyzeConfig {
    analysis: String,
    input_model: PathBuf,
    catalog: PathBuf,
    parameters: PathBuf,
    trajectory: PathBuf,
    output: PathBuf,
    skip: usize,
    spec_1: String,
    spec_2: String,
    bin_width: f64,
    upper_limit: f64,
    time_interval: f64,
    tau: f64,
    id_1: String,
    id_2: String,
}

fn analyze(config: AnalyzeConfig) -> Result<(), Box<dyn Error>> {
    let param = Parameters::from_file(&config.parameters)?;
    let mut reader = io::open_input(&config.catalog)?;
    let catalog = io::system::read_catalog(&mut reader)?;
    let simbox = simbox_from(&param)?;
    let mut reader = io::open_input(&config.input_model)?;
    let mut system = io::system::read_system(&mut reader, &catalog, simbox)?;

    let bc: Arc<dyn BoundaryCondition> = Arc::new(Pbc::new(simbox));
    let mut trajectory = io::open_input(&config.trajectory)?;
    let mut writer = io::open_output(&config.output)?;

    match config.analysis.as_str() {
        "gr" => {
            if config.spec_1.is_empty() || config.spec_2.is_empty() {
                return Err("g(r) requires --spec-1 and --spec-2.".into());
            }
            let mut gr = analysis::gr::Gr::new(
                config.bin_width,
                config.upper_limit,
                &config.spec_1,
                &config.spec_2,
                bc,
            );
            analysis::analyze(&mut gr, &mut system, &mut trajectory, config.skip)?;
            for (r, g) in gr.results() {
                writeln!(writer, "{:15.7e} {:15.7e}", r, g)?;
            }
        }
        "msd" => {
            let mut msd = analysis::msd::Msd::new(config.time_interval, config.tau);
            analysis::analyze(&mut msd, &mut system, &mut trajectory, config.skip)?;
            for (t, value) in msd.results() {
                writeln!(writer, "{:15.7e} {:15.7e}", t, value)?;
            }
        }
        "dipole" => {
            let mut dipole =
                analysis::dipole::DipoleMoment::new(config.bin_width, config.upper_limit);
            analysis::analyze(&mut dipole, &mut system, &mut trajectory, config.skip)?;
            for (m, count) in dipole.results() {
                writeln!(writer, "{:15.7e} {}", m, count)?;
            }
            log::info!("{}: average M^2.", dipole.average_m2());
        }
        "distance" => {
            if config.id_1.is_empty() || config.id_2.is_empty() {
                return Err("distance requires --id-1 and --id-2.".into());
            }
            let mut distance = analysis::distance::Distance::new(&config.id_1, &config.id_2, bc);
            analysis::analyze(&mut distance, &mut system, &mut trajectory, config.skip)?;
            for (frame, value) in distance.results() {
                writeln!(writer, "{} {:15.7e}", frame, value)?;
            }
        }
        other => return Err(format!("{}: no such analysis.", other).into()),
    }
    log::info!("{}: wrote analysis results.", config.output.display());
    Ok(())
}
