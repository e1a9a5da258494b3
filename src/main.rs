use clap::Parser;
use mesomd_lib::cli;

fn main() {
    env_logger::init();

    let cli = cli::Cli::parse();
    if let Err(err) = cli::execute(cli) {
        log::error!("{}", err);
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
