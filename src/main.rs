use clap::Parser;
use colored::Colorize;
use langton_ant::prelude::*;
use langton_ant::world::{parse_setup, save_state};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "Error:".red().bold(), err);
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    if args.no_color {
        colored::control::set_override(false);
    }

    // Load the setup and build the engine
    let setup = parse_setup(&args.init_file)?;
    let mut engine = setup.build()?;

    if let Some(percent) = args.random_fill {
        let mut rng = if let Some(seed) = args.seed {
            fastrand::Rng::with_seed(seed)
        } else {
            fastrand::Rng::new()
        };
        engine.scatter_black_cells(percent / 100.0, &mut rng);
    }

    // Drive the simulation
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(
        &mut engine,
        stdin.lock(),
        stdout.lock(),
        args.session_config(),
    );
    let outcome = session.run()?;

    let save_to = match &args.save {
        Some(path) => Some(path.clone()),
        None if outcome.mode != Mode::Headless => session.ask_save_path()?,
        None => None,
    };
    drop(session);

    if let Some(path) = save_to {
        save_state(&engine.snapshot(), &path)?;
        println!("State saved to {}", path.display());
    }

    Ok(())
}
