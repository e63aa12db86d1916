mod data;
mod error;
mod graphics;
mod math;
mod modes;
mod scene;

use std::process::ExitCode;

use data::{
    config::{Config, USAGE},
    logger, Program,
};
use error::AppError;
use modes::{headless_mode::headless_main, windowed_mode::winit_main, Mode};

fn main() -> ExitCode {
    if let Err(e) = logger::init() {
        eprintln!("{e}");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,

        Err(e @ AppError::Args(_)) => {
            log::error!("{e}");
            eprintln!("{USAGE}");
            ExitCode::FAILURE
        }

        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let config = Config::default().eval_args(&mut std::env::args().skip(1))?;

    if config.help {
        println!("{USAGE}");
        return Ok(());
    }

    logger::set_level(config.log_level);

    let prog = Program::new(&config);

    match prog.mode() {
        Mode::Win => winit_main(prog),
        Mode::Headless(ticks) => {
            headless_main(prog, ticks);
            Ok(())
        }
    }
}
