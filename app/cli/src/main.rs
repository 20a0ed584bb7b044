//! FILENAME: app/cli/src/main.rs
// PURPOSE: Command-line entry point.
// EXIT CODES: 0 evaluated, 1 input rejected, 2 host failure (IO, logging)

use std::process::ExitCode;

use calc_cli::{log_error, log_info, logging, run, Args, Config};
use clap::Parser;

fn main() -> ExitCode {
    let config = Config::from(Args::parse());

    match logging::init(config.log_level, config.log_file.as_deref()) {
        Ok(()) => log_info!("SYS", "calc starting, log_level={}", config.log_level),
        Err(e) => eprintln!("[LOG_INIT] {}; continuing with console-only logging", e),
    }

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();

    match run(&config, stdin.lock(), &mut stdout, &mut stderr) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            log_error!("SYS", "{}", e);
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}
