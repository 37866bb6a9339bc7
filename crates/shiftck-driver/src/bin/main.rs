use std::{env, io, process::exit};

use shiftck_config::{Config, EXIT_FAILURE};
use shiftck_driver::{cases::GROUPS, run_and_report};

mod logger;

fn main() {
    // Skip the invocation of `shiftck` itself
    let config = match Config::load(env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            exit(EXIT_FAILURE);
        }
    };
    if let Err(err) = logger::install(&config) {
        eprintln!("error: {err:#}");
        exit(EXIT_FAILURE);
    }
    match run_and_report(&config, &GROUPS, &mut io::stderr()) {
        Ok(code) => exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            exit(EXIT_FAILURE);
        }
    }
}
