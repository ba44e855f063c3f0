#[macro_use]
extern crate clap;

use clap::Arg;
use std::process;
use tinker::{ExitCode, StdIo};

fn main() {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("INPUT")
                .help("Sets the object file to simulate")
                .required(true)
                .index(1),
        )
        .get_matches();

    let input = matches.value_of("INPUT").unwrap();

    let object = match tobj::read_file(input) {
        Ok(object) => object,
        Err(err) => {
            eprintln!("Simulation error: reading \"{}\" failed: {}", input, err);
            process::exit(1);
        }
    };

    let mut io = StdIo::default();
    let exit_code = match tsim::run_object(&object, &mut io) {
        Ok((_processor, _memory, exit_code)) => exit_code,
        Err(err) => {
            eprintln!("Simulation error: {}", err);
            process::exit(1);
        }
    };

    if exit_code != ExitCode::Halted {
        eprintln!("Simulation error: {}", exit_code);
        process::exit(1);
    }
}
