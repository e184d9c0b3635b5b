use clap::Parser;
use clap::error::ErrorKind;
use std::process::ExitCode;

use calc_host::{CLI, run};

fn main() -> ExitCode {
    env_logger::init();

    let cli = match CLI::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    match run(cli.knobs()) {
        Ok(result) => {
            println!("Result: {}", result);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
