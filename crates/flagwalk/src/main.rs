//! flagwalk - Entry Point
//!
//! Builds the command tree, parses the command line and runs the selected
//! command. Usage errors exit through clap; every other failure is printed
//! to stderr with exit status 1.

use flagwalk::{Application, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    let application = match Application::new() {
        Ok(application) => application,
        Err(error) => return fail(&error),
    };
    let invocation = match application.parse(std::env::args_os()) {
        Ok(invocation) => invocation,
        Err(error) => error.exit(),
    };

    match run(invocation, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => fail(&error),
    }
}

fn fail(error: &flagwalk::domain::Error) -> ExitCode {
    eprintln!("flagwalk: {error}");
    ExitCode::FAILURE
}
