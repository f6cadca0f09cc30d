//! `nomage` command-line entry point.

use std::io;
use std::process::ExitCode;

use nomage::cli::{self, Exit};

fn main() -> ExitCode {
    cli::init_tracing();

    let stdout = io::stdout();
    let stderr = io::stderr();
    match cli::run(std::env::args_os(), &mut stdout.lock(), &mut stderr.lock()) {
        Ok(exit) => exit.into(),
        Err(err) => {
            tracing::error!(error = %err, "failed to write output");
            Exit::Io.into()
        }
    }
}
