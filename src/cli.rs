//! Command-line front end.
//!
//! ```text
//! $ nomage MyIdentifier
//! Detected: PascalCase / UpperCamelCase / StudlyCase
//! $ nomage MyIdentifier --check pascal
//! Matching.
//! $ nomage MyIdentifier --check httpheader
//! Not matching convention: Train-Case / Http-Header-Case
//! $ nomage MyIdentifier --to snake
//! my_identifier
//! $ nomage MyIdentifier --to snack
//! Could not find naming convention 'snack'
//! ```
//!
//! [`run`] writes to the given streams and returns an [`Exit`] status so the
//! whole front end can be driven from tests; the binary only wires it to the
//! process streams.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Once;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::NamingError;
use crate::naming::identify;
use crate::registry::builtins;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "NOMAGE_LOG";

#[derive(Parser, Debug)]
#[command(name = "nomage")]
#[command(about = "Nomage - Utility for parsing and converting naming conventions")]
#[command(version)]
struct Cli {
    /// Convert the identifier to this convention
    #[arg(short = 't', long = "to", value_name = "CONVENTION")]
    to: Option<String>,

    /// Check that the identifier follows this convention
    #[arg(short = 'c', long = "check", value_name = "CONVENTION")]
    check: Option<String>,

    /// Identifier to inspect
    identifier: Option<String>,
}

/// Process exit status of the front end.
///
/// Unrecognized input, unknown convention names and failed checks each get
/// their own code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Exit {
    Success = 0,
    /// `--check` named a known convention the identifier does not follow.
    Mismatch = 1,
    /// Bad arguments, or no identifier given.
    Usage = 2,
    /// The identifier matched no convention.
    Unrecognized = 3,
    /// `--check` or `--to` named an unknown convention.
    UnknownConvention = 4,
    /// Writing to stdout or stderr failed.
    Io = 74,
}

impl Exit {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit.code())
    }
}

impl From<&NamingError> for Exit {
    fn from(err: &NamingError) -> Self {
        match err {
            NamingError::Unrecognized { .. } => Exit::Unrecognized,
            NamingError::UnknownConvention { .. } => Exit::UnknownConvention,
            // Only produced while defining conventions, never by lookups
            NamingError::EmptyAliases | NamingError::Pattern(_) => Exit::Usage,
        }
    }
}

/// Parse `args` (program name first) and execute the command.
///
/// Results go to `out`, diagnostics to `err`. Only I/O failures on those
/// streams are returned as errors.
pub fn run<I, T, O, E>(args: I, out: &mut O, err: &mut E) -> io::Result<Exit>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    O: Write,
    E: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(parse_error) => {
            return match parse_error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    write!(out, "{}", parse_error.render())?;
                    Ok(Exit::Success)
                }
                _ => {
                    write!(err, "{}", parse_error.render())?;
                    Ok(Exit::Usage)
                }
            };
        }
    };

    let Some(identifier) = given(&cli.identifier) else {
        write!(out, "{}", Cli::command().render_help())?;
        return Ok(Exit::Usage);
    };

    match execute(&cli, identifier, out, err) {
        Ok(exit) => Ok(exit),
        Err(Failure::Io(io_error)) => Err(io_error),
        Err(Failure::Naming(naming_error)) => {
            debug!(error = %naming_error, "command failed");
            writeln!(err, "{}", sentence(&naming_error.to_string()))?;
            Ok(Exit::from(&naming_error))
        }
    }
}

enum Failure {
    Io(io::Error),
    Naming(NamingError),
}

impl From<io::Error> for Failure {
    fn from(err: io::Error) -> Self {
        Failure::Io(err)
    }
}

impl From<NamingError> for Failure {
    fn from(err: NamingError) -> Self {
        Failure::Naming(err)
    }
}

fn execute<O: Write, E: Write>(
    cli: &Cli,
    identifier: &str,
    out: &mut O,
    err: &mut E,
) -> Result<Exit, Failure> {
    let id = identify(identifier)?;
    let check = given(&cli.check);
    let to = given(&cli.to);

    if check.is_none() && to.is_none() {
        writeln!(out, "Detected: {}", id.convention().display_names())?;
    }

    if let Some(name) = check {
        let expected = builtins().resolve(name)?;
        if !id.conforms_to(expected) {
            writeln!(err, "Not matching convention: {}", expected.display_names())?;
            return Ok(Exit::Mismatch);
        }
        if to.is_none() {
            writeln!(out, "Matching.")?;
        }
    }

    if let Some(name) = to {
        writeln!(out, "{}", id.to(name)?)?;
    }

    Ok(Exit::Success)
}

/// An argument counts as given only when it is non-empty.
fn given(arg: &Option<String>) -> Option<&str> {
    arg.as_deref().filter(|value| !value.is_empty())
}

/// Uppercase the first letter of an error message.
///
/// Unlike [`crate::base::capitalize`], the rest is kept as is so quoted
/// identifiers stay readable.
fn sentence(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

static INIT: Once = Once::new();

/// Install the stderr log subscriber.
///
/// Reads filter directives from `NOMAGE_LOG` (e.g. `NOMAGE_LOG=nomage=trace`)
/// and falls back to `warn`. Calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}
