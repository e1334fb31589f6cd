//! Command-line interface

pub mod args;

pub use args::{ListArgs, StoreArgs};

use clap::error::ErrorKind;
use clap::Parser;

/// Parse arguments, exiting 0 for `--help`/`--version` and 1 on usage
/// errors (wrong arguments, malformed flags, bad `--type` values).
pub fn parse_or_exit<A: Parser>() -> A {
    A::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        let code = match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
            _ => 1,
        };
        std::process::exit(code);
    })
}
