//! Process exit helpers shared by hearth binaries.
//!
//! Failure is reported on stdout and exits with status 1; success is
//! silent.

use std::fmt::Display;
use std::io::{self, Write};
use std::process;

/// Terminate the process, reporting `result`.
///
/// An error prints to stdout and exits with status 1; success exits
/// with status 0.
pub fn exit<E: Display>(result: Result<(), E>) -> ! {
    match result {
        Ok(()) => process::exit(0),
        Err(err) => fail(&err),
    }
}

/// Exit with status 1 if `result` is an error; otherwise hand back the
/// success value and continue.
pub fn if_exit<T, E: Display>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => fail(&err),
    }
}

fn fail(err: &dyn Display) -> ! {
    // Logging writes to stdout too; flush it so the message lands
    // last.
    let _ = io::stdout().flush();
    println!("{err}");
    process::exit(1);
}
