//! Reads a word list on stdin and writes the compiled assignment to stdout.
use std::io::{self, Write};

use word_regex_compiler::{generate, Error};

fn run() -> Result<(), Error> {
    let output = generate(io::stdin().lock())?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
