//! Interactive SHA3-256 hasher.
//!
//! Usage:
//!   cargo run --release -p cli --bin sha3-256
//!
//! Reads one line at a time, prints the SHA3-256 digest of its raw bytes as
//! lowercase hex, and exits on the literal line `q`. Lines need not be valid
//! UTF-8. A failed read is reported and the prompt is shown again; end of
//! input exits cleanly.

use std::{
  env,
  io::{self, BufRead, Write},
  process::ExitCode,
};

const PROMPT: &str = "Enter a string to hash with SHA3-256 ('q' to quit):\n> ";

fn run_loop(mut input: impl BufRead, mut out: impl Write) -> io::Result<()> {
  loop {
    write!(out, "\n{PROMPT}")?;
    out.flush()?;

    // Raw bytes, not a String: input lines need not be valid UTF-8.
    let mut line = Vec::new();
    match input.read_until(b'\n', &mut line) {
      Ok(0) => {
        writeln!(out)?;
        return Ok(());
      }
      Ok(_) => {}
      Err(err) => {
        writeln!(out, "read error: {err}")?;
        continue;
      }
    }

    while line.last().is_some_and(|b| b.is_ascii_whitespace()) {
      line.pop();
    }
    if line == b"q" {
      writeln!(out, "bye")?;
      return Ok(());
    }

    let digest = fips202::sha3_256(&line);
    writeln!(out, "input:    {}", String::from_utf8_lossy(&line))?;
    writeln!(out, "sha3-256: {}", hex::encode(digest))?;
  }
}

fn main() -> ExitCode {
  for arg in env::args().skip(1) {
    match arg.as_str() {
      "--help" | "-h" => {
        println!("sha3-256: interactive SHA3-256 hasher");
        println!();
        println!("Reads lines from stdin and prints each line's SHA3-256 digest.");
        println!("The literal line 'q' (or end of input) quits.");
        return ExitCode::SUCCESS;
      }
      other => {
        eprintln!("Unknown argument: {other}");
        return ExitCode::FAILURE;
      }
    }
  }

  let stdin = io::stdin();
  let stdout = io::stdout();
  match run_loop(stdin.lock(), stdout.lock()) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("io error: {err}");
      ExitCode::FAILURE
    }
  }
}
