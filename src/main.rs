//! Piquad CLI
//!
//! Interactive front end for the partitioned pi integrator. Values not
//! supplied as flags are read from stdin through the classic prompts.

use clap::{Arg, Command};
use piquad_core::Integrator;
use std::io::{self, BufRead, Write};
use std::process;

fn main() {
    let matches = Command::new("piquad")
        .version("0.1.0")
        .about("Approximates pi by concurrent left-Riemann-sum integration")
        .arg(
            Arg::new("intervals")
                .short('n')
                .long("intervals")
                .value_name("N")
                .help("Number of integration intervals (skips the first prompt)")
                .num_args(1),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .value_name("T")
                .help("Number of worker threads (skips the second prompt)")
                .num_args(1)
                .allow_hyphen_values(true),
        )
        .get_matches();

    let result = run(
        matches.get_one::<String>("intervals").cloned(),
        matches.get_one::<String>("threads").cloned(),
    );

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

fn run(intervals_arg: Option<String>, threads_arg: Option<String>) -> Result<(), anyhow::Error> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let intervals = match intervals_arg {
        Some(raw) => parse_intervals(&raw)?,
        None => parse_intervals(&prompt(&mut input, "Podaj liczbe przedzialow: ")?)?,
    };
    let threads = match threads_arg {
        Some(raw) => parse_threads(&raw)?,
        None => parse_threads(&prompt(&mut input, "Podaj liczbe watkow: ")?)?,
    };

    let integration = Integrator::new(intervals, threads)?.run()?;

    println!("Przyblizona wartosc liczby PI: {}", integration.value);
    println!("Czas obliczen: {} sekund", integration.elapsed.as_secs_f64());
    Ok(())
}

/// Print `text` as a prompt and read one line of input
fn prompt(input: &mut impl BufRead, text: &str) -> Result<String, anyhow::Error> {
    print!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        anyhow::bail!("unexpected end of input at prompt {:?}", text.trim_end());
    }
    Ok(line)
}

fn parse_intervals(raw: &str) -> Result<u64, anyhow::Error> {
    let trimmed = raw.trim();
    trimmed.parse().map_err(|_| {
        anyhow::anyhow!("invalid interval count {trimmed:?}: expected an unsigned integer")
    })
}

fn parse_threads(raw: &str) -> Result<i64, anyhow::Error> {
    let trimmed = raw.trim();
    trimmed
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid thread count {trimmed:?}: expected an integer"))
}
