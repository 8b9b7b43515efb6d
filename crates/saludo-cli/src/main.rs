//! # saludo
//!
//! Command-line front end for the greeter/adder demo program.
//!
//! ## Quick Start
//! ```bash
//! # Run the program exactly as written
//! saludo
//!
//! # Same program with other inputs
//! saludo run --name Ferris --a 1 --b 2.5 --numbers 10,20,30
//!
//! # Inputs from a TOML file, report as JSON
//! saludo run --config saludo.toml --format json
//!
//! # Single steps
//! saludo greet Compilador
//! saludo add 15 25
//! saludo sum 1 2 3 4 5
//! ```
//!
//! Log output goes to stderr and is controlled by `-v`/`-vv` or `RUST_LOG`;
//! stdout carries only the program's own lines.

mod modules;

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};

use modules::commands::cli::{Args, Command, OutputFormat};
use modules::utils::{
    add_command, greet_command, resolve_params, run_script, sum_command, RunOverrides,
};
use saludo_core::ScriptParams;

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.cmd {
        // the program as written reads nothing from the environment
        None => run_script(&mut out, &ScriptParams::default(), OutputFormat::Text)?,
        Some(Command::Run {
            config,
            name,
            a,
            b,
            numbers,
            format,
        }) => {
            let params = resolve_params(
                config.as_deref(),
                RunOverrides {
                    name,
                    a,
                    b,
                    numbers,
                },
            )?;
            run_script(&mut out, &params, format)?
        }
        Some(Command::Greet { name }) => greet_command(&mut out, &name)?,
        Some(Command::Add { a, b }) => add_command(&mut out, &a, &b)?,
        Some(Command::Sum { numbers }) => sum_command(&mut out, numbers)?,
    }

    out.flush()?;
    Ok(())
}
