use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;

use saludo_core::adder::add;
use saludo_core::greeter::greet;
use saludo_core::numbers::{list_line, list_sum_line, sum};
use saludo_core::script::returned_line;
use saludo_core::{run, run_report, Config, Number, NumberList, ScriptParams};

use crate::modules::commands::cli::OutputFormat;

/// Overrides given on the command line for `run`.
#[derive(Debug, Default)]
pub struct RunOverrides {
    pub name: Option<String>,
    pub a: Option<Number>,
    pub b: Option<Number>,
    pub numbers: Option<NumberList>,
}

/// Merge config file, environment and flags into the script inputs.
pub fn resolve_params(config: Option<&Path>, overrides: RunOverrides) -> Result<ScriptParams> {
    let mut cfg = match config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };
    cfg.apply_env();

    if let Some(name) = overrides.name {
        cfg.name = name;
    }
    if let Some(a) = overrides.a {
        cfg.a = a;
    }
    if let Some(b) = overrides.b {
        cfg.b = b;
    }
    if let Some(numbers) = overrides.numbers {
        cfg.numbers = numbers;
    }
    log::debug!("resolved config: {:?}", cfg);
    Ok(cfg.into_params())
}

/// Run the program with `params`, in the requested format.
pub fn run_script<W: Write>(out: &mut W, params: &ScriptParams, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            run(out, params).context("script failed")?;
        }
        OutputFormat::Json => {
            let report = run_report(&mut io::sink(), params);
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
            if let Some(err) = report.error {
                anyhow::bail!("script failed: {}", err);
            }
        }
    }
    Ok(())
}

pub fn greet_command<W: Write>(out: &mut W, name: &str) -> Result<()> {
    let message = greet(out, name)?;
    writeln!(out, "{}", returned_line(&message))?;
    Ok(())
}

pub fn add_command<W: Write>(out: &mut W, a: &Number, b: &Number) -> Result<()> {
    add(out, a, b)?;
    Ok(())
}

pub fn sum_command<W: Write>(out: &mut W, numbers: Vec<Number>) -> Result<()> {
    let list = NumberList::new(numbers);
    writeln!(out, "{}", list_line(&list))?;
    let total = sum(list.as_slice())?;
    writeln!(out, "{}", list_sum_line(&total))?;
    Ok(())
}
