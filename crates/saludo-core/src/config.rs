use serde::Deserialize;
use std::env::VarError;
use std::fs;
use std::path::Path;

use saludo_models::{Number, NumberList};

use crate::error::{Result, SaludoError};
use crate::numbers::{parse_list, parse_number};
use crate::script::{ScriptParams, DEFAULT_NAME, DEFAULT_NUMBERS, DEFAULT_OPERANDS};

pub const ENV_NAME: &str = "SALUDO_NAME";
pub const ENV_A: &str = "SALUDO_A";
pub const ENV_B: &str = "SALUDO_B";
pub const ENV_NUMBERS: &str = "SALUDO_NUMBERS";

/// Run configuration.
///
/// Every key of the TOML file is optional; missing keys keep the program's
/// own literals.
///
/// # Example
/// ```toml
/// name = "Ferris"
/// a = 1
/// b = 2.5
/// numbers = [10, 20, 30]
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub name: String,
    pub a: Number,
    pub b: Number,
    pub numbers: NumberList,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            a: Number::int(DEFAULT_OPERANDS.0),
            b: Number::int(DEFAULT_OPERANDS.1),
            numbers: NumberList::from(DEFAULT_NUMBERS.to_vec()),
        }
    }
}

/// Value of an override variable. Non-UTF-8 values are ignored like any
/// other unusable override.
fn env_value(key: &str, value: std::result::Result<String, VarError>) -> Option<String> {
    match value {
        Ok(v) => Some(v),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(raw)) => {
            log::warn!("ignoring {}: not valid UTF-8 ({:?})", key, raw);
            None
        }
    }
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SaludoError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        log::debug!("loaded config from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Apply `SALUDO_*` overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_vars(|key| env_value(key, std::env::var(key)));
    }

    /// Apply overrides from an arbitrary lookup. Values that do not parse
    /// are ignored and the previous setting is kept.
    pub fn apply_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup(ENV_NAME) {
            self.name = name;
        }
        if let Some(raw) = lookup(ENV_A) {
            match parse_number(&raw) {
                Ok(n) => self.a = n,
                Err(e) => log::warn!("ignoring {}: {}", ENV_A, e),
            }
        }
        if let Some(raw) = lookup(ENV_B) {
            match parse_number(&raw) {
                Ok(n) => self.b = n,
                Err(e) => log::warn!("ignoring {}: {}", ENV_B, e),
            }
        }
        if let Some(raw) = lookup(ENV_NUMBERS) {
            match parse_list(&raw) {
                Ok(list) => self.numbers = list,
                Err(e) => log::warn!("ignoring {}: {}", ENV_NUMBERS, e),
            }
        }
    }

    pub fn into_params(self) -> ScriptParams {
        ScriptParams {
            name: self.name,
            operands: (self.a, self.b),
            numbers: self.numbers,
        }
    }
}
