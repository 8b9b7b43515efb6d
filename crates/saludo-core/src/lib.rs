//! # saludo-core
//!
//! The greeter/adder demo program as a library.
//!
//! ## Features
//! - [`greeter`]: builds and prints the greeting
//! - [`adder`]: int/float addition, ints of any size
//! - [`numbers`]: list sum and operand parsing
//! - [`script`]: the full main sequence with a captured transcript
//! - [`config`]: TOML file and `SALUDO_*` environment overrides

pub mod adder;
pub mod config;
pub mod error;
pub mod greeter;
pub mod numbers;
pub mod script;

pub use adder::{add, checked_add};
pub use config::Config;
pub use error::{Result, SaludoError};
pub use greeter::greet;
pub use numbers::{parse_list, parse_number, sum};
pub use script::{run, run_report, ScriptParams, Transcript};

pub use saludo_models::{ExecutionReport, Number, NumberList};
