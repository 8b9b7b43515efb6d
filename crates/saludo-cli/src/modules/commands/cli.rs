use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use saludo_core::{parse_list, parse_number, Number, NumberList};
use std::path::PathBuf;

/// Output format of the `run` command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The program's own console lines
    #[default]
    Text,
    /// A JSON execution report
    Json,
}

fn number_arg(s: &str) -> Result<Number, String> {
    parse_number(s).map_err(|e| e.to_string())
}

fn list_arg(s: &str) -> Result<NumberList, String> {
    parse_list(s).map_err(|e| e.to_string())
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the demo program with optional overrides.
    ///
    /// Settings are layered: built-in literals, then the config file,
    /// then `SALUDO_NAME`, `SALUDO_A`, `SALUDO_B`, `SALUDO_NUMBERS`, then
    /// the flags below.
    #[command(allow_negative_numbers = true)]
    Run {
        /// TOML config file
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Name to greet
        #[arg(short, long)]
        name: Option<String>,

        /// First operand of the sum
        #[arg(long, value_parser = number_arg)]
        a: Option<Number>,

        /// Second operand of the sum
        #[arg(long, value_parser = number_arg)]
        b: Option<Number>,

        /// Comma separated list to sum, e.g. `1,2,3`
        #[arg(long, value_parser = list_arg)]
        numbers: Option<NumberList>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the greeting for NAME and the message it returns.
    Greet {
        name: String,
    },

    /// Add two numbers and print the sum line.
    #[command(allow_negative_numbers = true)]
    Add {
        #[arg(value_parser = number_arg)]
        a: Number,
        #[arg(value_parser = number_arg)]
        b: Number,
    },

    /// Print a list of numbers and its total.
    #[command(allow_negative_numbers = true)]
    Sum {
        #[arg(value_parser = number_arg)]
        numbers: Vec<Number>,
    },
}

/// saludo - the greeter/adder demo program.
///
/// Without a subcommand it runs the program exactly as written: greets
/// "Compilador", adds 15 and 25, and sums [1, 2, 3, 4, 5].
#[derive(Debug, Parser)]
#[command(name = "saludo", version, about, long_about = None)]
pub struct Args {
    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}
