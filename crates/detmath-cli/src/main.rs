//! # detmath CLI
//!
//! Command-line interface for evaluating and measuring the detmath
//! trigonometric kernels.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{Family, Function, Precision};

/// CLI tool for inspecting detmath kernels
#[derive(Parser)]
#[command(name = "detmath")]
#[command(about = "Evaluate and measure detmath trigonometric kernels")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a function on a scalar or a comma-separated 2/3/4-component vector
    Eval {
        /// Function to evaluate
        #[arg(value_enum)]
        function: Function,

        /// Operands (atan2 takes two: y then x), e.g. `0.5` or `0.1,0.2,0.3`
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,

        /// Element precision
        #[arg(short, long, value_enum, default_value_t = Precision::F32)]
        precision: Precision,
    },

    /// Sweep a range and report the error against the libm reference
    Sweep {
        /// Function to measure
        #[arg(value_enum)]
        function: Function,

        /// Range start (defaults to a range suited to the function)
        #[arg(long, allow_negative_numbers = true)]
        start: Option<f64>,

        /// Range end (defaults to a range suited to the function)
        #[arg(long, allow_negative_numbers = true)]
        end: Option<f64>,

        /// Number of intervals; `steps + 1` samples are taken
        #[arg(long, default_value = "10000")]
        steps: usize,

        /// Fixed x operand when sweeping atan2 over y
        #[arg(long, default_value = "1.0", allow_negative_numbers = true)]
        x: f64,

        /// Kernel family to measure
        #[arg(long, value_enum, default_value_t = Family::Active)]
        family: Family,
    },

    /// Print which kernel family was compiled in
    Mode,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Eval {
            function,
            values,
            precision,
        } => commands::eval::execute(function, &values, precision),
        Commands::Sweep {
            function,
            start,
            end,
            steps,
            x,
            family,
        } => commands::sweep::execute(function, family, start, end, steps, x),
        Commands::Mode => {
            commands::print_mode();
            Ok(())
        }
    }
}
