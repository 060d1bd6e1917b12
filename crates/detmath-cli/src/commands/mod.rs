//! Subcommands and the function table they share.

pub mod eval;
pub mod sweep;

use anyhow::{bail, Result};
use clap::ValueEnum;
use detmath::FloatVector;

/// Functions exposed on the command line
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Function {
    Radians,
    Degrees,
    Cos,
    Sin,
    Tan,
    Asin,
    Acos,
    Atan,
    Atan2,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
}

impl Function {
    /// Name as typed on the command line
    pub fn name(self) -> &'static str {
        match self {
            Function::Radians => "radians",
            Function::Degrees => "degrees",
            Function::Cos => "cos",
            Function::Sin => "sin",
            Function::Tan => "tan",
            Function::Asin => "asin",
            Function::Acos => "acos",
            Function::Atan => "atan",
            Function::Atan2 => "atan2",
            Function::Sinh => "sinh",
            Function::Cosh => "cosh",
            Function::Tanh => "tanh",
            Function::Asinh => "asinh",
            Function::Acosh => "acosh",
            Function::Atanh => "atanh",
        }
    }

    /// Number of operands
    pub fn arity(self) -> usize {
        match self {
            Function::Atan2 => 2,
            _ => 1,
        }
    }

    /// The lifted one-operand function, or `None` for atan2.
    pub fn unary<V: FloatVector>(self) -> Option<fn(V) -> V> {
        let f: fn(V) -> V = match self {
            Function::Radians => detmath::radians,
            Function::Degrees => detmath::degrees,
            Function::Cos => detmath::cos,
            Function::Sin => detmath::sin,
            Function::Tan => detmath::tan,
            Function::Asin => detmath::asin,
            Function::Acos => detmath::acos,
            Function::Atan => detmath::atan,
            Function::Sinh => detmath::sinh,
            Function::Cosh => detmath::cosh,
            Function::Tanh => detmath::tanh,
            Function::Asinh => detmath::asinh,
            Function::Acosh => detmath::acosh,
            Function::Atanh => detmath::atanh,
            Function::Atan2 => return None,
        };
        Some(f)
    }

    /// Apply to operands of any shape, checking the operand count.
    pub fn apply<V: FloatVector>(self, args: &[V]) -> Result<V> {
        match (self.unary::<V>(), args) {
            (Some(f), &[x]) => Ok(f(x)),
            (None, &[y, x]) => Ok(detmath::atan2(y, x)),
            _ => bail!(
                "{} takes {} operand(s), got {}",
                self.name(),
                self.arity(),
                args.len()
            ),
        }
    }

    /// Double-precision libm value, the accuracy reference for sweeps.
    ///
    /// `b` is only read by atan2, as the x operand.
    pub fn reference(self, a: f64, b: f64) -> f64 {
        match self {
            Function::Radians => a.to_radians(),
            Function::Degrees => a.to_degrees(),
            Function::Cos => libm::cos(a),
            Function::Sin => libm::sin(a),
            Function::Tan => libm::tan(a),
            Function::Asin => libm::asin(a),
            Function::Acos => libm::acos(a),
            Function::Atan => libm::atan(a),
            Function::Atan2 => libm::atan2(a, b),
            Function::Sinh => libm::sinh(a),
            Function::Cosh => libm::cosh(a),
            Function::Tanh => libm::tanh(a),
            Function::Asinh => libm::asinh(a),
            Function::Acosh => libm::acosh(a),
            Function::Atanh => libm::atanh(a),
        }
    }

    /// Sweep range used when `--start`/`--end` are not given
    pub fn default_range(self) -> (f64, f64) {
        use core::f64::consts::PI;
        match self {
            Function::Radians => (-360.0, 360.0),
            Function::Degrees => (-2.0 * PI, 2.0 * PI),
            Function::Tan => (-1.4, 1.4),
            Function::Asin | Function::Acos => (-1.0, 1.0),
            Function::Atan | Function::Atan2 => (-50.0, 50.0),
            Function::Sinh | Function::Cosh | Function::Asinh => (-10.0, 10.0),
            Function::Tanh => (-5.0, 5.0),
            Function::Acosh => (1.0, 50.0),
            Function::Atanh => (-0.99, 0.99),
            Function::Cos | Function::Sin => (-PI, PI),
        }
    }
}

/// Element precision for `eval`
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Precision {
    F32,
    F64,
}

/// Which kernels `sweep` measures
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Family {
    /// Whatever this build dispatches to
    Active,
    /// The minimax kernels, regardless of build mode
    Deterministic,
    /// The platform primitives, regardless of build mode
    Platform,
}

impl Family {
    /// Human-readable label
    pub fn describe(self) -> &'static str {
        match self {
            Family::Active if detmath::DETERMINISTIC => "active (deterministic kernels)",
            Family::Active => "active (platform primitives)",
            Family::Deterministic => "deterministic kernels",
            Family::Platform => "platform primitives",
        }
    }
}

/// Print the compiled kernel family.
pub fn print_mode() {
    if detmath::DETERMINISTIC {
        println!("Kernel family: deterministic");
        println!("cos/sin/tan/asin/acos/atan/atan2 use fixed-coefficient minimax kernels");
        println!("Results are bit-identical across targets and compilers");
    } else {
        println!("Kernel family: platform");
        println!("All functions call the platform math primitives");
        println!("Rebuild with `--features deterministic` for bit-reproducible results");
    }
}
