//! `detmath eval`: evaluate one function on scalar or vector operands.

use anyhow::{bail, Context, Result};
use detmath::{Float, FloatVector, Vector};

use super::{Function, Precision};

/// Execute the eval command.
pub fn execute(function: Function, values: &[String], precision: Precision) -> Result<()> {
    let operands = parse_operands(function, values)?;

    let result = match precision {
        Precision::F32 => evaluate::<f32>(function, &operands)?,
        Precision::F64 => evaluate::<f64>(function, &operands)?,
    };

    println!(
        "{}({}) = {}",
        function.name(),
        values.join(", "),
        format_components(&result)
    );

    Ok(())
}

/// Parse and validate every operand of `function`.
///
/// All operands must have the same number of components (1 to 4).
pub fn parse_operands(function: Function, values: &[String]) -> Result<Vec<Vec<f64>>> {
    if values.len() != function.arity() {
        bail!(
            "{} takes {} operand(s), got {}",
            function.name(),
            function.arity(),
            values.len()
        );
    }

    let operands = values
        .iter()
        .map(|value| parse_operand(value))
        .collect::<Result<Vec<_>>>()?;

    let width = operands.first().map_or(0, Vec::len);
    if operands.iter().any(|operand| operand.len() != width) {
        bail!("All operands must have the same number of components");
    }

    Ok(operands)
}

/// Parse `"0.5"` or `"0.1,0.2,0.3"` into its components.
pub fn parse_operand(text: &str) -> Result<Vec<f64>> {
    let components = text
        .split(',')
        .map(|component| {
            component
                .trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid component '{}' in operand '{}'", component, text))
        })
        .collect::<Result<Vec<_>>>()?;

    if !(1..=4).contains(&components.len()) {
        bail!(
            "Operand '{}' has {} components; expected 1 to 4",
            text,
            components.len()
        );
    }

    Ok(components)
}

/// Evaluate at precision `T`, picking the vector width from the operands.
pub fn evaluate<T: Float + FloatVector>(function: Function, operands: &[Vec<f64>]) -> Result<Vec<f64>> {
    match operands.first().map_or(0, Vec::len) {
        1 => {
            let args: Vec<T> = operands.iter().map(|o| T::from_f64(o[0])).collect();
            let result = function.apply(&args)?;
            Ok(vec![result.to_f64()])
        }
        2 => evaluate_vector::<T, 2>(function, operands),
        3 => evaluate_vector::<T, 3>(function, operands),
        4 => evaluate_vector::<T, 4>(function, operands),
        n => bail!("Unsupported vector width {}", n),
    }
}

fn evaluate_vector<T: Float, const N: usize>(
    function: Function,
    operands: &[Vec<f64>],
) -> Result<Vec<f64>> {
    let args: Vec<Vector<T, N>> = operands
        .iter()
        .map(|o| Vector(core::array::from_fn(|i| T::from_f64(o[i]))))
        .collect();
    let result = function.apply(&args)?;
    Ok(result.into_array().iter().map(|c| c.to_f64()).collect())
}

fn format_components(components: &[f64]) -> String {
    match components {
        [single] => format!("{}", single),
        _ => {
            let parts: Vec<String> = components.iter().map(|c| c.to_string()).collect();
            format!("[{}]", parts.join(", "))
        }
    }
}
