use std::io::Write;

use saludo_models::Number;

use crate::error::{Result, SaludoError};

fn float_of(n: &Number) -> Result<f64> {
    n.to_f64()
        .ok_or_else(|| SaludoError::IntTooLarge(n.to_string()))
}

/// Sum two numbers. Two ints stay an int of whatever size the total
/// needs; anything involving a float becomes a float.
pub fn checked_add(a: &Number, b: &Number) -> Result<Number> {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => Ok(Number::Int(x + y)),
        _ => Ok(Number::Float(float_of(a)? + float_of(b)?)),
    }
}

pub fn sum_line(a: &Number, b: &Number, result: &Number) -> String {
    format!("La suma de {} + {} = {}", a, b, result)
}

/// Add `a` and `b`, print the sum line and return the result.
pub fn add<W: Write>(out: &mut W, a: &Number, b: &Number) -> Result<Number> {
    let result = checked_add(a, b)?;
    writeln!(out, "{}", sum_line(a, b, &result))?;
    Ok(result)
}
