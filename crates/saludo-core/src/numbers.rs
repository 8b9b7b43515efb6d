use num_bigint::BigInt;
use saludo_models::{Number, NumberList};

use crate::adder::checked_add;
use crate::error::{Result, SaludoError};

/// Total of all numbers, starting from integer zero.
pub fn sum(numbers: &[Number]) -> Result<Number> {
    numbers
        .iter()
        .try_fold(Number::int(0), |acc, n| checked_add(&acc, n))
}

pub fn list_line(list: &NumberList) -> String {
    format!("Lista de números: {}", list)
}

pub fn list_sum_line(total: &Number) -> String {
    format!("Suma de la lista: {}", total)
}

/// Parse a single operand. Signed digit strings are integers of any
/// length, anything else float parsing accepts is a float.
pub fn parse_number(text: &str) -> Result<Number> {
    let t = text.trim();
    let digits = t.strip_prefix(&['+', '-'][..]).unwrap_or(t);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        let magnitude: BigInt = digits
            .parse()
            .map_err(|_| SaludoError::InvalidNumber(text.to_string()))?;
        let value = if t.starts_with('-') { -magnitude } else { magnitude };
        return Ok(Number::Int(value));
    }
    t.parse::<f64>()
        .map(Number::Float)
        .map_err(|_| SaludoError::InvalidNumber(text.to_string()))
}

/// Parse a comma separated list such as `1, 2, 3`. Blank input is the
/// empty list.
pub fn parse_list(text: &str) -> Result<NumberList> {
    if text.trim().is_empty() {
        return Ok(NumberList::default());
    }
    let items = text
        .split(',')
        .map(parse_number)
        .collect::<Result<Vec<_>>>()?;
    Ok(NumberList::new(items))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_list_sums_to_fifteen() {
        let list = NumberList::from(vec![1, 2, 3, 4, 5]);
        assert_eq!(sum(list.as_slice()).unwrap(), Number::int(15));
        assert_eq!(list_line(&list), "Lista de números: [1, 2, 3, 4, 5]");
        assert_eq!(list_sum_line(&Number::int(15)), "Suma de la lista: 15");
    }

    #[test]
    fn empty_sum_is_zero() {
        assert_eq!(sum(&[]).unwrap(), Number::int(0));
    }

    #[test]
    fn mixed_sum_is_float() {
        let got = sum(&[Number::int(1), Number::Float(0.5), Number::int(2)]).unwrap();
        assert_eq!(got, Number::Float(3.5));
    }

    #[test]
    fn sum_widens_past_i64() {
        let list = NumberList::from(vec![i64::MAX, 1]);
        assert_eq!(sum(list.as_slice()).unwrap().to_string(), "9223372036854775808");

        let back = NumberList::from(vec![i64::MAX, 1, -2]);
        assert_eq!(sum(back.as_slice()).unwrap(), Number::int(i64::MAX - 1));
    }

    #[test]
    fn sum_fails_when_a_huge_int_meets_a_float() {
        let huge = Number::Int(BigInt::from(10).pow(400));
        let err = sum(&[Number::int(1), huge, Number::Float(0.5)]).unwrap_err();
        assert!(matches!(err, SaludoError::IntTooLarge(_)));
    }

    #[test]
    fn parse_operands() {
        assert_eq!(parse_number("15").unwrap(), Number::int(15));
        assert_eq!(parse_number(" -3 ").unwrap(), Number::int(-3));
        assert_eq!(parse_number("+7").unwrap(), Number::int(7));
        assert_eq!(parse_number("2.5").unwrap(), Number::Float(2.5));
        assert_eq!(parse_number("1e3").unwrap(), Number::Float(1000.0));
        assert!(matches!(
            parse_number("quince"),
            Err(SaludoError::InvalidNumber(_))
        ));
        assert!(parse_number("").is_err());
        assert!(parse_number("-").is_err());
    }

    #[test]
    fn parse_wide_ints() {
        let got = parse_number("99999999999999999999").unwrap();
        assert_eq!(got.to_string(), "99999999999999999999");
        assert!(!got.is_float());
        assert_eq!(
            parse_number("-99999999999999999999").unwrap().to_string(),
            "-99999999999999999999"
        );
    }

    #[test]
    fn parse_lists() {
        assert_eq!(
            parse_list("1,2, 3").unwrap(),
            NumberList::from(vec![1, 2, 3])
        );
        assert!(parse_list("  ").unwrap().is_empty());
        assert!(parse_list("1,,2").is_err());
    }
}
