use num_bigint::BigInt;
use num_traits::ToPrimitive;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Numeric operand: an integer of any size or a float
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Int(BigInt),
    Float(f64),
}

impl Number {
    pub fn int(value: i64) -> Self {
        Number::Int(BigInt::from(value))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Float value of the number, `None` for an int too large to be
    /// represented as a finite float.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Number::Int(i) => i.to_f64().filter(|f| f.is_finite()),
            Number::Float(f) => Some(*f),
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::int(0)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::int(value)
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(x) => f.write_str(&format_float(*x)),
        }
    }
}

// Ints that fit in 64 bits are plain numbers; larger ones are decimal
// strings, since JSON and TOML have no wider integer type.
impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Number::Int(i) => {
                if let Some(v) = i.to_i64() {
                    serializer.serialize_i64(v)
                } else if let Some(v) = i.to_u64() {
                    serializer.serialize_u64(v)
                } else {
                    serializer.serialize_str(&i.to_string())
                }
            }
            Number::Float(x) => serializer.serialize_f64(*x),
        }
    }
}

struct NumberVisitor;

impl<'de> Visitor<'de> for NumberVisitor {
    type Value = Number;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer, a float or a string of decimal digits")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Number, E> {
        Ok(Number::int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Number, E> {
        Ok(Number::Int(BigInt::from(v)))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Number, E> {
        Ok(Number::Int(BigInt::from(v)))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Number, E> {
        Ok(Number::Int(BigInt::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Number, E> {
        Ok(Number::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Number, E> {
        let digits = v.strip_prefix('-').unwrap_or(v);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(E::invalid_value(de::Unexpected::Str(v), &self));
        }
        v.parse::<BigInt>()
            .map(Number::Int)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Number, D::Error> {
        deserializer.deserialize_any(NumberVisitor)
    }
}

/// Render a float the way the script's host prints it: always with a
/// fractional part or exponent, shortest round-trip digits, and
/// scientific form outside `[1e-4, 1e16)`.
fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }
    let abs = x.abs();
    if abs == 0.0 || (1e-4..1e16).contains(&abs) {
        // Debug keeps the ".0" suffix that Display drops
        return format!("{:?}", x);
    }
    let sci = format!("{:e}", x);
    match sci.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => sci,
    }
}

/// Ordered list of numbers, printed as `[1, 2, 3]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumberList(pub Vec<Number>);

impl NumberList {
    pub fn new(items: Vec<Number>) -> Self {
        Self(items)
    }

    pub fn as_slice(&self) -> &[Number] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<i64>> for NumberList {
    fn from(items: Vec<i64>) -> Self {
        Self(items.into_iter().map(Number::int).collect())
    }
}

impl fmt::Display for NumberList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, n) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", n)?;
        }
        f.write_str("]")
    }
}

/// Outcome of one script run, including everything it printed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionReport {
    pub success: bool,
    pub output: String,
    pub lines: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub greeting: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sum: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub list_sum: Option<Number>,
}

impl ExecutionReport {
    /// Build a report from a raw transcript; `lines` is derived from `output`.
    pub fn from_output(output: String) -> Self {
        let lines = output.lines().map(str::to_string).collect();
        Self {
            success: true,
            output,
            lines,
            error: None,
            greeting: None,
            sum: None,
            list_sum: None,
        }
    }

    pub fn failed(output: String, error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::from_output(output)
        }
    }
}
