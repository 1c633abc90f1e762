//! Scalar attribute values.
//!
//! UDMF attributes carry one of four scalar types: signed 64-bit integers,
//! IEEE double-precision floats, booleans, and strings. [`Scalar`] is the
//! tagged union used throughout the object model. Bare keyword tokens are
//! deliberately not representable here; the parser rejects them before a
//! value is ever constructed (see [`Error::UnsupportedValue`]).
//!
//! [`Error::UnsupportedValue`]: crate::Error::UnsupportedValue

use std::fmt;

/// A single UDMF attribute value.
///
/// `Display` renders the UDMF literal form used by the serializer:
/// strings are wrapped in double quotes, booleans are the words
/// `true`/`false`, integers never carry a decimal point, and floats are
/// always written so they re-parse as floats (a `.0` is inserted when
/// shortest-form formatting would drop the point, e.g. `1e300` becomes
/// `1.0e300`).
///
/// Known fidelity limitation: string values are emitted verbatim between
/// the quotes, with no re-escaping. A string containing `"` or `\` will
/// not survive a round trip; parsed maps only produce such strings if the
/// original used escape sequences.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// A signed integer (decimal or hexadecimal literal in source).
    Integer(i64),
    /// A double-precision float.
    Float(f64),
    /// A boolean.
    Boolean(bool),
    /// A string, with source escape sequences already resolved.
    String(String),
}

impl Scalar {
    /// Returns the integer payload, if this is an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the float payload, if this is a float.
    ///
    /// Integers are not coerced; `Scalar::Integer(1).as_float()` is `None`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Returns the boolean payload, if this is a boolean.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// A short name for the scalar's type, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Boolean(_) => "boolean",
            Self::String(_) => "string",
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Float(x) => write_float(f, *x),
            Self::Boolean(b) => write!(f, "{}", if *b { "true" } else { "false" }),
            Self::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

/// Writes `x` so the grammar lexes it back as a float token.
///
/// Rust's shortest round-trip formatting drops the decimal point for whole
/// values in exponent form (`1e300`); the grammar requires digits, a point,
/// then an optional exponent.
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    let s = format!("{:?}", x);
    if s.contains('.') {
        return f.write_str(&s);
    }
    match s.find(['e', 'E']) {
        Some(pos) => write!(f, "{}.0{}", &s[..pos], &s[pos..]),
        None => write!(f, "{}.0", s),
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
