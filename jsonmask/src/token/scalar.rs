//! Leaf values.

use std::fmt;

use super::Token;

/// A JSON number, split into the same classes `serde_json` uses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    PosInt(u64),
    NegInt(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PosInt(value) => write!(f, "{value}"),
            Self::NegInt(value) => write!(f, "{value}"),
            // JSON has no NaN or infinity.
            Self::Float(value) if !value.is_finite() => f.write_str("null"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

/// A leaf value: `null`, a boolean, a number or a string.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl Scalar {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Number(value) => fmt::Display::fmt(value, f),
            Self::String(value) => write_json_string(f, value),
        }
    }
}

/// Writes `value` as a quoted JSON string literal.
pub(super) fn write_json_string(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_str("\"")?;
    for ch in value.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{08}' => f.write_str("\\b")?,
            '\u{0c}' => f.write_str("\\f")?,
            c if u32::from(c) < 0x20 => write!(f, "\\u{:04x}", u32::from(c))?,
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}

// =============================================================================
// Conversions from Rust primitives
// =============================================================================

macro_rules! impl_from_unsigned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Self::Number(Number::PosInt(u64::from(value)))
                }
            }
        )*
    };
}

macro_rules! impl_from_signed {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    let value = i64::from(value);
                    match u64::try_from(value) {
                        Ok(unsigned) => Self::Number(Number::PosInt(unsigned)),
                        Err(_) => Self::Number(Number::NegInt(value)),
                    }
                }
            }
        )*
    };
}

macro_rules! impl_token_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Token {
                fn from(value: $ty) -> Self {
                    Token::Scalar(Scalar::from(value))
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64);
impl_from_signed!(i8, i16, i32, i64);
impl_token_from_scalar!(
    u8,
    u16,
    u32,
    u64,
    i8,
    i16,
    i32,
    i64,
    f32,
    f64,
    bool,
    String,
    &str,
    Number,
);

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Number(Number::Float(value))
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Self::Number(Number::Float(f64::from(value)))
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<Number> for Scalar {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl<T> From<Option<T>> for Scalar
where
    T: Into<Scalar>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_non_negative_values_are_pos_int() {
        assert_eq!(Scalar::from(5_i32), Scalar::Number(Number::PosInt(5)));
        assert_eq!(Scalar::from(-5_i64), Scalar::Number(Number::NegInt(-5)));
    }

    #[test]
    fn option_none_is_null() {
        assert_eq!(Scalar::from(None::<String>), Scalar::Null);
        assert_eq!(Scalar::from(Some("x")), Scalar::String("x".into()));
    }

    #[test]
    fn escapes_control_characters() {
        let scalar = Scalar::from("a\nb\u{1}\\");
        assert_eq!(scalar.to_string(), r#""a\nb\u0001\\""#);
    }

    #[test]
    fn non_finite_floats_print_as_null() {
        assert_eq!(Scalar::from(f64::NAN).to_string(), "null");
        assert_eq!(Scalar::from(1.5_f64).to_string(), "1.5");
    }
}
