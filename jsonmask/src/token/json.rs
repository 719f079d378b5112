//! `serde_json` interop for the token model.
//!
//! Every `serde_json::Value` maps onto one of the four token kinds, so the
//! conversion is total. Going back, a standalone [`Property`] becomes a
//! single-member object and duplicate object members collapse last-wins, the
//! same way JSON parsers treat repeated keys.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::{Map, Value as JsonValue};

use super::{Array, Number, Object, Property, Scalar, Token};

impl Token {
    /// Parses JSON text into a token tree.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        let value: JsonValue = serde_json::from_str(text)?;
        Ok(Self::from(value))
    }

    /// Serializes the tree as compact JSON text.
    pub fn to_json_string(&self) -> String {
        JsonValue::from(self).to_string()
    }
}

// =============================================================================
// serde_json::Value -> Token
// =============================================================================

impl From<JsonValue> for Token {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Scalar(Scalar::Null),
            JsonValue::Bool(flag) => Self::Scalar(Scalar::Bool(flag)),
            JsonValue::Number(number) => Self::Scalar(Scalar::Number(number_from_json(&number))),
            JsonValue::String(text) => Self::Scalar(Scalar::String(text)),
            JsonValue::Array(items) => Self::Array(items.into_iter().map(Token::from).collect()),
            JsonValue::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(name, value)| Property::new(name, Token::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&JsonValue> for Token {
    fn from(value: &JsonValue) -> Self {
        Self::from(value.clone())
    }
}

fn number_from_json(number: &serde_json::Number) -> Number {
    if let Some(value) = number.as_u64() {
        Number::PosInt(value)
    } else if let Some(value) = number.as_i64() {
        Number::NegInt(value)
    } else {
        // Finite by construction: serde_json rejects NaN and infinity.
        Number::Float(number.as_f64().unwrap_or_default())
    }
}

// =============================================================================
// Token -> serde_json::Value
// =============================================================================

impl From<&Scalar> for JsonValue {
    fn from(value: &Scalar) -> Self {
        match value {
            Scalar::Null => Self::Null,
            Scalar::Bool(flag) => Self::Bool(*flag),
            Scalar::Number(Number::PosInt(value)) => Self::from(*value),
            Scalar::Number(Number::NegInt(value)) => Self::from(*value),
            // `From<f64>` maps non-finite floats to null.
            Scalar::Number(Number::Float(value)) => Self::from(*value),
            Scalar::String(text) => Self::String(text.clone()),
        }
    }
}

impl From<&Object> for JsonValue {
    fn from(value: &Object) -> Self {
        let mut map = Map::with_capacity(value.len());
        for member in value {
            map.insert(member.name().to_owned(), JsonValue::from(member.value()));
        }
        Self::Object(map)
    }
}

impl From<&Array> for JsonValue {
    fn from(value: &Array) -> Self {
        Self::Array(value.iter().map(JsonValue::from).collect())
    }
}

impl From<&Property> for JsonValue {
    fn from(value: &Property) -> Self {
        let mut map = Map::with_capacity(1);
        map.insert(value.name().to_owned(), JsonValue::from(value.value()));
        Self::Object(map)
    }
}

impl From<&Token> for JsonValue {
    fn from(value: &Token) -> Self {
        match value {
            Token::Object(object) => Self::from(object),
            Token::Array(array) => Self::from(array),
            Token::Property(property) => Self::from(property),
            Token::Scalar(scalar) => Self::from(scalar),
        }
    }
}

impl From<Token> for JsonValue {
    fn from(value: Token) -> Self {
        Self::from(&value)
    }
}

// =============================================================================
// Serialize
// =============================================================================

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Object(object) => object.serialize(serializer),
            Self::Array(array) => array.serialize(serializer),
            Self::Property(property) => property.serialize(serializer),
            Self::Scalar(scalar) => scalar.serialize(serializer),
        }
    }
}

impl Serialize for Object {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for member in self {
            map.serialize_entry(member.name(), member.value())?;
        }
        map.end()
    }
}

impl Serialize for Array {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for item in self {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

impl Serialize for Property {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.name(), self.value())?;
        map.end()
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(flag) => serializer.serialize_bool(*flag),
            Self::Number(Number::PosInt(value)) => serializer.serialize_u64(*value),
            Self::Number(Number::NegInt(value)) => serializer.serialize_i64(*value),
            Self::Number(Number::Float(value)) => serializer.serialize_f64(*value),
            Self::String(text) => serializer.serialize_str(text),
        }
    }
}
