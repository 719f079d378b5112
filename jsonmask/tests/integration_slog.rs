//! Integration tests for the slog module.
//!
//! These tests verify that:
//! - `slog_masked_json()` produces masked JSON values
//! - The `slog::Value` implementation emits the masked copy as nested JSON
//! - The original document is left untouched

#![cfg(feature = "slog")]

use std::{cell::RefCell, collections::HashMap, fmt::Arguments};

use jsonmask::{
    MaskedJson, Masker, Object, Token,
    slog::{SlogMasked, SlogMaskedExt},
};
use serde_json::{Value as JsonValue, json};

// A test serializer that captures serialized key-value pairs
struct CapturingSerializer {
    captured: RefCell<HashMap<String, CapturedValue>>,
}

#[derive(Debug, Clone, PartialEq)]
enum CapturedValue {
    Str(String),
    Serde(JsonValue),
}

impl CapturingSerializer {
    fn new() -> Self {
        Self {
            captured: RefCell::new(HashMap::new()),
        }
    }

    fn get(&self, key: &str) -> Option<CapturedValue> {
        self.captured.borrow().get(key).cloned()
    }
}

impl slog::Serializer for CapturingSerializer {
    fn emit_arguments(&mut self, key: slog::Key, val: &Arguments<'_>) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Str(val.to_string()));
        Ok(())
    }

    fn emit_str(&mut self, key: slog::Key, val: &str) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Str(val.into()));
        Ok(())
    }

    fn emit_serde(&mut self, key: slog::Key, value: &dyn slog::SerdeValue) -> slog::Result {
        let json = serde_json::to_value(value.as_serde()).unwrap_or(JsonValue::Null);
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Serde(json));
        Ok(())
    }
}

fn serialize_value<V: slog::Value>(value: &V, key: &'static str) -> CapturingSerializer {
    static RS: slog::RecordStatic<'static> = slog::record_static!(slog::Level::Info, "");
    let mut serializer = CapturingSerializer::new();
    let args = format_args!("");
    let record = slog::Record::new(&RS, &args, slog::b!());
    value
        .serialize(&record, key, &mut serializer)
        .expect("serialization should succeed");
    serializer
}

fn assert_slog_masked<T: SlogMasked>(_: &T) {}

mod masked_json {
    use super::*;

    #[test]
    fn emits_masked_value_as_nested_json() {
        let masker = Masker::new(["password"]);
        let body = json!({"user": "sam", "password": "hunter2"});

        let value = body.slog_masked_json(&masker);
        assert_slog_masked(&value);

        let serializer = serialize_value(&value, "body");
        assert_eq!(
            serializer.get("body"),
            Some(CapturedValue::Serde(
                json!({"user": "sam", "password": "***"})
            ))
        );
        assert_eq!(body["password"], "hunter2");
    }

    #[test]
    fn emits_masked_tokens() {
        let masker = Masker::new(["pin"]);
        let token = Token::from(
            Object::new()
                .with_member("card", Object::new().with_member("pin", 1234))
                .with_member("amount", 10),
        );

        let serializer = serialize_value(&token.slog_masked_json(&masker), "payment");
        assert_eq!(
            serializer.get("payment"),
            Some(CapturedValue::Serde(
                json!({"card": {"pin": "***"}, "amount": 10})
            ))
        );
    }

    #[test]
    fn references_are_masked_too() {
        let masker = Masker::new(["secret"]);
        let value: MaskedJson = json!({"secret": 1}).slog_masked_json(&masker);
        let by_ref = &value;
        assert_slog_masked(&by_ref);
        assert_eq!(value.value(), &json!({"secret": "***"}));
    }
}
