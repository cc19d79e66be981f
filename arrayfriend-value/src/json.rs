use json::object::Object;
use json::JsonValue;

use crate::{classify, Kind, Value};

/// Render a value as JSON text.
///
/// Returns `None` for values that have no JSON form at the top level:
/// undefined, tokens and callables. Inside a record such entries are left
/// out; inside a sequence they become `null`. Non-finite numbers render as
/// `null`.
pub fn stringify(value: &Value) -> Option<String> {
    to_json(value).map(|json| json.dump())
}

fn to_json(value: &Value) -> Option<JsonValue> {
    match classify(value) {
        Kind::Scalar(scalar) => match scalar {
            Value::Undefined => None,
            Value::Null => Some(JsonValue::Null),
            Value::Boolean(b) => Some(JsonValue::Boolean(*b)),
            Value::Number(n) if n.is_finite() => {
                // -0 renders as 0
                let n = if *n == 0.0 { 0.0 } else { *n };
                Some(JsonValue::from(n))
            }
            Value::Number(_) => Some(JsonValue::Null),
            Value::String(s) => Some(JsonValue::String(s.to_string())),
            _ => None,
        },
        Kind::Sequence(sequence) => Some(JsonValue::Array(
            sequence
                .borrow()
                .iter()
                .map(|item| to_json(item).unwrap_or(JsonValue::Null))
                .collect(),
        )),
        Kind::Record(record) => {
            let mut object = Object::new();
            for (key, value) in record.borrow().iter() {
                if let Some(json) = to_json(value) {
                    object.insert(key, json);
                }
            }
            Some(JsonValue::Object(object))
        }
        Kind::Token(_) | Kind::Callable(_) => None,
    }
}
