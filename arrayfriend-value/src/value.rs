use std::rc::Rc;

use crate::{Callable, Record, Sequence, Token};

/// A dynamically typed value.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The absent marker.
    #[default]
    Undefined,
    /// The explicit null marker.
    Null,
    Boolean(bool),
    /// A number. All numbers are IEEE 754 doubles.
    Number(f64),
    String(Rc<str>),
    /// A unique token, only ever equal to itself.
    Token(Token),
    Callable(Callable),
    /// A nested sequence, shared by reference.
    Sequence(Sequence),
    /// A keyed record, shared by reference.
    Record(Record),
}

impl Value {
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Null or undefined.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Value::Sequence(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Look up a named property.
    ///
    /// Records resolve their own keys. Sequences resolve numeric indexes and
    /// `length`, and strings resolve `length`. Everything else is undefined.
    pub fn property(&self, key: &str) -> Value {
        match self {
            Value::Record(record) => record.get(key).unwrap_or_default(),
            Value::Sequence(sequence) => {
                if key == "length" {
                    return Value::Number(sequence.len() as f64);
                }
                key.parse::<usize>()
                    .ok()
                    .and_then(|index| sequence.get(index))
                    .unwrap_or_default()
            }
            Value::String(s) if key == "length" => Value::Number(s.encode_utf16().count() as f64),
            _ => Value::Undefined,
        }
    }
}

// strict equality; see equality.rs
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.strict_equals(other)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into())
    }
}

impl From<Rc<str>> for Value {
    fn from(s: Rc<str>) -> Self {
        Value::String(s)
    }
}

impl From<Token> for Value {
    fn from(token: Token) -> Self {
        Value::Token(token)
    }
}

impl From<Callable> for Value {
    fn from(callable: Callable) -> Self {
        Value::Callable(callable)
    }
}

impl From<Sequence> for Value {
    fn from(sequence: Sequence) -> Self {
        Value::Sequence(sequence)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Record(record)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_of_record() {
        let record = Record::from_iter([("a", Value::from(1))]);
        let value = Value::from(record);
        assert_eq!(value.property("a"), Value::from(1));
        assert!(value.property("b").is_undefined());
    }

    #[test]
    fn test_property_of_sequence() {
        let value = Value::from(vec![Value::from("x"), Value::from("y")]);
        assert_eq!(value.property("1"), Value::from("y"));
        assert_eq!(value.property("length"), Value::from(2));
        assert!(value.property("2").is_undefined());
    }

    #[test]
    fn test_property_of_scalar() {
        assert!(Value::from(1).property("a").is_undefined());
        assert!(Value::Null.property("a").is_undefined());
    }
}
