use std::rc::Rc;

use ordered_float::OrderedFloat;

use crate::Value;

impl Value {
    /// Strict equality.
    ///
    /// Scalars compare by value without coercion: `1` is not `"1"`, NaN is
    /// not equal to itself and `-0` equals `0`. Sequences, records, tokens
    /// and callables compare by identity.
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Token(a), Value::Token(b)) => a.ptr_eq(b),
            (Value::Callable(a), Value::Callable(b)) => a.ptr_eq(b),
            (Value::Sequence(a), Value::Sequence(b)) => a.ptr_eq(b),
            (Value::Record(a), Value::Record(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Like [`Value::strict_equals`], except that NaN equals NaN.
    ///
    /// This is the equality used for deduplication.
    pub fn same_value_zero(&self, other: &Value) -> bool {
        SameValueKey::new(self) == SameValueKey::new(other)
    }
}

/// A hashable key such that two values have equal keys exactly when they
/// are equal under [`Value::same_value_zero`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SameValueKey {
    Undefined,
    Null,
    Boolean(bool),
    // -0 is folded into 0; all NaNs are equal as OrderedFloat
    Number(OrderedFloat<f64>),
    String(Rc<str>),
    // identity of a shared value, by address
    Reference(usize),
}

impl SameValueKey {
    pub fn new(value: &Value) -> Self {
        match value {
            Value::Undefined => SameValueKey::Undefined,
            Value::Null => SameValueKey::Null,
            Value::Boolean(b) => SameValueKey::Boolean(*b),
            Value::Number(n) => {
                let n = if *n == 0.0 { 0.0 } else { *n };
                SameValueKey::Number(OrderedFloat(n))
            }
            Value::String(s) => SameValueKey::String(s.clone()),
            Value::Token(token) => SameValueKey::Reference(token.address()),
            Value::Callable(callable) => SameValueKey::Reference(callable.address()),
            Value::Sequence(sequence) => SameValueKey::Reference(sequence.address()),
            Value::Record(record) => SameValueKey::Reference(record.address()),
        }
    }
}
