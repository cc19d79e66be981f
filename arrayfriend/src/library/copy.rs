use arrayfriend_value::{classify, Kind, Record, Sequence, Token, Value};

/// A shallow copy: a new sequence holding the same items.
///
/// Nested sequences and records are shared with the input.
pub fn copy(items: &[Value]) -> Vec<Value> {
    items.to_vec()
}

/// A deep copy of every item; see [`deep_copy_value`].
pub fn deep_copy(items: &[Value]) -> Vec<Value> {
    items.iter().map(deep_copy_value).collect()
}

/// Copy a value recursively.
///
/// Nested sequences and records are rebuilt with the same shape and keys,
/// so the copy shares no mutable structure with the original. Tokens are
/// replaced by freshly minted tokens. Callables are shared, and scalars are
/// copied by value.
pub fn deep_copy_value(value: &Value) -> Value {
    match classify(value) {
        Kind::Sequence(sequence) => {
            tracing::trace!(len = sequence.len(), "deep copying sequence");
            Value::Sequence(Sequence::new(deep_copy(&sequence.borrow())))
        }
        Kind::Record(record) => Value::Record(
            record
                .borrow()
                .iter()
                .map(|(key, value)| (key.clone(), deep_copy_value(value)))
                .collect::<Record>(),
        ),
        Kind::Token(_) => Value::Token(Token::new()),
        Kind::Callable(callable) => Value::Callable(callable.clone()),
        Kind::Scalar(scalar) => scalar.clone(),
    }
}
