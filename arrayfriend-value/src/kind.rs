use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::{Callable, Record, Sequence, Token, Value};

/// The closed classification of a value, used by everything that needs to
/// treat values differently by their structure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kind<'a> {
    /// Text, number, boolean, null or undefined.
    Scalar(&'a Value),
    Sequence(&'a Sequence),
    Record(&'a Record),
    Token(&'a Token),
    Callable(&'a Callable),
}

/// Classify a value by its structure.
pub fn classify(value: &Value) -> Kind<'_> {
    match value {
        Value::Sequence(sequence) => Kind::Sequence(sequence),
        Value::Record(record) => Kind::Record(record),
        Value::Token(token) => Kind::Token(token),
        Value::Callable(callable) => Kind::Callable(callable),
        Value::Undefined
        | Value::Null
        | Value::Boolean(_)
        | Value::Number(_)
        | Value::String(_) => Kind::Scalar(value),
    }
}

/// The type tag of a value, as reported by [`Value::value_type`].
///
/// Null, sequences and records all report `object`; use [`TypeFilter`] to
/// tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValueType {
    Undefined,
    Object,
    Boolean,
    Number,
    String,
    Symbol,
    Function,
}

/// The kinds a sequence can be filtered by.
///
/// Parses from the names `string`, `number`, `null`, `undefined`, `boolean`,
/// `symbol`, `function`, `object`, `array` and `objectOnly`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum TypeFilter {
    String,
    Number,
    Null,
    Undefined,
    Boolean,
    Symbol,
    Function,
    /// Anything whose type tag is `object`: null, sequences and records.
    Object,
    Array,
    /// Records only: structured, keyed and not a sequence.
    ObjectOnly,
}

impl TypeFilter {
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            TypeFilter::Null => value.is_null(),
            TypeFilter::Array => matches!(classify(value), Kind::Sequence(_)),
            TypeFilter::ObjectOnly => matches!(classify(value), Kind::Record(_)),
            TypeFilter::String => value.value_type() == ValueType::String,
            TypeFilter::Number => value.value_type() == ValueType::Number,
            TypeFilter::Undefined => value.value_type() == ValueType::Undefined,
            TypeFilter::Boolean => value.value_type() == ValueType::Boolean,
            TypeFilter::Symbol => value.value_type() == ValueType::Symbol,
            TypeFilter::Function => value.value_type() == ValueType::Function,
            TypeFilter::Object => value.value_type() == ValueType::Object,
        }
    }
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match classify(self) {
            Kind::Scalar(Value::Undefined) => ValueType::Undefined,
            Kind::Scalar(Value::Boolean(_)) => ValueType::Boolean,
            Kind::Scalar(Value::Number(_)) => ValueType::Number,
            Kind::Scalar(Value::String(_)) => ValueType::String,
            // null is an object, for historical reasons
            Kind::Scalar(_) | Kind::Sequence(_) | Kind::Record(_) => ValueType::Object,
            Kind::Token(_) => ValueType::Symbol,
            Kind::Callable(_) => ValueType::Function,
        }
    }
}
