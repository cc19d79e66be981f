use arrayfriend_value::{classify, Kind, Value};

/// Compare two sequences by structure.
///
/// Sequences are equal when they have the same length and their items are
/// pairwise equal according to [`deep_equal_value`].
pub fn deep_equal(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(a, b)| deep_equal_value(a, b))
}

/// Compare two values by structure.
///
/// - Sequences are compared with [`deep_equal`].
///
/// - Records are equal when they have the same keys and the values under
///   each key are deeply equal. Key order does not matter.
///
/// - Tokens equal any other token and callables equal any other callable,
///   as there is nothing to compare.
///
/// - Scalars use strict equality.
pub fn deep_equal_value(a: &Value, b: &Value) -> bool {
    match (classify(a), classify(b)) {
        (Kind::Sequence(a), Kind::Sequence(b)) => {
            if a.ptr_eq(b) {
                return true;
            }
            deep_equal(&a.borrow(), &b.borrow())
        }
        (Kind::Record(a), Kind::Record(b)) => {
            if a.ptr_eq(b) {
                return true;
            }
            let (a, b) = (a.borrow(), b.borrow());
            a.len() == b.len()
                && a.iter().all(|(key, value)| {
                    b.get(key)
                        .is_some_and(|other| deep_equal_value(value, other))
                })
        }
        (Kind::Token(_), Kind::Token(_)) | (Kind::Callable(_), Kind::Callable(_)) => true,
        (Kind::Scalar(a), Kind::Scalar(b)) => a.strict_equals(b),
        _ => false,
    }
}
