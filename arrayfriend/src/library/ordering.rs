use std::cmp::Ordering;

use arrayfriend_value::Value;

// Numeric order for the sorts. Undefined items always go last, then items
// that have no numeric value; both groups keep their relative order.
fn compare(a: &Value, b: &Value, descending: bool) -> Ordering {
    match (a.is_undefined(), b.is_undefined()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }
    let (a, b) = (a.to_number(), b.to_number());
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            // neither is NaN, so this is a total order
            let ordering = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            if descending {
                ordering.reverse()
            } else {
                ordering
            }
        }
    }
}

/// Sort numerically, smallest first, in place.
///
/// The sort is stable. Items are compared by their numeric value, so `"10"`
/// sorts after `9`.
pub fn ascending(items: &mut [Value]) {
    items.sort_by(|a, b| compare(a, b, false));
}

/// Sort numerically, largest first, in place.
pub fn descending(items: &mut [Value]) {
    items.sort_by(|a, b| compare(a, b, true));
}

/// The items without null, undefined and empty strings. Other falsy
/// values such as `0` and `false` are kept.
pub fn remove_null_values(items: &[Value]) -> Vec<Value> {
    items
        .iter()
        .filter(|item| !item.is_nullish() && item.as_str() != Some(""))
        .cloned()
        .collect()
}

/// The items that are truthy.
pub fn remove_falsy_values(items: &[Value]) -> Vec<Value> {
    items.iter().filter(|item| item.is_truthy()).cloned().collect()
}

pub fn is_empty(items: &[Value]) -> bool {
    items.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers_of(values: &[f64]) -> Vec<Value> {
        values.iter().copied().map(Value::from).collect()
    }

    #[test]
    fn test_ascending() {
        let mut items = numbers_of(&[10.0, 1.0, 5.0, -2.0]);
        ascending(&mut items);
        assert_eq!(items, numbers_of(&[-2.0, 1.0, 5.0, 10.0]));
    }

    #[test]
    fn test_descending() {
        let mut items = numbers_of(&[10.0, 1.0, 5.0, -2.0]);
        descending(&mut items);
        assert_eq!(items, numbers_of(&[10.0, 5.0, 1.0, -2.0]));
    }

    #[test]
    fn test_numeric_not_lexical() {
        let mut items = vec![Value::from("10"), Value::from(9), Value::from("100")];
        ascending(&mut items);
        assert_eq!(
            items,
            vec![Value::from(9), Value::from("10"), Value::from("100")]
        );
    }

    #[test]
    fn test_undefined_and_nan_last() {
        let mut items = vec![
            Value::Undefined,
            Value::from("x"),
            Value::from(3),
            Value::from(1),
        ];
        descending(&mut items);
        assert_eq!(items[0], Value::from(3));
        assert_eq!(items[1], Value::from(1));
        assert_eq!(items[2], Value::from("x"));
        assert!(items[3].is_undefined());
    }

    #[test]
    fn test_remove_null_values() {
        let items = vec![
            Value::from(0),
            Value::Null,
            Value::from(""),
            Value::from(false),
            Value::Undefined,
            Value::from("a"),
        ];
        assert_eq!(
            remove_null_values(&items),
            vec![Value::from(0), Value::from(false), Value::from("a")]
        );
    }

    #[test]
    fn test_remove_falsy_values() {
        let items = vec![
            Value::from(0),
            Value::Null,
            Value::from(""),
            Value::from(false),
            Value::Undefined,
            Value::from(f64::NAN),
            Value::from("a"),
            Value::from(-1),
        ];
        assert_eq!(
            remove_falsy_values(&items),
            vec![Value::from("a"), Value::from(-1)]
        );
    }

    #[test]
    fn test_is_empty() {
        assert!(is_empty(&[]));
        assert!(!is_empty(&[Value::Null]));
    }
}
