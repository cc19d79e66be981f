use std::str::FromStr;

use ahash::{HashSet, HashSetExt};
use arrayfriend_value::{Record, SameValueKey, TypeFilter, Value};
use strum::IntoEnumIterator;

use crate::error;

/// The items without duplicates, keeping the first occurrence of each.
///
/// Scalars are compared by value (NaN counts as a duplicate of NaN), while
/// sequences, records, tokens and callables are compared by identity: two
/// distinct records with the same contents are both kept.
pub fn remove_duplicates(items: &[Value]) -> Vec<Value> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(SameValueKey::new(item)))
        .cloned()
        .collect()
}

/// Every occurrence after the first of each repeated item, in order.
///
/// An item that occurs `k` times contributes `k - 1` copies. Equality is the
/// same as in [`remove_duplicates`].
pub fn only_duplicates(items: &[Value]) -> Vec<Value> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| !seen.insert(SameValueKey::new(item)))
        .cloned()
        .collect()
}

/// The number of items strictly equal to `value`.
pub fn count_of(items: &[Value], value: &Value) -> usize {
    items.iter().filter(|item| item.strict_equals(value)).count()
}

/// The number of items for which `predicate(item, index, items)` holds.
pub fn count_if<F>(items: &[Value], mut predicate: F) -> usize
where
    F: FnMut(&Value, usize, &[Value]) -> bool,
{
    items
        .iter()
        .enumerate()
        .filter(|(index, item)| predicate(item, *index, items))
        .count()
}

/// The first item matching every entry in `pattern`; see
/// [`partial_match_index`].
pub fn partial_match(items: &[Value], pattern: &Record) -> Option<Value> {
    partial_match_index(items, pattern).map(|index| items[index].clone())
}

/// The index of the first item whose properties are strictly equal to every
/// entry in `pattern`. Properties the pattern does not mention are ignored,
/// so an empty pattern matches the first item.
pub fn partial_match_index(items: &[Value], pattern: &Record) -> Option<usize> {
    let pattern = pattern.borrow();
    items.iter().position(|item| {
        pattern
            .iter()
            .all(|(key, expected)| item.property(key).strict_equals(expected))
    })
}

/// The items of the given kind.
pub fn filter_type(items: &[Value], filter: TypeFilter) -> Vec<Value> {
    items
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect()
}

/// Like [`filter_type`], with the kind given by name.
///
/// Fails with [`error::Error::InvalidKind`] listing the allowed names when
/// `name` is not one of them.
pub fn filter_type_named(items: &[Value], name: &str) -> error::Result<Vec<Value>> {
    let filter = TypeFilter::from_str(name).map_err(|_| {
        tracing::debug!(name, "rejected unknown type filter");
        error::Error::InvalidKind {
            given: name.to_string(),
            allowed: TypeFilter::iter().map(<&'static str>::from).collect(),
        }
    })?;
    Ok(filter_type(items, filter))
}

/// Replace every item strictly equal to `old` with `new`.
pub fn replace(items: &[Value], old: &Value, new: &Value) -> Vec<Value> {
    items
        .iter()
        .map(|item| {
            if item.strict_equals(old) {
                new.clone()
            } else {
                item.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use arrayfriend_value::{Callable, Token};

    use super::*;

    fn strings(names: &[&str]) -> Vec<Value> {
        names.iter().map(|name| Value::from(*name)).collect()
    }

    fn people() -> Vec<Value> {
        vec![
            Record::from_iter([("a", "foo"), ("b", "bar")]).into(),
            Record::from_iter([("a", "zoo"), ("b", "zab")]).into(),
            Record::from_iter([("a", "zoo"), ("b", "bar")]).into(),
        ]
    }

    #[test]
    fn test_remove_duplicates() {
        let names = strings(&["Justin", "Justin", "Jack", "Amanda", "Mary", "Amanda"]);
        assert_eq!(
            remove_duplicates(&names),
            strings(&["Justin", "Jack", "Amanda", "Mary"])
        );
    }

    #[test]
    fn test_remove_duplicates_keeps_equal_records() {
        let items = vec![
            Value::from(Record::from_iter([("a", 1)])),
            Value::from(Record::from_iter([("a", 1)])),
        ];
        assert_eq!(remove_duplicates(&items).len(), 2);
        let shared = Value::from(Record::from_iter([("a", 1)]));
        assert_eq!(remove_duplicates(&[shared.clone(), shared]).len(), 1);
    }

    #[test]
    fn test_remove_duplicates_no_coercion() {
        let items = vec![Value::from(1), Value::from("1"), Value::from(true), Value::from(1)];
        assert_eq!(
            remove_duplicates(&items),
            vec![Value::from(1), Value::from("1"), Value::from(true)]
        );
    }

    #[test]
    fn test_remove_duplicates_nan() {
        let items = vec![Value::from(f64::NAN), Value::from(f64::NAN), Value::from(0)];
        assert_eq!(remove_duplicates(&items).len(), 2);
    }

    #[test]
    fn test_only_duplicates() {
        let names = strings(&["Justin", "Justin", "Jack", "Amanda", "Mary", "Amanda"]);
        assert_eq!(only_duplicates(&names), strings(&["Justin", "Amanda"]));
        let triple = strings(&["a", "a", "a", "b"]);
        assert_eq!(only_duplicates(&triple), strings(&["a", "a"]));
    }

    #[test]
    fn test_only_duplicates_nan() {
        // NaN repeats like any other value
        let items = vec![Value::from(f64::NAN), Value::from(f64::NAN), Value::from(1)];
        let duplicates = only_duplicates(&items);
        assert_eq!(duplicates.len(), 1);
        assert!(duplicates[0].as_number().is_some_and(f64::is_nan));
    }

    #[test]
    fn test_count_of() {
        let items = strings(&["foo", "bar", "foo", "foo", "baz"]);
        assert_eq!(count_of(&items, &Value::from("foo")), 3);
        assert_eq!(count_of(&items, &Value::from("qux")), 0);
    }

    #[test]
    fn test_count_if() {
        let grades = [99, 93, 60, 70, 100, 80, 78, 100, 98, 94]
            .map(Value::from)
            .to_vec();
        let count = count_if(&grades, |grade, _, _| grade.to_number() >= 90.0);
        assert_eq!(count, 6);
    }

    #[test]
    fn test_count_if_context() {
        let items = [1, 2, 2, 3].map(Value::from).to_vec();
        // items equal to their predecessor
        let count = count_if(&items, |item, index, all| {
            index > 0 && all[index - 1].strict_equals(item)
        });
        assert_eq!(count, 1);
    }

    #[test]
    fn test_partial_match() {
        let items = people();
        let pattern = Record::from_iter([("a", "zoo")]);
        assert_eq!(partial_match_index(&items, &pattern), Some(1));
        assert_eq!(partial_match(&items, &pattern), Some(items[1].clone()));
        let pattern = Record::from_iter([("a", "zoo"), ("b", "bar")]);
        assert_eq!(partial_match_index(&items, &pattern), Some(2));
    }

    #[test]
    fn test_partial_match_none() {
        let items = people();
        let pattern = Record::from_iter([("a", "nope")]);
        assert_eq!(partial_match_index(&items, &pattern), None);
        assert_eq!(partial_match(&items, &pattern), None);
    }

    #[test]
    fn test_partial_match_empty_pattern() {
        let items = people();
        assert_eq!(partial_match_index(&items, &Record::new()), Some(0));
        assert_eq!(partial_match_index(&[], &Record::new()), None);
    }

    #[test]
    fn test_partial_match_strict() {
        let items = vec![Value::from(Record::from_iter([("n", "1")]))];
        let pattern = Record::from_iter([("n", 1)]);
        assert_eq!(partial_match_index(&items, &pattern), None);
    }

    fn mixed() -> Vec<Value> {
        vec![
            Value::from("text"),
            Value::from(1),
            Value::Null,
            Value::Undefined,
            Value::from(false),
            Value::from(Token::new()),
            Value::from(Callable::new("f", |_: &[Value]| Value::Null)),
            Value::from(Record::new()),
            Value::from(vec![Value::from(1)]),
        ]
    }

    #[test]
    fn test_filter_type() {
        let items = mixed();
        assert_eq!(filter_type(&items, TypeFilter::String), vec![Value::from("text")]);
        assert_eq!(filter_type(&items, TypeFilter::Null), vec![Value::Null]);
        assert_eq!(filter_type(&items, TypeFilter::Object).len(), 3);
        assert_eq!(filter_type(&items, TypeFilter::Array), vec![items[8].clone()]);
        assert_eq!(filter_type(&items, TypeFilter::ObjectOnly), vec![items[7].clone()]);
        assert_eq!(filter_type(&items, TypeFilter::Symbol).len(), 1);
        assert_eq!(filter_type(&items, TypeFilter::Function).len(), 1);
        assert_eq!(filter_type(&items, TypeFilter::Number), vec![Value::from(1)]);
        assert_eq!(filter_type(&items, TypeFilter::Undefined), vec![Value::Undefined]);
        assert_eq!(filter_type(&items, TypeFilter::Boolean), vec![Value::from(false)]);
    }

    #[test]
    fn test_filter_type_named() {
        let items = mixed();
        assert_eq!(
            filter_type_named(&items, "boolean"),
            Ok(vec![Value::from(false)])
        );
        assert_eq!(filter_type_named(&items, "objectOnly").unwrap().len(), 1);
    }

    #[test]
    fn test_filter_type_named_invalid() {
        let error = filter_type_named(&mixed(), "integer").unwrap_err();
        match &error {
            error::Error::InvalidKind { given, allowed } => {
                assert_eq!(given, "integer");
                assert_eq!(allowed.len(), 10);
                assert!(allowed.contains(&"objectOnly"));
            }
            _ => panic!("unexpected error {error:?}"),
        }
    }

    #[test]
    fn test_replace() {
        let items = strings(&["a", "b", "a"]);
        assert_eq!(
            replace(&items, &Value::from("a"), &Value::from("z")),
            strings(&["z", "b", "z"])
        );
    }
}
