use arrayfriend_value::{parse_int, stringify, Record, Value, ValueType};

use crate::error;

/// The text form of every item.
///
/// Strings are kept as they are, and other truthy scalars, tokens and
/// callables use their text form. Everything else (null, sequences,
/// records and falsy scalars) is rendered as JSON, so `[1, 2]` becomes
/// `"[1,2]"` and `0` becomes `"0"`. Undefined has no JSON form and yields
/// `None`.
pub fn to_str(items: &[Value]) -> Vec<Option<String>> {
    items
        .iter()
        .map(|item| match item {
            Value::String(s) => Some(s.to_string()),
            _ if item.value_type() != ValueType::Object && item.is_truthy() => {
                Some(item.to_text())
            }
            _ => stringify(item),
        })
        .collect()
}

/// Parse the text form of every item as an integer in `radix`.
///
/// `None` and `Some(0)` mean radix 10. Items without a leading integer,
/// tokens, and any radix outside `2..=36` produce NaN.
pub fn to_num(items: &[Value], radix: Option<u32>) -> Vec<f64> {
    let radix = match radix {
        None | Some(0) => 10,
        Some(radix) => radix,
    };
    items
        .iter()
        .map(|item| match item {
            Value::Token(_) => f64::NAN,
            _ => parse_int(&item.to_text(), radix),
        })
        .collect()
}

/// The type tag of every item.
pub fn types(items: &[Value]) -> Vec<ValueType> {
    items.iter().map(Value::value_type).collect()
}

// an entry is a record with both a `key` and a `value` field
fn is_entry(value: &Value) -> bool {
    value
        .as_record()
        .is_some_and(|record| record.contains_key("key") && record.contains_key("value"))
}

fn build(entries: &[Value]) -> Record {
    let record = Record::new();
    for entry in entries {
        let key = entry.property("key").to_text();
        record.insert(key, entry.property("value"));
    }
    record
}

/// Build a record from a sequence of `{key, value}` records.
///
/// Every item is checked before anything is built; if any item is not a
/// record with both fields this fails with [`error::Error::MalformedEntry`].
/// Keys are converted to their text form, and later entries replace earlier
/// ones with the same key.
pub fn to_object(items: &[Value]) -> error::Result<Record> {
    if let Some(index) = items.iter().position(|item| !is_entry(item)) {
        tracing::debug!(index, "rejected malformed entry");
        return Err(error::Error::MalformedEntry { index });
    }
    Ok(build(items))
}

/// Like [`to_object`], but first turns every item into an entry with
/// `mapper(item, index)`.
pub fn to_object_with<F>(items: &[Value], mut mapper: F) -> error::Result<Record>
where
    F: FnMut(&Value, usize) -> Value,
{
    let entries = items
        .iter()
        .enumerate()
        .map(|(index, item)| mapper(item, index))
        .collect::<Vec<_>>();
    if let Some(index) = entries.iter().position(|entry| !is_entry(entry)) {
        tracing::debug!(index, "rejected malformed mapped entry");
        return Err(error::Error::MalformedMappedEntry { index });
    }
    Ok(build(&entries))
}
