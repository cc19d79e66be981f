use arrayfriend_value::Value;

use crate::error;

// every item must be a number; mixed input is rejected rather than coerced
fn numbers(items: &[Value], operation: &'static str) -> error::Result<Vec<f64>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_number().ok_or_else(|| error::Error::NonNumeric {
                operation,
                index,
                found: item.value_type(),
            })
        })
        .collect()
}

// a left fold seeded with the first item; there is no identity element, so
// an empty sequence is an error
fn reduce(
    items: &[Value],
    operation: &'static str,
    op: impl Fn(f64, f64) -> f64,
) -> error::Result<f64> {
    let numbers = numbers(items, operation)?;
    let mut numbers = numbers.into_iter();
    let first = numbers
        .next()
        .ok_or(error::Error::EmptySequence { operation })?;
    Ok(numbers.fold(first, op))
}

pub fn sum(items: &[Value]) -> error::Result<f64> {
    reduce(items, "sum", |a, b| a + b)
}

/// The first item minus all the others.
pub fn difference(items: &[Value]) -> error::Result<f64> {
    reduce(items, "difference", |a, b| a - b)
}

pub fn product(items: &[Value]) -> error::Result<f64> {
    reduce(items, "product", |a, b| a * b)
}

/// The first item divided by all the others in turn.
pub fn quotient(items: &[Value]) -> error::Result<f64> {
    reduce(items, "quotient", |a, b| a / b)
}

/// The arithmetic mean. Unlike [`sum`], an empty sequence has a mean of 0.
pub fn mean(items: &[Value]) -> error::Result<f64> {
    if items.is_empty() {
        return Ok(0.0);
    }
    let numbers = numbers(items, "mean")?;
    Ok(numbers.iter().sum::<f64>() / numbers.len() as f64)
}

/// Same as [`mean`].
pub fn average(items: &[Value]) -> error::Result<f64> {
    mean(items)
}

/// The middle item, or the mean of the two middle items for an even length.
///
/// The items are taken in their current order; sort them first (see
/// [`ascending`](super::ascending)) to get the statistical median. `None`
/// for an empty sequence.
pub fn median(items: &[Value]) -> error::Result<Option<f64>> {
    let numbers = numbers(items, "median")?;
    let len = numbers.len();
    if len == 0 {
        return Ok(None);
    }
    let middle = len / 2;
    if len % 2 == 0 {
        Ok(Some((numbers[middle - 1] + numbers[middle]) / 2.0))
    } else {
        Ok(Some(numbers[middle]))
    }
}

/// The most frequent item under strict equality. Ties go to the item seen
/// first. `None` for an empty sequence.
pub fn mode(items: &[Value]) -> Option<Value> {
    let mut best: Option<(usize, &Value)> = None;
    for item in items {
        let count = items.iter().filter(|other| other.strict_equals(item)).count();
        if best.map_or(true, |(best_count, _)| count > best_count) {
            best = Some((count, item));
        }
    }
    best.map(|(_, item)| item.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers_of(values: &[f64]) -> Vec<Value> {
        values.iter().copied().map(Value::from).collect()
    }

    #[test]
    fn test_average() {
        assert_eq!(average(&numbers_of(&[90.0, 100.0, 80.0, 100.0, 100.0])), Ok(94.0));
        assert_eq!(mean(&numbers_of(&[1.0, 2.0, 3.0, 3.0, 1.0])), Ok(2.0));
    }

    #[test]
    fn test_average_empty() {
        assert_eq!(average(&[]), Ok(0.0));
    }

    #[test]
    fn test_reductions() {
        let items = numbers_of(&[12.0, 3.0, 2.0]);
        assert_eq!(sum(&items), Ok(17.0));
        assert_eq!(difference(&items), Ok(7.0));
        assert_eq!(product(&items), Ok(72.0));
        assert_eq!(quotient(&items), Ok(2.0));
    }

    #[test]
    fn test_reduction_of_one() {
        let items = numbers_of(&[5.0]);
        assert_eq!(difference(&items), Ok(5.0));
        assert_eq!(quotient(&items), Ok(5.0));
    }

    #[test]
    fn test_reductions_empty() {
        assert_eq!(sum(&[]), Err(error::Error::EmptySequence { operation: "sum" }));
        assert_eq!(
            product(&[]),
            Err(error::Error::EmptySequence {
                operation: "product"
            })
        );
        assert!(difference(&[]).is_err());
        assert!(quotient(&[]).is_err());
    }

    #[test]
    fn test_non_numeric() {
        let items = vec![Value::from(1), Value::from("2")];
        assert_eq!(
            sum(&items),
            Err(error::Error::NonNumeric {
                operation: "sum",
                index: 1,
                found: arrayfriend_value::ValueType::String,
            })
        );
        assert!(average(&items).is_err());
    }

    #[test]
    fn test_median_current_order() {
        assert_eq!(median(&numbers_of(&[3.0, 1.0, 2.0])), Ok(Some(1.0)));
        assert_eq!(median(&numbers_of(&[4.0, 1.0, 3.0, 2.0])), Ok(Some(2.0)));
        assert_eq!(median(&numbers_of(&[1.0, 2.0, 3.0, 4.0])), Ok(Some(2.5)));
        assert_eq!(median(&[]), Ok(None));
    }

    #[test]
    fn test_mode() {
        assert_eq!(
            mode(&numbers_of(&[1.0, 2.0, 2.0, 3.0, 3.0, 3.0])),
            Some(Value::from(3))
        );
        assert_eq!(mode(&[]), None);
    }

    #[test]
    fn test_mode_tie_goes_to_first() {
        let items = vec![Value::from("b"), Value::from("a"), Value::from("a"), Value::from("b")];
        assert_eq!(mode(&items), Some(Value::from("b")));
    }
}
