use arrayfriend_value::ValueType;
use thiserror::Error;

/// Errors raised by sequence operations.
///
/// These are all validation errors: an operation either fails up front or
/// produces its complete result.
#[derive(Debug, Error, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// The type filter name is not one of the known kinds.
    #[error("Invalid type: \"{given}\". Allowed types: {}", .allowed.join(", "))]
    InvalidKind {
        given: String,
        allowed: Vec<&'static str>,
    },
    #[error("Item {index} must be a record containing a \"key\" and a \"value\" field")]
    MalformedEntry { index: usize },
    #[error(
        "Item {index} returned from the mapper must be a record containing a \"key\" and a \"value\" field"
    )]
    MalformedMappedEntry { index: usize },
    /// A reduction without a seed value was applied to an empty sequence.
    #[error("Cannot compute the {operation} of an empty sequence")]
    EmptySequence { operation: &'static str },
    #[error("Cannot compute the {operation}: item {index} is of type {found}, not a number")]
    NonNumeric {
        operation: &'static str,
        index: usize,
        found: ValueType,
    },
    #[error("Batch size must be greater than zero")]
    InvalidBatchSize,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_kind_lists_allowed() {
        let error = Error::InvalidKind {
            given: "integer".to_string(),
            allowed: vec!["string", "number"],
        };
        assert_eq!(
            error.to_string(),
            "Invalid type: \"integer\". Allowed types: string, number"
        );
    }

    #[test]
    fn test_non_numeric_message() {
        let error = Error::NonNumeric {
            operation: "sum",
            index: 2,
            found: ValueType::String,
        };
        assert_eq!(
            error.to_string(),
            "Cannot compute the sum: item 2 is of type string, not a number"
        );
    }
}
