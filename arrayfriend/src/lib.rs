//! Array manipulation utilities over dynamically typed sequences.
//!
//! Every operation is available as a free function over a slice of
//! [`Value`]s in [`library`], and as a method through the [`SequenceExt`]
//! extension trait, which is implemented for `Vec<Value>` and for the shared
//! [`Sequence`] handle.
//!
//! All operations leave their input alone, except for the sorts in
//! [`SequenceSort`], which reorder in place.
//!
//! ```
//! use arrayfriend::{SequenceExt, Value};
//!
//! let names: Vec<Value> = ["Justin", "Justin", "Jack"].map(Value::from).into();
//! assert_eq!(names.remove_duplicates(), ["Justin", "Jack"].map(Value::from));
//! ```
pub mod error;
pub mod library;
mod traits;

pub use arrayfriend_value::{
    classify, Callable, Kind, Record, SameValueKey, Sequence, Token, TypeFilter, Value, ValueType,
};
pub use error::{Error, Result};
pub use traits::{SequenceCore, SequenceExt, SequenceSort};
