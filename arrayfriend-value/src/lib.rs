//! Dynamically typed values.
//!
//! A [`Value`] is anything that can be stored in a [`Sequence`]: numbers,
//! text, booleans, the null and absent markers, nested sequences, keyed
//! [`Record`]s, unique [`Token`]s and [`Callable`]s. Sequences and records
//! are shared handles; cloning one aliases it.
mod callable;
mod coerce;
mod equality;
mod json;
mod kind;
mod record;
mod sequence;
mod token;
mod value;

pub use callable::Callable;
pub use coerce::{number_to_text, parse_int};
pub use equality::SameValueKey;
pub use json::stringify;
pub use kind::{classify, Kind, TypeFilter, ValueType};
pub use record::Record;
pub use sequence::Sequence;
pub use token::Token;
pub use value::Value;
