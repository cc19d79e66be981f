//! The sequence operations as free functions over slices.
//!
//! Each function takes the items as its first argument and returns a new
//! value, with the exception of [`ascending`] and [`descending`], which sort
//! in place.
mod compare;
mod conversion;
mod copy;
mod matching;
mod numeric;
mod ordering;
mod random;
mod reshape;

pub use compare::{deep_equal, deep_equal_value};
pub use conversion::{to_num, to_object, to_object_with, to_str, types};
pub use copy::{copy, deep_copy, deep_copy_value};
pub use matching::{
    count_if, count_of, filter_type, filter_type_named, only_duplicates, partial_match,
    partial_match_index, remove_duplicates, replace,
};
pub use numeric::{average, difference, mean, median, mode, product, quotient, sum};
pub use ordering::{
    ascending, descending, is_empty, remove_falsy_values, remove_null_values,
};
pub use random::{random, random_index, shuffle};
pub use reshape::{batch, even, insert_at, insert_before, last, odd};
