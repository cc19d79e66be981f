use arrayfriend_value::{Record, Sequence, TypeFilter, Value, ValueType};
use rand::Rng;

use crate::{error, library};

/// The core sequence interface: give access to the items as a slice.
///
/// If you implement this, [`SequenceExt`] provides the whole operation
/// surface on top of it.
pub trait SequenceCore {
    /// Run `f` with the items of the sequence.
    fn with_items<R>(&self, f: impl FnOnce(&[Value]) -> R) -> R;
}

impl SequenceCore for Vec<Value> {
    fn with_items<R>(&self, f: impl FnOnce(&[Value]) -> R) -> R {
        f(self)
    }
}

impl SequenceCore for Sequence {
    // the sequence stays borrowed while `f` runs
    fn with_items<R>(&self, f: impl FnOnce(&[Value]) -> R) -> R {
        f(&self.borrow())
    }
}

/// Sequence operations as methods.
///
/// None of these modify the sequence they are called on. Operations that
/// produce a sequence return a new `Vec<Value>`, which implements this trait
/// again so calls can be chained.
pub trait SequenceExt: SequenceCore {
    /// The items in a uniformly random order.
    fn shuffle(&self) -> Vec<Value> {
        self.shuffle_with(&mut rand::thread_rng())
    }

    fn shuffle_with<G: Rng + ?Sized>(&self, rng: &mut G) -> Vec<Value> {
        self.with_items(|items| library::shuffle(items, rng))
    }

    /// A random item, or `None` if the sequence is empty.
    fn random(&self) -> Option<Value> {
        self.random_with(&mut rand::thread_rng())
    }

    fn random_with<G: Rng + ?Sized>(&self, rng: &mut G) -> Option<Value> {
        self.with_items(|items| library::random(items, rng))
    }

    /// A random index, or `None` if the sequence is empty.
    fn random_index(&self) -> Option<usize> {
        self.random_index_with(&mut rand::thread_rng())
    }

    fn random_index_with<G: Rng + ?Sized>(&self, rng: &mut G) -> Option<usize> {
        self.with_items(|items| library::random_index(items, rng))
    }

    fn copy(&self) -> Vec<Value> {
        self.with_items(library::copy)
    }

    fn deep_copy(&self) -> Vec<Value> {
        self.with_items(library::deep_copy)
    }

    fn remove_duplicates(&self) -> Vec<Value> {
        self.with_items(library::remove_duplicates)
    }

    fn only_duplicates(&self) -> Vec<Value> {
        self.with_items(library::only_duplicates)
    }

    fn count_of(&self, value: &Value) -> usize {
        self.with_items(|items| library::count_of(items, value))
    }

    /// Count the items for which `predicate(item, index, items)` holds.
    fn count_if<F>(&self, predicate: F) -> usize
    where
        F: FnMut(&Value, usize, &[Value]) -> bool,
    {
        self.with_items(|items| library::count_if(items, predicate))
    }

    fn partial_match(&self, pattern: &Record) -> Option<Value> {
        self.with_items(|items| library::partial_match(items, pattern))
    }

    fn partial_match_index(&self, pattern: &Record) -> Option<usize> {
        self.with_items(|items| library::partial_match_index(items, pattern))
    }

    fn filter_type(&self, filter: TypeFilter) -> Vec<Value> {
        self.with_items(|items| library::filter_type(items, filter))
    }

    fn filter_type_named(&self, name: &str) -> error::Result<Vec<Value>> {
        self.with_items(|items| library::filter_type_named(items, name))
    }

    fn replace(&self, old: &Value, new: &Value) -> Vec<Value> {
        self.with_items(|items| library::replace(items, old, new))
    }

    /// Split into chunks of `size` items; `None` puts everything in one
    /// chunk.
    fn batch(&self, size: Option<usize>) -> error::Result<Vec<Vec<Value>>> {
        self.with_items(|items| library::batch(items, size))
    }

    fn insert_at(&self, index: i64, inserts: &[Value]) -> Vec<Value> {
        self.with_items(|items| library::insert_at(items, index, inserts))
    }

    fn insert_before(&self, index: usize, inserts: &[Value]) -> Vec<Value> {
        self.with_items(|items| library::insert_before(items, index, inserts))
    }

    fn last(&self) -> Option<Value> {
        self.with_items(library::last)
    }

    fn even(&self) -> Vec<Value> {
        self.with_items(library::even)
    }

    fn odd(&self) -> Vec<Value> {
        self.with_items(library::odd)
    }

    fn is_empty(&self) -> bool {
        self.with_items(library::is_empty)
    }

    fn average(&self) -> error::Result<f64> {
        self.with_items(library::average)
    }

    fn mean(&self) -> error::Result<f64> {
        self.with_items(library::mean)
    }

    fn median(&self) -> error::Result<Option<f64>> {
        self.with_items(library::median)
    }

    fn mode(&self) -> Option<Value> {
        self.with_items(library::mode)
    }

    fn sum(&self) -> error::Result<f64> {
        self.with_items(library::sum)
    }

    fn difference(&self) -> error::Result<f64> {
        self.with_items(library::difference)
    }

    fn product(&self) -> error::Result<f64> {
        self.with_items(library::product)
    }

    fn quotient(&self) -> error::Result<f64> {
        self.with_items(library::quotient)
    }

    fn remove_null_values(&self) -> Vec<Value> {
        self.with_items(library::remove_null_values)
    }

    fn remove_falsy_values(&self) -> Vec<Value> {
        self.with_items(library::remove_falsy_values)
    }

    fn to_str(&self) -> Vec<Option<String>> {
        self.with_items(library::to_str)
    }

    /// Parse every item as an integer in `radix` (10 when `None`).
    fn to_num(&self, radix: Option<u32>) -> Vec<f64> {
        self.with_items(|items| library::to_num(items, radix))
    }

    fn types(&self) -> Vec<ValueType> {
        self.with_items(library::types)
    }

    /// Deep structural equality with another sequence.
    fn assert<S: SequenceCore + ?Sized>(&self, other: &S) -> bool {
        self.with_items(|items| other.with_items(|others| library::deep_equal(items, others)))
    }

    fn to_object(&self) -> error::Result<Record> {
        self.with_items(library::to_object)
    }

    fn to_object_with<F>(&self, mapper: F) -> error::Result<Record>
    where
        F: FnMut(&Value, usize) -> Value,
    {
        self.with_items(|items| library::to_object_with(items, mapper))
    }
}

impl<T: SequenceCore + ?Sized> SequenceExt for T {}

/// The in-place sorts. These are the only operations that modify the
/// sequence they are called on; they return it again for chaining.
pub trait SequenceSort {
    /// Sort numerically, smallest first.
    fn ascending(&mut self) -> &mut Self;

    /// Sort numerically, largest first.
    fn descending(&mut self) -> &mut Self;
}

impl SequenceSort for [Value] {
    fn ascending(&mut self) -> &mut Self {
        library::ascending(self);
        self
    }

    fn descending(&mut self) -> &mut Self {
        library::descending(self);
        self
    }
}

impl SequenceSort for Sequence {
    fn ascending(&mut self) -> &mut Self {
        library::ascending(&mut self.borrow_mut());
        self
    }

    fn descending(&mut self) -> &mut Self {
        library::descending(&mut self.borrow_mut());
        self
    }
}
