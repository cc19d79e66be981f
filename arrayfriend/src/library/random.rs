use arrayfriend_value::Value;
use rand::seq::SliceRandom;
use rand::Rng;

/// The items in a uniformly random order.
///
/// Shuffles a copy; the input is left alone.
pub fn shuffle<R: Rng + ?Sized>(items: &[Value], rng: &mut R) -> Vec<Value> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// A uniformly chosen item, `None` for an empty sequence.
pub fn random<R: Rng + ?Sized>(items: &[Value], rng: &mut R) -> Option<Value> {
    items.choose(rng).cloned()
}

/// A uniformly chosen index, `None` for an empty sequence.
pub fn random_index<R: Rng + ?Sized>(items: &[Value], rng: &mut R) -> Option<usize> {
    if items.is_empty() {
        return None;
    }
    Some(rng.gen_range(0..items.len()))
}
