use arrayfriend_value::Value;

use crate::error;

/// Split the items into consecutive chunks of `size`.
///
/// The last chunk may be shorter. With `None` all items go into a single
/// chunk. An empty sequence has no chunks.
pub fn batch(items: &[Value], size: Option<usize>) -> error::Result<Vec<Vec<Value>>> {
    if size == Some(0) {
        tracing::debug!(len = items.len(), "rejected batch size of zero");
        return Err(error::Error::InvalidBatchSize);
    }
    if items.is_empty() {
        return Ok(Vec::new());
    }
    let size = size.unwrap_or(items.len());
    Ok(items.chunks(size).map(<[Value]>::to_vec).collect())
}

// resolve a possibly negative position against `len`, counting negative
// positions from the end and clamping to the bounds
fn resolve_position(position: i64, len: usize) -> usize {
    if position < 0 {
        len.saturating_sub(position.unsigned_abs() as usize)
    } else {
        (position as u64).min(len as u64) as usize
    }
}

/// Put `inserts` at `index`, replacing the item that was there.
///
/// This keeps everything before `index`, then `inserts`, then everything
/// after `index`: the item at `index` itself is dropped. Negative indexes
/// count from the end, and out of range indexes are clamped. For a pure
/// insertion see [`insert_before`].
pub fn insert_at(items: &[Value], index: i64, inserts: &[Value]) -> Vec<Value> {
    let head_end = resolve_position(index, items.len());
    let tail_start = resolve_position(index.saturating_add(1), items.len());
    let mut result = Vec::with_capacity(items.len() + inserts.len());
    result.extend_from_slice(&items[..head_end]);
    result.extend_from_slice(inserts);
    result.extend_from_slice(&items[tail_start..]);
    result
}

/// Insert `inserts` before the item at `index`, keeping every item.
///
/// An `index` past the end appends.
pub fn insert_before(items: &[Value], index: usize, inserts: &[Value]) -> Vec<Value> {
    let index = index.min(items.len());
    let mut result = Vec::with_capacity(items.len() + inserts.len());
    result.extend_from_slice(&items[..index]);
    result.extend_from_slice(inserts);
    result.extend_from_slice(&items[index..]);
    result
}

/// The last item, `None` for an empty sequence.
pub fn last(items: &[Value]) -> Option<Value> {
    items.last().cloned()
}

/// The items at even indexes: the first, third and so on.
pub fn even(items: &[Value]) -> Vec<Value> {
    items.iter().step_by(2).cloned().collect()
}

/// The items at odd indexes.
pub fn odd(items: &[Value]) -> Vec<Value> {
    items.iter().skip(1).step_by(2).cloned().collect()
}
