//! Copy-on-write helpers for `Arc`-held entity lists.

use std::sync::Arc;

use uuid::Uuid;

use crate::models::Identified;

/// Index of the entry with the given ID.
pub(super) fn position<T: Identified>(items: &[Arc<T>], id: Uuid) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

/// Rebuild `items` with the entry at `index` replaced by an edited copy.
///
/// Returns the new list and the new entry. Every other entry is the same
/// `Arc` as before.
pub(super) fn rebuild_at<T: Clone>(
    items: &[Arc<T>],
    index: usize,
    edit: impl FnOnce(&mut T),
) -> (Vec<Arc<T>>, Arc<T>) {
    let mut node = T::clone(&items[index]);
    edit(&mut node);
    let node = Arc::new(node);

    let mut rebuilt = items.to_vec();
    rebuilt[index] = Arc::clone(&node);
    (rebuilt, node)
}

/// Copy of `items` with `item` appended.
pub(super) fn appended<T>(items: &[Arc<T>], item: Arc<T>) -> Vec<Arc<T>> {
    let mut rebuilt = Vec::with_capacity(items.len() + 1);
    rebuilt.extend(items.iter().cloned());
    rebuilt.push(item);
    rebuilt
}

/// Copy of `items` without the entry at `index`, plus the removed entry.
pub(super) fn removed<T>(items: &[Arc<T>], index: usize) -> (Vec<Arc<T>>, Arc<T>) {
    let mut rebuilt = items.to_vec();
    let item = rebuilt.remove(index);
    (rebuilt, item)
}
