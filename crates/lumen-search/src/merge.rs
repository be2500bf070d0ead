//! Corpus merging: append remotely fetched entities the local corpus lacks.

use std::borrow::Cow;
use std::collections::HashSet;

use lumen_core::models::HasId;

/// Append every `remote` entity whose id is absent from `local` (and not
/// already appended). Local order is preserved and local copies win.
///
/// Borrows `local` unchanged when nothing new arrived.
pub fn merge_by_id<'a, T: HasId + Clone>(local: &'a [T], remote: Vec<T>) -> Cow<'a, [T]> {
    let mut seen: HashSet<&str> = local.iter().map(HasId::id).collect();
    let mut extras: Vec<T> = Vec::new();
    for item in &remote {
        if seen.insert(item.id()) {
            extras.push(item.clone());
        }
    }

    if extras.is_empty() {
        return Cow::Borrowed(local);
    }

    let mut merged = Vec::with_capacity(local.len() + extras.len());
    merged.extend_from_slice(local);
    merged.extend(extras);
    Cow::Owned(merged)
}
