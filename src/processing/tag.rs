//! Predicate tagging: every element is kept and annotated with a boolean.

use crate::types::Tagged;

/// Returns `(predicate(element), element)` for every element of `records`, in order.
///
/// Unlike [`super::filter_project`], nothing is dropped: the output always has the same length
/// as the input.
pub fn tag_by_predicate<T, F>(records: &[T], mut predicate: F) -> Vec<Tagged<T>>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let out: Vec<Tagged<T>> = records
        .iter()
        .map(|r| (predicate(r), r.clone()))
        .collect();
    tracing::trace!(input = records.len(), "tag_by_predicate");
    out
}

/// Lazy form of [`tag_by_predicate`] over owned elements.
pub fn tag_iter<I, F>(records: I, mut predicate: F) -> impl Iterator<Item = Tagged<I::Item>>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> bool,
{
    records.into_iter().map(move |r| (predicate(&r), r))
}

/// Fallible form of [`tag_by_predicate`]; the first predicate error is returned unchanged.
pub fn try_tag_by_predicate<T, E, F>(records: &[T], mut predicate: F) -> Result<Vec<Tagged<T>>, E>
where
    T: Clone,
    F: FnMut(&T) -> Result<bool, E>,
{
    records
        .iter()
        .map(|r| Ok((predicate(r)?, r.clone())))
        .collect()
}
