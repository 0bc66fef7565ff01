//! Order-preserving filtering of key/value records.

/// Returns, in input order, exactly the pairs whose value satisfies `predicate`.
///
/// Surviving pairs are cloned unchanged; `records` is never mutated. `predicate` is called once
/// per input pair.
pub fn filter_project<K, V, F>(records: &[(K, V)], mut predicate: F) -> Vec<(K, V)>
where
    K: Clone,
    V: Clone,
    F: FnMut(&V) -> bool,
{
    let out: Vec<(K, V)> = records
        .iter()
        .filter(|(_, v)| predicate(v))
        .cloned()
        .collect();
    tracing::trace!(input = records.len(), output = out.len(), "filter_project");
    out
}

/// Like [`filter_project`], but maps every surviving pair through `project`.
pub fn filter_project_with<K, V, O, F, P>(records: &[(K, V)], mut predicate: F, mut project: P) -> Vec<O>
where
    F: FnMut(&V) -> bool,
    P: FnMut(&K, &V) -> O,
{
    records
        .iter()
        .filter(|(_, v)| predicate(v))
        .map(|(k, v)| project(k, v))
        .collect()
}

/// Fallible form of [`filter_project`].
///
/// The first error returned by `predicate` is passed back to the caller unchanged, and no
/// partial output is returned. Pairs after the failing one are not evaluated.
pub fn try_filter_project<K, V, E, F>(records: &[(K, V)], mut predicate: F) -> Result<Vec<(K, V)>, E>
where
    K: Clone,
    V: Clone,
    F: FnMut(&V) -> Result<bool, E>,
{
    let mut out = Vec::new();
    for (k, v) in records {
        if predicate(v)? {
            out.push((k.clone(), v.clone()));
        }
    }
    Ok(out)
}
