use std::collections::{BTreeMap, BTreeSet};

use super::model::KeyedTable;
use crate::error::{QueryError, QueryResult};

// ---------------------------------------------------------------------------
// Group-by / join helpers shared by the prompts
// ---------------------------------------------------------------------------

/// Bucket `items` by the key `key_of` derives for each one.
///
/// Each bucket keeps input order.
pub fn group_by<'a, T, K, F>(items: &'a [T], mut key_of: F) -> BTreeMap<K, Vec<&'a T>>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut groups: BTreeMap<K, Vec<&T>> = BTreeMap::new();
    for item in items {
        groups.entry(key_of(item)).or_default().push(item);
    }
    groups
}

/// Count how many times each key occurs.
pub fn count_by<'a, I>(keys: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut counts = BTreeMap::new();
    for key in keys {
        *counts.entry(key.clone()).or_insert(0) += 1;
    }
    counts
}

/// Keep the first occurrence of every value, in first-seen order.
pub fn unique_in_order<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut out = Vec::new();
    for v in values {
        if seen.insert(v.as_str()) {
            out.push(v.clone());
        }
    }
    out
}

/// Resolve `key` in a keyed table, failing with
/// [`QueryError::ReferenceNotFound`] when there is no such record.
pub fn resolve<'a, T>(table: &'a KeyedTable<T>, table_name: &'static str, key: &str) -> QueryResult<&'a T> {
    table
        .get(key)
        .ok_or_else(|| QueryError::missing(table_name, key))
}

/// Resolve every key in `keys`, stopping at the first missing one.
pub fn resolve_all<'a, T>(
    table: &'a KeyedTable<T>,
    table_name: &'static str,
    keys: &[String],
) -> QueryResult<Vec<&'a T>> {
    keys.iter()
        .map(|k| resolve(table, table_name, k))
        .collect()
}
