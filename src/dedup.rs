//! Ordered de-duplication by key

use std::collections::HashSet;
use std::hash::Hash;

/// Keeps the first occurrence per key, preserving input order
pub fn unique_by_key<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for item in items {
        if seen.insert(key(&item)) {
            unique.push(item);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_order_wins() {
        let items = vec![("a", 1), ("b", 2), ("a", 3), ("c", 4), ("b", 5)];
        let unique = unique_by_key(items, |(k, _)| *k);
        assert_eq!(unique, vec![("a", 1), ("b", 2), ("c", 4)]);
    }

    #[test]
    fn test_empty_input() {
        let unique = unique_by_key(Vec::<(&str, i32)>::new(), |(k, _)| *k);
        assert!(unique.is_empty());
    }
}
