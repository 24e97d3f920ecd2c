//! Lookup-map builders for joining fetched resources by id.

use std::collections::HashMap;
use std::hash::Hash;

/// Indexes records by a key; later records win on duplicate keys.
pub fn index_by<'a, T, K, F>(items: &'a [T], key: F) -> HashMap<K, &'a T>
where
    K: Eq + Hash,
    F: Fn(&'a T) -> K,
{
    items.iter().map(|item| (key(item), item)).collect()
}

/// Groups records by a key, preserving input order within each group.
/// Records whose key is `None` are skipped.
pub fn group_by<'a, T, K, F>(items: &'a [T], key: F) -> HashMap<K, Vec<&'a T>>
where
    K: Eq + Hash,
    F: Fn(&'a T) -> Option<K>,
{
    let mut map: HashMap<K, Vec<&'a T>> = HashMap::new();
    for item in items {
        if let Some(k) = key(item) {
            map.entry(k).or_default().push(item);
        }
    }
    map
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn indexes_with_last_duplicate_winning() {
        let items = vec![("a", 1), ("b", 2), ("a", 3)];
        let map = index_by(&items, |it| it.0);
        assert_eq!(map.len(), 2);
        assert_eq!(map["a"].1, 3);
    }

    #[test]
    fn groups_and_skips_keyless() {
        let items = vec![(Some("r1"), 1), (None, 2), (Some("r1"), 3), (Some("r2"), 4)];
        let map = group_by(&items, |it| it.0);
        assert_eq!(map["r1"].iter().map(|it| it.1).collect::<Vec<_>>(), [1, 3]);
        assert_eq!(map["r2"].len(), 1);
        assert_eq!(map.len(), 2);
    }
}
