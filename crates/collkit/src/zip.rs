//! Positional pairing of keys and values.

use indexmap::IndexMap;
use std::hash::Hash;

/// Pairs `keys[i]` with `values[i]` for every index both sequences share.
///
/// Elements past the end of the shorter sequence are dropped.  The map is in
/// key order; a key that occurs more than once keeps the position of its
/// first occurrence and the value paired with its last one, so the map only
/// has `min(keys.len(), values.len())` entries when the paired keys are
/// distinct.
///
/// ```
/// use collkit::zip;
///
/// let map = zip(["a", "b", "c"], [1, 2]);
/// assert_eq!(map.len(), 2);
/// assert_eq!(map["a"], 1);
/// assert_eq!(map["b"], 2);
/// ```
pub fn zip<K, V, KI, VI>(keys: KI, values: VI) -> IndexMap<K, V>
where
    K: Eq + Hash,
    KI: IntoIterator<Item = K>,
    VI: IntoIterator<Item = V>,
{
    keys.into_iter().zip(values).collect()
}

/// Splits `keys` and `values` on `delimiter` and pairs the parts by position.
///
/// Returns `None` when either string is empty, so that callers can tell
/// missing input apart from input that produced an empty map.  Parts are
/// neither trimmed nor filtered: `"a,,b"` has three parts.
pub fn zip_str(keys: &str, values: &str, delimiter: &str) -> Option<IndexMap<String, String>> {
    if keys.is_empty() || values.is_empty() {
        return None;
    }

    Some(zip(
        keys.split(delimiter).map(str::to_owned),
        values.split(delimiter).map(str::to_owned),
    ))
}

#[cfg(test)]
mod tests {
    use super::{zip, zip_str};
    use pretty_assertions::assert_eq;

    #[test]
    fn zip_truncates_to_shorter() {
        let map = zip(["a", "b", "c"], [1, 2]);
        assert_eq!(vec![("a", 1), ("b", 2)], map.into_iter().collect::<Vec<_>>());

        let map = zip([1, 2], ["x", "y", "z"]);
        assert_eq!(vec![(1, "x"), (2, "y")], map.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn zip_empty_side() {
        assert!(zip(Vec::<u8>::new(), [1, 2]).is_empty());
        assert!(zip([1, 2], Vec::<u8>::new()).is_empty());
    }

    #[test]
    fn zip_repeated_key_keeps_last_value() {
        let map = zip(["a", "b", "a"], [1, 2, 3]);
        assert_eq!(vec![("a", 3), ("b", 2)], map.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn zip_delimited_strings() {
        let map = zip_str("a,b,c,d", "1,2,3,4", ",").unwrap();
        assert_eq!(4, map.len());
        assert_eq!("3", map["c"]);

        let map = zip_str("a|b|c", "1|2", "|").unwrap();
        assert_eq!(
            vec![("a", "1"), ("b", "2")],
            map.iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn zip_str_distinguishes_missing_input() {
        assert_eq!(None, zip_str("", "1,2", ","));
        assert_eq!(None, zip_str("a,b", "", ","));

        let map = zip_str("a,,b", "1,2,3", ",").unwrap();
        assert_eq!("2", map[""]);
        assert_eq!(3, map.len());
    }
}
