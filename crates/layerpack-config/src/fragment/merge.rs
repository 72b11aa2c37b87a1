//! Field-wise merge rules.
//!
//! Every fragment type spells out how each of its fields combines with the
//! same field of a later fragment. There are three rules:
//!
//! - scalar (`Option<T>`): a later `Some` replaces, a later `None` keeps
//! - list (`Vec<T>`): the later list is appended
//! - map (`IndexMap`, nested structs): recurse key by key, keep one-sided keys

use indexmap::IndexMap;

/// Combine `other` into `self`, with `other` being the later fragment.
pub trait Merge {
    fn merge(&mut self, other: Self);
}

/// Scalar rule: later value wins when present.
pub fn overwrite<T>(target: &mut Option<T>, other: Option<T>) {
    if other.is_some() {
        *target = other;
    }
}

/// List rule: later items are appended after earlier ones.
pub fn append<T>(target: &mut Vec<T>, mut other: Vec<T>) {
    target.append(&mut other);
}

/// Nested rule for optional sub-structures.
pub fn recurse<T: Merge>(target: &mut Option<T>, other: Option<T>) {
    match (target.as_mut(), other) {
        (Some(existing), Some(update)) => existing.merge(update),
        (None, Some(update)) => *target = Some(update),
        (_, None) => {}
    }
}

impl<T> Merge for Vec<T> {
    fn merge(&mut self, other: Self) {
        append(self, other);
    }
}

impl<V: Merge> Merge for IndexMap<String, V> {
    fn merge(&mut self, other: Self) {
        for (key, value) in other {
            match self.get_mut(&key) {
                Some(existing) => existing.merge(value),
                None => {
                    self.insert(key, value);
                }
            }
        }
    }
}

/// Fold a sequence of fragments onto a base, strictly in order.
pub fn merge_all<T: Merge>(base: T, fragments: impl IntoIterator<Item = T>) -> T {
    fragments.into_iter().fold(base, |mut acc, next| {
        acc.merge(next);
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_keeps_existing_on_none() {
        let mut value = Some(1);
        overwrite(&mut value, None);
        assert_eq!(value, Some(1));
        overwrite(&mut value, Some(2));
        assert_eq!(value, Some(2));
    }

    #[test]
    fn map_merge_keeps_one_sided_keys() {
        let mut left: IndexMap<String, Vec<u8>> = IndexMap::new();
        left.insert("app".into(), vec![1]);
        let mut right = IndexMap::new();
        right.insert("app".into(), vec![2]);
        right.insert("vendor".into(), vec![3]);

        left.merge(right);

        assert_eq!(left["app"], vec![1, 2]);
        assert_eq!(left["vendor"], vec![3]);
        assert_eq!(left.keys().collect::<Vec<_>>(), vec!["app", "vendor"]);
    }

    #[test]
    fn merge_all_folds_in_order() {
        let merged = merge_all(vec![1], [vec![2], vec![3, 4]]);
        assert_eq!(merged, vec![1, 2, 3, 4]);
    }
}
