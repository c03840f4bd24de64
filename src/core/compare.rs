//! Name-set comparison — split two listings into left-only, right-only and
//! common names.
//!
//! The inputs are ordered sets, so every output group is produced already
//! sorted ascending by byte value and no extra sort pass is needed.

use std::ffi::OsString;
use std::path::Path;

use super::listing::{list_names, EntryNames};
use crate::error::DirectoryAccessError;

// ───────────────────────────────────────── result ────────────

/// Outcome of comparing two directory listings.
///
/// The three groups are pairwise disjoint.  `common` is `None` unless it was
/// requested, so "not computed" and "nothing in common" stay distinguishable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirComparison {
    /// Names only present in the left (reference) directory.
    pub left_only: Vec<OsString>,
    /// Names only present in the right (compared) directory.
    pub right_only: Vec<OsString>,
    /// Names present in both, if requested.
    pub common: Option<Vec<OsString>>,
}

impl DirComparison {
    /// Compare two already-collected name sets.
    pub fn new(left: &EntryNames, right: &EntryNames, show_common: bool) -> Self {
        let left_only = left.difference(right).cloned().collect();
        let right_only = right.difference(left).cloned().collect();
        let common = show_common.then(|| left.intersection(right).cloned().collect());

        Self {
            left_only,
            right_only,
            common,
        }
    }

    /// List both directories and compare them.
    ///
    /// The left side is listed first; if either listing fails nothing is
    /// compared and the error is returned as-is.
    pub fn between(
        left: &Path,
        right: &Path,
        show_common: bool,
    ) -> Result<Self, DirectoryAccessError> {
        let left_names = list_names(left)?;
        let right_names = list_names(right)?;
        let comparison = Self::new(&left_names, &right_names, show_common);

        tracing::debug!(
            "compare: left_only={} right_only={} common={:?}",
            comparison.left_only.len(),
            comparison.right_only.len(),
            comparison.common.as_ref().map(Vec::len),
        );
        Ok(comparison)
    }

    /// `true` when neither side has a name the other lacks.
    pub fn is_identical(&self) -> bool {
        self.left_only.is_empty() && self.right_only.is_empty()
    }

    /// Total number of lines a report of this comparison will contain.
    pub fn len(&self) -> usize {
        self.left_only.len() + self.right_only.len() + self.common.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn names(items: &[&str]) -> EntryNames {
        items.iter().map(OsString::from).collect()
    }

    fn vec_of(items: &[&str]) -> Vec<OsString> {
        items.iter().map(OsString::from).collect()
    }

    #[test]
    fn splits_left_only_and_right_only() {
        let left = names(&["a.txt", "b.txt", "c.txt"]);
        let right = names(&["b.txt", "c.txt", "d.txt"]);

        let cmp = DirComparison::new(&left, &right, false);
        assert_eq!(cmp.left_only, vec_of(&["a.txt"]));
        assert_eq!(cmp.right_only, vec_of(&["d.txt"]));
        assert_eq!(cmp.common, None);
        assert_eq!(cmp.len(), 2);
    }

    #[test]
    fn common_only_when_requested() {
        let left = names(&["a.txt", "b.txt", "c.txt"]);
        let right = names(&["b.txt", "c.txt", "d.txt"]);

        let cmp = DirComparison::new(&left, &right, true);
        assert_eq!(cmp.common, Some(vec_of(&["b.txt", "c.txt"])));
        assert_eq!(cmp.len(), 4);
    }

    #[test]
    fn identical_sets_without_common_are_empty() {
        let left = names(&["x", "y"]);
        let cmp = DirComparison::new(&left, &left.clone(), false);
        assert!(cmp.is_identical());
        assert!(cmp.is_empty());
    }

    #[test]
    fn identical_sets_with_common_are_not_empty() {
        let left = names(&["x", "y"]);
        let cmp = DirComparison::new(&left, &left.clone(), true);
        assert!(cmp.is_identical());
        assert_eq!(cmp.common, Some(vec_of(&["x", "y"])));
    }

    #[test]
    fn ordering_is_by_byte_value_not_case_folded() {
        let left = names(&["b", "B", "a", "_", "A"]);
        let cmp = DirComparison::new(&left, &EntryNames::new(), false);
        assert_eq!(cmp.left_only, vec_of(&["A", "B", "_", "a", "b"]));
    }

    #[test]
    fn between_lists_both_directories() {
        let left = tempfile::tempdir().unwrap();
        let right = tempfile::tempdir().unwrap();
        std::fs::write(left.path().join("only-left"), b"").unwrap();
        std::fs::write(left.path().join("shared"), b"").unwrap();
        std::fs::create_dir(right.path().join("shared")).unwrap();

        let cmp = DirComparison::between(left.path(), right.path(), true).unwrap();
        assert_eq!(cmp.left_only, vec_of(&["only-left"]));
        assert!(cmp.right_only.is_empty());
        assert_eq!(cmp.common, Some(vec_of(&["shared"])));
    }

    #[test]
    fn between_fails_when_right_is_missing() {
        let left = tempfile::tempdir().unwrap();
        let missing = left.path().join("nope");

        let err = DirComparison::between(left.path(), &missing, false).unwrap_err();
        assert_eq!(err.path, missing);
    }

    /// The same comparison seen from the other side.
    fn swapped(cmp: DirComparison) -> DirComparison {
        DirComparison {
            left_only: cmp.right_only,
            right_only: cmp.left_only,
            common: cmp.common,
        }
    }

    fn name_set() -> impl Strategy<Value = EntryNames> {
        prop::collection::btree_set("[a-zA-Z0-9._-]{1,6}", 0..12)
            .prop_map(|set| set.into_iter().map(OsString::from).collect())
    }

    proptest! {
        #[test]
        fn groups_are_disjoint_and_complete(left in name_set(), right in name_set()) {
            let cmp = DirComparison::new(&left, &right, true);
            let common = cmp.common.clone().unwrap_or_default();

            let l: BTreeSet<_> = cmp.left_only.iter().cloned().collect();
            let r: BTreeSet<_> = cmp.right_only.iter().cloned().collect();
            let c: BTreeSet<_> = common.iter().cloned().collect();

            prop_assert!(l.is_disjoint(&r));
            prop_assert!(l.is_disjoint(&c));
            prop_assert!(r.is_disjoint(&c));

            let all: BTreeSet<_> = l.union(&r).cloned().collect::<BTreeSet<_>>()
                .union(&c).cloned().collect();
            let expected: BTreeSet<_> = left.union(&right).cloned().collect();
            prop_assert_eq!(all, expected);
        }

        #[test]
        fn without_common_covers_symmetric_difference(left in name_set(), right in name_set()) {
            let cmp = DirComparison::new(&left, &right, false);
            let mut shown: Vec<_> = cmp.left_only.iter().chain(&cmp.right_only).cloned().collect();
            shown.sort();
            let expected: Vec<_> = left.symmetric_difference(&right).cloned().collect();
            prop_assert_eq!(shown, expected);
        }

        #[test]
        fn groups_are_sorted(left in name_set(), right in name_set()) {
            let cmp = DirComparison::new(&left, &right, true);
            let common = cmp.common.clone().unwrap_or_default();
            for group in [&cmp.left_only, &cmp.right_only, &common] {
                prop_assert!(group.windows(2).all(|w| w[0] <= w[1]));
            }
        }

        #[test]
        fn swapping_sides_swaps_groups(left in name_set(), right in name_set()) {
            let forward = DirComparison::new(&left, &right, true);
            let backward = DirComparison::new(&right, &left, true);
            prop_assert_eq!(swapped(forward), backward);
        }
    }
}
